//! Parser for the tdop statement language.
//!
//! A recursive-descent statement parser on top of a precedence-climbing expression parser. Parsing is fail-fast:
//! the first malformed construct aborts with a [`SyntaxError`] and no partial tree is produced.
//!
//! ## Examples
//!
//! ```rust
//! use tdop_syntax::parser;
//!
//! let tree = parser::parse("x = 1+2*3;").unwrap();
//! assert_eq!(tree.to_string(), "(= ID(x) (+ INT(1) (* INT(2) INT(3))))");
//! ```

use crate::config::ParserConfig;
use crate::diagnostics::SyntaxError;
use crate::grammar::{self, GROUP_CLOSE, GROUP_OPEN};
use crate::lang::keywords::{self, KeywordId};
use crate::lang::operators::{self, OperatorId};
use crate::lang::punctuation::{self, PunctuationId};
use crate::lang::ID;
use crate::scanner::{PatternTable, Scanner, Token};
use crate::tree::Tree;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
