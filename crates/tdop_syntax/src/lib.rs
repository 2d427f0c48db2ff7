//! Syntax frontend for the tdop toy language: patterns, scanner, syntax tree, parsers, diagnostics.
//!
//! The pipeline is text → [`scanner::Scanner`] (driven by a caller-supplied [`scanner::PatternTable`]) →
//! [`parser::Parser`] → [`tree::Tree`] → bracketed text or Graphviz `dot`.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: no scoping, type checking, constant folding, or evaluation.
//! - Parsing is fail-fast. The first error aborts the parse and no partial tree is returned.
//! - Vocabulary identity (keywords/operators/punctuation) comes from the [`lang`] registries; the scanner itself
//!   hardcodes no token kinds.
//!
//! ## Examples
//! ```rust
//! use tdop_syntax::parser;
//!
//! let tree = parser::parse("{ i = 0; while i<10 { i = i+1; } }").unwrap();
//! assert_eq!(
//!     tree.to_string(),
//!     "({ (= ID(i) INT(0)) (WHILE (< ID(i) INT(10)) ({ (= ID(i) (+ ID(i) INT(1))))))"
//! );
//! assert!(tree.to_dot().starts_with("digraph ast {"));
//! ```

pub mod config;
pub mod diagnostics;
pub mod grammar;
pub mod lang;
pub mod parser;
pub mod scanner;
pub mod sql;
pub mod tree;

pub use config::{DotConfig, MAX_NESTING_DEPTH, ParserConfig, PrecedenceTable};
pub use diagnostics::{PatternError, SyntaxError};
pub use scanner::{MatchRule, Pattern, PatternTable, Scanner, Span, Token};
pub use tree::Tree;
