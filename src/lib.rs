#![forbid(unsafe_code)]
//! tdop: a top-down operator precedence parser for a small imperative language.
//!
//! The syntax frontend lives in the `tdop_syntax` crate; this crate adds the command-line harness that reads
//! source text, parses it, and prints the tree as bracketed text or as a Graphviz document.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: If a panic represents a bug (e.g. a built-in pattern failing to compile), use
//!   `.expect("INVARIANT: reason")` with a clear explanation.

pub mod cli;

pub use tdop_syntax::{grammar, lang, parser, scanner, sql, tree};
pub use tdop_syntax::{DotConfig, ParserConfig, PrecedenceTable, SyntaxError, Token, Tree};
