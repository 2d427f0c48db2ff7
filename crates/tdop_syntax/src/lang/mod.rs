//! Vocabulary registries for the tdop statement language.
//!
//! Callers work with **stable IDs** (`KeywordId`, `OperatorId`, `PunctuationId`) and look up spellings, token kinds
//! and precedence through these tables instead of scattering string literals.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no scanner types, no IO, no side effects.
//! - The scanner does not consult them. [`crate::grammar`] derives the default pattern and precedence tables from
//!   them, and the statement parser uses them for the kinds it dispatches on.
//!
//! ## Examples
//! ```rust
//! use tdop_syntax::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(keywords::kind(KeywordId::While), "WHILE");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;

/// Token kind of integer literals.
pub const INT: &str = "INT";
/// Token kind of identifiers.
pub const ID: &str = "ID";
