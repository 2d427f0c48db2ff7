//! Diagnostics and error reporting for tdop.
//!
//! Errors form a small closed taxonomy so callers can tell lexical failures from syntactic ones:
//!
//! | Variant             | Phase   | Raised by                                  |
//! |---------------------|---------|--------------------------------------------|
//! | `UnrecognizedInput` | lexical | `Scanner::advance`                         |
//! | `UnexpectedToken`   | syntax  | `Scanner::expect` (includes end of input)  |
//! | `TrailingInput`     | syntax  | `Parser::parse` after a complete statement |
//! | `NestingTooDeep`    | syntax  | `Parser` when nesting passes `max_depth`   |
//!
//! Every variant implements [`miette::Diagnostic`], so the CLI can render it against the source text.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::scanner::{Span, Token};

/// A fatal scanning or parsing failure.
///
/// ## Notes
/// - There is no recovery: the first error aborts the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    /// No pattern in the table matches at `offset`.
    #[error("unrecognized input '{found}' at line {line}, column {column}")]
    #[diagnostic(
        code(tdop::syntax::unrecognized_input),
        help("no pattern in the table matches this character")
    )]
    UnrecognizedInput {
        found: char,
        offset: usize,
        line: usize,
        column: usize,
        #[label("unrecognized character")]
        span: SourceSpan,
    },

    /// The lookahead is not one of the expected kinds (or input ended early).
    #[error("expected {}, found {}", .expected.join(" or "), describe(.found.as_ref()))]
    #[diagnostic(code(tdop::syntax::unexpected_token))]
    UnexpectedToken {
        expected: Vec<String>,
        found: Option<Token>,
        #[label("unexpected token")]
        span: SourceSpan,
    },

    /// A complete statement was parsed but tokens remain.
    #[error("unexpected trailing input: {found}")]
    #[diagnostic(
        code(tdop::syntax::trailing_input),
        help("a program is exactly one statement; wrap several statements in `{{ ... }}`")
    )]
    TrailingInput {
        found: Token,
        #[label("input continues here")]
        span: SourceSpan,
    },

    /// Blocks, groups or prefix operators nest deeper than the configured limit.
    #[error("nesting deeper than {limit} levels at {found}")]
    #[diagnostic(
        code(tdop::syntax::nesting_too_deep),
        help("flatten the program or raise `ParserConfig::max_depth`")
    )]
    NestingTooDeep {
        limit: usize,
        found: Token,
        #[label("too deeply nested")]
        span: SourceSpan,
    },
}

impl SyntaxError {
    pub fn unrecognized(found: char, offset: usize, line: usize, column: usize) -> Self {
        Self::UnrecognizedInput {
            found,
            offset,
            line,
            column,
            span: (offset, found.len_utf8()).into(),
        }
    }

    /// Build an `UnexpectedToken` error.
    ///
    /// ## Parameters
    /// - `expected`: kinds that would have been accepted, in the order they were tried.
    /// - `found`: the lookahead, or `None` at end of input.
    /// - `eof`: byte offset of the end of input, used for the label when `found` is `None`.
    pub fn unexpected(expected: &[&str], found: Option<Token>, eof: usize) -> Self {
        let span = found.as_ref().map_or_else(|| Span::new(eof, eof), |t| t.span);
        Self::UnexpectedToken {
            expected: expected.iter().map(|k| (*k).to_string()).collect(),
            found,
            span: span.into(),
        }
    }

    pub fn trailing(found: Token) -> Self {
        let span = found.span.into();
        Self::TrailingInput { found, span }
    }

    pub fn too_deep(limit: usize, found: Token) -> Self {
        let span = found.span.into();
        Self::NestingTooDeep { limit, found, span }
    }

    /// `true` for failures raised while scanning, `false` for grammar violations.
    pub fn is_lexical(&self) -> bool {
        matches!(self, Self::UnrecognizedInput { .. })
    }

    /// Source location the error points at.
    pub fn span(&self) -> SourceSpan {
        match self {
            Self::UnrecognizedInput { span, .. }
            | Self::UnexpectedToken { span, .. }
            | Self::TrailingInput { span, .. }
            | Self::NestingTooDeep { span, .. } => *span,
        }
    }
}

fn describe(found: Option<&Token>) -> String {
    match found {
        Some(token) => token.display_text(),
        None => "end of input".to_string(),
    }
}

/// Failure to build a pattern table.
#[derive(Debug, Error, Diagnostic)]
pub enum PatternError {
    #[error("invalid regular expression for pattern '{name}'")]
    #[diagnostic(code(tdop::pattern::invalid_regex))]
    InvalidRegex {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("pattern '{name}' has an empty literal spelling")]
    #[diagnostic(
        code(tdop::pattern::empty_literal),
        help("a pattern must consume at least one character")
    )]
    EmptyLiteral { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_end_of_input_message() {
        let err = SyntaxError::unexpected(&[";"], None, 7);
        assert_eq!(err.to_string(), "expected ;, found end of input");
        assert_eq!(err.span(), SourceSpan::from((7, 0)));
        assert!(!err.is_lexical());
    }

    #[test]
    fn test_unexpected_token_lists_all_expected_kinds() {
        let found = Token::new(";", ";", Span::new(4, 5), 1, 5);
        let err = SyntaxError::unexpected(&["(", "-", "INT", "ID"], Some(found), 5);
        assert_eq!(err.to_string(), "expected ( or - or INT or ID, found ;");
        assert_eq!(err.span(), SourceSpan::from((4, 1)));
    }

    #[test]
    fn test_too_deep_message() {
        let found = Token::new("(", "(", Span::new(9, 10), 1, 10);
        let err = SyntaxError::too_deep(256, found);
        assert_eq!(err.to_string(), "nesting deeper than 256 levels at (");
        assert_eq!(err.span(), SourceSpan::from((9, 1)));
        assert!(!err.is_lexical());
    }

    #[test]
    fn test_unrecognized_is_lexical() {
        let err = SyntaxError::unrecognized('@', 3, 1, 4);
        assert!(err.is_lexical());
        assert_eq!(err.to_string(), "unrecognized input '@' at line 1, column 4");
    }
}
