//! Token types for the tdop scanner.
//!
//! Token kinds are plain strings (the owning pattern's name), so the same scanner serves any grammar the caller
//! assembles in a [`super::PatternTable`].

use std::fmt;

// ============================================================================
// SPANS
// ============================================================================

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

// ============================================================================
// TOKENS
// ============================================================================

/// A terminal: the kind of the pattern that matched plus the exact text it matched.
///
/// ## Notes
/// - `line` and `column` are 1-based; `column` counts characters, not bytes.
/// - Location is diagnostic only. Two tokens with the same kind and text render identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: String,
    pub text: String,
    pub span: Span,
    pub line: usize,
    pub column: usize,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: impl Into<String>, text: impl Into<String>, span: Span, line: usize, column: usize) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
            span,
            line,
            column,
        }
    }

    /// Construct a token with no meaningful source location (tests, synthetic nodes).
    pub fn synthetic(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(kind, text, Span::default(), 0, 0)
    }

    /// Copy this token under a new kind and text, keeping its location.
    ///
    /// Used for synthetic tree labels such as the `list` node of a `select`.
    pub fn rename(&self, kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(kind, text, self.span, self.line, self.column)
    }

    /// Return `true` if this token's kind is one of `kinds`.
    pub fn is_any(&self, kinds: &[&str]) -> bool {
        kinds.contains(&self.kind.as_str())
    }

    /// Text used by both tree serializations.
    ///
    /// Fixed-spelling tokens (keywords, punctuation, operators) collapse to their kind; variable-spelling tokens
    /// (identifiers, literals) render as `KIND(text)`.
    ///
    /// ## Examples
    /// ```rust
    /// use tdop_syntax::Token;
    ///
    /// assert_eq!(Token::synthetic("INT", "5").display_text(), "INT(5)");
    /// assert_eq!(Token::synthetic("BREAK", "break").display_text(), "BREAK");
    /// assert_eq!(Token::synthetic("==", "==").display_text(), "==");
    /// ```
    pub fn display_text(&self) -> String {
        if self.kind.to_lowercase() == self.text {
            self.kind.clone()
        } else {
            format!("{}({})", self.kind, self.text)
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}
