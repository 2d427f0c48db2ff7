//! Single-lookahead scanner driven by a [`PatternTable`].
//!
//! ## Module Structure
//!
//! - `tokens` - Token and span types
//! - `patterns` - Matching rules and the ordered pattern table
//!
//! ## Notes
//! - Exactly one token of lookahead is buffered until end of input.
//! - `position` only moves forward; every successful match consumes at least one byte, so scanning always terminates.
//! - Whitespace is anything `char::is_whitespace` accepts and never produces tokens.

mod patterns;
mod tokens;

pub use patterns::{MatchRule, Pattern, PatternTable};
pub use tokens::{Span, Token};

use crate::diagnostics::SyntaxError;

/// Scanner state over one input buffer.
pub struct Scanner<'a> {
    input: &'a str,
    table: &'a PatternTable,
    position: usize,
    line: usize,
    column: usize,
    lookahead: Option<Token>,
    current: Option<Token>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner and compute the first lookahead token.
    ///
    /// ## Errors
    /// Returns [`SyntaxError::UnrecognizedInput`] if the first token cannot be scanned.
    pub fn new(input: &'a str, table: &'a PatternTable) -> Result<Self, SyntaxError> {
        let mut scanner = Self {
            input,
            table,
            position: 0,
            line: 1,
            column: 1,
            lookahead: None,
            current: None,
        };
        scanner.lookahead = scanner.advance()?;
        Ok(scanner)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    /// Move `position` past `len` bytes, keeping line/column in step.
    fn bump(&mut self, len: usize) {
        for c in self.input[self.position..self.position + len].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.position += len;
    }

    fn skip_whitespace(&mut self) {
        let skipped = self.input[self.position..]
            .char_indices()
            .find(|(_, c)| !c.is_whitespace())
            .map_or(self.input.len() - self.position, |(i, _)| i);
        self.bump(skipped);
    }

    /// Scan the next token, or `None` at end of input.
    fn advance(&mut self) -> Result<Option<Token>, SyntaxError> {
        self.skip_whitespace();
        if self.position >= self.input.len() {
            return Ok(None);
        }

        let start = self.position;
        let (line, column) = (self.line, self.column);
        let Some((pattern, len)) = self.table.first_match(self.input, start) else {
            let found = self.input[start..].chars().next().unwrap_or_default();
            return Err(SyntaxError::unrecognized(found, start, line, column));
        };

        let text = &self.input[start..start + len];
        let kind = self.table.resolve_kind(&pattern.name, text);
        self.bump(len);

        let token = Token::new(kind, text, Span::new(start, start + len), line, column);
        tracing::trace!(kind = %token.kind, text = %token.text, line, column, "scanned token");
        Ok(Some(token))
    }

    // ========================================================================
    // Consumption primitives
    // ========================================================================

    /// Consume the lookahead if its kind is one of `kinds`.
    ///
    /// ## Returns
    /// - `Ok(Some(token))`: the consumed token, which also becomes [`Scanner::current`].
    /// - `Ok(None)`: no match; the lookahead is left untouched.
    ///
    /// ## Errors
    /// Scanning the replacement lookahead may fail with [`SyntaxError::UnrecognizedInput`].
    pub fn accept(&mut self, kinds: &[&str]) -> Result<Option<Token>, SyntaxError> {
        if !self.lookahead.as_ref().is_some_and(|t| t.is_any(kinds)) {
            return Ok(None);
        }
        let next = self.advance()?;
        let consumed = std::mem::replace(&mut self.lookahead, next);
        self.current.clone_from(&consumed);
        Ok(consumed)
    }

    /// Boolean form of [`Scanner::accept`].
    pub fn matches(&mut self, kinds: &[&str]) -> Result<bool, SyntaxError> {
        Ok(self.accept(kinds)?.is_some())
    }

    /// Consume a token of one of `kinds` or fail.
    ///
    /// ## Errors
    /// [`SyntaxError::UnexpectedToken`] naming `kinds` and the actual lookahead (or end of input).
    pub fn expect(&mut self, kinds: &[&str]) -> Result<Token, SyntaxError> {
        match self.accept(kinds)? {
            Some(token) => Ok(token),
            None => Err(self.unexpected(kinds)),
        }
    }

    /// Build an `UnexpectedToken` error against the current lookahead.
    pub fn unexpected(&self, expected: &[&str]) -> SyntaxError {
        SyntaxError::unexpected(expected, self.lookahead.clone(), self.input.len())
    }

    pub fn at_end(&self) -> bool {
        self.lookahead.is_none()
    }

    /// The buffered lookahead token, if any.
    pub fn peek(&self) -> Option<&Token> {
        self.lookahead.as_ref()
    }

    /// Return `true` if the lookahead's kind is one of `kinds`, without consuming it.
    pub fn check(&self, kinds: &[&str]) -> bool {
        self.lookahead.as_ref().is_some_and(|t| t.is_any(kinds))
    }

    /// The most recently consumed token.
    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Drain every remaining token, lookahead included.
    pub fn into_tokens(mut self) -> Result<Vec<Token>, SyntaxError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.lookahead.take() {
            tokens.push(token);
            self.lookahead = self.advance()?;
        }
        Ok(tokens)
    }
}

/// Convenience function to scan a whole source string.
///
/// This is a shorthand for `Scanner::new(source, table)?.into_tokens()`.
#[tracing::instrument(skip_all, fields(source_len = source.len(), pattern_count = table.len()))]
pub fn tokenize(source: &str, table: &PatternTable) -> Result<Vec<Token>, SyntaxError> {
    Scanner::new(source, table)?.into_tokens()
}

// ============================================================================
// TESTS
// ============================================================================
