//! Pattern table: the caller-supplied lexical grammar.
//!
//! A [`PatternTable`] is an ordered list of named [`MatchRule`]s. The scanner tries them in order and the **first**
//! rule that matches wins; this is not longest-match tokenization. Table order is therefore part of the grammar:
//! - a multi-character operator must precede any single-character prefix of it (`==` before `=`),
//! - keyword patterns must precede the identifier pattern, unless keywords are remapped with
//!   [`PatternTable::with_keywords`].
//!
//! ## Examples
//! ```rust
//! use tdop_syntax::PatternTable;
//!
//! let table = PatternTable::new()
//!     .regex("INT", "[0-9]+")?
//!     .literal("==", "==")?
//!     .literal("=", "=")?;
//! assert_eq!(table.first_match("x == 1", 2).map(|(p, len)| (p.name.as_str(), len)), Some(("==", 2)));
//! # Ok::<(), tdop_syntax::PatternError>(())
//! ```

use regex::Regex;

use crate::diagnostics::PatternError;

/// How a pattern recognizes text.
#[derive(Debug, Clone)]
pub enum MatchRule {
    /// Exact spelling.
    Literal(String),
    /// Regular expression, compiled anchored at the start of the remaining input.
    Regex(Regex),
}

impl MatchRule {
    /// Compile `source` as an anchored regular expression.
    pub fn regex(source: &str) -> Result<Self, regex::Error> {
        Regex::new(&format!("^(?:{source})")).map(Self::Regex)
    }

    /// Try to match at exactly `offset`.
    ///
    /// ## Returns
    /// - `Some(len)`: the number of bytes consumed (always `> 0`).
    /// - `None`: no match, an empty match, or `offset` is not a char boundary.
    pub fn match_at(&self, text: &str, offset: usize) -> Option<usize> {
        let rest = text.get(offset..)?;
        let len = match self {
            MatchRule::Literal(spelling) => rest.starts_with(spelling.as_str()).then_some(spelling.len())?,
            MatchRule::Regex(re) => re.find(rest)?.end(),
        };
        (len > 0).then_some(len)
    }
}

/// A named lexical rule. The name becomes the kind of every token it produces.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub name: String,
    pub rule: MatchRule,
}

impl Pattern {
    pub fn new(name: impl Into<String>, rule: MatchRule) -> Self {
        Self {
            name: name.into(),
            rule,
        }
    }

    pub fn match_at(&self, text: &str, offset: usize) -> Option<usize> {
        self.rule.match_at(text, offset)
    }
}

/// Words that are re-kinded after a token of `kind` is matched.
#[derive(Debug, Clone)]
struct KeywordSet {
    kind: String,
    words: Vec<String>,
}

/// Ordered lexical grammar consumed by [`super::Scanner`].
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    patterns: Vec<Pattern>,
    keywords: Vec<KeywordSet>,
}

impl PatternTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pattern that matches `spelling` exactly.
    pub fn literal(mut self, name: impl Into<String>, spelling: impl Into<String>) -> Result<Self, PatternError> {
        let name = name.into();
        let spelling = spelling.into();
        if spelling.is_empty() {
            return Err(PatternError::EmptyLiteral { name });
        }
        self.patterns.push(Pattern::new(name, MatchRule::Literal(spelling)));
        Ok(self)
    }

    /// Append a pattern defined by a regular expression.
    pub fn regex(mut self, name: impl Into<String>, source: &str) -> Result<Self, PatternError> {
        let name = name.into();
        let rule = match MatchRule::regex(source) {
            Ok(rule) => rule,
            Err(source) => return Err(PatternError::InvalidRegex { name, source }),
        };
        self.patterns.push(Pattern::new(name, rule));
        Ok(self)
    }

    /// Append an already-built pattern.
    pub fn push(&mut self, pattern: Pattern) {
        self.patterns.push(pattern);
    }

    /// Re-kind tokens of `kind` whose text is one of `words`.
    ///
    /// A matching token gets the upper-cased word as its kind, so `while` scanned by the `ID` pattern becomes a
    /// `WHILE` token. May be called several times; lists accumulate.
    pub fn with_keywords<I, S>(mut self, kind: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kind = kind.into();
        let words = words.into_iter().map(Into::into);
        match self.keywords.iter_mut().find(|set| set.kind == kind) {
            Some(set) => set.words.extend(words),
            None => self.keywords.push(KeywordSet {
                kind,
                words: words.collect(),
            }),
        }
        self
    }

    /// First pattern (in table order) matching at `offset`, with the matched length.
    pub fn first_match(&self, text: &str, offset: usize) -> Option<(&Pattern, usize)> {
        self.patterns
            .iter()
            .find_map(|p| p.match_at(text, offset).map(|len| (p, len)))
    }

    /// Final token kind for `text` matched by the pattern named `kind`, after keyword remapping.
    pub fn resolve_kind(&self, kind: &str, text: &str) -> String {
        let is_keyword = self
            .keywords
            .iter()
            .any(|set| set.kind == kind && set.words.iter().any(|w| w == text));
        if is_keyword {
            text.to_uppercase()
        } else {
            kind.to_string()
        }
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_is_anchored_at_offset() {
        let rule = MatchRule::regex("[0-9]+").unwrap();
        assert_eq!(rule.match_at("ab12", 0), None);
        assert_eq!(rule.match_at("ab12", 2), Some(2));
        assert_eq!(rule.match_at("ab12", 4), None);
    }

    #[test]
    fn test_empty_match_is_no_match() {
        let rule = MatchRule::regex("[0-9]*").unwrap();
        assert_eq!(rule.match_at("abc", 0), None);
    }

    #[test]
    fn test_literal_rule() {
        let rule = MatchRule::Literal("&&".to_string());
        assert_eq!(rule.match_at("a && b", 2), Some(2));
        assert_eq!(rule.match_at("a & b", 2), None);
    }

    #[test]
    fn test_offset_inside_multibyte_char_is_no_match() {
        let rule = MatchRule::regex(".").unwrap();
        assert_eq!(rule.match_at("é", 1), None);
    }

    #[test]
    fn test_first_match_wins_over_longest() {
        let shorter_first = PatternTable::new().literal("=", "=").unwrap().literal("==", "==").unwrap();
        let (p, len) = shorter_first.first_match("==", 0).unwrap();
        assert_eq!((p.name.as_str(), len), ("=", 1));

        let longer_first = PatternTable::new().literal("==", "==").unwrap().literal("=", "=").unwrap();
        let (p, len) = longer_first.first_match("==", 0).unwrap();
        assert_eq!((p.name.as_str(), len), ("==", 2));
    }

    #[test]
    fn test_invalid_regex_reports_pattern_name() {
        let err = PatternTable::new().regex("BAD", "(").unwrap_err();
        assert!(matches!(err, PatternError::InvalidRegex { ref name, .. } if name == "BAD"));
    }

    #[test]
    fn test_empty_literal_rejected() {
        let err = PatternTable::new().literal("X", "").unwrap_err();
        assert!(matches!(err, PatternError::EmptyLiteral { .. }));
    }

    #[test]
    fn test_keyword_remapping_accumulates() {
        let table = PatternTable::new()
            .with_keywords("ID", ["if"])
            .with_keywords("ID", ["while"]);
        assert_eq!(table.resolve_kind("ID", "if"), "IF");
        assert_eq!(table.resolve_kind("ID", "while"), "WHILE");
        assert_eq!(table.resolve_kind("ID", "iffy"), "ID");
        assert_eq!(table.resolve_kind("INT", "if"), "INT");
    }
}
