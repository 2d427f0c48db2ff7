//! Reserved words of the statement language.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - A keyword's token kind is its upper-cased spelling, which is what
//!   [`crate::scanner::PatternTable::with_keywords`] produces when it re-kinds an identifier.

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    If,
    Else,
    While,
    Break,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub spelling: &'static str,
    pub kind: &'static str,
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    kw(KeywordId::If, "if", "IF"),
    kw(KeywordId::Else, "else", "ELSE"),
    kw(KeywordId::While, "while", "WHILE"),
    kw(KeywordId::Break, "break", "BREAK"),
];

/// Return the source spelling of a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).spelling
}

/// Return the token kind a keyword scans as.
pub fn kind(id: KeywordId) -> &'static str {
    info_for(id).kind
}

/// Return the full metadata entry for a keyword.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a registry entry")
}

/// Resolve a spelling to its keyword id, if reserved.
pub fn from_str(spelling: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.spelling == spelling).map(|k| k.id)
}

/// All keyword spellings, in registry order.
pub fn spellings() -> impl Iterator<Item = &'static str> {
    KEYWORDS.iter().map(|k| k.spelling)
}

const fn kw(id: KeywordId, spelling: &'static str, kind: &'static str) -> KeywordInfo {
    KeywordInfo { id, spelling, kind }
}
