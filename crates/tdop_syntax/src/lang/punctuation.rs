//! Punctuation of the statement language: delimiters and the statement terminator.
//!
//! Each punctuation token scans with its own spelling as kind, so it displays as itself in trees.

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    Semicolon,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LParen,
    RParen,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub spelling: &'static str,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Semicolon, ";"),
    info(PunctuationId::LBrace, "{"),
    info(PunctuationId::RBrace, "}"),
    info(PunctuationId::LBracket, "["),
    info(PunctuationId::RBracket, "]"),
    info(PunctuationId::LParen, "("),
    info(PunctuationId::RParen, ")"),
];

/// Return the spelling (and token kind) of a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).spelling
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("INVARIANT: every PunctuationId has a registry entry")
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.spelling == s).map(|p| p.id)
}

const fn info(id: PunctuationId, spelling: &'static str) -> PunctuationInfo {
    PunctuationInfo { id, spelling }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_round_trip() {
        for p in PUNCTUATION {
            assert_eq!(from_str(as_str(p.id)), Some(p.id));
        }
        assert_eq!(from_str("<"), None);
    }
}
