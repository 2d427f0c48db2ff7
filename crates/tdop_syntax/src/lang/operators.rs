//! Operator vocabulary and binary precedence.
//!
//! ## Notes
//! - `level` is the index into the precedence table, lowest binding first: logical (0), comparison (1),
//!   additive (2), multiplicative (3). Assignment has no level; it is statement syntax.
//! - Every binary operator is left-associative. Operators sharing a level are not distinguished further.
//!
//! ## Examples
//! ```rust
//! use tdop_syntax::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("<="), Some(OperatorId::LtEq));
//! assert_eq!(operators::info_for(OperatorId::Star).level, Some(3));
//! ```

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Logical
    AndAnd,
    OrOr,

    // Comparison
    EqEq,
    NotEq,
    Gt,
    Lt,
    GtEq,
    LtEq,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Assignment
    Eq,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    /// Binary precedence level, or `None` if the operator is not a binary expression operator.
    pub level: Option<usize>,
    /// Whether the operator may also appear in prefix position (`-x`).
    pub prefix: bool,
}

/// Number of binary precedence levels.
pub const LEVELS: usize = 4;

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::AndAnd, "&&", Some(0), false),
    op(OperatorId::OrOr, "||", Some(0), false),
    op(OperatorId::EqEq, "==", Some(1), false),
    op(OperatorId::NotEq, "!=", Some(1), false),
    op(OperatorId::Gt, ">", Some(1), false),
    op(OperatorId::Lt, "<", Some(1), false),
    op(OperatorId::GtEq, ">=", Some(1), false),
    op(OperatorId::LtEq, "<=", Some(1), false),
    op(OperatorId::Plus, "+", Some(2), false),
    op(OperatorId::Minus, "-", Some(2), true),
    op(OperatorId::Star, "*", Some(3), false),
    op(OperatorId::Slash, "/", Some(3), false),
    op(OperatorId::Percent, "%", Some(3), false),
    op(OperatorId::Eq, "=", None, false),
];

/// Return the spelling (and token kind) of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: every OperatorId has a registry entry")
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Spellings of the binary operators at `level`, in registry order.
pub fn at_level(level: usize) -> impl Iterator<Item = &'static str> {
    OPERATORS
        .iter()
        .filter(move |o| o.level == Some(level))
        .map(|o| o.spelling)
}

/// Spellings of the operators usable in prefix position.
pub fn prefix() -> impl Iterator<Item = &'static str> {
    OPERATORS.iter().filter(|o| o.prefix).map(|o| o.spelling)
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spelling: &'static str, level: Option<usize>, prefix: bool) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        level,
        prefix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_dense() {
        for level in 0..LEVELS {
            assert!(at_level(level).next().is_some(), "level {level} has no operators");
        }
        assert!(OPERATORS.iter().all(|o| o.level.is_none_or(|l| l < LEVELS)));
    }

    #[test]
    fn test_comparison_level_order() {
        let comparison: Vec<_> = at_level(1).collect();
        assert_eq!(comparison, vec!["==", "!=", ">", "<", ">=", "<="]);
    }

    #[test]
    fn test_only_minus_is_prefix() {
        assert_eq!(prefix().collect::<Vec<_>>(), vec!["-"]);
    }
}
