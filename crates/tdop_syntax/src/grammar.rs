//! Built-in lexical grammar and precedence for the statement language.
//!
//! Everything here is derived from the [`crate::lang`] registries. The scanner and expression parser accept any
//! table; these are the tables the statement parser and the CLI use by default.

use crate::config::PrecedenceTable;
use crate::lang::{self, keywords, operators, punctuation};
use crate::scanner::{MatchRule, Pattern, PatternTable};

/// Kind that opens a parenthesized sub-expression.
pub const GROUP_OPEN: &str = "(";
/// Kind that closes a parenthesized sub-expression.
pub const GROUP_CLOSE: &str = ")";

/// Program parsed by the CLI when no input is given.
pub const SAMPLE_PROGRAM: &str = "\
{
    i = 0;
    while i<10 {
        a = 2*3;
        if i % 1 == 0 {
            a = a + 1;
        } else {
            a = a + 2;
        }
        i = i+1;
    }
}
";

const INT_PATTERN: &str = "[0-9]+";
const ID_PATTERN: &str = "[a-zA-Z][a-zA-Z0-9_]*";

/// Pattern table for the statement language.
///
/// ## Notes
/// - `INT` and `ID` come first; keywords are recognized by re-kinding `ID` tokens, so `iffy` stays one identifier.
/// - Fixed spellings are ordered longest first, so every multi-character operator precedes its one-character prefix
///   (`<=` before `<`, `==` before `=`). Registry order breaks ties.
pub fn statement_patterns() -> PatternTable {
    let mut table = PatternTable::new().with_keywords(lang::ID, keywords::spellings());
    table.push(builtin_regex(lang::INT, INT_PATTERN));
    table.push(builtin_regex(lang::ID, ID_PATTERN));

    let mut spellings: Vec<&'static str> = punctuation::PUNCTUATION
        .iter()
        .map(|p| p.spelling)
        .chain(operators::OPERATORS.iter().map(|o| o.spelling))
        .collect();
    spellings.sort_by_key(|s| std::cmp::Reverse(s.len()));
    for spelling in spellings {
        table.push(Pattern::new(spelling, MatchRule::Literal(spelling.to_string())));
    }
    table
}

/// Binary precedence levels for the statement language, lowest first.
pub fn statement_precedence() -> PrecedenceTable {
    PrecedenceTable::new((0..operators::LEVELS).map(operators::at_level))
}

/// Kinds that form a leaf operand.
pub fn statement_operands() -> Vec<String> {
    vec![lang::INT.to_string(), lang::ID.to_string()]
}

/// Kinds usable as prefix operators.
pub fn statement_prefix_operators() -> Vec<String> {
    operators::prefix().map(str::to_string).collect()
}

fn builtin_regex(name: &str, source: &str) -> Pattern {
    let rule = MatchRule::regex(source).expect("INVARIANT: built-in patterns are valid regular expressions");
    Pattern::new(name, rule)
}
