//! A small SQL subset parsed with the same scanner and expression engine.
//!
//! This grammar exists to show that the expression parser is driven entirely by configuration: it swaps in its own
//! pattern table (with keyword remapping), precedence table and operand kinds.
//!
//! ```text
//! query  := select | update
//! select := 'select' expr (',' expr)* 'from' ID 'where' expr
//! update := 'update' ID 'set' assign (',' assign)* 'where' expr
//! assign := ID '=' expr
//! ```
//!
//! ## Notes
//! - Keywords are case-insensitive: ASCII letters are lower-cased before scanning (string literals included), which
//!   keeps byte offsets aligned with the original query.
//! - The table name of an `update` is checked but not kept in the tree.
//!
//! ## Examples
//! ```rust
//! let tree = tdop_syntax::sql::parse("SELECT 1+2*i FROM foo WHERE i == 0").unwrap();
//! assert_eq!(
//!     tree.to_string(),
//!     "(SELECT (list (+ INT(1) (* INT(2) ID(i)))) ID(foo) (== ID(i) INT(0)))"
//! );
//! ```

use crate::config::{ParserConfig, PrecedenceTable};
use crate::diagnostics::SyntaxError;
use crate::lang;
use crate::parser::Parser;
use crate::scanner::{MatchRule, Pattern, PatternTable, Scanner, Token};
use crate::tree::Tree;

const SELECT: &str = "SELECT";
const UPDATE: &str = "UPDATE";
const FROM: &str = "FROM";
const SET: &str = "SET";
const WHERE: &str = "WHERE";
const STRING: &str = "STRING";
const COMMA: &str = ",";
const ASSIGN: &str = "=";

/// Reserved words, as written after lower-casing.
pub const KEYWORDS: &[&str] = &["update", "select", "from", "set", "where", "or", "and"];

/// Pattern table for the SQL subset. Order matters: first pattern that matches wins.
pub fn sql_patterns() -> PatternTable {
    let mut table = PatternTable::new().with_keywords(lang::ID, KEYWORDS.iter().copied());
    for spelling in ["(", ")", "&&", "||", "!=", "==", "=", "+", "-", "*", "/", ",", "%"] {
        table.push(Pattern::new(spelling, MatchRule::Literal(spelling.to_string())));
    }
    for (name, source) in [
        (lang::INT, "[0-9]+"),
        (lang::ID, "[a-zA-Z_][a-zA-Z_0-9]*"),
        (STRING, "'[^']*'"),
    ] {
        let rule = MatchRule::regex(source).expect("INVARIANT: built-in patterns are valid regular expressions");
        table.push(Pattern::new(name, rule));
    }
    table
}

/// Expression configuration for the SQL subset: word operators at the lowest level, no prefix operators.
pub fn sql_config() -> ParserConfig {
    ParserConfig::new()
        .with_precedence(PrecedenceTable::new([
            vec!["AND", "OR"],
            vec!["==", "!="],
            vec!["+", "-"],
            vec!["*", "/", "%"],
        ]))
        .with_operands([lang::ID, STRING, lang::INT])
        .with_prefix_operators(Vec::<String>::new())
}

/// Lower-case ASCII letters so keywords match regardless of case.
pub fn normalize(query: &str) -> String {
    query.to_ascii_lowercase()
}

/// Parse one `select` or `update` statement.
///
/// ## Errors
/// Returns the first [`SyntaxError`]; anything other than `select`/`update` at the start is `UnexpectedToken`.
#[tracing::instrument(skip_all, fields(query_len = query.len()))]
pub fn parse(query: &str) -> Result<Tree, SyntaxError> {
    let source = normalize(query);
    let table = sql_patterns();
    let scanner = Scanner::new(&source, &table)?;
    let tree = SqlParser::new(scanner).parse()?;
    tracing::debug!(nodes = tree.node_count(), "parsed query");
    Ok(tree)
}

/// Statement-level SQL parser layered on the shared expression parser.
pub struct SqlParser<'a> {
    inner: Parser<'a>,
}

impl<'a> SqlParser<'a> {
    pub fn new(scanner: Scanner<'a>) -> Self {
        Self {
            inner: Parser::with_config(scanner, sql_config()),
        }
    }

    pub fn parse(mut self) -> Result<Tree, SyntaxError> {
        let tree = if let Some(select) = self.inner.scanner_mut().accept(&[SELECT])? {
            self.parse_select(select)?
        } else if let Some(update) = self.inner.scanner_mut().accept(&[UPDATE])? {
            self.parse_update(update)?
        } else {
            return Err(self.inner.scanner_mut().unexpected(&[SELECT, UPDATE]));
        };
        self.inner.finish()?;
        Ok(tree)
    }

    // select -> 'select' expr (',' expr)* 'from' ID 'where' expr
    fn parse_select(&mut self, select: Token) -> Result<Tree, SyntaxError> {
        let mut list = Tree::new(select.rename("list", "list"));
        loop {
            list.add(self.inner.parse_expr()?);
            if !self.inner.scanner_mut().matches(&[COMMA])? {
                break;
            }
        }
        let scanner = self.inner.scanner_mut();
        scanner.expect(&[FROM])?;
        let table = scanner.expect(&[lang::ID])?;
        scanner.expect(&[WHERE])?;
        let condition = self.inner.parse_expr()?;
        Ok(Tree::new(select).with(list).with(table).with(condition))
    }

    // update -> 'update' ID 'set' assign (',' assign)* 'where' expr
    fn parse_update(&mut self, update: Token) -> Result<Tree, SyntaxError> {
        let scanner = self.inner.scanner_mut();
        scanner.expect(&[lang::ID])?;
        let mut set = Tree::new(scanner.expect(&[SET])?);
        loop {
            set.add(self.parse_assign()?);
            if !self.inner.scanner_mut().matches(&[COMMA])? {
                break;
            }
        }
        self.inner.scanner_mut().expect(&[WHERE])?;
        let condition = self.inner.parse_expr()?;
        Ok(Tree::new(update).with(set).with(condition))
    }

    // assign -> ID '=' expr
    fn parse_assign(&mut self) -> Result<Tree, SyntaxError> {
        let scanner = self.inner.scanner_mut();
        let id = scanner.expect(&[lang::ID])?;
        let assign = scanner.expect(&[ASSIGN])?;
        let value = self.inner.parse_expr()?;
        Ok(Tree::new(assign).with(id).with(value))
    }
}
