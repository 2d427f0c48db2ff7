//! Parser and export configuration.
//!
//! Grammar variants (the statement language, the SQL subset, test grammars) differ only in configuration: which
//! operators sit at which precedence level and which token kinds start an operand. The parser's control logic never
//! changes.

use crate::grammar;

/// Default limit on nested blocks, loops, conditionals, groups and prefix operators.
///
/// Parsing recurses once per nesting level, so the limit bounds stack use on the default 2 MB thread stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Ordered operator-kind sets, lowest precedence first.
///
/// Static configuration: built once, never mutated while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrecedenceTable {
    levels: Vec<Vec<String>>,
}

impl PrecedenceTable {
    /// Build a table from levels given lowest precedence first.
    ///
    /// ## Examples
    /// ```rust
    /// use tdop_syntax::PrecedenceTable;
    ///
    /// let table = PrecedenceTable::new([vec!["+", "-"], vec!["*", "/"]]);
    /// assert_eq!(table.len(), 2);
    /// assert!(table.level(1).contains(&"*".to_string()));
    /// ```
    pub fn new<L, I, S>(levels: L) -> Self
    where
        L: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            levels: levels
                .into_iter()
                .map(|level| level.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Operator kinds at `index`; empty if out of range.
    pub fn level(&self, index: usize) -> &[String] {
        self.levels.get(index).map(Vec::as_slice).unwrap_or_default()
    }

    /// Operator kinds at `index` as `&str`s, ready for `Scanner::accept`.
    pub fn kinds(&self, index: usize) -> Vec<&str> {
        self.level(index).iter().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 >= self.levels.len()
    }

    /// Index of the level containing `kind`, if any.
    pub fn level_of(&self, kind: &str) -> Option<usize> {
        self.levels.iter().position(|level| level.iter().any(|k| k == kind))
    }
}

/// Expression parser configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Binary operator levels, lowest precedence first
    pub precedence: PrecedenceTable,
    /// Token kinds that form a leaf operand on their own
    pub operand_kinds: Vec<String>,
    /// Token kinds accepted as right-recursive prefix operators
    pub prefix_kinds: Vec<String>,
    /// Deepest nesting accepted before failing with `NestingTooDeep`
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            precedence: grammar::statement_precedence(),
            operand_kinds: grammar::statement_operands(),
            prefix_kinds: grammar::statement_prefix_operators(),
            max_depth: MAX_NESTING_DEPTH,
        }
    }
}

impl ParserConfig {
    /// Create a new config for the statement language
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the precedence table
    pub fn with_precedence(mut self, precedence: PrecedenceTable) -> Self {
        self.precedence = precedence;
        self
    }

    /// Replace the operand kinds
    pub fn with_operands<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operand_kinds = kinds.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the prefix operator kinds
    pub fn with_prefix_operators<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefix_kinds = kinds.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the nesting limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Every kind that may start an expression: `(`, then prefix operators, then operands.
    pub fn expression_starts(&self) -> Vec<&str> {
        std::iter::once(grammar::GROUP_OPEN)
            .chain(self.prefix_kinds.iter().map(String::as_str))
            .chain(self.operand_kinds.iter().map(String::as_str))
            .collect()
    }
}

/// Graphviz export configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotConfig {
    /// Name of the emitted `digraph`
    pub graph_name: String,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            graph_name: "ast".to_string(),
        }
    }
}

impl DotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = name.into();
        self
    }
}
