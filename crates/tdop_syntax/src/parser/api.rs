/// Parse a statement-language program into a [`Tree`].
///
/// This is the main public entrypoint for parsing. It uses the built-in pattern table and the default
/// [`ParserConfig`].
///
/// ## Errors
/// Returns the first [`SyntaxError`] encountered.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<Tree, SyntaxError> {
    let table = grammar::statement_patterns();
    parse_with(source, &table, ParserConfig::default())
}

/// Parse one statement using a caller-supplied pattern table and expression configuration.
pub fn parse_with(source: &str, table: &PatternTable, config: ParserConfig) -> Result<Tree, SyntaxError> {
    let scanner = Scanner::new(source, table)?;
    let tree = Parser::with_config(scanner, config).parse()?;
    tracing::debug!(nodes = tree.node_count(), "parsed statement");
    Ok(tree)
}

/// Parse a standalone expression (no trailing `;`) with the statement language's grammar.
pub fn parse_expression(source: &str) -> Result<Tree, SyntaxError> {
    let table = grammar::statement_patterns();
    let mut parser = Parser::new(Scanner::new(source, &table)?);
    let tree = parser.parse_expr()?;
    parser.finish()?;
    Ok(tree)
}
