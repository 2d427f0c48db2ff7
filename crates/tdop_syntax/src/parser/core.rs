/// Parser core type and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    config: ParserConfig,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser for the statement language.
    pub fn new(scanner: Scanner<'a>) -> Self {
        Self::with_config(scanner, ParserConfig::default())
    }

    /// Create a parser with an explicit expression configuration.
    pub fn with_config(scanner: Scanner<'a>, config: ParserConfig) -> Self {
        Self {
            scanner,
            config,
            depth: 0,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Mutable access to the underlying scanner, for grammars layered on the expression parser.
    pub fn scanner_mut(&mut self) -> &mut Scanner<'a> {
        &mut self.scanner
    }

    /// Parse exactly one statement.
    ///
    /// ## Errors
    /// - Any error raised while parsing the statement.
    /// - [`SyntaxError::TrailingInput`] if tokens remain after it.
    pub fn parse(mut self) -> Result<Tree, SyntaxError> {
        let tree = self.parse_statement()?;
        self.finish()?;
        Ok(tree)
    }

    /// Run `f` one nesting level deeper, failing with `NestingTooDeep` once `max_depth` is passed.
    ///
    /// `opener` is the token that opened the level; it is reported on failure.
    fn nested<T>(
        &mut self,
        opener: &Token,
        f: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        if self.depth >= self.config.max_depth {
            return Err(SyntaxError::too_deep(self.config.max_depth, opener.clone()));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Fail with `TrailingInput` unless the scanner is at end of input.
    pub fn finish(&self) -> Result<(), SyntaxError> {
        match self.scanner.peek() {
            None => Ok(()),
            Some(token) => Err(SyntaxError::trailing(token.clone())),
        }
    }
}
