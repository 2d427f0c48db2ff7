/// Statement parsing (recursive descent).
///
/// ```text
/// statement  := block | whileStmt | breakStmt | ifStmt | assignStmt | emptyStmt
/// block      := '{' statement* '}'
/// whileStmt  := 'while' expr statement
/// breakStmt  := 'break' ';'
/// ifStmt     := 'if' expr statement ('else' statement)?
/// assignStmt := ID '=' expr ';'
/// emptyStmt  := ';'
/// ```
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// Parse one statement, dispatching on the lookahead.
    ///
    /// ## Notes
    /// - An identifier not followed by `=` falls through to the empty-statement branch, so `x;` is accepted and
    ///   yields the `;` leaf.
    /// - Blocks, loops and conditionals each add one nesting level.
    pub fn parse_statement(&mut self) -> Result<Tree, SyntaxError> {
        if let Some(brace) = self.scanner.accept(&[punctuation::as_str(PunctuationId::LBrace)])? {
            return self.nested(&brace, |p| p.parse_block(Tree::new(brace.clone())));
        }
        if let Some(keyword) = self.scanner.accept(&[keywords::kind(KeywordId::While)])? {
            return self.nested(&keyword, |p| {
                let condition = p.parse_expr()?;
                let body = p.parse_statement()?;
                Ok(Tree::new(keyword.clone()).with(condition).with(body))
            });
        }
        if let Some(keyword) = self.scanner.accept(&[keywords::kind(KeywordId::Break)])? {
            self.scanner.expect(&[punctuation::as_str(PunctuationId::Semicolon)])?;
            return Ok(Tree::new(keyword));
        }
        if let Some(keyword) = self.scanner.accept(&[keywords::kind(KeywordId::If)])? {
            return self.nested(&keyword, |p| p.parse_if(keyword.clone()));
        }
        if let Some(id) = self.scanner.accept(&[ID])? {
            if let Some(assign) = self.scanner.accept(&[operators::as_str(OperatorId::Eq)])? {
                let value = self.parse_expr()?;
                self.scanner.expect(&[punctuation::as_str(PunctuationId::Semicolon)])?;
                return Ok(Tree::new(assign).with(id).with(value));
            }
        }
        let semicolon = self.scanner.expect(&[punctuation::as_str(PunctuationId::Semicolon)])?;
        Ok(Tree::empty_statement(semicolon))
    }

    /// Parse statements until the closing `}`; `block` already holds the opening brace.
    fn parse_block(&mut self, mut block: Tree) -> Result<Tree, SyntaxError> {
        let close = punctuation::as_str(PunctuationId::RBrace);
        while !self.scanner.check(&[close]) {
            if self.scanner.at_end() {
                return Err(self.scanner.unexpected(&[close]));
            }
            block.add(self.parse_statement()?);
        }
        self.scanner.expect(&[close])?;
        Ok(block)
    }

    fn parse_if(&mut self, keyword: Token) -> Result<Tree, SyntaxError> {
        let condition = self.parse_expr()?;
        let then_branch = self.parse_statement()?;
        let mut tree = Tree::new(keyword).with(condition).with(then_branch);
        if self.scanner.matches(&[keywords::kind(KeywordId::Else)])? {
            tree.add(self.parse_statement()?);
        }
        Ok(tree)
    }
}
