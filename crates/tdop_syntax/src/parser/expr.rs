/// Expression parsing (precedence climbing).
///
/// ```text
/// expr        := level(0)
/// level(i)    := operand(i) (op_i operand(i))*      -- op_i in precedence[i], left-associative
/// operand(i)  := level(i + 1) | primary              -- primary at the last level
/// primary     := '(' expr ')' | prefix primary | operand-token
/// ```
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    /// Parse a full expression.
    pub fn parse_expr(&mut self) -> Result<Tree, SyntaxError> {
        if self.config.precedence.is_empty() {
            return self.parse_primary();
        }
        self.parse_level(0)
    }

    /// Parse a left-associative chain of operators at `index`.
    fn parse_level(&mut self, index: usize) -> Result<Tree, SyntaxError> {
        let mut result = self.parse_operand(index)?;
        loop {
            let ops = self.config.precedence.kinds(index);
            let Some(op) = self.scanner.accept(&ops)? else {
                break;
            };
            let rhs = self.parse_operand(index)?;
            result = Tree::new(op).with(result).with(rhs);
        }
        Ok(result)
    }

    fn parse_operand(&mut self, index: usize) -> Result<Tree, SyntaxError> {
        if self.config.precedence.is_last(index) {
            self.parse_primary()
        } else {
            self.parse_level(index + 1)
        }
    }

    /// Parse a parenthesized expression, a prefix-operator application, or a leaf operand.
    ///
    /// ## Notes
    /// - Parentheses are not kept in the tree.
    /// - Prefix operators recurse into `parse_primary`, so they bind tighter than any binary operator and nest
    ///   (`- - 3`).
    /// - Each group and each prefix operator adds one nesting level.
    fn parse_primary(&mut self) -> Result<Tree, SyntaxError> {
        let starts = self.config.expression_starts();
        let token = self.scanner.expect(&starts)?;

        if token.kind == GROUP_OPEN {
            return self.nested(&token, |p| {
                let tree = p.parse_expr()?;
                p.scanner.expect(&[GROUP_CLOSE])?;
                Ok(tree)
            });
        }
        if self.config.prefix_kinds.iter().any(|k| *k == token.kind) {
            let operand = self.nested(&token, Self::parse_primary)?;
            return Ok(Tree::new(token).with(operand));
        }
        Ok(Tree::new(token))
    }
}
