/// Statement parsing.
///
/// Statements dispatch on the current keyword; anything that is not a declaration keyword, `Return` or a block
/// terminator is parsed as an expression statement. The dialect is line-oriented, so a statement ends at the end
/// of its line.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// Parse one statement (or several, for `Local a, b`) into `out`, recovering on failure.
    fn statement_into(&mut self, out: &mut Vec<Statement>) {
        let start = self.current.span.start;
        let result = match self.current.kind {
            TokenKind::Keyword(KeywordId::Local | KeywordId::Public | KeywordId::Private) => {
                self.variable_declarations(out)
            }
            TokenKind::Keyword(KeywordId::Function) => {
                self.function_declaration().map(|f| out.push(Statement::Function(f)))
            }
            TokenKind::Keyword(KeywordId::Static) if self.peek.kind.is_keyword(KeywordId::Function) => {
                self.function_declaration().map(|f| out.push(Statement::Function(f)))
            }
            TokenKind::Keyword(KeywordId::Class) => self.class_declaration().map(|c| out.push(Statement::Class(c))),
            TokenKind::Keyword(KeywordId::Return) => self.return_statement().map(|r| out.push(Statement::Return(r))),
            TokenKind::Keyword(id) if !starts_expression(id) => {
                let token = self.advance();
                self.error(errors::cannot_start_statement(&token));
                Ok(())
            }
            _ => self
                .expression_statement()
                .map(|e| out.push(Statement::Expression(e))),
        };

        if result.is_err() {
            self.synchronize(start);
        }
        if self.depth == 0 {
            self.too_deep = false;
        }
    }

    /// `Local a [:= value][, b [:= value] ...]`, one [`VariableDecl`] per name.
    fn variable_declarations(&mut self, out: &mut Vec<Statement>) -> PResult<()> {
        let token = self.advance();
        let storage = match token.keyword_id() {
            Some(KeywordId::Public) => StorageClass::Public,
            Some(KeywordId::Private) => StorageClass::Private,
            _ => StorageClass::Local,
        };

        loop {
            let name = self.identifier("a variable name")?;
            let value = match self.match_op(OperatorId::Assign) {
                Some(_) => Some(self.expression_or_missing(Precedence::LOWEST)),
                None => None,
            };
            out.push(Statement::Variable(VariableDecl {
                token: token.clone(),
                storage,
                name,
                value,
            }));
            if self.match_punct(PunctuationId::Comma).is_none() {
                break;
            }
        }
        self.end_of_statement()
    }

    /// `Return [value]`. The value must start on the same line as `Return`.
    fn return_statement(&mut self) -> PResult<ReturnStmt> {
        let token = self.advance();
        let value = if !self.at_eof() && self.on_same_line() && !self.at_terminator() {
            Some(self.expression(Precedence::LOWEST)?)
        } else {
            None
        };
        self.end_of_statement()?;
        Ok(ReturnStmt { token, value })
    }

    fn expression_statement(&mut self) -> PResult<ExpressionStmt> {
        let token = self.current.clone();
        let expression = self.expression(Precedence::LOWEST)?;
        self.end_of_statement()?;
        Ok(ExpressionStmt { token, expression })
    }

    /// Require the statement to end here: the next token must be on a new line (or close a block).
    fn end_of_statement(&mut self) -> PResult<()> {
        if self.at_eof() || !self.on_same_line() || self.at_terminator() {
            return Ok(());
        }
        Err(self.error(errors::expected_end_of_statement(&self.current)))
    }
}
