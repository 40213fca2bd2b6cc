/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Consuming tokens (`advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Line and nesting awareness (`on_same_line`, `continues_expression`, `nested`)
/// - The expression depth budget (`deeper`, `grow`)
/// - Error recording and recovery (`error`, `synchronize`, `skip_rest_of_line`)
///
/// Most functions in this file are internal (`fn`) and are documented primarily
/// to aid maintenance and onboarding.
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn at_eof(&self) -> bool {
        self.current.kind == TokenKind::Eof
    }

    /// Advance to the next token and return the token we just consumed.
    ///
    /// At end of input this keeps returning `Eof` tokens without moving.
    fn advance(&mut self) -> Token {
        let next = next_significant(&mut self.lexer, &mut self.diagnostics);
        let peek = std::mem::replace(&mut self.peek, next);
        let consumed = std::mem::replace(&mut self.current, peek);
        self.prev_line = consumed.end_line();
        consumed
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.current.kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.current.kind.is_punctuation(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> Option<Token> {
        self.check_keyword(id).then(|| self.advance())
    }

    fn match_punct(&mut self, id: PunctuationId) -> Option<Token> {
        self.check_punct(id).then(|| self.advance())
    }

    fn match_op(&mut self, id: OperatorId) -> Option<Token> {
        self.current.kind.is_operator(id).then(|| self.advance())
    }

    fn expect_keyword(&mut self, id: KeywordId) -> PResult<Token> {
        match self.match_keyword(id) {
            Some(token) => Ok(token),
            None => {
                let what = format!("'{}'", keywords::as_str(id));
                Err(self.error(errors::expected(&what, &self.current)))
            }
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, what: &str) -> PResult<Token> {
        match self.match_punct(id) {
            Some(token) => Ok(token),
            None => Err(self.error(errors::expected(what, &self.current))),
        }
    }

    // ========================================================================
    // Lines and nesting
    // ========================================================================

    /// Return `true` if the current token starts on the line where the previous token ended.
    fn on_same_line(&self) -> bool {
        self.current.line == self.prev_line
    }

    /// An infix continuation applies on the same line, or anywhere inside open delimiters.
    fn continues_expression(&self) -> bool {
        self.nesting > 0 || self.on_same_line()
    }

    /// Run `f` inside one more level of `(`/`[`/`{` nesting, restoring the level even when `f` fails.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        self.nesting += 1;
        let result = f(self);
        self.nesting -= 1;
        result
    }

    /// Run `f` one level deeper in the expression tree.
    ///
    /// Fails without calling `f` once the tree would exceed [`MAX_DEPTH`]. The depth on entry is restored
    /// afterwards, which also discards whatever `grow` added inside `f`.
    fn deeper<T>(&mut self, f: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        if self.depth >= MAX_DEPTH {
            return Err(self.nested_too_deeply());
        }
        let depth = self.depth;
        self.depth += 1;
        let result = f(self);
        self.depth = depth;
        result
    }

    /// Count one more link of a left-leaning chain (`a + b + c`, `a[i, j]`) against the depth budget.
    fn grow(&mut self) -> PResult<()> {
        if self.depth >= MAX_DEPTH {
            return Err(self.nested_too_deeply());
        }
        self.depth += 1;
        Ok(())
    }

    /// Return `true` if the current token closes any block that is currently open.
    fn at_terminator(&self) -> bool {
        match self.current.kind {
            TokenKind::Keyword(id) => self.terminators.iter().any(|set| set.contains(&id)),
            _ => false,
        }
    }

    // ========================================================================
    // Errors and recovery
    // ========================================================================

    /// Record a diagnostic and return the proof that it was recorded.
    ///
    /// While an over-deep statement unwinds, follow-up diagnostics are only traced.
    fn error(&mut self, diagnostic: Diagnostic) -> Recorded {
        tracing::trace!(line = diagnostic.line, column = diagnostic.column, message = %diagnostic.message, "syntax error");
        if !self.too_deep {
            self.diagnostics.push(diagnostic);
        }
        Recorded
    }

    fn nested_too_deeply(&mut self) -> Recorded {
        let recorded = self.error(errors::nested_too_deeply(&self.current));
        self.too_deep = true;
        recorded
    }

    /// Recover after a failed statement that started at byte offset `start`.
    ///
    /// Guarantees progress (at least one token is consumed if none was), then skips the rest of the line. Block
    /// terminators are never skipped so the enclosing construct can still close.
    fn synchronize(&mut self, start: usize) {
        if self.current.span.start == start && !self.at_eof() {
            self.advance();
        }
        self.skip_rest_of_line();
    }

    /// Skip tokens up to the next line, stopping early at end of input or at an open block's terminator.
    fn skip_rest_of_line(&mut self) {
        let mut skipped = 0usize;
        while !self.at_eof() && self.on_same_line() && !self.at_terminator() {
            self.advance();
            skipped += 1;
        }
        if skipped > 0 {
            tracing::trace!(skipped, line = self.prev_line, "recovered at next line");
        }
    }
}
