/// Miscellaneous parser utilities.
///
/// This chunk contains the block terminator sets and small shared helpers that don't cleanly fit into "decl",
/// "stmt", or "expr" (identifier parsing, block parsing, string literal splitting).

// Keyword sets that end a block. A block also stops at the sets of every enclosing block.
const FUNCTION_END: &[KeywordId] = &[
    KeywordId::EndFunction,
    KeywordId::Function,
    KeywordId::Static,
    KeywordId::Class,
];
const CLASS_END: &[KeywordId] = &[
    KeywordId::EndClass,
    KeywordId::Function,
    KeywordId::Static,
    KeywordId::Class,
];
const METHOD_END: &[KeywordId] = &[
    KeywordId::EndMethod,
    KeywordId::Method,
    KeywordId::Data,
    KeywordId::EndClass,
];
const IF_BRANCH_END: &[KeywordId] = &[KeywordId::ElseIf, KeywordId::Else, KeywordId::EndIf];
const ELSE_END: &[KeywordId] = &[KeywordId::EndIf];
const WHILE_END: &[KeywordId] = &[KeywordId::EndDo];
const FOR_END: &[KeywordId] = &[KeywordId::Next];

impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    fn identifier(&mut self, what: &str) -> PResult<Identifier> {
        if self.check(TokenKind::Ident) {
            Ok(Identifier::new(self.advance()))
        } else {
            Err(self.error(errors::expected(what, &self.current)))
        }
    }

    /// Read a name, or record the problem and stand in [`Identifier::missing`] so the enclosing node survives.
    fn identifier_or_missing(&mut self, what: &str) -> Identifier {
        match self.identifier(what) {
            Ok(identifier) => identifier,
            Err(Recorded) => Identifier::missing(&self.current),
        }
    }

    /// Parse statements until end of input or a terminator of any open block.
    fn block(&mut self, terminators: &'static [KeywordId]) -> Block {
        let token = self.current.clone();
        self.terminators.push(terminators);
        let nesting = std::mem::replace(&mut self.nesting, 0);

        let mut statements = Vec::new();
        while !self.at_eof() && !self.at_terminator() {
            self.statement_into(&mut statements);
        }

        self.nesting = nesting;
        self.terminators.pop();
        Block { token, statements }
    }

    /// Consume `terminator` or record that it is missing. `construct` is the token that opened the block.
    fn close_block(&mut self, terminator: KeywordId, construct: &Token) -> Option<Token> {
        if let Some(token) = self.match_keyword(terminator) {
            return Some(token);
        }
        let diagnostic = errors::expected_terminator(keywords::as_str(terminator), construct, &self.current);
        self.error(diagnostic);
        None
    }
}

/// Keywords that begin an expression rather than a declaration or block terminator.
fn starts_expression(id: KeywordId) -> bool {
    match keywords::category(id) {
        KeywordCategory::Literal | KeywordCategory::Receiver => true,
        KeywordCategory::ControlFlow => {
            matches!(id, KeywordId::If | KeywordId::While | KeywordId::Do | KeywordId::For)
        }
        KeywordCategory::Declaration | KeywordCategory::Terminator => false,
    }
}

/// Split a string token's text into its delimiter and the raw body between the delimiters.
///
/// An unterminated string (no closing delimiter) keeps everything after the opening one.
fn split_string_literal(literal: &str) -> (char, &str) {
    let mut chars = literal.char_indices();
    let Some((_, delimiter)) = chars.next() else {
        return ('"', "");
    };
    let body_start = delimiter.len_utf8();

    let mut escaped = false;
    for (i, c) in chars {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == delimiter {
            return (delimiter, &literal[body_start..i]);
        }
    }
    (delimiter, &literal[body_start..])
}
