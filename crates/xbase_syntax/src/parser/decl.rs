/// Declaration parsing (functions, classes, methods, attributes).
///
/// Function and method bodies may end with an explicit `EndFunction` / `EndMethod`, or implicitly where the next
/// declaration starts. Classes always need `EndClass`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    /// `[Static] Function Name([params]) ... [EndFunction]`
    fn function_declaration(&mut self) -> PResult<FunctionDecl> {
        let static_token = self.match_keyword(KeywordId::Static);
        let function_token = self.expect_keyword(KeywordId::Function)?;
        let is_static = static_token.is_some();
        let token = static_token.unwrap_or(function_token);

        let name = self.identifier_or_missing("a function name");
        let parameters = self.parameters_or_empty();
        let body = self.block(FUNCTION_END);
        let closing = self.match_keyword(KeywordId::EndFunction);

        Ok(FunctionDecl {
            token,
            name,
            parameters,
            body,
            is_static,
            closing,
        })
    }

    /// `(a, b, c)`. The list may be omitted entirely when nothing follows the name on its line.
    fn parameter_list(&mut self) -> PResult<Vec<Identifier>> {
        if !(self.check_punct(PunctuationId::LParen) && self.on_same_line()) {
            return Ok(Vec::new());
        }
        self.advance();

        self.nested(|p| {
            let mut parameters = Vec::new();
            if !p.check_punct(PunctuationId::RParen) {
                loop {
                    parameters.push(p.identifier("a parameter name")?);
                    if p.match_punct(PunctuationId::Comma).is_none() {
                        break;
                    }
                }
            }
            p.expect_punct(PunctuationId::RParen, "')'")?;
            Ok(parameters)
        })
    }

    /// A malformed parameter list drops the rest of the header line; the body is still parsed.
    fn parameters_or_empty(&mut self) -> Vec<Identifier> {
        match self.parameter_list() {
            Ok(parameters) => parameters,
            Err(Recorded) => {
                self.skip_rest_of_line();
                Vec::new()
            }
        }
    }

    /// `Class Name [From Parent] { Data ... | Method ... } EndClass`
    fn class_declaration(&mut self) -> PResult<ClassDecl> {
        let token = self.expect_keyword(KeywordId::Class)?;
        let name = self.identifier_or_missing("a class name");
        let parent = match self.match_keyword(KeywordId::From) {
            Some(_) => self.identifier("a parent class name").ok(),
            None => None,
        };

        let mut attributes = Vec::new();
        let mut methods = Vec::new();
        self.terminators.push(CLASS_END);
        self.class_members(&mut attributes, &mut methods);
        self.terminators.pop();

        let closing = self.close_block(KeywordId::EndClass, &token);
        Ok(ClassDecl {
            token,
            name,
            parent,
            attributes,
            methods,
            closing,
        })
    }

    /// Parse the class body up to `EndClass` (or any enclosing terminator), recovering member by member.
    fn class_members(&mut self, attributes: &mut Vec<AttributeDecl>, methods: &mut Vec<MethodDecl>) {
        loop {
            let start = self.current.span.start;
            let result = match self.current.kind {
                TokenKind::Keyword(KeywordId::Data) => self.attribute_declarations(attributes),
                TokenKind::Keyword(KeywordId::Method) => self.method_declaration().map(|m| methods.push(m)),
                _ if self.at_eof() || self.at_terminator() => break,
                _ => Err(self.error(errors::expected("'Data', 'Method' or 'EndClass'", &self.current))),
            };
            if result.is_err() {
                self.synchronize(start);
            }
        }
    }

    /// `Data a[, b ...]`
    fn attribute_declarations(&mut self, attributes: &mut Vec<AttributeDecl>) -> PResult<()> {
        let token = self.advance();
        loop {
            let name = self.identifier("an attribute name")?;
            attributes.push(AttributeDecl {
                token: token.clone(),
                name,
            });
            if self.match_punct(PunctuationId::Comma).is_none() {
                break;
            }
        }
        self.end_of_statement()
    }

    /// `Method Name([params]) ... [EndMethod]`
    fn method_declaration(&mut self) -> PResult<MethodDecl> {
        let token = self.advance();
        let name = self.identifier_or_missing("a method name");
        let parameters = self.parameters_or_empty();
        let body = self.block(METHOD_END);
        let closing = self.match_keyword(KeywordId::EndMethod);

        Ok(MethodDecl {
            token,
            name,
            parameters,
            body,
            closing,
        })
    }
}
