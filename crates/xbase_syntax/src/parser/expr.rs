/// Expression parsing (Pratt / precedence climbing).
///
/// Expression starters and continuations are closed enums ([`PrefixKind`], [`InfixKind`]) resolved from the
/// current token, so every token kind the grammar accepts is matched exhaustively in one place.
///
/// Binding powers are the operator registry's precedence levels (`operators::info_for(id).precedence`), so from
/// loosest to tightest: `:=` (right-associative), `.OR.`, `.AND.`, equality, relational, `+ -`, `* / %`, then
/// prefix `-x` `!x` `.NOT. x` at the level of `.NOT.`. Calls, indexing and member sends bind tighter than all of them.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Precedence(u8);

impl Precedence {
    /// Binds looser than every operator; used to parse a whole expression.
    const LOWEST: Precedence = Precedence(0);
    /// Calls, indexing and member sends bind tighter than any registered operator.
    const POSTFIX: Precedence = Precedence(u8::MAX);

    fn of_operator(id: OperatorId) -> Self {
        Precedence(operators::info_for(id).precedence)
    }

    /// Operand precedence for prefix `-`, `!` and `.NOT.`.
    fn prefix() -> Self {
        Self::of_operator(OperatorId::Not)
    }
}

/// Tokens that can start an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrefixKind {
    Identifier,
    Integer,
    Float,
    String,
    Date,
    Boolean(bool),
    Nil,
    Negate,
    Not,
    Group,
    Array,
    SelfMember,
    If,
    While,
    For,
}

impl PrefixKind {
    fn of(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Ident | TokenKind::Keyword(KeywordId::SelfKw) => PrefixKind::Identifier,
            TokenKind::Int => PrefixKind::Integer,
            TokenKind::Float => PrefixKind::Float,
            TokenKind::String => PrefixKind::String,
            TokenKind::Date => PrefixKind::Date,
            TokenKind::Keyword(KeywordId::True) => PrefixKind::Boolean(true),
            TokenKind::Keyword(KeywordId::False) => PrefixKind::Boolean(false),
            TokenKind::Keyword(KeywordId::Nil) => PrefixKind::Nil,
            TokenKind::Operator(OperatorId::Minus) => PrefixKind::Negate,
            TokenKind::Operator(OperatorId::Not) => PrefixKind::Not,
            TokenKind::Punctuation(PunctuationId::LParen) => PrefixKind::Group,
            TokenKind::Punctuation(PunctuationId::LBrace) => PrefixKind::Array,
            TokenKind::Punctuation(PunctuationId::ColonColon) => PrefixKind::SelfMember,
            TokenKind::Keyword(KeywordId::If) => PrefixKind::If,
            TokenKind::Keyword(KeywordId::While | KeywordId::Do) => PrefixKind::While,
            TokenKind::Keyword(KeywordId::For) => PrefixKind::For,
            _ => return None,
        })
    }
}

/// Tokens that can continue an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InfixKind {
    Binary(BinaryOp),
    Assign,
    Call,
    Index,
    Member,
}

impl InfixKind {
    fn of(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Operator(OperatorId::Assign) => Some(InfixKind::Assign),
            TokenKind::Operator(id) => BinaryOp::from_operator(id).map(InfixKind::Binary),
            TokenKind::Punctuation(PunctuationId::LParen) => Some(InfixKind::Call),
            TokenKind::Punctuation(PunctuationId::LBracket) => Some(InfixKind::Index),
            TokenKind::Punctuation(PunctuationId::Colon) => Some(InfixKind::Member),
            _ => None,
        }
    }

    fn precedence(self) -> Precedence {
        match self {
            InfixKind::Binary(op) => Precedence::of_operator(op.operator_id()),
            InfixKind::Assign => Precedence::of_operator(OperatorId::Assign),
            InfixKind::Call | InfixKind::Index | InfixKind::Member => Precedence::POSTFIX,
        }
    }
}

impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    /// Parse an expression whose operators all bind tighter than `precedence`.
    fn expression(&mut self, precedence: Precedence) -> PResult<Expression> {
        self.deeper(|p| {
            let mut left = p.prefix()?;

            while let Some(infix) = InfixKind::of(p.current.kind) {
                if infix.precedence() <= precedence || !p.continues_expression() {
                    break;
                }
                p.grow()?;
                left = p.infix(infix, left)?;
            }

            Ok(left)
        })
    }

    /// Parse an expression, or substitute [`Expression::Missing`] if it cannot be read.
    ///
    /// Outside delimiters the rest of the line is skipped so one bad operand yields one diagnostic.
    fn expression_or_missing(&mut self, precedence: Precedence) -> Expression {
        let at = self.current.clone();
        match self.expression(precedence) {
            Ok(expression) => expression,
            Err(Recorded) => {
                if self.nesting == 0 {
                    self.skip_rest_of_line();
                }
                Expression::Missing(at)
            }
        }
    }

    fn prefix(&mut self) -> PResult<Expression> {
        let Some(kind) = PrefixKind::of(self.current.kind) else {
            return Err(self.error(errors::expected_expression(&self.current)));
        };

        match kind {
            PrefixKind::Identifier => Ok(Expression::Identifier(Identifier::new(self.advance()))),
            PrefixKind::Integer => {
                let token = self.advance();
                match token.literal.parse::<i64>() {
                    Ok(value) => Ok(Expression::Integer(IntegerLiteral { token, value })),
                    Err(_) => Err(self.error(errors::integer_out_of_range(&token))),
                }
            }
            PrefixKind::Float => {
                let token = self.advance();
                match token.literal.parse::<f64>() {
                    Ok(value) => Ok(Expression::Float(FloatLiteral { token, value })),
                    Err(_) => Err(self.error(errors::invalid_number(&token))),
                }
            }
            PrefixKind::String => {
                let token = self.advance();
                let (delimiter, body) = split_string_literal(&token.literal);
                let value = body.to_string();
                Ok(Expression::String(StringLiteral {
                    token,
                    value,
                    delimiter,
                }))
            }
            PrefixKind::Date => {
                let token = self.advance();
                let value = token.literal.clone();
                Ok(Expression::Date(DateLiteral { token, value }))
            }
            PrefixKind::Boolean(value) => Ok(Expression::Boolean(BooleanLiteral {
                token: self.advance(),
                value,
            })),
            PrefixKind::Nil => Ok(Expression::Nil(NilLiteral { token: self.advance() })),
            PrefixKind::Negate | PrefixKind::Not => {
                let token = self.advance();
                let operator = if kind == PrefixKind::Negate {
                    PrefixOp::Negate
                } else {
                    PrefixOp::Not
                };
                let right = self.expression_or_missing(Precedence::prefix());
                Ok(Expression::Prefix(PrefixExpression {
                    token,
                    operator,
                    right: Box::new(right),
                }))
            }
            PrefixKind::Group => {
                self.advance();
                self.nested(|p| {
                    let inner = p.expression(Precedence::LOWEST)?;
                    p.expect_punct(PunctuationId::RParen, "')'")?;
                    Ok(inner)
                })
            }
            PrefixKind::Array => self.array_literal(),
            PrefixKind::SelfMember => {
                let token = self.advance();
                let receiver = Token::synthetic(TokenKind::Keyword(KeywordId::SelfKw), "Self", &token);
                let member = self.identifier("a member name")?;
                Ok(Expression::Member(MemberExpression {
                    token,
                    object: Box::new(Expression::Identifier(Identifier::new(receiver))),
                    member,
                }))
            }
            PrefixKind::If => self.if_expression(),
            PrefixKind::While => self.while_expression(),
            PrefixKind::For => self.for_expression(),
        }
    }

    fn infix(&mut self, kind: InfixKind, left: Expression) -> PResult<Expression> {
        match kind {
            InfixKind::Binary(operator) => {
                let token = self.advance();
                let right = self.expression_or_missing(kind.precedence());
                Ok(Expression::Infix(InfixExpression {
                    token,
                    operator,
                    left: Box::new(left),
                    right: Box::new(right),
                }))
            }
            InfixKind::Assign => {
                let token = self.advance();
                if !matches!(
                    left,
                    Expression::Identifier(_) | Expression::Index(_) | Expression::Member(_)
                ) {
                    self.error(errors::invalid_assignment_target(left.token()));
                }
                // Right-associative: `a := b := 1` is `a := (b := 1)`.
                let value = self.expression_or_missing(Precedence::LOWEST);
                Ok(Expression::Assignment(AssignmentExpression {
                    token,
                    target: Box::new(left),
                    value: Box::new(value),
                }))
            }
            InfixKind::Call => {
                let token = self.advance();
                let arguments = self.nested(|p| {
                    let mut arguments = Vec::new();
                    if !p.check_punct(PunctuationId::RParen) {
                        loop {
                            arguments.push(p.expression_or_missing(Precedence::LOWEST));
                            if p.match_punct(PunctuationId::Comma).is_none() {
                                break;
                            }
                        }
                    }
                    p.expect_punct(PunctuationId::RParen, "')'")?;
                    Ok(arguments)
                })?;
                Ok(Expression::Call(CallExpression {
                    token,
                    function: Box::new(left),
                    arguments,
                }))
            }
            InfixKind::Index => {
                let token = self.advance();
                self.nested(|p| {
                    // `a[i, j]` is shorthand for `a[i][j]`.
                    let mut indexed = left;
                    loop {
                        let index = p.expression_or_missing(Precedence::LOWEST);
                        indexed = Expression::Index(IndexExpression {
                            token: token.clone(),
                            left: Box::new(indexed),
                            index: Box::new(index),
                        });
                        if p.match_punct(PunctuationId::Comma).is_none() {
                            break;
                        }
                        p.grow()?;
                    }
                    p.expect_punct(PunctuationId::RBracket, "']'")?;
                    Ok(indexed)
                })
            }
            InfixKind::Member => {
                let token = self.advance();
                let member = self.identifier("a member name")?;
                Ok(Expression::Member(MemberExpression {
                    token,
                    object: Box::new(left),
                    member,
                }))
            }
        }
    }

    /// `{a, b, c}`
    fn array_literal(&mut self) -> PResult<Expression> {
        let token = self.advance();
        let elements = self.nested(|p| {
            let mut elements = Vec::new();
            if !p.check_punct(PunctuationId::RBrace) {
                loop {
                    elements.push(p.expression_or_missing(Precedence::LOWEST));
                    if p.match_punct(PunctuationId::Comma).is_none() {
                        break;
                    }
                }
            }
            p.expect_punct(PunctuationId::RBrace, "'}'")?;
            Ok(elements)
        })?;
        Ok(Expression::Array(ArrayLiteral { token, elements }))
    }

    // ========================================================================
    // Block expressions
    // ========================================================================

    /// `If cond ... {ElseIf cond ...} [Else ...] EndIf`
    fn if_expression(&mut self) -> PResult<Expression> {
        let token = self.advance();
        let condition = self.expression_or_missing(Precedence::LOWEST);
        let consequence = self.block(IF_BRANCH_END);

        let mut else_ifs = Vec::new();
        while let Some(else_if) = self.match_keyword(KeywordId::ElseIf) {
            let condition = self.expression_or_missing(Precedence::LOWEST);
            let consequence = self.block(IF_BRANCH_END);
            else_ifs.push(ElseIfClause {
                token: else_if,
                condition,
                consequence,
            });
        }

        let alternative = match self.match_keyword(KeywordId::Else) {
            Some(_) => Some(self.block(ELSE_END)),
            None => None,
        };
        let closing = self.close_block(KeywordId::EndIf, &token);

        Ok(Expression::If(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            else_ifs,
            alternative,
            closing,
        }))
    }

    /// `[Do] While cond ... EndDo`
    fn while_expression(&mut self) -> PResult<Expression> {
        let token = self.advance();
        if token.kind.is_keyword(KeywordId::Do) {
            let _ = self.expect_keyword(KeywordId::While);
        }
        let condition = self.expression_or_missing(Precedence::LOWEST);
        let body = self.block(WHILE_END);
        let closing = self.close_block(KeywordId::EndDo, &token);

        Ok(Expression::While(WhileExpression {
            token,
            condition: Box::new(condition),
            body,
            closing,
        }))
    }

    /// `For i := start To end [Step step] ... Next [i]`
    fn for_expression(&mut self) -> PResult<Expression> {
        let token = self.advance();
        let counter = self.identifier_or_missing("a loop counter");
        let assigned = self.match_op(OperatorId::Assign).is_some() || self.match_op(OperatorId::Eq).is_some();
        if !assigned && !counter.is_missing() {
            self.error(errors::expected("':='", &self.current));
        }

        // A broken header still yields a loop, so its body and `Next` are not reported again.
        let start = self.expression_or_missing(Precedence::LOWEST);
        let _ = self.expect_keyword(KeywordId::To);
        let end = self.expression_or_missing(Precedence::LOWEST);
        let step = match self.match_keyword(KeywordId::Step) {
            Some(_) => Some(Box::new(self.expression_or_missing(Precedence::LOWEST))),
            None => None,
        };

        let body = self.block(FOR_END);
        let closing = self.close_block(KeywordId::Next, &token);
        // `Next i` may repeat the counter name.
        if closing.is_some() && self.check(TokenKind::Ident) && self.on_same_line() {
            let repeated = self.advance();
            if !counter.is_missing() && !repeated.literal.eq_ignore_ascii_case(&counter.name) {
                self.error(errors::next_counter_mismatch(&repeated, &counter.token));
            }
        }

        Ok(Expression::For(ForExpression {
            token,
            counter,
            start: Box::new(start),
            end: Box::new(end),
            step,
            body,
            closing,
        }))
    }
}
