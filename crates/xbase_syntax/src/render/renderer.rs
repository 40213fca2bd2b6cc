//! Core rendering logic
//!
//! Walks the AST and emits canonical source: fully parenthesized operators, keyword-cased, one declaration per
//! line, explicit terminators on every block.

use xbase_core::lang::keywords::{self, KeywordId};
use xbase_core::lang::operators::{self, OperatorId};
use xbase_core::lang::punctuation::{self, PunctuationId};

use super::config::RenderConfig;
use super::writer::FormatWriter;
use crate::ast::*;
use crate::lexer::TokenKind;

/// Renderer that turns an AST back into canonical source text
pub struct Renderer {
    writer: FormatWriter,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            writer: FormatWriter::new(config),
        }
    }

    /// Render a program and return the text
    pub fn render(mut self, program: &Program) -> String {
        self.program(program);
        self.writer.finish()
    }

    /// Render a single expression. A top-level assignment is not parenthesized.
    pub fn render_expression(mut self, expression: &Expression) -> String {
        self.expression(expression, false);
        self.writer.finish()
    }

    // ========================================================================
    // Program
    // ========================================================================

    fn program(&mut self, program: &Program) {
        let blank_lines = self.writer.config().blank_lines_top_level;
        let mut previous: Option<&Statement> = None;

        for statement in &program.statements {
            if previous.is_some_and(|previous| is_declaration(previous) || is_declaration(statement)) {
                self.writer.blank_lines(blank_lines);
            }
            self.statement(statement);
            previous = Some(statement);
        }
    }

    // ========================================================================
    // Keywords
    // ========================================================================

    fn keyword(&mut self, id: KeywordId) {
        let text = match id {
            KeywordId::True => self.writer.config().keyword_case.apply_word(".T."),
            KeywordId::False => self.writer.config().keyword_case.apply_word(".F."),
            KeywordId::Nil => self.writer.config().keyword_case.apply_word("Nil"),
            _ => self.writer.config().keyword_case.apply(keywords::as_str(id)),
        };
        self.writer.write(&text);
    }

    /// `keyword` followed by a space
    fn keyword_sp(&mut self, id: KeywordId) {
        self.keyword(id);
        self.writer.write(" ");
    }

    fn operator(&mut self, id: OperatorId) {
        let spelling = operators::as_str(id);
        if operators::info_for(id).is_dotted_spelling {
            let text = self.writer.config().keyword_case.apply_word(spelling);
            self.writer.write(&text);
        } else {
            self.writer.write(spelling);
        }
    }

    fn punct(&mut self, id: PunctuationId) {
        self.writer.write(punctuation::as_str(id));
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Function(f) => self.function(f),
            Statement::Class(c) => self.class(c),
            Statement::Variable(v) => self.variable(v),
            Statement::Return(r) => {
                self.keyword(KeywordId::Return);
                if let Some(value) = &r.value {
                    self.writer.write(" ");
                    self.expression(value, false);
                }
            }
            Statement::Expression(e) => self.expression(&e.expression, false),
        }
        self.writer.end_line();
    }

    fn block(&mut self, block: &Block) {
        self.writer.indent();
        for statement in &block.statements {
            self.statement(statement);
        }
        self.writer.dedent();
    }

    fn parameters(&mut self, parameters: &[Identifier]) {
        self.punct(PunctuationId::LParen);
        for (i, parameter) in parameters.iter().enumerate() {
            if i > 0 {
                self.writer.write(", ");
            }
            self.writer.write(&parameter.name);
        }
        self.punct(PunctuationId::RParen);
    }

    fn function(&mut self, function: &FunctionDecl) {
        if function.is_static {
            self.keyword_sp(KeywordId::Static);
        }
        self.keyword_sp(KeywordId::Function);
        self.writer.write(&function.name.name);
        self.parameters(&function.parameters);
        self.writer.newline();
        self.block(&function.body);
        self.keyword(KeywordId::EndFunction);
    }

    fn class(&mut self, class: &ClassDecl) {
        self.keyword_sp(KeywordId::Class);
        self.writer.write(&class.name.name);
        if let Some(parent) = &class.parent {
            self.writer.write(" ");
            self.keyword_sp(KeywordId::From);
            self.writer.write(&parent.name);
        }
        self.writer.newline();

        self.writer.indent();
        for attribute in &class.attributes {
            self.keyword_sp(KeywordId::Data);
            self.writer.writeln(&attribute.name.name);
        }
        for method in &class.methods {
            self.keyword_sp(KeywordId::Method);
            self.writer.write(&method.name.name);
            self.parameters(&method.parameters);
            self.writer.newline();
            self.block(&method.body);
            self.keyword(KeywordId::EndMethod);
            self.writer.newline();
        }
        self.writer.dedent();

        self.keyword(KeywordId::EndClass);
    }

    fn variable(&mut self, variable: &VariableDecl) {
        let storage = match variable.storage {
            StorageClass::Local => KeywordId::Local,
            StorageClass::Public => KeywordId::Public,
            StorageClass::Private => KeywordId::Private,
        };
        self.keyword_sp(storage);
        self.writer.write(&variable.name.name);
        if let Some(value) = &variable.value {
            self.writer.write(" ");
            self.operator(OperatorId::Assign);
            self.writer.write(" ");
            self.expression(value, false);
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    /// Render an expression. `nested` is false only where an assignment may appear unparenthesized.
    fn expression(&mut self, expression: &Expression, nested: bool) {
        match expression {
            Expression::Identifier(id) => self.identifier(id),
            Expression::Integer(i) => self.writer.write(&i.token.literal),
            Expression::Float(f) => self.writer.write(&f.token.literal),
            Expression::String(s) => {
                let delimiter = s.delimiter.to_string();
                self.writer.write(&delimiter);
                self.writer.write(&s.value);
                self.writer.write(&delimiter);
            }
            Expression::Date(d) => self.writer.write(&d.value),
            Expression::Boolean(b) => self.keyword(if b.value { KeywordId::True } else { KeywordId::False }),
            Expression::Nil(_) => self.keyword(KeywordId::Nil),
            Expression::Array(a) => {
                self.punct(PunctuationId::LBrace);
                self.list(&a.elements);
                self.punct(PunctuationId::RBrace);
            }
            Expression::Prefix(p) => {
                self.punct(PunctuationId::LParen);
                match p.operator {
                    PrefixOp::Negate => self.operator(OperatorId::Minus),
                    PrefixOp::Not => self.operator(OperatorId::Not),
                }
                self.expression(&p.right, true);
                self.punct(PunctuationId::RParen);
            }
            Expression::Infix(i) => {
                self.punct(PunctuationId::LParen);
                self.expression(&i.left, true);
                self.writer.write(" ");
                self.operator(i.operator.operator_id());
                self.writer.write(" ");
                self.expression(&i.right, true);
                self.punct(PunctuationId::RParen);
            }
            Expression::Call(c) => {
                self.expression(&c.function, true);
                self.punct(PunctuationId::LParen);
                self.list(&c.arguments);
                self.punct(PunctuationId::RParen);
            }
            Expression::Index(i) => {
                self.expression(&i.left, true);
                self.punct(PunctuationId::LBracket);
                self.expression(&i.index, false);
                self.punct(PunctuationId::RBracket);
            }
            Expression::Member(m) => {
                if m.token.kind.is_punctuation(PunctuationId::ColonColon) {
                    self.punct(PunctuationId::ColonColon);
                } else {
                    self.expression(&m.object, true);
                    self.punct(PunctuationId::Colon);
                }
                self.writer.write(&m.member.name);
            }
            Expression::Assignment(a) => {
                if nested {
                    self.punct(PunctuationId::LParen);
                }
                self.expression(&a.target, true);
                self.writer.write(" ");
                self.operator(OperatorId::Assign);
                self.writer.write(" ");
                self.expression(&a.value, false);
                if nested {
                    self.punct(PunctuationId::RParen);
                }
            }
            Expression::If(i) => self.if_expression(i),
            Expression::While(w) => {
                self.keyword_sp(KeywordId::While);
                self.expression(&w.condition, false);
                self.writer.newline();
                self.block(&w.body);
                self.keyword(KeywordId::EndDo);
            }
            Expression::For(f) => self.for_expression(f),
            Expression::Missing(_) => {}
        }
    }

    fn identifier(&mut self, identifier: &Identifier) {
        if identifier.token.kind == TokenKind::Keyword(KeywordId::SelfKw) {
            self.keyword(KeywordId::SelfKw);
        } else {
            self.writer.write(&identifier.name);
        }
    }

    fn list(&mut self, expressions: &[Expression]) {
        for (i, expression) in expressions.iter().enumerate() {
            if i > 0 {
                self.punct(PunctuationId::Comma);
                self.writer.write(" ");
            }
            self.expression(expression, false);
        }
    }

    fn if_expression(&mut self, expression: &IfExpression) {
        self.keyword_sp(KeywordId::If);
        self.expression(&expression.condition, false);
        self.writer.newline();
        self.block(&expression.consequence);

        for clause in &expression.else_ifs {
            self.keyword_sp(KeywordId::ElseIf);
            self.expression(&clause.condition, false);
            self.writer.newline();
            self.block(&clause.consequence);
        }
        if let Some(alternative) = &expression.alternative {
            self.keyword(KeywordId::Else);
            self.writer.newline();
            self.block(alternative);
        }
        self.keyword(KeywordId::EndIf);
    }

    fn for_expression(&mut self, expression: &ForExpression) {
        self.keyword_sp(KeywordId::For);
        self.writer.write(&expression.counter.name);
        self.writer.write(" ");
        self.operator(OperatorId::Assign);
        self.writer.write(" ");
        self.expression(&expression.start, false);
        self.writer.write(" ");
        self.keyword_sp(KeywordId::To);
        self.expression(&expression.end, false);
        if let Some(step) = &expression.step {
            self.writer.write(" ");
            self.keyword_sp(KeywordId::Step);
            self.expression(step, false);
        }
        self.writer.newline();
        self.block(&expression.body);
        self.keyword(KeywordId::Next);
    }
}

fn is_declaration(statement: &Statement) -> bool {
    matches!(statement, Statement::Function(_) | Statement::Class(_))
}
