//! Abstract Syntax Tree definitions for the xBase dialect
//!
//! The tree is a closed set of statement and expression variants. Every node keeps the token that introduced it,
//! which gives downstream tools (analyzer, renderer, editor integrations) the node's position and original spelling
//! without a separate source map.
//!
//! ## Notes
//! - Block-structured nodes keep their closing keyword as `closing: Option<Token>`. For `If`/`While`/`For`/`Class`
//!   a `None` means the terminator was missing and the parser already reported it, see `is_complete()`.
//!   Functions and methods may legally end without an explicit terminator, so for them `None` only means
//!   "closed implicitly".
//! - `Expression::Missing` stands in for an operand the parser could not read, so partial trees keep their shape.

use crate::lexer::{Token, TokenKind};
use xbase_core::lang::keywords::{self, KeywordId};
use xbase_core::lang::operators::OperatorId;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A program is the sequence of top-level statements of one source file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    /// Iterate over the top-level function declarations.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Function(f) => Some(f),
            _ => None,
        })
    }

    /// Iterate over the top-level class declarations.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Class(c) => Some(c),
            _ => None,
        })
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Function(FunctionDecl),
    Class(ClassDecl),
    Variable(VariableDecl),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Statement {
    /// The token that introduced this statement.
    pub fn token(&self) -> &Token {
        match self {
            Statement::Function(f) => &f.token,
            Statement::Class(c) => &c.token,
            Statement::Variable(v) => &v.token,
            Statement::Return(r) => &r.token,
            Statement::Expression(e) => &e.token,
        }
    }
}

/// `[Static] Function Name(params) ... [EndFunction]`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub token: Token,
    pub name: Identifier,
    pub parameters: Vec<Identifier>,
    pub body: Block,
    pub is_static: bool,
    /// `EndFunction` when written; `None` when the body was closed by the next declaration or end of input.
    pub closing: Option<Token>,
}

/// `Class Name [From Parent] ... EndClass`
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub token: Token,
    pub name: Identifier,
    pub parent: Option<Identifier>,
    pub attributes: Vec<AttributeDecl>,
    pub methods: Vec<MethodDecl>,
    pub closing: Option<Token>,
}

impl ClassDecl {
    pub fn is_complete(&self) -> bool {
        self.closing.is_some()
    }
}

/// `Method Name(params) ... [EndMethod]`, only inside a class body
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub token: Token,
    pub name: Identifier,
    pub parameters: Vec<Identifier>,
    pub body: Block,
    pub closing: Option<Token>,
}

/// `Data name`
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDecl {
    pub token: Token,
    pub name: Identifier,
}

/// A statement sequence. `token` is the first token of the block (or the token that ended an empty block).
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub token: Token,
    pub statements: Vec<Statement>,
}

/// Storage class of a variable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageClass {
    Local,
    Public,
    Private,
}

/// `Local name [:= value]`. A comma list declares one node per name.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    pub token: Token,
    pub storage: StorageClass,
    pub name: Identifier,
    pub value: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: Expression,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Float(FloatLiteral),
    String(StringLiteral),
    Date(DateLiteral),
    Boolean(BooleanLiteral),
    Nil(NilLiteral),
    Array(ArrayLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    Call(CallExpression),
    Index(IndexExpression),
    Member(MemberExpression),
    Assignment(AssignmentExpression),
    If(IfExpression),
    While(WhileExpression),
    For(ForExpression),
    /// Placeholder for an operand that failed to parse; carries the token where parsing stopped.
    Missing(Token),
}

impl Expression {
    /// The token that introduced this expression.
    pub fn token(&self) -> &Token {
        match self {
            Expression::Identifier(e) => &e.token,
            Expression::Integer(e) => &e.token,
            Expression::Float(e) => &e.token,
            Expression::String(e) => &e.token,
            Expression::Date(e) => &e.token,
            Expression::Boolean(e) => &e.token,
            Expression::Nil(e) => &e.token,
            Expression::Array(e) => &e.token,
            Expression::Prefix(e) => &e.token,
            Expression::Infix(e) => &e.token,
            Expression::Call(e) => &e.token,
            Expression::Index(e) => &e.token,
            Expression::Member(e) => &e.token,
            Expression::Assignment(e) => &e.token,
            Expression::If(e) => &e.token,
            Expression::While(e) => &e.token,
            Expression::For(e) => &e.token,
            Expression::Missing(token) => token,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Expression::Missing(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        let name = token.literal.clone();
        Self { token, name }
    }

    /// Placeholder for a name the parser could not read, positioned at `at`. Its name is empty.
    pub fn missing(at: &Token) -> Self {
        Self::new(Token::synthetic(TokenKind::Ident, "", at))
    }

    pub fn is_missing(&self) -> bool {
        self.name.is_empty()
    }

    /// `Self` / `self` / `SELF`: the method receiver.
    pub fn is_self(&self) -> bool {
        keywords::from_str_ignore_case(&self.name) == Some(KeywordId::SelfKw)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatLiteral {
    pub token: Token,
    pub value: f64,
}

/// A string literal. `value` is the raw text between the delimiters, escapes kept as written.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub token: Token,
    pub value: String,
    pub delimiter: char,
}

/// `dd/mm/yy`-style date literal, kept as written.
#[derive(Debug, Clone, PartialEq)]
pub struct DateLiteral {
    pub token: Token,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NilLiteral {
    pub token: Token,
}

/// `{a, b, c}`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    pub token: Token,
    pub elements: Vec<Expression>,
}

/// Prefix operators. Closed set; `.NOT.` and `!` are the same operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixOp {
    Negate,
    Not,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: PrefixOp,
    pub right: Box<Expression>,
}

/// Binary operators. Closed set; spelling synonyms (`!=`, `<>`, `#`) collapse to one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    ExactEq,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Contains,
    And,
    Or,
}

impl BinaryOp {
    /// Map an infix operator token to its binary operator. `:=` and the prefix-only `!` have no mapping.
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        Some(match id {
            OperatorId::Plus => BinaryOp::Add,
            OperatorId::Minus => BinaryOp::Sub,
            OperatorId::Star => BinaryOp::Mul,
            OperatorId::Slash => BinaryOp::Div,
            OperatorId::Percent => BinaryOp::Mod,
            OperatorId::EqEq => BinaryOp::ExactEq,
            OperatorId::Eq => BinaryOp::Eq,
            OperatorId::NotEq => BinaryOp::NotEq,
            OperatorId::Lt => BinaryOp::Lt,
            OperatorId::LtEq => BinaryOp::LtEq,
            OperatorId::Gt => BinaryOp::Gt,
            OperatorId::GtEq => BinaryOp::GtEq,
            OperatorId::Contains => BinaryOp::Contains,
            OperatorId::And => BinaryOp::And,
            OperatorId::Or => BinaryOp::Or,
            OperatorId::Assign | OperatorId::Not => return None,
        })
    }

    /// The registry operator this binary operator is spelled with.
    pub fn operator_id(self) -> OperatorId {
        match self {
            BinaryOp::Add => OperatorId::Plus,
            BinaryOp::Sub => OperatorId::Minus,
            BinaryOp::Mul => OperatorId::Star,
            BinaryOp::Div => OperatorId::Slash,
            BinaryOp::Mod => OperatorId::Percent,
            BinaryOp::ExactEq => OperatorId::EqEq,
            BinaryOp::Eq => OperatorId::Eq,
            BinaryOp::NotEq => OperatorId::NotEq,
            BinaryOp::Lt => OperatorId::Lt,
            BinaryOp::LtEq => OperatorId::LtEq,
            BinaryOp::Gt => OperatorId::Gt,
            BinaryOp::GtEq => OperatorId::GtEq,
            BinaryOp::Contains => OperatorId::Contains,
            BinaryOp::And => OperatorId::And,
            BinaryOp::Or => OperatorId::Or,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    pub token: Token,
    pub operator: BinaryOp,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub token: Token,
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub index: Box<Expression>,
}

/// `object:member`. `::member` parses with a synthesized `Self` object.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpression {
    pub token: Token,
    pub object: Box<Expression>,
    pub member: Identifier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpression {
    pub token: Token,
    pub target: Box<Expression>,
    pub value: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElseIfClause {
    pub token: Token,
    pub condition: Expression,
    pub consequence: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfExpression {
    pub token: Token,
    pub condition: Box<Expression>,
    pub consequence: Block,
    pub else_ifs: Vec<ElseIfClause>,
    pub alternative: Option<Block>,
    pub closing: Option<Token>,
}

impl IfExpression {
    pub fn is_complete(&self) -> bool {
        self.closing.is_some()
    }
}

/// `[Do] While condition ... EndDo`
#[derive(Debug, Clone, PartialEq)]
pub struct WhileExpression {
    pub token: Token,
    pub condition: Box<Expression>,
    pub body: Block,
    pub closing: Option<Token>,
}

impl WhileExpression {
    pub fn is_complete(&self) -> bool {
        self.closing.is_some()
    }
}

/// `For counter := start To end [Step step] ... Next`
#[derive(Debug, Clone, PartialEq)]
pub struct ForExpression {
    pub token: Token,
    pub counter: Identifier,
    pub start: Box<Expression>,
    pub end: Box<Expression>,
    pub step: Option<Box<Expression>>,
    pub body: Block,
    pub closing: Option<Token>,
}

impl ForExpression {
    pub fn is_complete(&self) -> bool {
        self.closing.is_some()
    }
}
