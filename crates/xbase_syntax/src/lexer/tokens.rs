//! Token types for the xBase lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words (including the boolean/nil literals and their dotted spellings)
//! - `Operator(OperatorId)` for operators (including dotted words like `.AND.`)
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - `Token::literal` is always the exact source slice covered by `span` (empty for end-of-input), so a string
//!   token keeps its delimiters and escapes.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;
use std::sync::Arc;

use crate::ast::Span;
use xbase_core::lang::keywords::{self, KeywordId};
use xbase_core::lang::operators::{self, OperatorId};
use xbase_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident,
    Int,
    Float,
    String,
    Date,

    // ========== Special ==========
    Illegal,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "keyword '{}'", keywords::as_str(*id)),
            TokenKind::Operator(id) => write!(f, "operator '{}'", operators::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "'{}'", punctuation::as_str(*id)),
            TokenKind::Ident => write!(f, "identifier"),
            TokenKind::Int => write!(f, "integer"),
            TokenKind::Float => write!(f, "float"),
            TokenKind::String => write!(f, "string"),
            TokenKind::Date => write!(f, "date"),
            TokenKind::Illegal => write!(f, "illegal character"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// A positioned token.
///
/// ## Notes
/// - `line` and `column` are 1-based; `column` counts Unicode scalar values, not bytes.
/// - `file` is shared between every token of one lexer run.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
    pub line: usize,
    pub column: usize,
    pub file: Arc<str>,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span, line: usize, column: usize, file: Arc<str>) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
            line,
            column,
            file,
        }
    }

    /// Build a token that does not come from source text, positioned at `at`.
    ///
    /// Used for the implicit `Self` receiver of `::member`.
    pub fn synthetic(kind: TokenKind, literal: &str, at: &Token) -> Self {
        Self {
            kind,
            literal: literal.to_string(),
            span: Span::new(at.span.start, at.span.start),
            line: at.line,
            column: at.column,
            file: Arc::clone(&at.file),
        }
    }

    /// Line on which the token's last character sits (strings and block-spanning tokens may cover several lines).
    pub fn end_line(&self) -> usize {
        self.line + self.literal.matches('\n').count()
    }

    /// Human-readable description for diagnostics: `'EndIf'`, `'x'`, `end of input`.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.literal),
        }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved (case-insensitive).
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str_ignore_case(name)
}
