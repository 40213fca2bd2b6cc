//! Id-based queries on `Token` / `TokenKind`, so the parser and renderer can ask "is this `EndIf`?" without
//! spelling out `matches!(...)` each time.

use crate::lexer::{Token, TokenKind};
use xbase_core::lang::keywords::KeywordId;
use xbase_core::lang::operators::OperatorId;
use xbase_core::lang::punctuation::PunctuationId;

impl TokenKind {
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.keyword_id() == Some(id)
    }

    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }
}

impl Token {
    /// Keyword id of this token; `None` for identifiers, literals and symbols.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }
}
