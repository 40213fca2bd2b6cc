//! Lexer for the xBase dialect
//!
//! Handles tokenization including:
//! - Keywords (case-insensitive), identifiers and dotted words (`.T.`, `.AND.`)
//! - Integer, float, string and date literals
//! - Operators and punctuation (`:=`, `<>`, `::`, ...)
//! - Line comments (`//`, `&&`), block comments and `#` directive lines
//!
//! The lexer is pull-based: [`Lexer::next_token`] produces one token per call, so the parser never needs the whole
//! stream in memory. It never fails; characters it does not understand become [`TokenKind::Illegal`] tokens and
//! unterminated strings or comments run to the end of input.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String literal scanning
//! - `numbers` - Numeric and date literal scanning

mod numbers;
mod strings;
pub mod tokens;

use std::sync::Arc;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Span;
use xbase_core::lang::keywords::{self, KeywordId};
use xbase_core::lang::operators::{self, OperatorId};
use xbase_core::lang::punctuation::PunctuationId;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// The only state besides the cursor is `at_line_start`, which decides whether
// a `#` opens a directive line or is the not-equal operator:
//
// [line start] → skip blanks → '#' → [directive: skip to '\n']
//                            → anything else → [inside line] → '\n' → [line start]
// ============================================================================

/// Position of the lexer in its input. Saved and restored around speculative scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    /// Byte offset into the source.
    pos: usize,
    line: usize,
    column: usize,
}

impl Cursor {
    const START: Cursor = Cursor {
        pos: 0,
        line: 1,
        column: 1,
    };
}

/// Lexer for xBase source code.
///
/// ## Notes
/// - After the input is exhausted, [`Lexer::next_token`] keeps returning `Eof` tokens.
/// - As an [`Iterator`] the lexer yields exactly one `Eof` token and then stops.
pub struct Lexer<'a> {
    source: &'a str,
    file: Arc<str>,
    cursor: Cursor,
    at_line_start: bool,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer over `source`, tagging every token with `file`.
    pub fn new(source: &'a str, file: impl Into<Arc<str>>) -> Self {
        Self {
            source,
            file: file.into(),
            cursor: Cursor::START,
            at_line_start: true,
            finished: false,
        }
    }

    /// Source-file identifier shared by the produced tokens.
    pub fn file(&self) -> &Arc<str> {
        &self.file
    }

    /// The source text being tokenized.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Restart tokenization from the beginning of the input.
    pub fn reset(&mut self) {
        self.cursor = Cursor::START;
        self.at_line_start = true;
        self.finished = false;
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();

        let start = self.cursor;
        let Some(c) = self.advance() else {
            return self.make(TokenKind::Eof, start);
        };

        let kind = match c {
            // Operators
            ':' => {
                if self.match_char('=') {
                    TokenKind::Operator(OperatorId::Assign)
                } else if self.match_char(':') {
                    TokenKind::Punctuation(PunctuationId::ColonColon)
                } else {
                    TokenKind::Punctuation(PunctuationId::Colon)
                }
            }
            '=' => self.operator(OperatorId::Eq, &[('=', OperatorId::EqEq)]),
            '!' => self.operator(OperatorId::Not, &[('=', OperatorId::NotEq)]),
            '<' => self.operator(OperatorId::Lt, &[('=', OperatorId::LtEq), ('>', OperatorId::NotEq)]),
            '>' => self.operator(OperatorId::Gt, &[('=', OperatorId::GtEq)]),
            '#' => TokenKind::Operator(OperatorId::NotEq),
            '+' => TokenKind::Operator(OperatorId::Plus),
            '-' => TokenKind::Operator(OperatorId::Minus),
            '*' => TokenKind::Operator(OperatorId::Star),
            '/' => TokenKind::Operator(OperatorId::Slash),
            '%' => TokenKind::Operator(OperatorId::Percent),
            '$' => TokenKind::Operator(OperatorId::Contains),

            // Punctuation
            ',' => TokenKind::Punctuation(PunctuationId::Comma),
            '(' => TokenKind::Punctuation(PunctuationId::LParen),
            ')' => TokenKind::Punctuation(PunctuationId::RParen),
            '[' => TokenKind::Punctuation(PunctuationId::LBracket),
            ']' => TokenKind::Punctuation(PunctuationId::RBracket),
            '{' => TokenKind::Punctuation(PunctuationId::LBrace),
            '}' => TokenKind::Punctuation(PunctuationId::RBrace),

            // Literals
            '"' | '\'' => self.scan_string(c),
            '0'..='9' => self.scan_number(),
            '.' => self.scan_dot(),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(start),

            _ => TokenKind::Illegal,
        };

        // A token spanning a newline (multi-line string) does not put us at a line start.
        self.at_line_start = false;
        self.make(kind, start)
    }

    /// Tokenize the remaining input. The result always ends with exactly one `Eof` token.
    pub fn tokenize(self) -> Vec<Token> {
        self.collect()
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&self) -> Option<char> {
        self.source[self.cursor.pos..].chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.source[self.cursor.pos..].chars().nth(n)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.cursor.pos += c.len_utf8();
        if c == '\n' {
            self.cursor.line += 1;
            self.cursor.column = 1;
            self.at_line_start = true;
        } else {
            self.cursor.column += 1;
        }
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    fn make(&self, kind: TokenKind, start: Cursor) -> Token {
        Token::new(
            kind,
            &self.source[start.pos..self.cursor.pos],
            Span::new(start.pos, self.cursor.pos),
            start.line,
            start.column,
            Arc::clone(&self.file),
        )
    }

    // ========================================================================
    // Trivia
    // ========================================================================

    fn skip_trivia(&mut self) {
        loop {
            match (self.peek(), self.peek_nth(1)) {
                (Some(c), _) if c.is_whitespace() => {
                    self.advance();
                }
                (Some('/'), Some('/')) | (Some('&'), Some('&')) => self.skip_line(),
                (Some('/'), Some('*')) => self.skip_block_comment(),
                // `#include "protheus.ch"`: no preprocessing is done, the directive line is dropped.
                (Some('#'), _) if self.at_line_start => self.skip_line(),
                _ => break,
            }
        }
    }

    fn skip_line(&mut self) {
        self.eat_while(|c| c != '\n');
    }

    /// Skip `/* ... */`. An unterminated comment swallows the rest of the input.
    fn skip_block_comment(&mut self) {
        self.advance();
        self.advance();
        while let Some(c) = self.advance() {
            if c == '*' && self.match_char('/') {
                return;
            }
        }
    }

    // ========================================================================
    // Operator helpers
    // ========================================================================

    /// Try to match a two-character operator, fallback to the single-character one.
    fn operator(&mut self, simple: OperatorId, compounds: &[(char, OperatorId)]) -> TokenKind {
        for (c, id) in compounds {
            if self.match_char(*c) {
                return TokenKind::Operator(*id);
            }
        }
        TokenKind::Operator(simple)
    }

    /// Scan after a `.`: a leading-dot float (`.5`), a dotted word (`.T.`, `.AND.`), or an illegal dot.
    fn scan_dot(&mut self) -> TokenKind {
        if self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.eat_while(|c| c.is_ascii_digit());
            return TokenKind::Float;
        }

        let rest = &self.source[self.cursor.pos..];
        let word_len: usize = rest.chars().take_while(|c| c.is_ascii_alphabetic()).count();
        if word_len == 0 || !rest[word_len..].starts_with('.') {
            return TokenKind::Illegal;
        }

        // `.` + word + `.`; every char of the word is ASCII so byte and char counts agree.
        let spelling = &self.source[self.cursor.pos - 1..self.cursor.pos + word_len + 1];
        let kind = match keywords::from_str_ignore_case(spelling) {
            Some(id @ (KeywordId::True | KeywordId::False)) => Some(TokenKind::Keyword(id)),
            _ => operators::from_str_ignore_case(spelling).map(TokenKind::Operator),
        };

        match kind {
            Some(kind) => {
                for _ in 0..=word_len {
                    self.advance();
                }
                kind
            }
            None => TokenKind::Illegal,
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: Cursor) -> TokenKind {
        self.eat_while(is_ident_continue);

        let spelling = &self.source[start.pos..self.cursor.pos];
        match keyword_id(spelling) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Ident,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Convenience function to lex a whole source string.
///
/// This is a shorthand for `Lexer::new(source, file).tokenize()`.
#[tracing::instrument(skip_all, fields(file = file, source_len = source.len()))]
pub fn lex(source: &str, file: &str) -> Vec<Token> {
    let tokens = Lexer::new(source, file).tokenize();
    tracing::debug!(token_count = tokens.len(), "lexed");
    tokens
}

// ============================================================================
// TESTS
// ============================================================================
