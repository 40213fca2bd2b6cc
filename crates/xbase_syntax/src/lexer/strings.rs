//! String literal scanning.

use super::{Lexer, TokenKind};

impl<'a> Lexer<'a> {
    /// Scan a string whose opening `delimiter` has already been consumed.
    ///
    /// A backslash escapes the next character, which stays in the token text as written. An unterminated string
    /// runs to the end of input.
    pub(super) fn scan_string(&mut self, delimiter: char) -> TokenKind {
        while let Some(c) = self.advance() {
            if c == '\\' {
                self.advance();
            } else if c == delimiter {
                break;
            }
        }
        TokenKind::String
    }
}
