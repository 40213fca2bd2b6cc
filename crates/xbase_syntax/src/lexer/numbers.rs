//! Numeric and date literal scanning.
//!
//! Dates and divisions share a prefix (`10/2` vs `10/2/5`), so a digit run followed by `/digit` starts a
//! speculative scan that is rolled back when the third group is absent.

use super::{Lexer, TokenKind};

impl<'a> Lexer<'a> {
    /// Scan a number whose first digit has already been consumed.
    pub(super) fn scan_number(&mut self) -> TokenKind {
        self.eat_while(|c| c.is_ascii_digit());

        match (self.peek(), self.peek_nth(1)) {
            (Some('/'), Some(c)) if c.is_ascii_digit() => {
                if self.try_scan_date() {
                    TokenKind::Date
                } else {
                    TokenKind::Int
                }
            }
            (Some('.'), Some(c)) if c.is_ascii_digit() => {
                self.advance();
                self.eat_while(|c| c.is_ascii_digit());
                TokenKind::Float
            }
            // `5.AND.x`: the dot belongs to the dotted word.
            (Some('.'), Some(c)) if c.is_alphabetic() => TokenKind::Int,
            (Some('.'), _) => {
                self.advance();
                TokenKind::Float
            }
            _ => TokenKind::Int,
        }
    }

    /// Try to consume `/digits/digits` after the first digit group. Restores the cursor on failure.
    fn try_scan_date(&mut self) -> bool {
        let saved = self.cursor;

        self.advance();
        self.eat_while(|c| c.is_ascii_digit());
        if self.peek() == Some('/') && self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.eat_while(|c| c.is_ascii_digit());
            return true;
        }

        tracing::trace!(offset = saved.pos, "date scan rolled back to division");
        self.cursor = saved;
        false
    }
}
