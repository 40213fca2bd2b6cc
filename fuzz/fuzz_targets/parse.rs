#![no_main]

use libfuzzer_sys::fuzz_target;
use xbase::frontend::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the lexer on its own, then the parser over a fresh lexer
        let tokens = lexer::lex(s, "fuzz.prw");
        assert!(tokens.last().is_some_and(|t| t.kind == lexer::TokenKind::Eof));
        let _ = parser::parse_source(s, "fuzz.prw");
    }
});
