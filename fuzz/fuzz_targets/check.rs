#![no_main]

use libfuzzer_sys::fuzz_target;
use xbase::frontend::render::{RenderConfig, render_program};
use xbase::frontend::{check_source, parser};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Full pipeline: lex + parse + analyze
        let outcome = check_source(s, "fuzz.prw");

        // Rendering any clean program must parse back cleanly
        if outcome.parse_diagnostics.is_empty() {
            let rendered = render_program(&outcome.program, &RenderConfig::default());
            let reparsed = parser::parse_source(&rendered, "fuzz.prw");
            // Full parenthesization can push a program near the depth budget over it.
            let too_deep = reparsed.diagnostics.iter().any(|d| d.message.contains("nested too deeply"));
            assert!(reparsed.is_ok() || too_deep, "rendering does not parse:\n{rendered}");
        }
    }
});
