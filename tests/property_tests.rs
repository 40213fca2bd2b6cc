//! Property-based tests for the xBase front end
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;
use xbase::frontend::analyzer;
use xbase::frontend::lexer::{TokenKind, lex};
use xbase::frontend::parser::parse_source;
use xbase::frontend::render::{RenderConfig, render_program};
use xbase_core::lang::keywords;

const BINARY_OPS: &[&str] = &["+", "-", "*", "==", "=", "<>", "<", ">=", "$", ".AND.", ".or."];

/// Fragments that tend to drive the parser into recovery paths.
const FRAGMENTS: &[&str] = &[
    "Function", "Static", "Class", "From", "Data", "Method", "EndClass", "EndMethod", "EndFunction", "Local",
    "Private", "Return", "If", "ElseIf", "Else", "EndIf", "While", "Do", "EndDo", "For", "To", "Step", "Next",
    "Self", "::", ":", "x", "nTotal", "F", "1", "2.5", "\"s\"", "'", "(", ")", "[", "]", "{", "}", ",", ":=", "=",
    "+", "*", "/", ".AND.", "!", "@", "10/02/24", "\n", "\n", "/*", "//",
];

// =============================================================================
// Strategies
// =============================================================================

fn expression_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        prop::sample::select(vec!["a", "b", "nTotal", "Self", ".T.", ".f.", "Nil"]).prop_map(String::from),
        (0u32..1000).prop_map(|n| n.to_string()),
        "[a-z ]{0,6}".prop_map(|s| format!("\"{}\"", s)),
    ];

    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(BINARY_OPS), inner.clone())
                .prop_map(|(l, op, r)| format!("({} {} {})", l, op, r)),
            (inner.clone(), prop::sample::select(BINARY_OPS), inner.clone())
                .prop_map(|(l, op, r)| format!("{} {} {}", l, op, r)),
            inner.clone().prop_map(|e| format!("!{}", e)),
            prop::collection::vec(inner.clone(), 0..4).prop_map(|es| format!("{{{}}}", es.join(", "))),
            (inner.clone(), inner).prop_map(|(f, i)| format!("Len({})[{}]", f, i)),
        ]
    })
}

fn fragment_soup_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..60).prop_map(|parts| parts.join(" "))
}

// =============================================================================
// Lexer Properties
// =============================================================================

proptest! {
    /// Property: lexing terminates on any input and ends in exactly one end-of-input token
    #[test]
    fn lexer_always_ends_in_one_eof(source in "\\PC*") {
        let tokens = lex(&source, "p.prw");
        prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    /// Property: token positions are 1-based and spans never move backwards
    #[test]
    fn lexer_positions_are_monotonic(source in fragment_soup_strategy()) {
        let tokens = lex(&source, "p.prw");
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].span.start <= pair[1].span.start);
            prop_assert!(pair[0].line <= pair[1].line);
        }
        for token in &tokens {
            prop_assert!(token.line >= 1 && token.column >= 1);
            prop_assert!(token.span.end <= source.len());
        }
    }
}

// =============================================================================
// Parser and Analyzer Properties
// =============================================================================

proptest! {
    /// Property: parsing and analyzing arbitrary text never panics
    #[test]
    fn pipeline_is_total_on_arbitrary_text(source in "\\PC{0,200}") {
        let output = parse_source(&source, "p.prw");
        let _ = analyzer::analyze(&output.program);
    }

    /// Property: parsing and analyzing keyword soup never panics, and every diagnostic points into the source
    #[test]
    fn pipeline_is_total_on_keyword_soup(source in fragment_soup_strategy()) {
        let output = parse_source(&source, "p.prw");
        let semantic = analyzer::analyze(&output.program);
        let lines = source.lines().count().max(1);
        for diagnostic in output.diagnostics.iter().chain(&semantic) {
            prop_assert!(diagnostic.line >= 1 && diagnostic.line <= lines + 1, "{:?}", diagnostic);
        }
    }

    /// Property: deeply nested or very long expressions are rejected with diagnostics, never a stack overflow
    #[test]
    fn pipeline_is_total_on_deep_nesting(
        depth in 1usize..3000,
        opener in prop::sample::select(vec!["(", "{", "-", ".NOT. ", "a[", "f(", "1 + ", "a:b:"]),
        closed in any::<bool>(),
    ) {
        let closer = match opener {
            "(" | "f(" => ")",
            "{" => "}",
            "a[" => "]",
            _ => "",
        };
        let tail = if closed { closer.repeat(depth) } else { String::new() };
        let source = format!("x := {}1{}\n", opener.repeat(depth), tail);
        let output = parse_source(&source, "p.prw");
        let _ = analyzer::analyze(&output.program);
        let _ = render_program(&output.program, &RenderConfig::default());
        if depth > 200 {
            prop_assert!(!output.is_ok());
        }
    }
}

// =============================================================================
// Render Properties
// =============================================================================

proptest! {
    /// Property: generated expressions parse cleanly and their rendering is a fixed point
    #[test]
    fn render_is_stable_for_expressions(expression in expression_strategy()) {
        let source = format!("x := {}\n", expression);
        let config = RenderConfig::default();

        let first = parse_source(&source, "p.prw");
        prop_assert!(first.is_ok(), "{:?}: {:#?}", source, first.diagnostics);
        let rendered = render_program(&first.program, &config);

        let second = parse_source(&rendered, "p.prw");
        prop_assert!(second.is_ok(), "{:?}: {:#?}", rendered, second.diagnostics);
        prop_assert_eq!(render_program(&second.program, &config), rendered);
    }

    /// Property: generated functions parse cleanly and render stably
    #[test]
    fn render_is_stable_for_functions(
        name in "[A-Z][a-zA-Z]{0,8}".prop_filter("not a keyword", |s| keywords::from_str_ignore_case(s).is_none()),
        expression in expression_strategy(),
    ) {
        let source = format!(
            "Function {}(a, b)\n    Local nTotal := 0\n    x := {}\nReturn nTotal\n",
            name, expression
        );
        let config = RenderConfig::default();

        let first = parse_source(&source, "p.prw");
        prop_assert!(first.is_ok(), "{:?}: {:#?}", source, first.diagnostics);
        let rendered = render_program(&first.program, &config);
        let second = parse_source(&rendered, "p.prw");
        prop_assert_eq!(render_program(&second.program, &config), rendered);
    }
}
