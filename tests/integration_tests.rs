//! Integration tests for the xBase front end

use std::fs;
use std::path::{Path, PathBuf};

use xbase::frontend::{CheckOutcome, check_source};

fn fixtures(kind: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(kind);
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|e| e == "prw"))
        .collect();
    paths.sort();
    paths
}

/// Helper to run the full pipeline on a source file
fn check_file(path: &Path) -> (String, CheckOutcome) {
    let source = fs::read_to_string(path).unwrap();
    let outcome = check_source(&source, &path.display().to_string());
    (source, outcome)
}

/// Test that all valid fixtures check without diagnostics
#[test]
fn test_valid_fixtures() {
    let paths = fixtures("valid");
    assert!(!paths.is_empty());

    for path in paths {
        let (_, outcome) = check_file(&path);
        let messages: Vec<String> = outcome.diagnostics().map(ToString::to_string).collect();
        assert!(
            messages.is_empty(),
            "Expected {} to check cleanly, got: {:#?}",
            path.display(),
            messages
        );
    }
}

/// Test that invalid fixtures produce the diagnostic named on their first line (`// expect: ...`)
#[test]
fn test_invalid_fixtures() {
    let paths = fixtures("invalid");
    assert!(!paths.is_empty());

    for path in paths {
        let (source, outcome) = check_file(&path);
        assert!(!outcome.is_ok(), "Expected {} to fail, but it checked cleanly", path.display());

        let expected = source
            .lines()
            .next()
            .and_then(|line| line.strip_prefix("// expect: "))
            .unwrap_or_else(|| panic!("{} has no `// expect:` line", path.display()));
        assert!(
            outcome.diagnostics().any(|d| d.message.contains(expected)),
            "Expected a diagnostic containing {:?} in {}, got: {:#?}",
            expected,
            path.display(),
            outcome.diagnostics().map(|d| d.message.as_str()).collect::<Vec<_>>()
        );
    }
}

/// Diagnostics carry the file name they were produced for
#[test]
fn test_diagnostics_name_their_file() {
    let outcome = check_source("Function F()\nReturn x\n", "src/f.prw");
    let diagnostic = outcome.semantic_diagnostics.first().unwrap();
    assert_eq!(&*diagnostic.file, "src/f.prw");
    assert_eq!(diagnostic.to_string(), "src/f.prw:2:8: semantic error: identificador 'x' não declarado");
}

/// Pathologically deep input is one diagnostic, not a stack overflow in any pass
#[test]
fn test_deep_input_is_one_diagnostic() {
    let chain = format!("Local x := 1{}", " + 1".repeat(20_000));
    let parens = format!("Function F()\n  Return {}1{}\n", "(".repeat(3000), ")".repeat(3000));
    for source in [chain, parens] {
        let outcome = check_source(&source, "deep.prw");
        let messages: Vec<&str> = outcome.diagnostics().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, ["expression is nested too deeply"]);
        let _ = outcome.program.to_string();
    }
}

/// A broken declaration header is reported once; its body is still checked
#[test]
fn test_header_errors_do_not_cascade() {
    let sources = [
        "Class\n  Data nSaldo\n  Method M()\n    ::nSaldo := 1\n    Return Self\nEndClass\n",
        "Function F()\n  Local i\n  For i := 1 10\n    i := i\n  Next\nReturn\n",
    ];
    for source in sources {
        let outcome = check_source(source, "t.prw");
        let messages: Vec<&str> = outcome.diagnostics().map(|d| d.message.as_str()).collect();
        assert_eq!(messages.len(), 1, "{:?}: {:#?}", source, messages);
    }
}

/// Warnings are reported but do not fail the check
#[test]
fn test_warnings_do_not_fail_check() {
    let outcome = check_source("Function F()\n  Local i, j\n  For i := 1 To 3\n  Next j\nReturn\n", "t.prw");
    assert_eq!(outcome.diagnostics().count(), 1);
    assert!(outcome.is_ok());
}

mod lexer_tests {
    use xbase::frontend::lexer::{TokenKind, lex};
    use xbase_core::lang::keywords::KeywordId;
    use xbase_core::lang::operators::OperatorId;

    #[test]
    fn test_local_declaration_tokens() {
        let tokens = lex("Local a := 5", "t.prw");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Keyword(KeywordId::Local),
                TokenKind::Ident,
                TokenKind::Operator(OperatorId::Assign),
                TokenKind::Int,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[1].literal, "a");
        assert_eq!(tokens[3].literal, "5");
    }

    #[test]
    fn test_unterminated_constructs_end_in_one_eof() {
        for source in ["cNome := \"sem fim", "x := 1 /* nunca fecha", "'abc"] {
            let tokens = lex(source, "t.prw");
            let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
            assert_eq!(eofs, 1, "source {:?}", source);
            assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        }
    }
}

mod parser_tests {
    use xbase::frontend::ast::*;
    use xbase::frontend::parser::parse_source;

    #[test]
    fn test_class_parent() {
        let program = parse_source("Class B From A\nEndClass\nClass C\nEndClass\n", "t.prw").program;
        let parents: Vec<Option<&str>> = program
            .classes()
            .map(|c| c.parent.as_ref().map(|p| p.name.as_str()))
            .collect();
        assert_eq!(parents, [Some("A"), None]);
    }

    #[test]
    fn test_for_loop_parts() {
        let output = parse_source("For i := 1 To 10 Step 2\nNext\nFor j := 1 To 3\nNext\n", "t.prw");
        assert!(output.is_ok());
        let loops: Vec<&ForExpression> = output
            .program
            .statements
            .iter()
            .filter_map(|s| match s {
                Statement::Expression(ExpressionStmt {
                    expression: Expression::For(f),
                    ..
                }) => Some(f),
                _ => None,
            })
            .collect();
        assert_eq!(loops.len(), 2);
        assert_eq!(loops[0].counter.name, "i");
        assert!(matches!(*loops[0].start, Expression::Integer(IntegerLiteral { value: 1, .. })));
        assert!(matches!(*loops[0].end, Expression::Integer(IntegerLiteral { value: 10, .. })));
        assert!(matches!(loops[0].step.as_deref(), Some(Expression::Integer(IntegerLiteral { value: 2, .. }))));
        assert!(loops[1].step.is_none());
    }
}
