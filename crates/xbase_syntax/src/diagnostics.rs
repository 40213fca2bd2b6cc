//! Diagnostics produced by the xBase front end.
//!
//! Diagnostics are plain data: the lexer, parser and analyzer accumulate them instead of returning early, and the
//! caller decides how to present them (see the `xbase` CLI for the `miette` rendering).

use std::fmt;
use std::sync::Arc;

use crate::ast::Span;
use crate::lexer::Token;

/// A positioned front-end diagnostic.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{file}:{line}:{column}: {heading}: {message}", heading = heading(.kind, .severity))]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
    pub line: usize,
    pub column: usize,
    pub end_line: Option<usize>,
    pub end_column: Option<usize>,
    pub file: Arc<str>,
    pub severity: Severity,
    pub kind: ErrorKind,
    /// Machine-checkable code; set for semantic diagnostics.
    pub code: Option<DiagnosticCode>,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl Diagnostic {
    /// Build an error positioned at `token`.
    pub fn new(kind: ErrorKind, message: impl Into<String>, token: &Token) -> Self {
        Self {
            message: message.into(),
            span: token.span,
            line: token.line,
            column: token.column,
            end_line: None,
            end_column: None,
            file: Arc::clone(&token.file),
            severity: Severity::Error,
            kind,
            code: None,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn syntax(message: impl Into<String>, token: &Token) -> Self {
        Self::new(ErrorKind::Syntax, message, token)
    }

    pub fn lexical(message: impl Into<String>, token: &Token) -> Self {
        Self::new(ErrorKind::Lexical, message, token)
    }

    pub fn semantic(code: DiagnosticCode, message: impl Into<String>, token: &Token) -> Self {
        let mut diagnostic = Self::new(ErrorKind::Semantic, message, token);
        diagnostic.code = Some(code);
        diagnostic
    }

    /// Extend the diagnostic to the end of `token`.
    pub fn with_end(mut self, token: &Token) -> Self {
        self.span = self.span.merge(token.span);
        self.end_line = Some(token.end_line());
        self.end_column = Some(token.column + token.literal.chars().count());
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Which stage produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Semantic,
}

/// `syntax error`, `semantic warning`, ...
fn heading(kind: &ErrorKind, severity: &Severity) -> String {
    let stage = match kind {
        ErrorKind::Lexical => "lexical",
        ErrorKind::Syntax => "syntax",
        ErrorKind::Semantic => "semantic",
    };
    format!("{} {}", stage, severity)
}

/// Errors block rendering and fail `xbase check`; warnings are reported only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Stable codes for semantic diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// A referenced identifier has no declaration in scope.
    Undeclared,
    /// A name was declared twice at the same scope key.
    Redeclared,
}

impl DiagnosticCode {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::Undeclared => "xbase::undeclared",
            DiagnosticCode::Redeclared => "xbase::redeclared",
        }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::new(span.start.into(), span.len())
    }
}

// ============================================================================
// Error catalog
// ============================================================================

/// Constructors for the diagnostics the front end emits, so messages stay consistent.
pub mod errors {
    use super::*;

    pub fn expected(what: &str, found: &Token) -> Diagnostic {
        Diagnostic::syntax(format!("expected {}, found {}", what, found.describe()), found)
    }

    pub fn expected_terminator(terminator: &str, construct: &Token, found: &Token) -> Diagnostic {
        Diagnostic::syntax(
            format!("expected '{}', found {}", terminator, found.describe()),
            found,
        )
        .with_note(format!(
            "'{}' opened at {}:{} is not closed",
            construct.literal, construct.line, construct.column
        ))
    }

    pub fn cannot_start_statement(found: &Token) -> Diagnostic {
        Diagnostic::syntax(format!("{} cannot start a statement", found.describe()), found)
    }

    pub fn expected_expression(found: &Token) -> Diagnostic {
        Diagnostic::syntax(format!("expected an expression, found {}", found.describe()), found)
    }

    pub fn expected_end_of_statement(found: &Token) -> Diagnostic {
        Diagnostic::syntax(format!("expected end of line, found {}", found.describe()), found)
            .with_hint("each statement goes on its own line")
    }

    pub fn invalid_assignment_target(target: &Token) -> Diagnostic {
        Diagnostic::syntax(format!("cannot assign to {}", target.describe()), target)
            .with_hint("only variables, array elements and members can be assigned")
    }

    pub fn illegal_character(token: &Token) -> Diagnostic {
        Diagnostic::lexical(format!("illegal character {}", token.describe()), token).with_end(token)
    }

    pub fn nested_too_deeply(found: &Token) -> Diagnostic {
        Diagnostic::syntax("expression is nested too deeply", found)
            .with_hint("split it into intermediate variables")
    }

    /// `Next j` closing a loop whose counter is `i`.
    pub fn next_counter_mismatch(found: &Token, counter: &Token) -> Diagnostic {
        Diagnostic::syntax(
            format!("'Next {}' does not match the loop counter '{}'", found.literal, counter.literal),
            found,
        )
        .with_end(found)
        .with_severity(Severity::Warning)
        .with_note(format!("the loop counter is declared at {}:{}", counter.line, counter.column))
    }

    pub fn integer_out_of_range(token: &Token) -> Diagnostic {
        Diagnostic::lexical(format!("integer literal {} is out of range", token.describe()), token)
    }

    pub fn invalid_number(token: &Token) -> Diagnostic {
        Diagnostic::lexical(format!("invalid number literal {}", token.describe()), token)
    }

    pub fn undeclared(name: &str, token: &Token) -> Diagnostic {
        Diagnostic::semantic(
            DiagnosticCode::Undeclared,
            format!("identificador '{}' não declarado", name),
            token,
        )
        .with_end(token)
        .with_hint(format!("declare it with 'Local {}' before using it", name))
    }

    pub fn redeclared(name: &str, token: &Token, first: &Token) -> Diagnostic {
        Diagnostic::semantic(
            DiagnosticCode::Redeclared,
            format!("'{}' já foi declarado neste escopo", name),
            token,
        )
        .with_end(token)
        .with_note(format!("first declared at {}:{}", first.line, first.column))
    }
}
