//! Rich diagnostic reports using miette.
//!
//! Converts front-end [`Diagnostic`]s into `miette` diagnostics with the offending source line, a label under the
//! token and the diagnostic's hints and notes as help text.

// Suppress unused_assignments for struct fields used by derive macros
#![allow(unused_assignments)]

use miette::SourceSpan;

use crate::frontend::diagnostics::{Diagnostic, DiagnosticCode, ErrorKind, Severity};

/// A front-end diagnostic bound to its source text.
#[derive(Debug, miette::Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(xbase::check))]
pub struct DiagnosticReport {
    /// Warnings are shown but do not fail a check.
    pub severity: Severity,
    /// Human-readable error message
    pub message: String,
    #[source_code]
    pub src: miette::NamedSource<String>,
    #[label("{label}")]
    pub span: SourceSpan,
    /// Label for the error span (interpolated by miette derive macro)
    pub label: String,
    #[help]
    pub help: Option<String>,
}

impl DiagnosticReport {
    pub fn new(diagnostic: &Diagnostic, source_path: &str, source: &str) -> Self {
        let start = diagnostic.span.start.min(source.len());
        let len = diagnostic.span.len().min(source.len() - start);

        let help_lines: Vec<&str> = diagnostic
            .hints
            .iter()
            .chain(&diagnostic.notes)
            .map(String::as_str)
            .collect();
        let help = (!help_lines.is_empty()).then(|| help_lines.join("\n"));

        Self {
            severity: diagnostic.severity,
            message: diagnostic.message.clone(),
            src: miette::NamedSource::new(source_path, source.to_string()),
            span: (start, len).into(),
            label: label(diagnostic),
            help,
        }
    }
}

/// Text under the span. Semantic diagnostics also name their code, e.g. `not declared (xbase::undeclared)`.
fn label(diagnostic: &Diagnostic) -> String {
    let text = match (diagnostic.severity, diagnostic.kind, diagnostic.code) {
        (_, _, Some(DiagnosticCode::Undeclared)) => "not declared",
        (_, _, Some(DiagnosticCode::Redeclared)) => "declared again here",
        (Severity::Warning, _, None) => "warning here",
        (Severity::Error, ErrorKind::Lexical, None) => "invalid token",
        (Severity::Error, ErrorKind::Syntax | ErrorKind::Semantic, None) => "error here",
    };
    match diagnostic.code {
        Some(code) => format!("{} ({})", text, code.as_str()),
        None => text.to_string(),
    }
}

/// Build one report per diagnostic, in order.
pub fn reports<'d>(
    diagnostics: impl IntoIterator<Item = &'d Diagnostic>,
    source_path: &str,
    source: &str,
) -> Vec<DiagnosticReport> {
    diagnostics
        .into_iter()
        .map(|d| DiagnosticReport::new(d, source_path, source))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::check_source;

    #[test]
    fn test_report_from_semantic_diagnostic() {
        let source = "Function T()\n    Return x\nEndFunction\n";
        let outcome = check_source(source, "t.prw");
        let reports = reports(outcome.diagnostics(), "t.prw", source);

        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(report.message, "identificador 'x' não declarado");
        assert_eq!(report.span.offset(), source.find("x\n").unwrap_or_default());
        assert_eq!(report.span.len(), 1);
        assert_eq!(report.label, "not declared (xbase::undeclared)");
        assert_eq!(report.severity, Severity::Error);
        assert!(report.help.as_deref().is_some_and(|h| h.contains("Local x")));
    }

    #[test]
    fn test_report_from_syntax_diagnostic() {
        let source = "Local a := )\n";
        let outcome = check_source(source, "t.prw");
        let reports = reports(&outcome.parse_diagnostics, "t.prw", source);

        assert!(!reports.is_empty());
        assert_eq!(reports[0].label, "error here");
        assert_eq!(reports[0].span.offset(), 11);
    }

    #[test]
    fn test_report_notes_become_help() {
        let source = "Function F()\n    Local a\n    Local a\nReturn\n";
        let outcome = check_source(source, "t.prw");
        let reports = reports(outcome.diagnostics(), "t.prw", source);

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].label, "declared again here (xbase::redeclared)");
        assert_eq!(reports[0].help.as_deref(), Some("first declared at 2:11"));
    }

    #[test]
    fn test_report_from_warning() {
        let source = "For i := 1 To 3\nNext j\n";
        let outcome = check_source(source, "t.prw");
        let reports = reports(&outcome.parse_diagnostics, "t.prw", source);

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].severity, Severity::Warning);
        assert_eq!(reports[0].label, "warning here");
        assert_eq!(reports[0].span.offset(), source.find('j').unwrap_or_default());
        assert_eq!(reports[0].span.len(), 1);
    }

    #[test]
    fn test_span_is_clamped_to_source() {
        let outcome = check_source("Local a :=", "t.prw");
        let reports = reports(outcome.diagnostics(), "t.prw", "Local a :=");
        assert!(!reports.is_empty());
        for report in &reports {
            assert!(report.span.offset() + report.span.len() <= "Local a :=".len());
        }
    }

    #[test]
    fn test_report_renders_through_miette() {
        let source = "Function T()\n    Return x\n";
        let outcome = check_source(source, "t.prw");
        let report = miette::Report::new(DiagnosticReport::new(&outcome.semantic_diagnostics[0], "t.prw", source));
        let rendered = format!("{:?}", report);
        assert!(rendered.contains("não declarado"));
        assert!(rendered.contains("xbase::check"));
    }
}
