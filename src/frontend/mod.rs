//! xBase Front End
//!
//! This module contains all front end components:
//! - `lexer`: tokenization of source code
//! - `parser`: parsing tokens into AST
//! - `ast`: abstract syntax tree definitions
//! - `render`: canonical source rendering
//! - `diagnostics`: positioned diagnostics
//! - `symbols`: symbol table with compound scope keys
//! - `analyzer`: two-pass declaration/reference checking
//! - `report`: conversion of diagnostics into `miette` reports

// Syntax components are provided by the shared xbase_syntax crate.
pub use xbase_syntax::{ast, diagnostics, lexer, parser, render};

// Semantic pieces remain local.
pub mod analyzer;
pub mod report;
pub mod symbols;

use analyzer::{Analyzer, AnalyzerConfig};
use ast::Program;
use diagnostics::Diagnostic;

/// Everything one pipeline run produced for a source file.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// The parsed program; partial where parsing recovered from errors.
    pub program: Program,
    pub parse_diagnostics: Vec<Diagnostic>,
    pub semantic_diagnostics: Vec<Diagnostic>,
}

impl CheckOutcome {
    /// All diagnostics, parse diagnostics first.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.parse_diagnostics.iter().chain(&self.semantic_diagnostics)
    }

    /// Return `true` if neither stage reported an error.
    pub fn is_ok(&self) -> bool {
        !self.diagnostics().any(Diagnostic::is_error)
    }
}

/// Run lexer, parser and analyzer over `source` with the default analyzer configuration.
pub fn check_source(source: &str, file: &str) -> CheckOutcome {
    check_source_with(source, file, &AnalyzerConfig::default())
}

/// Run lexer, parser and analyzer over `source`.
///
/// The analyzer runs even when parsing reported errors; it is total over partial trees.
#[tracing::instrument(skip_all, fields(file = file, source_len = source.len()))]
pub fn check_source_with(source: &str, file: &str, config: &AnalyzerConfig) -> CheckOutcome {
    let parsed = parser::parse_source(source, file);
    let analysis = Analyzer::new(config.clone()).analyze(&parsed.program);
    tracing::debug!(
        parse_diagnostics = parsed.diagnostics.len(),
        semantic_diagnostics = analysis.diagnostics.len(),
        "checked"
    );
    CheckOutcome {
        program: parsed.program,
        parse_diagnostics: parsed.diagnostics,
        semantic_diagnostics: analysis.diagnostics,
    }
}
