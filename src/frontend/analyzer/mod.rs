//! Semantic analyzer for the xBase dialect.
//!
//! Builds a scoped [`SymbolTable`] and validates that every identifier reference resolves to a declaration.
//!
//! ## Notes
//!
//! - **Two-pass model**: the first pass ([`collect`]) registers every declaration under its compound key, so a name
//!   may be used before the line that declares it. The second pass ([`check`]) resolves every identifier expression.
//! - **Scope threading**: both passes pass a [`ScopePath`] by value down the recursion instead of keeping a mutable
//!   scope stack.
//! - **Error accumulation**: diagnostics are collected, never fatal. Both passes are total over partial trees
//!   produced by parser recovery ([`Expression::Missing`] placeholders are skipped).
//!
//! ## What is validated
//!
//! - No name is declared twice at the same compound key (first declaration wins)
//! - Every identifier expression resolves, innermost scope first, out to the file level
//! - `Self` only inside method bodies
//!
//! Runtime library functions (`Len`, `AllTrim`, ...) and names listed in [`AnalyzerConfig::externals`] resolve
//! without a declaration.
//!
//! ## Examples
//!
//! ```rust
//! use xbase::frontend::{analyzer, parser};
//!
//! let parsed = parser::parse_source("Function T()\n    Return x\nEndFunction\n", "t.prw");
//! let diagnostics = analyzer::analyze(&parsed.program);
//! assert_eq!(diagnostics.len(), 1);
//! assert!(diagnostics[0].message.contains("não declarado"));
//! ```

mod check;
mod collect;
mod scope;

pub use scope::ScopePath;

use crate::frontend::ast::*;
use crate::frontend::diagnostics::Diagnostic;
use crate::frontend::symbols::SymbolTable;
use xbase_core::lang::builtins;

/// Analyzer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Names defined outside the analyzed file (other sources, the host runtime). Matched case-insensitively, like
    /// runtime builtins.
    pub externals: Vec<String>,
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one external name.
    pub fn with_external(mut self, name: impl Into<String>) -> Self {
        self.externals.push(name.into());
        self
    }

    /// Add several external names.
    pub fn with_externals<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.externals.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn is_external(&self, name: &str) -> bool {
        self.externals.iter().any(|e| e.eq_ignore_ascii_case(name))
    }
}

/// Result of one analysis run.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub symbols: SymbolTable,
    pub diagnostics: Vec<Diagnostic>,
}

/// Analyzer state for one run.
///
/// Create with [`Analyzer::new`] and consume with [`Analyzer::analyze`]; a fresh symbol table is built every run.
pub struct Analyzer {
    config: AnalyzerConfig,
    symbols: SymbolTable,
    diagnostics: Vec<Diagnostic>,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            symbols: SymbolTable::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Run both passes over `program`.
    #[tracing::instrument(skip_all, fields(statements = program.statements.len()))]
    pub fn analyze(mut self, program: &Program) -> Analysis {
        let global = ScopePath::global();

        self.collect_statements(&program.statements, global);
        tracing::debug!(symbols = self.symbols.len(), "declarations collected");

        self.check_statements(&program.statements, global);
        tracing::debug!(diagnostics = self.diagnostics.len(), "references checked");

        Analysis {
            symbols: self.symbols,
            diagnostics: self.diagnostics,
        }
    }

    /// Return `true` if `name` resolves from `scope`.
    fn resolves(&self, name: &str, scope: ScopePath<'_>) -> bool {
        scope.candidates(name).iter().any(|key| self.symbols.contains(key))
            || builtins::from_str_ignore_case(name).is_some()
            || self.config.is_external(name)
    }
}

/// Analyze `program` with the default configuration and return its semantic diagnostics.
pub fn analyze(program: &Program) -> Vec<Diagnostic> {
    Analyzer::new(AnalyzerConfig::default()).analyze(program).diagnostics
}

// ============================================================================
// Tree walking
// ============================================================================

/// A direct child of an expression: a sub-expression or a nested statement block.
enum Child<'p> {
    Expression(&'p Expression),
    Block(&'p Block),
}

/// Direct children of `expression`, in source order. Member names after `:` and the `For` counter are not
/// expressions and are not listed.
fn children(expression: &Expression) -> Vec<Child<'_>> {
    use Child::{Block as B, Expression as E};

    match expression {
        Expression::Identifier(_)
        | Expression::Integer(_)
        | Expression::Float(_)
        | Expression::String(_)
        | Expression::Date(_)
        | Expression::Boolean(_)
        | Expression::Nil(_)
        | Expression::Missing(_) => Vec::new(),
        Expression::Array(a) => a.elements.iter().map(E).collect(),
        Expression::Prefix(p) => vec![E(&p.right)],
        Expression::Infix(i) => vec![E(&i.left), E(&i.right)],
        Expression::Call(c) => std::iter::once(E(&c.function)).chain(c.arguments.iter().map(E)).collect(),
        Expression::Index(i) => vec![E(&i.left), E(&i.index)],
        Expression::Member(m) => vec![E(&m.object)],
        Expression::Assignment(a) => vec![E(&a.target), E(&a.value)],
        Expression::If(i) => {
            let mut out = vec![E(&i.condition), B(&i.consequence)];
            for clause in &i.else_ifs {
                out.push(E(&clause.condition));
                out.push(B(&clause.consequence));
            }
            out.extend(i.alternative.as_ref().map(B));
            out
        }
        Expression::While(w) => vec![E(&w.condition), B(&w.body)],
        Expression::For(f) => {
            let mut out = vec![E(&f.start), E(&f.end)];
            out.extend(f.step.as_deref().map(E));
            out.push(B(&f.body));
            out
        }
    }
}
