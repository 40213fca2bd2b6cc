/// Public parsing API.

/// Result of parsing one source file: the (possibly partial) program plus every lexical and syntax diagnostic.
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub program: Program,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    /// Return `true` if no error-severity diagnostic was recorded.
    pub fn is_ok(&self) -> bool {
        !self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Parse everything `lexer` produces.
#[tracing::instrument(skip_all, fields(file = %lexer.file()))]
pub fn parse(lexer: Lexer<'_>) -> ParseOutput {
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    let diagnostics = parser.into_diagnostics();
    tracing::debug!(statements = program.statements.len(), diagnostics = diagnostics.len(), "parsed");
    ParseOutput { program, diagnostics }
}

/// Lex and parse `source`, attributing positions to `file`.
pub fn parse_source(source: &str, file: &str) -> ParseOutput {
    parse(Lexer::new(source, file))
}
