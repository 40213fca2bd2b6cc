/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse_program()` entrypoint, plus the [`Recorded`]
/// marker every fallible parsing method returns on failure.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single "god file".

/// Proof that a diagnostic was pushed before a parsing method gave up.
///
/// Parsing methods return `Result<T, Recorded>`: the error carries no data because the diagnostic already lives in
/// the parser, and a caller holding a `Recorded` only has to recover (synchronize or substitute a placeholder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recorded;

type PResult<T> = Result<T, Recorded>;

/// Deepest expression tree the parser builds. Nested operands and chained operators both count, so every later
/// walk over the tree (analysis, rendering, drop) recurses at most this far.
const MAX_DEPTH: usize = 64;

/// Parser state.
///
/// ## Notes
/// - `terminators` is a stack of the keyword sets that close the blocks currently open. A block stops at any of
///   them, so a construct missing its own terminator does not swallow its parent's.
/// - `nesting` counts open `(`, `[` and `{`; inside them an expression may continue on the next line.
/// - `depth` is the height of the expression being built; past [`MAX_DEPTH`] the statement is abandoned and
///   `too_deep` mutes the diagnostics of its unwinding until the statement ends.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    peek: Token,
    /// Line on which the previously consumed token ended.
    prev_line: usize,
    nesting: usize,
    depth: usize,
    too_deep: bool,
    terminators: Vec<&'static [KeywordId]>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    /// Create a parser pulling tokens from `lexer`.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let mut diagnostics = Vec::new();
        let current = next_significant(&mut lexer, &mut diagnostics);
        let peek = next_significant(&mut lexer, &mut diagnostics);
        Self {
            lexer,
            current,
            peek,
            prev_line: 1,
            nesting: 0,
            depth: 0,
            too_deep: false,
            terminators: Vec::new(),
            diagnostics,
        }
    }

    /// Parse the whole token stream into a [`Program`].
    ///
    /// Always returns a program; problems are collected in [`Parser::diagnostics`].
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();
        while !self.at_eof() {
            self.statement_into(&mut statements);
        }
        Program { statements }
    }

    /// Diagnostics recorded so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the parser, returning its diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Pull the next token the grammar cares about. Illegal characters are reported here and skipped.
fn next_significant(lexer: &mut Lexer<'_>, diagnostics: &mut Vec<Diagnostic>) -> Token {
    loop {
        let token = lexer.next_token();
        if token.kind != TokenKind::Illegal {
            return token;
        }
        diagnostics.push(errors::illegal_character(&token));
    }
}
