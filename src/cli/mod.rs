//! CLI module for the xBase front end
//!
//! This module provides the command-line interface over the lexer, parser, renderer and analyzer.
//!
//! ## Commands
//!
//! - `lex <file>` - Dump the token stream
//! - `render <file>` - Print the canonical rendering of a file
//! - `check <file>...` - Report syntax and semantic diagnostics
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use crate::frontend::render::{KeywordCase, RenderConfig};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Front end for xBase (Clipper / Harbour / AdvPL) sources
#[derive(Parser, Debug)]
#[command(name = "xbase")]
#[command(version = VERSION)]
#[command(about = "Lexer, parser and semantic checker for xBase sources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dump the token stream as `line:col kind literal`
    Lex {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the canonical rendering of a source file
    Render {
        /// Source file to render
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Case used for keywords
        #[arg(long, value_enum, default_value_t = KeywordCaseArg::Pascal)]
        keyword_case: KeywordCaseArg,
        /// Spaces per indentation level
        #[arg(long = "indent", value_name = "N", default_value_t = 4)]
        indent: usize,
    },

    /// Report syntax and semantic diagnostics
    Check {
        /// Source files to check
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
        /// Name defined elsewhere that resolves without a declaration (repeatable)
        #[arg(long = "extern", value_name = "NAME")]
        externals: Vec<String>,
    },
}

/// `--keyword-case` values.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordCaseArg {
    Upper,
    Lower,
    Pascal,
}

impl From<KeywordCaseArg> for KeywordCase {
    fn from(arg: KeywordCaseArg) -> Self {
        match arg {
            KeywordCaseArg::Upper => KeywordCase::Upper,
            KeywordCaseArg::Lower => KeywordCase::Lower,
            KeywordCaseArg::Pascal => KeywordCase::Pascal,
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Lex { file } => commands::lex_file(&file.to_string_lossy()),
        Command::Render {
            file,
            keyword_case,
            indent,
        } => {
            if indent == 0 {
                return Err(CliError::failure("Error: --indent must be at least 1"));
            }
            let config = RenderConfig::new()
                .with_keyword_case(keyword_case.into())
                .with_indent_width(indent);
            commands::render_file(&file.to_string_lossy(), &config)
        }
        Command::Check { files, externals } => {
            let paths: Vec<String> = files.iter().map(|f| f.to_string_lossy().into_owned()).collect();
            commands::check_files(&paths, &externals)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
