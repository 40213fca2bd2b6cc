//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use crate::frontend::analyzer::AnalyzerConfig;
use crate::frontend::lexer::{self, Token};
use crate::frontend::render::{self, RenderConfig};
use crate::frontend::report;
use crate::frontend::{check_source_with, parser};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// while lexing.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file, rejecting files over [`MAX_SOURCE_SIZE`].
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// One line of `xbase lex` output.
pub fn format_token(token: &Token) -> String {
    format!("{}:{} {} {:?}", token.line, token.column, token.kind, token.literal)
}

/// Tokenize and display tokens.
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    for token in lexer::lex(&source, file_path) {
        println!("{}", format_token(&token));
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and print the canonical rendering.
///
/// A file with syntax errors is not rendered; its diagnostics are reported instead. Warnings are reported and the
/// file is still rendered.
pub fn render_file(file_path: &str, config: &RenderConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let parsed = parser::parse_source(&source, file_path);

    if !parsed.diagnostics.is_empty() {
        print_reports(report::reports(&parsed.diagnostics, file_path, &source));
    }
    if !parsed.is_ok() {
        let errors = parsed.diagnostics.iter().filter(|d| d.is_error()).count();
        return Err(CliError::failure(format!(
            "\n{}: not rendered, {} syntax error(s)",
            file_path, errors
        )));
    }

    print!("{}", render::render_program(&parsed.program, config));
    Ok(ExitCode::SUCCESS)
}

/// Check every file and report all diagnostics.
///
/// Unreadable files are reported and counted; checking continues with the next file. Only files with errors
/// fail the check; warnings are printed.
pub fn check_files(paths: &[String], externals: &[String]) -> CliResult<ExitCode> {
    let config = AnalyzerConfig::new().with_externals(externals.iter().cloned());

    let mut error_count = 0;
    let mut warning_count = 0;
    let mut failed_files = 0;

    for file_path in paths {
        let source = match read_source(file_path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{}", e.message);
                failed_files += 1;
                continue;
            }
        };

        let outcome = check_source_with(&source, file_path, &config);
        let errors = outcome.diagnostics().filter(|d| d.is_error()).count();
        warning_count += outcome.diagnostics().count() - errors;
        if errors > 0 {
            failed_files += 1;
            error_count += errors;
        }
        print_reports(report::reports(outcome.diagnostics(), file_path, &source));
    }

    if failed_files > 0 {
        return Err(CliError::failure(format!(
            "\n{} error(s) in {} of {} file(s)",
            error_count,
            failed_files,
            paths.len()
        )));
    }

    if warning_count > 0 {
        println!("✓ {} file(s) checked, {} warning(s)", paths.len(), warning_count);
    } else {
        println!("✓ {} file(s) checked", paths.len());
    }
    Ok(ExitCode::SUCCESS)
}

fn print_reports(reports: Vec<report::DiagnosticReport>) {
    for r in reports {
        eprintln!("{:?}", miette::Report::new(r));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_source(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("xbase_cli_{}_{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_format_token() {
        let tokens = lexer::lex("Local a := 5", "t.prw");
        let lines: Vec<String> = tokens.iter().map(format_token).collect();
        assert_eq!(lines[0], "1:1 keyword 'Local' \"Local\"");
        assert_eq!(lines[1], "1:7 identifier \"a\"");
        assert_eq!(lines[3], "1:12 integer \"5\"");
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("/definitely/not/here.prw").unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("Cannot access file"));
    }

    #[test]
    fn test_check_files_ok_and_failing() {
        let good = temp_source("good.prw", "Function F(a)\n    Local b := a\nReturn b\n");
        let bad = temp_source("bad.prw", "Function F()\n    Return x\n");

        let good_path = good.to_string_lossy().into_owned();
        let bad_path = bad.to_string_lossy().into_owned();

        assert_eq!(check_files(std::slice::from_ref(&good_path), &[]).unwrap(), ExitCode::SUCCESS);

        let err = check_files(&[good_path, bad_path.clone()], &[]).unwrap_err();
        assert!(err.message.contains("1 error(s) in 1 of 2 file(s)"));

        assert!(check_files(&[bad_path], &["x".to_string()]).is_ok());

        let _ = fs::remove_file(good);
        let _ = fs::remove_file(bad);
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let path = temp_source("warn.prw", "Function F()\n    Local i\n    For i := 1 To 3\n    Next j\nReturn\n");
        let path_str = path.to_string_lossy().into_owned();

        assert_eq!(check_files(std::slice::from_ref(&path_str), &[]).unwrap(), ExitCode::SUCCESS);
        assert_eq!(render_file(&path_str, &RenderConfig::default()).unwrap(), ExitCode::SUCCESS);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_render_file_refuses_syntax_errors() {
        let path = temp_source("broken.prw", "Local a := )\n");
        let err = render_file(&path.to_string_lossy(), &RenderConfig::default()).unwrap_err();
        assert!(err.message.contains("not rendered"));
        let _ = fs::remove_file(path);
    }
}
