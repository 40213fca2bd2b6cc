#![forbid(unsafe_code)]
//! xBase front end
//!
//! Turns source text of the xBase business scripting dialect (Clipper / Harbour / AdvPL family) into a validated
//! AST: lexing, parsing and two-pass semantic analysis, plus a thin CLI driver.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Front end**: Lexer, parser and analyzer never fail on bad input. Problems become diagnostics and the caller
//!   decides how to present them.
//!
//! ## Examples
//!
//! ```rust
//! let outcome = xbase::frontend::check_source("Function Dobro(n)\n    Return n * 2\n", "dobro.prw");
//! assert!(outcome.is_ok());
//! assert_eq!(outcome.program.functions().count(), 1);
//! ```

pub mod cli;
pub mod frontend;

pub use frontend::analyzer;
pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;
pub use frontend::render;
pub use frontend::symbols;

pub use frontend::{CheckOutcome, check_source};
