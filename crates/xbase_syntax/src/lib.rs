//! Shared syntax front end for the xBase dialect: lexer, parser, AST, diagnostics and canonical rendering.
//!
//! This crate is dependency-light and intended for reuse across the checker CLI, editor integrations and code
//! generators.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does not do name resolution or type checking.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `xbase_core::lang` registries.
//! - Nothing here aborts on bad input: lexing and parsing always produce a result plus a list of diagnostics.
//!
//! ## Examples
//! ```rust
//! use xbase_syntax::{parser, render};
//!
//! let output = parser::parse_source("Local a := 5 + 10 * 2\n", "main.prw");
//! assert!(output.diagnostics.is_empty());
//! let text = render::render_program(&output.program, &render::RenderConfig::default());
//! assert_eq!(text, "Local a := (5 + (10 * 2))\n");
//! ```
//!
//! ## See also
//! - `xbase_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod token_helpers;
