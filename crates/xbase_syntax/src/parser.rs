//! Parser for the xBase dialect
//!
//! Converts the lexer's token stream into an AST. The parser pulls tokens lazily (one current token plus one peek
//! token) and never aborts: syntax errors become diagnostics and the tree keeps a partial node where a construct
//! could not be finished.
//!
//! ## Examples
//!
//! ```rust
//! use xbase_syntax::parser;
//!
//! let source = "Function Soma(a, b)\n    Return a + b\nEndFunction\n";
//! let output = parser::parse_source(source, "soma.prw");
//! assert!(output.diagnostics.is_empty());
//! assert_eq!(output.program.statements.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::{Diagnostic, errors};
use crate::lexer::{Lexer, Token, TokenKind};
use xbase_core::lang::keywords::{self, KeywordCategory, KeywordId};
use xbase_core::lang::operators::{self, OperatorId};
use xbase_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
