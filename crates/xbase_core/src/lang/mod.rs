//! xBase language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, operators, punctuation and
//! the runtime library functions that are always in scope.
//!
//! The design goal is to avoid stringly-typed checks scattered across the front end. Callers work with **stable
//! IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   canonical rendering, symbol seeding).
//!
//! ## Examples
//! ```rust
//! use xbase_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str_ignore_case("ENDIF"), Some(KeywordId::EndIf));
//! assert_eq!(keywords::as_str(KeywordId::EndIf), "EndIf");
//! ```

pub mod builtins;
pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod registry;
