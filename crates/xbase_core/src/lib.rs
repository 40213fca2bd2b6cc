//! Provide the canonical language vocabulary shared by the xBase lexer, parser, renderer and analyzer.
//!
//! This crate is intentionally small and dependency-free. It contains `const` registries that map spellings to
//! stable ids and back, so the rest of the front end never compares raw strings to recognize a keyword or operator.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no AST types.
//! - The dialect is case-insensitive for reserved words; the registries expose both exact and case-folding lookups
//!   so callers decide explicitly which one they want.

pub mod lang;
