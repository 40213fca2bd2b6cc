//! Shareable metadata for `xbase_core::lang` registries.
//!
//! The `xbase_core::lang` module is a set of **registry-first** vocabularies. This submodule provides the small,
//! dependency-free metadata types that are reused across all of them.
//!
//! ## Notes
//! - These types are `Copy`-friendly so registries can live in `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules lives in the lexer/parser.

/// Identify the dialect family a vocabulary item comes from.
///
/// The front end accepts the union of the families below; provenance is kept so tooling can warn about
/// spellings that a given target runtime does not understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Classic Clipper / dBase vocabulary, understood by every descendant.
    Clipper,
    /// Harbour / xHarbour extensions.
    Harbour,
    /// ERP scripting extensions (AdvPL / TLPP).
    Advpl,
}

/// Shared metadata shape for "registry-first" vocabulary items.
///
/// Registries that need extra per-item data (e.g. operator precedence, keyword category) wrap or mirror this
/// struct in their own info type.
///
/// ## Notes
/// - `description` is mandatory to keep docs/tooling consistent.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub origin: Dialect,
}

impl<Id> LangItemInfo<Id> {
    /// Return `true` if `spelling` equals the canonical spelling or one of the aliases, ignoring ASCII case.
    pub fn matches_ignore_case(&self, spelling: &str) -> bool {
        self.canonical.eq_ignore_ascii_case(spelling) || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(spelling))
    }
}
