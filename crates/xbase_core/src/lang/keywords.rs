//! Define the reserved keyword vocabulary for the xBase dialect.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, aliases, categories and provenance.
//!
//! ## Notes
//! - Reserved words are **case-insensitive** in the dialect (`EndIf`, `ENDIF` and `endif` are one keyword). The
//!   lexer uses [`from_str_ignore_case`]; [`from_str`] matches exact spellings only and exists for tooling.
//! - Canonical spellings are PascalCase, which is what the canonical renderer emits by default.
//! - The boolean literals also have dotted spellings (`.T.`, `.F.`, ...) recorded as aliases, so the lexer can
//!   resolve dotted words through this registry as well.
//!
//! ## Examples
//! ```rust
//! use xbase_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str_ignore_case("endwhile"), Some(KeywordId::EndDo)); // alias
//! assert_eq!(keywords::from_str_ignore_case(".t."), Some(KeywordId::True));
//! assert_eq!(keywords::as_str(KeywordId::EndDo), "EndDo");
//! ```

use super::registry::Dialect;

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Function,
    Static,
    Class,
    Method,
    Data,
    From,
    Local,
    Public,
    Private,

    // Control flow
    Return,
    If,
    ElseIf,
    Else,
    While,
    Do,
    For,
    To,
    Step,

    // Block terminators
    EndIf,
    EndDo,
    Next,
    EndClass,
    EndFunction,
    EndMethod,

    // Literals / receivers
    True,
    False,
    Nil,
    SelfKw,
}

/// High-level grouping of keywords.
///
/// ## Notes
/// - The parser uses it to tell expression starters (literals, `Self`, block expressions) from declarations and
///   block terminators; the finer decisions stay in the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    ControlFlow,
    Terminator,
    Literal,
    Receiver,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `canonical` is the preferred spelling for docs and rendering.
/// - `aliases` are additional spellings accepted by the lexer.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub category: KeywordCategory,
    pub origin: Dialect,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    info(KeywordId::Function, "Function", &[], KeywordCategory::Declaration, Dialect::Clipper),
    info(KeywordId::Static, "Static", &[], KeywordCategory::Declaration, Dialect::Clipper),
    info(KeywordId::Class, "Class", &[], KeywordCategory::Declaration, Dialect::Harbour),
    info(KeywordId::Method, "Method", &[], KeywordCategory::Declaration, Dialect::Harbour),
    info(KeywordId::Data, "Data", &[], KeywordCategory::Declaration, Dialect::Harbour),
    info(KeywordId::From, "From", &[], KeywordCategory::Declaration, Dialect::Harbour),
    info(KeywordId::Local, "Local", &[], KeywordCategory::Declaration, Dialect::Clipper),
    info(KeywordId::Public, "Public", &[], KeywordCategory::Declaration, Dialect::Clipper),
    info(KeywordId::Private, "Private", &[], KeywordCategory::Declaration, Dialect::Clipper),
    // Control flow
    info(KeywordId::Return, "Return", &[], KeywordCategory::ControlFlow, Dialect::Clipper),
    info(KeywordId::If, "If", &[], KeywordCategory::ControlFlow, Dialect::Clipper),
    info(KeywordId::ElseIf, "ElseIf", &[], KeywordCategory::ControlFlow, Dialect::Clipper),
    info(KeywordId::Else, "Else", &[], KeywordCategory::ControlFlow, Dialect::Clipper),
    info(KeywordId::While, "While", &[], KeywordCategory::ControlFlow, Dialect::Clipper),
    info(KeywordId::Do, "Do", &[], KeywordCategory::ControlFlow, Dialect::Clipper),
    info(KeywordId::For, "For", &[], KeywordCategory::ControlFlow, Dialect::Clipper),
    info(KeywordId::To, "To", &[], KeywordCategory::ControlFlow, Dialect::Clipper),
    info(KeywordId::Step, "Step", &[], KeywordCategory::ControlFlow, Dialect::Clipper),
    // Block terminators
    info(KeywordId::EndIf, "EndIf", &[], KeywordCategory::Terminator, Dialect::Clipper),
    info(KeywordId::EndDo, "EndDo", &["EndWhile"], KeywordCategory::Terminator, Dialect::Clipper),
    info(KeywordId::Next, "Next", &[], KeywordCategory::Terminator, Dialect::Clipper),
    info(KeywordId::EndClass, "EndClass", &[], KeywordCategory::Terminator, Dialect::Harbour),
    info(KeywordId::EndFunction, "EndFunction", &["EndFunc"], KeywordCategory::Terminator, Dialect::Advpl),
    info(KeywordId::EndMethod, "EndMethod", &[], KeywordCategory::Terminator, Dialect::Harbour),
    // Literals / receivers
    info(KeywordId::True, "True", &[".T.", ".Y."], KeywordCategory::Literal, Dialect::Clipper),
    info(KeywordId::False, "False", &[".F.", ".N."], KeywordCategory::Literal, Dialect::Clipper),
    info(KeywordId::Nil, "Nil", &[], KeywordCategory::Literal, Dialect::Clipper),
    info(KeywordId::SelfKw, "Self", &[], KeywordCategory::Receiver, Dialect::Harbour),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical (PascalCase) spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by exact spelling (canonical or alias).
///
/// ## Parameters
/// - `s`: Candidate keyword spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry exactly.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    if let Some(k) = KEYWORDS.iter().find(|k| k.canonical == s) {
        return Some(k.id);
    }
    KEYWORDS
        .iter()
        .find(|k| {
            let aliases: &[&str] = k.aliases;
            aliases.contains(&s)
        })
        .map(|k| k.id)
}

/// Lookup by spelling, ignoring ASCII case. This is the lookup the lexer uses.
///
/// ## Parameters
/// - `s`: Candidate keyword spelling, in any case.
///
/// ## Returns
/// - `Some(KeywordId)` if the case-folded spelling matches a canonical spelling or alias.
/// - `None` otherwise.
pub fn from_str_ignore_case(s: &str) -> Option<KeywordId> {
    if let Some(k) = KEYWORDS.iter().find(|k| k.canonical.eq_ignore_ascii_case(s)) {
        return Some(k.id);
    }
    KEYWORDS
        .iter()
        .find(|k| k.aliases.iter().any(|a| a.eq_ignore_ascii_case(s)))
        .map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    category: KeywordCategory,
    origin: Dialect,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        aliases,
        category,
        origin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(from_str_ignore_case("FUNCTION"), Some(KeywordId::Function));
        assert_eq!(from_str_ignore_case("function"), Some(KeywordId::Function));
        assert_eq!(from_str_ignore_case("EndFunc"), Some(KeywordId::EndFunction));
        assert_eq!(from_str_ignore_case("ENDWHILE"), Some(KeywordId::EndDo));
        assert_eq!(from_str_ignore_case(".n."), Some(KeywordId::False));
        assert_eq!(from_str_ignore_case("cliente"), None);
    }

    #[test]
    fn exact_lookup_respects_case() {
        assert_eq!(from_str("EndIf"), Some(KeywordId::EndIf));
        assert_eq!(from_str("endif"), None);
    }
}
