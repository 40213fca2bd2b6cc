//! Operator vocabulary.
//!
//! This module defines the canonical operator set (symbol operators like `+` and dotted word operators like
//! `.AND.`) along with precedence, associativity, and fixity metadata.
//!
//! ## Notes
//! - Symbol spellings are matched exactly by [`from_str`]. Dotted words are case-insensitive in the dialect, so the
//!   lexer resolves them through [`from_str_ignore_case`]. Entries spelled as dotted words have
//!   [`OperatorInfo::is_dotted_spelling`] set to `true`.
//! - `precedence` mirrors the parser's binding-power ladder; the guardrail tests keep the two in sync.
//! - `-` is both an infix and a prefix operator. The registry records its infix role; the parser owns the prefix
//!   role.
//!
//! ## Examples
//! ```rust
//! use xbase_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("<>"), Some(OperatorId::NotEq));
//! assert_eq!(operators::from_str_ignore_case(".and."), Some(OperatorId::And));
//! assert!(operators::info_for(OperatorId::Star).precedence > operators::info_for(OperatorId::Plus).precedence);
//! ```

use super::registry::Dialect;

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Define whether an operator is infix (binary) or prefix (unary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Assignment
    Assign,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Comparison
    EqEq,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Contains,

    // Logical
    Not,
    And,
    Or,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `spellings` may contain multiple accepted spellings for the same operator id (synonyms); the first one is the
///   canonical spelling used by the renderer.
/// - `precedence` is a relative ordering where higher binds tighter.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spellings: &'static [&'static str],
    pub precedence: u8,
    pub associativity: Associativity,
    pub fixity: Fixity,
    pub is_dotted_spelling: bool,
    pub origin: Dialect,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Assignment
    op(OperatorId::Assign, &[":="], 10, Associativity::Right, Fixity::Infix, false),
    // Arithmetic
    op(OperatorId::Plus, &["+"], 60, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Minus, &["-"], 60, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Star, &["*"], 70, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Slash, &["/"], 70, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Percent, &["%"], 70, Associativity::Left, Fixity::Infix, false),
    // Comparison
    op(OperatorId::EqEq, &["=="], 40, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Eq, &["="], 40, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::NotEq, &["!=", "<>", "#"], 40, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Lt, &["<"], 50, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::LtEq, &["<="], 50, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Gt, &[">"], 50, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::GtEq, &[">="], 50, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Contains, &["$"], 50, Associativity::Left, Fixity::Infix, false),
    // Logical
    op(OperatorId::Not, &["!", ".NOT."], 80, Associativity::Right, Fixity::Prefix, false),
    op(OperatorId::And, &[".AND."], 30, Associativity::Left, Fixity::Infix, true),
    op(OperatorId::Or, &[".OR."], 20, Associativity::Left, Fixity::Infix, true),
];

/// Return the canonical spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spellings.first().copied().unwrap_or("")
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
///
/// ## Parameters
/// - `spelling`: Candidate operator token.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
///
/// ## Notes
/// - Matching is **case-sensitive**; use [`from_str_ignore_case`] for dotted words.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| {
            let spellings: &[&str] = o.spellings;
            spellings.contains(&spelling)
        })
        .map(|o| o.id)
}

/// Resolve an operator spelling ignoring ASCII case (`.and.`, `.And.`, `.AND.`).
pub fn from_str_ignore_case(spelling: &str) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| o.spellings.iter().any(|s| s.eq_ignore_ascii_case(spelling)))
        .map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spellings: &'static [&'static str],
    precedence: u8,
    associativity: Associativity,
    fixity: Fixity,
    is_dotted_spelling: bool,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spellings,
        precedence,
        associativity,
        fixity,
        is_dotted_spelling,
        origin: Dialect::Clipper,
    }
}
