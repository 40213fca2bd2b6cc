//! Runtime library function vocabulary.
//!
//! This module lists the runtime functions that every program can call without declaring them. The semantic
//! analyzer seeds its resolution with these names, since the runtime library is not part of the analyzed source.
//! Callers should use the stable identifier [`BuiltinFnId`] for identity and query spellings through
//! [`BuiltinFnInfo`] / [`BUILTIN_FUNCTIONS`].
//!
//! ## Notes
//! - Function names in the dialect are case-insensitive, so callers resolving source identifiers want
//!   [`from_str_ignore_case`]. [`from_str`] matches exact spellings.
//! - Aliases cover alternative spellings accepted by the runtime (e.g. `"RTrim"` for `"Trim"`).
//!
//! ## Examples
//! ```rust
//! use xbase_core::lang::builtins::{self, BuiltinFnId};
//!
//! assert_eq!(builtins::from_str_ignore_case("ALLTRIM"), Some(BuiltinFnId::AllTrim));
//! assert_eq!(builtins::as_str(BuiltinFnId::AllTrim), "AllTrim");
//! ```

use super::registry::{Dialect, LangItemInfo};

/// Stable identifier for a runtime library function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinFnId {
    // Strings
    Len,
    Str,
    Val,
    AllTrim,
    Trim,
    SubStr,
    Upper,
    Lower,
    Space,
    Replicate,
    StrZero,
    Transform,
    At,

    // Dates
    Date,
    Time,
    CToD,
    DToC,
    DToS,
    Year,
    Month,
    Day,

    // Numbers
    Int,
    Round,
    Abs,
    Max,
    Min,

    // Arrays
    AAdd,
    AScan,
    ASize,
    AClone,

    // Values
    Empty,
    ValType,

    // Console / UI
    QOut,
    ConOut,
    Alert,
    MsgInfo,
    MsgAlert,
}

/// Metadata for a runtime library function.
///
/// ## Notes
/// - `canonical` is the spelling used in docs and by the renderer.
/// - `aliases` are additional spellings accepted by the runtime.
pub type BuiltinFnInfo = LangItemInfo<BuiltinFnId>;

/// Registry of all runtime library functions.
pub const BUILTIN_FUNCTIONS: &[BuiltinFnInfo] = &[
    // Strings
    info(BuiltinFnId::Len, "Len", &[], "Return the length of a string or array.", Dialect::Clipper),
    info(BuiltinFnId::Str, "Str", &[], "Convert a number to a string.", Dialect::Clipper),
    info(BuiltinFnId::Val, "Val", &[], "Convert a string to a number.", Dialect::Clipper),
    info(BuiltinFnId::AllTrim, "AllTrim", &[], "Remove leading and trailing blanks.", Dialect::Clipper),
    info(BuiltinFnId::Trim, "Trim", &["RTrim"], "Remove trailing blanks.", Dialect::Clipper),
    info(BuiltinFnId::SubStr, "SubStr", &[], "Extract a substring.", Dialect::Clipper),
    info(BuiltinFnId::Upper, "Upper", &[], "Convert a string to upper case.", Dialect::Clipper),
    info(BuiltinFnId::Lower, "Lower", &[], "Convert a string to lower case.", Dialect::Clipper),
    info(BuiltinFnId::Space, "Space", &[], "Return a string of blanks.", Dialect::Clipper),
    info(BuiltinFnId::Replicate, "Replicate", &[], "Repeat a string.", Dialect::Clipper),
    info(BuiltinFnId::StrZero, "StrZero", &[], "Convert a number to a zero-padded string.", Dialect::Clipper),
    info(BuiltinFnId::Transform, "Transform", &[], "Format a value with a picture mask.", Dialect::Clipper),
    info(BuiltinFnId::At, "At", &[], "Return the position of a substring.", Dialect::Clipper),
    // Dates
    info(BuiltinFnId::Date, "Date", &[], "Return the current date.", Dialect::Clipper),
    info(BuiltinFnId::Time, "Time", &[], "Return the current time as a string.", Dialect::Clipper),
    info(BuiltinFnId::CToD, "CToD", &[], "Convert a string to a date.", Dialect::Clipper),
    info(BuiltinFnId::DToC, "DToC", &[], "Convert a date to a string.", Dialect::Clipper),
    info(BuiltinFnId::DToS, "DToS", &[], "Convert a date to a sortable `YYYYMMDD` string.", Dialect::Clipper),
    info(BuiltinFnId::Year, "Year", &[], "Return the year of a date.", Dialect::Clipper),
    info(BuiltinFnId::Month, "Month", &[], "Return the month of a date.", Dialect::Clipper),
    info(BuiltinFnId::Day, "Day", &[], "Return the day of a date.", Dialect::Clipper),
    // Numbers
    info(BuiltinFnId::Int, "Int", &[], "Truncate a number to an integer.", Dialect::Clipper),
    info(BuiltinFnId::Round, "Round", &[], "Round a number to a number of decimals.", Dialect::Clipper),
    info(BuiltinFnId::Abs, "Abs", &[], "Return the absolute value of a number.", Dialect::Clipper),
    info(BuiltinFnId::Max, "Max", &[], "Return the larger of two values.", Dialect::Clipper),
    info(BuiltinFnId::Min, "Min", &[], "Return the smaller of two values.", Dialect::Clipper),
    // Arrays
    info(BuiltinFnId::AAdd, "AAdd", &[], "Append an element to an array.", Dialect::Clipper),
    info(BuiltinFnId::AScan, "AScan", &[], "Search an array for a value.", Dialect::Clipper),
    info(BuiltinFnId::ASize, "ASize", &[], "Grow or shrink an array.", Dialect::Clipper),
    info(BuiltinFnId::AClone, "AClone", &[], "Duplicate a (nested) array.", Dialect::Clipper),
    // Values
    info(BuiltinFnId::Empty, "Empty", &[], "Test whether a value is empty.", Dialect::Clipper),
    info(BuiltinFnId::ValType, "ValType", &[], "Return the type letter of a value.", Dialect::Clipper),
    // Console / UI
    info(BuiltinFnId::QOut, "QOut", &[], "Print values to the console.", Dialect::Clipper),
    info(BuiltinFnId::ConOut, "ConOut", &[], "Write to the server console log.", Dialect::Advpl),
    info(BuiltinFnId::Alert, "Alert", &[], "Show a modal alert.", Dialect::Clipper),
    info(BuiltinFnId::MsgInfo, "MsgInfo", &[], "Show an information dialog.", Dialect::Advpl),
    info(BuiltinFnId::MsgAlert, "MsgAlert", &[], "Show a warning dialog.", Dialect::Advpl),
];

/// Return the canonical spelling for a runtime function.
///
/// ## Examples
/// ```rust
/// use xbase_core::lang::builtins::{self, BuiltinFnId};
///
/// assert_eq!(builtins::as_str(BuiltinFnId::DToS), "DToS");
/// ```
pub fn as_str(id: BuiltinFnId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a runtime function.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: BuiltinFnId) -> &'static BuiltinFnInfo {
    BUILTIN_FUNCTIONS
        .iter()
        .find(|b| b.id == id)
        .expect("builtin info missing")
}

/// Resolve a spelling to a runtime function identifier.
///
/// ## Parameters
/// - `name`: Candidate function name (canonical or alias).
///
/// ## Returns
/// - `Some(BuiltinFnId)` if `name` matches a canonical spelling or alias.
/// - `None` otherwise.
///
/// ## Notes
/// - Matching is **case-sensitive**.
pub fn from_str(name: &str) -> Option<BuiltinFnId> {
    if let Some(b) = BUILTIN_FUNCTIONS.iter().find(|b| b.canonical == name) {
        return Some(b.id);
    }
    BUILTIN_FUNCTIONS
        .iter()
        .find(|b| {
            let aliases: &[&str] = b.aliases;
            aliases.contains(&name)
        })
        .map(|b| b.id)
}

/// Resolve a spelling to a runtime function identifier, ignoring ASCII case.
pub fn from_str_ignore_case(name: &str) -> Option<BuiltinFnId> {
    BUILTIN_FUNCTIONS
        .iter()
        .find(|b| b.matches_ignore_case(name))
        .map(|b| b.id)
}

const fn info(
    id: BuiltinFnId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
    origin: Dialect,
) -> BuiltinFnInfo {
    LangItemInfo {
        id,
        canonical,
        aliases,
        description,
        origin,
    }
}
