//! Error-kind vocabulary.
//!
//! The runtime's error enum maps every variant onto one of these kinds so callers (and docs) can tell failure
//! classes apart without matching on message text: a typo against the generated accessors (`UnknownAccessor`) is
//! not the same failure as a deliberate keyed read of an undeclared name (`NotConfigured`), and neither is a
//! malformed value (`CastFailure`).

use super::registry::{Example, LangItemInfo, Stability};

/// Stable identifier for an error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingRequired,
    NotConfigured,
    UnknownAccessor,
    UnknownType,
    CastFailure,
    TypeMismatch,
    InvalidPattern,
    InvalidEntry,
    NotUnicode,
}

/// Metadata for an error kind.
pub type ErrorKindInfo = LangItemInfo<ErrorKind>;

/// Registry of error kinds.
pub const ERROR_KINDS: &[ErrorKindInfo] = &[
    info(
        ErrorKind::MissingRequired,
        "MissingRequired",
        &["KeyError"],
        "A variable was declared without a default and the environment does not define it.",
        &[Example {
            code: r#"env.use_var("DATABASE_URL", VarOptions::described("Postgres connection string"))?;"#,
            note: Some("Fails at declaration time when `DATABASE_URL` is unset."),
        }],
    ),
    info(
        ErrorKind::NotConfigured,
        "NotConfigured",
        &[],
        "A keyed read named a variable that was never declared.",
        &[],
    ),
    info(
        ErrorKind::UnknownAccessor,
        "UnknownAccessor",
        &["MethodNotFound", "NoMethodError"],
        "An accessor was invoked for a name that no declaration generated.",
        &[],
    ),
    info(
        ErrorKind::UnknownType,
        "UnknownType",
        &[],
        "A type tag has no registered coercion and is not a recognised primitive.",
        &[],
    ),
    info(
        ErrorKind::CastFailure,
        "CastFailure",
        &["ValueError"],
        "A raw value could not be coerced into the requested type.",
        &[Example {
            code: "PORT=eighty",
            note: Some("Declared with `class = integer`, reading fails with a cast failure."),
        }],
    ),
    info(
        ErrorKind::TypeMismatch,
        "TypeMismatch",
        &["TypeError"],
        "A coerced value was extracted into an incompatible Rust type.",
        &[],
    ),
    info(
        ErrorKind::InvalidPattern,
        "InvalidPattern",
        &[],
        "A falsey pattern failed to compile.",
        &[],
    ),
    info(
        ErrorKind::InvalidEntry,
        "InvalidEntry",
        &[],
        "A name or value cannot be written to the store (empty name, `=` in the name, or a NUL byte).",
        &[Example {
            code: r#"env.use_var("BAD=NAME", VarOptions::new().default("x"))?;"#,
            note: Some("Rejected before the process environment is touched."),
        }],
    ),
    info(
        ErrorKind::NotUnicode,
        "NotUnicode",
        &[],
        "A variable is present in the store but its value is not valid UTF-8.",
        &[],
    ),
];

/// Return the canonical spelling for an error kind (e.g. `"MissingRequired"`).
#[inline]
pub fn as_str(kind: ErrorKind) -> &'static str {
    info_for(kind).canonical
}

/// Return the user-facing description for an error kind.
#[inline]
pub fn description(kind: ErrorKind) -> &'static str {
    info_for(kind).description
}

/// Resolve a spelling to an error kind.
///
/// Matching is case-sensitive.
pub fn from_str(name: &str) -> Option<ErrorKind> {
    if let Some(e) = ERROR_KINDS.iter().find(|e| e.canonical == name) {
        return Some(e.id);
    }
    ERROR_KINDS.iter().find(|e| e.aliases.contains(&name)).map(|e| e.id)
}

/// Return full metadata for an error kind.
///
/// ## Panics
/// - If the registry is missing an entry for `kind` (programming error).
pub fn info_for(kind: ErrorKind) -> &'static ErrorKindInfo {
    ERROR_KINDS
        .iter()
        .find(|e| e.id == kind)
        .expect("error kind info missing")
}

const fn info(
    id: ErrorKind,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
    examples: &'static [Example],
) -> ErrorKindInfo {
    LangItemInfo {
        id,
        canonical,
        aliases,
        description,
        since_version: Some("0.1.0"),
        stability: Stability::Stable,
        examples,
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(as_str(*self))
    }
}
