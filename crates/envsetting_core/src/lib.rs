//! Provide the shared, pure vocabulary and helpers behind `envsetting`.
//!
//! This crate is intentionally small and dependency-free. It contains deterministic helpers that both:
//! - the runtime (`envsetting`) uses to resolve type tags, split raw values and format errors, and
//! - the derive macro (`envsetting_derive`) uses to compute accessor names and canonical tag spellings at expansion
//!   time.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, no regex engine.
//! - Current scope: the builtin type-tag registry, the error-kind registry, the default falsey pattern source,
//!   list/pair splitting, and the missing-variable message format.

pub mod format;
pub mod lang;
pub mod split;

/// Source of the default falsey pattern.
///
/// Matches the empty string, `0`, `disable`, `disabled`, `false`, `no` and `off`, case-insensitively, against the
/// whole raw value.
///
/// ## Examples
/// ```rust
/// use envsetting_core::DEFAULT_FALSEY_PATTERN;
///
/// assert!(DEFAULT_FALSEY_PATTERN.starts_with("(?i)^"));
/// ```
pub const DEFAULT_FALSEY_PATTERN: &str = r"(?i)^(|0|disabled?|false|no|off)$";

/// Convert a variable name into the name of its generated accessor.
///
/// Accessors are the lowercased variable name; the presence accessor appends [`PRESENCE_SUFFIX`].
///
/// ## Examples
/// ```rust
/// use envsetting_core::accessor_name;
///
/// assert_eq!(accessor_name("DATABASE_URL"), "database_url");
/// ```
pub fn accessor_name(var: &str) -> String {
    var.to_lowercase()
}

/// Suffix that turns a value accessor into its presence accessor (`port` -> `port?`).
pub const PRESENCE_SUFFIX: char = '?';
