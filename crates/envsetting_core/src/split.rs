//! Splitting raw collection values.
//!
//! Lists are comma-separated; maps are comma-separated `key:value` pairs. Surrounding whitespace around every
//! piece is insignificant.
//!
//! ## Notes
//! - Trailing *empty* pieces are dropped before trimming (`"a,b,"` has two pieces, `"a,,b"` has three), and an
//!   empty raw value has no pieces at all.
//! - A pair splits on its **first** colon only, so values may contain colons (`url: http://host`).

/// Separator between list items and between map pairs.
pub const ITEM_SEPARATOR: char = ',';

/// Separator between a map key and its value.
pub const PAIR_SEPARATOR: char = ':';

/// Split a raw list value into trimmed pieces.
///
/// ## Examples
/// ```rust
/// use envsetting_core::split::split_list;
///
/// assert_eq!(split_list("one,two , three"), vec!["one", "two", "three"]);
/// assert!(split_list("").is_empty());
/// ```
pub fn split_list(raw: &str) -> Vec<&str> {
    let mut pieces: Vec<&str> = raw.split(ITEM_SEPARATOR).collect();
    while pieces.last().is_some_and(|p| p.is_empty()) {
        pieces.pop();
    }
    pieces.into_iter().map(str::trim).collect()
}

/// Split one map piece into a trimmed `(key, value)` pair.
///
/// ## Returns
/// - `None` if the piece has no [`PAIR_SEPARATOR`].
///
/// ## Examples
/// ```rust
/// use envsetting_core::split::split_pair;
///
/// assert_eq!(split_pair(" url : http://host "), Some(("url", "http://host")));
/// assert_eq!(split_pair("lonely"), None);
/// ```
pub fn split_pair(piece: &str) -> Option<(&str, &str)> {
    piece
        .split_once(PAIR_SEPARATOR)
        .map(|(key, value)| (key.trim(), value.trim()))
}
