//! Shareable metadata for `envsetting_core::lang` registries.
//!
//! Every registry in `envsetting_core::lang` is a `const` table of items that share the same core fields.
//! This submodule provides those small, dependency-free metadata types.
//!
//! ## Notes
//! - These types are `Copy`-friendly so registries can live in `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; behaviour lives in the runtime crate.

/// Identify the crate version a vocabulary item is available since.
///
/// ## Examples
/// ```rust
/// use envsetting_core::lang::registry::SinceVersion;
///
/// let since: SinceVersion = "0.1.0";
/// assert!(!since.is_empty());
/// ```
pub type SinceVersion = &'static str;

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Notes
/// - Intended for docs/tooling (e.g. to warn on deprecated spellings), not for feature-gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}

/// A small example snippet for documentation.
///
/// ## Notes
/// - `code` is usually a Rust snippet or an `NAME=value` environment line.
/// - `note` is an optional short explanation (one or two sentences).
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}

/// Shared metadata shape for “registry-first” vocabulary items.
///
/// - stable identity (`id`)
/// - accepted spellings (`canonical` + `aliases`)
/// - documentation (`description` + `examples`)
/// - provenance (`since_version`, `stability`)
///
/// Registries that need extra per-item data (e.g. a tag's kind) wrap this struct in an “extension” info type.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub since_version: Option<SinceVersion>,
    pub stability: Stability,
    pub examples: &'static [Example],
}

impl<Id: Copy> LangItemInfo<Id> {
    /// Return true if `name` is this item's canonical spelling or one of its aliases.
    pub fn spells(&self, name: &str) -> bool {
        self.canonical == name || self.aliases.contains(&name)
    }
}
