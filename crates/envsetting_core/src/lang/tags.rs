//! Builtin type-tag vocabulary.
//!
//! A type tag names the coercion applied to a raw environment value. This registry covers the tags the runtime
//! knows about out of the box, split into two kinds:
//! - [`TagKind::Coercion`]: seeded into the runtime dispatch table at startup (and overridable there);
//! - [`TagKind::Primitive`]: never seeded; reached only through the closed primitive fallback when no coercion is
//!   registered under the tag.
//!
//! Any spelling not in this registry is a user tag and is used verbatim.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Aliases cover common spellings from other ecosystems (`Array`, `Hash`, `Integer`, …).
//!
//! ## Examples
//! ```rust
//! use envsetting_core::lang::tags::{self, TagId, TagKind};
//!
//! assert_eq!(tags::from_str("Hash"), Some(TagId::Map));
//! assert_eq!(tags::kind(TagId::Integer), TagKind::Primitive);
//! assert_eq!(tags::canonicalize("Integer"), "integer");
//! assert_eq!(tags::canonicalize("Set"), "Set");
//! ```

use super::registry::{Example, LangItemInfo, Stability};

/// Stable identifier for a builtin type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagId {
    StringUnlessFalsey,
    Boolean,
    Symbol,
    List,
    Map,
    Integer,
    Float,
    String,
}

/// How the runtime reaches a builtin tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// Seeded into the dispatch table.
    Coercion,
    /// Parsed by the primitive fallback when nothing is registered under the tag.
    Primitive,
}

/// Metadata for a builtin type tag.
#[derive(Debug, Clone, Copy)]
pub struct TagInfo {
    pub item: LangItemInfo<TagId>,
    pub kind: TagKind,
}

/// Registry of builtin type tags.
pub const TAGS: &[TagInfo] = &[
    info(
        TagId::StringUnlessFalsey,
        "string_unless_falsey",
        &["StringUnlessFalsey"],
        TagKind::Coercion,
        "The raw string, or boolean `false` when the raw string matches the falsey pattern. The default tag.",
        &[
            Example {
                code: "FEATURE=enabled",
                note: Some("Reads as the string `\"enabled\"`."),
            },
            Example {
                code: "FEATURE=off",
                note: Some("Reads as boolean `false`, never the string `\"off\"`."),
            },
        ],
    ),
    info(
        TagId::Boolean,
        "boolean",
        &["Boolean", "bool"],
        TagKind::Coercion,
        "`false` when the raw string matches the falsey pattern, otherwise `true`.",
        &[],
    ),
    info(
        TagId::Symbol,
        "symbol",
        &["Symbol"],
        TagKind::Coercion,
        "A symbol carrying the raw string. The default key tag for maps.",
        &[],
    ),
    info(
        TagId::List,
        "list",
        &["List", "Array", "array", "Vec"],
        TagKind::Coercion,
        "Comma-separated list; each trimmed piece is cast with the `of` tag.",
        &[Example {
            code: "HOSTS=a, b ,c",
            note: Some("Reads as `[\"a\", \"b\", \"c\"]`."),
        }],
    ),
    info(
        TagId::Map,
        "map",
        &["Map", "Hash", "hash", "HashMap"],
        TagKind::Coercion,
        "Comma-separated `key:value` pairs; keys cast with the `keys` tag, values with the `of` tag.",
        &[Example {
            code: "LIMITS=one: 1, two: 2",
            note: Some("With `of = integer`, reads as `{one: 1, two: 2}` with symbol keys."),
        }],
    ),
    info(
        TagId::Integer,
        "integer",
        &["Integer", "int", "i64"],
        TagKind::Primitive,
        "Signed 64-bit integer parsed from the trimmed raw string.",
        &[],
    ),
    info(
        TagId::Float,
        "float",
        &["Float", "f64"],
        TagKind::Primitive,
        "64-bit float parsed from the trimmed raw string.",
        &[],
    ),
    info(
        TagId::String,
        "string",
        &["String", "str"],
        TagKind::Primitive,
        "The raw string, unchanged (falsey spellings stay strings).",
        &[],
    ),
];

/// Resolve a spelling to a builtin tag.
///
/// ## Parameters
/// - `name`: Candidate tag (canonical or alias).
///
/// ## Returns
/// - `Some(TagId)` if the spelling matches this registry.
/// - `None` otherwise (the spelling is a user tag).
pub fn from_str(name: &str) -> Option<TagId> {
    TAGS.iter().find(|t| t.item.spells(name)).map(|t| t.item.id)
}

/// Return the canonical spelling for a builtin tag (e.g. `"list"`).
#[inline]
pub fn as_str(id: TagId) -> &'static str {
    info_for(id).item.canonical
}

/// Return the accepted aliases for a builtin tag.
#[inline]
pub fn aliases(id: TagId) -> &'static [&'static str] {
    info_for(id).item.aliases
}

/// Return how the runtime reaches a builtin tag.
#[inline]
pub fn kind(id: TagId) -> TagKind {
    info_for(id).kind
}

/// Return true for the collection tags (`list`, `map`).
#[inline]
pub fn is_collection(id: TagId) -> bool {
    matches!(id, TagId::List | TagId::Map)
}

/// Map a spelling onto its canonical form.
///
/// Builtin aliases collapse to the canonical spelling; any other spelling is returned unchanged.
pub fn canonicalize(name: &str) -> &str {
    match from_str(name) {
        Some(id) => as_str(id),
        None => name,
    }
}

/// Iterate the builtin tags of one kind, in registry order.
pub fn of_kind(kind: TagKind) -> impl Iterator<Item = TagId> {
    TAGS.iter().filter(move |t| t.kind == kind).map(|t| t.item.id)
}

/// Tag applied when a variable declares no explicit class.
pub const DEFAULT_CLASS: TagId = TagId::StringUnlessFalsey;

/// Tag applied to map keys when a variable declares no `keys` option.
pub const DEFAULT_KEY_CLASS: TagId = TagId::Symbol;

/// Return the full metadata entry for a builtin tag.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (programming error).
pub fn info_for(id: TagId) -> &'static TagInfo {
    TAGS.iter()
        .find(|t| t.item.id == id)
        .expect("tag info missing")
}

const fn info(
    id: TagId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    kind: TagKind,
    description: &'static str,
    examples: &'static [Example],
) -> TagInfo {
    TagInfo {
        item: LangItemInfo {
            id,
            canonical,
            aliases,
            description,
            since_version: Some("0.1.0"),
            stability: Stability::Stable,
            examples,
        },
        kind,
    }
}
