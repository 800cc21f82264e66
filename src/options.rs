//! Per-variable declaration options.
//!
//! [`VarOptions`] records how a variable is cast (`class`, `of`, `keys`), what to write into the store when it is
//! missing (`default`), and the description shown when it is missing without a default.
//!
//! ## Examples
//! ```rust
//! use envsetting::{Tag, VarOptions};
//!
//! let opts = VarOptions::new().class("Array").of("Integer").default("1,2,3");
//! assert_eq!(opts.class_tag(), Some(&Tag::new("list")));
//! assert_eq!(opts.default_value(), Some("1,2,3"));
//! ```

use std::fmt;

use envsetting_core::lang::tags::{self, TagId};

/// A type tag, canonicalized through the builtin vocabulary.
///
/// Builtin aliases collapse to their canonical spelling (`Array` becomes `list`); any other spelling is kept verbatim
/// as a user tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(tags::canonicalize(name.as_ref()).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The builtin tag this names, if any.
    pub fn builtin(&self) -> Option<TagId> {
        tags::from_str(&self.0)
    }

    /// Whether this names the builtin list or map coercion.
    pub fn is_collection(&self) -> bool {
        self.builtin().is_some_and(tags::is_collection)
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Tag::new(name)
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Tag::new(name)
    }
}

impl From<&String> for Tag {
    fn from(name: &String) -> Self {
        Tag::new(name)
    }
}

impl From<TagId> for Tag {
    fn from(id: TagId) -> Self {
        Tag(tags::as_str(id).to_string())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Options attached to one declared variable.
///
/// Every field is optional. Unset `class` and `of` fall back to the policy default type; unset `keys` falls back to
/// `symbol`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VarOptions {
    class: Option<Tag>,
    of: Option<Tag>,
    keys: Option<Tag>,
    default: Option<String>,
    description: Option<String>,
}

impl VarOptions {
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Options carrying only a description.
    pub fn described(description: impl Into<String>) -> Self {
        Self::new().description(description)
    }

    /// Set the coercion tag.
    pub fn class(mut self, tag: impl Into<Tag>) -> Self {
        self.class = Some(tag.into());
        self
    }

    /// Set the element (list) or value (map) tag.
    pub fn of(mut self, tag: impl Into<Tag>) -> Self {
        self.of = Some(tag.into());
        self
    }

    /// Set the key tag for maps.
    pub fn keys(mut self, tag: impl Into<Tag>) -> Self {
        self.keys = Some(tag.into());
        self
    }

    /// Set the fallback raw value, written to the store only when the variable is missing.
    ///
    /// Stored as the string form of `value`, so `.default(3000)` stores `"3000"`.
    pub fn default(mut self, value: impl ToString) -> Self {
        self.default = Some(value.to_string());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn class_tag(&self) -> Option<&Tag> {
        self.class.as_ref()
    }

    pub fn of_tag(&self) -> Option<&Tag> {
        self.of.as_ref()
    }

    pub fn keys_tag(&self) -> Option<&Tag> {
        self.keys.as_ref()
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Options for casting one collection element: `class` becomes `tag`, `of` and `keys` are cleared.
    pub(crate) fn for_element(&self, tag: Tag) -> Self {
        Self {
            class: Some(tag),
            of: None,
            keys: None,
            default: self.default.clone(),
            description: self.description.clone(),
        }
    }
}
