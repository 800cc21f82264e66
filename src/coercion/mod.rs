//! Coercion registry: type tag to coercion dispatch.
//!
//! The registry is seeded with the builtin [`TagKind::Coercion`] tags. User coercions registered with
//! [`CoercionRegistry::register`] override a builtin of the same (canonical) tag. Tags with no entry fall back to the
//! closed set of [`TagKind::Primitive`] parsers; anything else is [`EnvSettingError::UnknownType`].
//!
//! The registry also owns the [`Policy`] (default tag and falsey pattern).
//!
//! ## Notes
//! - Registration canonicalizes through the tag vocabulary, so registering `Array` replaces the builtin `list`.
//! - There is no removal; [`CoercionRegistry::reset`] restores the seeded table and the default policy.

pub mod builtins;
mod policy;

pub use policy::{Policy, default_falsey_regex};

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use regex::Regex;

use envsetting_core::lang::tags::{self, TagId, TagKind};

use crate::caster::ValueCaster;
use crate::errors::{EnvSettingError, Result};
use crate::options::{Tag, VarOptions};
use crate::value::Value;

/// Signature of a user coercion.
///
/// The caster gives access to the builtin coercions (e.g. [`ValueCaster::list`]) and the current policy.
pub type CoercionFn = dyn Fn(&ValueCaster<'_>, &str, &VarOptions) -> Result<Value> + Send + Sync;

/// A resolved coercion.
#[derive(Clone)]
pub enum Coercion {
    /// One of the builtin coercions or primitive parsers.
    Builtin(TagId),
    /// A user-registered coercion.
    Custom(Arc<CoercionFn>),
}

impl Coercion {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Coercion::Builtin(id) => match tags::kind(*id) {
                TagKind::Coercion => "builtin",
                TagKind::Primitive => "primitive",
            },
            Coercion::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Coercion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coercion::Builtin(id) => f.debug_tuple("Builtin").field(id).finish(),
            Coercion::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Tag-to-coercion table plus the global policy.
#[derive(Debug, Clone)]
pub struct CoercionRegistry {
    table: HashMap<Tag, Coercion>,
    policy: Policy,
}

impl Default for CoercionRegistry {
    fn default() -> Self {
        Self::with_policy(Policy::default())
    }
}

impl CoercionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A seeded registry using `policy`.
    pub fn with_policy(policy: Policy) -> Self {
        let table = tags::of_kind(TagKind::Coercion)
            .map(|id| (Tag::from(id), Coercion::Builtin(id)))
            .collect();
        Self { table, policy }
    }

    /// Install or overwrite the coercion for `tag`.
    pub fn register<F>(&mut self, tag: impl Into<Tag>, coercion: F)
    where
        F: Fn(&ValueCaster<'_>, &str, &VarOptions) -> Result<Value> + Send + Sync + 'static,
    {
        let tag = tag.into();
        tracing::debug!(tag = %tag, overrides = self.table.contains_key(&tag), "registered coercion");
        self.table.insert(tag, Coercion::Custom(Arc::new(coercion)));
    }

    /// Find the coercion for `tag`.
    ///
    /// ## Errors
    /// - [`EnvSettingError::UnknownType`] if nothing is registered under `tag` and it is not a primitive tag.
    pub fn resolve(&self, tag: &Tag) -> Result<Coercion> {
        if let Some(coercion) = self.table.get(tag) {
            return Ok(coercion.clone());
        }
        match tag.builtin() {
            Some(id) if tags::kind(id) == TagKind::Primitive => Ok(Coercion::Builtin(id)),
            _ => Err(EnvSettingError::UnknownType {
                tag: tag.as_str().to_string(),
            }),
        }
    }

    /// Whether `tag` resolves to a coercion.
    pub fn is_known(&self, tag: &Tag) -> bool {
        self.resolve(tag).is_ok()
    }

    /// Tags with an entry in the table, in no particular order.
    pub fn registered(&self) -> impl Iterator<Item = &Tag> {
        self.table.keys()
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn default_class(&self) -> &Tag {
        &self.policy.default_class
    }

    pub fn set_default_class(&mut self, tag: impl Into<Tag>) {
        self.policy.default_class = tag.into();
        tracing::debug!(tag = %self.policy.default_class, "default class overridden");
    }

    pub fn default_falsey_regex(&self) -> &Regex {
        &self.policy.falsey
    }

    pub fn set_default_falsey_regex(&mut self, falsey: Regex) {
        tracing::debug!(pattern = falsey.as_str(), "default falsey pattern overridden");
        self.policy.falsey = falsey;
    }

    /// Drop user coercions and restore the default policy.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_with_builtin_coercions_only() {
        let registry = CoercionRegistry::new();
        let mut seeded: Vec<&str> = registry.registered().map(Tag::as_str).collect();
        seeded.sort_unstable();
        assert_eq!(seeded, vec!["boolean", "list", "map", "string_unless_falsey", "symbol"]);
    }

    #[test]
    fn primitives_resolve_through_fallback() {
        let registry = CoercionRegistry::new();
        let coercion = registry.resolve(&Tag::new("Integer")).unwrap();
        assert_eq!(coercion.label(), "primitive");
    }

    #[test]
    fn unknown_tags_fail() {
        let registry = CoercionRegistry::new();
        let err = registry.resolve(&Tag::new("Set")).unwrap_err();
        assert!(matches!(err, EnvSettingError::UnknownType { ref tag } if tag == "Set"));
    }

    #[test]
    fn registration_through_alias_overrides_builtin() {
        let mut registry = CoercionRegistry::new();
        registry.register("Array", |_, raw, _| Ok(Value::from(raw)));
        assert_eq!(registry.resolve(&Tag::new("list")).unwrap().label(), "custom");
    }

    #[test]
    fn reset_restores_seed_and_policy() {
        let mut registry = CoercionRegistry::new();
        registry.register("Set", |_, raw, _| Ok(Value::from(raw)));
        registry.set_default_class("integer");
        registry.reset();

        assert!(!registry.is_known(&Tag::new("Set")));
        assert_eq!(registry.policy(), &Policy::default());
    }
}
