//! Raw string to [`Value`] casting.
//!
//! [`ValueCaster`] picks the effective tag for a variable (its `class`, else the policy default), resolves it through
//! the [`CoercionRegistry`] and runs the coercion. The list and map coercions recurse into [`ValueCaster::cast_as`]
//! for each element, key and value.
//!
//! ## Notes
//! - Element casts see the variable's options with `class` replaced by the element tag and `of`/`keys` cleared.
//! - Collections nest one level at most. An element tag naming a collection is a [`EnvSettingError::CastFailure`],
//!   and so is a custom element coercion that splits its input again through [`ValueCaster::list`] or
//!   [`ValueCaster::map`] (e.g. a custom class built on `list` installed as the default class).
//! - A collection cast either fully succeeds or fails on the first bad element; there are no partial results.

use envsetting_core::lang::tags::{self, TagId};
use envsetting_core::split::{split_list, split_pair};

use crate::coercion::{Coercion, CoercionRegistry, Policy, builtins};
use crate::errors::{EnvSettingError, Result};
use crate::options::{Tag, VarOptions};
use crate::value::{Value, ValueMap};

/// Casts raw strings against one coercion registry.
///
/// Custom coercions receive the caster, which is how they reach the builtin coercions. A custom coercion used as an
/// element type receives the element options: `class` is the element tag and `of`/`keys` are unset, so it cannot
/// read the collection's own `of`/`keys`.
///
/// ## Examples
/// ```rust
/// use envsetting::{CoercionRegistry, Value, ValueCaster, VarOptions};
///
/// let registry = CoercionRegistry::new();
/// let caster = ValueCaster::new(&registry);
///
/// let ports = caster.cast("80, 443", &VarOptions::new().class("list").of("integer")).unwrap();
/// assert_eq!(ports, Value::List(vec![Value::Int(80), Value::Int(443)]));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ValueCaster<'a> {
    registry: &'a CoercionRegistry,
    // Set for element casts; a nested caster refuses to split again.
    nested: bool,
}

impl<'a> ValueCaster<'a> {
    pub fn new(registry: &'a CoercionRegistry) -> Self {
        Self {
            registry,
            nested: false,
        }
    }

    pub fn registry(&self) -> &'a CoercionRegistry {
        self.registry
    }

    pub fn policy(&self) -> &'a Policy {
        self.registry.policy()
    }

    /// Cast `raw` with the variable's `class`, or the default class when unset.
    ///
    /// ## Errors
    /// - [`EnvSettingError::UnknownType`] if the effective tag does not resolve.
    /// - [`EnvSettingError::CastFailure`] if the coercion rejects `raw`.
    pub fn cast(&self, raw: &str, options: &VarOptions) -> Result<Value> {
        let tag = options
            .class_tag()
            .unwrap_or_else(|| self.registry.default_class());
        self.cast_as(tag, raw, options)
    }

    /// Cast `raw` with an explicit tag, ignoring `options.class`.
    #[tracing::instrument(level = "trace", skip_all, fields(tag = %tag))]
    pub fn cast_as(&self, tag: &Tag, raw: &str, options: &VarOptions) -> Result<Value> {
        let coercion = self.registry.resolve(tag)?;
        tracing::trace!(coercion = coercion.label(), "cast dispatch");
        match coercion {
            Coercion::Builtin(id) => self.builtin(id, raw, options),
            Coercion::Custom(f) => (*f)(self, raw, options),
        }
    }

    fn builtin(&self, id: TagId, raw: &str, options: &VarOptions) -> Result<Value> {
        match id {
            TagId::StringUnlessFalsey => Ok(self.string_unless_falsey(raw)),
            TagId::Boolean => Ok(self.boolean(raw)),
            TagId::Symbol => Ok(builtins::symbol(raw)),
            TagId::List => self.list(raw, options),
            TagId::Map => self.map(raw, options),
            TagId::Integer | TagId::Float | TagId::String => builtins::primitive(id, raw),
        }
    }

    /// `false` if `raw` matches the falsey pattern, otherwise `true`.
    pub fn boolean(&self, raw: &str) -> Value {
        builtins::boolean(self.policy(), raw)
    }

    /// `false` if `raw` matches the falsey pattern, otherwise the raw string.
    pub fn string_unless_falsey(&self, raw: &str) -> Value {
        builtins::string_unless_falsey(self.policy(), raw)
    }

    /// Split `raw` on commas and cast each trimmed piece with the `of` tag (default class when unset).
    pub fn list(&self, raw: &str, options: &VarOptions) -> Result<Value> {
        let list_tag = tags::as_str(TagId::List);
        let elements = self.elements(list_tag, raw)?;
        let element_tag = self.element_tag(options.of_tag(), self.registry.default_class(), list_tag, raw)?;
        let element_options = options.for_element(element_tag.clone());

        split_list(raw)
            .into_iter()
            .map(|piece| elements.cast_as(&element_tag, piece, &element_options))
            .collect::<Result<Vec<_>>>()
            .map(Value::List)
    }

    /// Split `raw` into comma-separated `key:value` pairs.
    ///
    /// Keys are cast with the `keys` tag (default `symbol`), values with the `of` tag (default class when unset). A
    /// repeated key keeps its first position and takes the last value.
    pub fn map(&self, raw: &str, options: &VarOptions) -> Result<Value> {
        let map_tag = tags::as_str(TagId::Map);
        let elements = self.elements(map_tag, raw)?;
        let default_key = Tag::from(tags::DEFAULT_KEY_CLASS);
        let key_tag = self.element_tag(options.keys_tag(), &default_key, map_tag, raw)?;
        let value_tag = self.element_tag(options.of_tag(), self.registry.default_class(), map_tag, raw)?;
        let key_options = options.for_element(key_tag.clone());
        let value_options = options.for_element(value_tag.clone());

        let mut map = ValueMap::new();
        for piece in split_list(raw) {
            let (key, value) = split_pair(piece)
                .ok_or_else(|| EnvSettingError::cast_failure(map_tag, piece, "expected key:value pair"))?;
            map.insert(
                elements.cast_as(&key_tag, key, &key_options)?,
                elements.cast_as(&value_tag, value, &value_options)?,
            );
        }
        Ok(Value::Map(map))
    }

    /// The caster for the elements of a collection being split at this level.
    fn elements(&self, collection: &str, raw: &str) -> Result<Self> {
        if self.nested {
            return Err(EnvSettingError::cast_failure(
                collection,
                raw,
                "nested collections are not supported (element coercion split its input again)",
            ));
        }
        Ok(Self {
            nested: true,
            ..*self
        })
    }

    fn element_tag(&self, explicit: Option<&Tag>, fallback: &Tag, collection: &str, raw: &str) -> Result<Tag> {
        let tag = explicit.unwrap_or(fallback);
        if tag.is_collection() {
            return Err(EnvSettingError::cast_failure(
                collection,
                raw,
                format!("nested collections are not supported (element type `{tag}`)"),
            ));
        }
        Ok(tag.clone())
    }
}
