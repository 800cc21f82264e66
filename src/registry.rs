//! Declared variables and their options.
//!
//! Declaring a variable guarantees the store holds a value for it: an explicit one, or the declared default written
//! into the store. A variable missing from the store without a default cannot be declared.
//!
//! ## Notes
//! - Names are case-sensitive and stored as given.
//! - Re-declaring a name replaces its options (last write wins) and keeps its original position in [`keys`].
//!
//! [`keys`]: VariableRegistry::keys

use std::collections::HashMap;

use crate::caster::ValueCaster;
use crate::errors::{EnvSettingError, Result};
use crate::options::VarOptions;
use crate::store::EnvStore;
use crate::value::Value;

/// Ordered registry of declared variables.
#[derive(Debug, Clone, Default)]
pub struct VariableRegistry {
    order: Vec<String>,
    options: HashMap<String, VarOptions>,
}

impl VariableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name` with `options`, filling the store from `options.default` when it lacks the variable.
    ///
    /// ## Returns
    /// - `true` if `name` was already declared (its options were replaced).
    ///
    /// ## Errors
    /// - [`EnvSettingError::MissingRequired`] if the store lacks `name` and there is no default. Nothing is recorded.
    /// - Any store error from writing the default. Nothing is recorded.
    pub fn declare(&mut self, store: &dyn EnvStore, name: &str, options: VarOptions) -> Result<bool> {
        if !store.has(name) {
            let Some(default) = options.default_value() else {
                return Err(EnvSettingError::missing_required(name, options.description_text()));
            };
            tracing::debug!(name, default, "applied default");
            store.set(name, default)?;
        }

        let redeclared = self.options.insert(name.to_string(), options).is_some();
        if !redeclared {
            self.order.push(name.to_string());
        }
        Ok(redeclared)
    }

    /// Declared names in declaration order.
    pub fn keys(&self) -> &[String] {
        &self.order
    }

    pub fn options(&self, name: &str) -> Option<&VarOptions> {
        self.options.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Cast the current raw value of `name`. Not cached.
    ///
    /// ## Errors
    /// - [`EnvSettingError::NotConfigured`] if `name` was never declared.
    /// - [`EnvSettingError::MissingRequired`] if the variable was removed from the store after declaration.
    /// - Any store read error, e.g. [`EnvSettingError::NotUnicode`].
    /// - Any cast error from `caster`.
    pub fn get_value(&self, store: &dyn EnvStore, caster: &ValueCaster<'_>, name: &str) -> Result<Value> {
        let options = self.options(name).ok_or_else(|| EnvSettingError::NotConfigured {
            name: name.to_string(),
        })?;
        let raw = store
            .get(name)?
            .ok_or_else(|| EnvSettingError::missing_required(name, options.description_text()))?;
        caster.cast(&raw, options)
    }

    /// Cast every declared variable, in declaration order. Not cached.
    pub fn values(&self, store: &dyn EnvStore, caster: &ValueCaster<'_>) -> Result<Vec<Value>> {
        self.order
            .iter()
            .map(|name| self.get_value(store, caster, name))
            .collect()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.options.clear();
    }
}
