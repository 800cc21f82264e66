//! Accessor bindings and their caches.
//!
//! Every declaration binds an accessor, the variable name lowercased (`DATABASE_URL` binds `database_url`). The
//! facade remembers which variable each accessor reads, the coerced value of its first read and the truthiness of
//! that value for the presence accessor (`database_url?`).
//!
//! ## Notes
//! - Cached entries are not refreshed when the store changes. Call [`AccessorFacade::clear_cache`] to recompute on
//!   the next read.
//! - The facade holds no store or registry; [`crate::EnvSetting`] drives it.
//! - Every invalidation bumps a generation counter. A fill computed against an older generation is dropped, so a
//!   read that raced a [`AccessorFacade::clear_cache`] or a rebind never caches its stale result.

use std::collections::HashMap;

use envsetting_core::{PRESENCE_SUFFIX, accessor_name};

use crate::value::Value;

/// Accessor-to-variable bindings plus the value and presence caches.
#[derive(Debug, Clone, Default)]
pub struct AccessorFacade {
    bindings: HashMap<String, String>,
    values: HashMap<String, Value>,
    presence: HashMap<String, bool>,
    generation: u64,
}

impl AccessorFacade {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the accessor for `variable`, dropping any cached entries for it.
    ///
    /// ## Returns
    /// - The accessor name.
    pub fn bind(&mut self, variable: &str) -> String {
        let accessor = accessor_name(variable);
        self.invalidate(&accessor);
        self.bindings.insert(accessor.clone(), variable.to_string());
        accessor
    }

    /// The variable an accessor reads, if bound.
    pub fn variable_for(&self, accessor: &str) -> Option<&str> {
        self.bindings.get(accessor).map(String::as_str)
    }

    /// Whether `accessor` (with or without the presence suffix) is bound.
    pub fn responds_to(&self, accessor: &str) -> bool {
        let base = accessor.strip_suffix(PRESENCE_SUFFIX).unwrap_or(accessor);
        self.bindings.contains_key(base)
    }

    /// Bound accessor names, in no particular order.
    pub fn accessors(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn cached_value(&self, accessor: &str) -> Option<&Value> {
        self.values.get(accessor)
    }

    /// The current cache generation. Read it together with the cache lookup that missed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cache `value` for `accessor` unless the caches were invalidated after `generation` was read.
    ///
    /// ## Returns
    /// - `false` if the value was dropped as stale.
    pub fn cache_value(&mut self, accessor: &str, value: Value, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.values.insert(accessor.to_string(), value);
        true
    }

    pub fn cached_presence(&self, accessor: &str) -> Option<bool> {
        self.presence.get(accessor).copied()
    }

    /// Same contract as [`AccessorFacade::cache_value`].
    pub fn cache_presence(&mut self, accessor: &str, present: bool, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.presence.insert(accessor.to_string(), present);
        true
    }

    /// Drop the cached entries of one accessor.
    pub fn invalidate(&mut self, accessor: &str) {
        self.values.remove(accessor);
        self.presence.remove(accessor);
        self.generation += 1;
    }

    /// Drop every cached entry. Bindings survive.
    pub fn clear_cache(&mut self) {
        self.values.clear();
        self.presence.clear();
        self.generation += 1;
    }

    /// Drop bindings and caches.
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.clear_cache();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_lowercases() {
        let mut facade = AccessorFacade::new();
        assert_eq!(facade.bind("DATABASE_URL"), "database_url");
        assert_eq!(facade.variable_for("database_url"), Some("DATABASE_URL"));
        assert!(facade.responds_to("database_url"));
        assert!(facade.responds_to("database_url?"));
        assert!(!facade.responds_to("DATABASE_URL"));
    }

    #[test]
    fn rebinding_invalidates_cache() {
        let mut facade = AccessorFacade::new();
        facade.bind("PORT");
        let generation = facade.generation();
        assert!(facade.cache_value("port", Value::Int(1), generation));
        assert!(facade.cache_presence("port", true, generation));

        facade.bind("PORT");
        assert_eq!(facade.cached_value("port"), None);
        assert_eq!(facade.cached_presence("port"), None);
    }

    #[test]
    fn clear_cache_keeps_bindings() {
        let mut facade = AccessorFacade::new();
        facade.bind("PORT");
        facade.cache_value("port", Value::Int(1), facade.generation());
        facade.clear_cache();

        assert_eq!(facade.cached_value("port"), None);
        assert!(facade.responds_to("port"));

        facade.clear();
        assert!(!facade.responds_to("port"));
    }

    #[test]
    fn fills_from_before_an_invalidation_are_dropped() {
        let mut facade = AccessorFacade::new();
        facade.bind("PORT");

        let before_clear = facade.generation();
        facade.clear_cache();
        assert!(!facade.cache_value("port", Value::Int(1), before_clear));
        assert_eq!(facade.cached_value("port"), None);

        let before_rebind = facade.generation();
        facade.bind("PORT");
        assert!(!facade.cache_presence("port", true, before_rebind));
        assert_eq!(facade.cached_presence("port"), None);

        assert!(facade.cache_value("port", Value::Int(2), facade.generation()));
        assert_eq!(facade.cached_value("port"), Some(&Value::Int(2)));
    }
}
