//! The configuration context.
//!
//! [`EnvSetting`] ties the pieces together: one raw store, one coercion registry with its policy, one variable
//! registry and one accessor facade. Each sits behind its own `parking_lot::RwLock`, so a context can be shared
//! across threads (declare at startup, read anywhere).
//!
//! ## Notes
//! - Lock order is variables, then coercions. The accessor lock is never held while casting.
//! - Policy overrides affect casts that happen afterwards. Values already cached keep their old coercion until
//!   [`EnvSetting::clear_cache`].
//!
//! ## Examples
//! ```rust
//! use std::sync::Arc;
//! use envsetting::{EnvSetting, InMemoryEnv, Value, VarOptions};
//!
//! let env = Arc::new(InMemoryEnv::from_pairs([("PORT", "8080")]));
//! let settings = EnvSetting::with_shared_store(env);
//!
//! settings.use_var("PORT", VarOptions::new().class("integer")).unwrap();
//! settings.use_var("LOG_LEVEL", VarOptions::new().default("info")).unwrap();
//!
//! assert_eq!(settings.value("port").unwrap(), Value::Int(8080));
//! assert_eq!(settings.get("LOG_LEVEL").unwrap(), Value::from("info"));
//! assert!(settings.present("log_level").unwrap());
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use regex::Regex;

use envsetting_core::PRESENCE_SUFFIX;

use crate::accessor::AccessorFacade;
use crate::caster::ValueCaster;
use crate::coercion::{CoercionRegistry, Policy};
use crate::errors::{EnvSettingError, Result};
use crate::options::{Tag, VarOptions};
use crate::registry::VariableRegistry;
use crate::store::{EnvStore, SystemEnv};
use crate::value::{FromValue, Value};

/// Typed, cached access to declared environment variables.
pub struct EnvSetting {
    store: Arc<dyn EnvStore>,
    coercions: RwLock<CoercionRegistry>,
    variables: RwLock<VariableRegistry>,
    accessors: RwLock<AccessorFacade>,
}

impl Default for EnvSetting {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EnvSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvSetting")
            .field("variables", &*self.variables.read())
            .field("policy", self.coercions.read().policy())
            .finish_non_exhaustive()
    }
}

impl EnvSetting {
    /// A context over the process environment.
    pub fn new() -> Self {
        Self::with_store(SystemEnv)
    }

    pub fn with_store(store: impl EnvStore + 'static) -> Self {
        Self::with_shared_store(Arc::new(store))
    }

    /// A context over a store the caller keeps a handle to.
    pub fn with_shared_store(store: Arc<dyn EnvStore>) -> Self {
        Self {
            store,
            coercions: RwLock::new(CoercionRegistry::new()),
            variables: RwLock::new(VariableRegistry::new()),
            accessors: RwLock::new(AccessorFacade::new()),
        }
    }

    /// The raw store.
    pub fn store(&self) -> &dyn EnvStore {
        self.store.as_ref()
    }

    /// Declare a variable.
    ///
    /// Fills the store from `options.default` when the variable is missing, records the options (replacing any
    /// previous declaration of `name`) and binds the lowercased accessor.
    ///
    /// ## Errors
    /// - [`EnvSettingError::MissingRequired`] if the store lacks `name` and there is no default.
    /// - [`EnvSettingError::InvalidEntry`] if the store refuses to hold the default.
    #[tracing::instrument(skip_all, fields(name = name.as_ref()))]
    pub fn use_var(&self, name: impl AsRef<str>, options: VarOptions) -> Result<()> {
        let name = name.as_ref();
        let redeclared = self.variables.write().declare(self.store(), name, options)?;
        let accessor = self.accessors.write().bind(name);
        tracing::debug!(accessor = %accessor, redeclared, "declared");
        Ok(())
    }

    /// Run a batch of declarations and policy overrides against this context.
    ///
    /// ## Examples
    /// ```rust
    /// use envsetting::{EnvSetting, InMemoryEnv, VarOptions};
    ///
    /// let settings = EnvSetting::with_store(InMemoryEnv::new());
    /// settings
    ///     .config(|env| {
    ///         env.set_default_class("integer");
    ///         env.use_var("WORKERS", VarOptions::new().default(4))
    ///     })
    ///     .unwrap();
    /// assert_eq!(settings.keys(), vec!["WORKERS".to_string()]);
    /// ```
    pub fn config<T, F>(&self, block: F) -> Result<T>
    where
        F: FnOnce(&Self) -> Result<T>,
    {
        block(self)
    }

    /// Register a custom coercion under `tag`, overriding any builtin of the same tag.
    pub fn add_class<F>(&self, tag: impl Into<Tag>, coercion: F)
    where
        F: Fn(&ValueCaster<'_>, &str, &VarOptions) -> Result<Value> + Send + Sync + 'static,
    {
        self.coercions.write().register(tag, coercion);
    }

    pub fn default_class(&self) -> Tag {
        self.coercions.read().default_class().clone()
    }

    pub fn set_default_class(&self, tag: impl Into<Tag>) {
        self.coercions.write().set_default_class(tag);
    }

    pub fn default_falsey_regex(&self) -> Regex {
        self.coercions.read().default_falsey_regex().clone()
    }

    pub fn set_default_falsey_regex(&self, falsey: Regex) {
        self.coercions.write().set_default_falsey_regex(falsey);
    }

    /// Compile `pattern` and use it as the falsey pattern.
    ///
    /// ## Errors
    /// - [`EnvSettingError::InvalidPattern`] if `pattern` does not compile; the current pattern is kept.
    pub fn set_default_falsey_pattern(&self, pattern: &str) -> Result<()> {
        let falsey = Regex::new(pattern)?;
        self.set_default_falsey_regex(falsey);
        Ok(())
    }

    /// A snapshot of the current policy.
    pub fn policy(&self) -> Policy {
        self.coercions.read().policy().clone()
    }

    /// Replace the whole policy, e.g. to restore a snapshot taken with [`EnvSetting::policy`].
    pub fn set_policy(&self, policy: Policy) {
        let mut coercions = self.coercions.write();
        coercions.set_default_class(policy.default_class);
        coercions.set_default_falsey_regex(policy.falsey);
    }

    /// Cast a declared variable by name, bypassing the accessor cache.
    ///
    /// ## Errors
    /// - [`EnvSettingError::NotConfigured`] if `name` was never declared.
    /// - Any cast error.
    pub fn get(&self, name: &str) -> Result<Value> {
        let variables = self.variables.read();
        let coercions = self.coercions.read();
        variables.get_value(self.store(), &ValueCaster::new(&coercions), name)
    }

    /// [`EnvSetting::get`] followed by [`FromValue`] extraction.
    pub fn get_as<T: FromValue>(&self, name: &str) -> Result<T> {
        T::from_value(self.get(name)?, name)
    }

    /// Declared names in declaration order.
    pub fn keys(&self) -> Vec<String> {
        self.variables.read().keys().to_vec()
    }

    /// Cast every declared variable, in declaration order. Not cached.
    pub fn values(&self) -> Result<Vec<Value>> {
        let variables = self.variables.read();
        let coercions = self.coercions.read();
        variables.values(self.store(), &ValueCaster::new(&coercions))
    }

    /// Read through an accessor, caching the value on first read.
    ///
    /// A read that overlaps [`EnvSetting::clear_cache`] or a re-declaration returns what it computed but does not
    /// cache it.
    ///
    /// ## Errors
    /// - [`EnvSettingError::UnknownAccessor`] if no declaration bound `accessor`.
    /// - Any cast error (nothing is cached then).
    pub fn value(&self, accessor: &str) -> Result<Value> {
        let (variable, generation) = {
            let facade = self.accessors.read();
            let variable = facade
                .variable_for(accessor)
                .ok_or_else(|| EnvSettingError::UnknownAccessor {
                    accessor: accessor.to_string(),
                })?;
            if let Some(value) = facade.cached_value(accessor) {
                tracing::trace!(accessor, "cache hit");
                return Ok(value.clone());
            }
            (variable.to_string(), facade.generation())
        };

        tracing::trace!(accessor, variable = %variable, "cache miss");
        let value = self.get(&variable)?;
        if !self.accessors.write().cache_value(accessor, value.clone(), generation) {
            tracing::trace!(accessor, "cache invalidated during read; not cached");
        }
        Ok(value)
    }

    /// [`EnvSetting::value`] followed by [`FromValue`] extraction.
    pub fn value_as<T: FromValue>(&self, accessor: &str) -> Result<T> {
        T::from_value(self.value(accessor)?, accessor)
    }

    /// Truthiness of the accessor's (cached) value. Only a coerced `false` is absent.
    ///
    /// ## Errors
    /// - Same as [`EnvSetting::value`].
    pub fn present(&self, accessor: &str) -> Result<bool> {
        let generation = {
            let facade = self.accessors.read();
            if let Some(present) = facade.cached_presence(accessor) {
                tracing::trace!(accessor, "presence cache hit");
                return Ok(present);
            }
            facade.generation()
        };
        let present = self.value(accessor)?.is_truthy();
        self.accessors.write().cache_presence(accessor, present, generation);
        Ok(present)
    }

    /// Dispatch on the accessor spelling: `name?` reads presence as a boolean value, `name` reads the value.
    pub fn call(&self, accessor: &str) -> Result<Value> {
        match accessor.strip_suffix(PRESENCE_SUFFIX) {
            Some(base) => self.present(base).map(Value::Bool),
            None => self.value(accessor),
        }
    }

    /// Whether `accessor` (or its presence form) is bound.
    pub fn responds_to(&self, accessor: &str) -> bool {
        self.accessors.read().responds_to(accessor)
    }

    /// Drop all cached values so the next reads recompute. Declarations survive.
    pub fn clear_cache(&self) {
        self.accessors.write().clear_cache();
    }

    /// Restore a pristine context: no declarations, empty caches, builtin coercions only, default policy.
    ///
    /// The store is left as is, including defaults written into it.
    pub fn reset(&self) {
        self.variables.write().clear();
        self.accessors.write().clear();
        self.coercions.write().reset();
        tracing::debug!("context reset");
    }
}
