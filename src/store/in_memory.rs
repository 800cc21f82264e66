use std::collections::HashMap;

use parking_lot::RwLock;

use super::EnvStore;
use crate::errors::Result;

/// In-memory store that never touches the process environment.
///
/// ## Examples
/// ```rust
/// use envsetting::{EnvStore, InMemoryEnv};
///
/// let env = InMemoryEnv::from_pairs([("PORT", "8080")]);
/// assert_eq!(env.get("PORT").unwrap().as_deref(), Some("8080"));
/// assert!(!env.has("HOST"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEnv {
    vars: RwLock<HashMap<String, String>>,
}

impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `pairs`.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self {
            vars: RwLock::new(vars),
        }
    }

    /// Remove `name`, returning its previous value.
    pub fn remove(&self, name: &str) -> Option<String> {
        self.vars.write().remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.read().contains_key(name)
    }

    pub fn clear(&self) {
        self.vars.write().clear();
    }

    pub fn len(&self) -> usize {
        self.vars.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.read().is_empty()
    }
}

impl EnvStore for InMemoryEnv {
    fn has(&self, name: &str) -> bool {
        self.contains(name)
    }

    fn get(&self, name: &str) -> Result<Option<String>> {
        Ok(self.vars.read().get(name).cloned())
    }

    /// Accepts any name and value.
    fn set(&self, name: &str, value: &str) -> Result<()> {
        self.vars.write().insert(name.to_string(), value.to_string());
        Ok(())
    }
}
