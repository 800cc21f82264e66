//! Raw string store behind every declared variable.
//!
//! The store is the only collaborator that touches real state. Everything else in the crate reads it through
//! [`EnvStore`], so tests and tools can swap the process environment for an [`InMemoryEnv`].
//!
//! ## Notes
//! - Values are plain strings. A variable that is set to the empty string is *present*.
//! - Implementations must be `Send + Sync`; the context shares one store across threads.
//! - `get` and `set` are fallible. A store reports a present-but-unreadable value as an error, never as absent.

mod in_memory;
mod system;

pub use in_memory::InMemoryEnv;
pub use system::SystemEnv;

use crate::errors::Result;

/// Minimal get/set/has contract over a flat string key/value store.
pub trait EnvStore: Send + Sync {
    /// Whether `name` is present (possibly with an empty value).
    fn has(&self, name: &str) -> bool;

    /// The raw value of `name`, or `None` if absent.
    ///
    /// ## Errors
    /// - [`crate::EnvSettingError::NotUnicode`] if `name` is present but its value is not UTF-8.
    fn get(&self, name: &str) -> Result<Option<String>>;

    /// Set `name` to `value`, replacing any previous value.
    ///
    /// ## Errors
    /// - [`crate::EnvSettingError::InvalidEntry`] if the store cannot hold this name or value.
    fn set(&self, name: &str, value: &str) -> Result<()>;
}
