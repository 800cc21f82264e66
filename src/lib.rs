#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
//! Typed, cached access to environment variables.
//!
//! Declare the variables a program needs (with an optional default, description and type tag), then read them back
//! coerced into integers, floats, booleans, symbols, lists, maps or user-registered types. Reads through an accessor
//! are cached after the first cast.
//!
//! The workspace is split into:
//! - `envsetting_core`: the tag and error-kind vocabulary, the default falsey pattern, collection splitting and the
//!   missing-variable message. Pure, no dependencies.
//! - `envsetting_derive`: `#[derive(EnvSettings)]`, one declared variable per struct field.
//! - this crate: the store abstraction, the value model, casting, the registries and the [`EnvSetting`] context.
//!
//! ## Panic Policy
//!
//! - **Library code**: errors are returned as [`EnvSettingError`]; `unwrap`/`expect` are denied at the crate root.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: a local `#[allow(clippy::expect_used)]` with `.expect("INVARIANT: reason")`.
//!
//! ## Examples
//! ```rust
//! use envsetting::{EnvSetting, InMemoryEnv, Value, VarOptions};
//!
//! let settings = EnvSetting::with_store(InMemoryEnv::from_pairs([("HOSTS", "a, b ,c"), ("DEBUG", "off")]));
//! settings.use_var("HOSTS", VarOptions::new().class("list")).unwrap();
//! settings.use_var("DEBUG", VarOptions::described("Verbose logging")).unwrap();
//!
//! assert_eq!(settings.value_as::<Vec<String>>("hosts").unwrap(), vec!["a", "b", "c"]);
//! assert_eq!(settings.value("debug").unwrap(), Value::Bool(false));
//! assert!(!settings.present("debug").unwrap());
//! ```

pub mod accessor;
pub mod caster;
pub mod coercion;
pub mod errors;
pub mod options;
pub mod registry;
pub mod setting;
pub mod store;
pub mod value;

use std::sync::OnceLock;

pub use accessor::AccessorFacade;
pub use caster::ValueCaster;
pub use coercion::{Coercion, CoercionFn, CoercionRegistry, Policy};
pub use errors::{EnvSettingError, Result};
pub use options::{Tag, VarOptions};
pub use registry::VariableRegistry;
pub use setting::EnvSetting;
pub use store::{EnvStore, InMemoryEnv, SystemEnv};
pub use value::{CustomValue, FromValue, Symbol, Value, ValueMap};

pub use envsetting_core::lang::errors::ErrorKind;
pub use envsetting_core::lang::tags::TagId;
pub use envsetting_derive::EnvSettings;

/// Variable names declared by a `#[derive(EnvSettings)]` struct, in field order.
pub trait DeclaredVariables {
    fn variable_names() -> &'static [&'static str];
}

static GLOBAL: OnceLock<EnvSetting> = OnceLock::new();

/// The process-wide context over the real process environment.
///
/// Created on first use. Use [`EnvSetting::reset`] to return it to a pristine state.
pub fn global() -> &'static EnvSetting {
    GLOBAL.get_or_init(EnvSetting::new)
}
