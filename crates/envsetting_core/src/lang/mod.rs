//! envsetting vocabulary registries.
//!
//! This module is the “front door” for shared vocabulary: builtin type tags and error kinds.
//!
//! The design goal is to avoid stringly-typed checks scattered across the runtime and the derive macro.
//! Callers work with **stable IDs** (e.g. `TagId`, `ErrorKind`) and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no IO, no side effects.
//! - Lookup is case-sensitive everywhere.
//!
//! ## Examples
//! ```rust
//! use envsetting_core::lang::tags::{self, TagId};
//!
//! assert_eq!(tags::from_str("Array"), Some(TagId::List));
//! assert_eq!(tags::as_str(TagId::List), "list");
//! ```
//!
//! ## See also
//! - `cargo run -p envsetting_core --bin generate_reference` to print Markdown reference tables.

pub mod errors;
pub mod registry;
pub mod tags;
