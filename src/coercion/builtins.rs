//! Scalar builtin coercions.
//!
//! The collection coercions recurse through the caster and live in [`crate::caster`].

use envsetting_core::lang::tags::{self, TagId};

use super::Policy;
use crate::errors::{EnvSettingError, Result};
use crate::value::Value;

/// `false` if `raw` is falsey, otherwise `true`.
pub fn boolean(policy: &Policy, raw: &str) -> Value {
    Value::Bool(!policy.is_falsey(raw))
}

/// `false` if `raw` is falsey, otherwise `raw` unchanged.
pub fn string_unless_falsey(policy: &Policy, raw: &str) -> Value {
    if policy.is_falsey(raw) {
        Value::Bool(false)
    } else {
        Value::Str(raw.to_string())
    }
}

pub fn symbol(raw: &str) -> Value {
    Value::symbol(raw)
}

/// Parse `raw` as the primitive named by `id`.
///
/// Numbers are parsed from the trimmed raw string; `string` returns it unchanged.
///
/// ## Errors
/// - [`EnvSettingError::CastFailure`] if the number does not parse, or `id` is not a primitive tag.
pub fn primitive(id: TagId, raw: &str) -> Result<Value> {
    let tag = tags::as_str(id);
    match id {
        TagId::Integer => raw
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|e| EnvSettingError::cast_failure(tag, raw, e.to_string())),
        TagId::Float => raw
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|e| EnvSettingError::cast_failure(tag, raw, e.to_string())),
        TagId::String => Ok(Value::Str(raw.to_string())),
        _ => Err(EnvSettingError::cast_failure(tag, raw, "not a primitive type")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_trims_before_parsing() {
        assert_eq!(primitive(TagId::Integer, " 42 ").unwrap(), Value::Int(42));
        assert_eq!(primitive(TagId::Integer, "-7").unwrap(), Value::Int(-7));
    }

    #[test]
    fn integer_rejects_garbage() {
        let err = primitive(TagId::Integer, "4x").unwrap_err();
        assert!(err.to_string().starts_with("cannot cast '4x' to integer"));
    }

    #[test]
    fn float_parses() {
        assert_eq!(primitive(TagId::Float, "2.5").unwrap(), Value::Float(2.5));
        assert_eq!(primitive(TagId::Float, "3").unwrap(), Value::Float(3.0));
    }

    #[test]
    fn string_is_untouched() {
        assert_eq!(primitive(TagId::String, " a ").unwrap(), Value::from(" a "));
    }

    #[test]
    fn falsey_default_keeps_strings() {
        let policy = Policy::default();
        assert_eq!(string_unless_falsey(&policy, "off"), Value::Bool(false));
        assert_eq!(string_unless_falsey(&policy, "on"), Value::from("on"));
        assert_eq!(boolean(&policy, "on"), Value::Bool(true));
    }
}
