//! Coerced values.
//!
//! A [`Value`] is what a cast produces from a raw environment string. Collections nest [`Value`]s; user coercions
//! can return any `Debug + PartialEq + Send + Sync` type through [`Value::custom`].
//!
//! ## Notes
//! - Truthiness is narrow: only `Bool(false)` is falsey. Empty strings, `0` and empty lists are truthy.
//! - [`ValueMap`] keeps first-insertion order; re-inserting a key overwrites its value in place.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::errors::{EnvSettingError, Result};

/// A symbolic name, distinct from a plain string (the default map key type).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A coerced environment value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Symbol(Symbol),
    List(Vec<Value>),
    Map(ValueMap),
    Custom(CustomValue),
}

impl Value {
    /// Wrap a user type produced by a custom coercion.
    pub fn custom<T>(value: T) -> Self
    where
        T: Any + fmt::Debug + PartialEq + Send + Sync,
    {
        Value::Custom(CustomValue(Arc::new(value)))
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(Symbol::new(name))
    }

    /// Truthiness as seen by presence accessors: only `Bool(false)` is falsey.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false))
    }

    /// Short name of the variant, used in type-mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Custom(c) => c.type_name(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow a custom value as its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Custom(c) => c.downcast_ref(),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Symbol(s) => write!(f, "{s}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k} => {v}")?;
                }
                f.write_str("}")
            }
            Value::Custom(c) => write!(f, "{c:?}"),
        }
    }
}

/// Insertion-ordered map with unique keys.
#[derive(Debug, Clone, Default)]
pub struct ValueMap {
    entries: Vec<(Value, Value)>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, overwriting (in place) the value of an existing equal key.
    ///
    /// Returns the previous value for the key, if any.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Look up a symbol key by name.
    pub fn get_symbol(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_symbol().is_some_and(|s| s.as_str() == name))
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }
}

// Order-insensitive: two maps are equal when they hold the same pairs.
impl PartialEq for ValueMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl FromIterator<(Value, Value)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut map = ValueMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Type-erased value returned by a custom coercion.
#[derive(Clone)]
pub struct CustomValue(Arc<dyn CustomData>);

impl CustomValue {
    pub fn type_name(&self) -> &'static str {
        self.0.as_ref().type_name()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_ref().as_any().downcast_ref::<T>()
    }
}

impl fmt::Debug for CustomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0.as_ref(), f)
    }
}

impl PartialEq for CustomValue {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_ref().eq_dyn(other.0.as_ref())
    }
}

trait CustomData: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn eq_dyn(&self, other: &dyn CustomData) -> bool;
    fn type_name(&self) -> &'static str;
}

impl<T> CustomData for T
where
    T: Any + fmt::Debug + PartialEq + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_dyn(&self, other: &dyn CustomData) -> bool {
        other.as_any().downcast_ref::<T>() == Some(self)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Extract a Rust type from a coerced value.
///
/// `name` identifies the variable in [`EnvSettingError::TypeMismatch`].
pub trait FromValue: Sized {
    fn from_value(value: Value, name: &str) -> Result<Self>;
}

fn mismatch(name: &str, expected: &'static str, found: &Value) -> EnvSettingError {
    EnvSettingError::TypeMismatch {
        name: name.to_string(),
        expected,
        found: found.type_name(),
    }
}

impl FromValue for Value {
    fn from_value(value: Value, _name: &str) -> Result<Self> {
        Ok(value)
    }
}

impl FromValue for String {
    fn from_value(value: Value, name: &str) -> Result<Self> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(mismatch(name, "string", &other)),
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: Value, name: &str) -> Result<Self> {
        match value {
            Value::Int(i) => Ok(i),
            other => Err(mismatch(name, "integer", &other)),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: Value, name: &str) -> Result<Self> {
        match value {
            Value::Float(f) => Ok(f),
            Value::Int(i) => Ok(i as f64),
            other => Err(mismatch(name, "float", &other)),
        }
    }
}

/// Uses truthiness, so a `string_unless_falsey` read extracts as `true` unless it was falsey.
impl FromValue for bool {
    fn from_value(value: Value, _name: &str) -> Result<Self> {
        Ok(value.is_truthy())
    }
}

impl FromValue for Symbol {
    fn from_value(value: Value, name: &str) -> Result<Self> {
        match value {
            Value::Symbol(s) => Ok(s),
            Value::Str(s) => Ok(Symbol(s)),
            other => Err(mismatch(name, "symbol", &other)),
        }
    }
}

/// `Bool(false)` extracts as `None`; anything else goes through `T`.
impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value, name: &str) -> Result<Self> {
        match value {
            Value::Bool(false) => Ok(None),
            other => T::from_value(other, name).map(Some),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value, name: &str) -> Result<Self> {
        match value {
            Value::List(items) => items.into_iter().map(|v| T::from_value(v, name)).collect(),
            other => Err(mismatch(name, "list", &other)),
        }
    }
}

impl<T: FromValue> FromValue for HashMap<String, T> {
    fn from_value(value: Value, name: &str) -> Result<Self> {
        match value {
            Value::Map(map) => map
                .entries
                .into_iter()
                .map(|(k, v)| {
                    let key = match k {
                        Value::Str(s) => s,
                        Value::Symbol(s) => s.0,
                        other => other.to_string(),
                    };
                    T::from_value(v, name).map(|v| (key, v))
                })
                .collect(),
            other => Err(mismatch(name, "map", &other)),
        }
    }
}
