//! Dynamic values stored in containers.
//!
//! `Value` is the unified representation for everything a wrapped
//! container can hold, including callable members. Function values live
//! only in memory; they cannot cross the JSON boundary.

use crate::container::NativeFn;
use crate::{Error, Number, Result, TypeKind};
use std::collections::HashMap;

/// A dynamic value held by a container.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(HashMap<String, Value>),
    /// A callable member. Compared by identity, not by behavior.
    Function(NativeFn),
}

impl Value {
    /// Returns the primitive kind of this value.
    ///
    /// This is the single type inspector the validation policy builds on.
    #[must_use]
    pub fn kind(&self) -> TypeKind {
        match self {
            Value::Bool(_) => TypeKind::Bool,
            Value::Number(_) => TypeKind::Number,
            Value::String(_) => TypeKind::String,
            Value::Array(_) => TypeKind::Array,
            Value::Object(_) => TypeKind::Object,
            Value::Function(_) => TypeKind::Function,
        }
    }

    /// Attempts to get the value as a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to get the value as a number.
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the value as an integer.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(|n| n.as_i64())
    }

    /// Attempts to get the value as a float, widening integers.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(|n| n.as_f64())
    }

    /// Attempts to get the value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get the value as an array reference.
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Attempts to get the value as an object reference.
    #[must_use]
    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Attempts to get the value as a callable.
    #[must_use]
    pub fn as_function(&self) -> Option<&NativeFn> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Converts the value to a JSON value.
    ///
    /// # Errors
    ///
    /// Function values and non-finite floats cannot be represented in
    /// JSON and are reported as errors rather than silently dropped.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        match self {
            Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            Value::Number(n) => {
                let json_num = match n {
                    Number::Integer(i) => serde_json::Number::from(*i),
                    Number::Float(f) => {
                        serde_json::Number::from_f64(*f).ok_or(Error::NonFiniteFloat)?
                    }
                };
                Ok(serde_json::Value::Number(json_num))
            }
            Value::String(s) => Ok(serde_json::Value::String(s.clone())),
            Value::Array(items) => {
                let json_items: Result<Vec<_>> = items.iter().map(Value::to_json).collect();
                Ok(serde_json::Value::Array(json_items?))
            }
            Value::Object(fields) => {
                let mut map = serde_json::Map::new();
                for (key, value) in fields {
                    map.insert(key.clone(), value.to_json()?);
                }
                Ok(serde_json::Value::Object(map))
            }
            Value::Function(_) => Err(Error::UnserializableFunction),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(value: HashMap<String, Value>) -> Self {
        Value::Object(value)
    }
}
