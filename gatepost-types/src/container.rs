//! The wrapped entity: a key-indexed object or a sequence.
//!
//! `Container` is the raw target every policy mediates access to. The
//! methods here are the native, policy-free access surface that default
//! policy hooks build on. Once a container is wrapped, nothing outside
//! the interception layer holds a reference to it.

use crate::{Error, Number, Result, Value};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Return signal of a native method.
///
/// `Receiver` marks "the method returned its own receiver" so the layer
/// above can substitute the wrapper for the raw container instead of
/// leaking it.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodReturn {
    /// An ordinary return value.
    Value(Value),
    /// The method returned the container it was called on.
    Receiver,
}

type MethodBody = dyn Fn(&mut Container, &[Value]) -> MethodReturn;

/// A named, reference-counted callable that operates on its container.
///
/// Cloning is cheap (reference count bump) and clones compare equal:
/// equality is identity of the underlying closure, never behavior.
#[derive(Clone)]
pub struct NativeFn {
    name: String,
    body: Rc<MethodBody>,
}

impl NativeFn {
    /// Creates a named callable.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        body: impl Fn(&mut Container, &[Value]) -> MethodReturn + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            body: Rc::new(body),
        }
    }

    /// The name this callable was registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the callable against a container.
    pub fn invoke(&self, raw: &mut Container, args: &[Value]) -> MethodReturn {
        (self.body)(raw, args)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.name)
    }
}

impl PartialEq for NativeFn {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}

/// A wrappable container: object-like or array-like.
#[derive(Debug, Clone, PartialEq)]
pub enum Container {
    Object(HashMap<String, Value>),
    Array(Vec<Value>),
}

impl Container {
    /// Builds an object container from `(key, value)` pairs.
    #[must_use]
    pub fn object<K: Into<String>>(fields: impl IntoIterator<Item = (K, Value)>) -> Self {
        Container::Object(
            fields
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Builds an array container from values.
    #[must_use]
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Container::Array(items.into_iter().collect())
    }

    /// Number of fields or elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Container::Object(fields) => fields.len(),
            Container::Array(items) => items.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Container::Array(_))
    }

    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Container::Object(_))
    }

    /// Whether `key` names an existing member.
    ///
    /// On arrays this covers in-bounds non-negative indexes and the
    /// reserved `length` key.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        match self {
            Container::Object(fields) => fields.contains_key(key),
            Container::Array(items) => {
                key == "length"
                    || key
                        .parse::<usize>()
                        .is_ok_and(|index| index < items.len())
            }
        }
    }

    /// Native member lookup.
    ///
    /// Objects resolve fields by name. Arrays resolve non-negative
    /// integer-parsable keys to elements and `length` to the element
    /// count; everything else is absent. The index test is structural
    /// (an integer parse), so `"0"` resolves to the first element.
    #[must_use]
    pub fn member(&self, key: &str) -> Option<Value> {
        match self {
            Container::Object(fields) => fields.get(key).cloned(),
            Container::Array(items) => {
                if key == "length" {
                    return Some(Value::Number(Number::Integer(items.len() as i64)));
                }
                let index: usize = key.parse().ok()?;
                items.get(index).cloned()
            }
        }
    }

    /// Native member write.
    ///
    /// Objects insert or overwrite the field. Arrays assign in-bounds
    /// integer indexes; anything else is an error — assignment never
    /// changes an array's length.
    pub fn set_member(&mut self, key: &str, value: Value) -> Result<()> {
        match self {
            Container::Object(fields) => {
                fields.insert(key.to_string(), value);
                Ok(())
            }
            Container::Array(items) => {
                let index: i64 = key.parse().map_err(|_| Error::InvalidIndex(key.to_string()))?;
                let len = items.len();
                if index < 0 || index as usize >= len {
                    return Err(Error::OutOfBounds { index, len });
                }
                items[index as usize] = value;
                Ok(())
            }
        }
    }

    /// Callable member lookup.
    ///
    /// Objects expose fields holding a `Function` value. Arrays expose
    /// the built-in `push`, which appends its arguments and returns the
    /// new length.
    #[must_use]
    pub fn method(&self, key: &str) -> Option<NativeFn> {
        match self {
            Container::Object(fields) => match fields.get(key) {
                Some(Value::Function(f)) => Some(f.clone()),
                _ => None,
            },
            Container::Array(_) => match key {
                "push" => Some(NativeFn::new("push", |raw, args| {
                    if let Container::Array(items) = raw {
                        items.extend_from_slice(args);
                    }
                    MethodReturn::Value(Value::Number(Number::Integer(raw.len() as i64)))
                })),
                _ => None,
            },
        }
    }
}
