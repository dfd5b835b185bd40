//! The closed set of primitive kinds a container value can have.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The primitive kind of a [`Value`](crate::Value).
///
/// Validation compares kinds for equality; there is no coercion between
/// kinds and no subtyping. Arrays are their own kind rather than a flavor
/// of object, because the value model distinguishes them structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Bool,
    Number,
    String,
    Array,
    Object,
    Function,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeKind::Bool => "bool",
            TypeKind::Number => "number",
            TypeKind::String => "string",
            TypeKind::Array => "array",
            TypeKind::Object => "object",
            TypeKind::Function => "function",
        };
        write!(f, "{name}")
    }
}
