//! Core type definitions for Gatepost.
//!
//! This crate defines the foundation the interception layer is built on:
//! - dynamic values (`Value`, `Number`) and their primitive kinds (`TypeKind`)
//! - the wrappable `Container` (object-like or array-like)
//! - native callable plumbing (`NativeFn`, `MethodReturn`)
//!
//! Policy behavior — what is allowed to reach a container and how — lives
//! in `gatepost-intercept`, not here.

mod container;
mod kind;
mod number;
mod value;

pub use container::{Container, MethodReturn, NativeFn};
pub use kind::TypeKind;
pub use number::Number;
pub use value::Value;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("function values cannot be serialized")]
    UnserializableFunction,

    #[error("non-finite float cannot be serialized")]
    NonFiniteFloat,

    #[error("'{0}' is not a valid array index")]
    InvalidIndex(String),

    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: i64, len: usize },
}
