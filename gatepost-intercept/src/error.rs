//! Error types for the interception layer.

use gatepost_types::TypeKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("unknown property: {0}")]
    UnknownProperty(String),

    #[error("type mismatch for '{key}': expected {expected}, got {actual}")]
    TypeMismatch {
        key: String,
        expected: TypeKind,
        actual: TypeKind,
    },

    #[error("no callable member: {0}")]
    UnknownMethod(String),

    #[error("listener for '{key}' failed: {reason}")]
    ListenerFailed { key: String, reason: String },

    #[error("container access: {0}")]
    Container(#[from] gatepost_types::Error),
}
