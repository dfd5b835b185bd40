//! Closed-schema validated writes.
//!
//! The current value's primitive kind is the live schema: a write must
//! target an existing key and keep that key's kind. No coercion is ever
//! attempted — a boolean field can never become a number.

use crate::policy::Policy;
use crate::{PolicyError, Result};
use gatepost_types::{Container, Value};
use tracing::warn;

/// Rejects reads of unknown keys and writes that would change a key's
/// primitive kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationPolicy;

impl ValidationPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Policy for ValidationPolicy {
    fn on_read(&self, raw: &Container, key: &str) -> Result<Option<Value>> {
        match raw.member(key) {
            Some(value) => Ok(Some(value)),
            None => Err(PolicyError::UnknownProperty(key.to_string())),
        }
    }

    fn on_write(&mut self, raw: &mut Container, key: &str, value: Value) -> Result<()> {
        let Some(current) = raw.member(key) else {
            warn!(key = %key, "rejected write to unknown property");
            return Err(PolicyError::UnknownProperty(key.to_string()));
        };

        let expected = current.kind();
        let actual = value.kind();
        if expected != actual {
            warn!(key = %key, %expected, %actual, "rejected kind-changing write");
            return Err(PolicyError::TypeMismatch {
                key: key.to_string(),
                expected,
                actual,
            });
        }

        raw.set_member(key, value)?;
        Ok(())
    }
}
