//! Python-style negative indexing over arrays.
//!
//! Integer-parsable keys index the array, with negative values counted
//! from the end. Out-of-range indexes read as absent, never as errors,
//! matching the container's native out-of-bounds semantics. Non-integer
//! keys (`length`, method names) pass through untouched, and so do all
//! writes and invocations — `push` through this policy is immediately
//! visible to negative reads.

use crate::policy::Policy;
use crate::Result;
use gatepost_types::{Container, Value};

/// Resolves negative integer keys against the end of an array.
#[derive(Debug, Clone, Copy, Default)]
pub struct NegativeIndexPolicy;

impl NegativeIndexPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Policy for NegativeIndexPolicy {
    fn on_read(&self, raw: &Container, key: &str) -> Result<Option<Value>> {
        if !raw.is_array() {
            return Ok(raw.member(key));
        }
        // Structural integer test — "0" is an index, truthiness plays no part.
        let Ok(index) = key.parse::<i64>() else {
            return Ok(raw.member(key));
        };

        let len = raw.len() as i64;
        let resolved = if index < 0 { len + index } else { index };
        if resolved < 0 || resolved >= len {
            return Ok(None);
        }
        Ok(raw.member(&resolved.to_string()))
    }
}
