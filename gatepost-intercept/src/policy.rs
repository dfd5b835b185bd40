//! The policy contract every interception decision flows through.

use crate::{PolicyError, Result};
use gatepost_types::{Container, MethodReturn, Value};

/// Outcome of invoking a callable member through the wrapper.
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome {
    /// The call produced this value.
    Value(Value),
    /// The call returned its receiver; keep chaining on the wrapper.
    ///
    /// The raw container is never handed back in its place.
    Wrapper,
}

/// A pluggable interception strategy.
///
/// The wrapper calls exactly one hook per operation and never touches the
/// container behind the policy's back. Each hook has a default identity
/// implementation against the container's native access surface, so a
/// policy only overrides the operations it cares about.
pub trait Policy {
    /// Mediates `get`. `Ok(None)` means the member is absent.
    fn on_read(&self, raw: &Container, key: &str) -> Result<Option<Value>> {
        Ok(raw.member(key))
    }

    /// Mediates `set`. Must leave `raw` unchanged when returning an error.
    fn on_write(&mut self, raw: &mut Container, key: &str, value: Value) -> Result<()> {
        raw.set_member(key, value)?;
        Ok(())
    }

    /// Mediates `call`.
    fn on_invoke(&mut self, raw: &mut Container, key: &str, args: &[Value]) -> Result<CallOutcome> {
        let method = raw
            .method(key)
            .ok_or_else(|| PolicyError::UnknownMethod(key.to_string()))?;
        Ok(match method.invoke(raw, args) {
            MethodReturn::Value(value) => CallOutcome::Value(value),
            MethodReturn::Receiver => CallOutcome::Wrapper,
        })
    }
}

/// The unit policy: every operation passes through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughPolicy;

impl PassthroughPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Policy for PassthroughPolicy {}
