//! Permissive method chaining.
//!
//! Every invocation succeeds. Methods that return their receiver keep
//! the chain on the wrapper, and calls to members that do not exist are
//! reported and skipped instead of failing. This deliberately trades
//! error surfacing for uninterrupted fluency: a typo in a chain is a
//! silent no-op, which is the point of the policy and also its hazard.

use crate::policy::{CallOutcome, Policy};
use crate::Result;
use gatepost_types::{Container, MethodReturn, Value};
use std::fmt;
use tracing::debug;

/// What the chaining policy saw for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainTrace {
    /// The member existed and was invoked.
    Called { name: String },
    /// The member did not exist; the call was skipped.
    Skipped { name: String },
}

/// Receives one [`ChainTrace`] per invocation.
pub type ChainSink = Box<dyn FnMut(ChainTrace)>;

/// Keeps every chain alive: receiver returns stay on the wrapper and
/// unknown methods are skipped without touching the container.
pub struct ChainingPolicy {
    sink: ChainSink,
}

impl ChainingPolicy {
    /// Reports through `tracing` at debug level.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(|trace| match trace {
            ChainTrace::Called { name } => debug!(name = %name, "chain call"),
            ChainTrace::Skipped { name } => debug!(name = %name, "chain call skipped, no such method"),
        })
    }

    /// Reports through a caller-supplied sink.
    #[must_use]
    pub fn with_sink(sink: impl FnMut(ChainTrace) + 'static) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }
}

impl Default for ChainingPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChainingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainingPolicy").finish_non_exhaustive()
    }
}

impl Policy for ChainingPolicy {
    fn on_invoke(&mut self, raw: &mut Container, key: &str, args: &[Value]) -> Result<CallOutcome> {
        let Some(method) = raw.method(key) else {
            (self.sink)(ChainTrace::Skipped {
                name: key.to_string(),
            });
            return Ok(CallOutcome::Wrapper);
        };

        (self.sink)(ChainTrace::Called {
            name: key.to_string(),
        });
        Ok(match method.invoke(raw, args) {
            // Self-return is normalized to the wrapper so the raw
            // container never leaks out of a chain.
            MethodReturn::Receiver => CallOutcome::Wrapper,
            MethodReturn::Value(value) => CallOutcome::Value(value),
        })
    }
}
