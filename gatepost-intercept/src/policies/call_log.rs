//! Call auditing: every invocation is recorded before it runs.

use crate::policy::{CallOutcome, Policy};
use crate::{PolicyError, Result};
use gatepost_types::{Container, MethodReturn, Value};
use std::fmt;
use tracing::info;

/// A single recorded invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CallRecord {
    pub name: String,
    pub args: Vec<Value>,
}

/// Receives one [`CallRecord`] per invocation.
pub type CallSink = Box<dyn FnMut(CallRecord)>;

/// Records every method call to a sink before delegating to the method.
///
/// Exactly one record is emitted per invocation, before the delegate
/// runs. The record itself is ephemeral — the default sink hands it to
/// `tracing` and drops it.
pub struct CallLoggingPolicy {
    sink: CallSink,
}

impl CallLoggingPolicy {
    /// Records through `tracing` at info level.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(|record| {
            info!(name = %record.name, args = ?record.args, "call");
        })
    }

    /// Records through a caller-supplied sink.
    #[must_use]
    pub fn with_sink(sink: impl FnMut(CallRecord) + 'static) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }
}

impl Default for CallLoggingPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CallLoggingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallLoggingPolicy").finish_non_exhaustive()
    }
}

impl Policy for CallLoggingPolicy {
    fn on_invoke(&mut self, raw: &mut Container, key: &str, args: &[Value]) -> Result<CallOutcome> {
        let method = raw
            .method(key)
            .ok_or_else(|| PolicyError::UnknownMethod(key.to_string()))?;

        // Record before delegating: a failing delegate still logs the attempt.
        (self.sink)(CallRecord {
            name: key.to_string(),
            args: args.to_vec(),
        });

        Ok(match method.invoke(raw, args) {
            MethodReturn::Value(value) => CallOutcome::Value(value),
            MethodReturn::Receiver => CallOutcome::Wrapper,
        })
    }
}
