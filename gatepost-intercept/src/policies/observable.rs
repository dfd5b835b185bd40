//! Change-notification properties.
//!
//! Listeners are registered per key and fired synchronously after each
//! committed write, in registration order, with `(new, old)`. The first
//! listener to fail aborts delivery to the rest — the write itself stays
//! committed either way.

use crate::cell::Intercepted;
use crate::policy::Policy;
use crate::{PolicyError, Result};
use gatepost_types::{Container, Value};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Listener invoked after a committed write with the new value and the
/// previous one (`None` when the key did not exist before).
pub type ChangeListener = Box<dyn FnMut(&Value, Option<&Value>) -> std::result::Result<(), String>>;

/// Notifies per-key listeners after every write.
#[derive(Default)]
pub struct ObservablePolicy {
    listeners: HashMap<String, Vec<ChangeListener>>,
}

impl ObservablePolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for writes to `key`.
    ///
    /// Listeners fire in registration order. There is no de-duplication:
    /// registering the same listener twice fires it twice per write.
    pub fn observe(
        &mut self,
        key: impl Into<String>,
        listener: impl FnMut(&Value, Option<&Value>) -> std::result::Result<(), String> + 'static,
    ) {
        self.listeners
            .entry(key.into())
            .or_default()
            .push(Box::new(listener));
    }

    /// Number of listeners registered for `key`.
    #[must_use]
    pub fn listener_count(&self, key: &str) -> usize {
        self.listeners.get(key).map_or(0, Vec::len)
    }
}

impl fmt::Debug for ObservablePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservablePolicy")
            .field("observed_keys", &self.listeners.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Policy for ObservablePolicy {
    fn on_write(&mut self, raw: &mut Container, key: &str, value: Value) -> Result<()> {
        let old = raw.member(key);
        raw.set_member(key, value.clone())?;

        let Some(listeners) = self.listeners.get_mut(key) else {
            return Ok(());
        };
        debug!(key = %key, listeners = listeners.len(), "notifying change listeners");
        for listener in listeners.iter_mut() {
            // First failure aborts delivery to later listeners; the write
            // above stays committed.
            listener(&value, old.as_ref()).map_err(|reason| PolicyError::ListenerFailed {
                key: key.to_string(),
                reason,
            })?;
        }
        Ok(())
    }
}

impl Intercepted<ObservablePolicy> {
    /// Registers a change listener on the wrapper itself.
    ///
    /// Registration is a typed method rather than a reserved member name,
    /// so it can never collide with a real field of the container.
    pub fn observe(
        &mut self,
        key: impl Into<String>,
        listener: impl FnMut(&Value, Option<&Value>) -> std::result::Result<(), String> + 'static,
    ) {
        self.policy_mut().observe(key, listener);
    }
}
