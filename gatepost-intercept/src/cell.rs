//! The interception wrapper.

use crate::policy::{CallOutcome, Policy};
use crate::Result;
use gatepost_types::{Container, Value};

/// A container wrapped behind a policy.
///
/// Every read, write, and call is routed through the policy's hooks; the
/// wrapper itself never bypasses them and never exposes the raw container.
/// Policy-owned auxiliary state (listener registries, captured sinks) is
/// reachable through [`policy`](Self::policy) / [`policy_mut`](Self::policy_mut).
#[derive(Debug)]
pub struct Intercepted<P: Policy> {
    raw: Container,
    policy: P,
}

impl<P: Policy> Intercepted<P> {
    /// Takes ownership of `container` and mediates all further access
    /// through `policy`.
    #[must_use]
    pub fn wrap(container: Container, policy: P) -> Self {
        Self {
            raw: container,
            policy,
        }
    }

    /// Reads a member. `Ok(None)` means the member is absent.
    pub fn get(&self, key: &str) -> Result<Option<Value>> {
        self.policy.on_read(&self.raw, key)
    }

    /// Writes a member.
    pub fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.policy.on_write(&mut self.raw, key, value)
    }

    /// Invokes a callable member.
    pub fn call(&mut self, key: &str, args: &[Value]) -> Result<CallOutcome> {
        self.policy.on_invoke(&mut self.raw, key, args)
    }

    /// Number of fields or elements in the underlying container.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether the underlying container natively has a member named `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.raw.contains(key)
    }

    /// The active policy.
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Mutable access to the active policy.
    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }
}
