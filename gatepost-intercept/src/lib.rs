//! Policy-driven interception over Gatepost containers.
//!
//! An [`Intercepted`] wrapper owns a raw [`Container`](gatepost_types::Container)
//! and a [`Policy`]; every read, write, and method call on the wrapper is
//! routed through the policy before it can touch the container. Callers
//! interact with the wrapper exactly as they would with the raw container
//! and never obtain a reference to it.
//!
//! Five policies ship with the crate:
//! - [`ValidationPolicy`] — closed, type-stable schema for writes
//! - [`NegativeIndexPolicy`] — Python-style negative indexing over arrays
//! - [`CallLoggingPolicy`] — every invocation recorded before it runs
//! - [`ChainingPolicy`] — permissive fluent chaining, unknown methods skipped
//! - [`ObservablePolicy`] — per-key change listeners fired after each write
//!
//! [`PassthroughPolicy`] is the unit policy; with it the wrapper behaves
//! exactly like the raw container.

mod cell;
mod error;
mod policies;
mod policy;

pub use cell::Intercepted;
pub use error::PolicyError;
pub use policies::{
    CallLoggingPolicy, CallRecord, CallSink, ChainSink, ChainTrace, ChainingPolicy,
    ChangeListener, NegativeIndexPolicy, ObservablePolicy, ValidationPolicy,
};
pub use policy::{CallOutcome, PassthroughPolicy, Policy};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, PolicyError>;
