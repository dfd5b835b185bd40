//! The shipped interception policies.

mod call_log;
mod chaining;
mod negative_index;
mod observable;
mod validation;

pub use call_log::{CallLoggingPolicy, CallRecord, CallSink};
pub use chaining::{ChainSink, ChainTrace, ChainingPolicy};
pub use negative_index::NegativeIndexPolicy;
pub use observable::{ChangeListener, ObservablePolicy};
pub use validation::ValidationPolicy;
