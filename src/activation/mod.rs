//! Activation lifecycle: status changes, cancellation and code waits.

mod handler;
mod lifecycle;

pub use handler::{AsyncHandler, CodeHandler, SyncHandler};
pub use lifecycle::ActivationLifecycle;
