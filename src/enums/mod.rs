//! Closed wire-code enumerations used in requests and responses.

mod wire;

pub(crate) mod countries;
pub(crate) mod services;
pub(crate) mod status;

pub use countries::Country;
pub use services::Service;
pub(crate) use status::Action;
pub use status::Status;
pub use wire::UnknownWireCode;
