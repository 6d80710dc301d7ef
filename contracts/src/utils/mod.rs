//! Common ledger utilities.
pub mod context;
pub mod introspection;
pub mod log;
pub mod selector;

pub use context::Context;
pub use log::EventLog;
