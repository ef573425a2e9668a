//! Export trigger
//!
//! - [`handler`] - the invocation handler
//! - [`naming`] - snapshot, bucket and export task naming conventions

pub mod handler;
pub mod naming;

pub use handler::{ExportHandler, TaskIdGenerator};
