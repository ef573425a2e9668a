//! Domain models and types for the exporter.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`InstanceId`], [`SnapshotName`], [`ExportTaskId`],
//!   [`BucketName`], [`AccountId`])
//! - **Snapshot model** ([`SnapshotKind`], [`SnapshotStatus`], [`SnapshotRecord`])
//! - **Invocation payloads** ([`ExportRequest`], [`ExportResult`])
//! - **Error types** ([`ExporterError`], [`ProviderError`]) and the [`Result`] alias
//!
//! # Type Safety
//!
//! ```rust
//! use rds_snapshot_export::domain::{InstanceId, SnapshotName};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let instance = InstanceId::new("orders-db")?;
//! let snapshot = SnapshotName::new("orders-db-snapshot")?;
//!
//! // This won't compile - the two names are different types
//! // let wrong: InstanceId = snapshot;
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod export;
pub mod ids;
pub mod result;
pub mod snapshot;

pub use errors::{ExporterError, ProviderError};
pub use export::{ExportRequest, ExportResult, ExportTaskReceipt, StartExportTask};
pub use ids::{AccountId, BucketName, ExportTaskId, InstanceId, SnapshotName};
pub use result::Result;
pub use snapshot::{SnapshotKind, SnapshotRecord, SnapshotStatus};
