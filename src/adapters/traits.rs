//! Provider abstraction traits
//!
//! The handler only talks to AWS through these traits, so it can be driven
//! by the SDK clients in production and by in-memory fakes in tests.

use crate::domain::{
    AccountId, ExportTaskReceipt, ProviderError, SnapshotKind, SnapshotName, SnapshotRecord,
    StartExportTask,
};
use async_trait::async_trait;

/// Result of a provider call
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Snapshot lookup
#[async_trait]
pub trait SnapshotCatalog: Send + Sync {
    /// List the snapshots whose identifier is `name`
    ///
    /// `kind` selects DB instance snapshots or DB cluster snapshots. The
    /// returned list is whatever the service reported; callers decide what
    /// a count other than one means.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Transport`] when the service answered with a
    /// non-success HTTP status.
    async fn describe_snapshots(
        &self,
        name: &SnapshotName,
        kind: SnapshotKind,
    ) -> ProviderResult<Vec<SnapshotRecord>>;
}

/// Export task submission
#[async_trait]
pub trait ExportTaskService: Send + Sync {
    /// Ask RDS to start exporting a snapshot to S3
    async fn start_export_task(&self, task: &StartExportTask) -> ProviderResult<ExportTaskReceipt>;
}

/// Caller identity lookup
#[async_trait]
pub trait CallerIdentity: Send + Sync {
    /// Account id of the credentials in use
    async fn account_id(&self) -> ProviderResult<AccountId>;
}
