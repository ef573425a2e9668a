//! Invocation payloads and export task records

use super::ids::{BucketName, ExportTaskId};
use super::snapshot::SnapshotKind;
use serde::{Deserialize, Serialize};

/// Lambda invocation payload
///
/// ```
/// use rds_snapshot_export::domain::ExportRequest;
///
/// let request: ExportRequest =
///     serde_json::from_str(r#"{"identifier": "orders-db", "isCluster": true}"#).unwrap();
/// assert_eq!(request.identifier, "orders-db");
/// assert_eq!(request.is_cluster, Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    /// DB instance or DB cluster identifier
    pub identifier: String,

    /// Look up a cluster snapshot instead of an instance snapshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_cluster: Option<bool>,
}

impl ExportRequest {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            is_cluster: None,
        }
    }

    pub fn cluster(mut self, is_cluster: bool) -> Self {
        self.is_cluster = Some(is_cluster);
        self
    }

    pub fn kind(&self) -> SnapshotKind {
        SnapshotKind::from_cluster_flag(self.is_cluster)
    }
}

/// Lambda invocation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportResult {
    /// Constant tag naming this function's job
    pub taskname: String,

    /// Instance identifier, echoed from the request
    pub identifier: String,

    /// Export task status as reported by RDS (usually `STARTING`)
    pub status: String,
}

/// Parameters of a `StartExportTask` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartExportTask {
    pub task_id: ExportTaskId,
    pub source_arn: String,
    pub bucket: BucketName,
    pub iam_role_arn: String,
    pub kms_key_id: String,
}

/// What RDS answered to `StartExportTask`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTaskReceipt {
    pub task_id: String,
    pub status: String,
}
