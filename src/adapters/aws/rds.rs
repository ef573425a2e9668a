//! Amazon RDS client
//!
//! Implements [`SnapshotCatalog`] with `DescribeDBSnapshots` /
//! `DescribeDBClusterSnapshots` and [`ExportTaskService`] with
//! `StartExportTask`.

use super::{classify, missing_field};
use crate::adapters::traits::{ExportTaskService, ProviderResult, SnapshotCatalog};
use crate::domain::{
    ExportTaskReceipt, SnapshotKind, SnapshotName, SnapshotRecord, SnapshotStatus, StartExportTask,
};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_rds::config::http::HttpResponse;
use aws_sdk_rds::error::{ProvideErrorMetadata, SdkError};

const DESCRIBE_DB_SNAPSHOTS: &str = "DescribeDBSnapshots";
const DESCRIBE_DB_CLUSTER_SNAPSHOTS: &str = "DescribeDBClusterSnapshots";
const START_EXPORT_TASK: &str = "StartExportTask";

/// RDS client for the exporter
#[derive(Debug, Clone)]
pub struct RdsClient {
    client: aws_sdk_rds::Client,
}

impl RdsClient {
    /// Create a client from a loaded SDK configuration
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_rds::Client::new(sdk_config),
        }
    }

    async fn describe_instance_snapshots(
        &self,
        name: &SnapshotName,
    ) -> ProviderResult<Vec<SnapshotRecord>> {
        let result = self
            .client
            .describe_db_snapshots()
            .db_snapshot_identifier(name.as_str())
            .send()
            .await;
        let Some(output) = absent_when_not_found(DESCRIBE_DB_SNAPSHOTS, result, |e| {
            e.is_db_snapshot_not_found_fault()
        })?
        else {
            return Ok(Vec::new());
        };

        output
            .db_snapshots()
            .iter()
            .map(|snapshot| -> ProviderResult<SnapshotRecord> {
                let arn = snapshot
                    .db_snapshot_arn()
                    .ok_or_else(|| missing_field(DESCRIBE_DB_SNAPSHOTS, "DBSnapshotArn"))?;
                Ok(SnapshotRecord::new(
                    arn,
                    SnapshotStatus::from_provider(snapshot.status()),
                ))
            })
            .collect()
    }

    async fn describe_cluster_snapshots(
        &self,
        name: &SnapshotName,
    ) -> ProviderResult<Vec<SnapshotRecord>> {
        let result = self
            .client
            .describe_db_cluster_snapshots()
            .db_cluster_snapshot_identifier(name.as_str())
            .send()
            .await;
        let Some(output) = absent_when_not_found(DESCRIBE_DB_CLUSTER_SNAPSHOTS, result, |e| {
            e.is_db_cluster_snapshot_not_found_fault()
        })?
        else {
            return Ok(Vec::new());
        };

        output
            .db_cluster_snapshots()
            .iter()
            .map(|snapshot| -> ProviderResult<SnapshotRecord> {
                let arn = snapshot.db_cluster_snapshot_arn().ok_or_else(|| {
                    missing_field(DESCRIBE_DB_CLUSTER_SNAPSHOTS, "DBClusterSnapshotArn")
                })?;
                Ok(SnapshotRecord::new(
                    arn,
                    SnapshotStatus::from_provider(snapshot.status()),
                ))
            })
            .collect()
    }
}

/// Outcome of a describe call, with "snapshot not found" read as no output
///
/// RDS rejects a lookup of an unknown snapshot identifier with a not-found
/// fault. That is a lookup with zero results, not a failed call.
fn absent_when_not_found<O, E>(
    operation: &str,
    result: Result<O, SdkError<E, HttpResponse>>,
    is_not_found: impl Fn(&E) -> bool,
) -> ProviderResult<Option<O>>
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    match result {
        Ok(output) => Ok(Some(output)),
        Err(err) if err.as_service_error().is_some_and(|e| is_not_found(e)) => Ok(None),
        Err(err) => Err(classify(operation, err)),
    }
}

#[async_trait]
impl SnapshotCatalog for RdsClient {
    async fn describe_snapshots(
        &self,
        name: &SnapshotName,
        kind: SnapshotKind,
    ) -> ProviderResult<Vec<SnapshotRecord>> {
        tracing::debug!(snapshot = %name, kind = %kind, "Describing snapshots");

        match kind {
            SnapshotKind::Instance => self.describe_instance_snapshots(name).await,
            SnapshotKind::Cluster => self.describe_cluster_snapshots(name).await,
        }
    }
}

#[async_trait]
impl ExportTaskService for RdsClient {
    async fn start_export_task(&self, task: &StartExportTask) -> ProviderResult<ExportTaskReceipt> {
        let output = self
            .client
            .start_export_task()
            .export_task_identifier(task.task_id.as_str())
            .source_arn(task.source_arn.as_str())
            .s3_bucket_name(task.bucket.as_str())
            .iam_role_arn(task.iam_role_arn.as_str())
            .kms_key_id(task.kms_key_id.as_str())
            .send()
            .await
            .map_err(|err| classify(START_EXPORT_TASK, err))?;

        let status = output
            .status()
            .ok_or_else(|| missing_field(START_EXPORT_TASK, "Status"))?;

        Ok(ExportTaskReceipt {
            task_id: output
                .export_task_identifier()
                .unwrap_or(task.task_id.as_str())
                .to_string(),
            status: status.to_string(),
        })
    }
}
