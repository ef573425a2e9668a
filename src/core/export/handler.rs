//! Export trigger handler
//!
//! Resolves the snapshot of an RDS instance or cluster, checks that it is
//! available and asks RDS to export it to the account's snapshot bucket.

use super::naming;
use crate::adapters::aws::{load_sdk_config, RdsClient, StsClient};
use crate::adapters::traits::{CallerIdentity, ExportTaskService, SnapshotCatalog};
use crate::config::{ExportConfig, ExporterConfig};
use crate::domain::{
    ExportRequest, ExportResult, ExportTaskId, ExporterError, InstanceId, ProviderError, Result,
    SnapshotKind, SnapshotName, SnapshotRecord, StartExportTask,
};
use std::sync::Arc;
use std::time::Instant;

/// Generates export task identifiers
///
/// Production uses [`naming::random_export_task_id`]; tests pin it.
pub type TaskIdGenerator = Arc<dyn Fn(&InstanceId) -> ExportTaskId + Send + Sync>;

/// Handles one export invocation at a time
///
/// The handler holds no per-invocation state and can be shared by reference
/// across invocations.
pub struct ExportHandler {
    settings: ExportConfig,
    snapshots: Arc<dyn SnapshotCatalog>,
    exports: Arc<dyn ExportTaskService>,
    identity: Arc<dyn CallerIdentity>,
    task_ids: TaskIdGenerator,
}

impl ExportHandler {
    /// Create a handler over explicit providers
    pub fn new(
        settings: ExportConfig,
        snapshots: Arc<dyn SnapshotCatalog>,
        exports: Arc<dyn ExportTaskService>,
        identity: Arc<dyn CallerIdentity>,
    ) -> Self {
        Self {
            settings,
            snapshots,
            exports,
            identity,
            task_ids: Arc::new(naming::random_export_task_id),
        }
    }

    /// Create a handler backed by the AWS SDK
    ///
    /// RDS and STS share one SDK configuration for the configured region.
    pub async fn from_config(config: &ExporterConfig) -> Self {
        let sdk_config = load_sdk_config(&config.aws.region).await;
        let rds = Arc::new(RdsClient::new(&sdk_config));
        let sts = Arc::new(StsClient::new(&sdk_config));

        tracing::debug!(region = %config.aws.region, "AWS clients created");

        Self::new(config.export.clone(), rds.clone(), rds, sts)
    }

    /// Replace the export task id generator
    pub fn with_task_id_generator(mut self, task_ids: TaskIdGenerator) -> Self {
        self.task_ids = task_ids;
        self
    }

    /// Handle one invocation
    ///
    /// 1. Derive the export task id and the snapshot name
    /// 2. Resolve the snapshot ARN, requiring exactly one `available` match
    /// 3. Resolve the account id and the destination bucket
    /// 4. Start the export task
    ///
    /// # Errors
    ///
    /// Every failure aborts the invocation. Nothing is retried and no export
    /// is requested unless the snapshot lookup fully succeeded.
    pub async fn handle(&self, request: ExportRequest) -> Result<ExportResult> {
        let start_time = Instant::now();
        let instance = InstanceId::new(request.identifier.as_str())
            .map_err(ExporterError::Validation)?;
        let kind = request.kind();

        let task_id = (self.task_ids)(&instance);
        let snapshot = naming::snapshot_name(&instance, &self.settings.snapshot_postfix);

        tracing::info!(
            identifier = %instance,
            snapshot = %snapshot,
            kind = %kind,
            export_task_id = %task_id,
            "Starting snapshot export"
        );

        let snapshot_arn = self.resolve_snapshot_arn(&snapshot, kind).await?;

        let account = self
            .identity
            .account_id()
            .await
            .map_err(provider_failure)?;
        let bucket = naming::bucket_name(&self.settings.bucket_name_prefix, &account);

        let task = StartExportTask {
            task_id: task_id.clone(),
            source_arn: snapshot_arn,
            bucket,
            iam_role_arn: self.settings.iam_role_arn.clone(),
            kms_key_id: self.settings.kms_key_id.clone(),
        };

        let receipt = match self.exports.start_export_task(&task).await {
            Ok(receipt) => receipt,
            Err(source) => {
                tracing::error!(
                    export_task_id = %task_id,
                    operation = source.operation(),
                    http_status = ?source.http_status(),
                    error = %source,
                    "Export task request failed"
                );
                return Err(ExporterError::ExportTaskFailed {
                    task_id: task_id.into_inner(),
                    source,
                });
            }
        };

        tracing::info!(
            identifier = %instance,
            export_task_id = %receipt.task_id,
            bucket = %task.bucket,
            status = %receipt.status,
            duration_ms = start_time.elapsed().as_millis() as u64,
            "Export task started"
        );

        Ok(ExportResult {
            taskname: self.settings.task_name.clone(),
            identifier: instance.into_inner(),
            status: receipt.status,
        })
    }

    /// Returns the ARN of the single, available snapshot named `snapshot`
    async fn resolve_snapshot_arn(&self, snapshot: &SnapshotName, kind: SnapshotKind) -> Result<String> {
        let mut matches = self
            .snapshots
            .describe_snapshots(snapshot, kind)
            .await
            .map_err(provider_failure)?;

        if matches.len() != 1 {
            tracing::error!(
                snapshot = %snapshot,
                kind = %kind,
                found = matches.len(),
                "Snapshot lookup did not return exactly one snapshot"
            );
            return Err(ExporterError::SnapshotMatch {
                snapshot: snapshot.to_string(),
                found: matches.len(),
            });
        }

        let SnapshotRecord { arn, status } = matches.remove(0);
        if !status.is_available() {
            tracing::warn!(snapshot = %snapshot, status = %status, "Snapshot is not available yet");
            return Err(ExporterError::SnapshotNotReady {
                snapshot: snapshot.to_string(),
                status: status.to_string(),
            });
        }

        tracing::debug!(snapshot = %snapshot, arn = %arn, "Snapshot resolved");
        Ok(arn)
    }
}

fn provider_failure(source: ProviderError) -> ExporterError {
    tracing::error!(
        operation = source.operation(),
        http_status = ?source.http_status(),
        error = %source,
        "Provider call failed"
    );
    ExporterError::Provider(source)
}
