//! Naming conventions for snapshots, buckets and export tasks

use crate::domain::ids::{AccountId, BucketName, ExportTaskId, InstanceId, SnapshotName};
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Appended to the instance identifier to form the snapshot name
pub const DEFAULT_SNAPSHOT_POSTFIX: &str = "-snapshot";

/// Prepended to the account id to form the destination bucket name
pub const DEFAULT_BUCKET_NAME_PREFIX: &str = "rds-snapshots-";

/// Reported as `taskname` in every result
pub const DEFAULT_TASK_NAME: &str = "export_snapshot";

/// Length of the random part of an export task identifier
pub const TASK_SUFFIX_LEN: usize = 12;

/// Name of the snapshot taken for `instance`
///
/// ```
/// use rds_snapshot_export::core::export::naming::snapshot_name;
/// use rds_snapshot_export::domain::InstanceId;
///
/// let instance = InstanceId::new("orders-db").unwrap();
/// assert_eq!(snapshot_name(&instance, "-snapshot").as_str(), "orders-db-snapshot");
/// ```
pub fn snapshot_name(instance: &InstanceId, postfix: &str) -> SnapshotName {
    SnapshotName::from_parts(format!("{instance}{postfix}"))
}

/// Destination bucket for exports of `account`
pub fn bucket_name(prefix: &str, account: &AccountId) -> BucketName {
    BucketName::from_parts(format!("{prefix}{account}"))
}

/// Builds an export task identifier `<instance>-<12 random alphanumerics>`
///
/// The suffix keeps repeated exports of the same instance from colliding.
pub fn export_task_id<R>(instance: &InstanceId, rng: &mut R) -> ExportTaskId
where
    R: Rng + ?Sized,
{
    let suffix: String = rng
        .sample_iter(&Alphanumeric)
        .take(TASK_SUFFIX_LEN)
        .map(char::from)
        .collect();
    ExportTaskId::from_parts(format!("{instance}-{suffix}"))
}

/// [`export_task_id`] using the thread-local generator
pub fn random_export_task_id(instance: &InstanceId) -> ExportTaskId {
    export_task_id(instance, &mut rand::thread_rng())
}
