//! Snapshot model
//!
//! A snapshot as seen by the exporter: its provider-assigned ARN and the
//! lifecycle status reported by RDS.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which RDS snapshot family to look in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotKind {
    /// DB instance snapshot (`DescribeDBSnapshots`)
    Instance,
    /// Aurora DB cluster snapshot (`DescribeDBClusterSnapshots`)
    Cluster,
}

impl SnapshotKind {
    /// Maps the optional `isCluster` flag of an invocation to a kind
    pub fn from_cluster_flag(is_cluster: Option<bool>) -> Self {
        if is_cluster.unwrap_or(false) {
            SnapshotKind::Cluster
        } else {
            SnapshotKind::Instance
        }
    }
}

impl fmt::Display for SnapshotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotKind::Instance => f.write_str("instance"),
            SnapshotKind::Cluster => f.write_str("cluster"),
        }
    }
}

/// Snapshot lifecycle status
///
/// RDS reports many statuses; only `available` allows an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotStatus {
    Creating,
    Available,
    Other(String),
}

impl SnapshotStatus {
    /// Parses the status string reported by RDS
    ///
    /// A missing status is kept as an empty `Other` so it can never pass
    /// the readiness check.
    pub fn from_provider(status: Option<&str>) -> Self {
        match status {
            Some("available") => SnapshotStatus::Available,
            Some("creating") => SnapshotStatus::Creating,
            Some(other) => SnapshotStatus::Other(other.to_string()),
            None => SnapshotStatus::Other(String::new()),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SnapshotStatus::Available)
    }

    pub fn as_str(&self) -> &str {
        match self {
            SnapshotStatus::Creating => "creating",
            SnapshotStatus::Available => "available",
            SnapshotStatus::Other(status) => status,
        }
    }
}

impl fmt::Display for SnapshotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One snapshot returned by a lookup
///
/// The ARN is present even while the snapshot is still being created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRecord {
    pub arn: String,
    pub status: SnapshotStatus,
}

impl SnapshotRecord {
    pub fn new(arn: impl Into<String>, status: SnapshotStatus) -> Self {
        Self {
            arn: arn.into(),
            status,
        }
    }
}
