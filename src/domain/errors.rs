//! Domain error types
//!
//! This module defines the error hierarchy for the exporter. Errors are
//! domain-specific and don't expose AWS SDK types: provider failures are
//! flattened into [`ProviderError`] at the adapter boundary.

use thiserror::Error;

/// Main exporter error type
///
/// Every failure aborts the invocation; nothing is retried locally.
#[derive(Debug, Error)]
pub enum ExporterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid invocation input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A provider call failed before the export task was requested
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The snapshot lookup did not return exactly one snapshot
    #[error("Expected exactly one snapshot matching name {snapshot}, found {found}")]
    SnapshotMatch { snapshot: String, found: usize },

    /// The snapshot exists but cannot be exported yet
    #[error("Snapshot {snapshot} is not available yet, status is {status}")]
    SnapshotNotReady { snapshot: String, status: String },

    /// The start-export-task call failed
    #[error("Failed to start export task {task_id}: {source}")]
    ExportTaskFailed {
        task_id: String,
        #[source]
        source: ProviderError,
    },
}

/// Errors raised while talking to AWS
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The service answered with a non-success HTTP status
    #[error("{operation} returned HTTP {status}: {message}")]
    Transport {
        operation: String,
        status: u16,
        message: String,
    },

    /// Any other SDK failure (dispatch, timeout, modeled service error)
    #[error("{operation} failed: {message}")]
    Service { operation: String, message: String },

    /// The response did not carry a field the exporter relies on
    #[error("{operation} response is missing {field}")]
    MissingField { operation: String, field: String },
}

impl ProviderError {
    /// Name of the provider operation that failed
    pub fn operation(&self) -> &str {
        match self {
            ProviderError::Transport { operation, .. }
            | ProviderError::Service { operation, .. }
            | ProviderError::MissingField { operation, .. } => operation,
        }
    }

    /// HTTP status of a transport failure, if any
    pub fn http_status(&self) -> Option<u16> {
        match self {
            ProviderError::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_exporter_error_display() {
        let err = ExporterError::Configuration("Region is not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: Region is not set");
    }

    #[test]
    fn test_snapshot_not_ready_mentions_status() {
        let err = ExporterError::SnapshotNotReady {
            snapshot: "orders-db-snapshot".to_string(),
            status: "creating".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Snapshot orders-db-snapshot is not available yet, status is creating"
        );
    }

    #[test]
    fn test_snapshot_match_display() {
        let err = ExporterError::SnapshotMatch {
            snapshot: "orders-db-snapshot".to_string(),
            found: 2,
        };
        assert!(err.to_string().contains("found 2"));
    }

    #[test]
    fn test_provider_error_conversion() {
        let provider = ProviderError::Transport {
            operation: "DescribeDBSnapshots".to_string(),
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        let err: ExporterError = provider.into();
        assert!(matches!(err, ExporterError::Provider(_)));
    }

    #[test]
    fn test_export_task_failed_keeps_source() {
        let err = ExporterError::ExportTaskFailed {
            task_id: "orders-db-abcdefABCDEF".to_string(),
            source: ProviderError::Service {
                operation: "StartExportTask".to_string(),
                message: "KMSKeyNotAccessibleFault".to_string(),
            },
        };

        let source = err.source().expect("source should be kept");
        assert!(source.to_string().contains("KMSKeyNotAccessibleFault"));
    }

    #[test]
    fn test_provider_error_accessors() {
        let transport = ProviderError::Transport {
            operation: "GetCallerIdentity".to_string(),
            status: 403,
            message: "denied".to_string(),
        };
        assert_eq!(transport.operation(), "GetCallerIdentity");
        assert_eq!(transport.http_status(), Some(403));

        let missing = ProviderError::MissingField {
            operation: "StartExportTask".to_string(),
            field: "Status".to_string(),
        };
        assert_eq!(missing.http_status(), None);
        assert_eq!(missing.to_string(), "StartExportTask response is missing Status");
    }
}
