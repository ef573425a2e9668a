//! Result type alias for the exporter

use super::errors::ExporterError;

/// Result type alias for exporter operations
///
/// # Examples
///
/// ```
/// use rds_snapshot_export::domain::result::Result;
/// use rds_snapshot_export::domain::errors::ExporterError;
///
/// fn failing_function() -> Result<()> {
///     Err(ExporterError::Validation("identifier cannot be empty".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ExporterError>;
