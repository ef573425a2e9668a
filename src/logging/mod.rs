//! Logging and observability
//!
//! Structured logging with `tracing`:
//! - JSON-formatted logs for CloudWatch
//! - Configurable log levels, overridable with `RUST_LOG`
//!
//! # Example
//!
//! ```no_run
//! use rds_snapshot_export::logging::init_logging;
//! use rds_snapshot_export::config::LoggingConfig;
//!
//! init_logging(&LoggingConfig::default()).expect("Failed to initialize logging");
//!
//! tracing::info!(identifier = "orders-db", "Starting snapshot export");
//! ```

pub mod structured;

pub use structured::init_logging;

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use rds_snapshot_export::log_error_with_context;
/// use rds_snapshot_export::domain::ExporterError;
///
/// let error = ExporterError::Configuration("Region is not set".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
