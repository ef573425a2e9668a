//! Core business logic for the exporter.
//!
//! # Export Workflow
//!
//! 1. **Name**: derive the export task id and the snapshot name from the instance identifier
//! 2. **Resolve**: look up the snapshot, requiring exactly one `available` match
//! 3. **Locate**: resolve the caller account and the destination bucket
//! 4. **Start**: submit one `StartExportTask` request
//!
//! # Example
//!
//! ```rust,no_run
//! use rds_snapshot_export::config::load_from_env;
//! use rds_snapshot_export::core::export::ExportHandler;
//! use rds_snapshot_export::domain::ExportRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_from_env()?;
//! let handler = ExportHandler::from_config(&config).await;
//!
//! let result = handler.handle(ExportRequest::new("orders-db").cluster(false)).await?;
//! println!("{} {}", result.identifier, result.status);
//! # Ok(())
//! # }
//! ```

pub mod export;
