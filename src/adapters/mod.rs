//! External system integrations.
//!
//! - [`traits`] - the provider traits the export handler depends on
//! - [`aws`] - AWS SDK implementations (RDS, STS)
//!
//! # Design Pattern
//!
//! Adapters isolate the AWS SDK from the handler. The handler holds trait
//! objects, so tests swap in in-memory providers and never touch the network.
//!
//! ```rust,no_run
//! use rds_snapshot_export::adapters::aws::{load_sdk_config, RdsClient, StsClient};
//!
//! # async fn example() {
//! let sdk_config = load_sdk_config("eu-west-1").await;
//! let rds = RdsClient::new(&sdk_config);
//! let sts = StsClient::new(&sdk_config);
//! # }
//! ```

pub mod aws;
pub mod traits;

pub use traits::{CallerIdentity, ExportTaskService, ProviderResult, SnapshotCatalog};
