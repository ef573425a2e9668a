//! Configuration management for the exporter.
//!
//! When deployed as a Lambda function the exporter is configured entirely
//! through environment variables. For local runs a TOML file can be used
//! instead; it supports `${VAR_NAME}` substitution and the same environment
//! overrides.
//!
//! # Environment
//!
//! | Variable                             | Required | Meaning                          |
//! |--------------------------------------|----------|----------------------------------|
//! | `Region`                             | yes      | Region of the RDS client         |
//! | `SNAPSHOT_EXPORT_TASK_ROLE`          | yes      | IAM role ARN for the export task |
//! | `SNAPSHOT_EXPORT_TASK_KEY`           | yes      | KMS key id for the export task   |
//! | `SNAPSHOT_EXPORT_SNAPSHOT_POSTFIX`   | no       | Snapshot name postfix            |
//! | `SNAPSHOT_EXPORT_BUCKET_PREFIX`      | no       | Bucket name prefix               |
//! | `SNAPSHOT_EXPORT_TASK_NAME`          | no       | `taskname` reported in results   |
//! | `SNAPSHOT_EXPORT_LOG_LEVEL`          | no       | trace, debug, info, warn, error  |
//! | `SNAPSHOT_EXPORT_LOG_FORMAT`         | no       | json or pretty                   |
//!
//! # Example Configuration
//!
//! ```toml
//! [aws]
//! region = "${Region}"
//!
//! [export]
//! iam_role_arn = "arn:aws:iam::123456789012:role/rds-s3-export"
//! kms_key_id = "${SNAPSHOT_EXPORT_TASK_KEY}"
//! snapshot_postfix = "-snapshot"
//! bucket_name_prefix = "rds-snapshots-"
//!
//! [logging]
//! level = "debug"
//! format = "pretty"
//! ```

pub mod loader;
pub mod schema;

pub use loader::{config_from_lookup, load_config, load_from_env};
pub use schema::{AwsConfig, ExportConfig, ExporterConfig, LogFormat, LoggingConfig};
