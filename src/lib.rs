// RDS Snapshot Export - trigger RDS snapshot exports to S3
// Copyright (c) 2025 RDS Snapshot Export Contributors
// Licensed under the MIT License

//! # RDS Snapshot Export
//!
//! A Lambda function that starts an export of an Amazon RDS snapshot to S3.
//!
//! ## Overview
//!
//! Given an instance identifier (and whether it names an Aurora cluster), the
//! function:
//! - **Resolves** the snapshot `<identifier><postfix>` to its ARN
//! - **Checks** that exactly one such snapshot exists and that it is `available`
//! - **Starts** an export task into the bucket `<prefix><account id>`
//!
//! ## Architecture
//!
//! - [`cli`] - Binary entry points (Lambda runtime loop, one-shot export)
//! - [`core`] - The export trigger handler and naming conventions
//! - [`adapters`] - Provider traits and their AWS SDK implementations
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rds_snapshot_export::config::load_from_env;
//! use rds_snapshot_export::core::export::ExportHandler;
//! use rds_snapshot_export::domain::ExportRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_from_env()?;
//!     let handler = ExportHandler::from_config(&config).await;
//!
//!     let result = handler.handle(ExportRequest::new("orders-db")).await?;
//!     println!("{}: {}", result.identifier, result.status);
//!     Ok(())
//! }
//! ```
//!
//! ## Invocation payloads
//!
//! ```json
//! {"identifier": "orders-db", "isCluster": false}
//! ```
//!
//! is answered with
//!
//! ```json
//! {"taskname": "export_snapshot", "identifier": "orders-db", "status": "STARTING"}
//! ```
//!
//! ## Error Handling
//!
//! All library errors are [`domain::ExporterError`]. A failed start-export
//! call is reported as [`domain::ExporterError::ExportTaskFailed`] with the
//! provider error kept as its source.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
