// RDS Snapshot Export - trigger RDS snapshot exports to S3
// Copyright (c) 2025 RDS Snapshot Export Contributors
// Licensed under the MIT License

use clap::Parser;
use rds_snapshot_export::cli::commands::exit_code;
use rds_snapshot_export::cli::commands::lambda::LambdaArgs;
use rds_snapshot_export::cli::{Cli, Commands};
use rds_snapshot_export::config::ExporterConfig;
use rds_snapshot_export::domain::Result;
use rds_snapshot_export::log_error_with_context;
use rds_snapshot_export::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = cli.load_config();
    let logging_config = cli.logging_config(config.as_ref().ok());
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(5);
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "RDS Snapshot Export");

    let code = match execute_command(&cli, config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    process::exit(code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, config: Result<ExporterConfig>) -> anyhow::Result<i32> {
    if let Some(Commands::ValidateConfig(args)) = &cli.command {
        return Ok(args.execute(cli.config_source(), &config));
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            log_error_with_context!(&e, "Failed to load configuration");
            eprintln!("Error: {e}");
            return Ok(exit_code(&e));
        }
    };

    match &cli.command {
        None => LambdaArgs::default().execute(config).await,
        Some(Commands::Lambda(args)) => args.execute(config).await,
        Some(Commands::Export(args)) => args.execute(config).await,
        Some(Commands::ValidateConfig(_)) => Ok(0),
    }
}
