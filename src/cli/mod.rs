//! CLI interface and argument parsing
//!
//! With no subcommand the binary serves Lambda invocations, which is how the
//! `bootstrap` executable is started by the Lambda runtime.

pub mod commands;

use crate::config::{load_config, load_from_env, ExporterConfig, LoggingConfig};
use crate::domain::Result;
use clap::{Parser, Subcommand};

/// RDS snapshot export trigger
#[derive(Parser, Debug)]
#[command(name = "rds-snapshot-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file (default: read the environment)
    #[arg(short, long, env = "SNAPSHOT_EXPORT_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Subcommand to execute (default: lambda)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve invocations from the Lambda runtime API
    Lambda(commands::lambda::LambdaArgs),

    /// Trigger one snapshot export and print the result
    Export(commands::export::ExportArgs),

    /// Validate configuration
    ValidateConfig(commands::validate::ValidateArgs),
}

impl Cli {
    /// Load configuration from `--config` if given, else from the environment
    pub fn load_config(&self) -> Result<ExporterConfig> {
        match &self.config {
            Some(path) => load_config(path),
            None => load_from_env(),
        }
    }

    /// Logging settings for this run
    ///
    /// Falls back to defaults when the configuration could not be loaded so
    /// the load failure itself still gets logged.
    pub fn logging_config(&self, config: Option<&ExporterConfig>) -> LoggingConfig {
        let mut logging = config.map(|c| c.logging.clone()).unwrap_or_default();
        if let Some(level) = &self.log_level {
            logging.level = level.to_lowercase();
        }
        logging
    }

    /// Where configuration is read from, for messages
    pub fn config_source(&self) -> &str {
        self.config.as_deref().unwrap_or("environment")
    }
}
