//! Validate config command implementation

use crate::config::ExporterConfig;
use crate::domain::Result;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Report whether the configuration loaded and print a summary
    ///
    /// Loading already validates, so a loaded configuration is a valid one.
    pub fn execute(&self, source: &str, config: &Result<ExporterConfig>) -> i32 {
        tracing::info!(source = %source, "Validating configuration");

        println!("🔍 Validating configuration from: {source}");
        println!();

        match config {
            Ok(config) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Region: {}", config.aws.region);
                println!("  Export Role: {}", config.export.iam_role_arn);
                println!("  KMS Key: {}", config.export.kms_key_id);
                println!("  Snapshot Postfix: {}", config.export.snapshot_postfix);
                println!("  Bucket Prefix: {}", config.export.bucket_name_prefix);
                println!("  Task Name: {}", config.export.task_name);
                println!("  Log Level: {}", config.logging.level);
                println!();
                0
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                2
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AwsConfig, ExportConfig, LoggingConfig};
    use crate::domain::ExporterError;

    #[test]
    fn test_valid_config_exit_code() {
        let config = Ok(ExporterConfig {
            aws: AwsConfig {
                region: "eu-west-1".to_string(),
            },
            export: ExportConfig::new("arn:aws:iam::1:role/r", "key"),
            logging: LoggingConfig::default(),
        });
        assert_eq!(ValidateArgs::default().execute("environment", &config), 0);
    }

    #[test]
    fn test_invalid_config_exit_code() {
        let config = Err(ExporterError::Configuration("Region is missing".to_string()));
        assert_eq!(ValidateArgs::default().execute("environment", &config), 2);
    }
}
