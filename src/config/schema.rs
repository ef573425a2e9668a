//! Configuration schema types

use crate::core::export::naming;
use serde::{Deserialize, Serialize};

/// Main exporter configuration
///
/// This is the root configuration structure; it maps to the optional TOML
/// file and is otherwise filled from the Lambda environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// AWS client settings
    pub aws: AwsConfig,

    /// Export task settings
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ExporterConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value
    pub fn validate(&self) -> Result<(), String> {
        self.aws.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// AWS client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwsConfig {
    /// Region for the RDS client (e.g. `eu-west-1`)
    pub region: String,
}

impl AwsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.region.trim().is_empty() {
            return Err("aws.region cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Export task settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// IAM role RDS assumes to write into the bucket
    pub iam_role_arn: String,

    /// KMS key used to encrypt the exported data
    pub kms_key_id: String,

    /// Appended to the instance identifier to name its snapshot
    #[serde(default = "default_snapshot_postfix")]
    pub snapshot_postfix: String,

    /// Prepended to the account id to name the destination bucket
    #[serde(default = "default_bucket_name_prefix")]
    pub bucket_name_prefix: String,

    /// Tag reported as `taskname` in every result
    #[serde(default = "default_task_name")]
    pub task_name: String,
}

impl ExportConfig {
    /// Creates an export config with default naming
    pub fn new(iam_role_arn: impl Into<String>, kms_key_id: impl Into<String>) -> Self {
        Self {
            iam_role_arn: iam_role_arn.into(),
            kms_key_id: kms_key_id.into(),
            snapshot_postfix: default_snapshot_postfix(),
            bucket_name_prefix: default_bucket_name_prefix(),
            task_name: default_task_name(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        if !self.iam_role_arn.starts_with("arn:") {
            return Err(format!(
                "export.iam_role_arn must be an ARN (arn:...), got '{}'",
                self.iam_role_arn
            ));
        }
        if self.kms_key_id.trim().is_empty() {
            return Err("export.kms_key_id cannot be empty".to_string());
        }
        if self.snapshot_postfix.is_empty() {
            return Err("export.snapshot_postfix cannot be empty".to_string());
        }
        if self.bucket_name_prefix.is_empty() {
            return Err("export.bucket_name_prefix cannot be empty".to_string());
        }
        if self.task_name.trim().is_empty() {
            return Err("export.task_name cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line, for CloudWatch Logs
    #[default]
    Json,
    /// Human readable, for local runs
    Pretty,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!("Invalid log format '{s}'. Must be one of: json, pretty")),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.as_str()) {
            return Err(format!(
                "Invalid logging.level '{}'. Must be one of: {}",
                self.level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_snapshot_postfix() -> String {
    naming::DEFAULT_SNAPSHOT_POSTFIX.to_string()
}

fn default_bucket_name_prefix() -> String {
    naming::DEFAULT_BUCKET_NAME_PREFIX.to_string()
}

fn default_task_name() -> String {
    naming::DEFAULT_TASK_NAME.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> ExporterConfig {
        ExporterConfig {
            aws: AwsConfig {
                region: "eu-west-1".to_string(),
            },
            export: ExportConfig::new(
                "arn:aws:iam::123456789012:role/rds-s3-export",
                "arn:aws:kms:eu-west-1:123456789012:key/abcd",
            ),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_export_config_defaults() {
        let export = ExportConfig::new("arn:aws:iam::1:role/r", "key");
        assert_eq!(export.snapshot_postfix, naming::DEFAULT_SNAPSHOT_POSTFIX);
        assert_eq!(export.bucket_name_prefix, naming::DEFAULT_BUCKET_NAME_PREFIX);
        assert_eq!(export.task_name, naming::DEFAULT_TASK_NAME);
    }

    #[test]
    fn test_empty_region_rejected() {
        let mut config = valid_config();
        config.aws.region = " ".to_string();
        assert_eq!(config.validate().unwrap_err(), "aws.region cannot be empty");
    }

    #[test]
    fn test_role_must_be_arn() {
        let mut config = valid_config();
        config.export.iam_role_arn = "rds-s3-export".to_string();
        assert!(config.validate().unwrap_err().contains("must be an ARN"));
    }

    #[test]
    fn test_empty_kms_key_rejected() {
        let mut config = valid_config();
        config.export.kms_key_id = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = valid_config();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().unwrap_err().contains("logging.level"));
    }

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
