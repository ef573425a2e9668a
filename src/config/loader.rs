//! Configuration loading from the Lambda environment or a TOML file

use super::schema::{AwsConfig, ExportConfig, ExporterConfig, LoggingConfig};
use crate::domain::errors::ExporterError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Region for the RDS client
pub const REGION_VAR: &str = "Region";
/// IAM role ARN handed to `StartExportTask`
pub const TASK_ROLE_VAR: &str = "SNAPSHOT_EXPORT_TASK_ROLE";
/// KMS key id handed to `StartExportTask`
pub const TASK_KEY_VAR: &str = "SNAPSHOT_EXPORT_TASK_KEY";

pub const SNAPSHOT_POSTFIX_VAR: &str = "SNAPSHOT_EXPORT_SNAPSHOT_POSTFIX";
pub const BUCKET_PREFIX_VAR: &str = "SNAPSHOT_EXPORT_BUCKET_PREFIX";
pub const TASK_NAME_VAR: &str = "SNAPSHOT_EXPORT_TASK_NAME";
pub const LOG_LEVEL_VAR: &str = "SNAPSHOT_EXPORT_LOG_LEVEL";
pub const LOG_FORMAT_VAR: &str = "SNAPSHOT_EXPORT_LOG_FORMAT";

/// Builds the configuration from process environment variables
///
/// This is how the function is configured when deployed: `Region`,
/// `SNAPSHOT_EXPORT_TASK_ROLE` and `SNAPSHOT_EXPORT_TASK_KEY` are required,
/// every `SNAPSHOT_EXPORT_*` override is optional.
///
/// # Errors
///
/// Returns a configuration error naming every missing required variable, or
/// the first validation failure.
pub fn load_from_env() -> Result<ExporterConfig> {
    config_from_lookup(|name| std::env::var(name).ok())
}

/// Builds the configuration from an arbitrary variable source
///
/// `load_from_env` is this function over `std::env::var`.
pub fn config_from_lookup<F>(lookup: F) -> Result<ExporterConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |name: &str, missing: &mut Vec<String>| -> String {
        match lookup(name) {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                missing.push(name.to_string());
                String::new()
            }
        }
    };

    let mut missing = Vec::new();
    let region = required(REGION_VAR, &mut missing);
    let iam_role_arn = required(TASK_ROLE_VAR, &mut missing);
    let kms_key_id = required(TASK_KEY_VAR, &mut missing);

    if !missing.is_empty() {
        return Err(ExporterError::Configuration(format!(
            "Missing required environment variables: {}",
            missing.join(", ")
        )));
    }

    let mut config = ExporterConfig {
        aws: AwsConfig { region },
        export: ExportConfig::new(iam_role_arn, kms_key_id),
        logging: LoggingConfig::default(),
    };

    apply_env_overrides(&mut config, &lookup)?;
    validate(&config)?;

    Ok(config)
}

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into `ExporterConfig`
/// 4. Applies environment variable overrides
/// 5. Validates the configuration
///
/// # Examples
///
/// ```no_run
/// use rds_snapshot_export::config::load_config;
///
/// let config = load_config("snapshot-export.toml").expect("Failed to load config");
/// println!("Region: {}", config.aws.region);
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExporterError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ExporterError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let lookup = |name: &str| std::env::var(name).ok();
    let contents = substitute_env_vars(&contents, &lookup)?;

    let mut config: ExporterConfig = toml::from_str(&contents)
        .map_err(|e| ExporterError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config, &lookup)?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &ExporterConfig) -> Result<()> {
    config.validate().map_err(|e| {
        ExporterError::Configuration(format!("Configuration validation failed: {}", e))
    })
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
    })
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are copied untouched. All missing variables are reported
/// in one error.
fn substitute_env_vars<F>(input: &str, lookup: &F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let re = placeholder_regex();
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match lookup(var_name) {
                Some(value) => {
                    processed_line = processed_line.replace(&cap[0], &value);
                }
                None => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ExporterError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides
///
/// The three deployment variables win over the file so a packaged TOML can
/// be reused across accounts.
fn apply_env_overrides<F>(config: &mut ExporterConfig, lookup: &F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(REGION_VAR) {
        config.aws.region = val;
    }
    if let Some(val) = lookup(TASK_ROLE_VAR) {
        config.export.iam_role_arn = val;
    }
    if let Some(val) = lookup(TASK_KEY_VAR) {
        config.export.kms_key_id = val;
    }
    if let Some(val) = lookup(SNAPSHOT_POSTFIX_VAR) {
        config.export.snapshot_postfix = val;
    }
    if let Some(val) = lookup(BUCKET_PREFIX_VAR) {
        config.export.bucket_name_prefix = val;
    }
    if let Some(val) = lookup(TASK_NAME_VAR) {
        config.export.task_name = val;
    }
    if let Some(val) = lookup(LOG_LEVEL_VAR) {
        config.logging.level = val.to_lowercase();
    }
    if let Some(val) = lookup(LOG_FORMAT_VAR) {
        config.logging.format = val.parse().map_err(ExporterError::Configuration)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogFormat;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn deployment_vars() -> HashMap<String, String> {
        vars(&[
            (REGION_VAR, "eu-west-1"),
            (TASK_ROLE_VAR, "arn:aws:iam::123456789012:role/rds-s3-export"),
            (TASK_KEY_VAR, "arn:aws:kms:eu-west-1:123456789012:key/abcd"),
        ])
    }

    #[test]
    fn test_config_from_lookup() {
        let env = deployment_vars();
        let config = config_from_lookup(|k| env.get(k).cloned()).unwrap();

        assert_eq!(config.aws.region, "eu-west-1");
        assert_eq!(
            config.export.iam_role_arn,
            "arn:aws:iam::123456789012:role/rds-s3-export"
        );
        assert_eq!(config.export.snapshot_postfix, "-snapshot");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_missing_variables_reported_together() {
        let env = vars(&[(REGION_VAR, "eu-west-1")]);
        let err = config_from_lookup(|k| env.get(k).cloned()).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains(TASK_ROLE_VAR));
        assert!(msg.contains(TASK_KEY_VAR));
        assert!(!msg.contains(REGION_VAR));
    }

    #[test]
    fn test_blank_required_variable_is_missing() {
        let mut env = deployment_vars();
        env.insert(REGION_VAR.to_string(), "  ".to_string());
        let err = config_from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains(REGION_VAR));
    }

    #[test]
    fn test_optional_overrides() {
        let mut env = deployment_vars();
        env.insert(SNAPSHOT_POSTFIX_VAR.to_string(), "-final".to_string());
        env.insert(BUCKET_PREFIX_VAR.to_string(), "exports-".to_string());
        env.insert(LOG_LEVEL_VAR.to_string(), "DEBUG".to_string());
        env.insert(LOG_FORMAT_VAR.to_string(), "pretty".to_string());

        let config = config_from_lookup(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.export.snapshot_postfix, "-final");
        assert_eq!(config.export.bucket_name_prefix, "exports-");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_invalid_log_format_override() {
        let mut env = deployment_vars();
        env.insert(LOG_FORMAT_VAR.to_string(), "xml".to_string());
        let err = config_from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ExporterError::Configuration(_)));
    }

    #[test]
    fn test_invalid_role_fails_validation() {
        let mut env = deployment_vars();
        env.insert(TASK_ROLE_VAR.to_string(), "not-an-arn".to_string());
        let err = config_from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("validation failed"));
    }

    #[test]
    fn test_substitute_env_vars() {
        let env = vars(&[("Region", "us-east-1"), ("KEY_ID", "abcd")]);
        let input = "region = \"${Region}\"\nkey = \"${KEY_ID}\"\n";
        let output = substitute_env_vars(input, &|k: &str| env.get(k).cloned()).unwrap();
        assert_eq!(output, "region = \"us-east-1\"\nkey = \"abcd\"\n");
    }

    #[test]
    fn test_substitute_skips_comments() {
        let env: HashMap<String, String> = HashMap::new();
        let input = "# region = \"${UNSET_VAR}\"\n";
        let output = substitute_env_vars(input, &|k: &str| env.get(k).cloned()).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_substitute_reports_missing_once() {
        let env: HashMap<String, String> = HashMap::new();
        let input = "a = \"${MISSING_ONE}\"\nb = \"${MISSING_ONE}\"\nc = \"${MISSING_TWO}\"\n";
        let err = substitute_env_vars(input, &|k: &str| env.get(k).cloned()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required environment variables: MISSING_ONE, MISSING_TWO"
        );
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("/nonexistent/snapshot-export.toml").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
