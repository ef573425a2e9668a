//! Integration tests for configuration loading and validation
//!
//! Tests that modify the process environment hold `ENV_MUTEX`.

use rds_snapshot_export::config::{load_config, load_from_env, LogFormat};
use rds_snapshot_export::domain::ExporterError;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ROLE_ARN: &str = "arn:aws:iam::123456789012:role/rds-s3-export";
const KMS_KEY: &str = "arn:aws:kms:eu-west-1:123456789012:key/0f1e2d3c";

fn cleanup_env_vars() {
    for name in [
        "Region",
        "SNAPSHOT_EXPORT_TASK_ROLE",
        "SNAPSHOT_EXPORT_TASK_KEY",
        "SNAPSHOT_EXPORT_SNAPSHOT_POSTFIX",
        "SNAPSHOT_EXPORT_BUCKET_PREFIX",
        "SNAPSHOT_EXPORT_TASK_NAME",
        "SNAPSHOT_EXPORT_LOG_LEVEL",
        "SNAPSHOT_EXPORT_LOG_FORMAT",
        "TEST_EXPORT_KMS_KEY",
    ] {
        std::env::remove_var(name);
    }
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_from_env_with_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("Region", "eu-west-1");
    std::env::set_var("SNAPSHOT_EXPORT_TASK_ROLE", ROLE_ARN);
    std::env::set_var("SNAPSHOT_EXPORT_TASK_KEY", KMS_KEY);

    let config = load_from_env().expect("Failed to load config from environment");

    assert_eq!(config.aws.region, "eu-west-1");
    assert_eq!(config.export.iam_role_arn, ROLE_ARN);
    assert_eq!(config.export.kms_key_id, KMS_KEY);
    assert_eq!(config.export.snapshot_postfix, "-snapshot");
    assert_eq!(config.export.bucket_name_prefix, "rds-snapshots-");
    assert_eq!(config.export.task_name, "export_snapshot");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Json);

    cleanup_env_vars();
}

#[test]
fn test_load_from_env_reports_missing_variables() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("Region", "eu-west-1");

    let err = load_from_env().unwrap_err();

    assert!(matches!(err, ExporterError::Configuration(_)));
    let message = err.to_string();
    assert!(message.contains("SNAPSHOT_EXPORT_TASK_ROLE"));
    assert!(message.contains("SNAPSHOT_EXPORT_TASK_KEY"));
    assert!(!message.contains("Region"));

    cleanup_env_vars();
}

#[test]
fn test_load_complete_config_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[aws]
region = "us-east-1"

[export]
iam_role_arn = "arn:aws:iam::123456789012:role/rds-s3-export"
kms_key_id = "alias/rds-export"
snapshot_postfix = "-nightly"
bucket_name_prefix = "exports-"
task_name = "nightly_export"

[logging]
level = "debug"
format = "pretty"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.aws.region, "us-east-1");
    assert_eq!(config.export.kms_key_id, "alias/rds-export");
    assert_eq!(config.export.snapshot_postfix, "-nightly");
    assert_eq!(config.export.bucket_name_prefix, "exports-");
    assert_eq!(config.export.task_name, "nightly_export");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_EXPORT_KMS_KEY", KMS_KEY);

    let temp_file = write_config(
        r#"
[aws]
region = "eu-west-1"

[export]
# kms_key_id = "${NOT_SET_ANYWHERE}"
iam_role_arn = "arn:aws:iam::123456789012:role/rds-s3-export"
kms_key_id = "${TEST_EXPORT_KMS_KEY}"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.export.kms_key_id, KMS_KEY);
    assert_eq!(config.export.snapshot_postfix, "-snapshot");

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable_fails() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[aws]
region = "eu-west-1"

[export]
iam_role_arn = "arn:aws:iam::123456789012:role/rds-s3-export"
kms_key_id = "${TEST_EXPORT_KMS_KEY}"
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_EXPORT_KMS_KEY"));
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("Region", "ap-southeast-2");
    std::env::set_var("SNAPSHOT_EXPORT_BUCKET_PREFIX", "archive-");
    std::env::set_var("SNAPSHOT_EXPORT_LOG_LEVEL", "TRACE");

    let temp_file = write_config(
        r#"
[aws]
region = "eu-west-1"

[export]
iam_role_arn = "arn:aws:iam::123456789012:role/rds-s3-export"
kms_key_id = "alias/rds-export"
bucket_name_prefix = "exports-"

[logging]
level = "info"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.aws.region, "ap-southeast-2");
    assert_eq!(config.export.bucket_name_prefix, "archive-");
    assert_eq!(config.logging.level, "trace");

    cleanup_env_vars();
}

#[test]
fn test_invalid_role_arn_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[aws]
region = "eu-west-1"

[export]
iam_role_arn = "rds-s3-export"
kms_key_id = "alias/rds-export"
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("Configuration validation failed"));
}

#[test]
fn test_malformed_toml_is_configuration_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("[aws\nregion = = \"eu-west-1\"\n");

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(matches!(err, ExporterError::Configuration(_)));
    assert!(err.to_string().contains("Failed to parse TOML"));
}

#[test]
fn test_missing_config_file() {
    let err = load_config("/nonexistent/snapshot-export.toml").unwrap_err();
    assert!(err.to_string().contains("Configuration file not found"));
}
