//! AWS SDK implementations of the provider traits
//!
//! - [`rds`] - snapshot lookup and export task submission
//! - [`sts`] - caller identity
//!
//! SDK errors never leave this module: [`classify`] turns them into
//! [`ProviderError`] values, keeping the HTTP status of transport failures.

pub mod rds;
pub mod sts;

pub use rds::RdsClient;
pub use sts::StsClient;

use crate::domain::ProviderError;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_rds::config::http::HttpResponse;
use aws_sdk_rds::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

/// Loads the shared SDK configuration for `region`
///
/// Credentials come from the default provider chain (the Lambda execution
/// role when deployed).
pub async fn load_sdk_config(region: &str) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await
}

/// Maps an SDK error onto a [`ProviderError`]
///
/// An error that carries a raw response with a non-success status is a
/// transport failure; everything else (dispatch, timeouts, construction
/// failures) is a service failure.
///
/// The message keeps only the service error code and message. The full
/// error chain, raw response included, goes to the debug log.
pub(crate) fn classify<E>(operation: &str, err: SdkError<E, HttpResponse>) -> ProviderError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    tracing::debug!(
        operation = operation,
        error = %DisplayErrorContext(&err),
        "AWS call failed"
    );

    let status = err.raw_response().map(|response| response.status());
    let message = summarize(&err);

    match status {
        Some(status) if !status.is_success() => ProviderError::Transport {
            operation: operation.to_string(),
            status: status.as_u16(),
            message,
        },
        _ => ProviderError::Service {
            operation: operation.to_string(),
            message,
        },
    }
}

/// `<code>: <message>` of a modeled service error, else the SDK error kind
fn summarize<E>(err: &SdkError<E, HttpResponse>) -> String
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    let service = err.as_service_error();
    match (
        service.and_then(|e| e.code()),
        service.and_then(|e| e.message()),
    ) {
        (Some(code), Some(message)) => format!("{code}: {message}"),
        (Some(code), None) => code.to_string(),
        (None, Some(message)) => message.to_string(),
        (None, None) => err.to_string(),
    }
}

pub(crate) fn missing_field(operation: &str, field: &str) -> ProviderError {
    ProviderError::MissingField {
        operation: operation.to_string(),
        field: field.to_string(),
    }
}
