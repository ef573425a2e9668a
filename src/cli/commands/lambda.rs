//! Lambda command implementation
//!
//! Runs the Lambda runtime loop: every invocation event is deserialized into
//! an [`ExportRequest`] and answered with an [`ExportResult`].

use crate::config::ExporterConfig;
use crate::core::export::ExportHandler;
use crate::domain::{ExportRequest, ExportResult};
use crate::log_error_with_context;
use clap::Args;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use tracing::Instrument;

/// Arguments for the lambda command
#[derive(Args, Debug, Default)]
pub struct LambdaArgs {}

impl LambdaArgs {
    /// Serve invocations until the runtime shuts the process down
    pub async fn execute(&self, config: ExporterConfig) -> anyhow::Result<i32> {
        let handler = ExportHandler::from_config(&config).await;
        let handler = &handler;

        tracing::info!(region = %config.aws.region, "Serving Lambda invocations");

        lambda_runtime::run(service_fn(move |event: LambdaEvent<ExportRequest>| async move {
            handle_event(handler, event).await
        }))
        .await
        .map_err(|e| anyhow::anyhow!("Lambda runtime failed: {e}"))?;

        Ok(0)
    }
}

/// Handle one Lambda event
///
/// Errors are logged and handed back to the runtime, which reports them as
/// a failed invocation.
pub async fn handle_event(
    handler: &ExportHandler,
    event: LambdaEvent<ExportRequest>,
) -> Result<ExportResult, Error> {
    let span = tracing::info_span!("invocation", request_id = %event.context.request_id);
    let request = event.payload;

    async move {
        match handler.handle(request).await {
            Ok(result) => Ok(result),
            Err(e) => {
                log_error_with_context!(&e, "Export invocation failed");
                Err(e.into())
            }
        }
    }
    .instrument(span)
    .await
}
