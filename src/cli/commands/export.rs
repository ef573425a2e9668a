//! Export command implementation
//!
//! Triggers a single snapshot export from the command line, with the same
//! handler the Lambda function uses.

use super::exit_code;
use crate::config::ExporterConfig;
use crate::core::export::ExportHandler;
use crate::domain::ExportRequest;
use crate::log_error_with_context;
use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// DB instance or DB cluster identifier
    #[arg(short, long)]
    pub identifier: String,

    /// Export the DB cluster snapshot instead of the DB instance snapshot
    #[arg(long)]
    pub cluster: bool,
}

impl ExportArgs {
    /// The invocation payload this command stands for
    pub fn request(&self) -> ExportRequest {
        ExportRequest::new(self.identifier.as_str()).cluster(self.cluster)
    }

    /// Execute the export command
    pub async fn execute(&self, config: ExporterConfig) -> anyhow::Result<i32> {
        tracing::info!(identifier = %self.identifier, cluster = self.cluster, "Starting export command");

        let handler = ExportHandler::from_config(&config).await;

        match handler.handle(self.request()).await {
            Ok(result) => {
                println!("{}", serde_json::to_string_pretty(&result)?);
                Ok(0)
            }
            Err(e) => {
                log_error_with_context!(&e, "Export failed");
                eprintln!("Error: {e}");
                Ok(exit_code(&e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_args() {
        let args = ExportArgs {
            identifier: "orders-db".to_string(),
            cluster: true,
        };
        let request = args.request();
        assert_eq!(request.identifier, "orders-db");
        assert_eq!(request.is_cluster, Some(true));
    }
}
