//! AWS STS client, used to find the account that owns the export bucket

use super::{classify, missing_field};
use crate::adapters::traits::{CallerIdentity, ProviderResult};
use crate::domain::AccountId;
use async_trait::async_trait;
use aws_config::SdkConfig;

const GET_CALLER_IDENTITY: &str = "GetCallerIdentity";

#[derive(Debug, Clone)]
pub struct StsClient {
    client: aws_sdk_sts::Client,
}

impl StsClient {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_sts::Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl CallerIdentity for StsClient {
    async fn account_id(&self) -> ProviderResult<AccountId> {
        let output = self
            .client
            .get_caller_identity()
            .send()
            .await
            .map_err(|err| classify(GET_CALLER_IDENTITY, err))?;

        output
            .account()
            .and_then(|account| AccountId::new(account).ok())
            .ok_or_else(|| missing_field(GET_CALLER_IDENTITY, "Account"))
    }
}
