//! Caller account identity.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sts::Client;
use aws_sdk_sts::error::DisplayErrorContext;
use tier_error::{IdentityError, Result};

/// Trait for looking up the caller's account.
#[async_trait]
pub trait AccountIdentity: Send + Sync {
    /// Returns the caller's account id.
    async fn account_id(&self) -> Result<String>;
}

/// [`AccountIdentity`] backed by STS `GetCallerIdentity`.
pub struct StsIdentity {
    client: Client,
}

impl StsIdentity {
    /// Create the STS client, optionally against a custom endpoint.
    pub fn new(sdk_config: &SdkConfig, endpoint: Option<&str>) -> Self {
        let mut builder = aws_sdk_sts::config::Builder::from(sdk_config);

        if let Some(endpoint) = endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        Self {
            client: Client::from_conf(builder.build()),
        }
    }
}

#[async_trait]
impl AccountIdentity for StsIdentity {
    async fn account_id(&self) -> Result<String> {
        let resp = self
            .client
            .get_caller_identity()
            .send()
            .await
            .map_err(|e| IdentityError::Request(DisplayErrorContext(&e).to_string()))?;

        resp.account()
            .map(str::to_string)
            .ok_or_else(|| IdentityError::MissingAccount.into())
    }
}
