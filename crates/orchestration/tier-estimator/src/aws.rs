//! AWS configuration and service client construction.
//!
//! All clients are built once per run from a single [`AwsConfig`] and then
//! handed to the [`Estimator`](crate::Estimator) as trait implementations.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use serde::{Deserialize, Serialize};

use crate::identity::StsIdentity;
use crate::pricing::AwsPriceCatalog;
use crate::s3::S3Storage;

/// The Price List query API is only served from a few regions.
pub const DEFAULT_PRICING_REGION: &str = "us-east-1";

/// Configuration for AWS access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwsConfig {
    /// Home region for S3 and STS calls
    pub region: Option<String>,

    /// Region of the pricing endpoint
    pub pricing_region: String,

    /// Custom S3 endpoint URL (LocalStack, MinIO, VPC endpoint)
    pub endpoint: Option<String>,

    /// Custom STS endpoint URL
    pub sts_endpoint: Option<String>,

    /// Explicit AWS access key (optional)
    pub access_key: Option<String>,

    /// Explicit AWS secret key (optional)
    pub secret_key: Option<String>,

    /// AWS profile name (optional)
    pub profile: Option<String>,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: None,
            pricing_region: DEFAULT_PRICING_REGION.to_string(),
            endpoint: None,
            sts_endpoint: None,
            access_key: None,
            secret_key: None,
            profile: None,
        }
    }
}

impl AwsConfig {
    /// Create a new AwsConfig using ambient credentials and region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the home region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the pricing endpoint region.
    pub fn with_pricing_region(mut self, region: impl Into<String>) -> Self {
        self.pricing_region = region.into();
        self
    }

    /// Set a custom S3 endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set a custom STS endpoint.
    pub fn with_sts_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.sts_endpoint = Some(endpoint.into());
        self
    }

    /// Set explicit credentials.
    pub fn with_credentials(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.access_key = Some(access_key.into());
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Set the AWS profile.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }
}

/// Load the shared SDK configuration.
///
/// Custom endpoints are not applied here; each service client applies its
/// own, and the pricing catalog always uses the AWS endpoint.
/// Without an explicit region the SDK's region chain (environment, profile,
/// instance metadata) decides.
pub async fn load_sdk_config(config: &AwsConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }

    if let (Some(access_key), Some(secret_key)) = (&config.access_key, &config.secret_key) {
        let credentials = aws_sdk_s3::config::Credentials::new(
            access_key,
            secret_key,
            None,
            None,
            "tier-estimator",
        );
        loader = loader.credentials_provider(credentials);
    }

    if let Some(profile) = &config.profile {
        loader = loader.profile_name(profile);
    }

    loader.load().await
}

/// The AWS-backed service handles for one run.
pub struct AwsServices {
    /// Bucket and object listing
    pub storage: S3Storage,

    /// Price List query API
    pub pricing: AwsPriceCatalog,

    /// Caller identity
    pub identity: StsIdentity,
}

impl AwsServices {
    /// Build every service client from one configuration.
    pub async fn load(config: &AwsConfig) -> Self {
        let sdk_config = load_sdk_config(config).await;

        Self {
            storage: S3Storage::new(&sdk_config, config.endpoint.as_deref()),
            pricing: AwsPriceCatalog::new(&sdk_config, &config.pricing_region),
            identity: StsIdentity::new(&sdk_config, config.sts_endpoint.as_deref()),
        }
    }
}
