//! LocalStack test context and utilities.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::types::StorageClass;
use tier_error::Result;
use tier_estimator::{PriceCatalog, ProductPage, S3Storage, StsIdentity};
use tier_types::PriceFilter;

/// LocalStack test context providing an S3 client for seeding buckets.
pub struct LocalStackTestContext {
    pub s3: S3Client,
    pub sdk_config: SdkConfig,
    pub endpoint: String,
    pub region: String,
}

impl LocalStackTestContext {
    /// Create a new LocalStack test context.
    ///
    /// Uses the `LOCALSTACK_ENDPOINT` environment variable if set,
    /// otherwise defaults to `http://localhost:4566`.
    pub async fn new() -> Self {
        let endpoint = std::env::var("LOCALSTACK_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:4566".to_string());
        let region = "us-east-1".to_string();

        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.clone()))
            .credentials_provider(aws_sdk_s3::config::Credentials::new(
                "test", "test", None, None, "localstack",
            ))
            .load()
            .await;

        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .endpoint_url(&endpoint)
            .force_path_style(true)
            .build();

        Self {
            s3: S3Client::from_conf(s3_config),
            sdk_config,
            endpoint,
            region,
        }
    }

    /// Check if LocalStack is available and healthy.
    pub async fn is_available(&self) -> bool {
        self.s3.list_buckets().send().await.is_ok()
    }

    /// Storage pointed at LocalStack.
    pub fn storage(&self) -> S3Storage {
        S3Storage::new(&self.sdk_config, Some(&self.endpoint))
    }

    /// Account lookup pointed at LocalStack.
    pub fn identity(&self) -> StsIdentity {
        StsIdentity::new(&self.sdk_config, Some(&self.endpoint))
    }

    /// Create an S3 bucket for testing, emptying it if it already exists.
    pub async fn create_bucket(&self, name: &str) -> std::result::Result<(), aws_sdk_s3::Error> {
        let buckets = self.s3.list_buckets().send().await?;
        let exists = buckets
            .buckets()
            .iter()
            .any(|b| b.name().unwrap_or_default() == name);

        if exists {
            self.empty_bucket(name).await?;
        } else {
            self.s3.create_bucket().bucket(name).send().await?;
        }
        Ok(())
    }

    /// Delete every object in a bucket.
    pub async fn empty_bucket(&self, name: &str) -> std::result::Result<(), aws_sdk_s3::Error> {
        let mut token = None;
        loop {
            let page = self
                .s3
                .list_objects_v2()
                .bucket(name)
                .set_continuation_token(token)
                .send()
                .await?;

            for object in page.contents() {
                if let Some(key) = object.key() {
                    self.s3.delete_object().bucket(name).key(key).send().await?;
                }
            }

            token = page.next_continuation_token().map(String::from);
            if token.is_none() {
                return Ok(());
            }
        }
    }

    /// Upload an object of `size` zero bytes with the given storage class.
    pub async fn put_sized_object(
        &self,
        bucket: &str,
        key: &str,
        size: usize,
        storage_class: StorageClass,
    ) -> std::result::Result<(), aws_sdk_s3::Error> {
        self.s3
            .put_object()
            .bucket(bucket)
            .key(key)
            .storage_class(storage_class)
            .body(vec![0u8; size].into())
            .send()
            .await?;
        Ok(())
    }
}

/// Price catalog answering every query with one fixed product.
///
/// LocalStack does not serve the price list API.
pub struct FixedPriceCatalog {
    pub price: f64,
}

#[async_trait]
impl PriceCatalog for FixedPriceCatalog {
    async fn get_products_page(
        &self,
        _service_code: &str,
        _filters: &[PriceFilter],
        _next_token: Option<String>,
    ) -> Result<ProductPage> {
        let product = format!(
            r#"{{"terms":{{"OnDemand":{{"A.B":{{"priceDimensions":{{"A.B.C":{{"pricePerUnit":{{"USD":"{}"}}}}}}}}}}}}}}"#,
            self.price
        );

        Ok(ProductPage {
            price_list: vec![product],
            next_token: None,
        })
    }
}
