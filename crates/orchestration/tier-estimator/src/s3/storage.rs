//! Object storage abstraction and the S3 implementation.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use aws_config::{Region, SdkConfig};
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use tier_error::{Result, StorageError};
use tier_types::{ObjectRecord, StorageClass};
use tracing::debug;

/// Header S3 uses to report a bucket's region, also on redirect errors.
const BUCKET_REGION_HEADER: &str = "x-amz-bucket-region";

/// One page of an object listing.
#[derive(Debug, Clone, Default)]
pub struct ObjectPage {
    /// Objects on this page
    pub objects: Vec<ObjectRecord>,

    /// Token for the next page; `None` when this is the last page
    pub next_continuation_token: Option<String>,
}

/// Trait for the storage listing service.
///
/// Implementations:
/// - [`S3Storage`] (production)
/// - in-memory fakes in tests
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Lists the names of every bucket visible to the caller.
    async fn list_buckets(&self) -> Result<Vec<String>>;

    /// Looks up the region a bucket lives in.
    async fn bucket_region(&self, bucket: &str) -> Result<String>;

    /// Lists one page of objects.
    ///
    /// # Arguments
    ///
    /// * `bucket` - Bucket to list
    /// * `region` - Region of the bucket, as returned by [`bucket_region`](ObjectStorage::bucket_region)
    /// * `continuation_token` - Token from the previous page, `None` for the first page
    async fn list_objects_page(
        &self,
        bucket: &str,
        region: &str,
        continuation_token: Option<String>,
    ) -> Result<ObjectPage>;
}

/// S3-backed [`ObjectStorage`].
///
/// Keeps one client per bucket region, since listing a bucket through a
/// client for another region is answered with a redirect.
pub struct S3Storage {
    sdk_config: SdkConfig,
    endpoint: Option<String>,
    home: Client,
    regional: Mutex<HashMap<String, Client>>,
}

impl S3Storage {
    /// Create the storage client.
    ///
    /// A custom endpoint (LocalStack) switches on path-style addressing and
    /// makes every region share the home client.
    pub fn new(sdk_config: &SdkConfig, endpoint: Option<&str>) -> Self {
        let endpoint = endpoint.map(str::to_string);
        let home = build_client(sdk_config, endpoint.as_deref(), None);

        Self {
            sdk_config: sdk_config.clone(),
            endpoint,
            home,
            regional: Mutex::new(HashMap::new()),
        }
    }

    /// The client to use for a bucket in `region`.
    fn client_for(&self, region: &str) -> Client {
        if self.endpoint.is_some() {
            return self.home.clone();
        }

        let home_region = self.sdk_config.region().map(|r| r.as_ref());
        if home_region == Some(region) {
            return self.home.clone();
        }

        let mut regional = self
            .regional
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        regional
            .entry(region.to_string())
            .or_insert_with(|| {
                debug!(region, "Creating regional S3 client");
                build_client(&self.sdk_config, None, Some(region))
            })
            .clone()
    }
}

fn build_client(sdk_config: &SdkConfig, endpoint: Option<&str>, region: Option<&str>) -> Client {
    let mut builder = aws_sdk_s3::config::Builder::from(sdk_config);

    if let Some(region) = region {
        builder = builder.region(Region::new(region.to_string()));
    }

    if let Some(endpoint) = endpoint {
        builder = builder.endpoint_url(endpoint).force_path_style(true);
    }

    Client::from_conf(builder.build())
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn list_buckets(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut continuation_token: Option<String> = None;

        loop {
            let resp = self
                .home
                .list_buckets()
                .set_continuation_token(continuation_token.take())
                .send()
                .await
                .map_err(|e| StorageError::ListBuckets(DisplayErrorContext(&e).to_string()))?;

            names.extend(
                resp.buckets()
                    .iter()
                    .filter_map(|b| b.name().map(str::to_string)),
            );

            match resp.continuation_token() {
                Some(token) if !token.is_empty() => continuation_token = Some(token.to_string()),
                _ => break,
            }
        }

        Ok(names)
    }

    async fn bucket_region(&self, bucket: &str) -> Result<String> {
        let region = match self.home.head_bucket().bucket(bucket).send().await {
            Ok(resp) => resp.bucket_region().map(str::to_string),
            Err(err) => {
                // Buckets outside the home region answer with a 301 that still
                // names the region.
                let redirected = err
                    .raw_response()
                    .and_then(|raw| raw.headers().get(BUCKET_REGION_HEADER))
                    .map(str::to_string);

                if redirected.is_none() {
                    return Err(StorageError::BucketRegion {
                        bucket: bucket.to_string(),
                        message: DisplayErrorContext(&err).to_string(),
                    }
                    .into());
                }
                redirected
            }
        };

        region.ok_or_else(|| {
            StorageError::BucketRegion {
                bucket: bucket.to_string(),
                message: format!("response has no {BUCKET_REGION_HEADER}"),
            }
            .into()
        })
    }

    async fn list_objects_page(
        &self,
        bucket: &str,
        region: &str,
        continuation_token: Option<String>,
    ) -> Result<ObjectPage> {
        let resp = self
            .client_for(region)
            .list_objects_v2()
            .bucket(bucket)
            .set_continuation_token(continuation_token)
            .send()
            .await
            .map_err(|e| StorageError::ListObjects {
                bucket: bucket.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        let objects = resp
            .contents()
            .iter()
            .map(|obj| {
                let storage_class = obj
                    .storage_class()
                    .map(|class| StorageClass::from_name(class.as_str()))
                    .unwrap_or_default();
                ObjectRecord::new(storage_class, obj.size().unwrap_or(0).max(0) as u64)
            })
            .collect();

        let next_continuation_token = if resp.is_truncated() == Some(true) {
            resp.next_continuation_token()
                .filter(|token| !token.is_empty())
                .map(str::to_string)
        } else {
            None
        };

        Ok(ObjectPage {
            objects,
            next_continuation_token,
        })
    }
}
