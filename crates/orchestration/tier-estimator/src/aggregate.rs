//! Per-bucket object aggregation.

use futures::{StreamExt, pin_mut};
use tier_error::Result;
use tier_types::BucketStats;
use tracing::{debug, info};

use crate::s3::{ObjectStorage, list_object_pages};

/// Resolve a bucket's region and aggregate statistics over all its objects.
///
/// Lists every page of the bucket; an info line is logged each time
/// `progress_interval` pages have been read (0 disables it).
pub async fn aggregate_bucket<S>(
    storage: &S,
    bucket: &str,
    progress_interval: usize,
) -> Result<BucketStats>
where
    S: ObjectStorage + ?Sized,
{
    let region = storage.bucket_region(bucket).await?;
    let mut stats = BucketStats::new(bucket, region.as_str());

    let pages = list_object_pages(storage, bucket, &region);
    pin_mut!(pages);

    let mut page_count = 0usize;
    while let Some(page) = pages.next().await {
        let page = page?;
        page_count += 1;

        for object in &page.objects {
            stats.record(object);
        }

        if progress_interval > 0 && page_count % progress_interval == 0 {
            info!(
                bucket,
                pages = page_count,
                objects = stats.total_object_count,
                "Still listing bucket"
            );
        }
    }

    debug!(
        bucket,
        region = %stats.region,
        pages = page_count,
        objects = stats.total_object_count,
        bytes = stats.total_object_size,
        over_threshold = stats.over_threshold_count,
        "Aggregated bucket"
    );

    Ok(stats)
}
