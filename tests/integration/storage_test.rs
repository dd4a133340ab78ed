//! S3 storage and aggregation tests using LocalStack.

use crate::common::LocalStackTestContext;
use aws_sdk_s3::types::StorageClass;
use futures::TryStreamExt;
use tier_estimator::{ObjectStorage, aggregate_bucket, list_object_pages};

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_list_buckets_includes_created_bucket() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    ctx.create_bucket("tier-list-buckets").await.unwrap();

    let buckets = ctx.storage().list_buckets().await.unwrap();
    assert!(buckets.iter().any(|b| b == "tier-list-buckets"));
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_bucket_region() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    ctx.create_bucket("tier-bucket-region").await.unwrap();

    let region = ctx.storage().bucket_region("tier-bucket-region").await.unwrap();
    assert_eq!(region, ctx.region);
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_missing_bucket_is_an_error() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let result = ctx.storage().bucket_region("tier-no-such-bucket").await;
    assert!(result.is_err());
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_aggregate_classifies_objects() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "tier-aggregate-classify";
    ctx.create_bucket(bucket).await.unwrap();

    for i in 0..3 {
        ctx.put_sized_object(bucket, &format!("big/{i}"), 200_000, StorageClass::Standard)
            .await
            .unwrap();
    }
    ctx.put_sized_object(bucket, "small", 1_000, StorageClass::Standard)
        .await
        .unwrap();
    ctx.put_sized_object(bucket, "boundary", 131_072, StorageClass::Standard)
        .await
        .unwrap();
    ctx.put_sized_object(bucket, "infrequent", 300_000, StorageClass::StandardIa)
        .await
        .unwrap();

    let stats = aggregate_bucket(&ctx.storage(), bucket, 0).await.unwrap();

    assert_eq!(stats.name, bucket);
    assert_eq!(stats.region, ctx.region);
    assert_eq!(stats.total_object_count, 6);
    assert_eq!(stats.total_object_size, 3 * 200_000 + 1_000 + 131_072 + 300_000);
    assert_eq!(stats.over_threshold_count, 3);
    assert_eq!(stats.over_threshold_size, 600_000);
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_listing_follows_continuation_tokens() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "tier-aggregate-paging";
    ctx.create_bucket(bucket).await.unwrap();

    // One more than a full listing page
    for i in 0..1001 {
        ctx.put_sized_object(bucket, &format!("obj-{i:05}"), 1, StorageClass::Standard)
            .await
            .unwrap();
    }

    let storage = ctx.storage();
    let region = storage.bucket_region(bucket).await.unwrap();
    let pages: Vec<_> = list_object_pages(&storage, bucket, &region)
        .try_collect()
        .await
        .unwrap();

    assert!(pages.len() >= 2);
    let listed: usize = pages.iter().map(|p| p.objects.len()).sum();
    assert_eq!(listed, 1001);

    let stats = aggregate_bucket(&storage, bucket, 1).await.unwrap();
    assert_eq!(stats.total_object_count, 1001);
    assert_eq!(stats.total_object_size, 1001);
    assert_eq!(stats.over_threshold_count, 0);
}
