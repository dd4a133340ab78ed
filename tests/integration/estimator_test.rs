//! End-to-end estimation tests using LocalStack.
//!
//! Listing and account lookup go to LocalStack; prices come from a fixed
//! catalog.

use crate::common::{FixedPriceCatalog, LocalStackTestContext};
use aws_sdk_s3::types::StorageClass;
use tier_estimator::{CSV_HEADER, Estimator, EstimatorConfig, WriteMode};

async fn seed(ctx: &LocalStackTestContext, bucket: &str) {
    ctx.create_bucket(bucket).await.unwrap();
    ctx.put_sized_object(bucket, "large", 500_000, StorageClass::Standard)
        .await
        .unwrap();
    ctx.put_sized_object(bucket, "tiny", 10, StorageClass::Standard)
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_estimate_writes_report() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    seed(&ctx, "tier-e2e-one").await;
    seed(&ctx, "tier-e2e-two").await;

    let dir = tempfile::tempdir().unwrap();
    let estimator = Estimator::new(
        ctx.storage(),
        FixedPriceCatalog { price: 0.0125 },
        ctx.identity(),
        EstimatorConfig::new()
            .with_buckets(["tier-e2e-one", "tier-e2e-two"])
            .with_output_dir(dir.path()),
    );

    let outcome = estimator.run().await.unwrap();

    assert_eq!(outcome.stats.buckets_processed, 2);
    assert_eq!(outcome.stats.objects_scanned, 4);
    assert_eq!(outcome.stats.eligible_objects, 2);

    let content = std::fs::read_to_string(&outcome.report_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], CSV_HEADER);
    assert!(lines[1].contains(",tier-e2e-one,us-east-1,"));
    assert!(lines[2].contains(",tier-e2e-two,us-east-1,"));

    // Equal tier prices leave only the monitoring fee
    for effect in &outcome.effects {
        assert!(effect.is_loss());
    }
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_incremental_report() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    seed(&ctx, "tier-e2e-incremental").await;

    let dir = tempfile::tempdir().unwrap();
    let estimator = Estimator::new(
        ctx.storage(),
        FixedPriceCatalog { price: 0.0125 },
        ctx.identity(),
        EstimatorConfig::new()
            .with_buckets(["tier-e2e-incremental"])
            .with_output_dir(dir.path())
            .with_write_mode(WriteMode::PerBucket),
    );

    let outcome = estimator.run().await.unwrap();

    let content = std::fs::read_to_string(&outcome.report_path).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(
        outcome
            .report_path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("s3_intelligent_tiering_cost_saving_estimation_"))
    );
}
