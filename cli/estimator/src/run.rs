//! Main execution logic for the tier-estimator CLI.

use anyhow::Result;
use tier_estimator::{
    AwsConfig, AwsServices, EstimationOutcome, Estimator, EstimatorConfig, WriteMode,
};
use tracing::info;

use crate::args::Cli;

/// Execute an estimation run with the provided arguments.
pub async fn execute(args: Cli) -> Result<EstimationOutcome> {
    let aws_config = build_aws_config(&args);
    let config = build_estimator_config(&args);

    info!(
        region = args.region.as_deref().unwrap_or("<sdk default>"),
        pricing_region = %aws_config.pricing_region,
        buckets = args.buckets.len(),
        output_dir = %config.output_dir.display(),
        "Starting estimation"
    );

    let services = AwsServices::load(&aws_config).await;
    let estimator = Estimator::new(
        services.storage,
        services.pricing,
        services.identity,
        config,
    );

    let outcome = estimator.run().await?;
    Ok(outcome)
}

fn build_aws_config(args: &Cli) -> AwsConfig {
    let mut config = AwsConfig::new().with_pricing_region(&args.pricing_region);

    if let Some(region) = &args.region {
        config = config.with_region(region);
    }

    if let Some(endpoint) = &args.s3_endpoint {
        config = config.with_endpoint(endpoint);
    }

    if let Some(endpoint) = &args.sts_endpoint {
        config = config.with_sts_endpoint(endpoint);
    }

    if let (Some(access_key), Some(secret_key)) = (&args.access_key, &args.secret_key) {
        config = config.with_credentials(access_key, secret_key);
    }

    if let Some(profile) = &args.profile {
        config = config.with_profile(profile);
    }

    config
}

fn build_estimator_config(args: &Cli) -> EstimatorConfig {
    let write_mode = if args.incremental {
        WriteMode::PerBucket
    } else {
        WriteMode::AtEnd
    };

    EstimatorConfig::new()
        .with_buckets(args.buckets.iter().cloned())
        .with_output_dir(&args.output_dir)
        .with_write_mode(write_mode)
        .with_progress_interval_pages(args.progress_interval)
}
