//! Main Estimator implementation.

use std::path::PathBuf;

use chrono::Local;
use tier_error::{Result, TierError};
use tier_types::SavingEffect;
use tracing::{debug, info};

use crate::aggregate::aggregate_bucket;
use crate::config::{EstimatorConfig, WriteMode};
use crate::identity::AccountIdentity;
use crate::pricing::{PriceCatalog, resolve_price_set};
use crate::report::{IncrementalReport, report_file_name, write_report_file};
use crate::s3::ObjectStorage;
use crate::savings::saving_effect;
use crate::stats::EstimationStats;

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct EstimationOutcome {
    /// Run statistics
    pub stats: EstimationStats,

    /// One entry per bucket, in processing order
    pub effects: Vec<SavingEffect>,

    /// Where the report was written
    pub report_path: PathBuf,
}

/// The estimator that coordinates listing, pricing, estimation and reporting.
///
/// Generic over the three external services so the same pipeline runs
/// against AWS or against in-memory fakes.
pub struct Estimator<S: ObjectStorage, P: PriceCatalog, I: AccountIdentity> {
    storage: S,
    pricing: P,
    identity: I,
    config: EstimatorConfig,
}

impl<S: ObjectStorage, P: PriceCatalog, I: AccountIdentity> Estimator<S, P, I> {
    /// Create a new Estimator.
    ///
    /// # Arguments
    ///
    /// * `storage` - Bucket and object listing
    /// * `pricing` - Pricing catalog
    /// * `identity` - Caller account lookup
    /// * `config` - The run configuration
    pub fn new(storage: S, pricing: P, identity: I, config: EstimatorConfig) -> Self {
        Self {
            storage,
            pricing,
            identity,
            config,
        }
    }

    /// The buckets this run covers, in processing order.
    ///
    /// Configured buckets are used as given; otherwise every bucket the
    /// caller can list.
    pub async fn bucket_names(&self) -> Result<Vec<String>> {
        if !self.config.buckets.is_empty() {
            return Ok(self.config.buckets.clone());
        }
        self.storage.list_buckets().await
    }

    /// Aggregate, price and estimate a single bucket.
    pub async fn estimate_bucket(&self, bucket: &str) -> Result<SavingEffect> {
        let stats =
            aggregate_bucket(&self.storage, bucket, self.config.progress_interval_pages).await?;
        let prices = resolve_price_set(&self.pricing, &stats.region).await?;

        debug!(
            bucket,
            region = %stats.region,
            frequent_access = prices.frequent_access_per_gb_month,
            archive_instant_access = prices.archive_instant_access_per_gb_month,
            monitoring = prices.monitoring_per_1000_objects_month,
            "Resolved prices"
        );

        Ok(saving_effect(stats, prices))
    }

    /// Run the estimation over every bucket and write the report.
    ///
    /// Buckets are processed one at a time in order. The first error aborts
    /// the run; in [`WriteMode::AtEnd`] no report is written in that case.
    /// A missing output directory is reported before any listing starts.
    pub async fn run(&self) -> Result<EstimationOutcome> {
        if !self.config.output_dir.is_dir() {
            return Err(TierError::Config(format!(
                "output directory {} does not exist",
                self.config.output_dir.display()
            )));
        }

        let mut stats = EstimationStats::new();

        let buckets = self.bucket_names().await?;
        info!(count = buckets.len(), buckets = ?buckets, "Buckets to estimate");

        let account_id = self.identity.account_id().await?;
        debug!(account_id = %account_id, "Resolved caller account");

        let mut incremental = match self.config.write_mode {
            WriteMode::PerBucket => Some(IncrementalReport::create(
                self.next_report_path(),
                account_id.as_str(),
            )?),
            WriteMode::AtEnd => None,
        };

        let mut effects = Vec::with_capacity(buckets.len());
        for bucket in &buckets {
            info!(bucket = %bucket, "Estimating bucket");
            let effect = self.estimate_bucket(bucket).await?;

            info!(
                bucket = %bucket,
                region = %effect.stats.region,
                objects = effect.stats.total_object_count,
                bytes = effect.stats.total_object_size,
                eligible_objects = effect.stats.over_threshold_count,
                eligible_bytes = effect.stats.over_threshold_size,
                yearly_cost_saving_usd = effect.yearly_cost_saving_usd,
                "Estimated bucket"
            );

            stats.record(&effect);
            if let Some(report) = incremental.as_mut() {
                report.append(&effect)?;
            }
            effects.push(effect);
        }

        let report_path = match incremental {
            Some(report) => report.path().to_path_buf(),
            None => {
                let path = self.next_report_path();
                write_report_file(&path, &account_id, &effects)?;
                path
            }
        };

        stats.complete();

        info!(
            buckets = stats.buckets_processed,
            report = %report_path.display(),
            total_yearly_saving_usd = stats.total_yearly_saving_usd,
            "Estimation completed"
        );

        Ok(EstimationOutcome {
            stats,
            effects,
            report_path,
        })
    }

    fn next_report_path(&self) -> PathBuf {
        self.config
            .output_dir
            .join(report_file_name(&Local::now()))
    }
}
