//! Statistics for estimation runs.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tier_types::SavingEffect;

/// Statistics collected during an estimation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimationStats {
    /// When the run started
    pub started_at: Option<DateTime<Utc>>,

    /// When the run completed
    pub completed_at: Option<DateTime<Utc>>,

    /// Number of buckets estimated
    pub buckets_processed: usize,

    /// Objects listed across all buckets
    pub objects_scanned: u64,

    /// Bytes listed across all buckets
    pub bytes_scanned: u64,

    /// Objects eligible for tiering across all buckets
    pub eligible_objects: u64,

    /// Sum of every bucket's yearly saving, in USD
    pub total_yearly_saving_usd: f64,

    /// Buckets where tiering would cost more than it saves
    pub buckets_with_loss: usize,
}

impl EstimationStats {
    /// Create a new stats tracker with the current time as start time.
    pub fn new() -> Self {
        Self {
            started_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    /// Mark the run as complete with the current time.
    pub fn complete(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    /// Record one estimated bucket.
    pub fn record(&mut self, effect: &SavingEffect) {
        self.buckets_processed += 1;
        self.objects_scanned += effect.stats.total_object_count;
        self.bytes_scanned += effect.stats.total_object_size;
        self.eligible_objects += effect.stats.over_threshold_count;
        self.total_yearly_saving_usd += effect.yearly_cost_saving_usd;

        if effect.is_loss() {
            self.buckets_with_loss += 1;
        }
    }

    /// Get the duration of the run.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Listing throughput in objects per second.
    pub fn objects_per_second(&self) -> Option<f64> {
        self.duration().map(|d| {
            let secs = d.num_milliseconds() as f64 / 1000.0;
            if secs > 0.0 {
                self.objects_scanned as f64 / secs
            } else {
                0.0
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration as StdDuration;
    use tier_types::{BucketStats, PriceSet};

    fn effect(objects: u64, bytes: u64, saving: f64) -> SavingEffect {
        let mut stats = BucketStats::new("b", "us-east-1");
        stats.total_object_count = objects;
        stats.total_object_size = bytes;
        stats.over_threshold_count = objects / 2;
        SavingEffect::new(stats, PriceSet::default(), saving)
    }

    #[test]
    fn test_stats_new() {
        let stats = EstimationStats::new();
        assert!(stats.started_at.is_some());
        assert!(stats.completed_at.is_none());
        assert_eq!(stats.buckets_processed, 0);
    }

    #[test]
    fn test_stats_record() {
        let mut stats = EstimationStats::new();
        stats.record(&effect(10, 1000, 1.25));
        stats.record(&effect(4, 500, -0.5));

        assert_eq!(stats.buckets_processed, 2);
        assert_eq!(stats.objects_scanned, 14);
        assert_eq!(stats.bytes_scanned, 1500);
        assert_eq!(stats.eligible_objects, 7);
        assert_eq!(stats.buckets_with_loss, 1);
        assert!((stats.total_yearly_saving_usd - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_stats_duration() {
        let mut stats = EstimationStats::new();
        sleep(StdDuration::from_millis(10));
        stats.complete();

        let duration = stats.duration().unwrap();
        assert!(duration.num_milliseconds() >= 10);
        assert!(stats.objects_per_second().is_some());
    }

    #[test]
    fn test_stats_default() {
        let stats = EstimationStats::default();
        assert!(stats.started_at.is_none());
        assert!(stats.duration().is_none());
        assert!(stats.objects_per_second().is_none());
    }
}
