//! Yearly saving estimate.
//!
//! Only `STANDARD` objects above 128 KiB take part: they are the ones that
//! would be monitored and could move to a cheaper tier. The estimate assumes
//! every one of them ends up in the archive instant access tier.

use tier_types::{BucketStats, PriceSet, SavingEffect};

const BYTES_PER_GB: f64 = (1u64 << 30) as f64;
const MONTHS_PER_YEAR: f64 = 12.0;

/// Yearly monitoring and automation fee for the eligible objects, in USD.
pub fn yearly_monitoring_fee(stats: &BucketStats, prices: &PriceSet) -> f64 {
    stats.over_threshold_count as f64 / 1000.0
        * prices.monitoring_per_1000_objects_month
        * MONTHS_PER_YEAR
}

/// Yearly storage saving from moving eligible bytes out of frequent access, in USD.
pub fn yearly_storage_saving(stats: &BucketStats, prices: &PriceSet) -> f64 {
    stats.over_threshold_size as f64 / BYTES_PER_GB
        * (prices.frequent_access_per_gb_month - prices.archive_instant_access_per_gb_month)
        * MONTHS_PER_YEAR
}

/// Net yearly saving, rounded to cents. Negative when monitoring costs more
/// than tiering saves.
pub fn yearly_cost_saving(stats: &BucketStats, prices: &PriceSet) -> f64 {
    round_cents(yearly_storage_saving(stats, prices) - yearly_monitoring_fee(stats, prices))
}

/// Combine statistics and prices into a report row.
pub fn saving_effect(stats: BucketStats, prices: PriceSet) -> SavingEffect {
    let saving = yearly_cost_saving(&stats, &prices);
    SavingEffect::new(stats, prices, saving)
}

/// Rounds on the exact decimal value of `value`, ties to the even cent.
fn round_cents(value: f64) -> f64 {
    let rounded = format!("{value:.2}").parse().unwrap_or(value);
    // Avoid "-0" in the report.
    if rounded == 0.0 { 0.0 } else { rounded }
}
