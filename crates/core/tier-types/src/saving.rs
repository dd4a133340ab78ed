//! Saving effect: one report row.

use serde::{Deserialize, Serialize};

use crate::{BucketStats, PriceSet};

/// Bucket statistics enriched with the prices used and the estimated saving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingEffect {
    /// Statistics the estimate was computed from
    pub stats: BucketStats,

    /// Prices resolved for the bucket's region
    pub prices: PriceSet,

    /// Net yearly saving in USD, rounded to cents. May be negative.
    pub yearly_cost_saving_usd: f64,
}

impl SavingEffect {
    /// Create a saving effect.
    pub fn new(stats: BucketStats, prices: PriceSet, yearly_cost_saving_usd: f64) -> Self {
        Self {
            stats,
            prices,
            yearly_cost_saving_usd,
        }
    }

    /// Whether enabling Intelligent-Tiering would cost more than it saves.
    pub fn is_loss(&self) -> bool {
        self.yearly_cost_saving_usd < 0.0
    }
}
