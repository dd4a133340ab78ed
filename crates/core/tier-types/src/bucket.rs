//! Per-bucket statistics.

use serde::{Deserialize, Serialize};

use crate::ObjectRecord;

/// Aggregated object statistics for one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketStats {
    /// Bucket name
    pub name: String,

    /// Region the bucket lives in
    pub region: String,

    /// Number of objects in the bucket
    pub total_object_count: u64,

    /// Sum of all object sizes in bytes
    pub total_object_size: u64,

    /// Number of `STANDARD` objects larger than 128 KiB
    pub over_threshold_count: u64,

    /// Sum of sizes of `STANDARD` objects larger than 128 KiB
    pub over_threshold_size: u64,
}

impl BucketStats {
    /// Create empty statistics for a bucket.
    pub fn new(name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            ..Default::default()
        }
    }

    /// Account for one listed object.
    pub fn record(&mut self, object: &ObjectRecord) {
        self.total_object_count += 1;
        self.total_object_size += object.size;

        if object.is_tiering_candidate() {
            self.over_threshold_count += 1;
            self.over_threshold_size += object.size;
        }
    }
}
