//! Object records as returned by the storage listing.

use serde::{Deserialize, Serialize};

/// Objects strictly larger than this (in bytes) are eligible for
/// Intelligent-Tiering auto-tiering; smaller objects always stay in
/// the frequent access tier and are not monitored.
pub const TIERING_THRESHOLD_BYTES: u64 = 128 * 1024;

/// Storage class of a listed object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageClass {
    /// The default `STANDARD` class.
    #[default]
    Standard,

    /// Any other class, carried by name (e.g. `GLACIER`, `INTELLIGENT_TIERING`).
    Other(String),
}

impl StorageClass {
    /// Parse a storage class name as reported by the listing API.
    pub fn from_name(name: &str) -> Self {
        if name == "STANDARD" {
            StorageClass::Standard
        } else {
            StorageClass::Other(name.to_string())
        }
    }
}

/// A single object from a bucket listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRecord {
    /// Storage class of the object
    pub storage_class: StorageClass,

    /// Size of the object in bytes
    pub size: u64,
}

impl ObjectRecord {
    /// Create a new object record.
    pub fn new(storage_class: StorageClass, size: u64) -> Self {
        Self {
            storage_class,
            size,
        }
    }

    /// Whether the object would move between access tiers under
    /// Intelligent-Tiering: `STANDARD` and larger than the threshold.
    pub fn is_tiering_candidate(&self) -> bool {
        self.storage_class == StorageClass::Standard && self.size > TIERING_THRESHOLD_BYTES
    }
}
