//! Error types for the Intelligent-Tiering savings estimator.
//!
//! This crate provides:
//! - [`TierError`] - Top-level error enum for every stage of an estimation run
//! - Domain-specific errors ([`StorageError`], [`PricingError`], [`IdentityError`], [`ReportError`])
//! - [`Stage`] for attaching the failing pipeline stage to log output
//!
//! Every error is fatal for the run; nothing is retried.

use thiserror::Error;

/// Top-level error type for an estimation run.
#[derive(Error, Debug)]
pub enum TierError {
    /// Storage listing errors (buckets, objects, region lookup)
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Pricing catalog errors (request, cardinality, document shape)
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Identity lookup errors
    #[error("Identity error: {0}")]
    Identity(#[from] IdentityError),

    /// Report writing errors
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TierError {
    /// The pipeline stage this error belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            TierError::Storage(StorageError::ListBuckets(_)) => Stage::BucketEnumeration,
            TierError::Storage(_) => Stage::ObjectAggregation,
            TierError::Pricing(_) => Stage::PriceResolution,
            TierError::Identity(_) => Stage::IdentityLookup,
            TierError::Report(_) => Stage::ReportWriting,
            TierError::Config(_) => Stage::Setup,
        }
    }
}

/// Storage listing errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to enumerate buckets
    #[error("List buckets failed: {0}")]
    ListBuckets(String),

    /// Failed to list a page of objects
    #[error("List objects failed for bucket {bucket}: {message}")]
    ListObjects { bucket: String, message: String },

    /// Failed to determine a bucket's region
    #[error("Region lookup failed for bucket {bucket}: {message}")]
    BucketRegion { bucket: String, message: String },
}

/// Pricing catalog errors.
#[derive(Error, Debug)]
pub enum PricingError {
    /// The catalog request itself failed
    #[error("Price catalog request failed: {0}")]
    Request(String),

    /// The filters did not match exactly one priced product
    #[error("Expected exactly one priced product for [{filters}], found {found}")]
    Cardinality { filters: String, found: usize },

    /// The product document did not have the expected shape
    #[error("Malformed price document: {0}")]
    MalformedDocument(String),
}

/// Identity lookup errors.
#[derive(Error, Debug)]
pub enum IdentityError {
    /// The identity request failed
    #[error("Caller identity request failed: {0}")]
    Request(String),

    /// The response did not carry an account id
    #[error("Caller identity response has no account id")]
    MissingAccount,
}

/// Report writing errors.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Creating the report file failed
    #[error("Failed to create {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the report failed
    #[error("Write failed: {0}")]
    Write(#[from] std::io::Error),
}

/// Pipeline stage, for error context in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Client construction and argument handling
    Setup,

    /// Listing the account's buckets
    BucketEnumeration,

    /// Listing and classifying a bucket's objects
    ObjectAggregation,

    /// Querying the pricing catalog
    PriceResolution,

    /// Looking up the caller's account id
    IdentityLookup,

    /// Writing the CSV report
    ReportWriting,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Setup => write!(f, "Setup"),
            Self::BucketEnumeration => write!(f, "BucketEnumeration"),
            Self::ObjectAggregation => write!(f, "ObjectAggregation"),
            Self::PriceResolution => write!(f, "PriceResolution"),
            Self::IdentityLookup => write!(f, "IdentityLookup"),
            Self::ReportWriting => write!(f, "ReportWriting"),
        }
    }
}

/// Result type alias using TierError.
pub type Result<T> = std::result::Result<T, TierError>;
