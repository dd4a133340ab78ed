//! tier-estimator - S3 Intelligent-Tiering cost saving estimation.
//!
//! This crate lists every object in a set of S3 buckets, classifies them by
//! storage class and size, looks up current Intelligent-Tiering prices and
//! estimates the yearly saving of enabling Intelligent-Tiering per bucket.
//! It supports:
//!
//! - Paginated bucket and object listing across regions, with LocalStack support
//! - Price list queries with a recursive `pricePerUnit` extraction
//! - A CSV report written at the end of the run or row by row
//!
//! # Example
//!
//! ```ignore
//! use tier_estimator::{AwsConfig, AwsServices, Estimator, EstimatorConfig};
//!
//! let services = AwsServices::load(&AwsConfig::new().with_region("us-east-1")).await;
//!
//! let estimator = Estimator::new(
//!     services.storage,
//!     services.pricing,
//!     services.identity,
//!     EstimatorConfig::new().with_output_dir("reports"),
//! );
//!
//! let outcome = estimator.run().await?;
//! eprintln!("Report written to {}", outcome.report_path.display());
//! ```

pub mod aggregate;
pub mod aws;
pub mod config;
pub mod estimator;
pub mod identity;
pub mod pricing;
pub mod report;
pub mod s3;
pub mod savings;
pub mod stats;

pub use aggregate::aggregate_bucket;
pub use aws::{AwsConfig, AwsServices, load_sdk_config};
pub use config::{EstimatorConfig, WriteMode};
pub use estimator::{EstimationOutcome, Estimator};
pub use identity::{AccountIdentity, StsIdentity};
pub use pricing::{AwsPriceCatalog, PriceCatalog, ProductPage, get_price_per_unit, resolve_price_set};
pub use report::{CSV_HEADER, IncrementalReport, report_file_name, write_report};
pub use s3::{ObjectPage, ObjectStorage, S3Storage, list_object_pages};
pub use savings::{saving_effect, yearly_cost_saving};
pub use stats::EstimationStats;
