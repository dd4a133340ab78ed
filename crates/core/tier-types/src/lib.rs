//! Core types for the Intelligent-Tiering savings estimator.
//!
//! This crate provides the data model shared by every stage:
//! - [`ObjectRecord`] - A listed object (storage class and size)
//! - [`BucketStats`] - Per-bucket aggregate statistics
//! - [`PriceSet`] - Resolved Intelligent-Tiering unit prices for a region
//! - [`SavingEffect`] - Statistics plus prices plus the yearly saving estimate

pub mod bucket;
pub mod object;
pub mod pricing;
pub mod saving;

pub use bucket::*;
pub use object::*;
pub use pricing::*;
pub use saving::*;
