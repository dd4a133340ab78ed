//! Intelligent-Tiering price resolution.
//!
//! This module provides:
//! - The [`PriceCatalog`] trait and its AWS Price List implementation
//! - A recursive `pricePerUnit` walk over price list documents
//! - The three Intelligent-Tiering price lookups for a region

mod catalog;
pub mod document;
mod resolve;

pub use catalog::{AwsPriceCatalog, PriceCatalog, ProductPage};
pub use document::{collect_values, max_price_per_unit};
pub use resolve::{
    S3_SERVICE_CODE, archive_instant_access_filters, frequent_access_filters, get_price_per_unit,
    monitoring_filters, resolve_price_set,
};
