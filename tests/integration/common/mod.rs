//! Common utilities for integration tests.
//!
//! Shared LocalStack client setup and bucket seeding.

pub mod localstack;

pub use localstack::{FixedPriceCatalog, LocalStackTestContext};
