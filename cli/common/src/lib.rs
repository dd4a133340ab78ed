//! Shared utilities for the tier-estimator CLI.
//!
//! Logging setup, the log level argument, and human-readable formatting
//! of byte counts, object counts and dollar amounts.

pub mod args;
pub mod format;
pub mod logging;

pub use args::LogLevel;
pub use format::{format_bytes, format_number, format_usd};
pub use logging::init_logging;
