//! Configuration types for the estimator.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// When report rows reach the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteMode {
    /// Write the whole report once every bucket has been estimated (default).
    /// A failure part-way leaves no file.
    #[default]
    AtEnd,

    /// Write the header up front and flush each row as its bucket completes.
    PerBucket,
}

/// Configuration for an estimation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Buckets to estimate; empty means every bucket in the account
    pub buckets: Vec<String>,

    /// Directory the report is written to
    pub output_dir: PathBuf,

    /// When rows are written
    pub write_mode: WriteMode,

    /// Log listing progress every this many pages (0 = never)
    pub progress_interval_pages: usize,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            buckets: Vec::new(),
            output_dir: PathBuf::from("."),
            write_mode: WriteMode::AtEnd,
            progress_interval_pages: 100,
        }
    }
}

impl EstimatorConfig {
    /// Create a new estimator configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the run to the given buckets.
    pub fn with_buckets<I, S>(mut self, buckets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.buckets = buckets.into_iter().map(Into::into).collect();
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Set the write mode.
    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    /// Set the progress log interval in pages.
    pub fn with_progress_interval_pages(mut self, pages: usize) -> Self {
        self.progress_interval_pages = pages;
        self
    }
}
