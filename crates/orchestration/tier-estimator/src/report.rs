//! CSV report output.
//!
//! One header line, then one row per bucket in processing order. Bucket
//! names and region codes cannot contain commas or quotes, so fields are
//! written without quoting.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use tier_error::{ReportError, Result};
use tier_types::SavingEffect;

/// Header line of every report.
pub const CSV_HEADER: &str = "account_id,bucket,region,intelligent_tiering_frequent_access_usd,intelligent_tiering_archive_instant_access_usd,intelligent_tiering_monitoring_usd,total_object_count,total_object_size,total_object_over_128_kbytes_count,total_object_over_128_kbytes_size,yearly_cost_saving_usd";

const FILE_PREFIX: &str = "s3_intelligent_tiering_cost_saving_estimation";

/// Report file name for a run started at `now`, with second resolution.
pub fn report_file_name<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{FILE_PREFIX}_{}.csv", now.format("%Y-%m-%d-%H:%M:%S"))
}

/// Format a USD amount. Whole amounts keep one decimal (`6.0`, not `6`).
pub fn format_usd(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Format one data row (without line terminator).
pub fn format_row(account_id: &str, effect: &SavingEffect) -> String {
    let stats = &effect.stats;
    let prices = &effect.prices;

    [
        account_id.to_string(),
        stats.name.clone(),
        stats.region.clone(),
        format_usd(prices.frequent_access_per_gb_month),
        format_usd(prices.archive_instant_access_per_gb_month),
        format_usd(prices.monitoring_per_1000_objects_month),
        stats.total_object_count.to_string(),
        stats.total_object_size.to_string(),
        stats.over_threshold_count.to_string(),
        stats.over_threshold_size.to_string(),
        format_usd(effect.yearly_cost_saving_usd),
    ]
    .join(",")
}

/// Write a complete report (header and every row) to `writer`.
pub fn write_report<W: Write>(
    mut writer: W,
    account_id: &str,
    effects: &[SavingEffect],
) -> Result<()> {
    writeln!(writer, "{CSV_HEADER}").map_err(ReportError::from)?;
    for effect in effects {
        writeln!(writer, "{}", format_row(account_id, effect)).map_err(ReportError::from)?;
    }
    writer.flush().map_err(ReportError::from)?;
    Ok(())
}

fn create_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| ReportError::Create {
        path: path.display().to_string(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

/// Write a complete report to a new file at `path`.
pub fn write_report_file(path: &Path, account_id: &str, effects: &[SavingEffect]) -> Result<()> {
    write_report(create_file(path)?, account_id, effects)
}

/// A report file written row by row.
///
/// The header is written on creation and every appended row is flushed,
/// so rows for completed buckets survive a later failure.
pub struct IncrementalReport {
    path: PathBuf,
    account_id: String,
    writer: BufWriter<File>,
}

impl IncrementalReport {
    /// Create the file and write the header.
    pub fn create(path: impl Into<PathBuf>, account_id: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let mut writer = create_file(&path)?;
        writeln!(writer, "{CSV_HEADER}").map_err(ReportError::from)?;
        writer.flush().map_err(ReportError::from)?;

        Ok(Self {
            path,
            account_id: account_id.into(),
            writer,
        })
    }

    /// Append and flush one row.
    pub fn append(&mut self, effect: &SavingEffect) -> Result<()> {
        writeln!(self.writer, "{}", format_row(&self.account_id, effect))
            .map_err(ReportError::from)?;
        self.writer.flush().map_err(ReportError::from)?;
        Ok(())
    }

    /// Path of the report file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
