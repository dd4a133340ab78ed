//! CLI argument definitions for tier-estimator.

use std::path::PathBuf;

use clap::Parser;
use tier_cli_common::LogLevel;

/// Estimate the yearly saving of moving S3 buckets to Intelligent-Tiering.
///
/// Lists every object of every bucket in the account (or only the buckets
/// given with --bucket), prices Intelligent-Tiering in each bucket's region
/// and writes one CSV row per bucket.
///
/// ## Examples
///
/// Every bucket in the account:
///   tier-estimator --profile billing -o reports/
///
/// Two buckets, flushing each row as soon as it is ready:
///   tier-estimator -b logs -b media --incremental
///
/// Against LocalStack:
///   tier-estimator --s3-endpoint http://localhost:4566 \
///       --sts-endpoint http://localhost:4566 -b test-bucket
#[derive(Parser, Debug)]
#[command(name = "tier-estimator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === AWS Configuration ===
    /// AWS region used for bucket listing and account lookup
    /// (default: the SDK's region chain, e.g. AWS_DEFAULT_REGION or the profile)
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Region of the price list endpoint
    #[arg(long, default_value = tier_estimator::aws::DEFAULT_PRICING_REGION)]
    pub pricing_region: String,

    /// AWS profile name
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// AWS access key ID
    #[arg(long, env = "AWS_ACCESS_KEY_ID")]
    pub access_key: Option<String>,

    /// AWS secret access key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY")]
    pub secret_key: Option<String>,

    /// Custom S3 endpoint URL (LocalStack, MinIO, VPC endpoint)
    #[arg(long, env = "TIER_S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,

    /// Custom STS endpoint URL for the account lookup
    #[arg(long, env = "TIER_STS_ENDPOINT")]
    pub sts_endpoint: Option<String>,

    // === Estimation Options ===
    /// Only estimate this bucket (can be specified multiple times)
    #[arg(short, long = "bucket")]
    pub buckets: Vec<String>,

    /// Directory the CSV report is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Write the CSV header up front and flush each row as its bucket completes
    #[arg(long)]
    pub incremental: bool,

    /// Log a progress line every this many listed pages (0 = never)
    #[arg(long, default_value = "100")]
    pub progress_interval: usize,

    // === Logging Options ===
    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
