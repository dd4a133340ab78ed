//! Logging initialization utilities.

use anyhow::{Result, anyhow};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use crate::LogLevel;

/// Initialize logging with the specified level.
///
/// Logs go to stderr so stdout only carries the report path. `RUST_LOG`,
/// when set, takes precedence over `level`; the AWS SDK crates are capped
/// at `warn` unless it names them.
pub fn init_logging(level: LogLevel) -> Result<()> {
    let level: Level = level.into();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},aws_config=warn,aws_smithy_runtime=warn,aws_sdk_s3=warn",
            level.as_str().to_lowercase()
        ))
    });

    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    Ok(())
}
