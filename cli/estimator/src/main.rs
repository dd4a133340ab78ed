//! tier-estimator CLI
//!
//! S3 Intelligent-Tiering cost saving estimation.

use clap::Parser;
use tier_cli_common::{format_bytes, format_number, format_usd, init_logging};
use tier_error::TierError;
use tracing::error;

mod args;
mod run;

use args::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    init_logging(args.log_level)?;

    let outcome = match run::execute(args).await {
        Ok(outcome) => outcome,
        Err(e) => {
            if let Some(tier_error) = e.downcast_ref::<TierError>() {
                error!(stage = %tier_error.stage(), error = %tier_error, "Estimation failed");
            } else {
                error!(error = %e, "Estimation failed");
            }
            return Err(e);
        }
    };

    let stats = &outcome.stats;

    eprintln!();
    eprintln!("Estimation completed:");
    eprintln!("  Buckets processed:  {}", format_number(stats.buckets_processed as u64));
    eprintln!("  Objects scanned:    {}", format_number(stats.objects_scanned));
    eprintln!("  Bytes scanned:      {}", format_bytes(stats.bytes_scanned));
    eprintln!("  Eligible objects:   {}", format_number(stats.eligible_objects));
    eprintln!("  Yearly saving:      {}", format_usd(stats.total_yearly_saving_usd));
    eprintln!("  Buckets with loss:  {}", stats.buckets_with_loss);

    if let Some(duration) = stats.duration() {
        eprintln!(
            "  Duration:           {:.2}s",
            duration.num_milliseconds() as f64 / 1000.0
        );

        if let Some(ops) = stats.objects_per_second() {
            eprintln!("  Throughput:         {:.1} objects/sec", ops);
        }
    }

    println!("{}", outcome.report_path.display());

    Ok(())
}
