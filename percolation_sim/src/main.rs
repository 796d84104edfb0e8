//! Percolation threshold estimator CLI
//!
//! Reads the grid size N and trial count T (from the command line, or from
//! stdin when they are omitted), runs T trials and prints the statistics.

use anyhow::Context;
use clap::Parser;
use percolation_core::ThresholdSummary;
use percolation_env::{read_dimensions, OsContext};
use percolation_sim::{ExperimentExport, ExperimentRunner};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Monte Carlo estimator for the site-percolation threshold
#[derive(Parser, Debug)]
#[command(name = "percolation-sim")]
#[command(about = "Estimate the percolation threshold of an N-by-N grid", long_about = None)]
struct Args {
    /// Grid size N (N and T are read from stdin if either is omitted)
    #[arg(allow_negative_numbers = true)]
    grid_size: Option<i64>,

    /// Number of independent trials T
    #[arg(allow_negative_numbers = true)]
    trials: Option<i64>,

    /// Master seed for determinism (0 = random from time)
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Draw every trial from OS entropy instead of seeded generators
    #[arg(long)]
    os_rng: bool,

    /// Verbose output (per-trial logging)
    #[arg(short, long)]
    verbose: bool,

    /// JSON output for machine parsing
    #[arg(long)]
    json: bool,

    /// Export per-trial thresholds to a JSON file
    #[arg(long)]
    export: Option<String>,
}

fn main() {
    let args = Args::parse();

    // Initialize logging; stdout is reserved for results
    let level = if args.verbose {
        Level::DEBUG
    } else if args.json {
        Level::WARN
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    if let Err(e) = run(&args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let (grid_size, trials) = match (args.grid_size, args.trials) {
        (Some(n), Some(t)) => (n, t),
        _ => read_dimensions(std::io::stdin().lock())
            .context("reading grid size and trial count from stdin")?,
    };

    // Determine master seed
    let seed = if args.seed == 0 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1)
    } else {
        args.seed
    };

    info!("Percolation threshold estimator v0.1.0");
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let runner = ExperimentRunner::new(grid_size, trials)?.with_seed(seed);
    let result = if args.os_rng {
        runner.run_with(&mut OsContext::new())?
    } else {
        runner.run()?
    };

    // No partial statistics: fail before writing anything if undefined
    let summary = result.summary()?;

    if let Some(path) = &args.export {
        ExperimentExport::from_result(&result)
            .write_to_file(path)
            .with_context(|| format!("writing export to {}", path))?;
        info!("Exported {} trials to {}", result.outcomes.len(), path);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &ThresholdSummary) {
    println!("mean                    = {}", summary.mean);
    println!("stddev                  = {}", summary.stddev);
    println!(
        "95% confidence interval = {}, {}",
        summary.confidence_low, summary.confidence_high
    );
}
