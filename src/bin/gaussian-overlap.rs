//! CLI for generating and analysing overlapping Gaussian populations.
//!
//! # Usage
//!
//! ```bash
//! # Reference scenario, 10,000 points, seed 42
//! cargo run --bin gaussian-overlap
//!
//! # Custom population, JSON report into ./out/
//! cargo run --bin gaussian-overlap -- 30000 --json --output-dir ./out/
//!
//! # Stricter overlap threshold
//! cargo run --bin gaussian-overlap -- --threshold 0.35
//! ```

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use gaussian_overlap::constants::{DEFAULT_POPULATION, DEFAULT_SEED, DEFAULT_THRESHOLD_FRACTION};
use gaussian_overlap::output::{format_report, write_group_summary_csv, write_json, write_points_csv};
use gaussian_overlap::{Error, OverlapAnalysis};

/// Overlapping Gaussian dataset generator
#[derive(Parser, Debug)]
#[command(name = "gaussian-overlap")]
#[command(about = "Generate three overlapping 2-D Gaussians and detect their overlap region")]
#[command(version)]
struct Args {
    /// Total population (rounded down to a multiple of 3)
    #[arg(default_value_t = DEFAULT_POPULATION)]
    population: usize,

    /// Seed for the point sampler
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Overlap threshold as a fraction of the reference point's minimum density
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD_FRACTION)]
    threshold: f64,

    /// Output directory for CSV/JSON files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Also write the full report as JSON
    #[arg(long)]
    json: bool,

    /// Skip writing CSV output files
    #[arg(long)]
    no_csv: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    if args.population == 0 {
        return Err(Error::invalid("population must be > 0"));
    }
    if args.threshold.is_nan() {
        return Err(Error::invalid("threshold must be a number"));
    }

    info!(
        population = args.population,
        seed = args.seed,
        threshold = args.threshold,
        "running overlap analysis"
    );

    let report = OverlapAnalysis::new()
        .population(args.population)
        .seed(args.seed)
        .threshold_fraction(args.threshold)
        .run()?;

    println!("{}", format_report(&report));

    if !args.no_csv || args.json {
        fs::create_dir_all(&args.output_dir)
            .map_err(|e| Error::io(format!("creating {}", args.output_dir.display()), e))?;
    }

    if !args.no_csv {
        let points = args.output_dir.join("overlap_points.csv");
        let summary = args.output_dir.join("group_summary.csv");
        write_points_csv(&report, &points)?;
        write_group_summary_csv(&report, &summary)?;
        info!(points = %points.display(), summary = %summary.display(), "wrote CSV files");
    }

    if args.json {
        let path = args.output_dir.join("overlap_report.json");
        write_json(&report, &path)?;
        info!(path = %path.display(), "wrote JSON report");
    }

    Ok(())
}
