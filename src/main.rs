use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use square_sums::{Config, ProgressLog, count_permutations_with, write_progress_csv};

/// Count the orderings of 1..=N in which every pair of consecutive
/// elements sums to a perfect square.
#[derive(Parser, Debug)]
#[command(name = "square_sums", version, about)]
struct Args {
    /// Domain size: the permutations range over the integers 1..=N
    #[arg(value_name = "N")]
    n: u32,

    /// Directory for the progress transcript CSV
    /// (overrides SQUARE_SUMS_OUTPUT_DIR; omit both for no transcript)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if args.output_dir.is_some() {
        config.output_dir = args.output_dir;
    }

    info!("Searching square-sum permutations of 1..={}", args.n);
    match &config.output_dir {
        Some(dir) => info!("Transcript directory: {}", dir.display()),
        None => info!("Transcript: disabled"),
    }

    let mut progress = ProgressLog::new();
    let count = count_permutations_with(args.n, &mut progress)?;

    println!("n = {}", args.n);
    println!("permutations: {count}");

    if config.output_dir.is_some() {
        let path = write_progress_csv(progress.events(), config.output_dir.as_deref())?;
        info!("Progress transcript saved to: {}", path.display());
    }

    Ok(())
}
