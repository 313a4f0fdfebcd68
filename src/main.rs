//! Command-line driver: evolve a pattern file and write every generation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use life_window::application::{run, DriverConfig};
use life_window::domain::LifeLikeRule;
use tracing_subscriber::EnvFilter;

/// Evolve a pattern and write generations 0..=GENERATIONS to numbered files.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Pattern to start from (`.txt` native or `.rle`)
    input: PathBuf,
    /// Number of generations to compute
    generations: u64,
    /// Output template; `out.txt` produces `out.0.txt`, `out.1.txt`, ...
    output: PathBuf,
    /// Compute each generation on the rayon thread pool
    #[arg(long)]
    parallel: bool,
    /// Rule in B/S notation, overriding any rule in an RLE header
    #[arg(long, value_name = "RULESTRING")]
    rule: Option<LifeLikeRule>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = CliArgs::parse();
    let config = DriverConfig {
        input: args.input,
        generations: args.generations,
        output: args.output,
        parallel: args.parallel,
        rule: args.rule,
    };

    let written = run(&config).with_context(|| {
        format!(
            "failed to evolve {} into {}",
            config.input.display(),
            config.output.display()
        )
    })?;
    tracing::info!(files = written.len(), "done");
    Ok(())
}
