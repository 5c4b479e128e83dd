use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use buildkit_core::input::BuildInput;
use buildkit_core::selection::{BuildSelector, SelectorConfig};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Pick the highest-scoring compatible, affordable PC build kit.
#[derive(Parser, Debug)]
#[command(name = "buildkit")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Read input from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Log filter for diagnostics on stderr (e.g. "debug")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let input = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input {}", path.display()))?;
            BuildInput::from_reader(BufReader::new(file))?
        }
        None => BuildInput::from_reader(io::stdin().lock())?,
    };

    let selector = BuildSelector::new(&SelectorConfig::v0());
    let result = selector.select_input(&input);

    println!("{result}");
    Ok(())
}
