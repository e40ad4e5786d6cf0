use clap::{ArgGroup, Parser, ValueEnum};
use dicrank::{
    fs::{load_grid_from_npy, load_triples_from_json},
    ranking::{RankedResult, ResultQueue},
};
use std::{error::Error, path::PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One tab-separated `rank coefficient row col` line per result
    Text,
    /// A JSON array of results in extraction order
    Json,
}

/// Reliability ranking of DIC correlation candidates
#[derive(Parser, Debug)]
#[command(name = "dicrank")]
#[command(about = "Ranks DIC correlation candidates, lowest coefficient first", long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["grid", "triples"])))]
struct Args {
    /// Path to a two-dimensional coefficient grid (numpy format, f64 or f32)
    #[arg(short, long)]
    grid: Option<PathBuf>,

    /// Path to a JSON array of {coefficient, row, col} objects
    #[arg(short, long)]
    triples: Option<PathBuf>,

    /// Stop after this many extractions
    #[arg(short, long)]
    limit: Option<usize>,

    /// Negate every coefficient before ranking, for inputs where higher means better
    #[arg(long)]
    negate: bool,

    /// Output format of the extraction order
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<(), Box<dyn Error>> {
    // stdout carries the ranking, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut results = match (&args.grid, &args.triples) {
        (Some(grid), _) => load_grid_from_npy(grid)?,
        (None, Some(triples)) => load_triples_from_json(triples)?,
        (None, None) => unreachable!("clap requires one input"),
    };
    tracing::info!(candidates = results.len(), "input loaded");

    if args.negate {
        for result in results.iter_mut() {
            result.coefficient = -result.coefficient;
        }
    }

    let mut queue = ResultQueue::with_capacity(results.len());
    queue.extend(results);

    let limit = args.limit.unwrap_or(usize::MAX);
    let ranked: Vec<RankedResult> = queue.drain_ranked().take(limit).collect();

    match args.format {
        OutputFormat::Text => {
            for (rank, result) in ranked.iter().enumerate() {
                println!(
                    "{rank}\t{}\t{}\t{}",
                    result.coefficient, result.row, result.col
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ranked)?),
    }

    queue.stats().log_summary();
    if !queue.is_empty() {
        tracing::info!(
            remaining = queue.len(),
            "limit reached before the queue ran empty"
        );
    }

    Ok(())
}
