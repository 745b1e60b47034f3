//! `match-gas` - print estimated gas for a normal and a small match.
//!
//! Reads the per-operation figures written by the contract gas tests
//! (`gas_analysis.json` by default) and prints one line per match size.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use match_gas_core_rs::{estimate, CostTable, GasReport, DEFAULT_COST_TABLE_PATH};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One `<label>: <total>` line per match size
    Text,
    /// Full report as pretty-printed JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "match-gas", about = "Estimate gas consumed by a battleship match")]
struct Args {
    /// Cost table written by the gas tests
    #[arg(default_value = DEFAULT_COST_TABLE_PATH)]
    input: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Tracing filter directive (logs go to stderr)
    #[arg(long, default_value = "warn")]
    log: String,
}

fn load_report(path: &Path) -> anyhow::Result<GasReport> {
    let costs = CostTable::load(path)
        .with_context(|| format!("failed to load cost table from {}", path.display()))?;
    let report = estimate(&costs).context("failed to estimate match gas")?;
    Ok(report)
}

fn write_report(out: &mut impl Write, report: &GasReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", report)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    let report = load_report(&args.input)?;
    info!(
        input = %args.input.display(),
        operations = report.operations.len(),
        "Estimated match gas"
    );
    write_report(out, &report, args.format)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)
}
