//! Command-line host for the MySQL to PostgreSQL record processor
//!
//! Reads change records as JSON lines, runs them through the processor in
//! batches and writes the processed records as JSON lines to stdout.
//!
//! # Usage
//!
//! ```bash
//! mysql-pg-migrator --config processor.yaml --input records.jsonl > out.jsonl
//!
//! # From stdin, with debug logging
//! RUST_LOG=debug mysql-pg-migrator --config processor.yaml < records.jsonl
//! ```
//!
//! A batch stops at its first failing record. The failure and the number of
//! skipped records are logged and the next batch starts from the record
//! after the skipped ones.

use anyhow::Context;
use clap::Parser;
use migrator_core::Record;
use mysql_pg_migrator::{Outcome, Processor, ProcessorConfig};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "mysql-pg-migrator")]
#[command(about = "Converts MySQL change records into a format PostgreSQL accepts")]
#[command(long_about = None)]
struct Cli {
    /// Processor configuration file (YAML or JSON)
    #[arg(long, env = "MIGRATOR_CONFIG", value_name = "PATH")]
    config: PathBuf,

    /// JSONL file with one record per line (default: stdin)
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Number of records handed to the processor at once
    #[arg(long, default_value = "100")]
    batch_size: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    anyhow::ensure!(cli.batch_size > 0, "--batch-size must be greater than zero");

    let raw = std::fs::read_to_string(&cli.config)
        .with_context(|| format!("Failed to read config from {:?}", cli.config))?;
    // YAML is a superset of JSON
    let config = ProcessorConfig::from_yaml(&raw)
        .with_context(|| format!("Failed to parse config from {:?}", cli.config))?;

    let descriptor = Processor::specification();
    info!("Starting {} {}", descriptor.name, descriptor.version);

    let processor = Processor::configure(&config)
        .context("Invalid processor configuration")?
        .open()
        .await
        .context("Failed to open processor")?;

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            std::fs::File::open(path).with_context(|| format!("Failed to open {path:?}"))?,
        )),
        None => Box::new(BufReader::new(std::io::stdin())),
    };
    let mut out = BufWriter::new(std::io::stdout().lock());

    let mut stats = Stats::default();
    let mut batch = Vec::with_capacity(cli.batch_size);
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }
        let record: Record = serde_json::from_str(&line)
            .with_context(|| format!("Failed to parse record on line {}", index + 1))?;
        batch.push(record);

        if batch.len() == cli.batch_size {
            run_batch(&processor, std::mem::take(&mut batch), &mut out, &mut stats)?;
        }
    }
    if !batch.is_empty() {
        run_batch(&processor, batch, &mut out, &mut stats)?;
    }
    out.flush().context("Failed to flush output")?;

    info!(
        "Done: {} processed, {} failed, {} skipped",
        stats.processed, stats.failed, stats.skipped
    );
    Ok(())
}

#[derive(Default)]
struct Stats {
    processed: usize,
    failed: usize,
    skipped: usize,
}

fn run_batch(
    processor: &Processor,
    batch: Vec<Record>,
    out: &mut impl Write,
    stats: &mut Stats,
) -> anyhow::Result<()> {
    let total = batch.len();
    let outcomes = processor.process(batch);
    let evaluated = outcomes.len();

    for outcome in outcomes {
        match outcome {
            Outcome::Processed(record) => {
                serde_json::to_writer(&mut *out, &record).context("Failed to write record")?;
                out.write_all(b"\n").context("Failed to write record")?;
                stats.processed += 1;
            }
            Outcome::Failed { position, error } => {
                error!("Record at position {position:?} failed: {error}");
                stats.failed += 1;
            }
        }
    }

    if evaluated < total {
        warn!("Skipped {} records after a failure", total - evaluated);
        stats.skipped += total - evaluated;
    }
    Ok(())
}
