//! # Genomerge: Consensus-and-Retry Genotype Dataset Merging
//!
//! Reconciles PLINK genotype datasets called on different SNP panels:
//! computes the marker consensus across batches, subsets every batch to it,
//! merges, and on allele conflicts retries once with the conflicting
//! markers excluded.
//!
//! ## Usage
//! ```bash
//! # Marker lists supplied per batch
//! genomerge batch1.snplist batch2.snplist \
//!     --out consensus.txt --bed-list beds.txt --bed-out merged
//!
//! # Marker lists derived from the datasets via plink
//! genomerge --out consensus.txt --bed-list beds.txt --bed-out merged
//! ```

use std::time::Instant;

use genomerge::config::Config;
use genomerge::io::read_dataset_list;
use genomerge::pipelines::{MergePipeline, RunContext};
use genomerge::tool::plink::PlinkTool;
use genomerge::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber (RUST_LOG overrides the default level)
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let start = Instant::now();

    // Parse and validate configuration
    let config = Config::parse_and_validate()?;
    init_logging();

    // Configure thread pool for parallel subsetting
    rayon::ThreadPoolBuilder::new()
        .num_threads(config.nthreads())
        .build_global()
        .ok();

    // Locate the external toolkit before any work starts
    let toolkit = match &config.plink {
        Some(exe) => PlinkTool::new(exe)?,
        None => PlinkTool::locate()?,
    };

    let datasets = read_dataset_list(&config.bed_list, &config.work_dir)?;
    eprintln!("genomerge v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("Datasets: {}", datasets.len());
    if !config.snplists.is_empty() {
        eprintln!("Marker lists: {} (supplied)", config.snplists.len());
    }

    let ctx = RunContext::new(&config.work_dir, &config.out, config.bed_out.as_str());
    let pipeline = MergePipeline::new(&toolkit, ctx);
    let merged = pipeline.run(&datasets, &config.snplists)?;

    eprintln!("Merged dataset: {}", merged);
    let elapsed = start.elapsed();
    eprintln!("Completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}
