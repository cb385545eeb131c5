//! # Configuration Logic
//!
//! CLI argument parsing and validation.
//!
//! ## Example CLI
//! ```bash
//! genomerge batch1.snplist batch2.snplist batch3.snplist \
//!     --out consensus.txt --bed-list beds.txt --bed-out merged
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::{MergeError, Result};

/// Reconcile and merge PLINK genotype datasets called on different SNP panels
#[derive(Parser, Debug)]
#[command(name = "genomerge", version, about)]
pub struct Config {
    /// Per-batch marker-list files, one per dataset (omit to derive them
    /// from the datasets via the toolkit)
    pub snplists: Vec<PathBuf>,

    /// Output path for the consensus marker list
    #[arg(long)]
    pub out: PathBuf,

    /// File listing the dataset base names, one per line, no extension
    #[arg(long = "bed-list")]
    pub bed_list: PathBuf,

    /// Base name of the merged output dataset
    #[arg(long = "bed-out")]
    pub bed_out: String,

    /// Working directory for generated files
    #[arg(long = "work-dir", default_value = ".")]
    pub work_dir: PathBuf,

    /// Explicit path to the plink executable (default: probe PATH)
    #[arg(long)]
    pub plink: Option<PathBuf>,

    /// Number of threads for parallel subsetting (default: all cores)
    #[arg(long)]
    pub threads: Option<usize>,
}

impl Config {
    /// Parse CLI arguments and validate them
    pub fn parse_and_validate() -> Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check that every referenced input exists before any work starts
    pub fn validate(&self) -> Result<()> {
        for snplist in &self.snplists {
            require_file(snplist, "marker list")?;
        }
        require_file(&self.bed_list, "dataset list")?;
        if self.bed_out.trim().is_empty() {
            return Err(MergeError::config("--bed-out must not be empty"));
        }
        if !self.work_dir.is_dir() {
            return Err(MergeError::config(format!(
                "working directory does not exist: {}",
                self.work_dir.display()
            )));
        }
        Ok(())
    }

    /// Thread count for the rayon pool (0 lets rayon pick all cores)
    pub fn nthreads(&self) -> usize {
        self.threads.unwrap_or(0)
    }
}

fn require_file(path: &Path, what: &str) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(MergeError::config(format!(
            "{} file does not exist: {}",
            what,
            path.display()
        )))
    }
}
