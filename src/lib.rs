//! # Genomerge Library
//!
//! Consensus-and-retry merging of PLINK genotype datasets that were called
//! on different SNP panels.
//!
//! ## Modules
//! - `config`: CLI argument parsing and validation
//! - `data`: Dataset references, attempt tags, marker counting
//! - `error`: Error types and result aliases
//! - `io`: Marker-list and merge-manifest file I/O
//! - `tool`: External toolkit boundary (trait, plink impl, status decoding)
//! - `pipelines`: High-level orchestration (consensus, subset, merge retry loop)
//!
//! The external genotype toolkit (PLINK) is treated as a black-box transform
//! on named on-disk datasets: everything here either prepares its inputs
//! (marker lists, merge manifests) or decodes its reported outcome.

pub mod config;
pub mod data;
pub mod error;
pub mod io;
pub mod pipelines;
pub mod tool;

// Re-export commonly used types
pub use config::Config;
pub use data::dataset::{Attempt, Dataset};
pub use data::marker::MarkerCounts;
pub use error::{MergeError, Result};
pub use tool::{MergeOutcome, SubsetMode, Toolkit};

pub use pipelines::{MergePipeline, RunContext};
