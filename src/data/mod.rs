//! # Data Module
//!
//! In-memory representations of the merge run's data.
//!
//! ## Design Philosophy
//! - **Zero-cost newtypes:** `Attempt` prevents mixing repair-round numbers
//!   with ordinary integers at compile time.
//! - **Datasets stay on disk:** a `Dataset` is a named reference to a PLINK
//!   file set, never the genotype content itself. Every transformation
//!   produces a freshly named dataset; originals are preserved.

pub mod dataset;
pub mod marker;

// Re-export commonly used types
pub use dataset::{Attempt, Dataset};
pub use marker::MarkerCounts;
