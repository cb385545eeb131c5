//! # Pipeline Module
//!
//! High-level orchestration of the reconciliation workflow. The merge
//! pipeline drives the retry state machine; the other components each own
//! one phase of it.

pub mod consensus;
pub mod extract;
pub mod merge;
pub mod subset;

pub use consensus::ConsensusBuilder;
pub use extract::MarkerSetExtractor;
pub use merge::{MergePipeline, RunContext};
pub use subset::DatasetSubsetter;
