//! # Centralized Error Handling
//!
//! Unified error types for the entire crate using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for genomerge operations
#[derive(Error, Debug)]
pub enum MergeError {
    /// I/O errors (file missing, permission denied, read/write failures)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The external genotype toolkit is not on PATH
    #[error("plink executable not found on PATH")]
    ToolchainUnavailable,

    /// A dataset's primary data file is absent from disk
    #[error("dataset file not found: {path}")]
    DatasetNotFound { path: PathBuf },

    /// The toolkit reported failure while subsetting a dataset
    #[error("subset of dataset '{dataset}' failed: {diagnostic}")]
    SubsetFailed { dataset: String, diagnostic: String },

    /// No marker is present in every dataset of the batch
    #[error("no consensus markers across the dataset batch")]
    ConsensusEmpty,

    /// The merge failed terminally (non-conflict error, or conflicts after repair)
    #[error("merge failed: {reason}")]
    MergeFailed { reason: String },

    /// Configuration errors (invalid CLI arguments)
    #[error("configuration error: {message}")]
    Config { message: String },
}

/// Type alias for Results using MergeError
pub type Result<T> = std::result::Result<T, MergeError>;

impl MergeError {
    /// Create a dataset-not-found error
    pub fn dataset_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DatasetNotFound { path: path.into() }
    }

    /// Create a subset-failed error carrying the tool diagnostic
    pub fn subset_failed(dataset: impl Into<String>, diagnostic: impl Into<String>) -> Self {
        Self::SubsetFailed {
            dataset: dataset.into(),
            diagnostic: diagnostic.into(),
        }
    }

    /// Create a terminal merge-failure error
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
