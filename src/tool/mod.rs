//! # External Toolkit Boundary
//!
//! The genotype toolkit (PLINK) is an opaque command: it accepts a dataset
//! name, a marker list, and an output path, and reports success or failure
//! through its output streams. This module owns that boundary:
//!
//! - [`Toolkit`]: the trait the pipelines call, one method per operation
//!   (write-markers, subset, merge). Tests substitute a scripted double.
//! - [`plink::PlinkTool`]: the real implementation, spawning `plink` with a
//!   structured argument list.
//! - [`status`]: the one place that decodes the tool's unstructured output
//!   into [`MergeOutcome`] / pass-fail, so the orchestrator never touches
//!   raw diagnostics.

pub mod plink;
pub mod status;

use std::path::{Path, PathBuf};

use crate::data::Dataset;
use crate::error::Result;

/// Whether a subset keeps exactly the listed markers or everything but them
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubsetMode {
    Include,
    Exclude,
}

/// Captured output streams of one toolkit invocation.
///
/// Success and conflict signals live in these streams as substrings
/// ("done", "missnp"); decoding them is `status`'s job.
#[derive(Clone, Debug, Default)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Decoded result of a merge invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Merge succeeded; the merged dataset is on disk
    Merged { dataset: Dataset },
    /// Allele conflicts detected; the conflicting marker ids are in this file
    Conflicts { missnp_path: PathBuf },
    /// Non-conflict failure
    Failed { reason: String },
}

/// Blocking interface to the external genotype toolkit.
///
/// Each call runs one toolkit invocation to completion and returns its
/// captured output; callers decode pass/fail via `status`. `Sync` because
/// per-dataset subsetting within one attempt may run in parallel.
pub trait Toolkit: Sync {
    /// Write `dataset`'s marker identifiers, one per line, to `out_list`
    fn write_markers(&self, dataset: &Dataset, out_list: &Path) -> Result<ToolOutput>;

    /// Produce `out` from `dataset`, keeping (Include) or dropping (Exclude)
    /// the markers listed in `marker_list`
    fn subset(
        &self,
        dataset: &Dataset,
        marker_list: &Path,
        mode: SubsetMode,
        out: &Dataset,
    ) -> Result<ToolOutput>;

    /// Merge `base` with the datasets listed in `manifest` into `out`
    fn merge(&self, base: &Dataset, manifest: &Path, out: &Dataset) -> Result<ToolOutput>;
}
