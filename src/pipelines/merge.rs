//! # Merge Orchestration
//!
//! Drives the retry state machine over the whole batch:
//!
//! ```text
//! Consensus ──► Subset(include, try 1) ──► Merge(try 1) ──► merged dataset
//!                                             │
//!                                   allele conflicts (missnp)
//!                                             ▼
//!               Subset(exclude, try 2) ◄── Repair
//!                        │
//!                        ▼
//!                   Merge(try 2) ──► merged dataset | fatal
//! ```
//!
//! The repair round is bounded to a single retry: a second conflict report
//! is terminal. Every intermediate file (consensus list, subsetted datasets,
//! manifests, missnp reports) is left on disk for diagnosis.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::data::{Attempt, Dataset};
use crate::error::{MergeError, Result};
use crate::io::write_merge_manifest;
use crate::pipelines::{ConsensusBuilder, DatasetSubsetter, MarkerSetExtractor};
use crate::tool::{status, MergeOutcome, SubsetMode, Toolkit};

/// Where one reconciliation run writes its generated files.
///
/// Carried explicitly instead of relying on the process working directory,
/// and all generated names are attempt-tagged so rounds never collide.
#[derive(Clone, Debug)]
pub struct RunContext {
    work_dir: PathBuf,
    consensus_out: PathBuf,
    bed_out: String,
}

impl RunContext {
    pub fn new(
        work_dir: impl Into<PathBuf>,
        consensus_out: impl Into<PathBuf>,
        bed_out: impl Into<String>,
    ) -> Self {
        Self {
            work_dir: work_dir.into(),
            consensus_out: consensus_out.into(),
            bed_out: bed_out.into(),
        }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Destination of the consensus marker list
    pub fn consensus_path(&self) -> &Path {
        &self.consensus_out
    }

    /// Merged output dataset for the given attempt, e.g. `merged_Try1`
    pub fn merged(&self, attempt: Attempt) -> Dataset {
        Dataset::in_dir(&self.work_dir, &self.bed_out).tagged(attempt)
    }

    /// Merge manifest for the given attempt
    pub fn manifest_path(&self, attempt: Attempt) -> PathBuf {
        self.work_dir
            .join(format!("mergeList_{}.txt", attempt.tag()))
    }

    /// Conflict-marker file the toolkit writes on an allele conflict
    pub fn missnp_path(&self, attempt: Attempt) -> PathBuf {
        PathBuf::from(format!("{}-merge.missnp", self.merged(attempt).base().display()))
    }
}

/// The retry state machine
enum Stage {
    Consensus,
    Subset {
        sources: Vec<Dataset>,
        marker_list: PathBuf,
        mode: SubsetMode,
        attempt: Attempt,
    },
    Merge {
        inputs: Vec<Dataset>,
        attempt: Attempt,
    },
    Repair {
        missnp: PathBuf,
        sources: Vec<Dataset>,
    },
}

/// Orchestrates consensus building, subsetting, merging and the single
/// conflict-repair retry across a batch of datasets.
pub struct MergePipeline<'a, T: Toolkit> {
    toolkit: &'a T,
    ctx: RunContext,
}

impl<'a, T: Toolkit> MergePipeline<'a, T> {
    pub fn new(toolkit: &'a T, ctx: RunContext) -> Self {
        Self { toolkit, ctx }
    }

    /// Run the full reconciliation and return the merged dataset.
    ///
    /// `supplied_lists` may carry one pre-computed marker-list file per
    /// dataset; when empty the lists are derived via the toolkit.
    #[instrument(skip_all, fields(n_datasets = datasets.len()))]
    pub fn run(&self, datasets: &[Dataset], supplied_lists: &[PathBuf]) -> Result<Dataset> {
        if datasets.is_empty() {
            return Err(MergeError::config("no input datasets"));
        }

        // Round-1 outputs are the sources for the repair round
        let mut round1_outputs: Vec<Dataset> = Vec::new();
        let mut stage = Stage::Consensus;

        loop {
            stage = match stage {
                Stage::Consensus => {
                    let extractor = MarkerSetExtractor::new(self.toolkit);
                    let lists = extractor.marker_lists(datasets, supplied_lists)?;
                    let n = ConsensusBuilder::build(&lists, self.ctx.consensus_path())?;
                    if n == 0 {
                        return Err(MergeError::ConsensusEmpty);
                    }
                    Stage::Subset {
                        sources: datasets.to_vec(),
                        marker_list: self.ctx.consensus_path().to_path_buf(),
                        mode: SubsetMode::Include,
                        attempt: Attempt::FIRST,
                    }
                }

                Stage::Subset {
                    sources,
                    marker_list,
                    mode,
                    attempt,
                } => {
                    let subsetter = DatasetSubsetter::new(self.toolkit);
                    let outputs = subsetter.subset_all(&sources, &marker_list, mode, attempt)?;
                    if attempt.is_first() {
                        round1_outputs = outputs.clone();
                    }
                    Stage::Merge {
                        inputs: outputs,
                        attempt,
                    }
                }

                Stage::Merge { inputs, attempt } => match self.attempt_merge(&inputs, attempt)? {
                    MergeOutcome::Merged { dataset } => {
                        info!(merged = %dataset, attempt = %attempt, "merge successful");
                        return Ok(dataset);
                    }
                    MergeOutcome::Conflicts { missnp_path } if attempt.is_first() => {
                        Stage::Repair {
                            missnp: missnp_path,
                            sources: round1_outputs.clone(),
                        }
                    }
                    MergeOutcome::Conflicts { missnp_path } => {
                        warn!(missnp = %missnp_path.display(), "conflicts remain after repair");
                        return Err(MergeError::merge_failed("merge failed after conflict repair"));
                    }
                    MergeOutcome::Failed { reason } => {
                        return Err(MergeError::merge_failed(reason));
                    }
                },

                Stage::Repair { missnp, sources } => {
                    warn!(
                        missnp = %missnp.display(),
                        "allele conflicts detected, retrying with conflicting markers excluded"
                    );
                    Stage::Subset {
                        sources,
                        marker_list: missnp,
                        mode: SubsetMode::Exclude,
                        attempt: Attempt::FIRST.next(),
                    }
                }
            };
        }
    }

    /// One merge invocation: write the manifest, run the toolkit, decode
    fn attempt_merge(&self, inputs: &[Dataset], attempt: Attempt) -> Result<MergeOutcome> {
        // The subset phase yields one output per input dataset, and run()
        // rejects an empty batch up front.
        let (base, rest) = inputs
            .split_first()
            .ok_or_else(|| MergeError::config("no input datasets"))?;
        let manifest = self.ctx.manifest_path(attempt);
        write_merge_manifest(&manifest, rest)?;

        let merged = self.ctx.merged(attempt);
        info!(base = %base, merged = %merged, attempt = %attempt, "attempting merge");
        let output = self.toolkit.merge(base, &manifest, &merged)?;
        Ok(status::decode_merge(
            &output,
            &merged,
            &self.ctx.missnp_path(attempt),
        ))
    }
}
