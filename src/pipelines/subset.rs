//! # Dataset Subsetting
//!
//! Runs the toolkit once per dataset to produce attempt-tagged derived
//! datasets restricted to (or purged of) a marker list. Datasets within one
//! attempt have no ordering dependency, so they are subset in parallel; the
//! first failure aborts the whole phase and nothing partial reaches the
//! merge step.

use std::path::Path;

use rayon::prelude::*;
use tracing::info;

use crate::data::{Attempt, Dataset};
use crate::error::{MergeError, Result};
use crate::tool::{status, SubsetMode, Toolkit};

/// Applies one include/exclude subset round across a dataset batch
pub struct DatasetSubsetter<'a, T: Toolkit> {
    toolkit: &'a T,
}

impl<'a, T: Toolkit> DatasetSubsetter<'a, T> {
    pub fn new(toolkit: &'a T) -> Self {
        Self { toolkit }
    }

    /// Subset every dataset against `marker_list`, tagging outputs with
    /// `attempt`. Returns the derived datasets in input order.
    pub fn subset_all(
        &self,
        datasets: &[Dataset],
        marker_list: &Path,
        mode: SubsetMode,
        attempt: Attempt,
    ) -> Result<Vec<Dataset>> {
        datasets
            .par_iter()
            .map(|dataset| self.subset_one(dataset, marker_list, mode, attempt))
            .collect()
    }

    fn subset_one(
        &self,
        dataset: &Dataset,
        marker_list: &Path,
        mode: SubsetMode,
        attempt: Attempt,
    ) -> Result<Dataset> {
        dataset.assert_on_disk()?;
        let out = dataset.tagged(attempt);
        let output = self.toolkit.subset(dataset, marker_list, mode, &out)?;
        if !status::is_success(&output) {
            return Err(MergeError::subset_failed(
                dataset.name(),
                status::diagnostic(&output),
            ));
        }
        info!(from = %dataset, to = %out, ?mode, "subset successful");
        Ok(out)
    }
}
