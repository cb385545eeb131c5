//! # Marker Set Extraction
//!
//! Obtains each input dataset's marker identifier list: either read from a
//! pre-supplied list file, or derived by running the toolkit in
//! write-markers mode next to the dataset. Derived list files are left on
//! disk; overwriting one from an earlier run is fine.

use std::path::PathBuf;

use tracing::info;

use crate::data::Dataset;
use crate::error::{MergeError, Result};
use crate::io::read_marker_list;
use crate::tool::{status, Toolkit};

/// Produces one marker list per input dataset
pub struct MarkerSetExtractor<'a, T: Toolkit> {
    toolkit: &'a T,
}

impl<'a, T: Toolkit> MarkerSetExtractor<'a, T> {
    pub fn new(toolkit: &'a T) -> Self {
        Self { toolkit }
    }

    /// Marker lists for the whole batch, in dataset order.
    ///
    /// When `supplied` is non-empty it must pair up with `datasets`
    /// one-to-one; otherwise each dataset's list is derived via the toolkit.
    pub fn marker_lists(
        &self,
        datasets: &[Dataset],
        supplied: &[PathBuf],
    ) -> Result<Vec<Vec<String>>> {
        if !supplied.is_empty() {
            if supplied.len() != datasets.len() {
                return Err(MergeError::config(format!(
                    "{} marker lists supplied for {} datasets",
                    supplied.len(),
                    datasets.len()
                )));
            }
            return supplied.iter().map(|path| read_marker_list(path)).collect();
        }

        datasets
            .iter()
            .map(|dataset| self.derive_markers(dataset))
            .collect()
    }

    fn derive_markers(&self, dataset: &Dataset) -> Result<Vec<String>> {
        dataset.assert_on_disk()?;
        let list_path = dataset.snplist_path();
        let output = self.toolkit.write_markers(dataset, &list_path)?;
        if !status::is_success(&output) {
            return Err(MergeError::subset_failed(
                dataset.name(),
                status::diagnostic(&output),
            ));
        }
        let markers = read_marker_list(&list_path)?;
        info!(dataset = %dataset, n_markers = markers.len(), "extracted marker list");
        Ok(markers)
    }
}
