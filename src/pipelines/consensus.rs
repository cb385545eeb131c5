//! # Consensus Building
//!
//! Computes the markers shared by every dataset in the batch and persists
//! them as the round-1 include list. An empty result is reported, not
//! raised: the orchestrator decides that zero consensus is fatal.

use std::path::Path;

use tracing::{info, warn};

use crate::data::MarkerCounts;
use crate::error::Result;
use crate::io::write_marker_list;

/// Intersects per-dataset marker lists and writes the consensus file
pub struct ConsensusBuilder;

impl ConsensusBuilder {
    /// Count occurrences across `marker_lists`, write every marker present
    /// in all of them to `out`, and return how many were written.
    pub fn build<S: AsRef<str>>(marker_lists: &[Vec<S>], out: &Path) -> Result<usize> {
        let mut counts = MarkerCounts::new();
        for list in marker_lists {
            counts.add_list(list.iter().map(AsRef::as_ref));
        }

        let consensus = counts.consensus(marker_lists.len() as u32);
        write_marker_list(out, &consensus)?;

        if consensus.is_empty() {
            warn!(
                n_datasets = marker_lists.len(),
                "no marker is shared by every dataset"
            );
        } else {
            info!(
                n_markers = consensus.len(),
                n_datasets = marker_lists.len(),
                "matched consensus markers across datasets"
            );
        }
        Ok(consensus.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::io::read_marker_list;

    fn lists(batches: &[&[&str]]) -> Vec<Vec<String>> {
        batches
            .iter()
            .map(|batch| batch.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_consensus_written_in_first_seen_order() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("consensus.txt");
        let n = ConsensusBuilder::build(
            &lists(&[&["B", "A", "C"], &["A", "B", "D"], &["A", "B", "E"]]),
            &out,
        )
        .unwrap();
        assert_eq!(n, 2);
        assert_eq!(read_marker_list(&out).unwrap(), vec!["B", "A"]);
    }

    #[test]
    fn test_zero_consensus_writes_empty_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("consensus.txt");
        let n = ConsensusBuilder::build(&lists(&[&["A"], &["B"]]), &out).unwrap();
        assert_eq!(n, 0);
        assert!(out.exists());
        assert!(read_marker_list(&out).unwrap().is_empty());
    }

    #[test]
    fn test_repeated_builds_byte_identical() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        let input = lists(&[&["rs1", "rs2", "rs3"], &["rs3", "rs1", "rs2"]]);
        ConsensusBuilder::build(&input, &a).unwrap();
        ConsensusBuilder::build(&input, &b).unwrap();
        assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
    }
}
