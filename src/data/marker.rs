//! # Marker Occurrence Counting
//!
//! Core of the consensus computation: count in how many datasets each marker
//! identifier appears, then keep the markers seen in every dataset.
//!
//! Iteration order is first-seen insertion order, so writing the consensus
//! list is deterministic and byte-identical across runs on the same inputs.

use std::collections::{HashMap, HashSet};

/// Marker identifier -> occurrence count across a batch of datasets.
///
/// Built fresh per consensus round. Each dataset's list is deduplicated
/// before counting, so a marker listed twice in one dataset still counts
/// once for that dataset. Without this, a duplicate could push a marker's
/// count past the dataset total and drop it from the consensus.
#[derive(Debug, Default)]
pub struct MarkerCounts {
    counts: HashMap<String, u32>,
    /// Marker ids in first-seen order
    order: Vec<String>,
    n_lists: u32,
}

impl MarkerCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one dataset's marker list
    pub fn add_list<I, S>(&mut self, markers: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.n_lists += 1;
        let mut seen = HashSet::new();
        for marker in markers {
            let id = marker.as_ref().trim();
            if id.is_empty() || !seen.insert(id.to_string()) {
                continue;
            }
            match self.counts.get_mut(id) {
                Some(count) => *count += 1,
                None => {
                    self.counts.insert(id.to_string(), 1);
                    self.order.push(id.to_string());
                }
            }
        }
    }

    /// Number of lists recorded so far
    pub fn n_lists(&self) -> u32 {
        self.n_lists
    }

    /// Markers present in exactly `n_datasets` lists, in first-seen order.
    ///
    /// Exact equality, not `>=`: with per-list dedup a count can never
    /// exceed the number of lists, so `==` selects precisely the markers
    /// shared by all datasets.
    pub fn consensus(&self, n_datasets: u32) -> Vec<&str> {
        self.order
            .iter()
            .filter(|id| self.counts.get(*id) == Some(&n_datasets))
            .map(String::as_str)
            .collect()
    }
}
