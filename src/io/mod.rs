//! # I/O Module
//!
//! File reading/writing boundaries: plain-text marker lists (one identifier
//! per line), dataset name lists, and the merge manifest consumed by the
//! toolkit's multi-dataset merge operation.

pub mod manifest;
pub mod marker_list;

pub use manifest::write_merge_manifest;
pub use marker_list::{read_dataset_list, read_marker_list, write_marker_list};
