//! # Merge Manifest
//!
//! The toolkit's multi-dataset merge takes one designated base dataset on
//! the command line and reads the remaining dataset base paths from a
//! manifest file, one per line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::data::Dataset;
use crate::error::Result;

/// Write the base paths of the non-base datasets to `path`
pub fn write_merge_manifest(path: &Path, rest: &[Dataset]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for dataset in rest {
        writeln!(writer, "{}", dataset.base().display())?;
    }
    writer.flush()?;
    Ok(())
}
