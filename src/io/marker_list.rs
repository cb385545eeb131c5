//! # Marker and Dataset List Files
//!
//! Everything the pipeline exchanges with the toolkit is a plain text file:
//! marker lists are one identifier per line, dataset lists are one base name
//! per line (no extension). Blank lines are skipped; surrounding whitespace
//! is trimmed.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::data::Dataset;
use crate::error::Result;

/// Read a marker-list file into identifiers, in file order
pub fn read_marker_list(path: &Path) -> Result<Vec<String>> {
    read_lines(path)
}

/// Write marker identifiers one per line.
///
/// Deterministic: identical input slices produce byte-identical files.
pub fn write_marker_list<S: AsRef<str>>(path: &Path, markers: &[S]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for marker in markers {
        writer.write_all(marker.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a dataset-list file, resolving each base name against `work_dir`
pub fn read_dataset_list(path: &Path, work_dir: &Path) -> Result<Vec<Dataset>> {
    let names = read_lines(path)?;
    Ok(names
        .iter()
        .map(|name| Dataset::in_dir(work_dir, name))
        .collect())
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_marker_list_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("markers.txt");
        write_marker_list(&path, &["rs1", "rs2", "rs3"]).unwrap();
        assert_eq!(read_marker_list(&path).unwrap(), vec!["rs1", "rs2", "rs3"]);
    }

    #[test]
    fn test_write_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        let markers = ["rs10", "rs2", "rs33"];
        write_marker_list(&a, &markers).unwrap();
        write_marker_list(&b, &markers).unwrap();
        assert_eq!(
            std::fs::read(&a).unwrap(),
            std::fs::read(&b).unwrap()
        );
    }

    #[test]
    fn test_blank_lines_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("markers.txt");
        std::fs::write(&path, "rs1\n\n  rs2  \n\n").unwrap();
        assert_eq!(read_marker_list(&path).unwrap(), vec!["rs1", "rs2"]);
    }

    #[test]
    fn test_dataset_list_resolved_against_work_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("beds.txt");
        std::fs::write(&path, "batch1\nbatch2\n").unwrap();
        let datasets = read_dataset_list(&path, Path::new("/work")).unwrap();
        assert_eq!(datasets[0].base(), Path::new("/work/batch1"));
        assert_eq!(datasets[1].base(), Path::new("/work/batch2"));
    }
}
