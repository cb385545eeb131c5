//! # Dataset References
//!
//! A dataset is a PLINK binary file set identified by a base path: the
//! primary `.bed` data file plus the `.bim`/`.fam` metadata files that share
//! its name. The crate never opens these files; it only checks existence and
//! derives attempt-tagged names for the toolkit to write into.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{MergeError, Result};

/// A repair round number (>= 1). Embedded in derived dataset names so
/// successive rounds never overwrite earlier outputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Attempt(pub u32);

impl Attempt {
    /// The initial consensus round
    pub const FIRST: Attempt = Attempt(1);

    /// The next repair round
    pub fn next(self) -> Attempt {
        Attempt(self.0 + 1)
    }

    pub fn is_first(self) -> bool {
        self.0 == 1
    }

    /// Name suffix for datasets produced in this round, e.g. `Try2`
    pub fn tag(self) -> String {
        format!("Try{}", self.0)
    }
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to an on-disk PLINK dataset by base path (no extension).
///
/// Valid only if the primary `<base>.bed` file exists; `assert_on_disk`
/// enforces that invariant before any toolkit call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset {
    base: PathBuf,
}

impl Dataset {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Resolve a bare dataset name against a working directory. Absolute
    /// names are used as-is.
    pub fn in_dir(dir: &Path, name: &str) -> Self {
        let name_path = Path::new(name);
        if name_path.is_absolute() {
            Self::new(name_path)
        } else {
            Self::new(dir.join(name))
        }
    }

    /// Base path without extension, as passed to `--bfile` / `--out`
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Short display name (file stem of the base path)
    pub fn name(&self) -> String {
        self.base
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.base.display().to_string())
    }

    /// Path of the primary data file
    pub fn bed_path(&self) -> PathBuf {
        self.base.with_extension("bed")
    }

    /// Path of the marker-list file the toolkit writes for this dataset
    pub fn snplist_path(&self) -> PathBuf {
        self.base.with_extension("snplist")
    }

    /// Check the dataset's existence invariant
    pub fn assert_on_disk(&self) -> Result<()> {
        let bed = self.bed_path();
        if bed.exists() {
            Ok(())
        } else {
            Err(MergeError::dataset_not_found(bed))
        }
    }

    /// Derive the attempt-tagged dataset name, e.g. `panel -> panel_Try1`.
    ///
    /// An existing `_Try<N>` suffix is replaced rather than stacked, so
    /// re-subsetting a round-1 output for the repair round yields
    /// `panel_Try2`, not `panel_Try1_Try2`.
    pub fn tagged(&self, attempt: Attempt) -> Dataset {
        let name = self.name();
        let stem = strip_attempt_tag(&name);
        let tagged = format!("{}_{}", stem, attempt.tag());
        match self.base.parent() {
            Some(dir) if dir != Path::new("") => Dataset::new(dir.join(tagged)),
            _ => Dataset::new(tagged),
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base.display())
    }
}

/// Remove a trailing `_Try<digits>` suffix if present
fn strip_attempt_tag(name: &str) -> &str {
    if let Some(idx) = name.rfind("_Try") {
        let rest = &name[idx + 4..];
        if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
            return &name[..idx];
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_tagging() {
        let ds = Dataset::new("batch1");
        assert_eq!(ds.tagged(Attempt::FIRST).name(), "batch1_Try1");
        assert_eq!(ds.tagged(Attempt::FIRST.next()).name(), "batch1_Try2");
    }

    #[test]
    fn test_tag_replaced_not_stacked() {
        let ds = Dataset::new("/work/batch1_Try1");
        let retry = ds.tagged(Attempt(2));
        assert_eq!(retry.base(), Path::new("/work/batch1_Try2"));
    }

    #[test]
    fn test_tag_like_names_kept() {
        // A suffix that only looks like a tag must not be stripped
        let ds = Dataset::new("batch_Trya");
        assert_eq!(ds.tagged(Attempt::FIRST).name(), "batch_Trya_Try1");
        let ds = Dataset::new("batch_Try");
        assert_eq!(ds.tagged(Attempt::FIRST).name(), "batch_Try_Try1");
    }

    #[test]
    fn test_paths() {
        let ds = Dataset::in_dir(Path::new("/work"), "batch1");
        assert_eq!(ds.bed_path(), Path::new("/work/batch1.bed"));
        assert_eq!(ds.snplist_path(), Path::new("/work/batch1.snplist"));
    }

    #[test]
    fn test_absolute_name_ignores_dir() {
        let ds = Dataset::in_dir(Path::new("/work"), "/data/batch1");
        assert_eq!(ds.base(), Path::new("/data/batch1"));
    }

    #[test]
    fn test_missing_dataset_detected() {
        let ds = Dataset::new("/nonexistent/batch1");
        assert!(matches!(
            ds.assert_on_disk(),
            Err(MergeError::DatasetNotFound { .. })
        ));
    }
}
