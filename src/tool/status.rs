//! # Toolkit Status Decoding
//!
//! PLINK reports outcomes as free text: a successful run prints a line
//! ending in "done" to stdout; an allele conflict during merge mentions the
//! `.missnp` file on stderr and writes the conflicting marker ids to
//! `<out>-merge.missnp`. These substring contracts are decoded here and
//! nowhere else; the rest of the crate sees pass/fail and [`MergeOutcome`].

use std::path::Path;

use crate::data::Dataset;
use crate::tool::{MergeOutcome, ToolOutput};

/// Success signal common to all toolkit operations
pub fn is_success(output: &ToolOutput) -> bool {
    output.stdout.contains("done")
}

/// Diagnostic text for a failed invocation, preferring stderr
pub fn diagnostic(output: &ToolOutput) -> String {
    let err = output.stderr.trim();
    if !err.is_empty() {
        return err.to_string();
    }
    let out = output.stdout.trim();
    if !out.is_empty() {
        out.to_string()
    } else {
        "tool produced no diagnostic output".to_string()
    }
}

/// Decode a merge invocation.
///
/// The conflict signal wins over the success signal: PLINK may report
/// partial progress before aborting on 3+ allele variants, and the missnp
/// file on disk is authoritative even if stderr was lost.
pub fn decode_merge(output: &ToolOutput, merged: &Dataset, missnp_path: &Path) -> MergeOutcome {
    if output.stderr.contains("missnp") || missnp_path.exists() {
        return MergeOutcome::Conflicts {
            missnp_path: missnp_path.to_path_buf(),
        };
    }
    if is_success(output) {
        MergeOutcome::Merged {
            dataset: merged.clone(),
        }
    } else {
        MergeOutcome::Failed {
            reason: diagnostic(output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn out(stdout: &str, stderr: &str) -> ToolOutput {
        ToolOutput {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn test_done_means_success() {
        assert!(is_success(&out("Writing merged data... done.", "")));
        assert!(!is_success(&out("Error: missing input", "")));
    }

    #[test]
    fn test_merge_success() {
        let merged = Dataset::new("/work/merged_Try1");
        let outcome = decode_merge(
            &out("done.", ""),
            &merged,
            Path::new("/work/merged_Try1-merge.missnp"),
        );
        assert_eq!(outcome, MergeOutcome::Merged { dataset: merged });
    }

    #[test]
    fn test_missnp_in_stderr_is_conflict() {
        let merged = Dataset::new("/work/merged_Try1");
        let outcome = decode_merge(
            &out("done.", "Warning: variants written to merged_Try1-merge.missnp"),
            &merged,
            Path::new("/work/merged_Try1-merge.missnp"),
        );
        assert!(matches!(outcome, MergeOutcome::Conflicts { .. }));
    }

    #[test]
    fn test_missnp_file_on_disk_is_conflict() {
        let dir = TempDir::new().unwrap();
        let missnp = dir.path().join("merged_Try1-merge.missnp");
        std::fs::write(&missnp, "rs99\n").unwrap();
        let merged = Dataset::new(dir.path().join("merged_Try1"));
        let outcome = decode_merge(&out("done.", ""), &merged, &missnp);
        assert_eq!(outcome, MergeOutcome::Conflicts { missnp_path: missnp });
    }

    #[test]
    fn test_other_failure_carries_diagnostic() {
        let merged = Dataset::new("/work/merged_Try1");
        let outcome = decode_merge(
            &out("", "Error: .fam file mismatch"),
            &merged,
            Path::new("/work/merged_Try1-merge.missnp"),
        );
        assert_eq!(
            outcome,
            MergeOutcome::Failed {
                reason: "Error: .fam file mismatch".to_string()
            }
        );
    }

    #[test]
    fn test_diagnostic_prefers_stderr() {
        assert_eq!(diagnostic(&out("progress", "bad input")), "bad input");
        assert_eq!(diagnostic(&out("progress", "")), "progress");
        assert_eq!(
            diagnostic(&out("", "")),
            "tool produced no diagnostic output"
        );
    }
}
