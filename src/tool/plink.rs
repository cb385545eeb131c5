//! # PLINK Invocation
//!
//! Spawns the `plink` executable with a structured argument list (never a
//! shell string, so dataset paths with spaces survive) and captures both
//! output streams for status decoding. Each call blocks until the tool
//! exits.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::data::Dataset;
use crate::error::{MergeError, Result};
use crate::tool::{SubsetMode, ToolOutput, Toolkit};

/// The real external toolkit: a located `plink` executable
#[derive(Clone, Debug)]
pub struct PlinkTool {
    exe: PathBuf,
}

impl PlinkTool {
    /// Use an explicit executable path
    pub fn new(exe: impl Into<PathBuf>) -> Result<Self> {
        let exe = exe.into();
        if exe.exists() {
            Ok(Self { exe })
        } else {
            Err(MergeError::ToolchainUnavailable)
        }
    }

    /// Probe PATH for `plink`
    pub fn locate() -> Result<Self> {
        let path = env::var_os("PATH").ok_or(MergeError::ToolchainUnavailable)?;
        for dir in env::split_paths(&path) {
            let candidate = dir.join("plink");
            if candidate.is_file() {
                debug!(exe = %candidate.display(), "located plink");
                return Ok(Self { exe: candidate });
            }
        }
        Err(MergeError::ToolchainUnavailable)
    }

    /// Executable this tool will spawn
    pub fn exe(&self) -> &Path {
        &self.exe
    }

    fn run(&self, args: &[&std::ffi::OsStr]) -> Result<ToolOutput> {
        debug!(exe = %self.exe.display(), ?args, "invoking plink");
        let output = Command::new(&self.exe).args(args).output()?;
        Ok(ToolOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

impl Toolkit for PlinkTool {
    fn write_markers(&self, dataset: &Dataset, out_list: &Path) -> Result<ToolOutput> {
        // plink appends .snplist to --out itself
        let out_base = out_list.with_extension("");
        self.run(&[
            "--bfile".as_ref(),
            dataset.base().as_os_str(),
            "--write-snplist".as_ref(),
            "--out".as_ref(),
            out_base.as_os_str(),
        ])
    }

    fn subset(
        &self,
        dataset: &Dataset,
        marker_list: &Path,
        mode: SubsetMode,
        out: &Dataset,
    ) -> Result<ToolOutput> {
        let mode_flag: &std::ffi::OsStr = match mode {
            SubsetMode::Include => "--extract".as_ref(),
            SubsetMode::Exclude => "--exclude".as_ref(),
        };
        self.run(&[
            "--bfile".as_ref(),
            dataset.base().as_os_str(),
            mode_flag,
            marker_list.as_os_str(),
            "--make-bed".as_ref(),
            "--out".as_ref(),
            out.base().as_os_str(),
        ])
    }

    fn merge(&self, base: &Dataset, manifest: &Path, out: &Dataset) -> Result<ToolOutput> {
        self.run(&[
            "--bfile".as_ref(),
            base.base().as_os_str(),
            "--merge-list".as_ref(),
            manifest.as_os_str(),
            "--make-bed".as_ref(),
            "--out".as_ref(),
            out.base().as_os_str(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_executable_rejected() {
        assert!(matches!(
            PlinkTool::new("/nonexistent/plink"),
            Err(MergeError::ToolchainUnavailable)
        ));
    }

    #[test]
    fn test_locate_fails_on_empty_path() {
        // Probe a PATH that cannot contain plink
        let saved = env::var_os("PATH");
        env::set_var("PATH", "/nonexistent-dir-for-plink-probe");
        let result = PlinkTool::locate();
        if let Some(saved) = saved {
            env::set_var("PATH", saved);
        }
        assert!(matches!(result, Err(MergeError::ToolchainUnavailable)));
    }
}
