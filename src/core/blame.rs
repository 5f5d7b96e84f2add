//! Commit attribution via `git blame`.
//!
//! `git blame --date=iso` prints one record per source line:
//!
//! ```text
//! ^3f2a9c1 (Jane Doe 2024-01-02 03:04:05 +0000  12) // TODO: fix
//! ```
//!
//! The committer and timestamp are read from the tokens between the
//! parentheses. Multi-word committer names are supported because the
//! timestamp, not a token count, delimits the name.

use std::{
    path::{Path, PathBuf},
    process::Command,
    sync::LazyLock,
};

use regex::Regex;
use serde::Serialize;

use crate::error::ScanError;

// (<committer> <YYYY-MM-DD HH:MM:SS +ZZZZ> <line>)
static BLAME_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\((?P<committer>.*?)\s+(?P<committed_at>\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} [+-]\d{4})\s+\d+\)",
    )
    .unwrap()
});

/// Who last committed a line, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribution {
    pub committer: String,
    pub committed_at: String,
}

/// Blame output for a single file, one entry per source line.
#[derive(Debug, Clone)]
pub struct FileBlame {
    path: PathBuf,
    lines: Vec<String>,
}

impl FileBlame {
    pub fn parse(path: impl Into<PathBuf>, output: &str) -> Self {
        Self {
            path: path.into(),
            lines: output.lines().map(String::from).collect(),
        }
    }

    /// Attribution for a 1-based line number.
    pub fn attribute(&self, line_num: usize) -> Result<Attribution, ScanError> {
        let record = line_num
            .checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .ok_or_else(|| {
                ScanError::attribution(
                    &self.path,
                    format!("line {} not found in blame output", line_num),
                )
            })?;

        let captures = BLAME_LINE_REGEX.captures(record).ok_or_else(|| {
            ScanError::attribution(
                &self.path,
                format!("unrecognized blame record for line {}", line_num),
            )
        })?;

        Ok(Attribution {
            committer: captures["committer"].trim().to_string(),
            committed_at: captures["committed_at"].to_string(),
        })
    }
}

/// Source of per-file blame information.
pub trait BlameSource {
    fn blame(&self, path: &Path) -> Result<FileBlame, ScanError>;
}

/// Runs `git blame` in the directory containing each file.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitBlame;

impl BlameSource for GitBlame {
    fn blame(&self, path: &Path) -> Result<FileBlame, ScanError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| ScanError::attribution(path, "path has no file name"))?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        tracing::debug!("running git blame for {}", path.display());

        let output = Command::new("git")
            .arg("-C")
            .arg(dir)
            .args(["--no-pager", "blame", "--date=iso", "--"])
            .arg(file_name)
            .output()
            .map_err(|e| ScanError::attribution(path, format!("failed to run git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = stderr.trim();
            return Err(ScanError::attribution(
                path,
                if reason.is_empty() {
                    format!("git blame exited with {}", output.status)
                } else {
                    reason.to_string()
                },
            ));
        }

        Ok(FileBlame::parse(
            path,
            &String::from_utf8_lossy(&output.stdout),
        ))
    }
}
