//! Error types for discovery, scanning and attribution.
//!
//! Only [`ScanError::Discovery`] is fatal. Read and attribution failures are
//! reported per file and the run carries on without that file's data.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The root directory or one of its subdirectories could not be listed.
    #[error("cannot list '{}': {error}", path.display())]
    Discovery { path: PathBuf, error: io::Error },

    /// A source file could not be opened or read.
    #[error("cannot read '{}': {error}", path.display())]
    FileRead { path: PathBuf, error: io::Error },

    /// `git blame` failed or produced output we could not parse.
    #[error("cannot attribute '{}': {reason}", path.display())]
    Attribution { path: PathBuf, reason: String },
}

impl ScanError {
    pub fn attribution(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Attribution {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error should abort the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Discovery { .. })
    }
}

impl From<walkdir::Error> for ScanError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from).unwrap_or_default();
        let error = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
        Self::Discovery { path, error }
    }
}
