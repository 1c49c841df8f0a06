//! Error types for pct-git

use std::path::PathBuf;

/// Result type for pct-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pct-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not inside a git repository: {path}")]
    NotARepository {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("Repository at {path} is bare and has no work tree")]
    BareRepository { path: PathBuf },

    #[error("Filesystem error: {0}")]
    Fs(#[from] pct_fs::Error),

    #[error("Could not determine the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}
