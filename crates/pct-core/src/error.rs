//! Error types for pct-core

use std::path::PathBuf;

/// Result type for pct-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pct-core operations
///
/// Per-match problems (a missing template, a missing target directory) are
/// not errors at this level; the sync engine records them in its report and
/// keeps going. Everything here aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The manifest exists but its configuration section is malformed
    #[error("Failed to parse configuration in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// A staleness query found none of its sources on disk
    #[error("No existing source to compare {target} against")]
    EmptySourceSet { target: PathBuf },

    /// The template engine rejected a template or its data
    #[error("Failed to render {template}: {message}")]
    Render { template: PathBuf, message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from pct-fs
    #[error(transparent)]
    Fs(#[from] pct_fs::Error),

    /// Git error from pct-git
    #[error(transparent)]
    Git(#[from] pct_git::Error),
}
