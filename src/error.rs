//! Error types for pct-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that abort an invocation
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from pct-core
    #[error(transparent)]
    Core(#[from] pct_core::Error),

    /// Error from pct-fs
    #[error(transparent)]
    Fs(#[from] pct_fs::Error),

    /// Error from pct-git
    #[error(transparent)]
    Git(#[from] pct_git::Error),

    /// Logging could not be set up
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
