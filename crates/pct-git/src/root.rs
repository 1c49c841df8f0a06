//! Work tree root discovery

use std::ffi::OsStr;
use std::path::Path;

use git2::{Repository, RepositoryOpenFlags};
use pct_fs::NormalizedPath;

use crate::{Error, Result};

/// Find the top-level directory of the work tree containing `start`.
///
/// Walks up from `start` like `git rev-parse --show-toplevel` does and
/// honors the same environment (`GIT_DIR`, `GIT_CEILING_DIRECTORIES`).
/// The result is canonical, so it never carries a trailing separator or
/// stray whitespace.
pub fn discover_root(start: &Path) -> Result<NormalizedPath> {
    let repo = Repository::open_ext(start, RepositoryOpenFlags::FROM_ENV, &[] as &[&OsStr])
        .map_err(|source| Error::NotARepository {
            path: start.to_path_buf(),
            source,
        })?;

    let workdir = repo.workdir().ok_or_else(|| Error::BareRepository {
        path: repo.path().to_path_buf(),
    })?;

    let root = NormalizedPath::canonicalize(workdir)?;
    tracing::debug!(root = %root, "Discovered repository root");
    Ok(root)
}

/// Find the work tree root for the process's current directory.
pub fn current_root() -> Result<NormalizedPath> {
    let cwd = std::env::current_dir().map_err(Error::CurrentDir)?;
    discover_root(&cwd)
}
