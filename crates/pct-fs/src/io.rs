//! File I/O for generated targets
//!
//! Writes replace a file's content in place: the file is opened through any
//! symlink, truncated and rewritten, so links and permissions of generated
//! files survive regeneration.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};

use filetime::FileTime;
use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Replace the content of a file, creating it if needed.
///
/// The file is held under an exclusive advisory lock while it is truncated
/// and written, so two concurrent runs never interleave their output. The
/// parent directory must already exist.
pub fn write_in_place(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    // Truncate only once the lock is held
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&native_path)
        .map_err(|e| Error::io(&native_path, e))?;

    file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    let written = file
        .set_len(0)
        .and_then(|()| file.write_all(content))
        .and_then(|()| file.sync_all());

    let unlocked = file.unlock();
    written.map_err(|e| Error::io(&native_path, e))?;
    unlocked.map_err(|_| Error::LockFailed { path: native_path })?;

    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read text content, or `None` if the file does not exist.
pub fn read_text_if_exists(path: &NormalizedPath) -> Result<Option<String>> {
    let native_path = path.to_native();
    match fs::read_to_string(&native_path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(&native_path, e)),
    }
}

/// Write text content to a file, replacing it in full.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_in_place(path, content.as_bytes())
}

/// Create a directory and all of its missing parents.
pub fn create_dir_all(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();
    fs::create_dir_all(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Modification time of a file, or `None` if it does not exist.
///
/// Resolution is whatever the platform records, down to nanoseconds.
pub fn modified(path: &NormalizedPath) -> Result<Option<FileTime>> {
    let native_path = path.to_native();
    match fs::metadata(&native_path) {
        Ok(metadata) => Ok(Some(FileTime::from_last_modification_time(&metadata))),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(&native_path, e)),
    }
}

/// Set the modification time of an existing file to now.
pub fn touch(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();
    filetime::set_file_mtime(&native_path, FileTime::now())
        .map_err(|e| Error::io(&native_path, e))?;
    tracing::trace!(path = %path, "Touched");
    Ok(())
}
