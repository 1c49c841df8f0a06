//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A lexically normalized path using forward slashes internally.
///
/// Normalization replaces backslashes with forward slashes, drops empty and
/// `.` components and folds `..` into the preceding component. A `..` with
/// nothing left to fold is dropped, so a normalized path never climbs above
/// its own start. No filesystem access is involved; symlinks are not
/// resolved.
///
/// Two normalized paths can be compared component-wise with
/// [`NormalizedPath::strip_prefix`], which is how template and target trees
/// are told apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: clean(&path_str.replace('\\', "/")),
        }
    }

    /// Resolve the filesystem path to its canonical absolute form.
    ///
    /// Fails if the path does not exist.
    pub fn canonicalize(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        dunce::canonicalize(path)
            .map(Self::new)
            .map_err(|e| Error::io(path, e))
    }

    /// Resolve `path` against this directory.
    ///
    /// Absolute inputs are normalized and returned as-is; relative inputs are
    /// joined onto `self`.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Self {
        let candidate = Self::new(path.as_ref());
        if candidate.is_absolute() {
            candidate
        } else {
            self.join(&candidate.inner)
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Whether the path carries a root (`/`, `//server` or `C:/`).
    pub fn is_absolute(&self) -> bool {
        let (prefix, _) = split_prefix(&self.inner);
        prefix.ends_with('/')
    }

    /// Join this path with a segment.
    ///
    /// The segment is always treated as relative to `self`.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self {
            inner: clean(&joined),
        }
    }

    /// The remainder of this path below `base`, by whole components.
    ///
    /// Returns `Some("")` when the paths are equal and `None` when `self`
    /// does not lie under `base`. `/a/bc` is not under `/a/b`.
    pub fn strip_prefix(&self, base: &NormalizedPath) -> Option<&str> {
        if self.inner == base.inner {
            return Some("");
        }
        let rest = self.inner.strip_prefix(base.inner.as_str())?;
        if base.inner.ends_with('/') {
            Some(rest)
        } else {
            rest.strip_prefix('/')
        }
    }

    /// Whether this path is `base` or lies below it.
    pub fn starts_with(&self, base: &NormalizedPath) -> bool {
        self.strip_prefix(base).is_some()
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx > 0 => {
                let mut inner = trimmed[..idx].to_string();
                if inner.ends_with(':') {
                    inner.push('/');
                }
                Some(Self { inner })
            }
            Some(0) if trimmed.len() > 1 => Some(Self {
                inner: "/".to_string(),
            }),
            _ => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Check if this is a regular file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

/// Split off the root of a forward-slash path.
///
/// Network roots (`//server`) keep their double slash, drive roots keep
/// their letter.
fn split_prefix(raw: &str) -> (&str, &str) {
    if raw.starts_with("//") && !raw.starts_with("///") {
        return (&raw[..2], &raw[2..]);
    }
    if raw.starts_with('/') {
        return (&raw[..1], &raw[1..]);
    }
    let bytes = raw.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        return if bytes.get(2) == Some(&b'/') {
            (&raw[..3], &raw[3..])
        } else {
            (&raw[..2], &raw[2..])
        };
    }
    ("", raw)
}

fn clean(raw: &str) -> String {
    let (prefix, rest) = split_prefix(raw);

    let mut parts: Vec<&str> = Vec::new();
    for part in rest.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }

    let body = parts.join("/");
    if prefix.is_empty() && body.is_empty() {
        return ".".to_string();
    }
    format!("{prefix}{body}")
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
