//! [`TestRepo`] builder for template/target scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;
use tempfile::TempDir;

/// A temporary repository directory with helper methods for test setup and
/// assertion.
///
/// All `path` arguments are relative to the repository root.
///
/// # Example
///
/// ```rust,no_run
/// use pct_test_utils::repo::TestRepo;
///
/// let repo = TestRepo::new();
/// repo.init_git();
/// repo.write_settings("[tool.pre_commit_templates.data]\nname = \"world\"\n");
/// repo.write_file("templates/a.txt", "Hello {{name}}");
/// ```
pub struct TestRepo {
    temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Return the root with symlinks resolved, as repository discovery
    /// reports it.
    pub fn canonical_root(&self) -> PathBuf {
        dunce::canonicalize(self.root()).expect("TestRepo::canonical_root: canonicalize failed")
    }

    /// Initialise the directory as a real git repository using `git2`.
    pub fn init_git(&self) {
        crate::git::real_git_repo(self.root());
    }

    /// Write `pyproject.toml` verbatim.
    pub fn write_manifest(&self, content: &str) {
        self.write_file("pyproject.toml", content);
    }

    /// Write `pyproject.toml` with the given TOML appended after a
    /// `[tool.pre_commit_templates]` header.
    pub fn write_settings(&self, body: &str) {
        self.write_manifest(&format!("[tool.pre_commit_templates]\n{body}"));
    }

    /// Write a file, creating its parent directories.
    pub fn write_file(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", full_path.display()));
    }

    /// Create a directory and its parents.
    pub fn create_dir(&self, path: &str) {
        fs::create_dir_all(self.root().join(path)).unwrap();
    }

    /// Read a file as text.
    pub fn read_file(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Pin the modification time of a file to `seconds` after the epoch.
    pub fn set_mtime(&self, path: &str, seconds: i64) {
        let full_path = self.root().join(path);
        filetime::set_file_mtime(&full_path, FileTime::from_unix_time(seconds, 0))
            .unwrap_or_else(|e| panic!("Could not set mtime of {}: {e}", full_path.display()));
    }

    /// Modification time of a file.
    pub fn mtime(&self, path: &str) -> FileTime {
        let full_path = self.root().join(path);
        let metadata = fs::metadata(&full_path)
            .unwrap_or_else(|_| panic!("Could not stat file: {}", full_path.display()));
        FileTime::from_last_modification_time(&metadata)
    }

    /// Assert that `path` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` holds exactly `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or differs from `content`.
    pub fn assert_file_eq(&self, path: &str, content: &str) {
        let file_content = self.read_file(path);
        assert!(
            file_content == content,
            "File {} does not hold the expected content.\nExpected: {:?}\nActual: {:?}",
            path,
            content,
            file_content
        );
    }
}
