//! Generator configuration
//!
//! A [`Config`] is built once per invocation from an already-resolved
//! repository root and the settings found in its manifest. It is immutable
//! and passed by reference to everything that needs it.
//!
//! # Example
//!
//! ```ignore
//! use pct_core::Config;
//! use pct_fs::NormalizedPath;
//!
//! let config = Config::load(NormalizedPath::new("/path/to/repo"))?;
//! println!("templates in {}", config.template_root());
//! ```

mod manifest;

pub use manifest::{MANIFEST_FILE, SECTION_KEY, Settings};

use std::path::Path;

use serde_json::{Map, Value};

use pct_fs::NormalizedPath;

use crate::Result;

/// Resolved configuration for one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    root: NormalizedPath,
    settings: Settings,
    template_root: NormalizedPath,
    target_root: NormalizedPath,
}

impl Config {
    /// Build a configuration from settings and a resolved repository root.
    ///
    /// Directory resolution is purely lexical and happens here, once.
    pub fn new(root: NormalizedPath, settings: Settings) -> Self {
        let template_root = root.resolve(&settings.template_directory);
        let target_root = root.resolve(&settings.target_directory);
        Self {
            root,
            settings,
            template_root,
            target_root,
        }
    }

    /// Load the manifest found at `root`.
    pub fn load(root: NormalizedPath) -> Result<Self> {
        let settings = Settings::load(&root.join(MANIFEST_FILE))?;
        let config = Self::new(root, settings);
        tracing::debug!(
            root = %config.root,
            templates = %config.template_root,
            targets = %config.target_root,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load the manifest of the git work tree containing the current directory.
    pub fn discover() -> Result<Self> {
        Self::load(pct_git::current_root()?)
    }

    /// Repository root all relative paths are resolved against
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// The settings as read from the manifest
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Absolute template directory
    pub fn template_root(&self) -> &NormalizedPath {
        &self.template_root
    }

    /// Absolute target directory
    pub fn target_root(&self) -> &NormalizedPath {
        &self.target_root
    }

    /// Variables handed to the template engine
    pub fn data(&self) -> &Map<String, Value> {
        &self.settings.data
    }

    /// Resolve a path given on the command line against the repository root.
    ///
    /// Relative paths are joined to the root lexically. An absolute path that
    /// does not sit under the root, for example one spelled through a
    /// symlinked directory, has its parent directory canonicalized when that
    /// directory exists, since the root itself is canonical.
    pub fn resolve_input(&self, path: impl AsRef<Path>) -> NormalizedPath {
        let resolved = self.root.resolve(path);
        if resolved.starts_with(&self.root) {
            return resolved;
        }

        let Some(parent) = resolved.parent() else {
            return resolved;
        };
        let Ok(parent) = NormalizedPath::canonicalize(&parent) else {
            return resolved;
        };
        let Some(name) = resolved.file_name().map(str::to_owned) else {
            return resolved;
        };

        let canonical = parent.join(&name);
        tracing::debug!(input = %resolved, resolved = %canonical, "Resolved input through symlink");
        canonical
    }
}
