//! Reading generator settings out of `pyproject.toml`
//!
//! The settings live in an optional `[tool.pre_commit_templates]` table. A
//! missing manifest, a missing `tool` table or a missing section all yield
//! the defaults; a section of the wrong shape is a hard error.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use pct_fs::{NormalizedPath, io};

use crate::{Error, Result};

/// Manifest file looked up at the repository root
pub const MANIFEST_FILE: &str = "pyproject.toml";

/// Key of the settings table under `[tool]`
pub const SECTION_KEY: &str = "pre_commit_templates";

fn default_template_directory() -> String {
    "./templates".to_string()
}

fn default_target_directory() -> String {
    "./".to_string()
}

/// Raw settings as written in the manifest
///
/// Directories are kept as written; [`super::Config`] resolves them against
/// the repository root. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Variables handed to the template engine
    #[serde(default)]
    pub data: Map<String, Value>,

    /// Directory holding templates, relative to the repository root
    #[serde(default = "default_template_directory")]
    pub template_directory: String,

    /// Directory templates are rendered into, relative to the repository root
    #[serde(default = "default_target_directory")]
    pub target_directory: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data: Map::new(),
            template_directory: default_template_directory(),
            target_directory: default_target_directory(),
        }
    }
}

impl Settings {
    /// Load settings from a manifest on disk.
    ///
    /// A manifest that does not exist yields the defaults.
    pub fn load(manifest: &NormalizedPath) -> Result<Self> {
        match io::read_text_if_exists(manifest)? {
            Some(content) => Self::parse(manifest.as_ref(), &content),
            None => {
                tracing::debug!(path = %manifest, "No manifest found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse settings from manifest content.
    ///
    /// `path` is only used in error messages.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let document: toml::Table =
            toml::from_str(content).map_err(|e| parse_error(path, e.to_string()))?;

        let Some(tool) = document.get("tool") else {
            return Ok(Self::default());
        };

        let tool = tool.as_table().ok_or_else(|| {
            parse_error(
                path,
                format!("`tool` should be a table, found {}", tool.type_str()),
            )
        })?;

        let Some(section) = tool.get(SECTION_KEY) else {
            return Ok(Self::default());
        };

        if !section.is_table() {
            return Err(parse_error(
                path,
                format!(
                    "`[tool.{SECTION_KEY}]` should be a table, found {}",
                    section.type_str()
                ),
            ));
        }

        section
            .clone()
            .try_into()
            .map_err(|e: toml::de::Error| parse_error(path, format!("`[tool.{SECTION_KEY}]`: {e}")))
    }
}

fn parse_error(path: &Path, message: String) -> Error {
    Error::ConfigParse {
        path: path.to_path_buf(),
        message,
    }
}
