//! SyncEngine implementation
//!
//! The SyncEngine renders every matched template into its target, one match
//! at a time, and writes only what changed.

use std::path::Path;

use pct_fs::{NormalizedPath, io};

use crate::config::Config;
use crate::matching::{MatchSet, PathResolver, TemplateMatch};
use crate::render::{HandlebarsRenderer, Renderer};
use crate::staleness::is_up_to_date;
use crate::{Error, Result};

use super::report::{FailureKind, SyncReport};

/// Options for sync runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    /// Create missing target directories instead of failing the match
    pub mkdirs: bool,
    /// Skip targets that are newer than their template
    pub use_mtime: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            mkdirs: true,
            use_mtime: true,
        }
    }
}

/// Engine for regenerating targets from templates
///
/// Per match the engine:
/// 1. fails the match if the template is not a regular file,
/// 2. creates the target directory (or fails the match without `mkdirs`),
/// 3. skips targets newer than their template when `use_mtime` is set,
/// 4. renders the template with the configured data,
/// 5. touches the target if the output is unchanged, otherwise rewrites it.
///
/// Failed matches are recorded and the run continues. I/O errors abort the
/// run.
pub struct SyncEngine {
    config: Config,
    options: SyncOptions,
    renderer: Box<dyn Renderer>,
}

impl SyncEngine {
    /// Create a new SyncEngine rendering with Handlebars
    pub fn new(config: Config, options: SyncOptions) -> Self {
        Self::with_renderer(config, options, Box::new(HandlebarsRenderer::new()))
    }

    /// Create a new SyncEngine with a custom renderer
    pub fn with_renderer(config: Config, options: SyncOptions, renderer: Box<dyn Renderer>) -> Self {
        Self {
            config,
            options,
            renderer,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn options(&self) -> SyncOptions {
        self.options
    }

    /// Build the match set for paths given relative to the repository root.
    pub fn matches<I>(&self, updated_paths: I) -> MatchSet
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let resolved: Vec<NormalizedPath> = updated_paths
            .into_iter()
            .map(|path| self.config.resolve_input(path))
            .collect();
        MatchSet::build(&PathResolver::from_config(&self.config), &resolved)
    }

    /// Match `updated_paths` and sync the result.
    pub fn run<I>(&self, updated_paths: I) -> Result<SyncReport>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let matches = self.matches(updated_paths);
        self.sync(&matches)
    }

    /// Process every match in order.
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures; per-match problems are in the
    /// report.
    pub fn sync(&self, matches: &MatchSet) -> Result<SyncReport> {
        let mut report = SyncReport::default();
        for template_match in matches {
            self.sync_one(template_match, &mut report)?;
        }
        tracing::debug!(%report, "Sync finished");
        Ok(report)
    }

    fn sync_one(&self, template_match: &TemplateMatch, report: &mut SyncReport) -> Result<()> {
        let template = template_match.template();
        let target = template_match.target();

        if !template.is_file() {
            tracing::error!(template = %template, "Template path is not a valid file");
            report.fail(
                template_match,
                FailureKind::InvalidTemplate,
                format!("Template path is not a valid file: {template}"),
            );
            return Ok(());
        }

        let mut created_dir = false;
        if let Some(parent) = target.parent()
            && !parent.exists()
        {
            if !self.options.mkdirs {
                tracing::error!(directory = %parent, target = %target, "Directory does not exist");
                report.fail(
                    template_match,
                    FailureKind::MissingDirectory,
                    format!("Directory does not exist: {parent}"),
                );
                return Ok(());
            }
            io::create_dir_all(&parent)?;
            tracing::info!(directory = %parent, "Created directory");
            created_dir = true;
        }

        // A freshly created directory cannot hold the target yet
        if !created_dir && self.options.use_mtime && is_up_to_date(target, [template])? {
            tracing::info!(target = %target, "File is up to date");
            report.up_to_date.push(target.clone());
            return Ok(());
        }

        let source = io::read_text(template)?;
        let rendered = match self.renderer.render(template, &source, self.config.data()) {
            Ok(rendered) => rendered,
            Err(Error::Render { message, .. }) => {
                tracing::error!(template = %template, error = %message, "Failed to render template");
                report.fail(
                    template_match,
                    FailureKind::Render,
                    format!("Failed to render {template}: {message}"),
                );
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let existing = io::read_text_if_exists(target)?;
        if existing.as_deref() == Some(rendered.as_str()) {
            io::touch(target)?;
            tracing::info!(target = %target, "File is up to date");
            report.touched.push(target.clone());
        } else {
            io::write_text(target, &rendered)?;
            tracing::info!(target = %target, template = %template, "Wrote file");
            report.written.push(target.clone());
        }

        Ok(())
    }
}
