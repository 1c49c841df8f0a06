//! Mapping updated paths to template/target pairs
//!
//! Every updated path is classified against the template root and the target
//! root. A path under the template root always produces a pair; a path under
//! the target root only does if its template exists; anything else is
//! skipped. When the roots overlap, template membership wins.

use std::borrow::Borrow;
use std::ops::Deref;

use pct_fs::NormalizedPath;

use crate::config::Config;

/// A template and the target it renders into
///
/// Both paths are absolute and normalized, and share the same suffix
/// relative to their roots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateMatch {
    template: NormalizedPath,
    target: NormalizedPath,
}

impl TemplateMatch {
    pub fn new(template: NormalizedPath, target: NormalizedPath) -> Self {
        Self { template, target }
    }

    pub fn template(&self) -> &NormalizedPath {
        &self.template
    }

    pub fn target(&self) -> &NormalizedPath {
        &self.target
    }
}

/// Why a path produced no match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The path is under neither root
    Outside,
    /// The path is under the target root but has no template
    NoTemplate,
}

/// Outcome of classifying one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Match(TemplateMatch),
    Skip(SkipReason),
}

/// Classifies paths against a template root and a target root
#[derive(Debug, Clone)]
pub struct PathResolver {
    template_root: NormalizedPath,
    target_root: NormalizedPath,
}

impl PathResolver {
    pub fn new(template_root: NormalizedPath, target_root: NormalizedPath) -> Self {
        Self {
            template_root,
            target_root,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.template_root().clone(), config.target_root().clone())
    }

    /// Classify an absolute, normalized path.
    ///
    /// Only a path under the target root touches the filesystem, to check
    /// whether its template exists.
    pub fn classify(&self, path: &NormalizedPath) -> Classification {
        if let Some(relative) = path.strip_prefix(&self.template_root) {
            let target = self.target_root.join(relative);
            return Classification::Match(TemplateMatch::new(path.clone(), target));
        }

        if let Some(relative) = path.strip_prefix(&self.target_root) {
            let template = self.template_root.join(relative);
            if template.exists() {
                return Classification::Match(TemplateMatch::new(template, path.clone()));
            }
            return Classification::Skip(SkipReason::NoTemplate);
        }

        Classification::Skip(SkipReason::Outside)
    }
}

/// Ordered, frozen collection of template matches
///
/// Built once from the updated paths and never changed afterwards; there is
/// no way to add, remove or reorder entries.
///
/// ```compile_fail
/// use pct_core::MatchSet;
///
/// let mut set = MatchSet::default();
/// set.push(todo!());
/// ```
///
/// ```compile_fail
/// use pct_core::MatchSet;
///
/// let mut set = MatchSet::default();
/// set.swap(0, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    matches: Box<[TemplateMatch]>,
}

impl MatchSet {
    /// Classify `updated_paths` in order and keep every match.
    ///
    /// Input order is preserved and duplicates are kept. Paths outside both
    /// trees are logged at warn level, target files without a template at
    /// info level.
    pub fn build<I>(resolver: &PathResolver, updated_paths: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<NormalizedPath>,
    {
        let mut matches = Vec::new();

        for path in updated_paths {
            let path = path.borrow();
            match resolver.classify(path) {
                Classification::Match(template_match) => {
                    tracing::debug!(
                        template = %template_match.template,
                        target = %template_match.target,
                        "Matched"
                    );
                    matches.push(template_match);
                }
                Classification::Skip(SkipReason::Outside) => {
                    tracing::warn!(
                        path = %path,
                        "Path is not relative to either the template or the target directory"
                    );
                }
                Classification::Skip(SkipReason::NoTemplate) => {
                    tracing::info!(path = %path, "No template for target, skipping");
                }
            }
        }

        Self {
            matches: matches.into_boxed_slice(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TemplateMatch> {
        self.matches.iter()
    }
}

impl Deref for MatchSet {
    type Target = [TemplateMatch];

    fn deref(&self) -> &Self::Target {
        &self.matches
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a TemplateMatch;
    type IntoIter = std::slice::Iter<'a, TemplateMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

impl FromIterator<TemplateMatch> for MatchSet {
    fn from_iter<I: IntoIterator<Item = TemplateMatch>>(iter: I) -> Self {
        Self {
            matches: iter.into_iter().collect(),
        }
    }
}

/// Build the match set for `updated_paths` in one call.
pub fn get_matching_files<I>(
    template_root: &NormalizedPath,
    target_root: &NormalizedPath,
    updated_paths: I,
) -> MatchSet
where
    I: IntoIterator,
    I::Item: Borrow<NormalizedPath>,
{
    let resolver = PathResolver::new(template_root.clone(), target_root.clone());
    MatchSet::build(&resolver, updated_paths)
}
