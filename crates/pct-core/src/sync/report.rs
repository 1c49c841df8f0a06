//! Outcome of a sync run

use std::fmt;

use pct_fs::NormalizedPath;

use crate::matching::TemplateMatch;

/// Why a single match could not be processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The template path is not a regular file
    InvalidTemplate,
    /// The target's directory is missing and may not be created
    MissingDirectory,
    /// The template engine rejected the template
    Render,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTemplate => write!(f, "invalid template"),
            Self::MissingDirectory => write!(f, "missing directory"),
            Self::Render => write!(f, "render failed"),
        }
    }
}

/// A match the engine gave up on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncFailure {
    pub template_match: TemplateMatch,
    pub kind: FailureKind,
    /// Human-readable description
    pub message: String,
}

/// Report from a sync run
///
/// Every match lands in exactly one list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Targets whose content was (re)written
    pub written: Vec<NormalizedPath>,
    /// Targets whose rendered content matched and were only touched
    pub touched: Vec<NormalizedPath>,
    /// Targets skipped because they were newer than their template
    pub up_to_date: Vec<NormalizedPath>,
    /// Matches that failed
    pub failures: Vec<SyncFailure>,
}

impl SyncReport {
    /// Whether no match failed
    pub fn success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Record a failed match
    pub fn fail(&mut self, template_match: &TemplateMatch, kind: FailureKind, message: String) {
        self.failures.push(SyncFailure {
            template_match: template_match.clone(),
            kind,
            message,
        });
    }

    /// Total number of matches accounted for
    pub fn len(&self) -> usize {
        self.written.len() + self.touched.len() + self.up_to_date.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} written, {} touched, {} up to date, {} failed",
            self.written.len(),
            self.touched.len(),
            self.up_to_date.len(),
            self.failures.len()
        )
    }
}
