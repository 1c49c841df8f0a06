//! Core of pre-commit-templates
//!
//! Given the paths a commit touches, this crate works out which templates
//! need to be rendered into which targets and brings those targets up to
//! date:
//!
//! - **config**: the `[tool.pre_commit_templates]` settings and the resolved
//!   template and target roots
//! - **matching**: [`PathResolver`] and the frozen [`MatchSet`]
//! - **staleness**: modification-time comparison of targets and templates
//! - **render**: the [`Renderer`] seam and its Handlebars implementation
//! - **sync**: the [`SyncEngine`] that renders, compares and writes
//!
//! ```text
//! paths -> MatchSet -> SyncEngine (staleness -> render -> compare -> write)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use pct_core::{Config, SyncEngine, SyncOptions};
//!
//! let config = Config::discover()?;
//! let engine = SyncEngine::new(config, SyncOptions::default());
//! let report = engine.run(["templates/README.md"])?;
//! assert!(report.success());
//! ```

pub mod config;
pub mod error;
pub mod matching;
pub mod render;
pub mod staleness;
pub mod sync;

pub use config::{Config, Settings};
pub use error::{Error, Result};
pub use matching::{
    Classification, MatchSet, PathResolver, SkipReason, TemplateMatch, get_matching_files,
};
pub use render::{HandlebarsRenderer, Renderer};
pub use staleness::is_up_to_date;
pub use sync::{FailureKind, SyncEngine, SyncFailure, SyncOptions, SyncReport};
