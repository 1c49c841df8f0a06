//! Regenerating targets from templates
//!
//! This module provides:
//! - **engine**: the [`SyncEngine`] that walks a match set and writes targets
//! - **report**: what happened to each match

mod engine;
mod report;

pub use engine::{SyncEngine, SyncOptions};
pub use report::{FailureKind, SyncFailure, SyncReport};
