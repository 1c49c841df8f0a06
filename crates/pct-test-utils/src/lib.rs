//! Shared test utilities for the pre-commit-templates workspace.
//!
//! A dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`]: git repository fixtures
//! - [`repo`]: [`repo::TestRepo`] builder for template/target scenarios

pub mod git;
pub mod repo;
