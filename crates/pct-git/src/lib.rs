//! Git integration for pre-commit-templates
//!
//! The generator only needs one thing from git: the top-level directory of
//! the work tree it runs in.

pub mod error;
pub mod root;

pub use error::{Error, Result};
pub use root::{current_root, discover_root};
