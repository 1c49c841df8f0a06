//! Filesystem layer for pre-commit-templates
//!
//! Provides lexically normalized paths and the small set of file operations
//! the generator needs: text reads, in-place full-replace writes, modification
//! times and touching.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use path::NormalizedPath;
