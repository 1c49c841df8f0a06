//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Render templates into their targets for the files a commit touches
#[derive(Parser, Debug)]
#[command(name = "pre-commit-templates")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Updated files, relative to the repository root
    pub files: Vec<PathBuf>,

    /// Repository root (defaults to the top level of the current git work tree)
    #[arg(short = 'R', long)]
    pub root: Option<PathBuf>,

    /// Create missing target directories (default)
    #[arg(short = 'm', long, overrides_with = "no_mkdirs")]
    pub mkdirs: bool,

    /// Fail targets whose directory does not exist
    #[arg(long, overrides_with = "mkdirs")]
    pub no_mkdirs: bool,

    /// Skip targets newer than their template (default)
    #[arg(short = 'M', long, overrides_with = "no_mtime")]
    pub mtime: bool,

    /// Render every matched template regardless of modification times
    #[arg(long, overrides_with = "mtime")]
    pub no_mtime: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether missing target directories are created; the last flag wins.
    pub fn mkdirs(&self) -> bool {
        !self.no_mkdirs
    }

    /// Whether the modification-time check is used; the last flag wins.
    pub fn use_mtime(&self) -> bool {
        !self.no_mtime
    }
}
