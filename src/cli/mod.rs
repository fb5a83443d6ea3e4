//! CLI argument definitions

pub mod config;
pub mod logging;

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// burrow - turns tagged markdown notes into self-contained content bundles
#[derive(Parser, Debug)]
#[command(name = "burrow", version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the source notes (.md files)
    #[arg(long, value_name = "PATH")]
    pub notes_dir: Option<PathBuf>,

    /// Directory where embedded attachments are stored
    #[arg(long, value_name = "PATH")]
    pub attachments_dir: Option<PathBuf>,

    /// Target directory for the generated content bundles
    #[arg(long, value_name = "PATH")]
    pub bundles_dir: Option<PathBuf>,

    /// Tag a note must carry to be converted [default: blog]
    #[arg(long, value_name = "TAG")]
    pub filter_tag: Option<String>,

    /// Remove the filter tag from the converted note's tag list
    #[arg(long)]
    pub remove_filter_tag: bool,

    /// Subdirectory of the notes directory to skip (can be repeated)
    #[arg(long = "exclude-dir", value_name = "NAME", action = ArgAction::Append)]
    pub exclude_dirs: Vec<String>,

    /// Minimum log severity: debug, info, warning, error [default: info]
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}
