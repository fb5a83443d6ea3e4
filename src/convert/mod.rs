//! The note-to-bundle conversion pipeline.

pub mod attachments;
pub mod links;
pub mod transform;

pub use transform::{Outcome, SkipReason, process_note};

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::config::Config;
use crate::infra::scan_notes_directory;

/// Walks the notes tree and runs every candidate note through the pipeline.
///
/// Notes are processed one at a time in sorted traversal order; a skipped
/// note never affects the rest of the run, while a hard I/O failure aborts
/// it.
pub fn run(config: &Config) -> Result<()> {
    info!("scanning notes in {}", config.notes_dir.display());
    if !config.exclude_dirs.is_empty() {
        info!("excluding directories: {}", config.exclude_dirs.join(", "));
    }

    let notes = scan_notes_directory(&config.notes_dir, &config.exclude_dirs)?;

    let mut bundled = 0usize;
    let mut skipped = 0usize;
    for relative in notes {
        debug!("checking note: {}", relative.display());
        match process_note(config, &config.notes_dir.join(&relative))? {
            Outcome::Bundled => bundled += 1,
            Outcome::Skipped(_) => skipped += 1,
        }
    }

    info!("processing complete: {bundled} note(s) bundled, {skipped} skipped");
    Ok(())
}
