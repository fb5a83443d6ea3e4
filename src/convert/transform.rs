//! The per-note conversion pipeline.

use anyhow::{Context, Result};
use chrono::{Local, SecondsFormat};
use serde_yaml::Value;
use std::path::Path;
use tracing::{debug, info, warn};

use super::{attachments, links};
use crate::cli::config::Config;
use crate::domain::TagList;
use crate::infra::{frontmatter, write_note};

/// Terminal state of one note's pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A bundle was written for the note.
    Bundled,
    /// The note produced no output.
    Skipped(SkipReason),
}

/// Why a note was skipped. Skips are logged, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The metadata block was present but unparsable.
    Frontmatter,
    /// The metadata has no `tags` key.
    NoTags,
    /// The tag list does not contain the filter tag.
    TagMismatch,
}

/// Runs one note through the pipeline:
/// read, parse metadata, filter by tag, mutate tags, default title/date,
/// create the bundle directory, rewrite attachments, normalize links,
/// reassemble, write.
///
/// # Errors
///
/// Skips are [`Outcome::Skipped`], not errors. An error is returned only for
/// hard I/O failures (reading the source note, creating the bundle
/// directory, writing the note file); those indicate environment problems
/// and abort the whole run.
pub fn process_note(config: &Config, path: &Path) -> Result<Outcome> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read note {}", path.display()))?;

    let (mut metadata, body) = match frontmatter::parse(&raw) {
        Ok(parts) => parts,
        Err(err) => {
            warn!(
                "failed to parse front matter for {}: {err}; skipping",
                path.display()
            );
            return Ok(Outcome::Skipped(SkipReason::Frontmatter));
        }
    };

    let stem = note_stem(path);

    let Some(raw_tags) = metadata.get("tags") else {
        debug!("skipping '{stem}': no tags");
        return Ok(Outcome::Skipped(SkipReason::NoTags));
    };
    let tags = TagList::from_value(raw_tags);
    if !tags.contains(&config.filter_tag) {
        debug!("skipping '{stem}': no '{}' tag", config.filter_tag);
        return Ok(Outcome::Skipped(SkipReason::TagMismatch));
    }
    info!("bundling '{stem}' (found tag '{}')", config.filter_tag);

    if config.remove_filter_tag {
        let remaining = tags.without(&config.filter_tag);
        if remaining.is_empty() {
            metadata.remove("tags");
        } else {
            metadata.insert("tags".to_string(), remaining.to_value());
        }
        debug!("removed tag '{}' from the tag list", config.filter_tag);
    }

    if !metadata.contains_key("title") {
        debug!("'title' missing; defaulting to '{stem}'");
        metadata.insert("title".to_string(), Value::String(stem.clone()));
    }
    if !metadata.contains_key("date") {
        let date = Local::now().to_rfc3339_opts(SecondsFormat::Secs, false);
        debug!("'date' missing; defaulting to '{date}'");
        metadata.insert("date".to_string(), Value::String(date));
    }

    let bundle_dir = config.bundles_dir.join(&stem);
    std::fs::create_dir_all(&bundle_dir).with_context(|| {
        format!("failed to create bundle directory {}", bundle_dir.display())
    })?;
    debug!("bundle directory ready: {}", bundle_dir.display());

    let body = attachments::rewrite(&body, &config.attachments_dir, &bundle_dir);
    let body = links::normalize(&body);

    let content = frontmatter::serialize(&metadata, &body);
    let index_path = bundle_dir.join("index.md");
    write_note(&index_path, &content)
        .with_context(|| format!("failed to write note {}", index_path.display()))?;
    info!("note written to {}", index_path.display());

    Ok(Outcome::Bundled)
}

fn note_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
