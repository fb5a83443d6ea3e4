//! Front-matter codec for the metadata block at the top of a note.

use regex::Regex;
use serde_yaml::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Note metadata: property name to YAML value.
///
/// A `BTreeMap` keeps serialization deterministic; the original key order is
/// not preserved on rewrite.
pub type Metadata = BTreeMap<String, Value>;

/// Error for a present-but-unparsable metadata block.
#[derive(Debug, Error)]
#[error("invalid YAML in front matter: {0}")]
pub struct ParseError(#[from] serde_yaml::Error);

/// Splits a note into its metadata map and body.
///
/// The metadata block is a `---` line at the very start, a YAML mapping
/// payload, and a closing `---` line. Trailing whitespace on the delimiter
/// lines is tolerated. The body is the text after the block, with
/// surrounding whitespace trimmed.
///
/// A note without a metadata block is not an error: the map is empty and the
/// entire input is the body. An empty or whitespace-only payload also yields
/// an empty map, never an absent one.
///
/// # Errors
///
/// Returns `ParseError` when a block is present but its payload is not a
/// valid YAML mapping. Callers treat this as fatal for the note, not for
/// the run.
pub fn parse(content: &str) -> Result<(Metadata, String), ParseError> {
    let block_re = Regex::new(r"(?s)\A---[ \t]*\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n|\z)").unwrap();

    let Some(caps) = block_re.captures(content) else {
        return Ok((Metadata::new(), content.to_string()));
    };

    let payload = caps.get(1).unwrap().as_str();
    let body = content[caps.get(0).unwrap().end()..].trim().to_string();

    let metadata = serde_yaml::from_str::<Option<Metadata>>(payload)?.unwrap_or_default();

    Ok((metadata, body))
}

/// Reassembles a note from its metadata map and body.
///
/// Emits the delimited YAML block, one blank line, then the body verbatim.
/// Keys are written in sorted order.
pub fn serialize(metadata: &Metadata, body: &str) -> String {
    let yaml = serde_yaml::to_string(metadata).expect("metadata serialization is infallible");
    format!("---\n{yaml}---\n\n{body}")
}
