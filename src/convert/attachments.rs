//! Embedded-attachment rewriting with content-addressed copies.

use regex::Regex;
use std::path::Path;
use tracing::{debug, warn};

use crate::infra::ContentHash;

/// Finds `![[name]]` markers in a note body, copies each referenced file
/// from `attachments_dir` into `bundle_dir` under its content-addressed
/// name, and rewrites the marker to `![](<hash><ext>)`.
///
/// A marker whose source is missing or cannot be copied is logged at WARN
/// and left untouched; the rest of the body still converts. Markers with
/// byte-identical sources converge on a single destination file.
pub fn rewrite(body: &str, attachments_dir: &Path, bundle_dir: &Path) -> String {
    let marker_re = Regex::new(r"!\[\[(.*?)\]\]").unwrap();

    let markers: Vec<(String, String)> = marker_re
        .captures_iter(body)
        .map(|caps| (caps[0].to_string(), caps[1].to_string()))
        .collect();

    if markers.is_empty() {
        return body.to_string();
    }

    debug!("rewriting {} attachment marker(s)", markers.len());
    let mut content = body.to_string();

    for (marker, filename) in markers {
        let source = attachments_dir.join(&filename);
        if !source.exists() {
            warn!(
                "attachment '{}' not found in {}",
                filename,
                attachments_dir.display()
            );
            continue;
        }

        let bytes = match std::fs::read(&source) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("failed to read attachment '{filename}': {err}");
                continue;
            }
        };

        let destination_name = content_addressed_name(&filename, &bytes);
        let destination = bundle_dir.join(&destination_name);
        if let Err(err) = std::fs::write(&destination, &bytes) {
            warn!("failed to copy attachment '{filename}' -> '{destination_name}': {err}");
            continue;
        }
        debug!("copied attachment '{filename}' -> '{destination_name}'");

        content = content.replace(&marker, &format!("![]({destination_name})"));
    }

    content
}

/// `<sha256 hex><original extension>`; no extension when the source has none.
fn content_addressed_name(filename: &str, bytes: &[u8]) -> String {
    let hash = ContentHash::compute(bytes);
    match Path::new(filename).extension() {
        Some(ext) => format!("{hash}.{}", ext.to_string_lossy()),
        None => hash.to_string(),
    }
}
