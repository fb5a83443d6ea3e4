//! Internal cross-note link normalization.

use regex::{Captures, Regex};
use std::cell::Cell;
use tracing::debug;

/// Replaces `[[display text]]` link markers with their display text.
///
/// The attachment grammar is a strict prefix of the link grammar, so the
/// pattern matches an optional leading `!` and passes those occurrences
/// through unchanged: attachment rewriting runs first, and any attachment
/// marker that survived it (missing source, copy failure) keeps its
/// original form here.
///
/// Link targets are not validated; a link to a renamed or deleted note
/// still normalizes to its display text.
pub fn normalize(body: &str) -> String {
    let link_re = Regex::new(r"!?\[\[(.*?)\]\]").unwrap();

    let normalized = Cell::new(0usize);
    let result = link_re.replace_all(body, |caps: &Captures| {
        if caps[0].starts_with('!') {
            caps[0].to_string()
        } else {
            normalized.set(normalized.get() + 1);
            caps[1].to_string()
        }
    });

    if normalized.get() > 0 {
        debug!("normalized {} internal link(s)", normalized.get());
    }

    result.into_owned()
}
