//! Tag extraction from the two shapes `tags` takes in note front matter.

use serde_yaml::Value;

/// The raw `tags` value as it appears on disk.
///
/// Notes carry tags either as a YAML sequence (`tags: [blog, go]`) or as a
/// single comma-separated string (`tags: blog, go`). Both shapes are
/// normalized into a [`TagList`] immediately after parsing; only the
/// canonical form flows through the rest of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawTags<'a> {
    /// Sequence form. Non-string elements are dropped during normalization.
    List(&'a [Value]),
    /// Comma-separated string form. Each piece is trimmed.
    CommaSeparated(&'a str),
}

impl<'a> RawTags<'a> {
    /// Classifies a front-matter value.
    ///
    /// Returns `None` for any shape other than a sequence or a string; a note
    /// with such a `tags` value can never match a filter tag.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Sequence(seq) => Some(Self::List(seq)),
            Value::String(s) => Some(Self::CommaSeparated(s)),
            _ => None,
        }
    }

    /// Normalizes into the canonical ordered tag list.
    pub fn canonicalize(self) -> TagList {
        let tags = match self {
            Self::List(seq) => seq
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            Self::CommaSeparated(s) => s.split(',').map(|t| t.trim().to_string()).collect(),
        };
        TagList(tags)
    }
}

/// Canonical ordered tag list, preserving the on-disk order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagList(Vec<String>);

impl TagList {
    /// Builds the canonical list from a raw front-matter `tags` value.
    ///
    /// Unrecognized shapes yield an empty list.
    pub fn from_value(value: &Value) -> Self {
        RawTags::from_value(value)
            .map(RawTags::canonicalize)
            .unwrap_or_default()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// Returns a copy with every occurrence of `tag` removed.
    pub fn without(&self, tag: &str) -> Self {
        Self(self.0.iter().filter(|t| *t != tag).cloned().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The write-side representation: always a YAML sequence of strings.
    pub fn to_value(&self) -> Value {
        Value::Sequence(self.0.iter().cloned().map(Value::String).collect())
    }
}
