//! Core types: tag-list representations

mod tags;

pub use tags::{RawTags, TagList};
