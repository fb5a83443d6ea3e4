//! Front-matter codec, content hashing, file I/O

pub mod content_hash;
pub mod frontmatter;
pub mod fs;

pub use content_hash::ContentHash;
pub use frontmatter::{Metadata, ParseError, parse, serialize};
pub use fs::{FsError, scan_notes_directory, write_note};
