//! Content hash computation for attachment addressing.

use sha2::{Digest, Sha256};
use std::fmt;

/// SHA256 hash of file content, as a 64-character lowercase hex string.
///
/// Identical bytes always hash to the identical string regardless of the
/// original filename, so attachments named after their hash deduplicate
/// naturally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentHash {
    hex: String,
}

impl ContentHash {
    /// Computes a SHA256 hash of the given bytes.
    pub fn compute(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        let hex = format!("{:x}", hasher.finalize());
        Self { hex }
    }

    /// Returns the hash as a 64-character lowercase hex string.
    pub fn as_str(&self) -> &str {
        &self.hex
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex)
    }
}
