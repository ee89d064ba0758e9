//! Content fingerprints.
//!
//! Fingerprints have the form `sha256:<hex>` and are only ever compared
//! for equality.

use sha2::{Digest, Sha256};

const PREFIX: &str = "sha256:";

/// Fingerprint of raw bytes.
pub fn compute_bytes_checksum(content: &[u8]) -> String {
    format!("{PREFIX}{:x}", Sha256::digest(content))
}

pub fn compute_content_checksum(content: &str) -> String {
    compute_bytes_checksum(content.as_bytes())
}
