//! Content digests with domain separation.
//!
//! Scenario sets and benchmark reports are bound to the exact boards they were
//! computed from by a SHA-256 digest. Every digest is taken over
//! `domain_prefix || data`, where the prefix is a null-terminated constant,
//! so digests of different artifact kinds can never collide.

use sha2::{Digest, Sha256};

/// A `sha256:<hex>` digest string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Domain prefix for a single board's identity bytes.
pub const DOMAIN_BOARD: &[u8] = b"OCTILE::BOARD::V1\0";

/// Domain prefix for an ordered scenario set.
pub const DOMAIN_SCENARIO_SET: &[u8] = b"OCTILE::SCENARIO_SET::V1\0";

/// Compute the canonical hash of a byte slice with domain separation.
///
/// Result format: `"sha256:<hex_digest>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    ContentHash(format!("sha256:{}", hex::encode(hasher.finalize())))
}
