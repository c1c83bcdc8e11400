//! Content hashing.

use sha2::{Digest, Sha256};

/// Returns the SHA-256 digest of `text` as 64 lowercase hex characters.
#[must_use]
pub fn hash(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}
