//! Migration checksums
//!
//! SHA-256 over the raw SQL text, hex-encoded

use sha2::{Digest, Sha256};

pub fn compute_checksum(sql: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sql.as_bytes());
    hex::encode(hasher.finalize())
}
