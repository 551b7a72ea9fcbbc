//! Hashing utilities for admin key checks.

use sha2::{Digest, Sha256};

/// Computes SHA-256 hash of the input and returns it as a hex string.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compares a presented secret against an expected one.
///
/// Both sides are hashed first so the comparison always runs over two
/// 64-character digests regardless of the presented length.
pub fn secrets_match(presented: &str, expected: &str) -> bool {
    let presented = sha256_hex(presented);
    let expected = sha256_hex(expected);

    presented
        .bytes()
        .zip(expected.bytes())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
