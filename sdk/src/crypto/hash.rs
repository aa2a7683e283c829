//! # Hashing Utilities
//!
//! SHA-256 is the only hash the ledger uses on the client side: once over a
//! public key to derive an address, twice over every encoded key for the
//! trailing checksum, and once over a serialized transaction for its hash.

use sha2::{Digest, Sha256};

use crate::config::CHECKSUM_LENGTH;

/// Compute the SHA-256 hash of the input data.
///
/// # Example
///
/// ```
/// use bumo_sdk::crypto::sha256;
///
/// let hash = sha256(b"BUMO");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute `SHA-256(SHA-256(data))`.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// The 4-byte checksum appended to every encoded key and address: the
/// leading bytes of the double SHA-256 of everything before it.
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let digest = double_sha256(data);
    let mut out = [0u8; CHECKSUM_LENGTH];
    out.copy_from_slice(&digest[..CHECKSUM_LENGTH]);
    out
}
