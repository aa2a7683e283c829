//! Byte-level framing shared by addresses and keys.
//!
//! ```text
//! version prefix || payload || checksum(4) = SHA256(SHA256(prefix || payload))[..4]
//! ```
//!
//! Addresses and private keys are then written in base58 with the ledger's
//! alphabet; public keys in lowercase hex.

use bs58::Alphabet;

use crate::config::{BASE58_ALPHABET, CHECKSUM_LENGTH};
use crate::crypto::hash::checksum;

static LEDGER_ALPHABET: Alphabet = Alphabet::new_unwrap(BASE58_ALPHABET);

/// Appends the checksum to `prefix || payload`.
pub(crate) fn frame(prefix: &[u8], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(prefix.len() + payload.len() + CHECKSUM_LENGTH);
    out.extend_from_slice(prefix);
    out.extend_from_slice(payload);
    let sum = checksum(&out);
    out.extend_from_slice(&sum);
    out
}

/// Checks length, then prefix, then checksum, and returns the payload.
///
/// The prefix is compared before any hashing so that a value of the wrong
/// class is turned away without touching its checksum.
pub(crate) fn unframe<'a>(bytes: &'a [u8], prefix: &[u8], total_len: usize) -> Option<&'a [u8]> {
    if bytes.len() != total_len || !bytes.starts_with(prefix) {
        return None;
    }
    let (body, sum) = bytes.split_at(total_len - CHECKSUM_LENGTH);
    if checksum(body) != sum {
        return None;
    }
    Some(&body[prefix.len()..])
}

pub(crate) fn to_base58(bytes: &[u8]) -> String {
    bs58::encode(bytes).with_alphabet(&LEDGER_ALPHABET).into_string()
}

pub(crate) fn from_base58(text: &str) -> Option<Vec<u8>> {
    bs58::decode(text)
        .with_alphabet(&LEDGER_ALPHABET)
        .into_vec()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_unframe_roundtrip() {
        let framed = frame(&[0xAA, 0xBB], b"payload");
        assert_eq!(framed.len(), 2 + 7 + 4);
        assert_eq!(unframe(&framed, &[0xAA, 0xBB], framed.len()), Some(&b"payload"[..]));
    }

    #[test]
    fn test_unframe_rejects_wrong_prefix_length_and_checksum() {
        let framed = frame(&[0xAA, 0xBB], b"payload");
        assert!(unframe(&framed, &[0xAA, 0xBC], framed.len()).is_none());
        assert!(unframe(&framed, &[0xAA, 0xBB], framed.len() + 1).is_none());

        let mut corrupted = framed.clone();
        let last = corrupted.len() - 1;
        corrupted[last] ^= 0xFF;
        assert!(unframe(&corrupted, &[0xAA, 0xBB], corrupted.len()).is_none());
    }

    #[test]
    fn test_ledger_alphabet_swaps_b_and_u() {
        assert_eq!(to_base58(&[10]), "b");
        assert_eq!(to_base58(&[33]), "a");
        assert_eq!(to_base58(&[34]), "B");
        assert_eq!(to_base58(&[27]), "u");
        assert_eq!(bs58::encode([10u8]).into_string(), "B");
        assert_eq!(from_base58("b").unwrap(), vec![10]);
    }

    #[test]
    fn test_from_base58_rejects_foreign_symbols() {
        assert!(from_base58("0OIl").is_none());
    }
}
