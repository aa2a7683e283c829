//! Encoding and decoding of the ledger's three textual identity formats.
//!
//! | form        | prefix                  | payload                       | text   |
//! |-------------|-------------------------|-------------------------------|--------|
//! | address     | `01 56 01`              | `SHA256(pubkey)[12..32]`      | base58 |
//! | public key  | `B0 01`                 | raw Ed25519 public key        | hex    |
//! | private key | `DA 37 9F 01`           | Ed25519 seed, then `00`       | base58 |
//!
//! All three end in a 4-byte double-SHA-256 checksum.

use std::fmt;

use serde::Serialize;

use crate::config::{
    ADDRESS_HASH_LENGTH, ADDRESS_HASH_OFFSET, ADDRESS_LENGTH, ADDRESS_PREFIX,
    PRIVATE_KEY_LENGTH, PRIVATE_KEY_PREFIX, PRIVATE_KEY_TERMINATOR, PUBLIC_KEY_LENGTH,
    PUBLIC_KEY_PREFIX, RAW_PUBLIC_KEY_LENGTH, SEED_LENGTH,
};
use crate::crypto::hash::sha256;
use crate::crypto::keys::KeyPair;
use crate::error::{Result, SdkError};

use super::encoding::{frame, from_base58, to_base58, unframe};

/// The three encodings of a freshly generated key pair.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct EncodedKeys {
    pub public_key: String,
    pub private_key: String,
    pub address: String,
}

impl fmt::Debug for EncodedKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedKeys")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .field("address", &self.address)
            .finish()
    }
}

/// Generates a key pair from 32 bytes of OS randomness and encodes it.
pub fn generate() -> Result<EncodedKeys> {
    let keypair = KeyPair::generate()?;
    Ok(encode_keypair(&keypair))
}

/// Encodes every form of an existing key pair.
pub fn encode_keypair(keypair: &KeyPair) -> EncodedKeys {
    let raw_public_key = keypair.public_key_bytes();
    EncodedKeys {
        public_key: encode_public_key(&raw_public_key),
        private_key: encode_private_key(&keypair.seed()),
        address: encode_address(&raw_public_key),
    }
}

/// Re-derives the encoded public key that belongs to an encoded private key.
pub fn public_key_from_private_key(private_key: &str) -> Result<String> {
    let keypair = decode_private_key(private_key)?;
    Ok(encode_public_key(&keypair.public_key_bytes()))
}

/// Derives the address of an encoded public key.
pub fn address_from_public_key(public_key: &str) -> Result<String> {
    let raw_public_key = decode_public_key(public_key)?;
    Ok(encode_address(&raw_public_key))
}

/// `true` iff `text` is a well-formed address with a valid checksum.
pub fn is_valid_address(text: &str) -> bool {
    from_base58(text)
        .map(|bytes| unframe(&bytes, &ADDRESS_PREFIX, ADDRESS_LENGTH).is_some())
        .unwrap_or(false)
}

/// `true` iff `text` is a well-formed public key with a valid checksum.
pub fn is_valid_public_key(text: &str) -> bool {
    decode_public_key(text).is_ok()
}

/// `true` iff `text` is a well-formed private key with a valid checksum.
pub fn is_valid_private_key(text: &str) -> bool {
    decode_private_seed(text).is_some()
}

/// Decodes an encoded private key into its key pair.
pub fn decode_private_key(text: &str) -> Result<KeyPair> {
    let seed = decode_private_seed(text).ok_or(SdkError::InvalidPrivateKey)?;
    Ok(KeyPair::from_seed(&seed))
}

/// Decodes an encoded public key into its raw 32 bytes.
pub fn decode_public_key(text: &str) -> Result<[u8; RAW_PUBLIC_KEY_LENGTH]> {
    let bytes = hex::decode(text).map_err(|_| SdkError::InvalidPublicKey)?;
    let payload =
        unframe(&bytes, &PUBLIC_KEY_PREFIX, PUBLIC_KEY_LENGTH).ok_or(SdkError::InvalidPublicKey)?;
    payload.try_into().map_err(|_| SdkError::InvalidPublicKey)
}

/// Encodes a raw public key as `b001...` hex.
pub fn encode_public_key(raw_public_key: &[u8; RAW_PUBLIC_KEY_LENGTH]) -> String {
    hex::encode(frame(&PUBLIC_KEY_PREFIX, raw_public_key))
}

/// Encodes a raw public key's address.
pub fn encode_address(raw_public_key: &[u8; RAW_PUBLIC_KEY_LENGTH]) -> String {
    let digest = sha256(raw_public_key);
    let hash_slice = &digest[ADDRESS_HASH_OFFSET..ADDRESS_HASH_OFFSET + ADDRESS_HASH_LENGTH];
    to_base58(&frame(&ADDRESS_PREFIX, hash_slice))
}

fn encode_private_key(seed: &[u8; SEED_LENGTH]) -> String {
    let mut payload = [0u8; SEED_LENGTH + 1];
    payload[..SEED_LENGTH].copy_from_slice(seed);
    payload[SEED_LENGTH] = PRIVATE_KEY_TERMINATOR;
    to_base58(&frame(&PRIVATE_KEY_PREFIX, &payload))
}

fn decode_private_seed(text: &str) -> Option<[u8; SEED_LENGTH]> {
    let bytes = from_base58(text)?;
    if bytes.len() != PRIVATE_KEY_LENGTH
        || !bytes.starts_with(&PRIVATE_KEY_PREFIX)
        || bytes[PRIVATE_KEY_PREFIX.len() + SEED_LENGTH] != PRIVATE_KEY_TERMINATOR
    {
        return None;
    }
    let payload = unframe(&bytes, &PRIVATE_KEY_PREFIX, PRIVATE_KEY_LENGTH)?;
    payload[..SEED_LENGTH].try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Published alongside the ATP 1.0 issuance demo.
    const PRIVATE_KEY: &str = "privbvCDPhjNmXdZD2p6RWfXhTC3qzpn8REtZtPSu64mMQDMxAJ3f1hu";
    const PUBLIC_KEY: &str =
        "b00191923d929a3ee65c5de3bf84d4cb23204da0675b8426e5d3ad691956bd6629c4f7b68c20";
    const ADDRESS: &str = "buQtjhgK9SakQPYGzoZ3iHodfRvd8qTGoaYd";

    #[test]
    fn test_known_private_key_derivations() {
        assert_eq!(public_key_from_private_key(PRIVATE_KEY).unwrap(), PUBLIC_KEY);
        assert_eq!(address_from_public_key(PUBLIC_KEY).unwrap(), ADDRESS);
    }

    #[test]
    fn test_encode_private_key_roundtrip() {
        let keypair = decode_private_key(PRIVATE_KEY).unwrap();
        assert_eq!(encode_keypair(&keypair).private_key, PRIVATE_KEY);
    }

    #[test]
    fn test_generated_keys_roundtrip() {
        for _ in 0..16 {
            let keys = generate().unwrap();
            assert!(keys.private_key.starts_with("priv"));
            assert!(keys.address.starts_with("bu"));
            assert!(keys.public_key.starts_with("b001"));
            let public_key = public_key_from_private_key(&keys.private_key).unwrap();
            assert_eq!(public_key, keys.public_key);
            assert_eq!(address_from_public_key(&public_key).unwrap(), keys.address);
        }
    }

    #[test]
    fn test_validators_accept_valid_values() {
        assert!(is_valid_address(ADDRESS));
        assert!(is_valid_public_key(PUBLIC_KEY));
        assert!(is_valid_private_key(PRIVATE_KEY));
    }

    #[test]
    fn test_validators_are_idempotent() {
        for text in [ADDRESS, PUBLIC_KEY, PRIVATE_KEY, "", "bu"] {
            assert_eq!(is_valid_address(text), is_valid_address(text));
            assert_eq!(is_valid_public_key(text), is_valid_public_key(text));
            assert_eq!(is_valid_private_key(text), is_valid_private_key(text));
        }
    }

    #[test]
    fn test_cross_type_rejection() {
        assert!(!is_valid_address(PUBLIC_KEY));
        assert!(!is_valid_private_key(PUBLIC_KEY));
        assert!(!is_valid_public_key(ADDRESS));
        assert!(!is_valid_private_key(ADDRESS));
        assert!(!is_valid_address(PRIVATE_KEY));
        assert!(!is_valid_public_key(PRIVATE_KEY));
    }

    #[test]
    fn test_single_byte_flip_breaks_address() {
        let bytes = from_base58(ADDRESS).unwrap();
        for i in 0..bytes.len() {
            let mut flipped = bytes.clone();
            flipped[i] ^= 0x01;
            assert!(!is_valid_address(&to_base58(&flipped)), "byte {i}");
        }
    }

    #[test]
    fn test_single_byte_flip_breaks_public_key() {
        let bytes = hex::decode(PUBLIC_KEY).unwrap();
        for i in 0..bytes.len() {
            let mut flipped = bytes.clone();
            flipped[i] ^= 0x80;
            assert!(!is_valid_public_key(&hex::encode(&flipped)), "byte {i}");
        }
    }

    #[test]
    fn test_single_byte_flip_breaks_private_key() {
        let bytes = from_base58(PRIVATE_KEY).unwrap();
        for i in 0..bytes.len() {
            let mut flipped = bytes.clone();
            flipped[i] ^= 0x10;
            assert!(!is_valid_private_key(&to_base58(&flipped)), "byte {i}");
        }
    }

    #[test]
    fn test_private_key_requires_terminator() {
        let mut payload = [0u8; SEED_LENGTH + 1];
        payload[SEED_LENGTH] = 0x01;
        let text = to_base58(&frame(&PRIVATE_KEY_PREFIX, &payload));
        assert!(!is_valid_private_key(&text));
    }

    #[test]
    fn test_malformed_inputs() {
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("buQtjhgK9SakQPYGzoZ3iHodfRvd8qTGoaY"));
        assert!(!is_valid_address("buQtjhgK9SakQPYGzoZ3iHodfRvd8qTGoaYd0"));
        assert!(!is_valid_public_key("b001"));
        assert!(!is_valid_public_key("xyz"));
        assert_eq!(address_from_public_key("b001"), Err(SdkError::InvalidPublicKey));
        assert_eq!(
            public_key_from_private_key("privbad").unwrap_err(),
            SdkError::InvalidPrivateKey
        );
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let keys = generate().unwrap();
        let rendered = format!("{keys:?}");
        assert!(!rendered.contains(&keys.private_key));
        assert!(rendered.contains(&keys.address));
    }
}
