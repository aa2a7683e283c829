//! # Key Material
//!
//! Ed25519 key pairs derived from a 32-byte seed. The seed is the only
//! secret the ledger's private-key encoding carries, so a [`KeyPair`] is
//! always reconstructible from it.
//!
//! ## Security considerations
//!
//! - Seeds come from the OS RNG (`OsRng`); a failing RNG is reported as
//!   [`SdkError::KeyGeneration`] instead of panicking.
//! - `Debug` prints the public half only.
//! - Key bytes are never logged from this module.

use std::fmt;

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use rand_core::RngCore;

use crate::config::{RAW_PUBLIC_KEY_LENGTH, SEED_LENGTH, SIGNATURE_LENGTH};
use crate::error::{Result, SdkError};

/// An Ed25519 key pair. Exists only in memory for as long as the caller
/// holds it.
///
/// # Examples
///
/// ```
/// use bumo_sdk::crypto::KeyPair;
///
/// let kp = KeyPair::generate().unwrap();
/// let sig = kp.sign(b"pay 1 BU");
/// assert!(kp.verify(b"pay 1 BU", &sig));
/// ```
pub struct KeyPair {
    signing_key: SigningKey,
}

impl KeyPair {
    /// Draws a fresh seed from the OS RNG and derives a key pair from it.
    pub fn generate() -> Result<Self> {
        let mut seed = [0u8; SEED_LENGTH];
        OsRng
            .try_fill_bytes(&mut seed)
            .map_err(|e| SdkError::KeyGeneration(e.to_string()))?;
        Ok(Self::from_seed(&seed))
    }

    /// Derives the key pair for `seed`. Deterministic.
    pub fn from_seed(seed: &[u8; SEED_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// The 32-byte seed. **Handle with care.**
    pub fn seed(&self) -> [u8; SEED_LENGTH] {
        self.signing_key.to_bytes()
    }

    /// Raw public key bytes.
    pub fn public_key_bytes(&self) -> [u8; RAW_PUBLIC_KEY_LENGTH] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Signs `message`. Ed25519 is deterministic: the same key and message
    /// always give the same 64 bytes.
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        self.signing_key.sign(message).to_bytes()
    }

    /// Like [`sign`](Self::sign), surfacing a backend failure as
    /// [`SdkError::Signing`] instead of hiding it.
    pub fn try_sign(&self, message: &[u8]) -> Result<[u8; SIGNATURE_LENGTH]> {
        self.signing_key
            .try_sign(message)
            .map(|sig| sig.to_bytes())
            .map_err(|e| SdkError::Signing(e.to_string()))
    }

    /// Checks a signature against this pair's public key.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        verify_raw(&self.public_key_bytes(), message, signature)
    }
}

/// Verifies `signature` over `message` with a raw public key.
///
/// Returns `false` for a malformed key, a signature of the wrong length, or
/// a signature that does not verify. No distinction between the three.
pub fn verify_raw(
    public_key: &[u8; RAW_PUBLIC_KEY_LENGTH],
    message: &[u8],
    signature: &[u8],
) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(public_key) else {
        return false;
    };
    let Ok(signature) = Signature::from_slice(signature) else {
        return false;
    };
    verifying_key.verify(message, &signature).is_ok()
}

impl Clone for KeyPair {
    fn clone(&self) -> Self {
        Self::from_seed(&self.signing_key.to_bytes())
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyPair(pub={})", hex::encode(self.public_key_bytes()))
    }
}

impl PartialEq for KeyPair {
    /// Compares public keys only.
    fn eq(&self, other: &Self) -> bool {
        self.public_key_bytes() == other.public_key_bytes()
    }
}

impl Eq for KeyPair {}
