//! # Signature Engine
//!
//! Signing and verification in terms of the ledger's *encoded* keys: callers
//! hand over the `priv...` / `b001...` strings they already have and get hex
//! signatures back. The raw Ed25519 work happens in [`super::keys`].

use crate::error::Result;
use crate::identity;

use super::keys::verify_raw;

/// Signs `message` with an encoded private key and returns the signature as
/// lowercase hex (128 characters).
///
/// Fails with [`SdkError::InvalidPrivateKey`](crate::SdkError::InvalidPrivateKey)
/// when the key does not decode.
///
/// # Example
///
/// ```
/// use bumo_sdk::crypto::{sign, verify};
/// use bumo_sdk::identity;
///
/// let keys = identity::generate().unwrap();
/// let sig = sign(&keys.private_key, b"blob").unwrap();
/// assert!(verify(&keys.public_key, b"blob", &sig));
/// ```
pub fn sign(private_key: &str, message: &[u8]) -> Result<String> {
    let keypair = identity::decode_private_key(private_key)?;
    let signature = keypair.try_sign(message)?;
    Ok(hex::encode(signature))
}

/// Verifies a hex signature over `message` against an encoded public key.
///
/// Never fails: a key or signature that does not decode simply yields
/// `false`.
pub fn verify(public_key: &str, message: &[u8], signature: &str) -> bool {
    let Ok(raw_public_key) = identity::decode_public_key(public_key) else {
        return false;
    };
    let Ok(signature) = hex::decode(signature) else {
        return false;
    };
    verify_raw(&raw_public_key, message, &signature)
}
