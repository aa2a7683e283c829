//! Signing assembled blobs and packaging them for submission.
//!
//! The ledger signs the serialized blob itself, so signing happens after
//! assembly and needs nothing but the bytes and the keys. A transaction may
//! carry one signature per required signer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::crypto;
use crate::crypto::hash::sha256;
use crate::error::{Field, Result, SdkError};
use crate::identity::{encode_public_key, PrivateKey};

/// One signer's signature over a blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Lowercase hex Ed25519 signature.
    pub sign_data: String,
    /// Encoded public key (`b001...`) of the signer.
    pub public_key: String,
}

/// Signs `blob` once with every key in `private_keys`.
///
/// Every key is decoded before anything is signed, so an invalid key anywhere
/// in the list fails the whole call.
pub fn sign_blob<K: AsRef<str>>(blob: &[u8], private_keys: &[K]) -> Result<Vec<Signature>> {
    if blob.is_empty() {
        return Err(SdkError::invalid_field(Field::Blob, "blob is empty"));
    }
    if private_keys.is_empty() {
        return Err(SdkError::invalid_field(
            Field::PrivateKeys,
            "at least one private key is required",
        ));
    }

    let keys = private_keys
        .iter()
        .map(|key| key.as_ref().parse::<PrivateKey>())
        .collect::<Result<Vec<_>>>()?;

    let signatures = keys
        .iter()
        .map(|key| {
            Ok(Signature {
                sign_data: key.sign(blob)?,
                public_key: encode_public_key(key.public_key().raw()),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(count = signatures.len(), bytes = blob.len(), "signed blob");
    Ok(signatures)
}

/// `true` iff `signatures` is non-empty and every entry verifies over `blob`.
pub fn verify_signatures(blob: &[u8], signatures: &[Signature]) -> bool {
    !signatures.is_empty()
        && signatures
            .iter()
            .all(|s| crypto::verify(&s.public_key, blob, &s.sign_data))
}

/// The identifier the network assigns to `blob`: lowercase hex SHA-256.
pub fn transaction_hash(blob: &[u8]) -> String {
    hex::encode(sha256(blob))
}

// ---------------------------------------------------------------------------
// SignedTransaction
// ---------------------------------------------------------------------------

/// A blob plus its signatures, ready to hand to a
/// [`SubmissionSink`](crate::oracle::SubmissionSink).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    pub blob: Vec<u8>,
    pub signatures: Vec<Signature>,
}

#[derive(Serialize)]
struct SubmitRequest<'a> {
    items: [SubmitItem<'a>; 1],
}

#[derive(Serialize)]
struct SubmitItem<'a> {
    transaction_blob: String,
    signatures: &'a [Signature],
}

impl SignedTransaction {
    pub fn new(blob: Vec<u8>, signatures: Vec<Signature>) -> Self {
        Self { blob, signatures }
    }

    /// Signs an already assembled blob with `private_keys`.
    pub fn sign<K: AsRef<str>>(blob: Vec<u8>, private_keys: &[K]) -> Result<Self> {
        let signatures = sign_blob(&blob, private_keys)?;
        Ok(Self { blob, signatures })
    }

    pub fn hash(&self) -> String {
        transaction_hash(&self.blob)
    }

    pub fn verify(&self) -> bool {
        verify_signatures(&self.blob, &self.signatures)
    }

    /// The body of the node's submit endpoint:
    /// `{"items":[{"transaction_blob":..., "signatures":[...]}]}`.
    pub fn submit_body(&self) -> Result<String> {
        let request = SubmitRequest {
            items: [SubmitItem {
                transaction_blob: hex::encode(&self.blob),
                signatures: &self.signatures,
            }],
        };
        serde_json::to_string(&request).map_err(|e| SdkError::Serialization(e.to_string()))
    }
}
