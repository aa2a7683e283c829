//! Parsed identity values.
//!
//! Each type can only be constructed from text that passed validation, so a
//! function taking an [`Address`] never has to re-check it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::RAW_PUBLIC_KEY_LENGTH;
use crate::crypto::keys::{verify_raw, KeyPair};
use crate::error::{AddressRole, Result, SdkError};

use super::codec;

/// A validated account address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Validates `text`, reporting a failure against `role`.
    pub fn parse(text: &str, role: AddressRole) -> Result<Self> {
        if codec::is_valid_address(text) {
            Ok(Self(text.to_string()))
        } else {
            Err(SdkError::invalid_address(role))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Failures are reported against [`AddressRole::Destination`]; use
/// [`Address::parse`] to name another role.
impl FromStr for Address {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, AddressRole::Destination)
    }
}

impl TryFrom<String> for Address {
    type Error = SdkError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated encoded public key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
    raw: [u8; RAW_PUBLIC_KEY_LENGTH],
}

impl PublicKey {
    pub fn raw(&self) -> &[u8; RAW_PUBLIC_KEY_LENGTH] {
        &self.raw
    }

    /// The address this key controls.
    pub fn address(&self) -> Address {
        Address(codec::encode_address(&self.raw))
    }

    /// Verifies a hex signature made by this key.
    pub fn verify(&self, message: &[u8], signature: &str) -> bool {
        hex::decode(signature)
            .map(|sig| verify_raw(&self.raw, message, &sig))
            .unwrap_or(false)
    }
}

impl FromStr for PublicKey {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self {
            raw: codec::decode_public_key(s)?,
        })
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::encode_public_key(&self.raw))
    }
}

/// A decoded private key. Holds the key pair, never prints the seed.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    keypair: KeyPair,
}

impl PrivateKey {
    pub fn keypair(&self) -> &KeyPair {
        &self.keypair
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            raw: self.keypair.public_key_bytes(),
        }
    }

    pub fn address(&self) -> Address {
        Address(codec::encode_address(&self.keypair.public_key_bytes()))
    }

    /// Signs `message` and returns the hex signature.
    pub fn sign(&self, message: &[u8]) -> Result<String> {
        Ok(hex::encode(self.keypair.try_sign(message)?))
    }

    /// The encoded `priv...` form. **Handle with care.**
    pub fn expose(&self) -> String {
        codec::encode_keypair(&self.keypair).private_key
    }
}

impl FromStr for PrivateKey {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self {
            keypair: codec::decode_private_key(s)?,
        })
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey(address={})", self.address())
    }
}
