//! # Identity Codec
//!
//! Every account on the ledger is an Ed25519 key pair, and the network only
//! ever sees three textual renderings of it:
//!
//! 1. **Private key** - `priv...`, base58, carries the 32-byte seed.
//! 2. **Public key** - `b001...`, hex, carries the raw public key.
//! 3. **Address** - `bu...`, base58, carries 20 bytes of the public key's
//!    SHA-256.
//!
//! Each rendering has its own version prefix and a double-SHA-256 checksum.
//! The prefixes differ per class: a decoder for one class must never accept
//! another, so validators compare prefix bytes before anything else.
//!
//! ## Design Decisions
//!
//! - Validators (`is_valid_*`) return `bool` and never fail; decoders return
//!   `Result` with the matching [`SdkError`](crate::SdkError) kind.
//! - [`Address`], [`PublicKey`] and [`PrivateKey`] are parse-once wrappers for
//!   callers that want to carry validated values around.

pub mod codec;
mod encoding;
pub mod types;

pub use codec::{
    address_from_public_key, decode_private_key, decode_public_key, encode_address,
    encode_keypair, encode_public_key, generate, is_valid_address, is_valid_private_key,
    is_valid_public_key, public_key_from_private_key, EncodedKeys,
};
pub use types::{Address, PrivateKey, PublicKey};
