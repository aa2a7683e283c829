//! # Cryptographic Primitives
//!
//! Thin wrappers over audited implementations:
//!
//! - **Ed25519** (`ed25519-dalek`) for keys and signatures.
//! - **SHA-256** (`sha2`) for address derivation, checksums and
//!   transaction hashes.
//!
//! Nothing here is novel cryptography, and nothing here should become novel
//! cryptography.

pub mod hash;
pub mod keys;
pub mod signatures;

pub use hash::{checksum, double_sha256, sha256};
pub use keys::{verify_raw, KeyPair};
pub use signatures::{sign, verify};
