//! # Transaction Module
//!
//! Assembly, serialization and signing of BUMO transactions.
//!
//! ## Architecture
//!
//! ```text
//! proto.rs     - Wire messages (protobuf) for transactions and operations
//! envelope.rs  - TransactionEnvelope and its fluent TransactionBuilder
//! assembler.rs - Envelope validation and canonical blob serialization
//! signing.rs   - Blob signing, verification and submission packaging
//! ```
//!
//! ## Lifecycle
//!
//! 1. **Describe**: build a [`TransactionEnvelope`] with [`TransactionBuilder`].
//! 2. **Assemble**: [`assemble`] validates it and returns the blob.
//! 3. **Sign**: [`sign_blob`] signs the blob with each required key.
//! 4. **Submit**: hand a [`SignedTransaction`] to a
//!    [`SubmissionSink`](crate::oracle::SubmissionSink).
//!
//! The transaction hash is the SHA-256 of the blob, so it is known before
//! submission.

pub mod assembler;
pub mod envelope;
pub mod proto;
pub mod signing;

pub use assembler::{assemble, decode_blob};
pub use envelope::{TransactionBuilder, TransactionEnvelope};
pub use signing::{sign_blob, transaction_hash, verify_signatures, Signature, SignedTransaction};
