// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # BUMO SDK: Transaction Toolkit
//!
//! Everything a client needs to produce a transaction the BUMO ledger will
//! accept, without talking to the ledger for anything but two small facts
//! (the current gas price and whether an account exists).
//!
//! ## Architecture
//!
//! Modules are listed leaf-first; each depends only on the ones above it:
//!
//! - **config** - Wire prefixes, field limits, fee constants, network config.
//! - **error** - The closed error taxonomy shared by every component.
//! - **crypto** - SHA-256 helpers, Ed25519 key pairs, the signature engine.
//! - **identity** - Checksummed text encodings for keys and addresses.
//! - **units** - Exact decimal/base-unit conversion (BU <-> MO and tokens).
//! - **oracle** - Traits for the external fee and activation queries.
//! - **operation** - Per-kind validation and canonical wire construction.
//! - **issuance** - Composite token issuance expanded into primitive operations.
//! - **transaction** - Envelope validation, protobuf serialization, signing.
//!
//! ## Flow
//!
//! ```text
//! Operation requests ──► operation / issuance ──► transaction::assemble ──► blob
//!                                                                            │
//!                          private keys ──► transaction::sign_blob ◄─────────┘
//! ```
//!
//! Nothing here holds state between calls. The only inputs that are not
//! plain values are the oracle trait objects handed to the assembler.

pub mod config;
pub mod crypto;
pub mod error;
pub mod identity;
pub mod issuance;
pub mod operation;
pub mod oracle;
pub mod transaction;
pub mod units;

pub use error::{AddressRole, FeeKind, Field, Result, SdkError};
