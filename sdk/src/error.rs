//! Error taxonomy for the toolkit.
//!
//! Every fallible call in the crate returns [`SdkError`]. The set of kinds is
//! closed; validation failures carry just enough context (which address role,
//! which field) for a caller to point at the offending input.

use std::fmt;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SdkError>;

/// The part an address plays in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressRole {
    /// The account the transaction or operation is executed as.
    Source,
    /// The receiving account.
    Destination,
    /// A contract account being invoked.
    Contract,
    /// The account that issued an asset.
    Issuer,
    /// An account allowed to spend tokens on the owner's behalf.
    Spender,
    /// The account tokens are drawn from in a delegated transfer.
    From,
    /// The new owner of a token contract.
    Owner,
    /// A signer listed in a privilege change.
    Signer,
}

impl fmt::Display for AddressRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressRole::Source => "source",
            AddressRole::Destination => "destination",
            AddressRole::Contract => "contract",
            AddressRole::Issuer => "issuer",
            AddressRole::Spender => "spender",
            AddressRole::From => "from",
            AddressRole::Owner => "owner",
            AddressRole::Signer => "signer",
        };
        f.write_str(name)
    }
}

/// A non-address field that failed a length or range rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Amount,
    InitBalance,
    AssetCode,
    MetadataKey,
    MetadataValue,
    MetadataVersion,
    MasterWeight,
    SignerWeight,
    TxThreshold,
    TypeThresholdType,
    TypeThreshold,
    Payload,
    LogTopic,
    LogData,
    TotalSupply,
    NowSupply,
    Decimals,
    Description,
    CeilLedgerSeq,
    Blob,
    PrivateKeys,
    NodeUrl,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Amount => "amount",
            Field::InitBalance => "init balance",
            Field::AssetCode => "asset code",
            Field::MetadataKey => "metadata key",
            Field::MetadataValue => "metadata value",
            Field::MetadataVersion => "metadata version",
            Field::MasterWeight => "master weight",
            Field::SignerWeight => "signer weight",
            Field::TxThreshold => "tx threshold",
            Field::TypeThresholdType => "type threshold operation type",
            Field::TypeThreshold => "type threshold",
            Field::Payload => "contract payload",
            Field::LogTopic => "log topic",
            Field::LogData => "log data",
            Field::TotalSupply => "total supply",
            Field::NowSupply => "now supply",
            Field::Decimals => "decimals",
            Field::Description => "description",
            Field::CeilLedgerSeq => "ceil ledger seq",
            Field::Blob => "transaction blob",
            Field::PrivateKeys => "private keys",
            Field::NodeUrl => "node url",
        };
        f.write_str(name)
    }
}

/// Which fee bound a transaction fell short of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeKind {
    GasPrice,
    FeeLimit,
}

impl fmt::Display for FeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeKind::GasPrice => f.write_str("gas price"),
            FeeKind::FeeLimit => f.write_str("fee limit"),
        }
    }
}

/// Errors returned by every component of the toolkit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SdkError {
    /// An address failed structural or checksum validation.
    #[error("invalid {role} address")]
    InvalidAddress {
        /// Which address in the request was rejected.
        role: AddressRole,
    },

    /// An encoded public key failed validation.
    #[error("invalid public key")]
    InvalidPublicKey,

    /// An encoded private key failed validation.
    #[error("invalid private key")]
    InvalidPrivateKey,

    /// A field violated its length or range rule.
    #[error("invalid {field}: {reason}")]
    InvalidFieldValue {
        /// The offending field.
        field: Field,
        /// Human-readable description of the violated rule.
        reason: String,
    },

    /// The source account is also the target of its own operation.
    #[error("{role} address must differ from the source address")]
    SelfReferenceConflict {
        /// The role that collided with the source.
        role: AddressRole,
    },

    /// Gas price or fee limit is below what the network currently requires.
    #[error("{kind} {offered} is below the required minimum {minimum}")]
    InsufficientFee {
        /// Which bound was violated.
        kind: FeeKind,
        /// Value carried by the transaction.
        offered: i64,
        /// Smallest value the network accepts.
        minimum: i64,
    },

    /// The nonce is not strictly positive.
    #[error("nonce must be greater than 0, got {0}")]
    InvalidNonce(i64),

    /// The operation list is empty or cannot be expanded.
    #[error("invalid operation set: {0}")]
    InvalidOperationSet(String),

    /// The randomness source failed.
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// Producing a signature failed.
    #[error("signing failed: {0}")]
    Signing(String),

    /// A payload could not be encoded.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// An oracle was unreachable or returned malformed data.
    #[error("external query failed: {0}")]
    ExternalQuery(String),
}

impl SdkError {
    pub(crate) fn invalid_address(role: AddressRole) -> Self {
        SdkError::InvalidAddress { role }
    }

    pub(crate) fn invalid_field(field: Field, reason: impl Into<String>) -> Self {
        SdkError::InvalidFieldValue {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn self_reference(role: AddressRole) -> Self {
        SdkError::SelfReferenceConflict { role }
    }

    /// The field a validation failure points at, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            SdkError::InvalidFieldValue { field, .. } => Some(*field),
            _ => None,
        }
    }
}
