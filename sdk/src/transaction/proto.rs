//! Protobuf messages of the ledger's transaction schema.
//!
//! Hand-written `prost` derives mirroring the network's `chain.proto`; only
//! the messages a client ever serializes are present. Field tags must never
//! change, since signatures are computed over the encoded bytes.

use prost::{Enumeration, Message};

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Message)]
pub struct Transaction {
    #[prost(string, tag = "1")]
    pub source_address: String,

    #[prost(int64, tag = "2")]
    pub nonce: i64,

    #[prost(int64, tag = "3")]
    pub fee_limit: i64,

    #[prost(int64, tag = "4")]
    pub gas_price: i64,

    #[prost(int64, tag = "5")]
    pub ceil_ledger_seq: i64,

    #[prost(bytes = "vec", tag = "6")]
    pub metadata: Vec<u8>,

    #[prost(message, repeated, tag = "7")]
    pub operations: Vec<Operation>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
#[repr(i32)]
pub enum OperationType {
    Unknown = 0,
    CreateAccount = 1,
    IssueAsset = 2,
    PayAsset = 3,
    SetMetadata = 4,
    SetSignerWeight = 5,
    SetThreshold = 6,
    PayCoin = 7,
    Log = 8,
    SetPrivilege = 9,
}

/// One operation. Exactly one body field is set, matching `r#type`.
#[derive(Clone, PartialEq, Message)]
pub struct Operation {
    #[prost(enumeration = "OperationType", tag = "1")]
    pub r#type: i32,

    #[prost(string, tag = "2")]
    pub source_address: String,

    #[prost(bytes = "vec", tag = "3")]
    pub metadata: Vec<u8>,

    #[prost(message, optional, tag = "4")]
    pub create_account: Option<OperationCreateAccount>,

    #[prost(message, optional, tag = "5")]
    pub issue_asset: Option<OperationIssueAsset>,

    #[prost(message, optional, tag = "6")]
    pub pay_asset: Option<OperationPayAsset>,

    #[prost(message, optional, tag = "7")]
    pub set_metadata: Option<OperationSetMetadata>,

    #[prost(message, optional, tag = "8")]
    pub set_signer_weight: Option<OperationSetSignerWeight>,

    #[prost(message, optional, tag = "9")]
    pub set_threshold: Option<OperationSetThreshold>,

    #[prost(message, optional, tag = "10")]
    pub pay_coin: Option<OperationPayCoin>,

    #[prost(message, optional, tag = "11")]
    pub log: Option<OperationLog>,

    #[prost(message, optional, tag = "12")]
    pub set_privilege: Option<OperationSetPrivilege>,
}

impl Operation {
    /// An operation of `kind` with no body set yet.
    pub fn new(kind: OperationType, source_address: String, metadata: Vec<u8>) -> Self {
        Self {
            r#type: kind as i32,
            source_address,
            metadata,
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Accounts and privileges
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Message)]
pub struct OperationCreateAccount {
    #[prost(string, tag = "1")]
    pub dest_address: String,

    #[prost(message, optional, tag = "2")]
    pub contract: Option<Contract>,

    #[prost(message, optional, tag = "3")]
    pub r#priv: Option<AccountPrivilege>,

    #[prost(message, repeated, tag = "4")]
    pub metadatas: Vec<KeyPair>,

    #[prost(int64, tag = "5")]
    pub init_balance: i64,

    #[prost(string, tag = "6")]
    pub init_input: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
#[repr(i32)]
pub enum ContractType {
    Javascript = 0,
    Evm = 1,
}

#[derive(Clone, PartialEq, Message)]
pub struct Contract {
    #[prost(enumeration = "ContractType", tag = "1")]
    pub r#type: i32,

    #[prost(string, tag = "2")]
    pub payload: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct AccountPrivilege {
    #[prost(int64, tag = "1")]
    pub master_weight: i64,

    #[prost(message, repeated, tag = "2")]
    pub signers: Vec<Signer>,

    #[prost(message, optional, tag = "3")]
    pub thresholds: Option<AccountThreshold>,
}

impl AccountPrivilege {
    /// Master weight plus a bare transaction threshold, no extra signers.
    pub fn with_master(master_weight: i64, tx_threshold: i64) -> Self {
        Self {
            master_weight,
            signers: Vec::new(),
            thresholds: Some(AccountThreshold {
                tx_threshold,
                type_thresholds: Vec::new(),
            }),
        }
    }
}

#[derive(Clone, PartialEq, Message)]
pub struct Signer {
    #[prost(string, tag = "1")]
    pub address: String,

    #[prost(int64, tag = "2")]
    pub weight: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct AccountThreshold {
    #[prost(int64, tag = "1")]
    pub tx_threshold: i64,

    #[prost(message, repeated, tag = "2")]
    pub type_thresholds: Vec<OperationTypeThreshold>,
}

#[derive(Clone, PartialEq, Message)]
pub struct OperationTypeThreshold {
    #[prost(enumeration = "OperationType", tag = "1")]
    pub r#type: i32,

    #[prost(int64, tag = "2")]
    pub threshold: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct OperationSetSignerWeight {
    #[prost(int64, tag = "1")]
    pub master_weight: i64,

    #[prost(message, repeated, tag = "2")]
    pub signers: Vec<Signer>,
}

#[derive(Clone, PartialEq, Message)]
pub struct OperationSetThreshold {
    #[prost(int64, tag = "1")]
    pub tx_threshold: i64,

    #[prost(message, repeated, tag = "2")]
    pub type_thresholds: Vec<OperationTypeThreshold>,
}

/// Weights and threshold travel as decimal strings; empty means unchanged.
#[derive(Clone, PartialEq, Message)]
pub struct OperationSetPrivilege {
    #[prost(string, tag = "1")]
    pub master_weight: String,

    #[prost(message, repeated, tag = "2")]
    pub signers: Vec<Signer>,

    #[prost(string, tag = "3")]
    pub tx_threshold: String,

    #[prost(message, repeated, tag = "4")]
    pub type_thresholds: Vec<OperationTypeThreshold>,
}

// ---------------------------------------------------------------------------
// Assets and coin
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Message)]
pub struct OperationIssueAsset {
    #[prost(string, tag = "1")]
    pub code: String,

    #[prost(int64, tag = "2")]
    pub amount: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct AssetKey {
    #[prost(string, tag = "1")]
    pub issuer: String,

    #[prost(string, tag = "2")]
    pub code: String,

    #[prost(int32, tag = "3")]
    pub r#type: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct Asset {
    #[prost(message, optional, tag = "1")]
    pub key: Option<AssetKey>,

    #[prost(int64, tag = "2")]
    pub amount: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct OperationPayAsset {
    #[prost(string, tag = "1")]
    pub dest_address: String,

    #[prost(message, optional, tag = "2")]
    pub asset: Option<Asset>,

    #[prost(string, tag = "3")]
    pub input: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct OperationPayCoin {
    #[prost(string, tag = "1")]
    pub dest_address: String,

    #[prost(int64, tag = "2")]
    pub amount: i64,

    #[prost(string, tag = "3")]
    pub input: String,
}

// ---------------------------------------------------------------------------
// Metadata and logs
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Message)]
pub struct OperationSetMetadata {
    #[prost(string, tag = "1")]
    pub key: String,

    #[prost(string, tag = "2")]
    pub value: String,

    #[prost(int64, tag = "3")]
    pub version: i64,

    #[prost(bool, tag = "4")]
    pub delete_flag: bool,
}

#[derive(Clone, PartialEq, Message)]
pub struct KeyPair {
    #[prost(string, tag = "1")]
    pub key: String,

    #[prost(string, tag = "2")]
    pub value: String,

    #[prost(int64, tag = "3")]
    pub version: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct OperationLog {
    #[prost(string, tag = "1")]
    pub topic: String,

    #[prost(string, repeated, tag = "2")]
    pub datas: Vec<String>,
}
