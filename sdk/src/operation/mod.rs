//! # Operation Builder
//!
//! Turns high-level operation requests into the ledger's wire operations.
//!
//! ## Architecture
//!
//! ```text
//! validate.rs - one helper per field rule, shared by every kind
//! account.rs  - activate, set-metadata, set-privilege
//! asset.rs    - issue-asset, send-asset, send-coin
//! contract.rs - create-contract, invoke-by-asset, invoke-by-coin
//! log.rs      - write-log
//! token.rs    - token contract calls (transfer, approve, ...)
//! ```
//!
//! ## Rules
//!
//! - Every request validates its fields in a fixed order; the first failing
//!   check is the error returned.
//! - A request's source address is optional. When it is empty the ledger
//!   runs the operation as the transaction's source, and that address is the
//!   one compared against destinations and contracts.
//! - Send-asset, send-coin and every token kind are re-expressed as contract
//!   invocations, so the invoke rules apply to them as well.
//! - Only the composite issuance kinds ([`crate::issuance`]) query the
//!   activation oracle; everything else is pure.

pub mod account;
pub mod asset;
pub mod contract;
pub mod log;
pub mod token;
pub(crate) mod validate;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::issuance::{AppendToIssueToken, IssueAndDistributeToken};
use crate::oracle::ActivationOracle;
use crate::transaction::proto;

pub use account::{
    AccountActivate, AccountSetMetadata, AccountSetPrivilege, SignerWeight, TypeThreshold,
};
pub use asset::{AssetIssue, AssetSend, BuSend};
pub use contract::{ContractCreate, ContractInvokeByAsset, ContractInvokeByBu};
pub use log::LogCreate;
pub use token::{TokenApprove, TokenAssign, TokenChangeOwner, TokenTransfer, TokenTransferFrom};

/// Fields every operation request carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationMeta {
    /// Account the operation runs as. Empty or absent means the
    /// transaction's source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_address: Option<String>,

    /// Opaque bytes attached to the operation, hex in JSON.
    #[serde(default, with = "hex", skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<u8>,
}

impl OperationMeta {
    pub fn from_source(source_address: impl Into<String>) -> Self {
        Self {
            source_address: Some(source_address.into()),
            metadata: Vec::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: impl Into<Vec<u8>>) -> Self {
        self.metadata = metadata.into();
        self
    }

    /// The explicit source, if one was given.
    pub fn source(&self) -> Option<&str> {
        self.source_address.as_deref().filter(|s| !s.is_empty())
    }

    /// The address the ledger will run the operation as.
    pub(crate) fn effective_source<'a>(&'a self, tx_source: Option<&'a str>) -> Option<&'a str> {
        self.source().or(tx_source.filter(|s| !s.is_empty()))
    }

    /// A wire operation of `kind` carrying this source and metadata.
    pub(crate) fn wire(&self, kind: proto::OperationType) -> proto::Operation {
        proto::Operation::new(
            kind,
            self.source().unwrap_or_default().to_string(),
            self.metadata.clone(),
        )
    }
}

/// Every operation request the builder understands.
///
/// In JSON the kind is the `type` field:
///
/// ```json
/// {"type": "bu_send", "dest_address": "buQ...", "amount": 100000}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operation {
    AccountActivate(AccountActivate),
    AccountSetMetadata(AccountSetMetadata),
    AccountSetPrivilege(AccountSetPrivilege),
    AssetIssue(AssetIssue),
    AssetSend(AssetSend),
    BuSend(BuSend),
    ContractCreate(ContractCreate),
    ContractInvokeByAsset(ContractInvokeByAsset),
    ContractInvokeByBu(ContractInvokeByBu),
    LogCreate(LogCreate),
    TokenTransfer(TokenTransfer),
    TokenTransferFrom(TokenTransferFrom),
    TokenApprove(TokenApprove),
    TokenAssign(TokenAssign),
    TokenChangeOwner(TokenChangeOwner),
    TokenIssue(IssueAndDistributeToken),
    TokenAppendToIssue(AppendToIssueToken),
}

impl Operation {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::AccountActivate(_) => "account_activate",
            Operation::AccountSetMetadata(_) => "account_set_metadata",
            Operation::AccountSetPrivilege(_) => "account_set_privilege",
            Operation::AssetIssue(_) => "asset_issue",
            Operation::AssetSend(_) => "asset_send",
            Operation::BuSend(_) => "bu_send",
            Operation::ContractCreate(_) => "contract_create",
            Operation::ContractInvokeByAsset(_) => "contract_invoke_by_asset",
            Operation::ContractInvokeByBu(_) => "contract_invoke_by_bu",
            Operation::LogCreate(_) => "log_create",
            Operation::TokenTransfer(_) => "token_transfer",
            Operation::TokenTransferFrom(_) => "token_transfer_from",
            Operation::TokenApprove(_) => "token_approve",
            Operation::TokenAssign(_) => "token_assign",
            Operation::TokenChangeOwner(_) => "token_change_owner",
            Operation::TokenIssue(_) => "token_issue",
            Operation::TokenAppendToIssue(_) => "token_append_to_issue",
        }
    }

    /// Validates the request and produces its wire operations.
    ///
    /// Primitive kinds yield exactly one operation; the issuance kinds yield
    /// their whole expansion or nothing.
    pub fn build(
        &self,
        tx_source: Option<&str>,
        activation: &dyn ActivationOracle,
    ) -> Result<Vec<proto::Operation>> {
        let built = match self {
            Operation::AccountActivate(op) => vec![op.build(tx_source)?],
            Operation::AccountSetMetadata(op) => vec![op.build()?],
            Operation::AccountSetPrivilege(op) => vec![op.build()?],
            Operation::AssetIssue(op) => vec![op.build()?],
            Operation::AssetSend(op) => vec![op.build(tx_source)?],
            Operation::BuSend(op) => vec![op.build(tx_source)?],
            Operation::ContractCreate(op) => vec![op.build()?],
            Operation::ContractInvokeByAsset(op) => vec![op.build(tx_source)?],
            Operation::ContractInvokeByBu(op) => vec![op.build(tx_source)?],
            Operation::LogCreate(op) => vec![op.build()?],
            Operation::TokenTransfer(op) => vec![op.build(tx_source)?],
            Operation::TokenTransferFrom(op) => vec![op.build(tx_source)?],
            Operation::TokenApprove(op) => vec![op.build(tx_source)?],
            Operation::TokenAssign(op) => vec![op.build(tx_source)?],
            Operation::TokenChangeOwner(op) => vec![op.build(tx_source)?],
            Operation::TokenIssue(op) => op.expand(tx_source, activation)?,
            Operation::TokenAppendToIssue(op) => op.expand(tx_source)?,
        };
        debug!(kind = self.kind(), count = built.len(), "built operation");
        Ok(built)
    }
}

macro_rules! impl_from_request {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Operation {
                fn from(request: $ty) -> Self {
                    Operation::$variant(request)
                }
            }
        )*
    };
}

impl_from_request! {
    AccountActivate(AccountActivate),
    AccountSetMetadata(AccountSetMetadata),
    AccountSetPrivilege(AccountSetPrivilege),
    AssetIssue(AssetIssue),
    AssetSend(AssetSend),
    BuSend(BuSend),
    ContractCreate(ContractCreate),
    ContractInvokeByAsset(ContractInvokeByAsset),
    ContractInvokeByBu(ContractInvokeByBu),
    LogCreate(LogCreate),
    TokenTransfer(TokenTransfer),
    TokenTransferFrom(TokenTransferFrom),
    TokenApprove(TokenApprove),
    TokenAssign(TokenAssign),
    TokenChangeOwner(TokenChangeOwner),
    TokenIssue(IssueAndDistributeToken),
    TokenAppendToIssue(AppendToIssueToken),
}
