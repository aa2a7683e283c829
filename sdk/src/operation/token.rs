//! Calls into token contracts.
//!
//! Each kind validates its own fields, renders the contract call as JSON and
//! sends it as a zero-value [`ContractInvokeByBu`]. Token amounts travel as
//! decimal strings inside the call:
//!
//! ```json
//! {"method":"transfer","params":{"to":"buQ...","value":"1000"}}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{AddressRole, Field, Result, SdkError};
use crate::transaction::proto;

use super::contract::ContractInvokeByBu;
use super::validate;
use super::OperationMeta;

#[derive(Serialize)]
struct ContractCall<'a> {
    method: &'a str,
    params: CallParams<'a>,
}

#[derive(Default, Serialize)]
struct CallParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    spender: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

fn invoke(
    meta: &OperationMeta,
    contract_address: &str,
    method: &str,
    params: CallParams<'_>,
    tx_source: Option<&str>,
) -> Result<proto::Operation> {
    let input = serde_json::to_string(&ContractCall { method, params })
        .map_err(|e| SdkError::Serialization(e.to_string()))?;
    ContractInvokeByBu {
        meta: meta.clone(),
        contract_address: contract_address.to_string(),
        amount: 0,
        input,
    }
    .build(tx_source)
}

/// Transfers `amount` tokens from the source to `dest_address`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTransfer {
    #[serde(flatten)]
    pub meta: OperationMeta,
    pub contract_address: String,
    pub dest_address: String,
    pub amount: i64,
}

impl TokenTransfer {
    pub fn build(&self, tx_source: Option<&str>) -> Result<proto::Operation> {
        let source = self.meta.effective_source(tx_source);
        validate::source(self.meta.source())?;
        validate::required_address(&self.dest_address, AddressRole::Destination)?;
        validate::distinct(source, &self.dest_address, AddressRole::Destination)?;
        validate::distinct(source, &self.contract_address, AddressRole::Contract)?;
        validate::positive(Field::Amount, self.amount)?;

        let params = CallParams {
            to: Some(&self.dest_address),
            value: Some(self.amount.to_string()),
            ..Default::default()
        };
        invoke(&self.meta, &self.contract_address, "transfer", params, tx_source)
    }
}

/// Moves `amount` tokens from `from_address` to `dest_address` using an
/// allowance granted to the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTransferFrom {
    #[serde(flatten)]
    pub meta: OperationMeta,
    pub contract_address: String,
    pub from_address: String,
    pub dest_address: String,
    pub amount: i64,
}

impl TokenTransferFrom {
    pub fn build(&self, tx_source: Option<&str>) -> Result<proto::Operation> {
        validate::source(self.meta.source())?;
        validate::required_address(&self.dest_address, AddressRole::Destination)?;
        validate::required_address(&self.from_address, AddressRole::From)?;
        validate::positive(Field::Amount, self.amount)?;
        validate::distinct(
            self.meta.effective_source(tx_source),
            &self.contract_address,
            AddressRole::Contract,
        )?;

        let params = CallParams {
            from: Some(&self.from_address),
            to: Some(&self.dest_address),
            value: Some(self.amount.to_string()),
            ..Default::default()
        };
        invoke(&self.meta, &self.contract_address, "transferFrom", params, tx_source)
    }
}

/// Allows `spender` to move up to `amount` of the source's tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenApprove {
    #[serde(flatten)]
    pub meta: OperationMeta,
    pub contract_address: String,
    pub spender: String,
    pub amount: i64,
}

impl TokenApprove {
    pub fn build(&self, tx_source: Option<&str>) -> Result<proto::Operation> {
        validate::source(self.meta.source())?;
        validate::required_address(&self.spender, AddressRole::Spender)?;
        validate::distinct(
            self.meta.effective_source(tx_source),
            &self.contract_address,
            AddressRole::Contract,
        )?;
        validate::positive(Field::Amount, self.amount)?;

        let params = CallParams {
            spender: Some(&self.spender),
            value: Some(self.amount.to_string()),
            ..Default::default()
        };
        invoke(&self.meta, &self.contract_address, "approve", params, tx_source)
    }
}

/// Mints `amount` tokens to `dest_address`. Only the contract owner may do
/// this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAssign {
    #[serde(flatten)]
    pub meta: OperationMeta,
    pub contract_address: String,
    pub dest_address: String,
    pub amount: i64,
}

impl TokenAssign {
    pub fn build(&self, tx_source: Option<&str>) -> Result<proto::Operation> {
        let source = self.meta.effective_source(tx_source);
        validate::source(self.meta.source())?;
        validate::required_address(&self.dest_address, AddressRole::Destination)?;
        validate::required_address(&self.contract_address, AddressRole::Contract)?;
        validate::positive(Field::Amount, self.amount)?;
        validate::distinct(source, &self.dest_address, AddressRole::Destination)?;
        validate::distinct(source, &self.contract_address, AddressRole::Contract)?;

        let params = CallParams {
            to: Some(&self.dest_address),
            value: Some(self.amount.to_string()),
            ..Default::default()
        };
        invoke(&self.meta, &self.contract_address, "assign", params, tx_source)
    }
}

/// Hands ownership of the token contract to `token_owner`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenChangeOwner {
    #[serde(flatten)]
    pub meta: OperationMeta,
    pub contract_address: String,
    pub token_owner: String,
}

impl TokenChangeOwner {
    pub fn build(&self, tx_source: Option<&str>) -> Result<proto::Operation> {
        validate::source(self.meta.source())?;
        validate::required_address(&self.token_owner, AddressRole::Owner)?;
        validate::required_address(&self.contract_address, AddressRole::Contract)?;
        validate::distinct(
            self.meta.effective_source(tx_source),
            &self.contract_address,
            AddressRole::Contract,
        )?;

        let params = CallParams {
            address: Some(&self.token_owner),
            ..Default::default()
        };
        invoke(&self.meta, &self.contract_address, "changeOwner", params, tx_source)
    }
}
