//! Asset and native-coin transfers.
//!
//! Issuing creates units under the source account. Sending an asset or BU is
//! a contract invocation with an empty input, so both are validated here and
//! then handed to the invoke builders in [`super::contract`].

use serde::{Deserialize, Serialize};

use crate::error::{AddressRole, Field, Result};
use crate::transaction::proto::{self, OperationType};

use super::contract::{ContractInvokeByAsset, ContractInvokeByBu};
use super::validate;
use super::OperationMeta;

/// Issues `amount` units of asset `code` to the source account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetIssue {
    #[serde(flatten)]
    pub meta: OperationMeta,
    pub code: String,
    pub amount: i64,
}

impl AssetIssue {
    pub fn build(&self) -> Result<proto::Operation> {
        validate::source(self.meta.source())?;
        validate::asset_code(&self.code, false)?;
        validate::positive(Field::Amount, self.amount)?;

        let mut op = self.meta.wire(OperationType::IssueAsset);
        op.issue_asset = Some(proto::OperationIssueAsset {
            code: self.code.clone(),
            amount: self.amount,
        });
        Ok(op)
    }
}

/// Moves `amount` units of the asset (`issuer`, `code`) to `dest_address`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSend {
    #[serde(flatten)]
    pub meta: OperationMeta,
    pub dest_address: String,
    pub code: String,
    pub issuer: String,
    pub amount: i64,
}

impl AssetSend {
    pub fn build(&self, tx_source: Option<&str>) -> Result<proto::Operation> {
        validate::source(self.meta.source())?;
        validate::distinct(
            self.meta.effective_source(tx_source),
            &self.dest_address,
            AddressRole::Destination,
        )?;
        validate::required_address(&self.issuer, AddressRole::Issuer)?;
        validate::non_negative(Field::Amount, self.amount)?;
        validate::asset_code(&self.code, false)?;
        validate::required_address(&self.dest_address, AddressRole::Destination)?;

        ContractInvokeByAsset {
            meta: self.meta.clone(),
            contract_address: self.dest_address.clone(),
            code: self.code.clone(),
            issuer: self.issuer.clone(),
            amount: self.amount,
            input: String::new(),
        }
        .build(tx_source)
    }
}

/// Moves `amount` MO of the native coin to `dest_address`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuSend {
    #[serde(flatten)]
    pub meta: OperationMeta,
    pub dest_address: String,
    pub amount: i64,
}

impl BuSend {
    pub fn build(&self, tx_source: Option<&str>) -> Result<proto::Operation> {
        validate::source(self.meta.source())?;
        validate::distinct(
            self.meta.effective_source(tx_source),
            &self.dest_address,
            AddressRole::Destination,
        )?;
        validate::non_negative(Field::Amount, self.amount)?;
        validate::required_address(&self.dest_address, AddressRole::Destination)?;

        ContractInvokeByBu {
            meta: self.meta.clone(),
            contract_address: self.dest_address.clone(),
            amount: self.amount,
            input: String::new(),
        }
        .build(tx_source)
    }
}
