//! Contract accounts: creation and invocation.

use serde::{Deserialize, Serialize};

use crate::error::{AddressRole, Field, Result};
use crate::transaction::proto::{self, OperationType};

use super::validate;
use super::OperationMeta;

/// Creates a contract account running `payload`.
///
/// The new account gets master weight 0, so nothing but the contract itself
/// can ever act for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCreate {
    #[serde(flatten)]
    pub meta: OperationMeta,
    /// Starting balance in MO.
    pub init_balance: i64,
    /// Contract source code.
    pub payload: String,
    /// Argument passed to the contract's `init`.
    #[serde(default)]
    pub init_input: String,
}

impl ContractCreate {
    pub fn build(&self) -> Result<proto::Operation> {
        validate::source(self.meta.source())?;
        validate::positive(Field::InitBalance, self.init_balance)?;
        validate::length(Field::Payload, self.payload.len(), 1, usize::MAX)?;

        let mut op = self.meta.wire(OperationType::CreateAccount);
        op.create_account = Some(proto::OperationCreateAccount {
            contract: Some(proto::Contract {
                r#type: proto::ContractType::Javascript as i32,
                payload: self.payload.clone(),
            }),
            r#priv: Some(proto::AccountPrivilege::with_master(0, 1)),
            init_balance: self.init_balance,
            init_input: self.init_input.clone(),
            ..Default::default()
        });
        Ok(op)
    }
}

/// Calls a contract, optionally paying it an asset.
///
/// The asset is attached only when `code`, `issuer` and a positive `amount`
/// are all given; otherwise this is a plain call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInvokeByAsset {
    #[serde(flatten)]
    pub meta: OperationMeta,
    pub contract_address: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub input: String,
}

impl ContractInvokeByAsset {
    pub fn build(&self, tx_source: Option<&str>) -> Result<proto::Operation> {
        validate::source(self.meta.source())?;
        validate::required_address(&self.contract_address, AddressRole::Contract)?;
        validate::distinct(
            self.meta.effective_source(tx_source),
            &self.contract_address,
            AddressRole::Contract,
        )?;
        validate::asset_code(&self.code, true)?;
        validate::non_negative(Field::Amount, self.amount)?;
        validate::optional_address(&self.issuer, AddressRole::Issuer)?;

        let asset = (!self.code.is_empty() && !self.issuer.is_empty() && self.amount > 0).then(|| {
            proto::Asset {
                key: Some(proto::AssetKey {
                    issuer: self.issuer.clone(),
                    code: self.code.clone(),
                    r#type: 0,
                }),
                amount: self.amount,
            }
        });

        let mut op = self.meta.wire(OperationType::PayAsset);
        op.pay_asset = Some(proto::OperationPayAsset {
            dest_address: self.contract_address.clone(),
            asset,
            input: self.input.clone(),
        });
        Ok(op)
    }
}

/// Calls a contract, paying it `amount` MO.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInvokeByBu {
    #[serde(flatten)]
    pub meta: OperationMeta,
    pub contract_address: String,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub input: String,
}

impl ContractInvokeByBu {
    pub fn build(&self, tx_source: Option<&str>) -> Result<proto::Operation> {
        validate::source(self.meta.source())?;
        validate::required_address(&self.contract_address, AddressRole::Contract)?;
        validate::distinct(
            self.meta.effective_source(tx_source),
            &self.contract_address,
            AddressRole::Contract,
        )?;
        validate::non_negative(Field::Amount, self.amount)?;

        let mut op = self.meta.wire(OperationType::PayCoin);
        op.pay_coin = Some(proto::OperationPayCoin {
            dest_address: self.contract_address.clone(),
            amount: self.amount,
            input: self.input.clone(),
        });
        Ok(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;

    const SOURCE: &str = "buQtjhgK9SakQPYGzoZ3iHodfRvd8qTGoaYd";
    const CONTRACT: &str = "buQsurH1M4rjLkfjzkxR9KXJ6jSu2r9xBNEw";
    const ISSUER: &str = "buQVU86Jm4FeRW4JcQTD9Rx9NkUkHikYGp6z";

    #[test]
    fn test_create_contract_wire_shape() {
        let request = ContractCreate {
            init_balance: 10_000_000,
            payload: "\"use strict\";function init(){}function main(){}".into(),
            init_input: "{}".into(),
            ..Default::default()
        };
        let op = request.build().unwrap();
        assert_eq!(op.r#type(), OperationType::CreateAccount);
        let body = op.create_account.unwrap();
        assert_eq!(body.dest_address, "");
        assert_eq!(body.init_input, "{}");
        assert!(body.contract.unwrap().payload.contains("main"));
        let privilege = body.r#priv.unwrap();
        assert_eq!(privilege.master_weight, 0);
        assert_eq!(privilege.thresholds.unwrap().tx_threshold, 1);
    }

    #[test]
    fn test_create_contract_check_order() {
        let mut request = ContractCreate {
            meta: OperationMeta::from_source("bad"),
            ..Default::default()
        };
        assert_eq!(
            request.build(),
            Err(SdkError::invalid_address(AddressRole::Source))
        );
        request.meta = OperationMeta::default();
        assert_eq!(request.build().unwrap_err().field(), Some(Field::InitBalance));
        request.init_balance = 1;
        assert_eq!(request.build().unwrap_err().field(), Some(Field::Payload));
    }

    #[test]
    fn test_invoke_by_asset_attaches_asset_only_when_complete() {
        let mut request = ContractInvokeByAsset {
            contract_address: CONTRACT.into(),
            code: "GLA".into(),
            issuer: ISSUER.into(),
            amount: 5,
            input: "{\"method\":\"x\"}".into(),
            ..Default::default()
        };
        let body = request.build(Some(SOURCE)).unwrap().pay_asset.unwrap();
        assert_eq!(body.asset.unwrap().amount, 5);
        assert_eq!(body.input, "{\"method\":\"x\"}");

        request.issuer = String::new();
        let body = request.build(Some(SOURCE)).unwrap().pay_asset.unwrap();
        assert!(body.asset.is_none());
        assert_eq!(body.dest_address, CONTRACT);
    }

    #[test]
    fn test_invoke_by_asset_check_order() {
        let mut request = ContractInvokeByAsset {
            meta: OperationMeta::from_source(SOURCE),
            contract_address: "bad".into(),
            code: "C".repeat(65),
            issuer: "bad".into(),
            amount: -1,
            ..Default::default()
        };
        assert_eq!(
            request.build(None),
            Err(SdkError::invalid_address(AddressRole::Contract))
        );
        request.contract_address = SOURCE.into();
        assert_eq!(
            request.build(None),
            Err(SdkError::self_reference(AddressRole::Contract))
        );
        request.contract_address = CONTRACT.into();
        assert_eq!(request.build(None).unwrap_err().field(), Some(Field::AssetCode));
        request.code = "GLA".into();
        assert_eq!(request.build(None).unwrap_err().field(), Some(Field::Amount));
        request.amount = 1;
        assert_eq!(
            request.build(None),
            Err(SdkError::invalid_address(AddressRole::Issuer))
        );
    }

    #[test]
    fn test_invoke_by_bu() {
        let request = ContractInvokeByBu {
            contract_address: CONTRACT.into(),
            amount: 0,
            input: "{}".into(),
            ..Default::default()
        };
        let body = request.build(None).unwrap().pay_coin.unwrap();
        assert_eq!(body.dest_address, CONTRACT);
        assert_eq!(body.amount, 0);

        assert_eq!(
            request.build(Some(CONTRACT)),
            Err(SdkError::self_reference(AddressRole::Contract))
        );
        let negative = ContractInvokeByBu {
            amount: -1,
            ..request
        };
        assert_eq!(negative.build(None).unwrap_err().field(), Some(Field::Amount));
    }
}
