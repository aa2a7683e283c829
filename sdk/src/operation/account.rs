//! Account operations: activation, metadata and privileges.

use serde::{Deserialize, Serialize};

use crate::config::{
    MAX_SIGNER_WEIGHT, MAX_THRESHOLD_OPERATION_TYPE, METADATA_KEY_MAX_LENGTH,
    METADATA_VALUE_MAX_LENGTH,
};
use crate::error::{AddressRole, Field, Result, SdkError};
use crate::transaction::proto::{self, OperationType};

use super::validate;
use super::OperationMeta;

/// Creates `dest_address` on the ledger and funds it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountActivate {
    #[serde(flatten)]
    pub meta: OperationMeta,
    pub dest_address: String,
    /// Starting balance in MO.
    pub init_balance: i64,
}

impl AccountActivate {
    pub fn build(&self, tx_source: Option<&str>) -> Result<proto::Operation> {
        validate::source(self.meta.source())?;
        validate::distinct(
            self.meta.effective_source(tx_source),
            &self.dest_address,
            AddressRole::Destination,
        )?;
        validate::required_address(&self.dest_address, AddressRole::Destination)?;
        validate::positive(Field::InitBalance, self.init_balance)?;

        let mut op = self.meta.wire(OperationType::CreateAccount);
        op.create_account = Some(proto::OperationCreateAccount {
            dest_address: self.dest_address.clone(),
            r#priv: Some(proto::AccountPrivilege::with_master(1, 1)),
            init_balance: self.init_balance,
            ..Default::default()
        });
        Ok(op)
    }
}

/// Writes, overwrites or deletes one metadata entry of the source account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSetMetadata {
    #[serde(flatten)]
    pub meta: OperationMeta,
    pub key: String,
    #[serde(default)]
    pub value: String,
    /// Expected current version; 0 skips the check.
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub delete_flag: bool,
}

impl AccountSetMetadata {
    pub fn build(&self) -> Result<proto::Operation> {
        validate::source(self.meta.source())?;
        validate::length(Field::MetadataKey, self.key.len(), 1, METADATA_KEY_MAX_LENGTH)?;
        validate::length(
            Field::MetadataValue,
            self.value.len(),
            0,
            METADATA_VALUE_MAX_LENGTH,
        )?;
        validate::non_negative(Field::MetadataVersion, self.version)?;

        let mut op = self.meta.wire(OperationType::SetMetadata);
        op.set_metadata = Some(proto::OperationSetMetadata {
            key: self.key.clone(),
            value: self.value.clone(),
            version: self.version,
            delete_flag: self.delete_flag,
        });
        Ok(op)
    }
}

/// A signer and the weight its signature carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerWeight {
    pub address: String,
    pub weight: i64,
}

/// Minimum total weight required for one operation type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeThreshold {
    /// Wire operation type, 1..=100.
    #[serde(rename = "type")]
    pub operation_type: i32,
    pub threshold: i64,
}

/// Changes signer weights and thresholds of the source account. Fields left
/// as `None` or empty are not changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSetPrivilege {
    #[serde(flatten)]
    pub meta: OperationMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_weight: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signers: Vec<SignerWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_threshold: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_thresholds: Vec<TypeThreshold>,
}

impl AccountSetPrivilege {
    pub fn build(&self) -> Result<proto::Operation> {
        validate::source(self.meta.source())?;
        if let Some(weight) = self.master_weight {
            validate::bounded(Field::MasterWeight, weight, MAX_SIGNER_WEIGHT)?;
        }
        for signer in &self.signers {
            validate::required_address(&signer.address, AddressRole::Signer)?;
            validate::bounded(Field::SignerWeight, signer.weight, MAX_SIGNER_WEIGHT)?;
        }
        if let Some(threshold) = self.tx_threshold {
            validate::non_negative(Field::TxThreshold, threshold)?;
        }
        for entry in &self.type_thresholds {
            if !(1..=MAX_THRESHOLD_OPERATION_TYPE).contains(&entry.operation_type) {
                return Err(SdkError::invalid_field(
                    Field::TypeThresholdType,
                    format!(
                        "{} is outside 1..={MAX_THRESHOLD_OPERATION_TYPE}",
                        entry.operation_type
                    ),
                ));
            }
            validate::non_negative(Field::TypeThreshold, entry.threshold)?;
        }

        let mut op = self.meta.wire(OperationType::SetPrivilege);
        op.set_privilege = Some(proto::OperationSetPrivilege {
            master_weight: self.master_weight.map(|w| w.to_string()).unwrap_or_default(),
            signers: self
                .signers
                .iter()
                .map(|s| proto::Signer {
                    address: s.address.clone(),
                    weight: s.weight,
                })
                .collect(),
            tx_threshold: self.tx_threshold.map(|t| t.to_string()).unwrap_or_default(),
            type_thresholds: self
                .type_thresholds
                .iter()
                .map(|t| proto::OperationTypeThreshold {
                    r#type: t.operation_type,
                    threshold: t.threshold,
                })
                .collect(),
        });
        Ok(op)
    }
}
