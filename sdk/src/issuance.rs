//! # Composite Token Issuance
//!
//! ATP 1.0 tokens are plain ledger assets plus a convention. Issuing one and
//! handing the first batch to a holder takes several primitive operations:
//!
//! ```text
//! [activate dest]        only when the oracle says dest does not exist yet
//! issue-asset            full supply, under the issuer's account
//! send-asset             now_supply, issuer -> dest
//! [set-privilege]        one-off only: master weight 0, tx threshold 1
//! ```
//!
//! The expansion is all-or-nothing: operations collect in a local buffer
//! that is returned only when every step succeeded, otherwise the first
//! error is returned unchanged.
//!
//! [`Atp10Metadata`] renders the descriptive document issuers publish under
//! `asset_property_<code>` so wallets can display the token.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{
    ACTIVATION_INIT_BALANCE, ATP10_METADATA_KEY_PREFIX, ATP10_VERSION,
    TOKEN_DESCRIPTION_MAX_LENGTH, TOKEN_MAX_DECIMALS,
};
use crate::error::{AddressRole, Field, Result, SdkError};
use crate::operation::validate;
use crate::operation::{
    AccountActivate, AccountSetMetadata, AccountSetPrivilege, AssetIssue, AssetSend,
    OperationMeta,
};
use crate::oracle::ActivationOracle;
use crate::transaction::proto;

/// How much control the issuer keeps after the first distribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// Supply is fixed forever: the issuer gives up its master key weight.
    OneOff,
    /// The issuer may issue more later with [`AppendToIssueToken`].
    #[default]
    Extensible,
}

/// Issues a token and distributes `now_supply` of it to `dest_address`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueAndDistributeToken {
    #[serde(flatten)]
    pub meta: OperationMeta,
    pub dest_address: String,
    #[serde(default)]
    pub issue_type: IssueType,
    pub code: String,
    /// Total supply in base units.
    pub total_supply: i64,
    /// Units sent to the destination now; must stay below `total_supply`.
    pub now_supply: i64,
    pub decimals: u32,
    pub description: String,
}

impl IssueAndDistributeToken {
    /// Validates the request, consults `activation` for the destination and
    /// returns the primitive operations in ledger order.
    pub fn expand(
        &self,
        tx_source: Option<&str>,
        activation: &dyn ActivationOracle,
    ) -> Result<Vec<proto::Operation>> {
        let issuer = self.meta.effective_source(tx_source);
        validate::source(self.meta.source())?;
        validate::required_address(&self.dest_address, AddressRole::Destination)?;
        validate::distinct(issuer, &self.dest_address, AddressRole::Destination)?;
        validate::asset_code(&self.code, false)?;
        validate::positive(Field::TotalSupply, self.total_supply)?;
        if self.now_supply <= 0 || self.now_supply >= self.total_supply {
            return Err(SdkError::invalid_field(
                Field::NowSupply,
                format!(
                    "{} must be greater than 0 and below the total supply {}",
                    self.now_supply, self.total_supply
                ),
            ));
        }
        if self.decimals > TOKEN_MAX_DECIMALS {
            return Err(SdkError::invalid_field(
                Field::Decimals,
                format!("{} exceeds {TOKEN_MAX_DECIMALS}", self.decimals),
            ));
        }
        validate::length(
            Field::Description,
            self.description.len(),
            1,
            TOKEN_DESCRIPTION_MAX_LENGTH,
        )?;

        let activated = activation.is_activated(&self.dest_address)?;

        let mut buffer = Vec::with_capacity(4);
        if !activated {
            buffer.push(
                AccountActivate {
                    meta: self.meta.clone(),
                    dest_address: self.dest_address.clone(),
                    init_balance: ACTIVATION_INIT_BALANCE,
                }
                .build(tx_source)?,
            );
        }
        buffer.push(
            AssetIssue {
                meta: self.meta.clone(),
                code: self.code.clone(),
                amount: self.total_supply,
            }
            .build()?,
        );
        buffer.push(
            AssetSend {
                meta: self.meta.clone(),
                dest_address: self.dest_address.clone(),
                code: self.code.clone(),
                issuer: issuer.unwrap_or_default().to_string(),
                amount: self.now_supply,
            }
            .build(tx_source)?,
        );
        if self.issue_type == IssueType::OneOff {
            buffer.push(
                AccountSetPrivilege {
                    meta: self.meta.clone(),
                    master_weight: Some(0),
                    tx_threshold: Some(1),
                    ..Default::default()
                }
                .build()?,
            );
        }

        debug!(
            code = %self.code,
            dest = %self.dest_address,
            activated,
            operations = buffer.len(),
            "expanded token issuance"
        );
        Ok(buffer)
    }
}

/// Issues `amount` more units of an extensible token and sends them to
/// `dest_address`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppendToIssueToken {
    #[serde(flatten)]
    pub meta: OperationMeta,
    pub dest_address: String,
    pub code: String,
    pub amount: i64,
}

impl AppendToIssueToken {
    pub fn expand(&self, tx_source: Option<&str>) -> Result<Vec<proto::Operation>> {
        let issuer = self.meta.effective_source(tx_source);
        validate::source(self.meta.source())?;
        validate::required_address(&self.dest_address, AddressRole::Destination)?;
        validate::distinct(issuer, &self.dest_address, AddressRole::Destination)?;
        validate::asset_code(&self.code, false)?;
        validate::positive(Field::Amount, self.amount)?;

        let issue = AssetIssue {
            meta: self.meta.clone(),
            code: self.code.clone(),
            amount: self.amount,
        }
        .build()?;
        let send = AssetSend {
            meta: self.meta.clone(),
            dest_address: self.dest_address.clone(),
            code: self.code.clone(),
            issuer: issuer.unwrap_or_default().to_string(),
            amount: self.amount,
        }
        .build(tx_source)?;
        Ok(vec![issue, send])
    }
}

/// The ATP 1.0 description document of a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Atp10Metadata {
    pub code: String,
    pub name: String,
    pub total_supply: i64,
    pub decimals: u32,
    pub description: String,
    pub version: String,
    #[serde(default)]
    pub icon: String,
}

impl Atp10Metadata {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        total_supply: i64,
        decimals: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            total_supply,
            decimals,
            description: description.into(),
            version: ATP10_VERSION.to_string(),
            icon: String::new(),
        }
    }

    /// Base64 image or URL shown by wallets.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Describes the token of an issuance request.
    pub fn for_issuance(request: &IssueAndDistributeToken, name: impl Into<String>) -> Self {
        Self::new(
            request.code.clone(),
            name,
            request.total_supply,
            request.decimals,
            request.description.clone(),
        )
    }

    /// The account metadata key the document is stored under.
    pub fn metadata_key(&self) -> String {
        format!("{ATP10_METADATA_KEY_PREFIX}{}", self.code)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| SdkError::Serialization(e.to_string()))
    }

    /// A set-metadata request publishing this document on the issuer's
    /// account.
    pub fn to_set_metadata(&self, meta: OperationMeta) -> Result<AccountSetMetadata> {
        Ok(AccountSetMetadata {
            meta,
            key: self.metadata_key(),
            value: self.to_json()?,
            version: 0,
            delete_flag: false,
        })
    }
}
