//! External collaborators consulted while building a transaction.
//!
//! The toolkit never talks to the network itself. Two facts it cannot
//! compute locally come in through these traits, and whatever transport
//! implements them owns connection handling, retries and timeouts. A failed
//! query is reported as [`SdkError::ExternalQuery`] and aborts the build.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SdkError};
use crate::transaction::SignedTransaction;

/// Fee schedule reported by the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSnapshot {
    /// Minimum gas price, in MO per gas unit.
    pub gas_price: i64,
    /// Minimum balance an account must keep, in MO.
    pub base_reserve: i64,
}

/// Source of the network's current fee schedule.
pub trait FeeOracle {
    fn current_gas_price(&self) -> Result<FeeSnapshot>;
}

/// Answers whether an account already exists on the ledger.
pub trait ActivationOracle {
    fn is_activated(&self, address: &str) -> Result<bool>;
}

/// Accepts a signed transaction and returns the hash the network assigned
/// to it.
pub trait SubmissionSink {
    fn submit(&self, transaction: &SignedTransaction) -> Result<String>;
}

impl<T: FeeOracle + ?Sized> FeeOracle for &T {
    fn current_gas_price(&self) -> Result<FeeSnapshot> {
        (**self).current_gas_price()
    }
}

impl<T: ActivationOracle + ?Sized> ActivationOracle for &T {
    fn is_activated(&self, address: &str) -> Result<bool> {
        (**self).is_activated(address)
    }
}

/// An oracle answering from fixed data: a fee snapshot and a set of known
/// accounts. Used offline and in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticOracle {
    fees: Option<FeeSnapshot>,
    activated: HashSet<String>,
}

impl StaticOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fee snapshot returned by [`FeeOracle::current_gas_price`].
    pub fn with_fees(mut self, gas_price: i64, base_reserve: i64) -> Self {
        self.fees = Some(FeeSnapshot {
            gas_price,
            base_reserve,
        });
        self
    }

    /// Marks `address` as an existing account.
    pub fn with_activated(mut self, address: impl Into<String>) -> Self {
        self.activated.insert(address.into());
        self
    }
}

impl FeeOracle for StaticOracle {
    fn current_gas_price(&self) -> Result<FeeSnapshot> {
        let fees = self
            .fees
            .ok_or_else(|| SdkError::ExternalQuery("no fee snapshot configured".into()))?;
        if fees.gas_price < 0 || fees.base_reserve < 0 {
            return Err(SdkError::ExternalQuery(format!(
                "malformed fee snapshot: gas_price={}, base_reserve={}",
                fees.gas_price, fees.base_reserve
            )));
        }
        Ok(fees)
    }
}

impl ActivationOracle for StaticOracle {
    fn is_activated(&self, address: &str) -> Result<bool> {
        Ok(self.activated.contains(address))
    }
}
