//! The unsigned transaction a caller describes before assembly.

use serde::{Deserialize, Serialize};

use crate::operation::Operation;

// ---------------------------------------------------------------------------
// TransactionEnvelope
// ---------------------------------------------------------------------------

/// Envelope fields plus the ordered operation requests.
///
/// Nothing is validated here; [`super::assemble`] checks every field against
/// the network's rules when it serializes the envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionEnvelope {
    /// Account paying fees and consuming the nonce.
    pub source_address: String,

    /// The source account's next nonce, strictly positive.
    pub nonce: i64,

    /// MO offered per unit of gas.
    pub gas_price: i64,

    /// Most MO the transaction may spend on fees.
    pub fee_limit: i64,

    /// Last ledger sequence the transaction may be included in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceil_ledger_seq: Option<i64>,

    /// Opaque bytes attached to the transaction, hex in JSON.
    #[serde(default, with = "hex", skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<u8>,

    pub operations: Vec<Operation>,
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent construction of a [`TransactionEnvelope`].
///
/// ```
/// use bumo_sdk::operation::{BuSend, OperationMeta};
/// use bumo_sdk::transaction::TransactionBuilder;
///
/// let envelope = TransactionBuilder::new("buQtjhgK9SakQPYGzoZ3iHodfRvd8qTGoaYd")
///     .nonce(1)
///     .gas_price(1_000)
///     .fee_limit(1_000_000)
///     .operation(BuSend {
///         meta: OperationMeta::default(),
///         dest_address: "buQsurH1M4rjLkfjzkxR9KXJ6jSu2r9xBNEw".into(),
///         amount: 100_000,
///     })
///     .build();
/// assert_eq!(envelope.operations.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransactionBuilder {
    envelope: TransactionEnvelope,
}

impl TransactionBuilder {
    pub fn new(source_address: impl Into<String>) -> Self {
        Self {
            envelope: TransactionEnvelope {
                source_address: source_address.into(),
                ..Default::default()
            },
        }
    }

    pub fn nonce(mut self, nonce: i64) -> Self {
        self.envelope.nonce = nonce;
        self
    }

    pub fn gas_price(mut self, gas_price: i64) -> Self {
        self.envelope.gas_price = gas_price;
        self
    }

    pub fn fee_limit(mut self, fee_limit: i64) -> Self {
        self.envelope.fee_limit = fee_limit;
        self
    }

    pub fn ceil_ledger_seq(mut self, seq: i64) -> Self {
        self.envelope.ceil_ledger_seq = Some(seq);
        self
    }

    pub fn metadata(mut self, metadata: impl Into<Vec<u8>>) -> Self {
        self.envelope.metadata = metadata.into();
        self
    }

    /// Appends one operation request; order is preserved on the wire.
    pub fn operation(mut self, operation: impl Into<Operation>) -> Self {
        self.envelope.operations.push(operation.into());
        self
    }

    pub fn build(self) -> TransactionEnvelope {
        self.envelope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::{LogCreate, OperationMeta};

    #[test]
    fn test_builder_sets_every_field() {
        let envelope = TransactionBuilder::new("buQ")
            .nonce(3)
            .gas_price(1_000)
            .fee_limit(2_000_000)
            .ceil_ledger_seq(100)
            .metadata(b"memo".to_vec())
            .operation(LogCreate {
                meta: OperationMeta::default(),
                topic: "t".into(),
                datas: vec!["d".into()],
            })
            .build();
        assert_eq!(envelope.source_address, "buQ");
        assert_eq!(envelope.nonce, 3);
        assert_eq!(envelope.gas_price, 1_000);
        assert_eq!(envelope.fee_limit, 2_000_000);
        assert_eq!(envelope.ceil_ledger_seq, Some(100));
        assert_eq!(envelope.metadata, b"memo");
        assert_eq!(envelope.operations[0].kind(), "log_create");
    }

    #[test]
    fn test_envelope_json() {
        let json = r#"{
            "source_address": "buQtjhgK9SakQPYGzoZ3iHodfRvd8qTGoaYd",
            "nonce": 1,
            "gas_price": 1000,
            "fee_limit": 1000000,
            "metadata": "6d656d6f",
            "operations": [
                {"type": "log_create", "topic": "t", "datas": ["d"]}
            ]
        }"#;
        let envelope: TransactionEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.ceil_ledger_seq, None);
        assert_eq!(envelope.metadata, b"memo");
        assert_eq!(envelope.operations.len(), 1);

        let rendered = serde_json::to_value(&envelope).unwrap();
        assert!(rendered.get("ceil_ledger_seq").is_none());
        assert_eq!(rendered["metadata"], "6d656d6f");
    }
}
