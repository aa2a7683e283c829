//! Envelope validation and canonical serialization.

use prost::Message;
use tracing::{debug, info};

use crate::config::FEE_LIMIT_MULTIPLIER;
use crate::crypto::hash::sha256;
use crate::error::{AddressRole, FeeKind, Field, Result, SdkError};
use crate::operation::validate;
use crate::oracle::{ActivationOracle, FeeOracle};

use super::envelope::TransactionEnvelope;
use super::proto;

/// Validates `envelope`, builds every operation and returns the serialized
/// transaction blob.
///
/// Checks run in this order, stopping at the first failure:
///
/// 1. the source address;
/// 2. gas price and fee limit against the fee oracle's current minimum
///    (the fee limit must cover `minimum × 1000`);
/// 3. nonce > 0, ceiling ledger sequence ≥ 0, at least one operation;
/// 4. each operation in declared order, with composite requests spliced in
///    place.
///
/// Identical envelopes and oracle answers always produce identical bytes.
pub fn assemble(
    envelope: &TransactionEnvelope,
    fees: &dyn FeeOracle,
    activation: &dyn ActivationOracle,
) -> Result<Vec<u8>> {
    validate::required_address(&envelope.source_address, AddressRole::Source)?;

    let minimum = fees.current_gas_price()?.gas_price;
    if envelope.gas_price < minimum {
        return Err(SdkError::InsufficientFee {
            kind: FeeKind::GasPrice,
            offered: envelope.gas_price,
            minimum,
        });
    }
    let minimum_fee_limit = minimum.saturating_mul(FEE_LIMIT_MULTIPLIER);
    if envelope.fee_limit < minimum_fee_limit {
        return Err(SdkError::InsufficientFee {
            kind: FeeKind::FeeLimit,
            offered: envelope.fee_limit,
            minimum: minimum_fee_limit,
        });
    }

    if envelope.nonce <= 0 {
        return Err(SdkError::InvalidNonce(envelope.nonce));
    }
    let ceil_ledger_seq = envelope.ceil_ledger_seq.unwrap_or(0);
    if ceil_ledger_seq < 0 {
        return Err(SdkError::invalid_field(
            Field::CeilLedgerSeq,
            format!("must not be negative, got {ceil_ledger_seq}"),
        ));
    }
    if envelope.operations.is_empty() {
        return Err(SdkError::InvalidOperationSet(
            "a transaction needs at least one operation".into(),
        ));
    }

    let tx_source = Some(envelope.source_address.as_str());
    let mut operations = Vec::with_capacity(envelope.operations.len());
    for (index, request) in envelope.operations.iter().enumerate() {
        let built = request.build(tx_source, activation)?;
        debug!(index, kind = request.kind(), "operation accepted");
        operations.extend(built);
    }

    let transaction = proto::Transaction {
        source_address: envelope.source_address.clone(),
        nonce: envelope.nonce,
        fee_limit: envelope.fee_limit,
        gas_price: envelope.gas_price,
        ceil_ledger_seq,
        metadata: envelope.metadata.clone(),
        operations,
    };
    let blob = transaction.encode_to_vec();

    info!(
        source = %envelope.source_address,
        nonce = envelope.nonce,
        operations = transaction.operations.len(),
        bytes = blob.len(),
        hash = %hex::encode(sha256(&blob)),
        "assembled transaction"
    );
    Ok(blob)
}

/// Parses a blob back into its wire message.
pub fn decode_blob(blob: &[u8]) -> Result<proto::Transaction> {
    proto::Transaction::decode(blob).map_err(|e| SdkError::Serialization(e.to_string()))
}
