//! End-to-end tests for the BUMO SDK.
//!
//! Each test walks the client flow a wallet follows: generate or decode keys,
//! describe a transaction, assemble it against an oracle, sign the blob and
//! check what would be handed to the node. Oracles are in-memory, so nothing
//! here touches the network.

use std::cell::RefCell;

use bumo_sdk::config::{NetworkConfig, ACTIVATION_INIT_BALANCE};
use bumo_sdk::identity::{self, PrivateKey};
use bumo_sdk::issuance::{AppendToIssueToken, IssueAndDistributeToken, IssueType};
use bumo_sdk::operation::{
    AccountSetMetadata, AccountSetPrivilege, BuSend, LogCreate, OperationMeta, SignerWeight,
    TokenTransfer,
};
use bumo_sdk::oracle::{ActivationOracle, StaticOracle, SubmissionSink};
use bumo_sdk::transaction::proto::OperationType;
use bumo_sdk::transaction::{
    assemble, decode_blob, sign_blob, verify_signatures, SignedTransaction, TransactionBuilder,
    TransactionEnvelope,
};
use bumo_sdk::units::{bu_to_mo, mo_to_bu};
use bumo_sdk::{AddressRole, Result, SdkError};

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

const ISSUER_KEY: &str = "privbvCDPhjNmXdZD2p6RWfXhTC3qzpn8REtZtPSu64mMQDMxAJ3f1hu";
const ISSUER: &str = "buQtjhgK9SakQPYGzoZ3iHodfRvd8qTGoaYd";
const HOLDER_KEY: &str = "privbvTuL1k8z27i9eyBrFDUvAVVCSxKeLtzjMMZEqimFwbNchnejS81";
const HOLDER: &str = "buQsurH1M4rjLkfjzkxR9KXJ6jSu2r9xBNEw";
const CONTRACT: &str = "buQVU86Jm4FeRW4JcQTD9Rx9NkUkHikYGp6z";

/// A node that currently charges 1000 MO per gas and knows only the issuer.
fn network() -> StaticOracle {
    StaticOracle::new()
        .with_fees(1_000, 10_000_000)
        .with_activated(ISSUER)
}

fn builder(nonce: i64) -> TransactionBuilder {
    TransactionBuilder::new(ISSUER)
        .nonce(nonce)
        .gas_price(1_000)
        .fee_limit(1_000_000)
}

/// Records every submitted transaction and hands back its hash.
#[derive(Default)]
struct RecordingSink {
    submitted: RefCell<Vec<SignedTransaction>>,
}

impl SubmissionSink for RecordingSink {
    fn submit(&self, transaction: &SignedTransaction) -> Result<String> {
        self.submitted.borrow_mut().push(transaction.clone());
        Ok(transaction.hash())
    }
}

fn kinds(blob: &[u8]) -> Vec<OperationType> {
    decode_blob(blob)
        .unwrap()
        .operations
        .iter()
        .map(|op| op.r#type())
        .collect()
}

// ---------------------------------------------------------------------------
// Flows
// ---------------------------------------------------------------------------

#[test]
fn test_fresh_account_pays_and_submits() {
    let keys = identity::generate().unwrap();
    assert!(identity::is_valid_address(&keys.address));
    assert_eq!(
        identity::public_key_from_private_key(&keys.private_key).unwrap(),
        keys.public_key
    );

    let amount = bu_to_mo("0.5").unwrap();
    let envelope = TransactionBuilder::new(keys.address.clone())
        .nonce(1)
        .gas_price(1_000)
        .fee_limit(1_000_000)
        .operation(BuSend {
            meta: OperationMeta::default(),
            dest_address: HOLDER.into(),
            amount,
        })
        .build();

    let blob = assemble(&envelope, &network(), &network()).unwrap();
    let signed = SignedTransaction::sign(blob, &[keys.private_key.as_str()]).unwrap();
    assert!(signed.verify());
    assert_eq!(signed.signatures[0].public_key, keys.public_key);

    let decoded = decode_blob(&signed.blob).unwrap();
    let pay = decoded.operations[0].pay_coin.as_ref().unwrap();
    assert_eq!(mo_to_bu(&pay.amount.to_string()).unwrap(), "0.5");

    let sink = RecordingSink::default();
    let hash = sink.submit(&signed).unwrap();
    assert_eq!(hash.len(), 64);
    assert_eq!(sink.submitted.borrow().len(), 1);
}

#[test]
fn test_multisig_setup_then_cosigned_payment() {
    let setup = builder(1)
        .operation(AccountSetPrivilege {
            meta: OperationMeta::default(),
            master_weight: Some(1),
            signers: vec![SignerWeight {
                address: HOLDER.into(),
                weight: 1,
            }],
            tx_threshold: Some(2),
            type_thresholds: Vec::new(),
        })
        .build();
    let blob = assemble(&setup, &network(), &network()).unwrap();
    let privilege = decode_blob(&blob).unwrap().operations[0]
        .set_privilege
        .clone()
        .unwrap();
    assert_eq!(privilege.master_weight, "1");
    assert_eq!(privilege.tx_threshold, "2");

    let payment = builder(2)
        .operation(BuSend {
            meta: OperationMeta::default(),
            dest_address: HOLDER.into(),
            amount: 1,
        })
        .build();
    let blob = assemble(&payment, &network(), &network()).unwrap();
    let signatures = sign_blob(&blob, &[ISSUER_KEY, HOLDER_KEY]).unwrap();
    assert_eq!(signatures.len(), 2);
    assert!(verify_signatures(&blob, &signatures));
    assert!(!verify_signatures(&blob[1..], &signatures));
}

#[test]
fn test_one_off_issuance_to_new_holder() {
    let envelope = builder(3)
        .operation(IssueAndDistributeToken {
            meta: OperationMeta::default(),
            dest_address: HOLDER.into(),
            issue_type: IssueType::OneOff,
            code: "GLA".into(),
            total_supply: 1_000_000,
            now_supply: 400_000,
            decimals: 2,
            description: "Global".into(),
        })
        .build();
    let blob = assemble(&envelope, &network(), &network()).unwrap();
    assert_eq!(
        kinds(&blob),
        [
            OperationType::CreateAccount,
            OperationType::IssueAsset,
            OperationType::PayAsset,
            OperationType::SetPrivilege,
        ]
    );

    let tx = decode_blob(&blob).unwrap();
    let activate = tx.operations[0].create_account.as_ref().unwrap();
    assert_eq!(activate.dest_address, HOLDER);
    assert_eq!(activate.init_balance, ACTIVATION_INIT_BALANCE);

    let pay = tx.operations[2].pay_asset.as_ref().unwrap();
    let asset = pay.asset.as_ref().unwrap();
    assert_eq!(asset.amount, 400_000);
    assert_eq!(asset.key.as_ref().unwrap().issuer, ISSUER);

    let privilege = tx.operations[3].set_privilege.as_ref().unwrap();
    assert_eq!(privilege.master_weight, "0");
    assert_eq!(privilege.tx_threshold, "1");
}

#[test]
fn test_extensible_issuance_then_append() {
    let oracle = network().with_activated(HOLDER);
    let issue = builder(4)
        .operation(IssueAndDistributeToken {
            meta: OperationMeta::default(),
            dest_address: HOLDER.into(),
            issue_type: IssueType::Extensible,
            code: "GLA".into(),
            total_supply: 1_000,
            now_supply: 10,
            decimals: 0,
            description: "Global".into(),
        })
        .build();
    let blob = assemble(&issue, &oracle, &oracle).unwrap();
    assert_eq!(
        kinds(&blob),
        [OperationType::IssueAsset, OperationType::PayAsset]
    );

    let append = builder(5)
        .operation(AppendToIssueToken {
            meta: OperationMeta::default(),
            dest_address: HOLDER.into(),
            code: "GLA".into(),
            amount: 500,
        })
        .build();
    let blob = assemble(&append, &oracle, &oracle).unwrap();
    assert_eq!(
        kinds(&blob),
        [OperationType::IssueAsset, OperationType::PayAsset]
    );
}

#[test]
fn test_activation_oracle_failure_aborts_assembly() {
    struct Offline;
    impl ActivationOracle for Offline {
        fn is_activated(&self, _address: &str) -> Result<bool> {
            Err(SdkError::ExternalQuery("connection refused".into()))
        }
    }

    let envelope = builder(6)
        .operation(IssueAndDistributeToken {
            meta: OperationMeta::default(),
            dest_address: HOLDER.into(),
            issue_type: IssueType::OneOff,
            code: "GLA".into(),
            total_supply: 100,
            now_supply: 1,
            decimals: 0,
            description: "Global".into(),
        })
        .build();
    let err = assemble(&envelope, &network(), &Offline).unwrap_err();
    assert_eq!(err, SdkError::ExternalQuery("connection refused".into()));
}

#[test]
fn test_token_transfer_is_a_contract_call() {
    let envelope = builder(7)
        .operation(TokenTransfer {
            meta: OperationMeta::default(),
            contract_address: CONTRACT.into(),
            dest_address: HOLDER.into(),
            amount: 250,
        })
        .build();
    let blob = assemble(&envelope, &network(), &network()).unwrap();
    let tx = decode_blob(&blob).unwrap();
    let pay = tx.operations[0].pay_coin.as_ref().unwrap();
    assert_eq!(pay.dest_address, CONTRACT);
    assert_eq!(pay.amount, 0);

    let call: serde_json::Value = serde_json::from_str(&pay.input).unwrap();
    assert_eq!(call["method"], "transfer");
    assert_eq!(call["params"]["to"], HOLDER);
    assert_eq!(call["params"]["value"], "250");
}

#[test]
fn test_operation_source_overrides_transaction_source() {
    // The holder runs the operation, so paying the issuer is allowed.
    let envelope = builder(8)
        .operation(BuSend {
            meta: OperationMeta::from_source(HOLDER),
            dest_address: ISSUER.into(),
            amount: 1,
        })
        .build();
    let blob = assemble(&envelope, &network(), &network()).unwrap();
    assert_eq!(decode_blob(&blob).unwrap().operations[0].source_address, HOLDER);

    // Without the override the payment targets its own source.
    let envelope = builder(9)
        .operation(BuSend {
            meta: OperationMeta::default(),
            dest_address: ISSUER.into(),
            amount: 1,
        })
        .build();
    assert_eq!(
        assemble(&envelope, &network(), &network()).unwrap_err(),
        SdkError::SelfReferenceConflict {
            role: AddressRole::Destination
        }
    );
}

#[test]
fn test_json_envelope_assembles() {
    let json = format!(
        r#"{{
            "source_address": "{ISSUER}",
            "nonce": 10,
            "gas_price": 1000,
            "fee_limit": 1000000,
            "operations": [
                {{"type": "account_set_metadata", "key": "k", "value": "v"}},
                {{"type": "log_create", "topic": "audit", "datas": ["one", "two"]}},
                {{"type": "token_issue", "dest_address": "{HOLDER}", "issue_type": "one_off",
                  "code": "GLA", "total_supply": 100, "now_supply": 5, "decimals": 0,
                  "description": "Global"}}
            ]
        }}"#
    );
    let envelope: TransactionEnvelope = serde_json::from_str(&json).unwrap();
    let blob = assemble(&envelope, &network(), &network()).unwrap();
    assert_eq!(
        kinds(&blob),
        [
            OperationType::SetMetadata,
            OperationType::Log,
            OperationType::CreateAccount,
            OperationType::IssueAsset,
            OperationType::PayAsset,
            OperationType::SetPrivilege,
        ]
    );
}

#[test]
fn test_rejected_request_produces_no_blob() {
    let envelope = builder(11)
        .operation(LogCreate {
            meta: OperationMeta::default(),
            topic: "ok".into(),
            datas: vec!["d".into()],
        })
        .operation(AccountSetMetadata {
            meta: OperationMeta::default(),
            key: String::new(),
            value: "v".into(),
            version: 0,
            delete_flag: false,
        })
        .build();
    let err = assemble(&envelope, &network(), &network()).unwrap_err();
    assert!(matches!(err, SdkError::InvalidFieldValue { .. }));
}

#[test]
fn test_submit_body_targets_network_endpoint() {
    let config = NetworkConfig::new("http://seed1.bumo.io:16002").unwrap();
    assert_eq!(
        config.submit_url(),
        "http://seed1.bumo.io:16002/submitTransaction"
    );

    let blob = assemble(
        &builder(12)
            .operation(BuSend {
                meta: OperationMeta::default(),
                dest_address: HOLDER.into(),
                amount: 1,
            })
            .build(),
        &network(),
        &network(),
    )
    .unwrap();
    let signer: PrivateKey = ISSUER_KEY.parse().unwrap();
    let signed = SignedTransaction::sign(blob, &[signer.expose()]).unwrap();
    let body: serde_json::Value = serde_json::from_str(&signed.submit_body().unwrap()).unwrap();
    assert_eq!(
        body["items"][0]["transaction_blob"],
        hex::encode(&signed.blob)
    );
    assert_eq!(
        body["items"][0]["signatures"][0]["public_key"],
        signer.public_key().to_string()
    );
}
