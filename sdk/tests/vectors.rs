//! Known-answer vectors.
//!
//! Every constant below was produced independently of this crate, so a
//! change in encoding, serialization or signing shows up as a mismatch here
//! before it reaches a node.

use bumo_sdk::identity::{
    address_from_public_key, decode_private_key, encode_keypair, is_valid_address,
    is_valid_private_key, is_valid_public_key, public_key_from_private_key, Address, PrivateKey,
};
use bumo_sdk::operation::{AccountActivate, BuSend, OperationMeta};
use bumo_sdk::oracle::StaticOracle;
use bumo_sdk::transaction::{assemble, sign_blob, transaction_hash, TransactionBuilder};
use bumo_sdk::AddressRole;

struct KeyVector {
    private_key: &'static str,
    public_key: &'static str,
    address: &'static str,
}

const KEYS: [KeyVector; 2] = [
    KeyVector {
        private_key: "privbvCDPhjNmXdZD2p6RWfXhTC3qzpn8REtZtPSu64mMQDMxAJ3f1hu",
        public_key: "b00191923d929a3ee65c5de3bf84d4cb23204da0675b8426e5d3ad691956bd6629c4f7b68c20",
        address: "buQtjhgK9SakQPYGzoZ3iHodfRvd8qTGoaYd",
    },
    KeyVector {
        private_key: "privbvTuL1k8z27i9eyBrFDUvAVVCSxKeLtzjMMZEqimFwbNchnejS81",
        public_key: "b00179b4adb1d3188aa1b98d6977a837bd4afdbb4813ac65472074fe3a491979bf256ba63895",
        address: "buQsurH1M4rjLkfjzkxR9KXJ6jSu2r9xBNEw",
    },
];

const PAY_COIN_BLOB: &str = "0a24627551746a68674b3953616b515059477a6f5a3369486f6466527664387154476f615964100118c0843d20e8073a2e0807522a0a2462755173757248314d34726a4c6b666a7a6b7852394b584a366a537532723978424e457710a08d06";
const PAY_COIN_SIGNATURE: &str = "eb5ae1386df81d67e8e4cd99febc66d1898eae25b3fb31685d47e0e4e357718ee7c7f7fe8fcb70366db17ac67a553fed33b0bc5260d8a7749344f73ee152d206";
const PAY_COIN_HASH: &str = "9ef4d5e0fc25e2bedce779bdabe04514ca25c673a42305fb2f229181a37399be";
const ACTIVATE_BLOB: &str = "0a24627551746a68674b3953616b515059477a6f5a3369486f6466527664387154476f615964100718c0843d20e80732046d656d6f3a37080122330a2462755173757248314d34726a4c6b666a7a6b7852394b584a366a537532723978424e45771a0608011a0208012880dac409";

#[test]
fn test_key_encodings() {
    for v in &KEYS {
        assert!(is_valid_private_key(v.private_key));
        assert!(is_valid_public_key(v.public_key));
        assert!(is_valid_address(v.address));
        assert_eq!(public_key_from_private_key(v.private_key).unwrap(), v.public_key);
        assert_eq!(address_from_public_key(v.public_key).unwrap(), v.address);

        let encoded = encode_keypair(&decode_private_key(v.private_key).unwrap());
        assert_eq!(encoded.private_key, v.private_key);
        assert_eq!(encoded.public_key, v.public_key);
        assert_eq!(encoded.address, v.address);

        let key: PrivateKey = v.private_key.parse().unwrap();
        assert_eq!(key.address().as_str(), v.address);
    }
}

#[test]
fn test_encodings_are_not_interchangeable() {
    let v = &KEYS[0];
    assert!(!is_valid_address(v.public_key));
    assert!(!is_valid_address(v.private_key));
    assert!(!is_valid_public_key(v.address));
    assert!(!is_valid_private_key(v.public_key));
    assert!(Address::parse(v.public_key, AddressRole::Destination).is_err());
}

#[test]
fn test_single_character_change_breaks_checksum() {
    for v in &KEYS {
        let mut address = v.address.to_string();
        let last = address.pop().unwrap();
        address.push(if last == 'a' { 'b' } else { 'a' });
        assert!(!is_valid_address(&address));
    }
}

#[test]
fn test_pay_coin_blob_signature_and_hash() {
    let oracle = StaticOracle::new().with_fees(1_000, 10_000_000);
    let envelope = TransactionBuilder::new(KEYS[0].address)
        .nonce(1)
        .gas_price(1_000)
        .fee_limit(1_000_000)
        .operation(BuSend {
            meta: OperationMeta::default(),
            dest_address: KEYS[1].address.into(),
            amount: 100_000,
        })
        .build();
    let blob = assemble(&envelope, &oracle, &oracle).unwrap();
    assert_eq!(hex::encode(&blob), PAY_COIN_BLOB);
    assert_eq!(transaction_hash(&blob), PAY_COIN_HASH);

    let signatures = sign_blob(&blob, &[KEYS[0].private_key]).unwrap();
    assert_eq!(signatures[0].sign_data, PAY_COIN_SIGNATURE);
    assert_eq!(signatures[0].public_key, KEYS[0].public_key);
}

#[test]
fn test_activate_blob() {
    let oracle = StaticOracle::new().with_fees(1_000, 10_000_000);
    let envelope = TransactionBuilder::new(KEYS[0].address)
        .nonce(7)
        .gas_price(1_000)
        .fee_limit(1_000_000)
        .metadata(b"memo".to_vec())
        .operation(AccountActivate {
            meta: OperationMeta::default(),
            dest_address: KEYS[1].address.into(),
            init_balance: 20_000_000,
        })
        .build();
    let blob = assemble(&envelope, &oracle, &oracle).unwrap();
    assert_eq!(hex::encode(blob), ACTIVATE_BLOB);
}
