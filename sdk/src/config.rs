//! # Protocol Configuration & Constants
//!
//! Every byte prefix, length limit and fee constant the toolkit depends on
//! lives here. Most of these are dictated by the ledger's own acceptance
//! rules, so they are not tunable: change one and the network starts
//! rejecting what this crate produces.
//!
//! The only runtime configuration is [`NetworkConfig`], which describes the
//! node a transport layer talks to. It is an ordinary value that callers
//! pass around explicitly.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Field, Result, SdkError};

// ---------------------------------------------------------------------------
// Identity Framing
// ---------------------------------------------------------------------------

/// Version prefix of an encoded address.
pub const ADDRESS_PREFIX: [u8; 3] = [0x01, 0x56, 0x01];

/// Version prefix of an encoded public key.
pub const PUBLIC_KEY_PREFIX: [u8; 2] = [0xB0, 0x01];

/// Version prefix of an encoded private key.
pub const PRIVATE_KEY_PREFIX: [u8; 4] = [0xDA, 0x37, 0x9F, 0x01];

/// Byte that follows the seed inside an encoded private key.
pub const PRIVATE_KEY_TERMINATOR: u8 = 0x00;

/// Trailing checksum length shared by all three encodings.
pub const CHECKSUM_LENGTH: usize = 4;

/// Ed25519 seed length in bytes.
pub const SEED_LENGTH: usize = 32;

/// Raw Ed25519 public key length in bytes.
pub const RAW_PUBLIC_KEY_LENGTH: usize = 32;

/// Ed25519 signature length in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// Offset into `SHA256(public_key)` where the address payload starts.
pub const ADDRESS_HASH_OFFSET: usize = 12;

/// Length of the hash slice carried inside an address.
pub const ADDRESS_HASH_LENGTH: usize = 20;

/// Decoded length of an address: prefix, hash slice, checksum.
pub const ADDRESS_LENGTH: usize = ADDRESS_PREFIX.len() + ADDRESS_HASH_LENGTH + CHECKSUM_LENGTH;

/// Decoded length of a public key: prefix, raw key, checksum.
pub const PUBLIC_KEY_LENGTH: usize = PUBLIC_KEY_PREFIX.len() + RAW_PUBLIC_KEY_LENGTH + CHECKSUM_LENGTH;

/// Decoded length of a private key: prefix, seed, terminator, checksum.
pub const PRIVATE_KEY_LENGTH: usize =
    PRIVATE_KEY_PREFIX.len() + SEED_LENGTH + 1 + CHECKSUM_LENGTH;

/// Base58 alphabet used by the ledger. Bitcoin's alphabet with `b`/`B` and
/// `u`/`U` swapped, which is why addresses read `bu...` and private keys
/// read `priv...`.
pub const BASE58_ALPHABET: &[u8; 58] =
    b"123456789AbCDEFGHJKLMNPQRSTuVWXYZaBcdefghijkmnopqrstUvwxyz";

// ---------------------------------------------------------------------------
// Operation Limits
// ---------------------------------------------------------------------------

/// Asset codes are 1..=64 bytes.
pub const ASSET_CODE_MAX_LENGTH: usize = 64;

/// Metadata keys are 1..=1024 bytes.
pub const METADATA_KEY_MAX_LENGTH: usize = 1024;

/// Metadata values may be empty but not larger than 256 KiB.
pub const METADATA_VALUE_MAX_LENGTH: usize = 256 * 1024;

/// Log topics are 1..=128 bytes.
pub const LOG_TOPIC_MAX_LENGTH: usize = 128;

/// Each log datum is 1..=1024 bytes.
pub const LOG_DATA_MAX_LENGTH: usize = 1024;

/// Token descriptions are 1..=1024 bytes.
pub const TOKEN_DESCRIPTION_MAX_LENGTH: usize = 1024;

/// Token decimals are 0..=8.
pub const TOKEN_MAX_DECIMALS: u32 = 8;

/// Ceiling for signer weights and the master weight (unsigned 32-bit).
pub const MAX_SIGNER_WEIGHT: i64 = u32::MAX as i64;

/// Operation types a per-type threshold may name are 1..=100.
pub const MAX_THRESHOLD_OPERATION_TYPE: i32 = 100;

/// Balance, in MO, given to an account activated on behalf of a token
/// recipient. 0.2 BU.
pub const ACTIVATION_INIT_BALANCE: i64 = 20_000_000;

// ---------------------------------------------------------------------------
// Fees & Units
// ---------------------------------------------------------------------------

/// The fee limit must cover at least this many gas units at the network's
/// minimum gas price.
pub const FEE_LIMIT_MULTIPLIER: i64 = 1_000;

/// BU has 8 decimals: 1 BU = 100 000 000 MO.
pub const BU_DECIMALS: u32 = 8;

/// Largest scale `units` accepts. `10^18` still fits in an `i64`.
pub const MAX_UNIT_DECIMALS: u32 = 18;

// ---------------------------------------------------------------------------
// ATP 1.0 Tokens
// ---------------------------------------------------------------------------

/// Version string written into ATP 1.0 token metadata.
pub const ATP10_VERSION: &str = "1.0";

/// Metadata key prefix under which an issuer publishes token properties.
pub const ATP10_METADATA_KEY_PREFIX: &str = "asset_property_";

// ---------------------------------------------------------------------------
// Network Configuration
// ---------------------------------------------------------------------------

/// Default connect timeout for a node transport, in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default read/write timeout for a node transport, in seconds.
pub const DEFAULT_READ_WRITE_TIMEOUT_SECS: u64 = 30;

/// Where a transport finds the ledger node.
///
/// The core never performs I/O with this; it exists so that the transport
/// collaborator (and the CLI) receive endpoint settings as a plain value
/// rather than from process-wide state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Base URL of the node's HTTP interface, without a trailing slash.
    pub url: String,

    /// Connect timeout in seconds. Zero disables it.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Read/write timeout in seconds. Zero disables it.
    #[serde(default = "default_read_write_timeout")]
    pub read_write_timeout_secs: u64,
}

fn default_connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_read_write_timeout() -> u64 {
    DEFAULT_READ_WRITE_TIMEOUT_SECS
}

impl NetworkConfig {
    /// Builds a config for `url` with default timeouts.
    ///
    /// The URL must use `http://` or `https://` and name a host. A trailing
    /// slash is dropped so endpoint paths can be appended directly.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let config = Self {
            url: url.into().trim_end_matches('/').to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            read_write_timeout_secs: DEFAULT_READ_WRITE_TIMEOUT_SECS,
        };
        config.validate()?;
        Ok(config)
    }

    /// Overrides both timeouts.
    pub fn with_timeouts(mut self, connect_secs: u64, read_write_secs: u64) -> Self {
        self.connect_timeout_secs = connect_secs;
        self.read_write_timeout_secs = read_write_secs;
        self
    }

    /// Checks the URL shape. Used after deserializing a config by hand.
    pub fn validate(&self) -> Result<()> {
        let host = self
            .url
            .strip_prefix("http://")
            .or_else(|| self.url.strip_prefix("https://"));
        match host {
            Some(rest) if !rest.is_empty() && !rest.starts_with('/') => Ok(()),
            _ => Err(SdkError::invalid_field(
                Field::NodeUrl,
                format!("'{}' is not an http(s) URL", self.url),
            )),
        }
    }

    /// Connect timeout, `None` when disabled.
    pub fn connect_timeout(&self) -> Option<Duration> {
        (self.connect_timeout_secs > 0).then(|| Duration::from_secs(self.connect_timeout_secs))
    }

    /// Read/write timeout, `None` when disabled.
    pub fn read_write_timeout(&self) -> Option<Duration> {
        (self.read_write_timeout_secs > 0)
            .then(|| Duration::from_secs(self.read_write_timeout_secs))
    }

    /// Endpoint accepting signed transactions.
    pub fn submit_url(&self) -> String {
        format!("{}/submitTransaction", self.url)
    }

    /// Endpoint reporting the current ledger and its fee schedule.
    pub fn fees_url(&self) -> String {
        format!("{}/getLedger?with_fee=true", self.url)
    }

    /// Endpoint describing a single account.
    pub fn account_url(&self, address: &str) -> String {
        format!("{}/getAccount?address={}", self.url, address)
    }
}
