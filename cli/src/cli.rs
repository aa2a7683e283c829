//! # CLI Interface
//!
//! Argument structure for `bumo-cli`, defined with `clap` derive. Secrets and
//! network settings can also come from the environment so they stay out of
//! shell history.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

/// Offline transaction toolkit for the BUMO ledger.
///
/// Generates and inspects keys, assembles transactions from JSON requests,
/// and signs or verifies blobs. Nothing is sent to a node.
#[derive(Parser, Debug)]
#[command(
    name = "bumo-cli",
    about = "Offline transaction toolkit for the BUMO ledger",
    version,
    propagate_version = true
)]
pub struct BumoCli {
    /// Log output format on stderr: "pretty" or "json".
    #[arg(long, global = true, default_value = "pretty")]
    pub log_format: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a fresh key pair and print its encodings as JSON.
    Keygen,
    /// Validate an encoded key or address and print what derives from it.
    Inspect(InspectArgs),
    /// Sign a hex blob with one or more private keys.
    Sign(SignArgs),
    /// Check one signature over a hex blob. The exit status is 0 when valid.
    Verify(VerifyArgs),
    /// Assemble a transaction from a JSON request file.
    Build(BuildArgs),
    /// Convert between decimal amounts and base units.
    Units(UnitsArgs),
}

/// Arguments for `inspect`. Exactly one input is accepted.
#[derive(Parser, Debug)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .args(["private_key", "public_key", "address"])
))]
pub struct InspectArgs {
    /// Encoded private key (`priv...`).
    #[arg(long)]
    pub private_key: Option<String>,

    /// Encoded public key (`b001...`).
    #[arg(long)]
    pub public_key: Option<String>,

    /// Account address (`bu...`).
    #[arg(long)]
    pub address: Option<String>,
}

/// Arguments for `sign`.
#[derive(Parser, Debug)]
pub struct SignArgs {
    /// Transaction blob, hex encoded.
    #[arg(long)]
    pub blob: String,

    /// Private keys to sign with, repeated or comma separated.
    #[arg(
        long = "private-key",
        env = "BUMO_PRIVATE_KEY",
        required = true,
        value_delimiter = ','
    )]
    pub private_keys: Vec<String>,
}

/// Arguments for `verify`.
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Transaction blob, hex encoded.
    #[arg(long)]
    pub blob: String,

    /// Signer's encoded public key.
    #[arg(long)]
    pub public_key: String,

    /// Hex signature to check.
    #[arg(long)]
    pub signature: String,
}

/// Arguments for `build`.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// JSON file holding the transaction envelope and its operations.
    #[arg(long, short = 'r')]
    pub request: PathBuf,

    /// Minimum gas price to validate against, in MO.
    #[arg(long, env = "BUMO_GAS_PRICE_FLOOR", default_value_t = 1_000)]
    pub gas_price_floor: i64,

    /// Base reserve reported alongside the gas price, in MO.
    #[arg(long, default_value_t = 10_000_000)]
    pub base_reserve: i64,

    /// Addresses to treat as already activated on the ledger.
    #[arg(long, value_delimiter = ',')]
    pub activated: Vec<String>,

    /// Private keys to sign the assembled blob with. Unsigned when omitted.
    #[arg(long = "private-key", env = "BUMO_PRIVATE_KEY", value_delimiter = ',')]
    pub private_keys: Vec<String>,

    /// Node the signed transaction is meant for.
    #[arg(long, env = "BUMO_NODE_URL", default_value = "http://127.0.0.1:16002")]
    pub node_url: String,
}

/// Arguments for `units`.
#[derive(Parser, Debug)]
pub struct UnitsArgs {
    #[command(subcommand)]
    pub direction: UnitsCommand,
}

#[derive(Subcommand, Debug)]
pub enum UnitsCommand {
    /// Decimal amount to base units, e.g. `1.5` BU to `150000000` MO.
    ToBase {
        amount: String,
        /// Scale of the amount.
        #[arg(long, short = 'd', default_value_t = 8)]
        decimals: u32,
    },
    /// Base units to a decimal amount.
    FromBase {
        units: String,
        /// Scale of the amount.
        #[arg(long, short = 'd', default_value_t = 8)]
        decimals: u32,
    },
}
