// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # BUMO CLI
//!
//! Entry point for the `bumo-cli` binary. Parses arguments, installs logging
//! and runs one offline command against the SDK:
//!
//! - `keygen`  - generate a key pair
//! - `inspect` - validate and derive from a key or address
//! - `sign`    - sign a hex blob
//! - `verify`  - check a signature over a hex blob
//! - `build`   - assemble (and optionally sign) a transaction from JSON
//! - `units`   - decimal/base-unit conversion
//!
//! Command output goes to stdout as JSON; logs go to stderr.

mod cli;
mod logging;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use bumo_sdk::config::NetworkConfig;
use bumo_sdk::identity::{self, PrivateKey, PublicKey};
use bumo_sdk::oracle::StaticOracle;
use bumo_sdk::transaction::{
    assemble, sign_blob, transaction_hash, verify_signatures, Signature, SignedTransaction,
    TransactionEnvelope,
};
use bumo_sdk::units::{unit_with_decimals, unit_without_decimals};

use cli::{BumoCli, BuildArgs, Commands, InspectArgs, SignArgs, UnitsCommand, VerifyArgs};
use logging::LogFormat;

fn main() -> Result<ExitCode> {
    let cli = BumoCli::parse();
    logging::init_logging(
        logging::DEFAULT_FILTER,
        LogFormat::from_str_lossy(&cli.log_format),
    );

    match cli.command {
        Commands::Keygen => keygen(),
        Commands::Inspect(args) => inspect(args),
        Commands::Sign(args) => sign(args),
        Commands::Verify(args) => verify(args),
        Commands::Build(args) => build(args),
        Commands::Units(args) => units(args.direction),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to render output")?;
    println!("{text}");
    Ok(())
}

fn decode_blob_hex(blob: &str) -> Result<Vec<u8>> {
    hex::decode(blob.trim()).context("blob is not valid hex")
}

fn keygen() -> Result<ExitCode> {
    let keys = identity::generate().context("failed to generate key pair")?;
    info!(address = %keys.address, "generated key pair");
    print_json(&keys)?;
    Ok(ExitCode::SUCCESS)
}

#[derive(Debug, Serialize)]
struct Inspection {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

fn inspect(args: InspectArgs) -> Result<ExitCode> {
    let inspection = if let Some(text) = args.private_key {
        let key: PrivateKey = text.parse().context("invalid private key")?;
        Inspection {
            valid: true,
            public_key: Some(key.public_key().to_string()),
            address: Some(key.address().to_string()),
        }
    } else if let Some(text) = args.public_key {
        let key: PublicKey = text.parse().context("invalid public key")?;
        Inspection {
            valid: true,
            public_key: Some(key.to_string()),
            address: Some(key.address().to_string()),
        }
    } else {
        let address = args.address.unwrap_or_default();
        Inspection {
            valid: identity::is_valid_address(&address),
            public_key: None,
            address: Some(address),
        }
    };

    print_json(&inspection)?;
    Ok(if inspection.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn sign(args: SignArgs) -> Result<ExitCode> {
    let blob = decode_blob_hex(&args.blob)?;
    let signatures = sign_blob(&blob, &args.private_keys).context("failed to sign blob")?;
    print_json(&signatures)?;
    Ok(ExitCode::SUCCESS)
}

fn verify(args: VerifyArgs) -> Result<ExitCode> {
    let blob = decode_blob_hex(&args.blob)?;
    let signature = Signature {
        sign_data: args.signature,
        public_key: args.public_key,
    };
    let valid = verify_signatures(&blob, std::slice::from_ref(&signature));
    info!(valid, public_key = %signature.public_key, "verified signature");
    print_json(&serde_json::json!({ "valid": valid }))?;
    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// What `build` prints. Signing fields appear only when keys were given.
#[derive(Debug, Serialize)]
struct BuildOutput {
    transaction_blob: String,
    hash: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    signatures: Vec<Signature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    submit: Option<Submission>,
}

#[derive(Debug, Serialize)]
struct Submission {
    url: String,
    body: serde_json::Value,
}

fn build(args: BuildArgs) -> Result<ExitCode> {
    let request = std::fs::read_to_string(&args.request)
        .with_context(|| format!("failed to read request file {}", args.request.display()))?;
    let output = build_transaction(&args, &request)?;
    print_json(&output)?;
    Ok(ExitCode::SUCCESS)
}

fn build_transaction(args: &BuildArgs, request: &str) -> Result<BuildOutput> {
    let envelope: TransactionEnvelope =
        serde_json::from_str(request).context("request is not a valid transaction envelope")?;
    let network = NetworkConfig::new(args.node_url.as_str()).context("invalid node URL")?;

    let oracle = args.activated.iter().fold(
        StaticOracle::new().with_fees(args.gas_price_floor, args.base_reserve),
        |oracle, address| oracle.with_activated(address.as_str()),
    );
    let blob = assemble(&envelope, &oracle, &oracle).context("transaction rejected")?;
    let hash = transaction_hash(&blob);
    info!(%hash, bytes = blob.len(), "built transaction");

    if args.private_keys.is_empty() {
        return Ok(BuildOutput {
            transaction_blob: hex::encode(&blob),
            hash,
            signatures: Vec::new(),
            submit: None,
        });
    }

    let signed =
        SignedTransaction::sign(blob, &args.private_keys).context("failed to sign transaction")?;
    let body = signed.submit_body().context("failed to render submission body")?;
    Ok(BuildOutput {
        transaction_blob: hex::encode(&signed.blob),
        hash,
        submit: Some(Submission {
            url: network.submit_url(),
            body: serde_json::from_str(&body).context("failed to render submission body")?,
        }),
        signatures: signed.signatures,
    })
}

fn units(direction: UnitsCommand) -> Result<ExitCode> {
    let converted = match direction {
        UnitsCommand::ToBase { amount, decimals } => unit_with_decimals(&amount, decimals)
            .with_context(|| format!("cannot convert '{amount}' at scale {decimals}"))?
            .to_string(),
        UnitsCommand::FromBase { units, decimals } => unit_without_decimals(&units, decimals)
            .with_context(|| format!("cannot convert '{units}' at scale {decimals}"))?,
    };
    println!("{converted}");
    Ok(ExitCode::SUCCESS)
}
