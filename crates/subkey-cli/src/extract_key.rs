//! # extract-key Subcommand
//!
//! Prints the raw public key bytes from an SSH public key file, base64
//! encoded and framed for copy/paste into systems that want the
//! bit-level key material.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use subkey_crypto::{load_public_key, raw_public_key_base64};

/// Arguments for the extract-key subcommand.
#[derive(Args, Debug)]
pub struct ExtractKeyArgs {
    /// Path to the public key, used to verify the subscription.
    pub public_key_path: PathBuf,
}

pub fn run(args: &ExtractKeyArgs) -> anyhow::Result<()> {
    let raw = extract(args).context("Failed to extract public key")?;
    println!("BEGIN RAW PUBLIC KEY BYTES (BASE64)\n{raw}\nEND RAW PUBLIC KEY BYTES (BASE64)");
    Ok(())
}

fn extract(args: &ExtractKeyArgs) -> anyhow::Result<String> {
    let key = load_public_key(&args.public_key_path)?;
    Ok(raw_public_key_base64(&key)?)
}
