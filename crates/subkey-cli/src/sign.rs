//! # sign Subcommand
//!
//! Reads subscription JSON from stdin, signs it with the given private
//! key, and prints the resulting subscription key as a single base64
//! line.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use subkey_core::{encode, SubscriptionKey};
use subkey_crypto::{load_private_key, SshSigner};

use crate::passphrase::TerminalPassphrase;

/// Arguments for the sign subcommand.
#[derive(Args, Debug)]
pub struct SignArgs {
    /// Path to the private key file.
    pub private_key_path: PathBuf,
}

pub fn run(args: &SignArgs) -> anyhow::Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let info: serde_json::Value =
        serde_json::from_str(&input).context("Error parsing subscription data")?;

    let subscription_key =
        sign_info(&info, &args.private_key_path).context("Failed to sign subscription")?;
    println!("{subscription_key}");
    Ok(())
}

fn sign_info(info: &serde_json::Value, key_path: &Path) -> anyhow::Result<SubscriptionKey> {
    let key = load_private_key(key_path, &TerminalPassphrase)?;
    let signer = SshSigner::new(key)?;
    Ok(encode(info, &signer)?)
}
