//! # verify Subcommand
//!
//! Reads a subscription key from stdin and checks its signature against
//! the given public key. Every failure mode (malformed envelope, invalid
//! signature, unreadable key) reduces to a diagnostic on stderr and exit
//! code 1, never an exception surface.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use clap::Args;
use subkey_core::{verify, SubscriptionKey};
use subkey_crypto::{load_public_key, SshVerifier};

/// Arguments for the verify subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path to the public key file.
    pub public_key_path: PathBuf,
}

pub fn run(args: &VerifyArgs) -> anyhow::Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let key = SubscriptionKey::new(input);

    match check(&key, &args.public_key_path) {
        Ok(()) => {
            println!("Signature is valid.");
            Ok(())
        }
        Err(e) => {
            eprintln!("{e:#}");
            Err(anyhow!("Signature verification failed."))
        }
    }
}

fn check(key: &SubscriptionKey, public_key_path: &Path) -> anyhow::Result<()> {
    let public_key = load_public_key(public_key_path)?;
    let verifier = SshVerifier::new(public_key)?;
    verify(key, &verifier)?;
    Ok(())
}
