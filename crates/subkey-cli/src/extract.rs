//! # extract Subcommand
//!
//! Prints the subscription info embedded in a subscription key from
//! stdin. The signature is NOT checked: the output must not be trusted
//! unless `subkey verify` was run separately.

use std::io::Read;

use anyhow::Context;
use clap::Args;
use subkey_core::SubscriptionKey;

/// Arguments for the extract subcommand.
#[derive(Args, Debug)]
pub struct ExtractArgs {}

pub fn run(_args: &ExtractArgs) -> anyhow::Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let payload = SubscriptionKey::new(input)
        .extract_payload()
        .context("Failed to extract subscription info")?;
    let text = String::from_utf8(payload).context("Failed to extract subscription info")?;
    println!("{text}");
    Ok(())
}
