//! # set-capacity Subcommand
//!
//! Reads one or more JSON subscription objects from stdin (packed,
//! line-separated, or spanning lines), injects the requested storage
//! capacity into each, and prints them back one per line. Trailing
//! garbage after at least one object is ignored; input with no usable
//! object at all is an error.

use std::io::{Read, Write};

use anyhow::Context;
use clap::Args;
use serde_json::Value;
use subkey_core::{inject_capacity, scan_lenient, DEFAULT_CAPACITY_GB};

/// Arguments for the set-capacity subcommand.
#[derive(Args, Debug)]
pub struct SetCapacityArgs {
    /// Desired storage subscription capacity in gigabytes.
    #[arg(default_value_t = DEFAULT_CAPACITY_GB)]
    pub capacity_gb: u64,
}

pub fn run(args: &SetCapacityArgs) -> anyhow::Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let values = scan_lenient(&input).context("No valid JSON input data found")?;
    apply_capacity(values, args.capacity_gb, &mut std::io::stdout().lock())
}

fn apply_capacity(
    values: Vec<Value>,
    capacity_gb: u64,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let mut emitted = 0usize;
    for value in values {
        match inject_capacity(value, capacity_gb) {
            Ok(updated) => {
                writeln!(out, "{}", serde_json::to_string(&updated)?)?;
                emitted += 1;
            }
            // A parsed value that cannot take a capacity field gets the
            // same lenient-tail treatment as a parse failure.
            Err(e) if emitted == 0 => return Err(e.into()),
            Err(_) => break,
        }
    }
    Ok(())
}
