//! # subkey CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;

/// Storage subscription key toolchain.
///
/// Signs subscription JSON with an SSH private key, verifies subscription
/// keys against a public key, and massages subscription data on the way
/// in and out of the signed envelope.
#[derive(Parser, Debug)]
#[command(name = "subkey", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Extract raw public key bytes from an SSH public key file.
    ExtractKey(subkey_cli::extract_key::ExtractKeyArgs),
    /// Sign subscription JSON from stdin with an SSH private key.
    Sign(subkey_cli::sign::SignArgs),
    /// Verify a subscription key from stdin against an SSH public key.
    Verify(subkey_cli::verify::VerifyArgs),
    /// Add a subscription capacity to JSON subscription info from stdin.
    SetCapacity(subkey_cli::set_capacity::SetCapacityArgs),
    /// Extract subscription info from a subscription key on stdin.
    Extract(subkey_cli::extract::ExtractArgs),
}

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout stays clean for piped results.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "dispatching");

    let result = match cli.command {
        Commands::ExtractKey(args) => subkey_cli::extract_key::run(&args),
        Commands::Sign(args) => subkey_cli::sign::run(&args),
        Commands::Verify(args) => subkey_cli::verify::run(&args),
        Commands::SetCapacity(args) => subkey_cli::set_capacity::run(&args),
        Commands::Extract(args) => subkey_cli::extract::run(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
