//! # subkey-cli — Subscription Key Command-Line Tools
//!
//! One module per subcommand. CLI construction (argument parsing) is
//! separated from the codec and key handling, which live in `subkey-core`
//! and `subkey-crypto`; handlers here only wire stdin/stdout to those
//! crates.
//!
//! ## Contract
//!
//! Every subcommand reads its primary payload from standard input
//! (except `extract-key`, which has none), writes results to standard
//! output, writes diagnostics to standard error, and exits 0 on success,
//! 1 on failure.

pub mod extract;
pub mod extract_key;
pub mod passphrase;
pub mod set_capacity;
pub mod sign;
pub mod verify;
