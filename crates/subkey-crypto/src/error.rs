//! # Error Types
//!
//! Key-handling errors, derived with `thiserror`. Signing and
//! verification failures surface through the codec's own error types;
//! everything here is about getting usable key material in the first
//! place.

use std::path::PathBuf;

use thiserror::Error;

/// Error while loading or preparing SSH key material.
#[derive(Error, Debug)]
pub enum KeyError {
    /// The key file could not be read.
    #[error("failed to read key file {}: {source}", .path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The key data did not parse as an OpenSSH key.
    #[error("failed to parse OpenSSH key: {0}")]
    Parse(#[source] ssh_key::Error),

    /// The private key is encrypted and could not be decrypted, usually
    /// a wrong passphrase.
    #[error("failed to decrypt private key (wrong passphrase?): {0}")]
    Decrypt(#[source] ssh_key::Error),

    /// No passphrase could be obtained for an encrypted key.
    #[error("failed to obtain passphrase: {0}")]
    Passphrase(String),

    /// The key's algorithm is not supported by this toolchain.
    #[error("unsupported key algorithm: {0}")]
    UnsupportedAlgorithm(String),
}
