//! # SSH Key Loading
//!
//! Parses OpenSSH-format public and private keys and exposes the pieces
//! the subscription toolchain needs: a verifying key, a signing key, and
//! the raw public key bytes for systems that want the bit-level key
//! material rather than the wrapped SSH format.
//!
//! Passphrase entry is an injected [`PassphraseSource`] capability so
//! that nothing in this crate touches a terminal; the interactive prompt
//! lives in the CLI crate. The source is consulted only when the key is
//! actually encrypted.

use std::path::Path;

use base64::prelude::*;
use ssh_key::{HashAlg, PrivateKey, PublicKey};

use crate::error::KeyError;

/// Supplies the passphrase for an encrypted private key.
pub trait PassphraseSource {
    /// Obtain the passphrase. An empty string means "no passphrase".
    fn passphrase(&self) -> Result<String, KeyError>;
}

/// A fixed passphrase, for non-interactive use and tests.
pub struct StaticPassphrase(pub String);

impl PassphraseSource for StaticPassphrase {
    fn passphrase(&self) -> Result<String, KeyError> {
        Ok(self.0.clone())
    }
}

/// Parse an OpenSSH public key from its textual form
/// (`ssh-ed25519 AAAA... comment`).
pub fn parse_public_key(data: &str) -> Result<PublicKey, KeyError> {
    let key = PublicKey::from_openssh(data).map_err(KeyError::Parse)?;
    tracing::debug!(
        algorithm = %key.algorithm(),
        fingerprint = %key.fingerprint(HashAlg::Sha256),
        "parsed public key"
    );
    Ok(key)
}

/// Load an OpenSSH public key from a file.
pub fn load_public_key(path: &Path) -> Result<PublicKey, KeyError> {
    let data = std::fs::read_to_string(path).map_err(|source| KeyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_public_key(&data)
}

/// Parse an OpenSSH private key, decrypting it through the passphrase
/// source if it is encrypted.
pub fn parse_private_key(
    data: &[u8],
    passphrase: &dyn PassphraseSource,
) -> Result<PrivateKey, KeyError> {
    let key = PrivateKey::from_openssh(data).map_err(KeyError::Parse)?;
    let key = if key.is_encrypted() {
        let secret = passphrase.passphrase()?;
        key.decrypt(secret.as_bytes()).map_err(KeyError::Decrypt)?
    } else {
        key
    };
    tracing::debug!(
        algorithm = %key.algorithm(),
        fingerprint = %key.public_key().fingerprint(HashAlg::Sha256),
        "loaded private key"
    );
    Ok(key)
}

/// Load an OpenSSH private key from a file, decrypting if necessary.
pub fn load_private_key(
    path: &Path,
    passphrase: &dyn PassphraseSource,
) -> Result<PrivateKey, KeyError> {
    let data = std::fs::read(path).map_err(|source| KeyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_private_key(&data, passphrase)
}

/// Unwrap the SSH key envelope and return the raw public key bytes.
///
/// For Ed25519 this is the 32-byte curve point. Other algorithms do not
/// have a single raw-bytes form and are rejected.
pub fn raw_public_key_bytes(key: &PublicKey) -> Result<Vec<u8>, KeyError> {
    match key.key_data().ed25519() {
        Some(point) => Ok(point.as_ref().to_vec()),
        None => Err(KeyError::UnsupportedAlgorithm(key.algorithm().to_string())),
    }
}

/// Raw public key bytes, base64-encoded for transport.
pub fn raw_public_key_base64(key: &PublicKey) -> Result<String, KeyError> {
    Ok(BASE64_STANDARD.encode(raw_public_key_bytes(key)?))
}
