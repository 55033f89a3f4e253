//! # subkey-crypto — SSH Key Capabilities
//!
//! Provides the cryptographic collaborators the envelope codec depends on
//! but does not implement:
//!
//! - **Key loading** for OpenSSH public and private keys, with passphrase
//!   entry injected through [`PassphraseSource`].
//! - **[`SshSigner`] / [`SshVerifier`]** implementing the codec's signing
//!   and verification capability traits with the key's native algorithm.
//! - **Raw public key extraction** for systems that need the bit-level
//!   key material rather than the wrapped SSH format.
//!
//! ## Crate Policy
//!
//! - No terminal interaction; passphrase prompting lives in the CLI.
//! - No mocking of cryptographic operations in tests: all tests use real
//!   OpenSSH keys and real Ed25519 signatures.

pub mod error;
pub mod keys;
pub mod signer;

pub use error::KeyError;
pub use keys::{
    load_private_key, load_public_key, parse_private_key, parse_public_key,
    raw_public_key_base64, raw_public_key_bytes, PassphraseSource, StaticPassphrase,
};
pub use signer::{SshSigner, SshVerifier};

// Re-export the ssh-key types callers touch directly.
pub use ssh_key::{PrivateKey, PublicKey};
