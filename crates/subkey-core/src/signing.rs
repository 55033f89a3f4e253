//! # Signing and Verification Operations
//!
//! The codec does not implement cryptography. It consumes two injected
//! capabilities: a [`Signer`] that produces a signature over exactly the
//! bytes given to it, and a [`Verifier`] that checks a signature against
//! payload bytes under some public key. Key loading, algorithms, and
//! passphrase entry all live behind these seams (see `subkey-crypto` for
//! the SSH-backed implementations), which keeps the codec testable
//! without key files or terminal interaction.

use serde::Serialize;

use crate::canonical::CanonicalBytes;
use crate::envelope::{Envelope, SubscriptionKey};
use crate::error::{CodecError, SignError, VerifyError};

/// Signing capability supplied by a key-management collaborator.
pub trait Signer {
    /// Sign exactly the given canonical bytes, returning raw signature
    /// bytes.
    fn sign(&self, data: &CanonicalBytes) -> Result<Vec<u8>, SignError>;
}

/// Verification capability supplied by a key-management collaborator.
///
/// Implementations distinguish a cryptographic mismatch
/// ([`VerifyError::InvalidSignature`]) from structural failures in the
/// key or signature material ([`VerifyError::Capability`]).
pub trait Verifier {
    /// Check that `signature` was produced over exactly `data`.
    fn verify(&self, signature: &[u8], data: &[u8]) -> Result<(), VerifyError>;
}

/// Canonicalize, sign, and wrap subscription info into a transport key.
///
/// The output is self-contained: decoding it and re-verifying with the
/// matching public key succeeds if and only if the bytes were not altered
/// after signing.
///
/// # Errors
///
/// A signing failure propagates without retry; signing is a one-shot,
/// user-facing operation, not a resilient network call.
pub fn encode(info: &impl Serialize, signer: &dyn Signer) -> Result<SubscriptionKey, CodecError> {
    let canonical = CanonicalBytes::new(info)?;
    let signature = signer.sign(&canonical)?;
    Envelope::new(&canonical, &signature).to_subscription_key()
}

/// Decode a subscription key and verify its signature.
///
/// Returns `Ok(())` if and only if the signature was produced over
/// exactly the transported payload bytes by the holder of the private key
/// matching the verifier's public key. Tampering with either envelope
/// field or with the outer encoding yields an error, never a silent
/// accept.
pub fn verify(key: &SubscriptionKey, verifier: &dyn Verifier) -> Result<(), VerifyError> {
    let decoded = key.decode()?;
    verifier.verify(&decoded.signature, &decoded.payload)
}
