//! # SSH-Backed Signer and Verifier
//!
//! Implements the codec's capability traits on top of OpenSSH key
//! material. Signatures use the key's native algorithm and travel as raw
//! bytes; the codec never interprets them.
//!
//! Only Ed25519 keys are accepted. The constructor guard keeps a
//! cryptographic mismatch (`InvalidSignature`) cleanly separated from the
//! structural failure of handing this toolchain a key type it cannot
//! process.

use signature::Signer as _;
use ssh_key::{Algorithm, PrivateKey, PublicKey, Signature};
use subkey_core::{CanonicalBytes, SignError, Signer, Verifier, VerifyError};

use crate::error::KeyError;

fn ensure_supported(algorithm: &Algorithm) -> Result<(), KeyError> {
    match algorithm {
        Algorithm::Ed25519 => Ok(()),
        other => Err(KeyError::UnsupportedAlgorithm(other.to_string())),
    }
}

/// Signs canonical subscription bytes with an OpenSSH private key.
pub struct SshSigner {
    key: PrivateKey,
}

impl SshSigner {
    /// Wrap a decrypted private key.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::UnsupportedAlgorithm` for non-Ed25519 keys.
    pub fn new(key: PrivateKey) -> Result<Self, KeyError> {
        ensure_supported(&key.algorithm())?;
        Ok(Self { key })
    }
}

impl Signer for SshSigner {
    fn sign(&self, data: &CanonicalBytes) -> Result<Vec<u8>, SignError> {
        let signature: Signature = self
            .key
            .try_sign(data.as_bytes())
            .map_err(|e| SignError(format!("{} signing failed: {e}", self.key.algorithm())))?;
        Ok(signature.as_bytes().to_vec())
    }
}

/// Verifies subscription signatures with an OpenSSH public key.
pub struct SshVerifier {
    key: PublicKey,
}

impl SshVerifier {
    /// Wrap a public key.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::UnsupportedAlgorithm` for non-Ed25519 keys.
    pub fn new(key: PublicKey) -> Result<Self, KeyError> {
        ensure_supported(&key.algorithm())?;
        Ok(Self { key })
    }
}

impl Verifier for SshVerifier {
    fn verify(&self, signature: &[u8], data: &[u8]) -> Result<(), VerifyError> {
        // Rebuilding the ssh-key signature checks the blob's shape for
        // the key's algorithm; a wrong-size blob is a structural failure,
        // not a cryptographic mismatch.
        let signature = Signature::new(self.key.algorithm(), signature.to_vec())
            .map_err(|e| VerifyError::Capability(format!("signature structure: {e}")))?;
        signature::Verifier::verify(&self.key, data, &signature)
            .map_err(|_| VerifyError::InvalidSignature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    fn generate() -> PrivateKey {
        PrivateKey::random(&mut OsRng, Algorithm::Ed25519).expect("key generation")
    }

    #[test]
    fn test_sign_produces_raw_ed25519_signature() {
        let key = generate();
        let signer = SshSigner::new(key).unwrap();
        let data = CanonicalBytes::new(&serde_json::json!({"owner": "acme"})).unwrap();
        let signature = signer.sign(&data).unwrap();
        assert_eq!(signature.len(), 64);
    }

    #[test]
    fn test_sign_verify_through_capabilities() {
        let key = generate();
        let verifier = SshVerifier::new(key.public_key().clone()).unwrap();
        let signer = SshSigner::new(key).unwrap();
        let data = CanonicalBytes::new(&serde_json::json!({"owner": "acme"})).unwrap();
        let signature = signer.sign(&data).unwrap();
        assert!(verifier.verify(&signature, data.as_bytes()).is_ok());
    }

    #[test]
    fn test_bit_flip_invalidates() {
        let key = generate();
        let verifier = SshVerifier::new(key.public_key().clone()).unwrap();
        let signer = SshSigner::new(key).unwrap();
        let data = CanonicalBytes::new(&serde_json::json!({"owner": "acme"})).unwrap();
        let mut signature = signer.sign(&data).unwrap();
        signature[0] ^= 0x01;
        assert!(matches!(
            verifier.verify(&signature, data.as_bytes()),
            Err(VerifyError::InvalidSignature)
        ));
    }

    #[test]
    fn test_wrong_size_signature_is_structural_failure() {
        let key = generate();
        let verifier = SshVerifier::new(key.public_key().clone()).unwrap();
        let result = verifier.verify(b"too short", b"data");
        assert!(matches!(result, Err(VerifyError::Capability(_))));
    }
}
