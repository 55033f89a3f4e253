//! # SSH Round-Trip Tests
//!
//! End-to-end sign/verify through real OpenSSH key material serialized
//! to its textual form and parsed back, including encrypted private keys
//! and the raw public key extraction path.

use rand::rngs::OsRng;
use serde_json::json;
use ssh_key::{Algorithm, LineEnding, PrivateKey};
use subkey_core::{encode, verify, VerifyError};
use subkey_crypto::{
    parse_private_key, parse_public_key, raw_public_key_base64, SshSigner, SshVerifier,
    StaticPassphrase,
};

fn generate() -> PrivateKey {
    PrivateKey::random(&mut OsRng, Algorithm::Ed25519).expect("key generation")
}

/// Serialize a key pair to OpenSSH text and parse it back through the
/// loading layer, the way the CLI sees keys.
fn textual_pair(key: &PrivateKey, passphrase: &str) -> (SshSigner, SshVerifier) {
    let private_pem = key.to_openssh(LineEnding::LF).expect("private serialization");
    let public_line = key.public_key().to_openssh().expect("public serialization");

    let parsed_private = parse_private_key(
        private_pem.as_bytes(),
        &StaticPassphrase(passphrase.to_string()),
    )
    .expect("private parse");
    let parsed_public = parse_public_key(&public_line).expect("public parse");

    (
        SshSigner::new(parsed_private).expect("signer"),
        SshVerifier::new(parsed_public).expect("verifier"),
    )
}

#[test]
fn test_sign_verify_round_trip() {
    let (signer, verifier) = textual_pair(&generate(), "");
    let info = json!({"owner": "acme", "bucket-capacity-gb": 500});
    let key = encode(&info, &signer).unwrap();
    assert!(verify(&key, &verifier).is_ok());
}

#[test]
fn test_encrypted_key_round_trip() {
    let plain = generate();
    let encrypted = plain.encrypt(&mut OsRng, "hunter2").unwrap();
    let private_pem = encrypted.to_openssh(LineEnding::LF).unwrap();

    let parsed = parse_private_key(
        private_pem.as_bytes(),
        &StaticPassphrase("hunter2".to_string()),
    )
    .unwrap();
    let signer = SshSigner::new(parsed).unwrap();
    let verifier = SshVerifier::new(plain.public_key().clone()).unwrap();

    let key = encode(&json!({"owner": "acme"}), &signer).unwrap();
    assert!(verify(&key, &verifier).is_ok());
}

#[test]
fn test_cross_key_rejected() {
    let (signer, _) = textual_pair(&generate(), "");
    let (_, unrelated_verifier) = textual_pair(&generate(), "");
    let key = encode(&json!({"owner": "acme"}), &signer).unwrap();
    assert!(matches!(
        verify(&key, &unrelated_verifier),
        Err(VerifyError::InvalidSignature)
    ));
}

#[test]
fn test_raw_public_key_extraction() {
    use base64::prelude::*;

    let key = generate();
    let encoded = raw_public_key_base64(key.public_key()).unwrap();
    let raw = BASE64_STANDARD.decode(&encoded).unwrap();
    assert_eq!(raw.len(), 32);

    // The raw bytes are the curve point inside the SSH wrapping, so the
    // same key parsed from its textual form yields the same bytes.
    let reparsed = parse_public_key(&key.public_key().to_openssh().unwrap()).unwrap();
    assert_eq!(raw_public_key_base64(&reparsed).unwrap(), encoded);
}
