//! # Error Types
//!
//! Error enums for the subscription envelope codec, one per concern,
//! derived with `thiserror`.
//!
//! All errors are terminal for the single operation being performed.
//! There is no retry logic anywhere in this system: each operation is a
//! one-shot, user-initiated action where retrying without user
//! intervention (a new passphrase, a fixed input) cannot succeed.

use thiserror::Error;

/// Error from the envelope codec.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The input could not be serialized as canonical JSON, or a batch
    /// input contained no parseable JSON value at all.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// The envelope is structurally invalid: bad outer base64, bad
    /// envelope JSON, or a missing or non-base64 field. Decoding never
    /// substitutes defaults.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// The injected signing capability reported a failure.
    #[error(transparent)]
    Signing(#[from] SignError),
}

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        Self::Encoding(e.to_string())
    }
}

/// Failure reported by a [`Signer`](crate::Signer) capability, such as a
/// wrong passphrase, a corrupt key, or an unsupported key type.
#[derive(Error, Debug)]
#[error("signing failed: {0}")]
pub struct SignError(pub String);

/// Why a subscription key failed verification.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// The subscription key could not be decoded.
    #[error(transparent)]
    Malformed(#[from] CodecError),

    /// Well-formed envelope whose signature does not match the payload.
    #[error("signature does not match data")]
    InvalidSignature,

    /// The verification capability itself failed: unreadable or
    /// unsupported key material, or a signature blob with the wrong
    /// structure for the key's algorithm.
    #[error("verification failed: {0}")]
    Capability(String),
}
