//! # Subscription Envelope
//!
//! The wire format binding canonical subscription bytes to a signature.
//!
//! An [`Envelope`] is a JSON object with exactly two fields, both base64
//! text: `subscriptionInfo` (the canonical payload bytes) and `signature`
//! (the raw signature bytes). A [`SubscriptionKey`] is the base64 encoding
//! of the envelope's UTF-8 JSON serialization: a single line of printable
//! text, safe for line-oriented transport, and the only artifact callers
//! outside the codec ever see.
//!
//! The two-field shape and the field names are a wire contract shared with
//! other producers and consumers of subscription keys. There is no version
//! field; any change to the shape is a breaking change.

use base64::prelude::*;
use serde::{Deserialize, Serialize};

use crate::canonical::CanonicalBytes;
use crate::error::CodecError;

/// The two-field structure binding canonical payload bytes to a signature.
///
/// Both fields are always present and always base64 text, never raw
/// binary, so the envelope itself is safely JSON-serializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Base64 encoding of the canonical subscription bytes.
    #[serde(rename = "subscriptionInfo")]
    subscription_info: String,
    /// Base64 encoding of the raw signature over those bytes.
    signature: String,
}

impl Envelope {
    /// Assemble an envelope from canonical payload bytes and a signature.
    pub fn new(payload: &CanonicalBytes, signature: &[u8]) -> Self {
        Self {
            subscription_info: BASE64_STANDARD.encode(payload.as_bytes()),
            signature: BASE64_STANDARD.encode(signature),
        }
    }

    /// Serialize the envelope and wrap it in the outer base64 transport
    /// layer.
    pub fn to_subscription_key(&self) -> Result<SubscriptionKey, CodecError> {
        let json = serde_json::to_string(self)?;
        Ok(SubscriptionKey(BASE64_STANDARD.encode(json.as_bytes())))
    }
}

/// A decoded envelope: payload bytes and signature bytes, ready for the
/// verification capability.
#[derive(Debug, Clone)]
pub struct DecodedEnvelope {
    /// The transported subscription bytes, exactly as they were signed.
    pub payload: Vec<u8>,
    /// The raw signature over `payload`.
    pub signature: Vec<u8>,
}

/// The final transport artifact: base64 of the envelope JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionKey(String);

impl SubscriptionKey {
    /// Wrap a transport string, trimming surrounding whitespace.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    /// The transport string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap the outer base64 layer and parse the envelope.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::MalformedEnvelope` if the outer base64 is
    /// invalid, the envelope JSON does not parse, or either field is
    /// missing or not base64-decodable.
    pub fn decode(&self) -> Result<DecodedEnvelope, CodecError> {
        let envelope_json = BASE64_STANDARD
            .decode(&self.0)
            .map_err(|e| CodecError::MalformedEnvelope(format!("outer base64: {e}")))?;
        let envelope: Envelope = serde_json::from_slice(&envelope_json)
            .map_err(|e| CodecError::MalformedEnvelope(format!("envelope JSON: {e}")))?;
        let payload = BASE64_STANDARD
            .decode(&envelope.subscription_info)
            .map_err(|e| CodecError::MalformedEnvelope(format!("subscriptionInfo field: {e}")))?;
        let signature = BASE64_STANDARD
            .decode(&envelope.signature)
            .map_err(|e| CodecError::MalformedEnvelope(format!("signature field: {e}")))?;
        Ok(DecodedEnvelope { payload, signature })
    }

    /// Return only the embedded subscription payload bytes.
    ///
    /// Does NOT check the signature. The output must not be trusted
    /// unless [`verify`](crate::verify) was separately called on this
    /// key; this is a documented caller responsibility, not an enforced
    /// invariant.
    pub fn extract_payload(&self) -> Result<Vec<u8>, CodecError> {
        Ok(self.decode()?.payload)
    }
}

impl std::fmt::Display for SubscriptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
