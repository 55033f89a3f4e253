//! # Canonical Serialization
//!
//! Defines `CanonicalBytes`, the sole construction path for the bytes that
//! get signed and verified.
//!
//! ## Invariant
//!
//! The newtype has a private inner field. The only way to construct it is
//! through `CanonicalBytes::new()`, which serializes with RFC 8785 (JSON
//! Canonicalization Scheme): object keys sorted ascending at every nesting
//! level, compact separators, UTF-8 output. Two structurally equal JSON
//! values produce identical bytes regardless of original key order or
//! whitespace, so sign and verify operate on the same bytes even after the
//! value has been re-parsed.
//!
//! Signing functions accept `&CanonicalBytes` rather than raw `&[u8]`,
//! which makes it impossible to sign bytes that skipped canonicalization.

use serde::Serialize;

use crate::error::CodecError;

/// Bytes produced exclusively by canonical JSON serialization.
///
/// # Invariants
///
/// - The only constructor is `CanonicalBytes::new()`.
/// - Object keys are sorted at every nesting level.
/// - Serialization uses compact separators (RFC 8785), encoded as UTF-8.
///
/// The inner `Vec<u8>` is private, so downstream code cannot smuggle
/// non-canonical bytes into a signing path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Canonicalize any serializable value.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Encoding` if the value cannot be represented
    /// as JSON, for example a NaN or infinite float.
    pub fn new(obj: &impl Serialize) -> Result<Self, CodecError> {
        let s = serde_jcs::to_string(obj)?;
        Ok(Self(s.into_bytes()))
    }

    /// Access the canonical bytes for signing or verification.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_keys() {
        let data = serde_json::json!({"z": 1, "m": 2, "a": 3});
        let cb = CanonicalBytes::new(&data).expect("should canonicalize");
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert_eq!(s, r#"{"a":3,"m":2,"z":1}"#);
    }

    #[test]
    fn test_nested_keys_sorted() {
        let data = serde_json::json!({
            "outer": {"b": 2, "a": 1},
            "list": [3, 2, 1]
        });
        let cb = CanonicalBytes::new(&data).expect("should canonicalize");
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        // Arrays keep their order; only object keys are sorted.
        assert_eq!(s, r#"{"list":[3,2,1],"outer":{"a":1,"b":2}}"#);
    }

    #[test]
    fn test_key_order_independence() {
        let a: serde_json::Value =
            serde_json::from_str(r#"{"owner": "acme", "bucket-capacity-gb": 500}"#).unwrap();
        let b: serde_json::Value =
            serde_json::from_str(r#"{"bucket-capacity-gb": 500, "owner": "acme"}"#).unwrap();
        assert_eq!(
            CanonicalBytes::new(&a).unwrap(),
            CanonicalBytes::new(&b).unwrap()
        );
    }

    #[test]
    fn test_reparse_is_fixed_point() {
        let data = serde_json::json!({"b": {"y": 2, "x": 1}, "a": [true, null]});
        let first = CanonicalBytes::new(&data).unwrap();
        let reparsed: serde_json::Value = serde_json::from_slice(first.as_bytes()).unwrap();
        let second = CanonicalBytes::new(&reparsed).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_floats_serialized_deterministically() {
        let data = serde_json::json!({"rate": 1.5});
        let cb = CanonicalBytes::new(&data).unwrap();
        assert_eq!(cb.as_bytes(), br#"{"rate":1.5}"#);
    }

    #[test]
    fn test_empty_object() {
        let cb = CanonicalBytes::new(&serde_json::json!({})).unwrap();
        assert_eq!(cb.as_bytes(), b"{}");
    }

    #[test]
    fn test_unicode_passthrough() {
        let data = serde_json::json!({"name": "\u{00e9}t\u{00e9}"});
        let cb = CanonicalBytes::new(&data).unwrap();
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert!(s.contains('\u{00e9}'));
    }

    #[test]
    fn test_len_and_is_empty() {
        let cb = CanonicalBytes::new(&serde_json::json!({"a": 1})).unwrap();
        assert!(!cb.is_empty());
        assert!(cb.len() > 0);
    }
}
