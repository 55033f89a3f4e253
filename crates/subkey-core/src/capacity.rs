//! # Capacity Injection
//!
//! Writes the storage capacity field into subscription info before it is
//! signed. Must run before encoding: the field changes the signed
//! content, so applying it to an already-signed subscription invalidates
//! the existing signature (signatures are not recomputed).

use serde_json::Value;

use crate::error::CodecError;

/// JSON field carrying the subscribed storage capacity, in gigabytes.
pub const CAPACITY_FIELD: &str = "bucket-capacity-gb";

/// Capacity applied when the caller does not specify one.
pub const DEFAULT_CAPACITY_GB: u64 = 2000;

/// Set or overwrite the capacity field, leaving every other field
/// unchanged. Pure transform: no side effects beyond the returned value.
///
/// # Errors
///
/// Returns `CodecError::Encoding` if `info` is not a JSON object.
pub fn inject_capacity(mut info: Value, capacity_gb: u64) -> Result<Value, CodecError> {
    match info.as_object_mut() {
        Some(obj) => {
            obj.insert(CAPACITY_FIELD.to_string(), Value::from(capacity_gb));
            Ok(info)
        }
        None => Err(CodecError::Encoding(format!(
            "subscription info must be a JSON object, got {}",
            json_type_name(&info)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sets_capacity_field() {
        let updated = inject_capacity(json!({"owner": "acme"}), 500).unwrap();
        assert_eq!(updated, json!({"owner": "acme", "bucket-capacity-gb": 500}));
    }

    #[test]
    fn test_overwrites_existing_capacity() {
        let updated = inject_capacity(json!({"bucket-capacity-gb": 100}), 500).unwrap();
        assert_eq!(updated[CAPACITY_FIELD], 500);
    }

    #[test]
    fn test_other_fields_unchanged() {
        let info = json!({"owner": "acme", "tier": "gold", "nested": {"a": 1}});
        let updated = inject_capacity(info.clone(), 42).unwrap();
        let obj = updated.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj["owner"], info["owner"]);
        assert_eq!(obj["tier"], info["tier"]);
        assert_eq!(obj["nested"], info["nested"]);
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(DEFAULT_CAPACITY_GB, 2000);
    }

    #[test]
    fn test_non_object_rejected() {
        for value in [json!(5), json!("text"), json!([1, 2]), json!(null)] {
            assert!(matches!(
                inject_capacity(value, 500),
                Err(CodecError::Encoding(_))
            ));
        }
    }
}
