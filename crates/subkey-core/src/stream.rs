//! # Lenient JSON Stream Scanning
//!
//! Subscription info may arrive as several JSON values concatenated in
//! one input: packed without separators, split across lines, or followed
//! by trailing junk. The scanner is a cursor over a single buffer, not a
//! line splitter: it repeatedly parses the next JSON value and stops at
//! the first position that does not parse.
//!
//! The tail policy is deliberately forgiving. A failure before any value
//! has parsed is a hard error; a failure after at least one value is
//! treated as end of stream, on the assumption that the remaining bytes
//! are incidental trailing whitespace or garbage rather than a data
//! error.

use serde_json::Value;

use crate::error::CodecError;

/// Scan consecutive JSON values from a single input buffer.
///
/// # Errors
///
/// Returns `CodecError::Encoding` when no value could be parsed at all,
/// including for empty or whitespace-only input.
pub fn scan_lenient(input: &str) -> Result<Vec<Value>, CodecError> {
    let mut values = Vec::new();
    for item in serde_json::Deserializer::from_str(input).into_iter::<Value>() {
        match item {
            Ok(value) => values.push(value),
            Err(e) if values.is_empty() => return Err(CodecError::Encoding(e.to_string())),
            // Trailing bytes after a successful parse: end of stream.
            Err(_) => break,
        }
    }
    if values.is_empty() {
        return Err(CodecError::Encoding("empty input".to_string()));
    }
    Ok(values)
}
