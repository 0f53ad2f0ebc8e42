//! Conversion between engine values and aggregator types.
//!
//! The engine hands rows and partials over as generic JSON values. A partial
//! travels as an object of `bucket: integer`; encoding then decoding keeps
//! the key set and every `i64` exactly.

use cdnbytes_core::errors::EntryError;
use serde_json::{Map, Number, Value};

use crate::buffer::BucketBuffer;
use crate::record::{EntryValue, InputRecord};

/// Encode a buffer as the engine's partial value.
pub fn encode_partial(buffer: &BucketBuffer) -> Value {
    let map: Map<String, Value> = buffer
        .iter()
        .map(|(bucket, value)| (bucket.to_string(), Value::Number(Number::from(value))))
        .collect();
    Value::Object(map)
}

/// Decode a row argument or partial into a record.
///
/// Integer values are kept, `null` becomes [`EntryValue::Missing`], and any
/// other value becomes [`EntryValue::Malformed`]. Anything but an object is
/// rejected as a whole.
pub fn decode_record(value: &Value) -> Result<InputRecord, EntryError> {
    let Value::Object(map) = value else {
        return Err(EntryError::MalformedRecord {
            found: describe(value),
        });
    };
    Ok(map
        .iter()
        .map(|(key, v)| (key.as_str(), decode_value(v)))
        .collect())
}

fn decode_value(value: &Value) -> EntryValue {
    match value {
        Value::Null => EntryValue::Missing,
        Value::Number(n) => match n.as_i64() {
            Some(v) => EntryValue::Present(v),
            None => EntryValue::Malformed(describe(value)),
        },
        other => EntryValue::Malformed(describe(other)),
    }
}

/// Short description of a value for diagnostics.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(a) => format!("array of {} element(s)", a.len()),
        Value::Object(o) => format!("object of {} field(s)", o.len()),
    }
}
