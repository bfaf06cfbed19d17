//! Shared coercion helpers for loosely typed payload fields.
//!
//! Engines are not consistent about numeric fields: a total can arrive
//! as a number or as a numeric string, and scores can be null. These
//! helpers parse what they can and default instead of failing.

use serde_json::Value;

/// Coerce a raw payload value to an unsigned integer.
///
/// Numbers pass through (floats truncate), numeric strings parse, and
/// everything else yields 0.
pub fn coerce_u64(value: &Value) -> u64 {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                v
            } else if let Some(v) = n.as_i64() {
                v.max(0) as u64
            } else {
                n.as_f64().map(|v| v.max(0.0) as u64).unwrap_or(0)
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .or_else(|_| s.trim().parse::<f64>().map(|v| v.max(0.0) as u64))
            .unwrap_or(0),
        _ => 0,
    }
}

/// Coerce a raw payload value to a float.
///
/// Numbers pass through, numeric strings parse, and everything else
/// (including null) yields 0.0.
pub fn coerce_f32(value: &Value) -> f32 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0) as f32,
        Value::String(s) => s.trim().parse::<f32>().unwrap_or(0.0),
        _ => 0.0,
    }
}
