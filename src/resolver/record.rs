//! Record-identifier extraction.
//!
//! Hosts hand the resolver records in several shapes: a full record object
//! carrying an `ID` attribute, a bare numeric identifier, or something
//! opaque only the host can interpret. Extraction tries the generic shapes
//! first and defers to the host's [`IdResolver`] capability when they all
//! fail; an unresolvable record is an empty result, never an error.

use serde_json::Value;

use super::store::IdResolver;

/// Extracts a positive record identifier from `record`, deferring to
/// `fallback` when the generic shapes do not match.
pub fn record_id(record: &Value, fallback: Option<&dyn IdResolver>) -> Option<u64> {
    let direct = match record {
        Value::Object(map) => map.get("ID").and_then(positive_id),
        Value::Number(_) | Value::String(_) => positive_id(record),
        _ => None,
    };
    direct.or_else(|| fallback.and_then(|resolver| resolver.resolve_id(record)))
}

/// Interprets a JSON value as a positive integer identifier. Numeric
/// strings are accepted; zero, negatives, and non-numeric values are not.
pub fn positive_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_i64().filter(|id| *id > 0).map(|id| id as u64),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .map(|id| id as u64),
        _ => None,
    }
}
