//! Required-field metadata for request shapes.
//!
//! Serde already rejects a payload missing a required field; this module
//! exposes the same information as data so callers can check a raw JSON
//! payload up front and so create/update pairs can be compared.

use serde_json::Value;

/// A request record with a fixed set of required wire keys.
pub trait RequestShape {
    /// Wire names of the fields that must be present.
    const REQUIRED_FIELDS: &'static [&'static str];

    /// Required fields absent (or null) in `payload`.
    fn missing_fields(payload: &Value) -> Vec<&'static str> {
        Self::REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| payload.get(field).map_or(true, Value::is_null))
            .collect()
    }
}

/// True when every field `Update` requires is also required by `Create`.
pub fn requires_subset_of<Update: RequestShape, Create: RequestShape>() -> bool {
    Update::REQUIRED_FIELDS
        .iter()
        .all(|field| Create::REQUIRED_FIELDS.contains(field))
}
