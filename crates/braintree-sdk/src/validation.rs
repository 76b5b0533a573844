//! The validated-response envelope.
//!
//! Operations that create or mutate an entity return either the entity or a
//! structured set of validation errors, never both. The envelope keeps the
//! entity under its own key on the wire (`{"success": true, "customer": {…}}`)
//! and the failure as `{"success": false, "message": …, "errors": […]}`.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A record that can appear inside a [`ValidatedResponse`].
pub trait Entity: Serialize + DeserializeOwned {
    /// Key the record is carried under on the wire.
    const KEY: &'static str;
}

/// One structured validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// Request attribute the error refers to (e.g. `"number"`).
    pub attribute: String,
    /// Stable numeric code as a string (e.g. `"81715"`).
    pub code: String,
    pub message: String,
}

/// The failure side of the envelope. `errors` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFailure {
    message: String,
    errors: Vec<ValidationError>,
    params: Map<String, Value>,
}

impl ValidationFailure {
    /// Returns `None` when `errors` is empty.
    pub fn new(
        message: impl Into<String>,
        errors: Vec<ValidationError>,
        params: Map<String, Value>,
    ) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }
        Some(Self {
            message: message.into(),
            errors,
            params,
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    /// Errors whose attribute matches `attribute`.
    pub fn for_attribute<'a>(
        &'a self,
        attribute: &'a str,
    ) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.errors.iter().filter(move |e| e.attribute == attribute)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFailure {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ValidationError>,
    #[serde(default)]
    params: Map<String, Value>,
}

impl<'de> Deserialize<'de> for ValidationFailure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawFailure::deserialize(deserializer)?;
        ValidationFailure::new(raw.message, raw.errors, raw.params)
            .ok_or_else(|| de::Error::custom("validation failure without errors"))
    }
}

/// Either the created/updated entity or a validation failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedResponse<T> {
    Success(T),
    Failure(ValidationFailure),
}

impl<T> ValidatedResponse<T> {
    pub fn success(&self) -> bool {
        matches!(self, ValidatedResponse::Success(_))
    }

    /// Human-readable failure summary; empty on success.
    pub fn message(&self) -> &str {
        match self {
            ValidatedResponse::Success(_) => "",
            ValidatedResponse::Failure(f) => f.message(),
        }
    }

    /// Structured errors; always empty on success, never empty on failure.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            ValidatedResponse::Success(_) => &[],
            ValidatedResponse::Failure(f) => f.errors(),
        }
    }

    /// Request parameters echoed back with a failure.
    pub fn params(&self) -> Option<&Map<String, Value>> {
        match self {
            ValidatedResponse::Success(_) => None,
            ValidatedResponse::Failure(f) => Some(f.params()),
        }
    }

    pub fn entity(&self) -> Option<&T> {
        match self {
            ValidatedResponse::Success(entity) => Some(entity),
            ValidatedResponse::Failure(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T, ValidationFailure> {
        match self {
            ValidatedResponse::Success(entity) => Ok(entity),
            ValidatedResponse::Failure(f) => Err(f),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ValidatedResponse<U> {
        match self {
            ValidatedResponse::Success(entity) => ValidatedResponse::Success(f(entity)),
            ValidatedResponse::Failure(failure) => ValidatedResponse::Failure(failure),
        }
    }
}

impl<T: Entity> Serialize for ValidatedResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ValidatedResponse::Success(entity) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("success", &true)?;
                map.serialize_entry(T::KEY, entity)?;
                map.end()
            }
            ValidatedResponse::Failure(failure) => {
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("message", failure.message())?;
                map.serialize_entry("errors", failure.errors())?;
                map.serialize_entry("params", failure.params())?;
                map.end()
            }
        }
    }
}

impl<'de, T: Entity> Deserialize<'de> for ValidatedResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut body = Map::<String, Value>::deserialize(deserializer)?;
        let success = body
            .remove("success")
            .and_then(|v| v.as_bool())
            .ok_or_else(|| <D::Error as de::Error>::missing_field("success"))?;

        if success {
            let has_errors = body
                .get("errors")
                .and_then(Value::as_array)
                .is_some_and(|errors| !errors.is_empty());
            if has_errors {
                return Err(de::Error::custom("successful response carries errors"));
            }
            let entity = body
                .remove(T::KEY)
                .ok_or_else(|| <D::Error as de::Error>::missing_field(T::KEY))?;
            serde_json::from_value(entity)
                .map(ValidatedResponse::Success)
                .map_err(de::Error::custom)
        } else {
            serde_json::from_value::<ValidationFailure>(Value::Object(body))
                .map(ValidatedResponse::Failure)
                .map_err(de::Error::custom)
        }
    }
}
