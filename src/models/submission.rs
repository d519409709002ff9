use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const TIMESTAMP_FIELD: &str = "timestamp";

/// ISO-8601 without an offset, matching local server time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One contact-form entry: whatever fields the client sent plus a
/// server-assigned `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submission {
    pub fields: Map<String, Value>,
}

impl Submission {
    /// Build a submission from client fields, setting (or overwriting) the
    /// `timestamp` field with `now`.
    pub fn stamp(mut fields: Map<String, Value>, now: NaiveDateTime) -> Self {
        fields.insert(
            TIMESTAMP_FIELD.to_string(),
            Value::String(now.format(TIMESTAMP_FORMAT).to_string()),
        );
        Self { fields }
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.fields.get(TIMESTAMP_FIELD).and_then(|v| v.as_str())
    }

    /// Display text for a single field. Missing and null fields are empty.
    pub fn field_text(&self, name: &str) -> String {
        match self.fields.get(name) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}
