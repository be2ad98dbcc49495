use serde::Serialize;
use serde_json::{Map, Value};
use crate::utils::error::{StepError, StepResult};

/// Payload field holding the URL of the build being processed
pub const BUILD_URL_FIELD: &str = "buildUrl";

/// Decoded JSON object handed to the step on standard input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payload {
    fields: Map<String, Value>,
}

impl Payload {
    /// Build a payload from a decoded JSON value, accepting objects only
    pub fn from_value(value: Value) -> StepResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(StepError::InputParse(format!(
                "expected a JSON object, found {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Look up a raw field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Look up a field that must be present and hold a string
    pub fn require_str(&self, key: &str) -> StepResult<&str> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Err(StepError::MissingField(key.to_string())),
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(other) => Err(StepError::InvalidField {
                field: key.to_string(),
                expected: "string".to_string(),
                found: json_type_name(other).to_string(),
            }),
        }
    }

    /// The `buildUrl` field
    pub fn build_url(&self) -> StepResult<&str> {
        self.require_str(BUILD_URL_FIELD)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// Name of a JSON value's type, as used in error messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
