//! A single ordered instruction inside a checkable.

use serde_json::Value;

use super::error::CheckableError;

/// One instruction within a checkable, tagged with its position.
///
/// The payload is kept as given: either a plain instruction string or an
/// object describing the instruction. Steps compare equal when both their
/// position and payload match.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    index: usize,
    payload: Value,
}

impl Step {
    /// Builds the step found at `index` of a `steps` array.
    ///
    /// # Errors
    ///
    /// Returns [`CheckableError::InvalidStep`] unless the payload is a string or an object.
    pub fn from_json(value: &Value, index: usize) -> Result<Self, CheckableError> {
        match value {
            Value::String(_) | Value::Object(_) => Ok(Self { index, payload: value.clone() }),
            other => Err(CheckableError::InvalidStep {
                index,
                reason: format!("expected a string or an object, got {}", kind_of(other)),
            }),
        }
    }

    /// Zero-based position of this step.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The instruction text, when the payload carries one.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            Value::String(text) => Some(text),
            Value::Object(map) => map.get("text").and_then(Value::as_str),
            _ => None,
        }
    }

    /// Serializes the step back to the payload it was built from.
    #[must_use]
    pub fn as_json(&self) -> Value {
        self.payload.clone()
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
