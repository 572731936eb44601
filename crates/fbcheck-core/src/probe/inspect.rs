//! JSON body inspection for readable endpoints.

use serde_json::Value;

/// JSON type of a decoded body, or `InvalidJson` when decoding failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
    InvalidJson,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Object => "object",
            DataType::Array => "array",
            DataType::String => "string",
            DataType::Number => "number",
            DataType::Boolean => "boolean",
            DataType::Null => "null",
            DataType::InvalidJson => "invalid_json",
        }
    }

    fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => DataType::Object,
            Value::Array(_) => DataType::Array,
            Value::String(_) => DataType::String,
            Value::Number(_) => DataType::Number,
            Value::Bool(_) => DataType::Boolean,
            Value::Null => DataType::Null,
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSummary {
    /// Decoded value is neither `null` nor an empty object/array.
    pub has_data: bool,
    pub data_type: DataType,
}

/// Decodes `body` as JSON and summarizes what it holds.
pub fn inspect_body(body: &[u8]) -> DataSummary {
    match serde_json::from_slice::<Value>(body) {
        Ok(value) => {
            let has_data = match &value {
                Value::Null => false,
                Value::Object(m) => !m.is_empty(),
                Value::Array(a) => !a.is_empty(),
                _ => true,
            };
            DataSummary {
                has_data,
                data_type: DataType::of(&value),
            }
        }
        Err(e) => {
            tracing::debug!("response body is not JSON: {}", e);
            DataSummary {
                has_data: false,
                data_type: DataType::InvalidJson,
            }
        }
    }
}
