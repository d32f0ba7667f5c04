use std::fmt;

use serde_json::Value;

/// The JSON type of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    Array,
    Boolean,
    Null,
    Number,
    Object,
    String,
}

impl JsonType {
    #[must_use]
    pub fn of(value: &Value) -> JsonType {
        match value {
            Value::Null => JsonType::Null,
            Value::Bool(_) => JsonType::Boolean,
            Value::Number(_) => JsonType::Number,
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }

    /// The type name with its indefinite article, as used in messages.
    pub(crate) fn described(self) -> &'static str {
        match self {
            JsonType::Array => "an array",
            JsonType::Boolean => "a boolean",
            JsonType::Null => "null",
            JsonType::Number => "a number",
            JsonType::Object => "an object",
            JsonType::String => "a string",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JsonType::Array => "array",
            JsonType::Boolean => "boolean",
            JsonType::Null => "null",
            JsonType::Number => "number",
            JsonType::Object => "object",
            JsonType::String => "string",
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use test_case::test_case;

    use super::JsonType;

    #[test_case(&json!(null), JsonType::Null)]
    #[test_case(&json!(true), JsonType::Boolean)]
    #[test_case(&json!(42), JsonType::Number)]
    #[test_case(&json!("s"), JsonType::String)]
    #[test_case(&json!([1]), JsonType::Array)]
    #[test_case(&json!({"a": 1}), JsonType::Object)]
    fn classification(value: &Value, expected: JsonType) {
        assert_eq!(JsonType::of(value), expected);
    }
}
