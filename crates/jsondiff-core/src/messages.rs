//! Rendering of comparison outcomes into their fixed message texts.
//!
//! The strings produced here are an externally observable contract:
//! downstream consumers assert on the exact text, so templates must not
//! change wording, punctuation, or newline placement.
use std::fmt::{self, Write};

use serde_json::Value;

use crate::{
    diff::{Difference, DifferenceKind},
    paths::Location,
    types::JsonType,
};

/// Failure message of a negated equality assertion.
pub const JSON_IS_EQUAL: &str = "JSON is equal.";

static NULL: Value = Value::Null;

impl fmt::Display for Difference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path();
        let expected = self.expected().unwrap_or(&NULL);
        let actual = self.actual().unwrap_or(&NULL);
        match self.kind() {
            DifferenceKind::ValueMismatch | DifferenceKind::TypeMismatch => write!(
                f,
                "Different value found in node \"{path}\". Expected {expected}, got {actual}."
            ),
            DifferenceKind::MissingInActual => {
                write!(f, "Missing node \"{path}\". Expected {expected}.")
            }
            DifferenceKind::MissingInExpected => {
                write!(f, "Unexpected node \"{path}\". Got {actual}.")
            }
            DifferenceKind::MissingArrayElement => {
                write!(f, "Missing element in node \"{path}\". Expected {expected}.")
            }
            DifferenceKind::ExtraArrayElement => {
                write!(f, "Extra element in node \"{path}\". Got {actual}.")
            }
        }
    }
}

/// Renders a non-empty list of differences as the full failure report:
/// a header followed by one line per record, in record order.
#[must_use]
pub fn difference_report(differences: &[Difference<'_>]) -> String {
    let mut report = String::from("JSON documents are different:\n");
    for difference in differences {
        let _ = writeln!(report, "{difference}");
    }
    report
}

/// Failure message of `is_absent` on a present node.
#[must_use]
pub fn node_present(path: &Location) -> String {
    format!("Node \"{path}\" is present.")
}

/// Failure message of `is_present` (and of any node assertion that
/// requires the node to exist) on a missing node.
#[must_use]
pub fn node_missing(path: &Location) -> String {
    format!("Node \"{path}\" is missing.")
}

/// Failure message of a type check, e.g.
/// `Node "result.string" is not an array. The actual value is '"stringValue"'.`
#[must_use]
pub fn node_wrong_type(path: &Location, expected: JsonType, actual: &Value) -> String {
    format!(
        "Node \"{path}\" is not {}. The actual value is '{actual}'.",
        expected.described()
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{difference_report, node_missing, node_present, node_wrong_type, JSON_IS_EQUAL};
    use crate::{compare, JsonType, Location};

    #[test]
    fn value_mismatch_line() {
        let expected = json!({"result": {"string": "stringValue2"}});
        let actual = json!({"result": {"string": "stringValue"}});
        let differences = compare(&expected, &actual, Location::new());
        assert_eq!(
            differences[0].to_string(),
            "Different value found in node \"result.string\". \
             Expected \"stringValue2\", got \"stringValue\"."
        );
    }

    #[test]
    fn report_concatenates_records_line_by_line() {
        let expected = json!({"a": 1, "b": [true]});
        let actual = json!({"a": "1", "c": null});
        let differences = compare(&expected, &actual, Location::new());
        assert_eq!(
            difference_report(&differences),
            "JSON documents are different:\n\
             Different value found in node \"a\". Expected 1, got \"1\".\n\
             Missing node \"b\". Expected [true].\n\
             Unexpected node \"c\". Got null.\n"
        );
    }

    #[test]
    fn scalars_render_as_canonical_literals() {
        let expected = json!({"n": 1.5, "b": false, "z": null, "o": {"k": "v"}});
        let actual = json!({"n": 2, "b": true, "z": 0, "o": {"k": "w"}});
        let differences = compare(&expected, &actual, Location::new());
        let lines: Vec<String> = differences.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            [
                "Different value found in node \"n\". Expected 1.5, got 2.",
                "Different value found in node \"b\". Expected false, got true.",
                "Different value found in node \"z\". Expected null, got 0.",
                "Different value found in node \"o.k\". Expected \"v\", got \"w\".",
            ]
        );
    }

    #[test]
    fn node_query_messages() {
        let path = Location::from("result.string");
        assert_eq!(node_present(&path), "Node \"result.string\" is present.");
        assert_eq!(node_missing(&path), "Node \"result.string\" is missing.");
        assert_eq!(
            node_wrong_type(&path, JsonType::Array, &json!("stringValue")),
            "Node \"result.string\" is not an array. The actual value is '\"stringValue\"'."
        );
        assert_eq!(
            node_wrong_type(&path, JsonType::Null, &json!(true)),
            "Node \"result.string\" is not null. The actual value is 'true'."
        );
        assert_eq!(JSON_IS_EQUAL, "JSON is equal.");
    }
}
