use std::borrow::Cow;

use ahash::AHashSet;
use serde::Serialize;
use serde_json::Value;

use crate::{paths::Location, types::JsonType};

/// One discrepancy between the expected and the actual document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Difference<'a> {
    path: Location,
    kind: DifferenceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected: Option<Cow<'a, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    actual: Option<Cow<'a, Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DifferenceKind {
    ValueMismatch,
    TypeMismatch,
    MissingInActual,
    MissingInExpected,
    ExtraArrayElement,
    MissingArrayElement,
}

impl<'a> Difference<'a> {
    pub(crate) fn value_mismatch(path: Location, expected: &'a Value, actual: &'a Value) -> Self {
        Difference {
            path,
            kind: DifferenceKind::ValueMismatch,
            expected: Some(Cow::Borrowed(expected)),
            actual: Some(Cow::Borrowed(actual)),
        }
    }
    pub(crate) fn type_mismatch(path: Location, expected: &'a Value, actual: &'a Value) -> Self {
        Difference {
            path,
            kind: DifferenceKind::TypeMismatch,
            expected: Some(Cow::Borrowed(expected)),
            actual: Some(Cow::Borrowed(actual)),
        }
    }
    pub(crate) fn missing_in_actual(path: Location, expected: &'a Value) -> Self {
        Difference {
            path,
            kind: DifferenceKind::MissingInActual,
            expected: Some(Cow::Borrowed(expected)),
            actual: None,
        }
    }
    pub(crate) fn missing_in_expected(path: Location, actual: &'a Value) -> Self {
        Difference {
            path,
            kind: DifferenceKind::MissingInExpected,
            expected: None,
            actual: Some(Cow::Borrowed(actual)),
        }
    }
    pub(crate) fn missing_element(path: Location, expected: &'a Value) -> Self {
        Difference {
            path,
            kind: DifferenceKind::MissingArrayElement,
            expected: Some(Cow::Borrowed(expected)),
            actual: None,
        }
    }
    pub(crate) fn extra_element(path: Location, actual: &'a Value) -> Self {
        Difference {
            path,
            kind: DifferenceKind::ExtraArrayElement,
            expected: None,
            actual: Some(Cow::Borrowed(actual)),
        }
    }

    /// Path of the node where the discrepancy was found.
    #[must_use]
    pub fn path(&self) -> &Location {
        &self.path
    }

    #[must_use]
    pub fn kind(&self) -> DifferenceKind {
        self.kind
    }

    #[must_use]
    pub fn expected(&self) -> Option<&Value> {
        self.expected.as_deref()
    }

    #[must_use]
    pub fn actual(&self) -> Option<&Value> {
        self.actual.as_deref()
    }
}

/// Compares two documents, producing the ordered list of differences.
///
/// An empty result means the documents are equivalent. Arrays compare
/// order-sensitively by index; objects compare by key, with shared and
/// expected-only keys reported in the expected document's declaration
/// order, followed by actual-only keys in the actual document's order.
/// Values of different JSON types produce a single [`DifferenceKind::TypeMismatch`]
/// without descending further.
#[must_use]
pub fn compare<'a>(expected: &'a Value, actual: &'a Value, scope: Location) -> Vec<Difference<'a>> {
    let mut differences = Vec::new();
    diff_at(expected, actual, &scope, &mut differences);
    differences
}

fn diff_at<'a>(
    expected: &'a Value,
    actual: &'a Value,
    path: &Location,
    differences: &mut Vec<Difference<'a>>,
) {
    match (expected, actual) {
        (Value::Object(expected_members), Value::Object(actual_members)) => {
            for (key, expected_member) in expected_members {
                let member_path = path.join(key.as_str());
                if let Some(actual_member) = actual_members.get(key) {
                    diff_at(expected_member, actual_member, &member_path, differences);
                } else {
                    differences.push(Difference::missing_in_actual(member_path, expected_member));
                }
            }
            let expected_keys: AHashSet<&str> =
                expected_members.keys().map(String::as_str).collect();
            for (key, actual_member) in actual_members {
                if !expected_keys.contains(key.as_str()) {
                    differences.push(Difference::missing_in_expected(
                        path.join(key.as_str()),
                        actual_member,
                    ));
                }
            }
        }
        (Value::Array(expected_items), Value::Array(actual_items)) => {
            for (index, (expected_item, actual_item)) in
                expected_items.iter().zip(actual_items).enumerate()
            {
                diff_at(expected_item, actual_item, &path.join(index), differences);
            }
            for (index, expected_item) in
                expected_items.iter().enumerate().skip(actual_items.len())
            {
                differences.push(Difference::missing_element(path.join(index), expected_item));
            }
            for (index, actual_item) in actual_items.iter().enumerate().skip(expected_items.len())
            {
                differences.push(Difference::extra_element(path.join(index), actual_item));
            }
        }
        (expected, actual) => {
            if JsonType::of(expected) != JsonType::of(actual) {
                differences.push(Difference::type_mismatch(path.clone(), expected, actual));
            } else if expected != actual {
                differences.push(Difference::value_mismatch(path.clone(), expected, actual));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use test_case::test_case;

    use super::{compare, DifferenceKind};
    use crate::paths::Location;

    #[test_case(&json!(null); "null")]
    #[test_case(&json!(1.5); "number")]
    #[test_case(&json!("text"); "string")]
    #[test_case(&json!([1, [2, {"a": null}]]); "nested array")]
    #[test_case(&json!({"result": {"string": "stringValue", "array": [1, 2, 3]}}); "nested object")]
    fn reflexivity(document: &Value) {
        assert!(compare(document, document, Location::new()).is_empty());
    }

    #[test]
    fn single_leaf_difference_yields_one_record() {
        let expected = json!({"result": {"string": "stringValue2", "array": [1, 2, 3]}});
        let actual = json!({"result": {"string": "stringValue", "array": [1, 2, 3]}});
        let differences = compare(&expected, &actual, Location::new());
        assert_eq!(differences.len(), 1);
        let difference = &differences[0];
        assert_eq!(difference.path().as_str(), "result.string");
        assert_eq!(difference.kind(), DifferenceKind::ValueMismatch);
        assert_eq!(difference.expected(), Some(&json!("stringValue2")));
        assert_eq!(difference.actual(), Some(&json!("stringValue")));
    }

    #[test_case(&json!({"a": {}}), &json!({"a": []}), DifferenceKind::TypeMismatch; "object vs array")]
    #[test_case(&json!({"a": "1"}), &json!({"a": 1}), DifferenceKind::TypeMismatch; "string vs number")]
    #[test_case(&json!({"a": null}), &json!({"a": false}), DifferenceKind::TypeMismatch; "null vs boolean")]
    #[test_case(&json!({"a": 1}), &json!({"a": 2}), DifferenceKind::ValueMismatch; "number vs number")]
    fn mismatch_kinds(expected: &Value, actual: &Value, kind: DifferenceKind) {
        let differences = compare(expected, actual, Location::new());
        assert_eq!(differences.len(), 1);
        assert_eq!(differences[0].kind(), kind);
        assert_eq!(differences[0].path().as_str(), "a");
    }

    #[test]
    fn type_mismatch_does_not_descend() {
        let expected = json!({"a": {"deep": {"deeper": 1}}});
        let actual = json!({"a": [1, 2, 3]});
        let differences = compare(&expected, &actual, Location::new());
        assert_eq!(differences.len(), 1);
        assert_eq!(differences[0].kind(), DifferenceKind::TypeMismatch);
    }

    #[test]
    fn object_keys_compare_in_declaration_order() {
        let expected = json!({"a": 1, "b": {"c": true}, "d": [1, 2]});
        let actual = json!({"d": [1], "b": {"c": false}, "a": 2, "e": null});
        let differences = compare(&expected, &actual, Location::new());
        let observed: Vec<(&str, DifferenceKind)> = differences
            .iter()
            .map(|difference| (difference.path().as_str(), difference.kind()))
            .collect();
        assert_eq!(
            observed,
            [
                ("a", DifferenceKind::ValueMismatch),
                ("b.c", DifferenceKind::ValueMismatch),
                ("d[1]", DifferenceKind::MissingArrayElement),
                ("e", DifferenceKind::MissingInExpected),
            ]
        );
    }

    #[test]
    fn array_length_differences() {
        let expected = json!([1, 2]);
        let actual = json!([1, 2, 3, 4]);
        let differences = compare(&expected, &actual, Location::new());
        let observed: Vec<(&str, DifferenceKind)> = differences
            .iter()
            .map(|difference| (difference.path().as_str(), difference.kind()))
            .collect();
        assert_eq!(
            observed,
            [
                ("[2]", DifferenceKind::ExtraArrayElement),
                ("[3]", DifferenceKind::ExtraArrayElement),
            ]
        );
    }

    #[test]
    fn null_member_is_not_a_missing_member() {
        let expected = json!({"a": null});
        let actual = json!({});
        let differences = compare(&expected, &actual, Location::new());
        assert_eq!(differences.len(), 1);
        assert_eq!(differences[0].kind(), DifferenceKind::MissingInActual);
        assert!(compare(&expected, &json!({"a": null}), Location::new()).is_empty());
    }

    #[test]
    fn scope_prefixes_reported_paths() {
        let expected = json!({"string": "a"});
        let actual = json!({"string": "b"});
        let differences = compare(&expected, &actual, Location::from("result"));
        assert_eq!(differences[0].path().as_str(), "result.string");
    }

    #[test]
    fn serialized_report_shape() {
        let expected = json!({"a": 1, "b": 2});
        let actual = json!({"a": 2});
        let differences = compare(&expected, &actual, Location::new());
        let report = serde_json::to_value(&differences).expect("serializable report");
        assert_eq!(
            report,
            json!([
                {"path": "a", "kind": "valueMismatch", "expected": 1, "actual": 2},
                {"path": "b", "kind": "missingInActual", "expected": 2},
            ])
        );
    }
}
