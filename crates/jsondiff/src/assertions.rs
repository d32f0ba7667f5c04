use std::{error::Error, fmt};

use jsondiff_core::{
    compare, messages, resolve, DocumentError, JsonType, Location, Resolved,
};
use serde_json::Value;

use crate::document::IntoDocument;

/// Starts an assertion chain over the given actual document.
///
/// The document is parsed once; all assertions made through the returned
/// [`JsonAssert`] borrow it and leave it unchanged.
pub fn assert_json(actual: impl IntoDocument) -> Result<JsonAssert, DocumentError> {
    Ok(JsonAssert {
        actual: actual.into_document()?,
    })
}

/// An assertion failure or a malformed expected-side document.
///
/// `Display` renders the exact failure message, so callers may assert on
/// `error.to_string()`.
#[derive(Debug)]
pub enum AssertionError {
    /// The expected document passed to an assertion is not valid JSON.
    InvalidJson(DocumentError),
    /// The assertion did not hold; carries the formatted message.
    Failed(String),
}

impl fmt::Display for AssertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssertionError::InvalidJson(error) => error.fmt(f),
            AssertionError::Failed(message) => f.write_str(message),
        }
    }
}

impl Error for AssertionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AssertionError::InvalidJson(error) => Some(error),
            AssertionError::Failed(_) => None,
        }
    }
}

impl From<DocumentError> for AssertionError {
    fn from(error: DocumentError) -> Self {
        AssertionError::InvalidJson(error)
    }
}

/// Assertions over a whole document.
#[derive(Debug, Clone)]
pub struct JsonAssert {
    actual: Value,
}

impl JsonAssert {
    /// Asserts that the actual document is equivalent to `expected`.
    ///
    /// Fails with the full difference report: a header line plus one line
    /// per difference, in traversal order.
    pub fn is_equal_to(&self, expected: impl IntoDocument) -> Result<(), AssertionError> {
        let expected = expected.into_document()?;
        let differences = compare(&expected, &self.actual, Location::new());
        if differences.is_empty() {
            Ok(())
        } else {
            Err(AssertionError::Failed(messages::difference_report(
                &differences,
            )))
        }
    }

    /// Asserts that the actual document differs from `expected`.
    pub fn is_not_equal_to(&self, expected: impl IntoDocument) -> Result<(), AssertionError> {
        let expected = expected.into_document()?;
        if compare(&expected, &self.actual, Location::new()).is_empty() {
            Err(AssertionError::Failed(messages::JSON_IS_EQUAL.into()))
        } else {
            Ok(())
        }
    }

    /// Scopes further assertions to the node at the given dotted path,
    /// e.g. `result.array[1]`.
    #[must_use]
    pub fn node(&self, path: &str) -> NodeAssert<'_> {
        NodeAssert {
            document: &self.actual,
            path: Location::from(path),
        }
    }

    /// The parsed actual document.
    #[must_use]
    pub fn actual(&self) -> &Value {
        &self.actual
    }
}

/// Assertions scoped to a single node of the actual document.
#[derive(Debug, Clone)]
pub struct NodeAssert<'a> {
    document: &'a Value,
    path: Location,
}

impl NodeAssert<'_> {
    fn locate(&self) -> Resolved<'_> {
        resolve(self.document, self.path.as_str())
    }

    /// Asserts that the node exists. A `null` value is a present node.
    pub fn is_present(&self) -> Result<(), AssertionError> {
        match self.locate() {
            Resolved::Located(_) => Ok(()),
            Resolved::Absent => Err(AssertionError::Failed(messages::node_missing(&self.path))),
        }
    }

    /// Asserts that the node does not exist.
    pub fn is_absent(&self) -> Result<(), AssertionError> {
        match self.locate() {
            Resolved::Located(_) => Err(AssertionError::Failed(messages::node_present(&self.path))),
            Resolved::Absent => Ok(()),
        }
    }

    /// Asserts that the node exists and is equivalent to `expected`.
    ///
    /// Difference paths in the failure report are prefixed with the node
    /// path; a missing node fails with the node-missing message.
    pub fn is_equal_to(&self, expected: impl IntoDocument) -> Result<(), AssertionError> {
        let expected = expected.into_document()?;
        match self.locate() {
            Resolved::Absent => Err(AssertionError::Failed(messages::node_missing(&self.path))),
            Resolved::Located(actual) => {
                let differences = compare(&expected, actual, self.path.clone());
                if differences.is_empty() {
                    Ok(())
                } else {
                    Err(AssertionError::Failed(messages::difference_report(
                        &differences,
                    )))
                }
            }
        }
    }

    /// Asserts that the node differs from `expected`. A missing node
    /// passes: it is certainly not equal to any value.
    pub fn is_not_equal_to(&self, expected: impl IntoDocument) -> Result<(), AssertionError> {
        let expected = expected.into_document()?;
        match self.locate() {
            Resolved::Absent => Ok(()),
            Resolved::Located(actual) => {
                if compare(&expected, actual, self.path.clone()).is_empty() {
                    Err(AssertionError::Failed(messages::JSON_IS_EQUAL.into()))
                } else {
                    Ok(())
                }
            }
        }
    }

    pub fn is_array(&self) -> Result<(), AssertionError> {
        self.has_type(JsonType::Array)
    }

    pub fn is_object(&self) -> Result<(), AssertionError> {
        self.has_type(JsonType::Object)
    }

    pub fn is_string(&self) -> Result<(), AssertionError> {
        self.has_type(JsonType::String)
    }

    pub fn is_number(&self) -> Result<(), AssertionError> {
        self.has_type(JsonType::Number)
    }

    pub fn is_boolean(&self) -> Result<(), AssertionError> {
        self.has_type(JsonType::Boolean)
    }

    pub fn is_null(&self) -> Result<(), AssertionError> {
        self.has_type(JsonType::Null)
    }

    /// Type checks require the node to exist: a missing node fails with
    /// the node-missing message, a node of another type with the
    /// wrong-type message.
    fn has_type(&self, expected: JsonType) -> Result<(), AssertionError> {
        match self.locate() {
            Resolved::Absent => Err(AssertionError::Failed(messages::node_missing(&self.path))),
            Resolved::Located(value) if JsonType::of(value) == expected => Ok(()),
            Resolved::Located(value) => Err(AssertionError::Failed(messages::node_wrong_type(
                &self.path, expected, value,
            ))),
        }
    }
}
