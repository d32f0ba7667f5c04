//! # jsondiff
//!
//! Fluent assertions over structured JSON document comparison.
//!
//! An assertion starts from an actual document (raw text or an
//! already-parsed [`serde_json::Value`]) and either checks the whole
//! document or scopes itself to a node addressed by a dotted path:
//!
//! ```
//! use jsondiff::assert_json;
//! use serde_json::json;
//!
//! let assertion = assert_json(r#"{"result": {"string": "stringValue", "array": [1, 2, 3]}}"#)?;
//! assertion.is_equal_to(json!({"result": {"string": "stringValue", "array": [1, 2, 3]}}))?;
//! assertion.node("result.array").is_array()?;
//! assertion.node("result.string2").is_absent()?;
//!
//! let error = assertion
//!     .node("result.string")
//!     .is_array()
//!     .expect_err("the node holds a string");
//! assert_eq!(
//!     error.to_string(),
//!     "Node \"result.string\" is not an array. The actual value is '\"stringValue\"'."
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Failed assertions carry the exact formatted report as their error
//! message; malformed input documents surface as [`DocumentError`] before
//! any comparison runs. No operation mutates its inputs, and every type
//! here is plain immutable data, safe to share across threads.
mod assertions;
mod document;

pub use assertions::{assert_json, AssertionError, JsonAssert, NodeAssert};
pub use document::IntoDocument;
pub use jsondiff_core::{
    compare, messages, resolve, Difference, DifferenceKind, DocumentError, JsonType, Location,
    LocationSegment, Resolved,
};
