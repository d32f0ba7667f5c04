use serde_json::Value;

use crate::paths::{self, LocationSegment};

/// Outcome of resolving a node path against a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// The path leads to a value. Note that `Located(Null)` is a present
    /// node holding the JSON `null` value, not an absent one.
    Located(&'a Value),
    /// The path does not lead to a value.
    Absent,
}

impl<'a> Resolved<'a> {
    #[must_use]
    pub fn is_located(&self) -> bool {
        matches!(self, Resolved::Located(_))
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Resolved::Absent)
    }

    #[must_use]
    pub fn value(self) -> Option<&'a Value> {
        match self {
            Resolved::Located(value) => Some(value),
            Resolved::Absent => None,
        }
    }
}

/// Resolves a dotted node path against a document.
///
/// Total over all inputs: a missing member, an out-of-bounds index, a
/// segment applied to a scalar, and malformed path text all yield
/// [`Resolved::Absent`] rather than an error. The empty path resolves to
/// the document itself.
#[must_use]
pub fn resolve<'a>(document: &'a Value, path: &str) -> Resolved<'a> {
    let mut current = document;
    for segment in paths::parse(path) {
        current = match (current, segment) {
            (Value::Object(object), LocationSegment::Key(key)) => match object.get(key) {
                Some(value) => value,
                None => return Resolved::Absent,
            },
            // A key applied to an array navigates by index, so `a.1` and
            // `a[1]` address the same element.
            (Value::Array(items), LocationSegment::Key(key)) => {
                match key.parse::<usize>().ok().and_then(|index| items.get(index)) {
                    Some(value) => value,
                    None => return Resolved::Absent,
                }
            }
            (Value::Array(items), LocationSegment::Index(index)) => match items.get(index) {
                Some(value) => value,
                None => return Resolved::Absent,
            },
            _ => return Resolved::Absent,
        };
    }
    Resolved::Located(current)
}
