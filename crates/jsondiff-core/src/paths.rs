use std::{fmt, sync::Arc};

/// A dotted path to a node within a JSON document.
///
/// Field segments are joined with `.`, array indices render as `[i]`
/// appended to their parent segment: `result.array[1]`. The root location
/// is the empty string. Locations are immutable and cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location(Arc<str>);

impl Location {
    /// The root location.
    #[must_use]
    pub fn new() -> Self {
        Location(Arc::from(""))
    }

    /// Create a new location extended with the given segment.
    #[must_use]
    pub fn join<'a>(&self, segment: impl Into<LocationSegment<'a>>) -> Self {
        let mut buffer = String::with_capacity(self.0.len() + 8);
        buffer.push_str(&self.0);
        match segment.into() {
            LocationSegment::Key(key) => {
                if !buffer.is_empty() {
                    buffer.push('.');
                }
                buffer.push_str(key);
            }
            LocationSegment::Index(index) => {
                let mut itoa = itoa::Buffer::new();
                buffer.push('[');
                buffer.push_str(itoa.format(index));
                buffer.push(']');
            }
        }
        Location(buffer.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::new()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(path: &str) -> Self {
        Location(Arc::from(path))
    }
}

impl serde::Serialize for Location {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// A single segment of a node path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSegment<'a> {
    /// A string key for object members.
    Key(&'a str),
    /// A numeric index for array elements.
    Index(usize),
}

impl<'a> From<&'a str> for LocationSegment<'a> {
    fn from(value: &'a str) -> Self {
        LocationSegment::Key(value)
    }
}

impl From<usize> for LocationSegment<'_> {
    fn from(value: usize) -> Self {
        LocationSegment::Index(value)
    }
}

/// Parses a textual path into segments.
///
/// Splits on `.`; a trailing `[i]` group (or several) on a segment yields
/// index segments. Bracket groups that do not hold a valid index are not
/// path syntax and leave the segment as a literal key, so parsing is total.
pub(crate) fn parse(path: &str) -> Vec<LocationSegment<'_>> {
    let mut segments = Vec::new();
    for chunk in path.split('.') {
        if chunk.is_empty() {
            continue;
        }
        let Some(position) = chunk.find('[') else {
            segments.push(LocationSegment::Key(chunk));
            continue;
        };
        let (name, brackets) = chunk.split_at(position);
        if let Some(indices) = parse_brackets(brackets) {
            if !name.is_empty() {
                segments.push(LocationSegment::Key(name));
            }
            segments.extend(indices.into_iter().map(LocationSegment::Index));
        } else {
            segments.push(LocationSegment::Key(chunk));
        }
    }
    segments
}

fn parse_brackets(mut brackets: &str) -> Option<Vec<usize>> {
    let mut indices = Vec::new();
    while !brackets.is_empty() {
        let inner = brackets.strip_prefix('[')?;
        let end = inner.find(']')?;
        indices.push(inner[..end].parse().ok()?);
        brackets = &inner[end + 1..];
    }
    Some(indices)
}
