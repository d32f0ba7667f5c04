use std::{error::Error, fmt};

/// A fatal input error: the document could not be turned into a JSON value.
///
/// Malformed input is reported before any comparison begins and is never
/// coerced into a "documents are different" outcome.
#[derive(Debug)]
pub enum DocumentError {
    /// The input text is not valid JSON.
    Parse(serde_json::Error),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Parse(error) => write!(f, "invalid JSON document: {error}"),
        }
    }
}

impl Error for DocumentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DocumentError::Parse(error) => Some(error),
        }
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(error: serde_json::Error) -> Self {
        DocumentError::Parse(error)
    }
}
