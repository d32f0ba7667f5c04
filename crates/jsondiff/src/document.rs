use jsondiff_core::DocumentError;
use serde_json::Value;

/// Conversion of assertion inputs into a parsed JSON document.
///
/// Raw text is parsed strictly; failures surface as
/// [`DocumentError::Parse`] rather than as a comparison outcome.
pub trait IntoDocument {
    fn into_document(self) -> Result<Value, DocumentError>;
}

impl IntoDocument for Value {
    fn into_document(self) -> Result<Value, DocumentError> {
        Ok(self)
    }
}

impl IntoDocument for &Value {
    fn into_document(self) -> Result<Value, DocumentError> {
        Ok(self.clone())
    }
}

impl IntoDocument for &str {
    fn into_document(self) -> Result<Value, DocumentError> {
        serde_json::from_str(self).map_err(DocumentError::from)
    }
}

impl IntoDocument for String {
    fn into_document(self) -> Result<Value, DocumentError> {
        self.as_str().into_document()
    }
}
