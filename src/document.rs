use std::collections::HashMap;

use serde_json::Number;

/// A loosely-typed JSON document as seen by the processor.
///
/// The shape of a document is never declared up front. Navigation discovers
/// it by matching on the variant, and every lookup is total: asking for a
/// field of something that is not an object yields `None` instead of an
/// error.
///
/// Numbers are held as parsed, so integers beyond `i64` and floats in
/// exponent form come back out exactly as they went in.
///
/// # Examples
///
/// ```
/// use shroud::Document;
/// use serde_json::json;
///
/// let doc = Document::from(json!({"name": "Alice", "age": 30}));
///
/// assert_eq!(doc.get_field("name").and_then(Document::as_str), Some("Alice"));
/// assert_eq!(doc.get_field("age").and_then(Document::as_str), None);
/// assert!(doc.get_field("missing").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Null,
    Boolean(bool),
    /// Any JSON number, untouched by processing
    Number(Number),
    /// The only leaf a transform is ever applied to
    String(String),
    Array(Vec<Document>),
    Object(HashMap<String, Document>),
}

impl Document {
    /// Look up a field by name.
    ///
    /// Returns `None` when the field is absent or when `self` is not an
    /// object (indexing a scalar or an array by name).
    pub fn get_field(&self, name: &str) -> Option<&Document> {
        match self {
            Document::Object(map) => map.get(name),
            _ => None,
        }
    }

    /// Mutable counterpart of [`Document::get_field`].
    pub fn get_field_mut(&mut self, name: &str) -> Option<&mut Document> {
        match self {
            Document::Object(map) => map.get_mut(name),
            _ => None,
        }
    }

    /// Borrow the elements when this is an array.
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Document>> {
        match self {
            Document::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the string when this is a string leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Document::String(s) => Some(s),
            _ => None,
        }
    }

    /// Human-readable name of the variant, used in skip reasons.
    pub fn type_name(&self) -> &'static str {
        match self {
            Document::Null => "null",
            Document::Boolean(_) => "boolean",
            Document::Number(n) if n.is_f64() => "float",
            Document::Number(_) => "integer",
            Document::String(_) => "string",
            Document::Array(_) => "array",
            Document::Object(_) => "object",
        }
    }
}

impl From<serde_json::Value> for Document {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Document::Null,
            Json::Bool(b) => Document::Boolean(b),
            Json::Number(n) => Document::Number(n),
            Json::String(s) => Document::String(s),
            Json::Array(items) => Document::Array(items.into_iter().map(Into::into).collect()),
            Json::Object(fields) => {
                Document::Object(fields.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<Document> for serde_json::Value {
    fn from(doc: Document) -> Self {
        use serde_json::Value as Json;

        match doc {
            Document::Null => Json::Null,
            Document::Boolean(b) => Json::Bool(b),
            Document::Number(n) => Json::Number(n),
            Document::String(s) => Json::String(s),
            Document::Array(items) => Json::Array(items.into_iter().map(Into::into).collect()),
            Document::Object(fields) => {
                Json::Object(fields.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}
