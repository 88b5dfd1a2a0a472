use std::fmt;

use crate::error::KeyError;

/// Separator between a parent and a child segment.
pub const SEPARATOR: char = ':';

/// Suffix marking the parent segment as an array to broadcast over.
pub const ARRAY_MARKER: &str = "[]";

/// A parsed key selecting one or more string leaves in a document.
///
/// Keys never reach deeper than one level below the root. That limit is part
/// of the key language, so there is no recursive path type here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySpec {
    /// A top-level field.
    ///
    /// # Examples
    /// - `ssn` → `Simple("ssn")`
    Simple(String),

    /// A field of a top-level object.
    ///
    /// # Examples
    /// - `card:number` → `NestedField { parent: "card", child: "number" }`
    NestedField { parent: String, child: String },

    /// The same field in every element of an array.
    ///
    /// An empty `array_key` means the document root is the array.
    ///
    /// # Examples
    /// - `cards[]:number` → `ArrayBroadcast { array_key: "cards", child: "number" }`
    /// - `[]:number` → `ArrayBroadcast { array_key: "", child: "number" }`
    ArrayBroadcast { array_key: String, child: String },
}

impl fmt::Display for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySpec::Simple(name) => write!(f, "{}", name),
            KeySpec::NestedField { parent, child } => {
                write!(f, "{}{}{}", parent, SEPARATOR, child)
            }
            KeySpec::ArrayBroadcast { array_key, child } => {
                write!(f, "{}{}{}{}", array_key, ARRAY_MARKER, SEPARATOR, child)
            }
        }
    }
}

/// Classify a key string.
///
/// # Examples
/// ```
/// use shroud::key::{parse_key, KeySpec};
///
/// assert_eq!(parse_key("ssn").unwrap(), KeySpec::Simple("ssn".into()));
/// assert_eq!(
///     parse_key("card:number").unwrap(),
///     KeySpec::NestedField { parent: "card".into(), child: "number".into() },
/// );
/// assert_eq!(
///     parse_key("[]:number").unwrap(),
///     KeySpec::ArrayBroadcast { array_key: "".into(), child: "number".into() },
/// );
/// assert!(parse_key("a:b:c").is_err());
/// ```
pub fn parse_key(key: &str) -> Result<KeySpec, KeyError> {
    let segments: Vec<&str> = key.split(SEPARATOR).collect();

    match segments.as_slice() {
        [name] => Ok(KeySpec::Simple((*name).to_string())),
        [parent, child] if parent.ends_with(ARRAY_MARKER) => Ok(KeySpec::ArrayBroadcast {
            array_key: array_key(parent).to_string(),
            child: (*child).to_string(),
        }),
        [parent, child] => Ok(KeySpec::NestedField {
            parent: (*parent).to_string(),
            child: (*child).to_string(),
        }),
        _ => Err(KeyError::UnsupportedNesting {
            key: key.to_string(),
            separators: segments.len() - 1,
        }),
    }
}

/// Drop the marker along with any stray brackets around it: every trailing
/// `]`, then every trailing `[` (`a[[]` names the array `a`).
fn array_key(parent: &str) -> &str {
    parent.trim_end_matches(']').trim_end_matches('[')
}

/// Classify every key in a list, stopping at the first unsupported one.
pub fn parse_keys<K: AsRef<str>>(keys: &[K]) -> Result<Vec<KeySpec>, KeyError> {
    keys.iter().map(|k| parse_key(k.as_ref())).collect()
}
