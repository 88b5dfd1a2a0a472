//! Resolve keys against a document and rewrite the string leaves they select.
//!
//! Navigation goes through the total lookups on [`Document`], so a key that
//! does not fit a particular document (missing field, wrong shape, null)
//! resolves to a [`Skip`] instead of an error. Only two things stop a run:
//! a key nested deeper than one level, and a failing transform.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::document::Document;
use crate::error::{ProcessError, ProcessResult, TransformError};
use crate::key::{parse_key, KeySpec};

/// Why a key (or one array element) was left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    /// A segment of the path does not exist in this document.
    Absent { path: String },

    /// A segment exists but has the wrong shape for this key.
    WrongShape {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::Absent { path } => write!(f, "'{}' is not present", path),
            Skip::WrongShape { path, expected, found } => {
                write!(f, "'{}' is {}, expected {}", path, found, expected)
            }
        }
    }
}

/// Result of applying one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The key resolved; this many string leaves were rewritten.
    ///
    /// An array broadcast over elements that all lack the child field
    /// resolves with a count of zero.
    Applied(usize),

    /// The key did not resolve in this document.
    Skipped(Skip),
}

/// Outcome of one key in a [`process_with_report`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyReport {
    pub key: KeySpec,
    pub outcome: Outcome,
}

enum Leaf {
    Rewritten,
    Absent,
    NotString(&'static str),
}

fn rewrite<F, E>(slot: Option<&mut Document>, transform: &mut F) -> Result<Leaf, TransformError>
where
    F: FnMut(&str) -> Result<String, E>,
    E: Into<TransformError>,
{
    match slot {
        None => Ok(Leaf::Absent),
        Some(Document::String(current)) => {
            let replaced = transform(current.as_str()).map_err(Into::into)?;
            *current = replaced;
            Ok(Leaf::Rewritten)
        }
        Some(other) => Ok(Leaf::NotString(other.type_name())),
    }
}

fn leaf_outcome(path: String, leaf: Leaf) -> Outcome {
    match leaf {
        Leaf::Rewritten => Outcome::Applied(1),
        Leaf::Absent => Outcome::Skipped(Skip::Absent { path }),
        Leaf::NotString(found) => Outcome::Skipped(Skip::WrongShape {
            path,
            expected: "string",
            found,
        }),
    }
}

/// Apply one parsed key to `document`.
///
/// Only string leaves are rewritten. Containers are never replaced and arrays
/// keep their length. An `Err` here always comes from the transform.
pub fn apply<F, E>(
    document: &mut Document,
    spec: &KeySpec,
    transform: &mut F,
) -> Result<Outcome, TransformError>
where
    F: FnMut(&str) -> Result<String, E>,
    E: Into<TransformError>,
{
    match spec {
        KeySpec::Simple(name) => {
            let leaf = rewrite(document.get_field_mut(name), transform)?;
            Ok(leaf_outcome(name.clone(), leaf))
        }

        KeySpec::NestedField { parent, child } => {
            let Some(container) = document.get_field_mut(parent) else {
                return Ok(Outcome::Skipped(Skip::Absent { path: parent.clone() }));
            };
            // An array parent is a shape mismatch, not an implicit broadcast.
            let leaf = rewrite(container.get_field_mut(child), transform)?;
            Ok(leaf_outcome(spec.to_string(), leaf))
        }

        KeySpec::ArrayBroadcast { array_key, child } => {
            let target = if array_key.is_empty() {
                Some(document)
            } else {
                document.get_field_mut(array_key)
            };
            let Some(target) = target else {
                return Ok(Outcome::Skipped(Skip::Absent { path: array_key.clone() }));
            };

            let found = target.type_name();
            let Some(items) = target.as_array_mut() else {
                return Ok(Outcome::Skipped(Skip::WrongShape {
                    path: if array_key.is_empty() { "$".to_string() } else { array_key.clone() },
                    expected: "array",
                    found,
                }));
            };

            let mut rewritten = 0;
            for (index, item) in items.iter_mut().enumerate() {
                match rewrite(item.get_field_mut(child), transform)? {
                    Leaf::Rewritten => rewritten += 1,
                    Leaf::Absent => {
                        debug!(key = %spec, index, "array element has no such field, skipping element")
                    }
                    Leaf::NotString(found) => {
                        debug!(key = %spec, index, found, "array element field is not a string, skipping element")
                    }
                }
            }
            Ok(Outcome::Applied(rewritten))
        }
    }
}

/// Rewrite every string leaf selected by `keys`, returning the document.
///
/// Keys are handled in order and independently. A key that does not resolve
/// in this document is skipped. A key nested deeper than one level fails the
/// whole call when it is reached: keys before it stay applied and keys after
/// it are not attempted. A failing transform is reported the same way.
///
/// # Examples
///
/// ```
/// use shroud::{process, Document};
/// use serde_json::json;
///
/// let mut doc = Document::from(json!({"ssn": "123-45-6789", "age": 41}));
/// process(&["ssn", "age", "missing"], &mut doc, |s: &str| {
///     Ok::<_, std::convert::Infallible>("*".repeat(s.len()))
/// })
/// .unwrap();
///
/// assert_eq!(
///     serde_json::Value::from(doc),
///     json!({"ssn": "***********", "age": 41}),
/// );
/// ```
pub fn process<'d, K, F, E>(
    keys: &[K],
    document: &'d mut Document,
    transform: F,
) -> ProcessResult<&'d mut Document>
where
    K: AsRef<str>,
    F: FnMut(&str) -> Result<String, E>,
    E: Into<TransformError>,
{
    process_with_report(keys, &mut *document, transform)?;
    Ok(document)
}

/// Same as [`process`], but returns what happened to each key.
pub fn process_with_report<K, F, E>(
    keys: &[K],
    document: &mut Document,
    mut transform: F,
) -> ProcessResult<Vec<KeyReport>>
where
    K: AsRef<str>,
    F: FnMut(&str) -> Result<String, E>,
    E: Into<TransformError>,
{
    let mut reports = Vec::with_capacity(keys.len());

    for key in keys {
        let key = key.as_ref();
        let spec = parse_key(key).inspect_err(|e| warn!(key, error = %e, "rejecting key"))?;

        let outcome = apply(document, &spec, &mut transform).map_err(|source| {
            ProcessError::Processing {
                key: key.to_string(),
                source,
            }
        })?;

        match &outcome {
            Outcome::Applied(count) => trace!(key, count, "rewrote string leaves"),
            Outcome::Skipped(reason) => debug!(key, %reason, "key did not resolve, skipping"),
        }

        reports.push(KeyReport { key: spec, outcome });
    }

    Ok(reports)
}
