//! Classify keys without touching a document

use crate::key::{parse_keys, KeySpec};

use super::CliError;

/// Parse every key, failing on the first one nested too deeply.
pub fn execute_check<K: AsRef<str>>(keys: &[K]) -> Result<Vec<KeySpec>, CliError> {
    Ok(parse_keys(keys)?)
}

/// One-line, human-readable description of what a key selects.
pub fn describe_key(spec: &KeySpec) -> String {
    match spec {
        KeySpec::Simple(name) => format!("field '{}' of the root object", name),
        KeySpec::NestedField { parent, child } => {
            format!("field '{}' of the object at '{}'", child, parent)
        }
        KeySpec::ArrayBroadcast { array_key, child } if array_key.is_empty() => {
            format!("field '{}' of every element of the root array", child)
        }
        KeySpec::ArrayBroadcast { array_key, child } => {
            format!("field '{}' of every element of the array at '{}'", child, array_key)
        }
    }
}
