//! Documentation content for shroud CLI

use super::CliError;

/// Available documentation topics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTopic {
    Keys,
    Strategies,
    Errors,
}

impl DocTopic {
    /// Parse topic name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "keys" | "key" | "syntax" => Some(Self::Keys),
            "strategies" | "strategy" | "transforms" => Some(Self::Strategies),
            "errors" | "error" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (topic listing)
pub fn get_docs_overview() -> &'static str {
    r#"SHROUD DOCUMENTATION

Shroud rewrites selected string fields of a JSON document through a transform
(masking, hashing, encoding). Fields are selected with keys; keys that do not
exist in a given document are ignored.

DOCUMENTATION TOPICS

  keys              Key syntax: plain fields, nested fields, array broadcast
  strategies        Built-in transforms and their options
  errors            What fails a run and what is silently skipped

QUICK REFERENCE

  name              Top-level field
  parent:child      Field of a top-level object
  items[]:child     Field of every element of the array at 'items'
  []:child          Field of every element of the root array

Run 'shroud doc <topic>' for detailed documentation.
"#
}

/// Get documentation for a specific topic
pub fn get_doc_topic(name: &str) -> Result<&'static str, CliError> {
    match DocTopic::from_name(name) {
        Some(DocTopic::Keys) => Ok(KEYS_DOC),
        Some(DocTopic::Strategies) => Ok(STRATEGIES_DOC),
        Some(DocTopic::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownTopic(name.to_string())),
    }
}

const KEYS_DOC: &str = r#"KEYS - Selecting Fields

PLAIN FIELD
  name
    A field of the root object. Only string values are rewritten; numbers,
    booleans, null, objects and arrays are left as they are.

    Example:
      Input:  {"ssn": "123-45-6789", "age": 41}
      Keys:   ssn age
      Output: {"ssn": "***********", "age": 41}

NESTED FIELD
  parent:child
    A field of the object stored at 'parent'.

    Example:
      Input:  {"card": {"number": "4111111111111111"}}
      Key:    card:number

ARRAY BROADCAST
  items[]:child
    The same field in every element of the array stored at 'items'.
    Elements without the field, or where it is not a string, are skipped
    one by one. The array keeps its length and order.

  []:child
    The same, when the document itself is an array.

    Example:
      Input:  [{"email": "a@x.io"}, {"phone": "555"}]
      Key:    []:email
      Output: [{"email": "******"}, {"phone": "555"}]

LIMITS
  Keys reach at most one level below the root. 'a:b:c' is rejected and
  fails the whole run. A nested key whose parent is an array (instead of
  an object) is skipped rather than broadcast; use 'parent[]:child'.
"#;

const STRATEGIES_DOC: &str = r#"STRATEGIES - Built-in Transforms

  mask       Replace characters with '*'. --keep N leaves the last N visible.
  redact     Replace the value with fixed text (--with, default [REDACTED]).
  upper      Uppercase the value.
  lower      Lowercase the value.
  sha256     Lowercase hex SHA-256 digest of the value (alias: hash).
  base64     Encode the value as standard base64.
  unbase64   Decode standard base64. Fails the run on invalid input.
  replace    Regex substitution: --pattern REGEX --with TEXT.
             TEXT may reference captures as $1, ${name}.

    Example:
      shroud process --key card:number --strategy mask --keep 4 \
          --input '{"card": {"number": "4111111111111111"}}'
      => {"card":{"number":"************1111"}}
"#;

const ERRORS_DOC: &str = r#"ERRORS - Failures and Skips

SKIPPED (not an error)
  - the field, parent or array does not exist in this document
  - the value is not a string (number, boolean, null, object, array)
  - the parent of a nested key is not an object
  - the target of an array broadcast is not an array
  Run with --verbose to see which keys were skipped and why.

BAD REQUEST (exit code 2)
  - a key nested more than one level, such as 'a:b:c'
  - an unknown strategy or invalid --pattern
  Keys before the offending key have already been applied; later keys are
  never attempted.

PROCESSING FAILURE (exit code 1)
  - the transform failed on a value (for example unbase64 on text that is
    not base64). Remaining keys are not attempted.
"#;
