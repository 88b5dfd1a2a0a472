//! Built-in string transforms.
//!
//! A configured [`Strategy`] becomes a transform for [`process`](crate::process)
//! as `|v: &str| strategy.apply(v)`. Embedders are free to pass their own
//! closures instead (encryption, tokenisation, ...).

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use regex::Regex;
use sha2::{Digest, Sha256};
use thiserror::Error;

pub const DEFAULT_MASK_CHAR: char = '*';
pub const DEFAULT_REDACTION: &str = "[REDACTED]";

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),
    #[error("decoded value is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("unknown strategy '{0}', expected one of: {names}", names = Strategy::NAMES.join(", "))]
    Unknown(String),
}

/// A named, configured transform.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Replace every character with `*`, leaving the last `keep` visible.
    Mask { keep: usize },
    /// Replace the whole value with fixed text.
    Redact { with: String },
    Upper,
    Lower,
    /// Lowercase hex SHA-256 digest of the value.
    Sha256,
    Base64,
    /// Decode standard base64 back into a UTF-8 string.
    Unbase64,
    /// Regex substitution over the value (`$1`-style capture references).
    Replace { pattern: Regex, with: String },
}

impl Strategy {
    /// All strategy names understood by [`Strategy::from_name`].
    pub const NAMES: &'static [&'static str] = &[
        "mask", "redact", "upper", "lower", "sha256", "base64", "unbase64", "replace",
    ];

    /// Build a strategy from its name.
    ///
    /// `keep` only applies to `mask`. `with` is the redaction text for
    /// `redact` and the replacement for `replace`, which also requires
    /// `pattern`.
    pub fn from_name(
        name: &str,
        keep: usize,
        with: Option<&str>,
        pattern: Option<&str>,
    ) -> Result<Self, StrategyError> {
        match name.to_lowercase().as_str() {
            "mask" => Ok(Strategy::Mask { keep }),
            "redact" => Ok(Strategy::Redact {
                with: with.unwrap_or(DEFAULT_REDACTION).to_string(),
            }),
            "upper" => Ok(Strategy::Upper),
            "lower" => Ok(Strategy::Lower),
            "sha256" | "hash" => Ok(Strategy::Sha256),
            "base64" => Ok(Strategy::Base64),
            "unbase64" => Ok(Strategy::Unbase64),
            "replace" => Ok(Strategy::Replace {
                pattern: Regex::new(pattern.unwrap_or(".+"))?,
                with: with.unwrap_or(DEFAULT_REDACTION).to_string(),
            }),
            other => Err(StrategyError::Unknown(other.to_string())),
        }
    }

    pub fn apply(&self, value: &str) -> Result<String, StrategyError> {
        match self {
            Strategy::Mask { keep } => Ok(mask(value, *keep)),
            Strategy::Redact { with } => Ok(with.clone()),
            Strategy::Upper => Ok(value.to_uppercase()),
            Strategy::Lower => Ok(value.to_lowercase()),
            Strategy::Sha256 => Ok(sha256_hex(value)),
            Strategy::Base64 => Ok(BASE64_STANDARD.encode(value)),
            Strategy::Unbase64 => unbase64(value),
            Strategy::Replace { pattern, with } => {
                Ok(pattern.replace_all(value, with.as_str()).into_owned())
            }
        }
    }
}

/// Mask all but the last `keep` characters.
pub fn mask(value: &str, keep: usize) -> String {
    let total = value.chars().count();
    let hidden = total.saturating_sub(keep);
    value
        .chars()
        .enumerate()
        .map(|(i, c)| if i < hidden { DEFAULT_MASK_CHAR } else { c })
        .collect()
}

pub fn sha256_hex(value: &str) -> String {
    hex::encode(Sha256::digest(value.as_bytes()))
}

pub fn unbase64(value: &str) -> Result<String, StrategyError> {
    let bytes = BASE64_STANDARD.decode(value.trim())?;
    Ok(String::from_utf8(bytes)?)
}
