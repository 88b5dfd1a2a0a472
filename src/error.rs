//! Error types for key parsing and document processing.
//!
//! Two tiers escape to callers:
//!
//! - [`KeyError`]: a key is structurally unsupported (more than one level of
//!   nesting). This is the caller's mistake and maps to a "bad request".
//! - [`ProcessError::Processing`]: the transform failed while rewriting a
//!   resolved leaf. Keys after the failing one are not attempted, and
//!   rewrites already applied are kept.
//!
//! Paths that do not exist in a particular document are not errors at all.
//! They surface as [`Skip`](crate::processor::Skip) reasons.

use thiserror::Error;

/// Boxed error produced by a transform callback.
pub type TransformError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type ProcessResult<T> = Result<T, ProcessError>;

const PROCESSING_GUIDANCE: &str = "If the parameters are valid but point to a non-existent member, \
those parameters are ignored. If you are receiving this error, most likely the data was not in \
the expected format or the provided parameters are invalid";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error(
        "key '{key}' has {separators} ':' separators; only one level of nesting is supported \
         (e.g. 'parent:parent2:child' is two levels and not supported)"
    )]
    UnsupportedNesting { key: String, separators: usize },
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    UnsupportedNesting(#[from] KeyError),

    #[error("there was an issue processing key '{key}': {source}. {}", PROCESSING_GUIDANCE)]
    Processing {
        key: String,
        #[source]
        source: TransformError,
    },
}

impl ProcessError {
    /// Whether the failure was caused by the caller's key list rather than
    /// by the data or the transform.
    pub fn is_bad_request(&self) -> bool {
        matches!(self, ProcessError::UnsupportedNesting(_))
    }
}
