//! CLI support for shroud
//!
//! Provides programmatic access to the `shroud` commands so other tools can
//! embed them without spawning the binary.

mod check;
mod docs;
mod run;

pub use check::{describe_key, execute_check};
pub use docs::{get_doc_topic, get_docs_overview, DocTopic};
pub use run::{execute_process, read_keys_file, ProcessOptions, ProcessOutput};

use std::io;

use thiserror::Error;

use crate::error::{KeyError, ProcessError};
use crate::strategy::StrategyError;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid key: {0}")]
    Key(#[from] KeyError),
    #[error("Processing failed: {0}")]
    Process(#[from] ProcessError),
    #[error("Invalid strategy: {0}")]
    Strategy(#[from] StrategyError),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("No input provided. Use --input or pipe JSON to stdin.")]
    NoInput,
    #[error("Unknown topic: '{0}'\nRun 'shroud docs' to see available topics.")]
    UnknownTopic(String),
}

impl CliError {
    /// Process exit code: 2 for malformed requests, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Key(_) | CliError::Strategy(_) | CliError::UnknownTopic(_) => 2,
            CliError::Process(e) if e.is_bad_request() => 2,
            _ => 1,
        }
    }
}
