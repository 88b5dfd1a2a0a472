//! Run the processor over JSON input with a built-in strategy

use std::fs;
use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::processor::{process_with_report, KeyReport};
use crate::strategy::Strategy;

use super::CliError;

/// Options for the process command
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Keys given on the command line, applied first
    pub keys: Vec<String>,
    /// File with one key per line, applied after `keys`
    pub keys_file: Option<PathBuf>,
    /// JSON input string
    pub input: Option<String>,
    /// Strategy name (see `Strategy::NAMES`)
    pub strategy: String,
    /// Characters left visible by `mask`
    pub keep: usize,
    /// Redaction or replacement text
    pub with: Option<String>,
    /// Regex for `replace`
    pub pattern: Option<String>,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        ProcessOptions {
            keys: Vec::new(),
            keys_file: None,
            input: None,
            strategy: "mask".to_string(),
            keep: 0,
            with: None,
            pattern: None,
        }
    }
}

/// Rewritten document plus what happened to each key
#[derive(Debug)]
pub struct ProcessOutput {
    pub document: Document,
    pub reports: Vec<KeyReport>,
}

/// Read keys from a file: one per line, blank lines and `#` comments ignored.
pub fn read_keys_file(path: &Path) -> Result<Vec<String>, CliError> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Execute a process operation
pub fn execute_process(options: &ProcessOptions) -> Result<ProcessOutput, CliError> {
    let strategy = Strategy::from_name(
        &options.strategy,
        options.keep,
        options.with.as_deref(),
        options.pattern.as_deref(),
    )?;

    let mut keys = options.keys.clone();
    if let Some(path) = &options.keys_file {
        keys.extend(read_keys_file(path)?);
    }

    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let json_value: serde_json::Value = serde_json::from_str(json_str)?;
    let mut document = Document::from(json_value);

    let reports = process_with_report(&keys, &mut document, |value: &str| strategy.apply(value))?;

    Ok(ProcessOutput { document, reports })
}
