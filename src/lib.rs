pub mod cli;
pub mod document;
pub mod error;
pub mod key;
pub mod output;
pub mod processor;
pub mod strategy;

pub use document::Document;
pub use error::{KeyError, ProcessError, ProcessResult, TransformError};
pub use key::{parse_key, parse_keys, KeySpec};
pub use output::{to_json, to_json_pretty};
pub use processor::{apply, process, process_with_report, KeyReport, Outcome, Skip};
pub use strategy::{Strategy, StrategyError};
