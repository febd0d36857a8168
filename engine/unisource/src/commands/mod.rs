//! Command handlers for the unisource CLI.
//!
//! Each submodule implements one command. The shared error type lives here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use unisource_engine::FindingCode;

mod check;
mod explain;

pub use check::{
    collect_files, lint_files, parse_check_options, run_check, CheckOptions, FileOutcome,
    FileReport, OutputFormat,
};
pub use explain::explain_code;

/// Everything that can stop a command before it reports findings.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("unknown output format '{0}' (expected terminal, json or sarif)")]
    UnknownFormat(String),

    #[error("unknown color mode '{0}' (expected auto, always or never)")]
    UnknownColor(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("no paths to check")]
    NoPaths,

    #[error("unknown finding code '{0}' (codes look like U1001)")]
    UnknownCode(String),

    #[error("no documentation available for {0}")]
    Undocumented(FindingCode),
}

