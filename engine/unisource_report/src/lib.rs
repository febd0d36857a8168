//! Reporting for unisource findings.
//!
//! - [`emitter`]: render findings for terminals, tools and CI systems
//! - [`docs`]: embedded `--explain` documentation for every finding code

pub mod docs;
pub mod emitter;

pub use docs::CodeDocs;
pub use emitter::{ColorMode, FindingEmitter, JsonEmitter, SarifEmitter, TerminalEmitter};
