//! Finding Emitters
//!
//! Provides different output formats for findings:
//! - Terminal: Colored, human-readable output with a source snippet
//! - JSON: Machine-readable output for tooling
//! - SARIF: Static Analysis Results Interchange Format for CI/CD integration
//!
//! Each emitter implements the `FindingEmitter` trait.

mod json;
mod sarif;
mod terminal;

pub use json::JsonEmitter;
pub use sarif::SarifEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use unisource_engine::{Document, Finding, SeverityCounts};

/// Trait for emitting findings in various formats.
pub trait FindingEmitter {
    /// Emit a single finding found in `document`.
    fn emit(&mut self, document: &Document, finding: &Finding);

    /// Emit every finding of one document.
    fn emit_all(&mut self, document: &Document, findings: &[Finding]) {
        for finding in findings {
            self.emit(document, finding);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of finding counts by severity.
    fn emit_summary(&mut self, counts: SeverityCounts);
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
pub(crate) fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
