//! JSON Emitter
//!
//! Machine-readable finding output: one JSON array of flat objects.

use std::io::Write;

use serde::Serialize;
use unisource_engine::{Document, Finding, SeverityCounts};

use super::FindingEmitter;

/// One element of the output array.
#[derive(Serialize)]
struct Record<'a> {
    path: &'a str,
    #[serde(flatten)]
    finding: &'a Finding,
}

/// JSON emitter for machine-readable output.
///
/// Call [`begin`](JsonEmitter::begin) before the first finding and
/// [`end`](JsonEmitter::end) after the last.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
}

impl<W: Write> JsonEmitter<W> {
    /// Create a new JSON emitter.
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
        }
    }

    /// Begin the JSON array output.
    pub fn begin(&mut self) {
        let _ = write!(self.writer, "[");
    }

    /// End the JSON array output.
    pub fn end(&mut self) {
        if self.first {
            let _ = writeln!(self.writer, "]");
        } else {
            let _ = writeln!(self.writer, "\n]");
        }
    }
}

impl<W: Write> FindingEmitter for JsonEmitter<W> {
    fn emit(&mut self, document: &Document, finding: &Finding) {
        if self.first {
            let _ = write!(self.writer, "\n  ");
        } else {
            let _ = write!(self.writer, ",\n  ");
        }
        self.first = false;

        let record = Record {
            path: document.uri(),
            finding,
        };
        let _ = serde_json::to_writer(&mut self.writer, &record);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _counts: SeverityCounts) {
        // The array already carries every severity.
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
