//! Findings to LSP diagnostics.
//!
//! The engine reports codepoint columns. LSP positions are counted in the
//! encoding negotiated at `initialize`: UTF-16 code units unless the client
//! offers UTF-32.

use tower_lsp::lsp_types::{
    ClientCapabilities, Diagnostic, DiagnosticSeverity, NumberOrString, Position,
    PositionEncodingKind, Range,
};
use unisource_engine::{Document, Finding, Line, Severity};

/// Value of `Diagnostic::source` for everything this server publishes.
pub const SOURCE: &str = "unisource";

/// Unit of LSP `Position::character`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PositionEncoding {
    /// UTF-16 code units; the protocol default.
    #[default]
    Utf16,
    /// Unicode codepoints, the engine's own unit.
    Utf32,
}

impl PositionEncoding {
    /// Pick UTF-32 when the client offers it.
    pub fn negotiate(capabilities: &ClientCapabilities) -> Self {
        let offered = capabilities
            .general
            .as_ref()
            .and_then(|general| general.position_encodings.as_ref());
        match offered {
            Some(kinds) if kinds.contains(&PositionEncodingKind::UTF32) => PositionEncoding::Utf32,
            _ => PositionEncoding::Utf16,
        }
    }

    pub fn kind(self) -> PositionEncodingKind {
        match self {
            PositionEncoding::Utf16 => PositionEncodingKind::UTF16,
            PositionEncoding::Utf32 => PositionEncodingKind::UTF32,
        }
    }
}

fn severity(severity: Severity) -> DiagnosticSeverity {
    match severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
        Severity::Info => DiagnosticSeverity::INFORMATION,
    }
}

/// Forward-only codepoint to code-unit converter over one line.
///
/// Findings arrive sorted by column, so each line is walked once no matter
/// how many findings it carries. Seeking backwards restarts from column 0.
struct ColumnCursor<'a> {
    text: &'a str,
    encoding: PositionEncoding,
    chars: std::str::Chars<'a>,
    column: u32,
    units: u32,
}

impl<'a> ColumnCursor<'a> {
    fn new(text: &'a str, encoding: PositionEncoding) -> Self {
        ColumnCursor {
            text,
            encoding,
            chars: text.chars(),
            column: 0,
            units: 0,
        }
    }

    /// Code units before codepoint `target`, clamped to the line end.
    fn seek(&mut self, target: u32) -> u32 {
        if self.encoding == PositionEncoding::Utf32 {
            return target;
        }
        if target < self.column {
            self.chars = self.text.chars();
            self.column = 0;
            self.units = 0;
        }
        while self.column < target {
            let Some(ch) = self.chars.next() else {
                break;
            };
            self.column += 1;
            let width = u32::try_from(ch.len_utf16()).unwrap_or(2);
            self.units = self.units.saturating_add(width);
        }
        self.units
    }
}

/// Convert one document's findings to diagnostics.
pub fn to_diagnostics(
    document: &Document,
    findings: &[Finding],
    encoding: PositionEncoding,
) -> Vec<Diagnostic> {
    let lines: Vec<Line<'_>> = document.lines().collect();
    let mut cursor: Option<(u32, ColumnCursor<'_>)> = None;

    findings
        .iter()
        .map(|finding| {
            if cursor.as_ref().map(|(line, _)| *line) != Some(finding.line) {
                let text = usize::try_from(finding.line)
                    .ok()
                    .and_then(|index| lines.get(index))
                    .map_or("", Line::text);
                cursor = Some((finding.line, ColumnCursor::new(text, encoding)));
            }
            let (start, end) = match cursor.as_mut() {
                Some((_, cursor)) => (cursor.seek(finding.start), cursor.seek(finding.end)),
                None => (0, 0),
            };

            Diagnostic {
                range: Range::new(
                    Position::new(finding.line, start),
                    Position::new(finding.line, end),
                ),
                severity: Some(severity(finding.severity)),
                code: Some(NumberOrString::String(finding.code.to_string())),
                source: Some(SOURCE.to_string()),
                message: finding.message.clone(),
                ..Default::default()
            }
        })
        .collect()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
