//! Terminal Emitter
//!
//! Human-readable finding output with optional ANSI color support.
//!
//! ```text
//! src/auth.rs:1:34: error[U1001]: unterminated bidirectional control RLO ...
//!   |
//! 1 | if (level == 1) { // check<U+202E>admin
//!   |                           ^^^^^^^^
//! ```
//!
//! Hidden codepoints are printed as `<U+XXXX>` so the snippet shows what the
//! compiler sees rather than what an editor draws.

use std::fmt::Write as _;
use std::io::Write;

use unisource_engine::classify::{classify, Category, CodepointDisplay};
use unisource_engine::{Document, Finding, Line, Severity, SeverityCounts};

use super::{plural_s, FindingEmitter};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const INFO: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Info => colors::INFO,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn write_header(&mut self, document: &Document, finding: &Finding) {
        // Header: path:line:col: severity[CODE]: message
        let location = format!(
            "{}:{}:{}:",
            document.uri(),
            u64::from(finding.line) + 1,
            u64::from(finding.start) + 1
        );
        self.write_colored(&location, colors::BOLD);
        let _ = write!(self.writer, " ");
        self.write_severity(finding.severity);
        self.write_code(finding.code.as_str());
        let _ = writeln!(self.writer, ": {}", finding.message);
    }

    fn write_snippet(&mut self, rendered: &RenderedLine, finding: &Finding) {
        let number = (u64::from(rendered.index) + 1).to_string();
        let pad = " ".repeat(number.len());
        let (caret_offset, caret_width) = rendered.caret(finding.start);

        let gutter = format!("{pad} |");
        self.write_colored(&gutter, colors::GUTTER);
        let _ = writeln!(self.writer);

        let numbered = format!("{number} |");
        self.write_colored(&numbered, colors::GUTTER);
        let _ = writeln!(self.writer, " {}", rendered.text);

        self.write_colored(&gutter, colors::GUTTER);
        let _ = write!(self.writer, " {}", " ".repeat(caret_offset));
        let carets = "^".repeat(caret_width);
        match finding.severity {
            Severity::Error => self.write_colored(&carets, colors::ERROR),
            Severity::Warning => self.write_colored(&carets, colors::WARNING),
            Severity::Info => self.write_colored(&carets, colors::INFO),
        }
        let _ = writeln!(self.writer);
    }

    fn write_finding(
        &mut self,
        document: &Document,
        rendered: Option<&RenderedLine>,
        finding: &Finding,
    ) {
        self.write_header(document, finding);
        if let Some(rendered) = rendered {
            self.write_snippet(rendered, finding);
        }
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> FindingEmitter for TerminalEmitter<W> {
    fn emit(&mut self, document: &Document, finding: &Finding) {
        let rendered = document.line(finding.line).map(|line| RenderedLine::new(&line));
        self.write_finding(document, rendered.as_ref(), finding);
    }

    /// Split the document once and render each flagged line once, however
    /// many findings it carries.
    fn emit_all(&mut self, document: &Document, findings: &[Finding]) {
        let lines: Vec<Line<'_>> = document.lines().collect();
        let mut current: Option<RenderedLine> = None;

        for finding in findings {
            if current.as_ref().map(|rendered| rendered.index) != Some(finding.line) {
                current = usize::try_from(finding.line)
                    .ok()
                    .and_then(|index| lines.get(index))
                    .map(RenderedLine::new);
            }
            self.write_finding(document, current.as_ref(), finding);
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, counts: SeverityCounts) {
        let (label, color) = if counts.errors > 0 {
            ("error", colors::ERROR)
        } else if counts.warnings > 0 {
            ("warning", colors::WARNING)
        } else if counts.infos > 0 {
            ("info", colors::INFO)
        } else {
            return;
        };

        let parts: Vec<String> = [
            (counts.errors, "error"),
            (counts.warnings, "warning"),
            (counts.infos, "note"),
        ]
        .into_iter()
        .filter(|&(count, _)| count > 0)
        .map(|(count, noun)| format!("{count} {noun}{}", plural_s(count)))
        .collect();

        self.write_colored(label, color);
        let _ = writeln!(self.writer, ": {} found", join_counts(&parts));
    }
}

/// `a`, `a and b`, `a, b and c`.
fn join_counts(parts: &[String]) -> String {
    match parts.split_last() {
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
        None => String::new(),
    }
}

/// A line prepared for display.
struct RenderedLine {
    index: u32,
    text: String,
    /// Display offset of each codepoint, plus the total width at the end.
    offsets: Vec<usize>,
}

impl RenderedLine {
    fn new(line: &Line<'_>) -> Self {
        let mut text = String::with_capacity(line.text().len());
        let mut offsets = Vec::with_capacity(line.text().len() + 1);
        let mut width = 0usize;

        for (_, ch) in line.codepoints() {
            offsets.push(width);
            let hidden = matches!(classify(ch), Category::Bidi(_) | Category::Invisible(_));
            if ch == '\t' {
                text.push(' ');
                width += 1;
            } else if hidden || ch.is_control() {
                let len = text.len();
                let _ = write!(text, "<{}>", CodepointDisplay(ch));
                // Escapes are ASCII: bytes == columns.
                width += text.len() - len;
            } else {
                text.push(ch);
                width += 1;
            }
        }
        offsets.push(width);

        RenderedLine {
            index: line.index(),
            text,
            offsets,
        }
    }

    /// Caret offset and width for the codepoint at `column`.
    ///
    /// A column past the end of the line points at the line start.
    fn caret(&self, column: u32) -> (usize, usize) {
        let Ok(column) = usize::try_from(column) else {
            return (0, 1);
        };
        match (self.offsets.get(column), self.offsets.get(column + 1)) {
            (Some(&start), Some(&end)) => (start, end - start),
            _ => (0, 1),
        }
    }
}
