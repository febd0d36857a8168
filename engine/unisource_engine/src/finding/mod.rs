//! Findings produced by the scanners.
//!
//! A [`Finding`] pins one suspicious codepoint to a line and a codepoint
//! column range. Findings are immutable once created and carry everything a
//! collaborator needs to render them: category, stable code, severity and a
//! human-readable message.

use std::fmt;

use serde::{Serialize, Serializer};

/// How urgently a finding should be surfaced.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// The attack family a finding belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub enum AttackCategory {
    BidiOverride,
    InvisibleChar,
    Homoglyph,
}

impl fmt::Display for AttackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackCategory::BidiOverride => write!(f, "bidi-override"),
            AttackCategory::InvisibleChar => write!(f, "invisible-char"),
            AttackCategory::Homoglyph => write!(f, "homoglyph"),
        }
    }
}

/// Stable identifiers for every kind of finding.
///
/// Format: U#### where the first digit indicates the attack family:
/// - U1xxx: Bidirectional controls
/// - U2xxx: Invisible characters
/// - U3xxx: Homoglyphs
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FindingCode {
    /// Bidi push control never closed on its line
    U1001,
    /// Bidi pop control with nothing to close
    U1002,
    /// Balanced bidi control present
    U1003,
    /// Invisible character
    U2001,
    /// Homoglyph of an ASCII letter or digit
    U3001,
}

impl FindingCode {
    /// Every finding code, in numeric order.
    pub const ALL: &[FindingCode] = &[
        FindingCode::U1001,
        FindingCode::U1002,
        FindingCode::U1003,
        FindingCode::U2001,
        FindingCode::U3001,
    ];

    /// Get the code as a string (e.g., "U1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingCode::U1001 => "U1001",
            FindingCode::U1002 => "U1002",
            FindingCode::U1003 => "U1003",
            FindingCode::U2001 => "U2001",
            FindingCode::U3001 => "U3001",
        }
    }

    /// One-line summary, used for SARIF rule descriptions.
    pub fn summary(&self) -> &'static str {
        match self {
            FindingCode::U1001 => "unterminated bidirectional control",
            FindingCode::U1002 => "dangling bidirectional control",
            FindingCode::U1003 => "bidirectional control present",
            FindingCode::U2001 => "invisible character",
            FindingCode::U3001 => "homoglyph of an ASCII character",
        }
    }

    pub fn category(&self) -> AttackCategory {
        match self {
            FindingCode::U1001 | FindingCode::U1002 | FindingCode::U1003 => {
                AttackCategory::BidiOverride
            }
            FindingCode::U2001 => AttackCategory::InvisibleChar,
            FindingCode::U3001 => AttackCategory::Homoglyph,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            FindingCode::U1001 | FindingCode::U1002 => Severity::Error,
            FindingCode::U2001 | FindingCode::U3001 => Severity::Warning,
            FindingCode::U1003 => Severity::Info,
        }
    }
}

impl fmt::Display for FindingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a code string like `"U1001"`. Case-insensitive.
impl std::str::FromStr for FindingCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

impl Serialize for FindingCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One suspicious codepoint on one line.
///
/// Columns are codepoint offsets within the line, never byte offsets. The
/// range is half-open: `start..end`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct Finding {
    /// Zero-based line index.
    pub line: u32,
    /// Zero-based column of the first flagged codepoint.
    pub start: u32,
    /// Column one past the last flagged codepoint.
    pub end: u32,
    pub category: AttackCategory,
    pub code: FindingCode,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    /// Create a finding covering the single codepoint at `column`.
    ///
    /// Category and severity follow from `code`.
    pub fn at(line: u32, column: u32, code: FindingCode, message: impl Into<String>) -> Self {
        Finding {
            line,
            start: column,
            end: column.saturating_add(1),
            category: code.category(),
            code,
            severity: code.severity(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Counts of findings by severity.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct SeverityCounts {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

impl SeverityCounts {
    pub fn tally<'a>(findings: impl IntoIterator<Item = &'a Finding>) -> Self {
        let mut counts = SeverityCounts::default();
        for finding in findings {
            match finding.severity {
                Severity::Error => counts.errors += 1,
                Severity::Warning => counts.warnings += 1,
                Severity::Info => counts.infos += 1,
            }
        }
        counts
    }

    #[must_use]
    pub fn merge(self, other: SeverityCounts) -> Self {
        SeverityCounts {
            errors: self.errors + other.errors,
            warnings: self.warnings + other.warnings,
            infos: self.infos + other.infos,
        }
    }
}
