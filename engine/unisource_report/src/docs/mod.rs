//! Embedded finding documentation for `--explain` support.
//!
//! Each finding code has a markdown file in this directory describing the
//! attack, showing an example and explaining how to fix it. The files are
//! embedded at compile time.
//!
//! # Adding New Documentation
//!
//! 1. Create a new file `UXXXX.md` in this directory
//! 2. Add an entry to the `DOCS` array below

use unisource_engine::FindingCode;

/// Registry of embedded finding documentation.
pub struct CodeDocs;

impl CodeDocs {
    /// Get the documentation for a finding code.
    ///
    /// Returns `Some(markdown)` if documentation exists for the code,
    /// `None` otherwise.
    pub fn get(code: FindingCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented finding codes.
    pub fn all_codes() -> impl Iterator<Item = FindingCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    /// Check if a finding code has documentation.
    pub fn has_docs(code: FindingCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(FindingCode, &str)] = &[
    // Bidirectional controls (U1xxx)
    (FindingCode::U1001, include_str!("U1001.md")),
    (FindingCode::U1002, include_str!("U1002.md")),
    (FindingCode::U1003, include_str!("U1003.md")),
    // Invisible characters (U2xxx)
    (FindingCode::U2001, include_str!("U2001.md")),
    // Homoglyphs (U3xxx)
    (FindingCode::U3001, include_str!("U3001.md")),
];
