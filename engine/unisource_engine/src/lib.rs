//! Trojan Source detection engine.
//!
//! Finds source-code manipulations that make code *look* different from how
//! it executes:
//! - Bidirectional controls that reorder tokens on screen
//! - Invisible characters that hide or merge tokens
//! - Homoglyphs that imitate trusted ASCII identifiers
//!
//! The engine is pure and synchronous. It reads only static tables, keeps no
//! state between calls, and never fails: collaborators hand it a
//! [`Document`] and publish whatever [`Finding`]s come back.
//!
//! ```text
//! document text -> lint -> per-line scanners -> classify -> findings
//! ```

pub mod classify;
mod config;
mod document;
mod finding;
mod lint;
pub mod scan;

pub use classify::{classify, Category};
pub use config::{Checks, LintConfig, LintSettings};
pub use document::{Document, Line, Lines};
pub use finding::{AttackCategory, Finding, FindingCode, Severity, SeverityCounts};
pub use lint::{lint, lint_line, lint_lines, lint_with};
pub use scan::{scan_bidi, scan_homoglyph, scan_invisible, Scanner};
