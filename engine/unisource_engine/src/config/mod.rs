//! Lint configuration.
//!
//! [`LintConfig`] is what the aggregator consumes. [`LintSettings`] is its
//! wire form: the camelCase JSON object collaborators receive from editors
//! and command lines, where every field is optional.

use bitflags::bitflags;
use serde::Deserialize;

bitflags! {
    /// Which scanners the aggregator runs.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Checks: u8 {
        const BIDI = 1;
        const INVISIBLE = 1 << 1;
        const HOMOGLYPH = 1 << 2;
    }
}

/// Options for a lint pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LintConfig {
    pub checks: Checks,
    /// Report bidi controls that are properly paired (info severity).
    pub report_balanced_bidi: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        LintConfig {
            checks: Checks::all(),
            report_balanced_bidi: true,
        }
    }
}

impl LintConfig {
    #[must_use]
    pub fn with_checks(mut self, checks: Checks) -> Self {
        self.checks = checks;
        self
    }

    #[must_use]
    pub fn with_balanced_bidi(mut self, report: bool) -> Self {
        self.report_balanced_bidi = report;
        self
    }
}

/// User-facing lint settings, as received from an editor or config file.
///
/// Absent fields keep their default (enabled).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LintSettings {
    pub bidi: Option<bool>,
    pub invisible: Option<bool>,
    pub homoglyph: Option<bool>,
    pub report_balanced_bidi: Option<bool>,
}

impl LintSettings {
    /// Resolve the settings against the defaults.
    pub fn to_config(&self) -> LintConfig {
        let mut checks = Checks::empty();
        checks.set(Checks::BIDI, self.bidi.unwrap_or(true));
        checks.set(Checks::INVISIBLE, self.invisible.unwrap_or(true));
        checks.set(Checks::HOMOGLYPH, self.homoglyph.unwrap_or(true));
        LintConfig {
            checks,
            report_balanced_bidi: self.report_balanced_bidi.unwrap_or(true),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
