//! Diagnostic aggregation.
//!
//! Runs the enabled scanners over a document's lines and returns findings
//! ordered by line, then column, then scanner order. Aggregation never fails
//! and performs no deduplication.

use std::ops::Range;

use crate::config::LintConfig;
use crate::scan::Scanner;
use crate::{Document, Finding, FindingCode, Line};

/// Lint a whole document with the default configuration.
pub fn lint(document: &Document) -> Vec<Finding> {
    lint_with(document, &LintConfig::default())
}

/// Lint a whole document.
#[tracing::instrument(level = "debug", skip_all, fields(uri = document.uri()))]
pub fn lint_with(document: &Document, config: &LintConfig) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut lines = 0usize;
    for line in document.lines() {
        lint_line_into(&line, config, &mut findings);
        lines += 1;
    }
    tracing::debug!(lines, findings = findings.len(), "lint complete");
    findings
}

/// Lint only the lines whose index falls in `range`.
///
/// The range is clamped to the document; every line inside it is scanned.
pub fn lint_lines(document: &Document, range: Range<u32>, config: &LintConfig) -> Vec<Finding> {
    let mut findings = Vec::new();
    for line in document
        .lines()
        .skip_while(|line| line.index() < range.start)
        .take_while(|line| line.index() < range.end)
    {
        lint_line_into(&line, config, &mut findings);
    }
    findings
}

/// Lint a single line.
pub fn lint_line(line: &Line<'_>, config: &LintConfig) -> Vec<Finding> {
    let mut findings = Vec::new();
    lint_line_into(line, config, &mut findings);
    findings
}

fn lint_line_into(line: &Line<'_>, config: &LintConfig, out: &mut Vec<Finding>) {
    let first = out.len();
    for scanner in Scanner::ALL {
        if !config.checks.contains(scanner.check()) {
            continue;
        }
        let mut found = scanner.scan(line);
        if !config.report_balanced_bidi {
            found.retain(|finding| finding.code != FindingCode::U1003);
        }
        out.extend(found);
    }
    // Stable: ties keep scanner order.
    out[first..].sort_by_key(|finding| finding.start);

    for finding in &out[first..] {
        tracing::trace!(
            line = finding.line,
            column = finding.start,
            code = %finding.code,
            "finding"
        );
    }
}

#[cfg(test)]
mod tests;
