//! Homoglyph analysis.
//!
//! Every confusable codepoint is flagged wherever it appears, including
//! inside strings and comments: without a lexer there is no safe way to
//! tell an identifier from prose.

use std::fmt::Write as _;

use super::pattern::AttackPattern;
use crate::classify::{lookup_confusable, CodepointDisplay, Confusable};
use crate::{Finding, FindingCode, Line};

/// Scan one line for characters that imitate ASCII letters or digits.
pub fn scan_homoglyph(line: &Line<'_>) -> Vec<Finding> {
    let hits: Vec<(u32, Confusable)> = line
        .codepoints()
        .filter_map(|(column, ch)| Some((column, lookup_confusable(ch)?)))
        .collect();
    if hits.is_empty() {
        return Vec::new();
    }

    let pattern = AttackPattern::detect(line.text());
    hits.into_iter()
        .map(|(column, confusable)| {
            Finding::at(
                line.index(),
                column,
                FindingCode::U3001,
                message(&confusable, pattern),
            )
        })
        .collect()
}

fn message(confusable: &Confusable, pattern: Option<AttackPattern>) -> String {
    let mut message = format!(
        "{} ({}) looks like ASCII `{}`",
        confusable.name,
        CodepointDisplay(confusable.ch),
        confusable.imitates
    );
    if let Some(pattern) = pattern {
        let _ = write!(message, "; possible Trojan Source {pattern} attack");
    }
    message
}
