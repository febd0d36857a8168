//! Invisible-character analysis.
//!
//! Stateless: every occurrence is reported on its own, since a single
//! invisible character is enough to hide or merge tokens.

use crate::classify::{lookup_invisible, CodepointDisplay};
use crate::{Finding, FindingCode, Line};

/// Scan one line for invisible format characters.
pub fn scan_invisible(line: &Line<'_>) -> Vec<Finding> {
    line.codepoints()
        .filter_map(|(column, ch)| {
            let invisible = lookup_invisible(ch)?;
            Some(Finding::at(
                line.index(),
                column,
                FindingCode::U2001,
                format!(
                    "invisible character {} ({}, {}) can hide or merge tokens",
                    invisible.name,
                    invisible.abbrev,
                    CodepointDisplay(invisible.ch)
                ),
            ))
        })
        .collect()
}
