//! Bidirectional-control analysis.
//!
//! Tracks direction nesting across one line and reports every bidi control
//! it meets. Unbalanced controls are errors; balanced ones are reported at
//! info level since any bidi control in source code is suspicious.
//!
//! Nesting follows UAX #9 scoping:
//! - PDF closes the innermost embedding/override, but never reaches past an
//!   isolate opened after it.
//! - PDI closes the innermost isolate and every embedding/override opened
//!   inside it.
//!
//! The stack lives for a single call; nothing carries over between lines.

use std::fmt::Write;

use smallvec::SmallVec;

use crate::classify::{lookup_bidi, BidiControl, BidiRole, CodepointDisplay};
use crate::{Finding, FindingCode, Line};

use super::pattern::AttackPattern;

/// Pairing outcome for one bidi control on the line.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Pairing {
    Balanced,
    /// A push still open at end of line.
    Unterminated,
    /// A pop with nothing to close.
    Dangling,
}

#[derive(Copy, Clone, Debug)]
struct Occurrence {
    column: u32,
    control: BidiControl,
    pairing: Pairing,
}

/// Scan one line for bidirectional controls.
///
/// Emits exactly one finding per bidi control, in column order.
pub fn scan_bidi(line: &Line<'_>) -> Vec<Finding> {
    let mut seen: SmallVec<[Occurrence; 4]> = SmallVec::new();
    // Indices into `seen` of the pushes that are still open.
    let mut open: SmallVec<[usize; 8]> = SmallVec::new();

    for (column, ch) in line.codepoints() {
        let Some(control) = lookup_bidi(ch) else {
            continue;
        };
        let idx = seen.len();
        let pairing = if control.role.is_push() {
            open.push(idx);
            Pairing::Unterminated
        } else {
            Pairing::Dangling
        };
        seen.push(Occurrence {
            column,
            control,
            pairing,
        });

        match control.role {
            BidiRole::PopFormatting => {
                if let Some(&top) = open.last() {
                    if seen[top].control.role != BidiRole::Isolate {
                        open.pop();
                        seen[top].pairing = Pairing::Balanced;
                        seen[idx].pairing = Pairing::Balanced;
                    }
                }
            }
            BidiRole::PopIsolate => {
                let isolate = open
                    .iter()
                    .rposition(|&i| seen[i].control.role == BidiRole::Isolate);
                if let Some(pos) = isolate {
                    for closed in open.drain(pos..) {
                        seen[closed].pairing = Pairing::Balanced;
                    }
                    seen[idx].pairing = Pairing::Balanced;
                }
            }
            BidiRole::Embedding | BidiRole::Override | BidiRole::Isolate => {}
        }
    }

    if seen.is_empty() {
        return Vec::new();
    }

    let pattern = AttackPattern::detect(line.text());
    seen.iter()
        .map(|occurrence| {
            let code = match occurrence.pairing {
                Pairing::Unterminated => FindingCode::U1001,
                Pairing::Dangling => FindingCode::U1002,
                Pairing::Balanced => FindingCode::U1003,
            };
            Finding::at(
                line.index(),
                occurrence.column,
                code,
                message(occurrence, pattern),
            )
        })
        .collect()
}

fn message(occurrence: &Occurrence, pattern: Option<AttackPattern>) -> String {
    let control = occurrence.control;
    let what = format!(
        "{} ({}, {})",
        control.abbrev,
        control.name,
        CodepointDisplay(control.ch)
    );
    let mut message = match occurrence.pairing {
        Pairing::Unterminated => format!(
            "unterminated bidirectional control {what}: text after it renders in a different order than it executes"
        ),
        Pairing::Dangling => format!(
            "dangling bidirectional control {what}: closes a direction scope that was never opened"
        ),
        Pairing::Balanced => format!(
            "balanced bidirectional control {what}: code may display differently from its logical order"
        ),
    };
    if let Some(pattern) = pattern {
        let _ = write!(message, "; possible Trojan Source {pattern} attack");
    }
    message
}
