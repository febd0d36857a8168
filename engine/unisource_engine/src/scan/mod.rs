//! Per-line scanners.
//!
//! The set of scanners is closed: a new attack family needs its own table
//! and logic, so scanners are variants of [`Scanner`] rather than trait
//! objects. The aggregator runs them in [`Scanner::ALL`] order.

mod bidi;
mod homoglyph;
mod invisible;
mod pattern;

pub use bidi::scan_bidi;
pub use homoglyph::scan_homoglyph;
pub use invisible::scan_invisible;
pub use pattern::AttackPattern;

use std::fmt;

use crate::config::Checks;
use crate::{Finding, Line};

/// One of the three detection passes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Scanner {
    Bidi,
    Invisible,
    Homoglyph,
}

impl Scanner {
    /// All scanners, in the order the aggregator runs them.
    pub const ALL: [Scanner; 3] = [Scanner::Bidi, Scanner::Invisible, Scanner::Homoglyph];

    /// Run this scanner over one line.
    pub fn scan(self, line: &Line<'_>) -> Vec<Finding> {
        match self {
            Scanner::Bidi => scan_bidi(line),
            Scanner::Invisible => scan_invisible(line),
            Scanner::Homoglyph => scan_homoglyph(line),
        }
    }

    /// The configuration flag that enables this scanner.
    pub fn check(self) -> Checks {
        match self {
            Scanner::Bidi => Checks::BIDI,
            Scanner::Invisible => Checks::INVISIBLE,
            Scanner::Homoglyph => Checks::HOMOGLYPH,
        }
    }
}

impl fmt::Display for Scanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scanner::Bidi => write!(f, "bidi"),
            Scanner::Invisible => write!(f, "invisible"),
            Scanner::Homoglyph => write!(f, "homoglyph"),
        }
    }
}
