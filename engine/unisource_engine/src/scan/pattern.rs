//! Trojan Source attack pattern hints.
//!
//! The engine does no lexical parsing. These hints only look for surface
//! markers on the line to name the likely attack in bidi and homoglyph
//! messages; they never change severity or suppress a finding.

use std::fmt;

/// Line-comment and block-comment openers across common languages.
const COMMENT_MARKERS: &[&str] = &["//", "/*", "#", "'''", "\"\"\""];

/// The attack a bidi control most likely serves on a given line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AttackPattern {
    /// Reordering makes live code look like part of a comment (or the reverse).
    CommentOut,
    /// Reordering hides a `return` that exits before the visible logic runs.
    EarlyReturn,
}

impl AttackPattern {
    /// Guess the attack pattern from the line's surface text.
    ///
    /// Comment markers take precedence over `return`.
    pub fn detect(text: &str) -> Option<AttackPattern> {
        if COMMENT_MARKERS.iter().any(|marker| text.contains(marker)) {
            Some(AttackPattern::CommentOut)
        } else if contains_keyword(text, "return") {
            Some(AttackPattern::EarlyReturn)
        } else {
            None
        }
    }
}

impl fmt::Display for AttackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackPattern::CommentOut => write!(f, "comment-out"),
            AttackPattern::EarlyReturn => write!(f, "early-return"),
        }
    }
}

/// Whether `keyword` occurs in `text` as a whole word.
fn contains_keyword(text: &str, keyword: &str) -> bool {
    text.match_indices(keyword).any(|(pos, _)| {
        let before = text[..pos].chars().next_back();
        let after = text[pos + keyword.len()..].chars().next();
        !before.is_some_and(is_ident_char) && !after.is_some_and(is_ident_char)
    })
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
