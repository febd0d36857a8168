//! Codepoint classification.
//!
//! Maps a single codepoint to the detection table it belongs to. Every scanner
//! funnels through [`classify`] (or one of the narrower `lookup_*` functions),
//! once per codepoint of every scanned line.
//!
//! Classification is total: anything absent from the tables, including
//! unassigned codepoints, is [`Category::Ordinary`].

mod tables;

use std::fmt;

use tables::{BIDI_CONTROLS, CONFUSABLES, INVISIBLE_CHARS};

/// How a bidi control participates in direction nesting.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BidiRole {
    /// LRE / RLE: opens an embedding, closed by PDF.
    Embedding,
    /// LRO / RLO: opens an override, closed by PDF.
    Override,
    /// LRI / RLI / FSI: opens an isolate, closed by PDI.
    Isolate,
    /// PDF: closes the innermost embedding or override.
    PopFormatting,
    /// PDI: closes the innermost isolate.
    PopIsolate,
}

impl BidiRole {
    /// Whether this control opens a new directional scope.
    pub fn is_push(self) -> bool {
        matches!(
            self,
            BidiRole::Embedding | BidiRole::Override | BidiRole::Isolate
        )
    }
}

/// A bidirectional formatting character from the bidi-control table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BidiControl {
    pub ch: char,
    /// Conventional abbreviation (e.g. `RLO`).
    pub abbrev: &'static str,
    pub name: &'static str,
    pub role: BidiRole,
}

/// A character from the invisible-format table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct InvisibleChar {
    pub ch: char,
    pub abbrev: &'static str,
    pub name: &'static str,
}

/// A homoglyph and the ASCII character it imitates.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Confusable {
    pub ch: char,
    /// The ASCII letter or digit this character is mistaken for.
    pub imitates: char,
    pub name: &'static str,
}

/// Result of classifying one codepoint.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Category {
    Bidi(BidiControl),
    Invisible(InvisibleChar),
    Homoglyph(Confusable),
    Ordinary,
}

/// Classify a single codepoint.
///
/// ASCII is always ordinary, so the common case never touches a table.
/// Otherwise each table is binary searched, O(log n).
pub fn classify(ch: char) -> Category {
    if ch.is_ascii() {
        return Category::Ordinary;
    }
    if let Some(control) = lookup_bidi(ch) {
        return Category::Bidi(control);
    }
    if let Some(invisible) = lookup_invisible(ch) {
        return Category::Invisible(invisible);
    }
    if let Some(confusable) = lookup_confusable(ch) {
        return Category::Homoglyph(confusable);
    }
    Category::Ordinary
}

/// Look up a character in the bidi-control table.
pub fn lookup_bidi(ch: char) -> Option<BidiControl> {
    BIDI_CONTROLS
        .binary_search_by_key(&ch, |&(found, _, _, _)| found)
        .ok()
        .map(|idx| {
            let (ch, abbrev, name, role) = BIDI_CONTROLS[idx];
            BidiControl {
                ch,
                abbrev,
                name,
                role,
            }
        })
}

/// Look up a character in the invisible-format table.
pub fn lookup_invisible(ch: char) -> Option<InvisibleChar> {
    INVISIBLE_CHARS
        .binary_search_by_key(&ch, |&(found, _, _)| found)
        .ok()
        .map(|idx| {
            let (ch, abbrev, name) = INVISIBLE_CHARS[idx];
            InvisibleChar { ch, abbrev, name }
        })
}

/// Look up a character in the confusables table.
pub fn lookup_confusable(ch: char) -> Option<Confusable> {
    CONFUSABLES
        .binary_search_by_key(&ch, |&(found, _, _)| found)
        .ok()
        .map(|idx| {
            let (ch, imitates, name) = CONFUSABLES[idx];
            Confusable { ch, imitates, name }
        })
}

/// Renders a codepoint in `U+XXXX` notation.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CodepointDisplay(pub char);

impl fmt::Display for CodepointDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", u32::from(self.0))
    }
}
