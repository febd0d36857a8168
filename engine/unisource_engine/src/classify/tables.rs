//! Static detection tables.
//!
//! Each table is sorted by codepoint for binary search. The three tables are
//! disjoint: a codepoint belongs to at most one of them.

use super::BidiRole;

/// Explicit Unicode bidirectional formatting characters.
///
/// Only the *control* characters are listed. Ordinary right-to-left letters
/// are legitimate text and never indicate tampering.
///
/// Format: `(found_char, abbreviation, unicode_name, role)`
pub(crate) const BIDI_CONTROLS: &[(char, &str, &str, BidiRole)] = &[
    // U+202x: Embeddings and overrides, closed by PDF
    ('\u{202A}', "LRE", "Left-to-Right Embedding", BidiRole::Embedding),
    ('\u{202B}', "RLE", "Right-to-Left Embedding", BidiRole::Embedding),
    ('\u{202C}', "PDF", "Pop Directional Formatting", BidiRole::PopFormatting),
    ('\u{202D}', "LRO", "Left-to-Right Override", BidiRole::Override),
    ('\u{202E}', "RLO", "Right-to-Left Override", BidiRole::Override),
    // U+206x: Isolates, closed by PDI
    ('\u{2066}', "LRI", "Left-to-Right Isolate", BidiRole::Isolate),
    ('\u{2067}', "RLI", "Right-to-Left Isolate", BidiRole::Isolate),
    ('\u{2068}', "FSI", "First Strong Isolate", BidiRole::Isolate),
    ('\u{2069}', "PDI", "Pop Directional Isolate", BidiRole::PopIsolate),
];

/// Format and control characters that render no visible glyph.
///
/// Space and tab are deliberately absent.
///
/// Format: `(found_char, abbreviation, unicode_name)`
pub(crate) const INVISIBLE_CHARS: &[(char, &str, &str)] = &[
    // U+00xx: Latin-1 Supplement
    ('\u{00AD}', "SHY", "Soft Hyphen"),
    // U+200x: Zero-width characters and directional marks
    ('\u{200B}', "ZWSP", "Zero Width Space"),
    ('\u{200C}', "ZWNJ", "Zero Width Non-Joiner"),
    ('\u{200D}', "ZWJ", "Zero Width Joiner"),
    ('\u{200E}', "LRM", "Left-to-Right Mark"),
    ('\u{200F}', "RLM", "Right-to-Left Mark"),
    // U+206x: Word joiner and invisible operators
    ('\u{2060}', "WJ", "Word Joiner"),
    ('\u{2061}', "FA", "Function Application"),
    ('\u{2062}', "IT", "Invisible Times"),
    ('\u{2063}', "IS", "Invisible Separator"),
    ('\u{2064}', "IP", "Invisible Plus"),
    // U+FExx: Specials
    ('\u{FEFF}', "ZWNBSP", "Zero Width No-Break Space"),
];

/// Non-ASCII letters whose glyphs are indistinguishable from an ASCII letter
/// or digit in common programming fonts.
///
/// Mappings only point *toward* ASCII: the attack imitates trusted ASCII
/// identifiers, never the reverse.
///
/// Format: `(found_char, imitated_ascii, unicode_name)`
pub(crate) const CONFUSABLES: &[(char, char, &str)] = &[
    // U+037x-03Fx: Greek
    ('\u{037F}', 'J', "Greek Capital Letter Yot"),
    ('\u{0391}', 'A', "Greek Capital Letter Alpha"),
    ('\u{0392}', 'B', "Greek Capital Letter Beta"),
    ('\u{0395}', 'E', "Greek Capital Letter Epsilon"),
    ('\u{0396}', 'Z', "Greek Capital Letter Zeta"),
    ('\u{0397}', 'H', "Greek Capital Letter Eta"),
    ('\u{0399}', 'I', "Greek Capital Letter Iota"),
    ('\u{039A}', 'K', "Greek Capital Letter Kappa"),
    ('\u{039C}', 'M', "Greek Capital Letter Mu"),
    ('\u{039D}', 'N', "Greek Capital Letter Nu"),
    ('\u{039F}', 'O', "Greek Capital Letter Omicron"),
    ('\u{03A1}', 'P', "Greek Capital Letter Rho"),
    ('\u{03A4}', 'T', "Greek Capital Letter Tau"),
    ('\u{03A5}', 'Y', "Greek Capital Letter Upsilon"),
    ('\u{03A7}', 'X', "Greek Capital Letter Chi"),
    ('\u{03BD}', 'v', "Greek Small Letter Nu"),
    ('\u{03BF}', 'o', "Greek Small Letter Omicron"),
    ('\u{03C1}', 'p', "Greek Small Letter Rho"),
    ('\u{03F2}', 'c', "Greek Lunate Sigma Symbol"),
    ('\u{03F3}', 'j', "Greek Letter Yot"),
    ('\u{03F9}', 'C', "Greek Capital Lunate Sigma Symbol"),
    // U+040x-042x: Cyrillic capitals
    ('\u{0405}', 'S', "Cyrillic Capital Letter Dze"),
    ('\u{0406}', 'I', "Cyrillic Capital Letter Byelorussian-Ukrainian I"),
    ('\u{0408}', 'J', "Cyrillic Capital Letter Je"),
    ('\u{0410}', 'A', "Cyrillic Capital Letter A"),
    ('\u{0412}', 'B', "Cyrillic Capital Letter Ve"),
    ('\u{0415}', 'E', "Cyrillic Capital Letter Ie"),
    ('\u{0417}', '3', "Cyrillic Capital Letter Ze"),
    ('\u{041A}', 'K', "Cyrillic Capital Letter Ka"),
    ('\u{041C}', 'M', "Cyrillic Capital Letter Em"),
    ('\u{041D}', 'H', "Cyrillic Capital Letter En"),
    ('\u{041E}', 'O', "Cyrillic Capital Letter O"),
    ('\u{0420}', 'P', "Cyrillic Capital Letter Er"),
    ('\u{0421}', 'C', "Cyrillic Capital Letter Es"),
    ('\u{0422}', 'T', "Cyrillic Capital Letter Te"),
    ('\u{0425}', 'X', "Cyrillic Capital Letter Ha"),
    // U+043x-045x: Cyrillic small letters
    ('\u{0430}', 'a', "Cyrillic Small Letter A"),
    ('\u{0435}', 'e', "Cyrillic Small Letter Ie"),
    ('\u{043E}', 'o', "Cyrillic Small Letter O"),
    ('\u{0440}', 'p', "Cyrillic Small Letter Er"),
    ('\u{0441}', 'c', "Cyrillic Small Letter Es"),
    ('\u{0443}', 'y', "Cyrillic Small Letter U"),
    ('\u{0445}', 'x', "Cyrillic Small Letter Ha"),
    ('\u{0455}', 's', "Cyrillic Small Letter Dze"),
    ('\u{0456}', 'i', "Cyrillic Small Letter Byelorussian-Ukrainian I"),
    ('\u{0458}', 'j', "Cyrillic Small Letter Je"),
    // U+04Ax-04Cx: Cyrillic extended
    ('\u{04AE}', 'Y', "Cyrillic Capital Letter Straight U"),
    ('\u{04C0}', 'l', "Cyrillic Letter Palochka"),
    ('\u{04CF}', 'l', "Cyrillic Small Letter Palochka"),
    // U+050x-051x: Cyrillic Supplement
    ('\u{0501}', 'd', "Cyrillic Small Letter Komi De"),
    ('\u{051B}', 'q', "Cyrillic Small Letter Qa"),
    ('\u{051D}', 'w', "Cyrillic Small Letter We"),
];
