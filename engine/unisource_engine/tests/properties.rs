//! Property-based tests for the detection engine.
//!
//! These tests use proptest to generate lines mixing ordinary text with
//! codepoints from every detection table and verify:
//! 1. Clean text never produces findings
//! 2. Finding ranges always lie within their line
//! 3. Linting is idempotent and order-stable
//! 4. Bidi pairing behaves as expected for open and closed scopes

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use unisource_engine::{
    lint, lint_with, AttackCategory, Document, FindingCode, LintConfig, Scanner,
};

const BIDI_PUSHES: &[(char, char)] = &[
    ('\u{202A}', '\u{202C}'),
    ('\u{202B}', '\u{202C}'),
    ('\u{202D}', '\u{202C}'),
    ('\u{202E}', '\u{202C}'),
    ('\u{2066}', '\u{2069}'),
    ('\u{2067}', '\u{2069}'),
    ('\u{2068}', '\u{2069}'),
];

const SUSPICIOUS: &[char] = &[
    '\u{202A}', '\u{202B}', '\u{202C}', '\u{202D}', '\u{202E}', '\u{2066}', '\u{2067}',
    '\u{2068}', '\u{2069}', '\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}', '\u{00AD}',
    '\u{0430}', '\u{0435}', '\u{043E}', '\u{0391}', '\u{039F}', '\u{0456}',
];

// -- Strategies --

/// Source-like text using only codepoints outside every table.
fn clean_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~\t\n\u{00E9}\u{03BB}\u{0436}\u{65E5}\u{672C}]{0,200}")
        .expect("valid regex")
}

/// An identifier-shaped ASCII token.
fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{1,15}").expect("valid regex")
}

/// A character that is either ordinary or drawn from a detection table.
fn mixed_char_strategy() -> impl Strategy<Value = char> {
    prop_oneof![
        3 => prop::char::range(' ', '~'),
        1 => prop::sample::select(SUSPICIOUS),
        1 => Just('\n'),
        1 => Just('\r'),
    ]
}

fn mixed_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(mixed_char_strategy(), 0..120)
        .prop_map(|chars| chars.into_iter().collect())
}

fn ascii_fragment_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{0,20}").expect("valid regex")
}

proptest! {
    #[test]
    fn clean_text_has_no_findings(text in clean_text_strategy()) {
        let findings = lint(&Document::new("file:///clean", text));
        prop_assert!(findings.is_empty(), "unexpected findings: {findings:?}");
    }

    #[test]
    fn finding_ranges_lie_within_their_line(text in mixed_text_strategy()) {
        let document = Document::new("file:///mixed", text);
        for finding in lint(&document) {
            let line = document.line(finding.line).expect("finding on a real line");
            let len = u32::try_from(line.len()).unwrap();
            prop_assert!(finding.start < finding.end);
            prop_assert!(finding.start < len, "{finding:?} past line of {len}");
            prop_assert!(finding.end <= len, "{finding:?} past line of {len}");
        }
    }

    #[test]
    fn findings_are_ordered(text in mixed_text_strategy()) {
        let findings = lint(&Document::new("file:///mixed", text));
        for pair in findings.windows(2) {
            prop_assert!((pair[0].line, pair[0].start) <= (pair[1].line, pair[1].start));
        }
    }

    #[test]
    fn lint_is_idempotent(text in mixed_text_strategy()) {
        let document = Document::new("file:///mixed", text);
        prop_assert_eq!(lint(&document), lint(&document));
    }

    #[test]
    fn unmatched_push_always_reported(
        prefix in ascii_fragment_strategy(),
        suffix in ascii_fragment_strategy(),
        pair in prop::sample::select(BIDI_PUSHES),
    ) {
        let text = format!("{prefix}{}{suffix}", pair.0);
        let findings = lint(&Document::new("file:///push", text));
        prop_assert!(findings.iter().any(|finding| finding.line == 0
            && finding.category == AttackCategory::BidiOverride
            && finding.code == FindingCode::U1001));
    }

    #[test]
    fn immediately_closed_push_is_balanced(
        prefix in ascii_fragment_strategy(),
        suffix in ascii_fragment_strategy(),
        pair in prop::sample::select(BIDI_PUSHES),
    ) {
        let text = format!("{prefix}{}{}{suffix}", pair.0, pair.1);
        let findings = lint(&Document::new("file:///pair", text));
        prop_assert!(findings.iter().all(|finding| finding.code == FindingCode::U1003));

        let quiet = LintConfig::default().with_balanced_bidi(false);
        let document = Document::new("file:///pair", format!("{prefix}{}{}{suffix}", pair.0, pair.1));
        prop_assert!(lint_with(&document, &quiet).is_empty());
    }

    #[test]
    fn zero_width_space_inside_identifier(ident in identifier_strategy(), split in 1usize..16) {
        let split = split.min(ident.len() - 1);
        let text = format!("{}\u{200B}{}", &ident[..split], &ident[split..]);
        let document = Document::new("file:///zwsp", text);
        let line = document.line(0).unwrap();

        let invisible = Scanner::Invisible.scan(&line);
        prop_assert_eq!(invisible.len(), 1);
        prop_assert_eq!(invisible[0].start, u32::try_from(split).unwrap());
        prop_assert_eq!(invisible[0].category, AttackCategory::InvisibleChar);
        prop_assert!(Scanner::Bidi.scan(&line).is_empty());
        prop_assert!(Scanner::Homoglyph.scan(&line).is_empty());
    }
}

#[test]
fn cyrillic_a_names_latin_a() {
    let findings = lint(&Document::new("file:///a", "\u{0430}"));
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].category, AttackCategory::Homoglyph);
    assert!(findings[0].message.contains("`a`"), "{}", findings[0].message);
}
