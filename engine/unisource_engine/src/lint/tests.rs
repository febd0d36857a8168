use pretty_assertions::assert_eq;

use super::*;
use crate::{AttackCategory, Checks, Severity};

fn doc(text: &str) -> Document {
    Document::new("file:///test.py", text)
}

fn summary(findings: &[Finding]) -> Vec<(u32, u32, FindingCode)> {
    findings
        .iter()
        .map(|finding| (finding.line, finding.start, finding.code))
        .collect()
}

#[test]
fn clean_document_has_no_findings() {
    let findings = lint(&doc("def main():\n    return 0\n"));
    assert!(findings.is_empty());
}

#[test]
fn empty_document_has_no_findings() {
    assert!(lint(&doc("")).is_empty());
}

#[test]
fn trojan_source_comment_out_example() {
    let text = "if (access_level == 1) { // check\u{202E}admin\u{2066} \u{2069}\n    grant();\n}";
    let findings = lint(&doc(text));

    let unterminated: Vec<&Finding> = findings
        .iter()
        .filter(|finding| finding.code == FindingCode::U1001)
        .collect();
    assert_eq!(unterminated.len(), 1);
    assert_eq!(unterminated[0].line, 0);
    assert_eq!(unterminated[0].start, 33);
    assert_eq!(unterminated[0].category, AttackCategory::BidiOverride);
    assert_eq!(unterminated[0].severity, Severity::Error);
    assert!(unterminated[0].message.contains("comment-out"));
}

#[test]
fn findings_ordered_by_line_then_column() {
    let text = "\u{0430}\u{200B}\u{202E}\nx\u{0435}\u{202C}";
    assert_eq!(
        summary(&lint(&doc(text))),
        vec![
            (0, 0, FindingCode::U3001),
            (0, 1, FindingCode::U2001),
            (0, 2, FindingCode::U1001),
            (1, 1, FindingCode::U3001),
            (1, 2, FindingCode::U1002),
        ]
    );
}

#[test]
fn override_open_at_line_end_reported_only_on_its_line() {
    let text = "a\u{202E}b\nplain\n\u{202C}";
    assert_eq!(
        summary(&lint(&doc(text))),
        vec![(0, 1, FindingCode::U1001), (2, 0, FindingCode::U1002)]
    );
}

#[test]
fn balanced_bidi_can_be_hidden() {
    let text = "x\u{2066}y\u{2069} \u{202E}";
    let config = LintConfig::default().with_balanced_bidi(false);
    assert_eq!(
        summary(&lint_with(&doc(text), &config)),
        vec![(0, 5, FindingCode::U1001)]
    );
}

#[test]
fn disabled_scanners_do_not_run() {
    let text = "\u{0430}\u{200B}\u{202E}";
    let config = LintConfig::default().with_checks(Checks::INVISIBLE);
    assert_eq!(
        summary(&lint_with(&doc(text), &config)),
        vec![(0, 1, FindingCode::U2001)]
    );

    let none = LintConfig::default().with_checks(Checks::empty());
    assert!(lint_with(&doc(text), &none).is_empty());
}

#[test]
fn lint_lines_scans_exactly_the_range() {
    let text = "\u{200B}\n\u{200B}\n\u{200B}\n\u{200B}";
    let findings = lint_lines(&doc(text), 1..3, &LintConfig::default());
    let lines: Vec<u32> = findings.iter().map(|finding| finding.line).collect();
    assert_eq!(lines, vec![1, 2]);
}

#[test]
fn lint_lines_clamps_to_document() {
    let text = "\u{200B}\n\u{200B}";
    let findings = lint_lines(&doc(text), 1..100, &LintConfig::default());
    assert_eq!(findings.len(), 1);
    assert!(lint_lines(&doc(text), 5..9, &LintConfig::default()).is_empty());
}

#[test]
fn lint_line_matches_document_lint() {
    let text = "let \u{0430} = \"\u{202E}\";";
    let config = LintConfig::default();
    let line = Line::new(0, text);
    assert_eq!(lint_line(&line, &config), lint(&doc(text)));
}

#[test]
fn lint_is_idempotent() {
    let text = "\u{202E}a\u{200C}\n\u{0391}\u{202C}\r\n\u{2067}";
    let document = doc(text);
    assert_eq!(lint(&document), lint(&document));
}

#[test]
fn scanner_order_is_fixed() {
    assert_eq!(
        Scanner::ALL,
        [Scanner::Bidi, Scanner::Invisible, Scanner::Homoglyph]
    );
    assert_eq!(Scanner::Bidi.check(), Checks::BIDI);
    assert_eq!(Scanner::Homoglyph.to_string(), "homoglyph");
}
