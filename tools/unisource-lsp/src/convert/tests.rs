use super::*;
use pretty_assertions::assert_eq;
use tower_lsp::lsp_types::GeneralClientCapabilities;
use unisource_engine::{lint, FindingCode};

fn capabilities(encodings: Option<Vec<PositionEncodingKind>>) -> ClientCapabilities {
    ClientCapabilities {
        general: Some(GeneralClientCapabilities {
            position_encodings: encodings,
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[test]
fn negotiate_prefers_utf32_when_offered() {
    let caps = capabilities(Some(vec![
        PositionEncodingKind::UTF8,
        PositionEncodingKind::UTF32,
        PositionEncodingKind::UTF16,
    ]));
    assert_eq!(PositionEncoding::negotiate(&caps), PositionEncoding::Utf32);
}

#[test]
fn negotiate_defaults_to_utf16() {
    assert_eq!(
        PositionEncoding::negotiate(&ClientCapabilities::default()),
        PositionEncoding::Utf16
    );
    assert_eq!(
        PositionEncoding::negotiate(&capabilities(None)),
        PositionEncoding::Utf16
    );
    assert_eq!(
        PositionEncoding::negotiate(&capabilities(Some(vec![PositionEncodingKind::UTF8]))),
        PositionEncoding::Utf16
    );
}

#[test]
fn kind_round_trips_through_negotiation() {
    assert_eq!(PositionEncoding::Utf16.kind(), PositionEncodingKind::UTF16);
    assert_eq!(PositionEncoding::Utf32.kind(), PositionEncodingKind::UTF32);
}

#[test]
fn utf16_counts_surrogate_pairs() {
    // U+1F600 takes two UTF-16 units.
    let text = "\u{1F600}x\u{202E}";
    let mut cursor = ColumnCursor::new(text, PositionEncoding::Utf16);
    assert_eq!(cursor.seek(0), 0);
    assert_eq!(cursor.seek(1), 2);
    assert_eq!(cursor.seek(2), 3);
    assert_eq!(cursor.seek(3), 4);
    assert_eq!(ColumnCursor::new(text, PositionEncoding::Utf32).seek(2), 2);
}

#[test]
fn utf16_column_past_end_clamps() {
    assert_eq!(ColumnCursor::new("ab", PositionEncoding::Utf16).seek(10), 2);
}

#[test]
fn cursor_seeking_backwards_restarts() {
    let mut cursor = ColumnCursor::new("\u{1F600}\u{1F600}a", PositionEncoding::Utf16);
    assert_eq!(cursor.seek(3), 5);
    assert_eq!(cursor.seek(1), 2);
    assert_eq!(cursor.seek(2), 4);
}

#[test]
fn many_findings_on_one_long_line() {
    // Astral prefix, then alternating look-alike and ASCII letters.
    let mut text = String::from("\u{1F600}");
    for _ in 0..20_000 {
        text.push_str("\u{0430}b");
    }
    let document = Document::new("file:///strings.json", text);
    let findings = lint(&document);
    assert_eq!(findings.len(), 20_000);

    let diagnostics = to_diagnostics(&document, &findings, PositionEncoding::Utf16);
    assert_eq!(diagnostics.len(), 20_000);
    for (k, diagnostic) in (0u32..).zip(&diagnostics) {
        // Codepoint column 1 + 2k, shifted by the surrogate pair.
        assert_eq!(diagnostic.range.start, Position::new(0, 2 + 2 * k));
        assert_eq!(diagnostic.range.end, Position::new(0, 3 + 2 * k));
    }

    let utf32 = to_diagnostics(&document, &findings, PositionEncoding::Utf32);
    assert_eq!(utf32[19_999].range.start, Position::new(0, 1 + 2 * 19_999));
}

#[test]
fn unsorted_findings_still_convert() {
    let document = Document::new("file:///u.rs", "\u{1F600}\u{200B}\n\u{1F600}\u{0430}");
    let mut findings = lint(&document);
    findings.reverse();

    let diagnostics = to_diagnostics(&document, &findings, PositionEncoding::Utf16);
    let starts: Vec<Position> = diagnostics.iter().map(|d| d.range.start).collect();
    assert_eq!(starts, vec![Position::new(1, 2), Position::new(0, 2)]);
}

#[test]
fn diagnostics_carry_code_source_and_severity() {
    let document = Document::new("file:///a.py", "x\u{202E}\n\u{2066}\u{2069}\u{200B}\u{0430}");
    let diagnostics = to_diagnostics(&document, &lint(&document), PositionEncoding::Utf16);

    let summary: Vec<(u32, u32, u32, DiagnosticSeverity, String)> = diagnostics
        .iter()
        .map(|diagnostic| {
            let code = match diagnostic.code.as_ref().unwrap() {
                NumberOrString::String(code) => code.clone(),
                NumberOrString::Number(number) => number.to_string(),
            };
            (
                diagnostic.range.start.line,
                diagnostic.range.start.character,
                diagnostic.range.end.character,
                diagnostic.severity.unwrap(),
                code,
            )
        })
        .collect();

    assert_eq!(
        summary,
        vec![
            (0, 1, 2, DiagnosticSeverity::ERROR, "U1001".to_string()),
            (1, 0, 1, DiagnosticSeverity::INFORMATION, "U1003".to_string()),
            (1, 1, 2, DiagnosticSeverity::INFORMATION, "U1003".to_string()),
            (1, 2, 3, DiagnosticSeverity::WARNING, "U2001".to_string()),
            (1, 3, 4, DiagnosticSeverity::WARNING, "U3001".to_string()),
        ]
    );
    assert!(diagnostics
        .iter()
        .all(|diagnostic| diagnostic.source.as_deref() == Some(SOURCE)));
}

#[test]
fn diagnostics_shift_after_astral_characters() {
    let document = Document::new("file:///e.rs", "\u{1F600}\u{200B}");
    let findings = lint(&document);
    assert_eq!(findings[0].code, FindingCode::U2001);

    let utf16 = to_diagnostics(&document, &findings, PositionEncoding::Utf16);
    assert_eq!(utf16[0].range.start.character, 2);
    assert_eq!(utf16[0].range.end.character, 3);

    let utf32 = to_diagnostics(&document, &findings, PositionEncoding::Utf32);
    assert_eq!(utf32[0].range.start.character, 1);
    assert_eq!(utf32[0].range.end.character, 2);
}

#[test]
fn finding_on_missing_line_collapses_to_column_zero() {
    let document = Document::new("file:///s.rs", "clean");
    let stale = Finding::at(5, 3, FindingCode::U2001, "stale");
    let diagnostics = to_diagnostics(&document, &[stale], PositionEncoding::Utf16);
    assert_eq!(diagnostics[0].range.start, Position::new(5, 0));
    assert_eq!(diagnostics[0].range.end, Position::new(5, 0));
}
