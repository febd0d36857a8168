use super::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use unisource_engine::{lint, FindingCode};

fn emit_json(documents: &[Document]) -> String {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);
    emitter.begin();
    for document in documents {
        emitter.emit_all(document, &lint(document));
    }
    emitter.emit_summary(SeverityCounts {
        errors: 1,
        warnings: 1,
        infos: 0,
    });
    emitter.end();
    emitter.flush();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_empty_output_is_empty_array() {
    let text = emit_json(&[Document::new("clean.rs", "fn main() {}")]);
    assert_eq!(text, "[]\n");
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value, Value::Array(Vec::new()));
}

#[test]
fn test_record_fields() {
    let text = emit_json(&[Document::new("src/a.rs", "let x\u{200B} = 1;")]);
    let value: Value = serde_json::from_str(&text).unwrap();
    let record = &value[0];

    assert_eq!(record["path"], "src/a.rs");
    assert_eq!(record["line"], 0);
    assert_eq!(record["start"], 5);
    assert_eq!(record["end"], 6);
    assert_eq!(record["category"], "InvisibleChar");
    assert_eq!(record["code"], FindingCode::U2001.as_str());
    assert_eq!(record["severity"], "warning");
    assert!(record["message"].as_str().unwrap().contains("U+200B"));
}

#[test]
fn test_multiple_documents_form_one_array() {
    let text = emit_json(&[
        Document::new("a.rs", "\u{202E}"),
        Document::new("b.rs", "clean"),
        Document::new("c.rs", "\u{0430}\u{FEFF}"),
    ]);
    let value: Value = serde_json::from_str(&text).unwrap();
    let paths: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["a.rs", "c.rs", "c.rs"]);
}

#[test]
fn test_messages_are_escaped() {
    let document = Document::new("q\"uote.rs", "x");
    let finding = Finding::at(0, 0, FindingCode::U3001, "looks like `\"`\n");
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);
    emitter.begin();
    emitter.emit(&document, &finding);
    emitter.end();

    let value: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value[0]["path"], "q\"uote.rs");
    assert_eq!(value[0]["message"], "looks like `\"`\n");
}
