//! SARIF Emitter
//!
//! Static Analysis Results Interchange Format (SARIF) output for CI/CD integration.
//!
//! SARIF is a standardized JSON format for static analysis tools, supported by:
//! - GitHub Code Scanning
//! - VS Code SARIF Viewer
//! - Azure DevOps
//!
//! See: <https://sarifweb.azurewebsites.net/>
//!
//! Columns are reported as Unicode codepoints (`columnKind`), matching the
//! engine's column unit.

use std::io::Write;

use serde::Serialize;
use unisource_engine::{Document, Finding, FindingCode, Severity, SeverityCounts};

use super::FindingEmitter;
use crate::CodeDocs;

const SCHEMA: &str =
    "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

/// SARIF emitter for Static Analysis Results Interchange Format.
///
/// Results are buffered; [`finish`](SarifEmitter::finish) writes the document.
pub struct SarifEmitter<W: Write> {
    writer: W,
    tool_name: String,
    tool_version: String,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
struct SarifLog<'a> {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: [Run<'a>; 1],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Run<'a> {
    tool: Tool<'a>,
    column_kind: &'static str,
    results: &'a [SarifResult],
}

#[derive(Serialize)]
struct Tool<'a> {
    driver: Driver<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Driver<'a> {
    name: &'a str,
    version: &'a str,
    rules: Vec<Rule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Rule {
    id: &'static str,
    short_description: Text,
    default_configuration: Configuration,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<Markdown>,
}

#[derive(Serialize)]
struct Text {
    text: String,
}

#[derive(Serialize)]
struct Markdown {
    text: &'static str,
    markdown: &'static str,
}

#[derive(Serialize)]
struct Configuration {
    level: &'static str,
}

/// Internal representation of a SARIF result before serialization.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: &'static str,
    rule_index: usize,
    level: &'static str,
    message: Text,
    locations: [Location; 1],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Location {
    physical_location: PhysicalLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PhysicalLocation {
    artifact_location: ArtifactLocation,
    region: Region,
}

#[derive(Serialize)]
struct ArtifactLocation {
    uri: String,
}

/// 1-based, end column exclusive.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Region {
    start_line: u64,
    start_column: u64,
    end_line: u64,
    end_column: u64,
}

impl<W: Write> SarifEmitter<W> {
    /// Create a new SARIF emitter.
    pub fn new(writer: W, tool_name: impl Into<String>, tool_version: impl Into<String>) -> Self {
        SarifEmitter {
            writer,
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
            results: Vec::new(),
        }
    }

    /// Convert severity to SARIF level.
    fn severity_to_level(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "note",
        }
    }

    fn rule_index(code: FindingCode) -> usize {
        FindingCode::ALL
            .iter()
            .position(|candidate| *candidate == code)
            .unwrap_or_default()
    }

    fn rules() -> Vec<Rule> {
        FindingCode::ALL
            .iter()
            .map(|code| Rule {
                id: code.as_str(),
                short_description: Text {
                    text: code.summary().to_string(),
                },
                default_configuration: Configuration {
                    level: Self::severity_to_level(code.severity()),
                },
                help: CodeDocs::get(*code).map(|doc| Markdown {
                    text: doc,
                    markdown: doc,
                }),
            })
            .collect()
    }

    /// Write the complete SARIF document.
    ///
    /// Every finding code appears as a rule, whether or not it was reported.
    pub fn finish(&mut self) {
        let log = SarifLog {
            schema: SCHEMA,
            version: "2.1.0",
            runs: [Run {
                tool: Tool {
                    driver: Driver {
                        name: &self.tool_name,
                        version: &self.tool_version,
                        rules: Self::rules(),
                    },
                },
                column_kind: "unicodeCodePoints",
                results: &self.results,
            }],
        };
        let _ = serde_json::to_writer_pretty(&mut self.writer, &log);
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> FindingEmitter for SarifEmitter<W> {
    fn emit(&mut self, document: &Document, finding: &Finding) {
        let line = u64::from(finding.line) + 1;
        self.results.push(SarifResult {
            rule_id: finding.code.as_str(),
            rule_index: Self::rule_index(finding.code),
            level: Self::severity_to_level(finding.severity),
            message: Text {
                text: finding.message.clone(),
            },
            locations: [Location {
                physical_location: PhysicalLocation {
                    artifact_location: ArtifactLocation {
                        uri: document.uri().to_string(),
                    },
                    region: Region {
                        start_line: line,
                        start_column: u64::from(finding.start) + 1,
                        end_line: line,
                        end_column: u64::from(finding.end) + 1,
                    },
                },
            }],
        });
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _counts: SeverityCounts) {
        // SARIF doesn't have a summary section
    }
}
