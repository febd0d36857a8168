//! The `check` command: lint files and directories for Trojan Source attacks.
//!
//! Paths are expanded to a file list (directories walked recursively, hidden
//! entries and `target` skipped), linted in parallel, then reported in file
//! list order through the selected emitter.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rayon::prelude::*;
use unisource_engine::{lint_with, Checks, Document, Finding, LintConfig, SeverityCounts};
use unisource_report::{ColorMode, FindingEmitter, JsonEmitter, SarifEmitter, TerminalEmitter};
use walkdir::{DirEntry, WalkDir};

use super::CliError;

/// Directory names never descended into.
const SKIPPED_DIRS: &[&str] = &["target"];

/// Output format selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Sarif,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            "sarif" => Ok(OutputFormat::Sarif),
            _ => Err(CliError::UnknownFormat(s.to_string())),
        }
    }
}

fn parse_color(s: &str) -> Result<ColorMode, CliError> {
    match s {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        _ => Err(CliError::UnknownColor(s.to_string())),
    }
}

/// Options for `unisource check`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckOptions {
    pub format: OutputFormat,
    pub color: ColorMode,
    pub config: LintConfig,
    pub paths: Vec<PathBuf>,
}

/// Parse the arguments following `check`.
pub fn parse_check_options(args: &[String]) -> Result<CheckOptions, CliError> {
    let mut options = CheckOptions::default();

    for arg in args {
        if let Some(format) = arg.strip_prefix("--format=") {
            options.format = format.parse()?;
        } else if let Some(color) = arg.strip_prefix("--color=") {
            options.color = parse_color(color)?;
        } else if arg == "--no-bidi" {
            options.config.checks.remove(Checks::BIDI);
        } else if arg == "--no-invisible" {
            options.config.checks.remove(Checks::INVISIBLE);
        } else if arg == "--no-homoglyph" {
            options.config.checks.remove(Checks::HOMOGLYPH);
        } else if arg == "--hide-balanced" {
            options.config.report_balanced_bidi = false;
        } else if arg.starts_with('-') && arg.len() > 1 {
            return Err(CliError::UnknownOption(arg.clone()));
        } else {
            options.paths.push(PathBuf::from(arg));
        }
    }

    if options.paths.is_empty() {
        return Err(CliError::NoPaths);
    }
    Ok(options)
}

fn is_skipped(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || (entry.file_type().is_dir() && SKIPPED_DIRS.contains(&&*name))
}

/// Expand paths into the list of files to lint.
///
/// Files are kept as given. Directories contribute their files, including
/// symlinks to files, in name order; the root itself is never skipped.
pub fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();
    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }
        let walker = WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_skipped(entry));
        for entry in walker {
            let entry = entry.map_err(|source| CliError::Walk {
                path: path.clone(),
                source,
            })?;
            let file_type = entry.file_type();
            if file_type.is_file() {
                files.push(entry.into_path());
            } else if file_type.is_symlink() {
                // Linked files are linted; linked directories are not
                // descended into, so the walk cannot loop.
                if entry.path().is_file() {
                    files.push(entry.into_path());
                } else {
                    tracing::warn!(
                        path = %entry.path().display(),
                        "skipping symlink that is not a file"
                    );
                }
            }
        }
    }
    Ok(files)
}

/// Findings for one linted file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileReport {
    pub document: Document,
    pub findings: Vec<Finding>,
}

/// What happened to one input file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    Linted(FileReport),
    /// The file is not UTF-8 text and was not linted.
    NotUtf8(PathBuf),
}

fn lint_file(path: &Path, config: &LintConfig) -> Result<FileOutcome, CliError> {
    let bytes = fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let Ok(text) = String::from_utf8(bytes) else {
        tracing::warn!(path = %path.display(), "skipping file that is not valid UTF-8");
        return Ok(FileOutcome::NotUtf8(path.to_path_buf()));
    };

    let document = Document::new(path.display().to_string(), text);
    let findings = lint_with(&document, config);
    Ok(FileOutcome::Linted(FileReport { document, findings }))
}

/// Lint every file in parallel. Outcomes keep the order of `files`.
pub fn lint_files(files: &[PathBuf], config: &LintConfig) -> Result<Vec<FileOutcome>, CliError> {
    files
        .par_iter()
        .map(|path| lint_file(path, config))
        .collect()
}

fn emit_reports<E: FindingEmitter>(emitter: &mut E, reports: &[&FileReport]) {
    for report in reports {
        emitter.emit_all(&report.document, &report.findings);
    }
}

/// Run `unisource check` and write the report to `out`.
///
/// Returns the finding counts; the caller maps them to an exit status.
#[tracing::instrument(level = "debug", skip_all, fields(paths = options.paths.len()))]
pub fn run_check<W: Write>(
    options: &CheckOptions,
    out: W,
    is_tty: bool,
) -> Result<SeverityCounts, CliError> {
    let files = collect_files(&options.paths)?;
    tracing::debug!(files = files.len(), "collected files");

    let outcomes = lint_files(&files, &options.config)?;
    let mut reports = Vec::with_capacity(outcomes.len());
    for outcome in &outcomes {
        match outcome {
            FileOutcome::Linted(report) => reports.push(report),
            FileOutcome::NotUtf8(path) => {
                eprintln!("warning: skipping {}: not valid UTF-8", path.display());
            }
        }
    }

    let counts = reports
        .iter()
        .map(|report| SeverityCounts::tally(&report.findings))
        .fold(SeverityCounts::default(), SeverityCounts::merge);

    match options.format {
        OutputFormat::Terminal => {
            let mut emitter = TerminalEmitter::with_color_mode(out, options.color, is_tty);
            emit_reports(&mut emitter, &reports);
            emitter.emit_summary(counts);
            emitter.flush();
        }
        OutputFormat::Json => {
            let mut emitter = JsonEmitter::new(out);
            emitter.begin();
            emit_reports(&mut emitter, &reports);
            emitter.end();
            emitter.flush();
        }
        OutputFormat::Sarif => {
            let mut emitter = SarifEmitter::new(out, "unisource", env!("CARGO_PKG_VERSION"));
            emit_reports(&mut emitter, &reports);
            emitter.finish();
            emitter.flush();
        }
    }

    Ok(counts)
}
