//! Per-file YAML validation and run aggregation.
//!
//! Each candidate is parsed once and classified into a typed failure. The
//! run walks targets in argument order, streams at most one diagnostic per
//! candidate through the `Report` seam, and folds the per-candidate statuses
//! into the process exit status.

use crate::models::{Diagnostic, Report};
use crate::scan::{self, Target};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Message attached to the INFO line emitted for each directory target.
pub const SCANNING_MESSAGE: &str = "Is a directory. Scanning for *.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Why a candidate failed. Every kind is fatal with equal weight; the
/// `Display` text is the diagnostic message.
pub enum CheckFailure {
    /// The candidate could not be opened because it does not exist.
    #[error("File does not exist!")]
    NotFound,
    /// The parser rejected the document. `line` is the parser's 1-based
    /// report, 0 when the parser supplied no location.
    #[error("{message}")]
    Syntax { line: u64, message: String },
    /// The document parsed but its top level is not a mapping.
    #[error("YAML file does not contain a hash")]
    NotMapping,
    /// Any other failure: encoding problems, permissions, parser internals.
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl CheckFailure {
    /// Line to report alongside the message; 0 when no line applies.
    pub fn line(&self) -> u64 {
        match self {
            CheckFailure::Syntax { line, .. } => *line,
            _ => 0,
        }
    }
}

/// Parse one candidate file and enforce the top-level mapping rule.
pub fn check_file(path: &Path) -> Result<(), CheckFailure> {
    let text = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(CheckFailure::NotFound);
        }
        Err(err) => return Err(CheckFailure::Unknown(err.to_string())),
    };
    let value: serde_yaml::Value = match serde_yaml::from_str(&text) {
        Ok(v) => v,
        Err(err) => return Err(syntax_failure(&err)),
    };
    // An empty document parses as null and fails the mapping rule too.
    if !value.is_mapping() {
        return Err(CheckFailure::NotMapping);
    }
    Ok(())
}

fn syntax_failure(err: &serde_yaml::Error) -> CheckFailure {
    let line = err.location().map(|loc| loc.line() as u64).unwrap_or(0);
    CheckFailure::Syntax {
        line,
        message: strip_location_suffix(&err.to_string()),
    }
}

lazy_static! {
    static ref LOCATION_SUFFIX_RE: Regex = Regex::new(r"\s+at line \d+ column \d+$").unwrap();
}

/// Drop the parser's trailing `at line L column C` from a message; the line
/// is reported in its own diagnostic field.
fn strip_location_suffix(message: &str) -> String {
    LOCATION_SUFFIX_RE.replace(message, "").to_string()
}

/// Check every candidate reachable from `paths`, in order, streaming
/// diagnostics into `report`. Returns the folded run status: 0 only when no
/// candidate failed. Processing never stops early on failure.
pub fn run(paths: &[PathBuf], report: &mut dyn Report) -> i32 {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut statuses: Vec<i32> = Vec::new();
    for path in paths {
        match Target::classify(path) {
            Target::Directory(dir) => {
                report.emit(Diagnostic::info(&dir, SCANNING_MESSAGE));
                for candidate in scan::yaml_files_under(&dir) {
                    statuses.push(check_candidate(&candidate, &mut seen, report));
                }
            }
            Target::File(file) => {
                statuses.push(check_candidate(&file, &mut seen, report));
            }
        }
    }
    fold_status(statuses)
}

/// Check one candidate, emitting at most one ERROR diagnostic. A candidate
/// already checked in this run is skipped so a file never produces two
/// diagnostic lines.
fn check_candidate(path: &Path, seen: &mut HashSet<PathBuf>, report: &mut dyn Report) -> i32 {
    if !seen.insert(path.to_path_buf()) {
        return 0;
    }
    match check_file(path) {
        Ok(()) => 0,
        Err(failure) => {
            report.emit(Diagnostic::error(path, failure.line(), failure.to_string()));
            1
        }
    }
}

/// Fold ordered per-candidate statuses into the run status: the most recent
/// non-zero status wins, and a later success never masks an earlier failure.
pub fn fold_status<I: IntoIterator<Item = i32>>(statuses: I) -> i32 {
    statuses
        .into_iter()
        .fold(0, |acc, s| if s != 0 { s } else { acc })
}
