//! Shared data models: diagnostics and the reporting seam.

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Severity of a single reported line.
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single reported problem with severity, file, line, and message.
///
/// `line` is the parser's 1-based line for syntax errors and 0 whenever no
/// specific line applies (missing file, structural-shape error, unknown
/// error, informational lines).
pub struct Diagnostic {
    pub severity: Severity,
    pub file: String,
    pub line: u64,
    pub message: String,
}

impl Diagnostic {
    /// Informational line for a directory target being expanded.
    pub fn info(file: &Path, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Info,
            file: file.to_string_lossy().to_string(),
            line: 0,
            message: message.into(),
        }
    }

    /// Error line for a failing candidate.
    pub fn error(file: &Path, line: u64, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            file: file.to_string_lossy().to_string(),
            line,
            message: message.into(),
        }
    }
}

/// Sink for diagnostics as they are produced.
///
/// The runner streams diagnostics one at a time, as each target or candidate
/// is processed; the binary prints them immediately, tests collect them.
pub trait Report {
    fn emit(&mut self, diag: Diagnostic);
}

#[derive(Debug, Default)]
/// Collecting sink for tests and embedders.
pub struct Collected {
    pub diags: Vec<Diagnostic>,
}

impl Report for Collected {
    fn emit(&mut self, diag: Diagnostic) {
        self.diags.push(diag);
    }
}
