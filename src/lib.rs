//! Yamlgate core library.
//!
//! A file-level YAML syntax gate: resolves command-line targets to candidate
//! files, parses each one, and reports the first problem per file with its
//! line number. Intended as a pre-commit / CI guard in front of tooling that
//! consumes YAML.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `scan`: Target classification and recursive `*.yaml` discovery.
//! - `check`: Per-file validation and run-status aggregation.
//! - `models`: Diagnostic data types and the reporting seam.
//! - `output`: Plain/colored line rendering and console emission.
pub mod check;
pub mod cli;
pub mod models;
pub mod output;
pub mod scan;
