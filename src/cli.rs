//! CLI argument parsing via `clap`.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "yamlgate",
    about = "Check YAML file syntax before it reaches downstream tooling",
    disable_help_flag = true,
    disable_version_flag = true
)]
/// Top-level CLI options. No flags are recognized: auto help/version are
/// disabled and hyphen-leading values are accepted, so every argument is a
/// target path. An empty invocation is a usage error (exit 2).
pub struct Cli {
    /// Files to parse, or directories to scan recursively for `*.yaml`.
    #[arg(required = true, value_name = "PATH", allow_hyphen_values = true)]
    pub paths: Vec<PathBuf>,
}
