//! Diagnostic line rendering and console emission.
//!
//! INFO lines go to stdout, ERROR lines to stderr, every line carrying the
//! fixed `YAML_SYNTAX` tag:
//!
//! ```text
//! YAML_SYNTAX:<dir>:INFO:Is a directory. Scanning for *.yaml
//! YAML_SYNTAX:<file>:ERROR:<line>:<message>
//! ```
//!
//! The severity token is colorized only when the destination stream is a
//! terminal and `NO_COLOR` is unset; piped output is byte-exact plain text.

use crate::models::{Diagnostic, Report, Severity};
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Tag applied uniformly to every emitted line.
pub const PREFIX: &str = "YAML_SYNTAX";

/// Render one diagnostic as its plain output line, without trailing newline.
pub fn render_line(diag: &Diagnostic) -> String {
    render(diag, false)
}

fn render(diag: &Diagnostic, color: bool) -> String {
    let token = severity_token(diag.severity, color);
    match diag.severity {
        Severity::Info => format!("{}:{}:{}:{}", PREFIX, diag.file, token, diag.message),
        Severity::Error => format!(
            "{}:{}:{}:{}:{}",
            PREFIX, diag.file, token, diag.line, diag.message
        ),
    }
}

fn severity_token(severity: Severity, color: bool) -> String {
    match severity {
        Severity::Info => {
            if color {
                "INFO".blue().bold().to_string()
            } else {
                "INFO".to_string()
            }
        }
        Severity::Error => {
            if color {
                "ERROR".red().bold().to_string()
            } else {
                "ERROR".to_string()
            }
        }
    }
}

/// Console sink: INFO to stdout, ERROR to stderr, emitted as each diagnostic
/// is produced so long scans report failures immediately.
pub struct ConsoleReport {
    color_stdout: bool,
    color_stderr: bool,
}

impl ConsoleReport {
    /// Detect color support per stream.
    pub fn from_env() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        ConsoleReport {
            color_stdout: !no_color && std::io::stdout().is_terminal(),
            color_stderr: !no_color && std::io::stderr().is_terminal(),
        }
    }
}

impl Report for ConsoleReport {
    fn emit(&mut self, diag: Diagnostic) {
        match diag.severity {
            Severity::Info => println!("{}", render(&diag, self.color_stdout)),
            Severity::Error => eprintln!("{}", render(&diag, self.color_stderr)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_render_error_line() {
        let diag = Diagnostic::error(Path::new("conf/app.yaml"), 7, "did not find expected key");
        assert_eq!(
            render_line(&diag),
            "YAML_SYNTAX:conf/app.yaml:ERROR:7:did not find expected key"
        );
    }

    #[test]
    fn test_render_error_line_without_location() {
        let diag = Diagnostic::error(Path::new("missing.yaml"), 0, "File does not exist!");
        assert_eq!(
            render_line(&diag),
            "YAML_SYNTAX:missing.yaml:ERROR:0:File does not exist!"
        );
    }

    #[test]
    fn test_render_info_line_has_no_line_field() {
        let diag = Diagnostic::info(Path::new("conf"), crate::check::SCANNING_MESSAGE);
        assert_eq!(
            render_line(&diag),
            "YAML_SYNTAX:conf:INFO:Is a directory. Scanning for *.yaml"
        );
    }

    #[test]
    fn test_colored_render_keeps_fields_intact() {
        let diag = Diagnostic::error(Path::new("a.yaml"), 3, "boom");
        let colored = render(&diag, true);
        assert!(colored.starts_with("YAML_SYNTAX:a.yaml:"));
        assert!(colored.ends_with(":3:boom"));
        assert!(colored.contains("ERROR"));
    }
}
