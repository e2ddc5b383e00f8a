//! Yamlgate CLI binary entry point.
//! Checks every candidate file and exits with the aggregated run status.

use clap::Parser;
use yamlgate::check;
use yamlgate::cli::Cli;
use yamlgate::output::ConsoleReport;

fn main() {
    let cli = Cli::parse();
    let mut report = ConsoleReport::from_env();
    let status = check::run(&cli.paths, &mut report);
    if status != 0 {
        std::process::exit(status);
    }
}
