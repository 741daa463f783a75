mod cli;
mod dispatch;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::dispatch::run_command;
use crate::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let report = run_command(cli.command);
    for line in &report.lines {
        println!("{line}");
    }
    if let Some(failure) = &report.failure {
        eprintln!("Error: {failure}");
    }
    ExitCode::from(report.exit_code())
}
