//! vosi-diag - browse and render VOSI validation conditions

use std::process::ExitCode;

use vosi_diagnostics::cli::Cli;

fn main() -> ExitCode {
    match Cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            ExitCode::FAILURE
        }
    }
}
