//! Binary entrypoint for the `routegen` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = routegen::logging::initialize_logging() {
        eprintln!("{err}");
    }
    match routegen::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
