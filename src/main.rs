//! Binary entrypoint for the `checkable` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Environment checkers see variables from a local .env as well.
    let _ = dotenvy::dotenv();
    checkable::logging::init();

    match checkable::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
