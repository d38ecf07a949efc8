mod cli;
mod commands;
mod db;
mod error;
mod shell;

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}
