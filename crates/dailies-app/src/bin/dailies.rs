//! `dailies` command-line entry point.
//!
//! Prints one JSON payload on stdout. Failures go to stderr with exit code 2
//! for malformed input and 1 for anything else. Set `RUST_LOG=info` to see
//! how the seed was chosen.

use std::process::ExitCode;

use clap::Parser as _;
use dailies_app::{AppError, cli::Cli, request};

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("dailies {}", dailies_app::version::build_version());

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err:?}");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<String, AppError> {
    let payload = request::handle(&cli.command)?;
    let output = if cli.pretty {
        serde_json::to_string_pretty(&payload)?
    } else {
        serde_json::to_string(&payload)?
    };
    Ok(output)
}
