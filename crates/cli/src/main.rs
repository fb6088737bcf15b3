//! Vacation Preference Predictor - Main Entry Point

use clap::Parser;
use std::process::ExitCode;
use tracing::info;
use vacation_cli::{execute, init_logging, Cli, Settings};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&settings.logging);

    info!("=== Vacation Preference Predictor v{} ===", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    match execute(cli.command, settings, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(hint) = e.hint() {
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}
