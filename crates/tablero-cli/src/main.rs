//! Tablero CLI: keep a README coverage table in sync with CSV data
//!
//! ## Usage
//!
//! ```bash
//! tablero update                  # Rewrite <root>/README.md from <root>/data.csv
//! tablero update --heading "API"  # Frame the table with a heading
//! tablero check                   # Fail if the table is out of date
//! ```

use clap::Parser;
use std::process::ExitCode;
use tablero_cli::{
    handlers::{execute_check, execute_update},
    Cli, CliConfig, CliResult, ColorArg, ColorChoice, Commands, Verbosity,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);

    match cli.command {
        Commands::Update(args) => execute_update(&config, &args),
        Commands::Check(args) => execute_check(&config, &args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        Verbosity::Normal
    };

    let color = match cli.color {
        ColorArg::Always => ColorChoice::Always,
        ColorArg::Auto => ColorChoice::Auto,
        ColorArg::Never => ColorChoice::Never,
    };

    CliConfig::new().with_verbosity(verbosity).with_color(color)
}
