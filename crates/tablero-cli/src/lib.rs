//! Tablero CLI library
//!
//! Command-line interface for the Tablero README coverage updater.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod commands;
mod config;
mod error;
mod output;
pub mod handlers;

pub use commands::{CheckArgs, Cli, ColorArg, Commands, TargetArgs, UpdateArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::Reporter;
