//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tablero::{UpdateOptions, DEFAULT_FLAG_COLUMN};

/// Tablero: keep a README coverage table and progress badge in sync with CSV data
#[derive(Parser, Debug)]
#[command(name = "tablero")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate the coverage table in the README
    Update(UpdateArgs),

    /// Verify the README coverage table is current without writing
    Check(CheckArgs),
}

/// Data source and target document selection, shared by both commands
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Project root that default paths are resolved against
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// CSV data source (defaults to <ROOT>/data.csv)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Target document (defaults to <ROOT>/README.md)
    #[arg(long)]
    pub readme: Option<PathBuf>,

    /// Column that flags a row as implemented
    #[arg(long, default_value = DEFAULT_FLAG_COLUMN)]
    pub column: String,

    /// Heading rendered above the generated table
    #[arg(long)]
    pub heading: Option<String>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

impl TargetArgs {
    /// Effective data source path
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.data
            .clone()
            .unwrap_or_else(|| self.root.join("data.csv"))
    }

    /// Effective target document path
    #[must_use]
    pub fn readme_path(&self) -> PathBuf {
        self.readme
            .clone()
            .unwrap_or_else(|| self.root.join("README.md"))
    }

    /// Pipeline options derived from the flags
    #[must_use]
    pub fn update_options(&self) -> UpdateOptions {
        UpdateOptions {
            flag_column: self.column.clone(),
            heading: self.heading.clone(),
        }
    }
}

/// Arguments for the update command
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Paths and rendering options
    #[command(flatten)]
    pub target: TargetArgs,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Paths and rendering options
    #[command(flatten)]
    pub target: TargetArgs,
}

/// Color output argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}
