//! Tablero: regenerate a coverage report embedded in a README
//!
//! Tablero (Spanish: "board/scoreboard") reads a CSV data source with an
//! `IMPLEMENTED` column, computes the share of implemented rows, renders
//! the CSV as a markdown table, and splices the table plus a summary line
//! and progress-badge link between two marker comments in a target
//! document:
//!
//! ```text
//! <!-- START_TABLE -->
//! | ENDPOINT | IMPLEMENTED |
//! |----------|-------------|
//! | GET /x   | TRUE        |
//!
//! **Total Coverage: 50.0%**
//! ![](https://geps.dev/progress/50)
//! <!-- END_TABLE -->
//! ```
//!
//! One pass per invocation, no retained state. The target file is only
//! overwritten after every upstream step has succeeded. There is no file
//! locking: concurrent runs against the same document are a lost-update
//! race, accepted for the single-operator usage this tool is built for.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod dataset;
mod document;
mod error;
mod stats;
mod table;
mod update;

pub use dataset::{Dataset, Record, DEFAULT_FLAG_COLUMN, IMPLEMENTED_VALUE};
pub use document::{Region, TargetDocument, END_MARKER, START_MARKER};
pub use error::{TableroError, TableroResult};
pub use stats::CoverageStats;
pub use table::{escape_cell, render_table};
pub use update::{check, render_block, update, UpdateOptions, UpdateOutcome, BADGE_URL_BASE};
