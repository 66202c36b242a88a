//! Command handlers

mod check;
mod update;

pub use check::execute_check;
pub use update::execute_update;
