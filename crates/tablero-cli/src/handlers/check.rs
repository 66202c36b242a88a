//! Check command handler

use crate::commands::CheckArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Reporter;

/// Execute the check command.
///
/// Runs the full pipeline without writing and fails when the document
/// region on disk differs from what an update would produce.
pub fn execute_check(config: &CliConfig, args: &CheckArgs) -> CliResult<()> {
    let data = args.target.data_path();
    let readme = args.target.readme_path();
    let options = args.target.update_options();

    let outcome = tablero::check(&data, &readme, &options)?;

    if args.target.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    if outcome.changed {
        return Err(CliError::stale(readme));
    }

    if !args.target.json {
        let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());
        reporter.success(&format!(
            "{} is current: {}/{} implemented ({}%)",
            readme.display(),
            outcome.implemented,
            outcome.total,
            outcome.display_percent
        ));
    }
    Ok(())
}
