//! Update command handler

use crate::commands::UpdateArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::Reporter;

/// Execute the update command
pub fn execute_update(config: &CliConfig, args: &UpdateArgs) -> CliResult<()> {
    let data = args.target.data_path();
    let readme = args.target.readme_path();
    let options = args.target.update_options();

    let outcome = tablero::update(&data, &readme, &options)?;

    if args.target.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());
    reporter.success(&format!(
        "updated {} from {}: {}/{} implemented ({}%)",
        readme.display(),
        data.display(),
        outcome.implemented,
        outcome.total,
        outcome.display_percent
    ));
    if !outcome.changed {
        reporter.info("content was already current");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::commands::TargetArgs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const README: &str = "<!-- START_TABLE -->\nstale\n<!-- END_TABLE -->\n";

    fn args_for(dir: &TempDir, json: bool) -> UpdateArgs {
        UpdateArgs {
            target: TargetArgs {
                root: dir.path().to_path_buf(),
                data: None,
                readme: None,
                column: tablero::DEFAULT_FLAG_COLUMN.to_string(),
                heading: None,
                json,
            },
        }
    }

    #[test]
    fn test_execute_update_writes_readme() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("data.csv"), "E,IMPLEMENTED\nx,TRUE\n").unwrap();
        std::fs::write(dir.path().join("README.md"), README).unwrap();

        let config = CliConfig::default();
        execute_update(&config, &args_for(&dir, false)).unwrap();

        let content = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert!(content.contains("**Total Coverage: 100.0%**"));
    }

    #[test]
    fn test_execute_update_json_mode() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("data.csv"), "E,IMPLEMENTED\nx,FALSE\n").unwrap();
        std::fs::write(dir.path().join("README.md"), README).unwrap();

        let config = CliConfig::default();
        execute_update(&config, &args_for(&dir, true)).unwrap();
    }

    #[test]
    fn test_execute_update_missing_data_fails() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("README.md"), README).unwrap();

        let config = CliConfig::default();
        let err = execute_update(&config, &args_for(&dir, false)).unwrap_err();
        assert!(err.to_string().contains("data"));
    }

    #[test]
    fn test_explicit_paths_used() {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("endpoints.csv");
        let readme = dir.path().join("STATUS.md");
        std::fs::write(&data, "E,IMPLEMENTED\nx,TRUE\ny,FALSE\n").unwrap();
        std::fs::write(&readme, README).unwrap();

        let args = UpdateArgs {
            target: TargetArgs {
                root: PathBuf::from("."),
                data: Some(data),
                readme: Some(readme.clone()),
                column: tablero::DEFAULT_FLAG_COLUMN.to_string(),
                heading: None,
                json: false,
            },
        };
        execute_update(&CliConfig::default(), &args).unwrap();

        let content = std::fs::read_to_string(&readme).unwrap();
        assert!(content.contains("![](https://geps.dev/progress/50)"));
    }
}
