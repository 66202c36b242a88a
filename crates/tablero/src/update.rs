//! The update pipeline
//!
//! One synchronous pass: load the dataset, measure coverage, render the
//! table, splice the generated block between the markers, write the
//! document back. Every step must succeed before anything touches disk.

use crate::dataset::{Dataset, DEFAULT_FLAG_COLUMN};
use crate::document::TargetDocument;
use crate::error::TableroResult;
use crate::stats::CoverageStats;
use crate::table::render_table;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Badge endpoint the generated image link points at (never fetched)
pub const BADGE_URL_BASE: &str = "https://geps.dev/progress";

/// Knobs for a single update run
#[derive(Debug, Clone)]
pub struct UpdateOptions {
    /// Name of the column that flags a row as implemented
    pub flag_column: String,
    /// Optional heading rendered above the table
    pub heading: Option<String>,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            flag_column: DEFAULT_FLAG_COLUMN.to_string(),
            heading: None,
        }
    }
}

/// What a run produced, reported to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOutcome {
    /// Rows flagged as implemented
    pub implemented: usize,
    /// All data rows
    pub total: usize,
    /// Coverage percentage
    pub percent: f64,
    /// Floored percentage used in the badge link
    pub badge_percent: u32,
    /// Two-decimal percentage used in the summary line
    pub display_percent: String,
    /// Whether the document content differs from what was on disk
    pub changed: bool,
}

/// Regenerate the coverage region and overwrite the target document.
pub fn update(
    data_path: &Path,
    readme_path: &Path,
    options: &UpdateOptions,
) -> TableroResult<UpdateOutcome> {
    let (document, outcome) = prepare(data_path, readme_path, options)?;
    document.write()?;
    Ok(outcome)
}

/// Read-only variant: report whether the document is already current.
///
/// `changed` in the outcome means the region on disk is stale.
pub fn check(
    data_path: &Path,
    readme_path: &Path,
    options: &UpdateOptions,
) -> TableroResult<UpdateOutcome> {
    let (_, outcome) = prepare(data_path, readme_path, options)?;
    Ok(outcome)
}

/// Run every step short of the final write.
fn prepare(
    data_path: &Path,
    readme_path: &Path,
    options: &UpdateOptions,
) -> TableroResult<(TargetDocument, UpdateOutcome)> {
    let dataset = Dataset::from_path(data_path, &options.flag_column)?;
    let stats = CoverageStats::measure(&dataset)?;
    let block = render_block(&dataset, stats, options.heading.as_deref());

    let mut document = TargetDocument::from_path(readme_path)?;
    document.splice(&block)?;
    // Compare against the raw bytes read, so line-ending normalization
    // that a write would apply also counts as a change.
    let changed = document.render() != document.source();

    let outcome = UpdateOutcome {
        implemented: stats.implemented,
        total: stats.total,
        percent: stats.percent(),
        badge_percent: stats.badge_percent(),
        display_percent: stats.display_percent(),
        changed,
    };
    Ok((document, outcome))
}

/// Build the generated block: optional heading, the table, a blank
/// line, the bold summary line, then the progress-badge image link.
#[must_use]
pub fn render_block(dataset: &Dataset, stats: CoverageStats, heading: Option<&str>) -> Vec<String> {
    let mut block = Vec::new();
    if let Some(heading) = heading {
        block.push(format!("## {heading}"));
        block.push(String::new());
    }
    block.extend(render_table(dataset));
    block.push(String::new());
    block.push(format!(
        "**Total Coverage: {}%**",
        stats.display_percent()
    ));
    block.push(format!("![]({}/{})", BADGE_URL_BASE, stats.badge_percent()));
    block
}
