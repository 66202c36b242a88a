//! Coverage statistics derived from a dataset

use crate::dataset::Dataset;
use crate::error::{TableroError, TableroResult};
use serde::{Deserialize, Serialize};

/// Share of rows flagged as implemented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageStats {
    /// Rows whose flag column is exactly `TRUE`
    pub implemented: usize,
    /// All data rows
    pub total: usize,
}

impl CoverageStats {
    /// Measure coverage of a dataset.
    ///
    /// Fails on an empty dataset: a percentage of nothing is meaningless
    /// and must never reach the rendered report.
    pub fn measure(dataset: &Dataset) -> TableroResult<Self> {
        if dataset.is_empty() {
            return Err(TableroError::empty_dataset(dataset.path()));
        }
        let implemented = dataset
            .records()
            .iter()
            .filter(|r| dataset.is_implemented(r))
            .count();
        Ok(Self {
            implemented,
            total: dataset.len(),
        })
    }

    /// Coverage percentage in `0.0..=100.0`
    #[must_use]
    pub fn percent(&self) -> f64 {
        100.0 * self.implemented as f64 / self.total as f64
    }

    /// Percentage floored to an integer, for the progress badge URL
    #[must_use]
    pub fn badge_percent(&self) -> u32 {
        self.percent().floor() as u32
    }

    /// Percentage rounded to two decimals with trailing zeros trimmed,
    /// for the summary line (`50.0`, `66.67`, `100.0`)
    #[must_use]
    pub fn display_percent(&self) -> String {
        let mut text = format!("{:.2}", self.percent());
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.push('0');
        }
        text
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::dataset::DEFAULT_FLAG_COLUMN;
    use proptest::prelude::*;
    use std::path::Path;

    fn dataset(content: &str) -> Dataset {
        Dataset::from_csv(content, DEFAULT_FLAG_COLUMN, Path::new("data.csv")).unwrap()
    }

    #[test]
    fn test_half_covered() {
        let ds = dataset("ENDPOINT,IMPLEMENTED\nGET /x,TRUE\nGET /y,FALSE\n");
        let stats = CoverageStats::measure(&ds).unwrap();
        assert_eq!(stats.implemented, 1);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.percent(), 50.0);
        assert_eq!(stats.badge_percent(), 50);
        assert_eq!(stats.display_percent(), "50.0");
    }

    #[test]
    fn test_two_thirds_floors_badge() {
        let ds = dataset("E,IMPLEMENTED\na,TRUE\nb,TRUE\nc,FALSE\n");
        let stats = CoverageStats::measure(&ds).unwrap();
        assert_eq!(stats.badge_percent(), 66);
        assert_eq!(stats.display_percent(), "66.67");
    }

    #[test]
    fn test_full_coverage() {
        let ds = dataset("E,IMPLEMENTED\na,TRUE\nb,TRUE\n");
        let stats = CoverageStats::measure(&ds).unwrap();
        assert_eq!(stats.percent(), 100.0);
        assert_eq!(stats.badge_percent(), 100);
        assert_eq!(stats.display_percent(), "100.0");
    }

    #[test]
    fn test_zero_coverage() {
        let ds = dataset("E,IMPLEMENTED\na,FALSE\n");
        let stats = CoverageStats::measure(&ds).unwrap();
        assert_eq!(stats.percent(), 0.0);
        assert_eq!(stats.badge_percent(), 0);
        assert_eq!(stats.display_percent(), "0.0");
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let ds = dataset("E,IMPLEMENTED\n");
        let err = CoverageStats::measure(&ds).unwrap_err();
        assert!(matches!(err, TableroError::EmptyDataset { .. }));
    }

    #[test]
    fn test_one_eighth_display() {
        let stats = CoverageStats {
            implemented: 1,
            total: 8,
        };
        assert_eq!(stats.display_percent(), "12.5");
        assert_eq!(stats.badge_percent(), 12);
    }

    #[test]
    fn test_serialize() {
        let stats = CoverageStats {
            implemented: 3,
            total: 4,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"implemented\":3"));
        assert!(json.contains("\"total\":4"));
    }

    proptest! {
        #[test]
        fn prop_percent_in_bounds(implemented in 0usize..500, extra in 0usize..500) {
            let total = implemented + extra;
            prop_assume!(total > 0);
            let stats = CoverageStats { implemented, total };
            let percent = stats.percent();
            prop_assert!((0.0..=100.0).contains(&percent));
            prop_assert!(stats.badge_percent() <= 100);
        }

        #[test]
        fn prop_full_coverage_iff_all_implemented(implemented in 0usize..500, extra in 0usize..500) {
            let total = implemented + extra;
            prop_assume!(total > 0);
            let stats = CoverageStats { implemented, total };
            prop_assert_eq!(stats.percent() == 100.0, implemented == total);
        }
    }
}
