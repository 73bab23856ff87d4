//! Hazard counts for the analytics chart, derived from the fetched reports.

use std::collections::BTreeMap;
use tracing::trace;

use crate::report::{HazardType, Report};

pub const CHART_TITLE: &str = "Reports by Type";

/// Bar fill and border colours, in `HazardType::ALL` order
const FILL_COLORS: [&str; 4] = [
    "rgba(167, 139, 250, 0.6)",
    "rgba(110, 231, 183, 0.6)",
    "rgba(254, 240, 138, 0.6)",
    "rgba(248, 113, 113, 0.6)",
];
const BORDER_COLORS: [&str; 4] = [
    "rgba(167, 139, 250, 1)",
    "rgba(110, 231, 183, 1)",
    "rgba(254, 240, 138, 1)",
    "rgba(248, 113, 113, 1)",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HazardCounts {
    counts: BTreeMap<HazardType, u32>,
}

impl HazardCounts {
    /// Groups reports by hazard type. Reports with an unrecognised type are
    /// left out.
    pub fn from_reports(reports: &[Report]) -> Self {
        let mut counts = BTreeMap::new();
        for report in reports {
            match report.hazard() {
                Some(hazard) => *counts.entry(hazard).or_insert(0) += 1,
                None => trace!(report_id = report.id, hazard_type = %report.hazard_type, "Not counted"),
            }
        }
        Self { counts }
    }

    pub fn get(&self, hazard: HazardType) -> u32 {
        self.counts.get(&hazard).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries {
            labels: HazardType::ALL.iter().map(|h| h.label().to_string()).collect(),
            values: HazardType::ALL.iter().map(|h| self.get(*h)).collect(),
            fill_colors: FILL_COLORS.iter().map(|c| c.to_string()).collect(),
            border_colors: BORDER_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Label/value series handed to the charting library
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<u32>,
    pub fill_colors: Vec<String>,
    pub border_colors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::tests::report;

    #[test]
    fn test_counts_follow_reports() {
        let reports = vec![
            report(1, "Tsunami", "1, 1", ""),
            report(2, "storm", "Mumbai", ""),
            report(3, "STORM", "1, 1", ""),
            report(4, "rip current", "1, 1", ""),
        ];
        let counts = HazardCounts::from_reports(&reports);

        assert_eq!(counts.get(HazardType::Tsunami), 1);
        assert_eq!(counts.get(HazardType::Storm), 2);
        assert_eq!(counts.get(HazardType::Flooding), 0);
        assert_eq!(counts.total(), 3);

        let series = counts.chart_series();
        assert_eq!(series.labels, vec!["Tsunami", "Storm Surge", "High Waves", "Flooding"]);
        assert_eq!(series.values, vec![1, 2, 0, 0]);
        assert_eq!(series.fill_colors.len(), 4);
    }

    #[test]
    fn test_empty_reports_give_zero_series() {
        let series = HazardCounts::from_reports(&[]).chart_series();
        assert_eq!(series.values, vec![0, 0, 0, 0]);
    }
}
