use serde::Serialize;

use super::trend::Trend;
use crate::model::{DataRecord, Metric, MetricValue};

/// Lookup key for a well-known metric: its name plus, for metrics split by
/// sub-field, the unit that selects the sub-field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricKey {
    pub name: &'static str,
    pub unit: Option<&'static str>,
}

impl MetricKey {
    pub const fn named(name: &'static str) -> Self {
        Self { name, unit: None }
    }

    pub const fn with_unit(name: &'static str, unit: &'static str) -> Self {
        Self {
            name,
            unit: Some(unit),
        }
    }
}

/// A value read at the reporting year the extractors agree on, plus its
/// direction against the previous year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tracked<T> {
    pub value: Option<T>,
    pub year: Option<i32>,
    pub trend: Trend,
}

impl<T> Default for Tracked<T> {
    fn default() -> Self {
        Self {
            value: None,
            year: None,
            trend: Trend::Stable,
        }
    }
}

/// Metrics pooled across all of a company's records, with the single
/// "latest year" every extractor reads at.
#[derive(Debug, Clone)]
pub struct MetricPool<'a> {
    metrics: Vec<&'a Metric>,
    latest_year: Option<i32>,
}

impl<'a> MetricPool<'a> {
    pub fn from_records(records: &'a [DataRecord]) -> Self {
        Self::from_metrics(records.iter().flat_map(|r| r.metrics.iter()))
    }

    pub fn from_metrics(metrics: impl IntoIterator<Item = &'a Metric>) -> Self {
        let metrics: Vec<&'a Metric> = metrics.into_iter().collect();
        let latest_year = metrics
            .iter()
            .flat_map(|m| m.values.iter().map(|v| v.year))
            .max();
        Self {
            metrics,
            latest_year,
        }
    }

    /// Read every extractor at `year` instead of the most recent year.
    pub fn at_year(mut self, year: i32) -> Self {
        self.latest_year = Some(year);
        self
    }

    pub fn latest_year(&self) -> Option<i32> {
        self.latest_year
    }

    pub fn metrics(&self) -> &[&'a Metric] {
        &self.metrics
    }

    /// True when nothing was reported at the latest year.
    pub fn is_empty(&self) -> bool {
        match self.latest_year {
            Some(year) => !self
                .metrics
                .iter()
                .any(|m| m.values.iter().any(|v| v.year == year)),
            None => true,
        }
    }

    /// Values of every pooled metric matching `key`, in reporting order.
    pub fn series(&self, key: MetricKey) -> Vec<&'a MetricValue> {
        self.metrics
            .iter()
            .filter(|m| m.matches(key.name, key.unit))
            .flat_map(|m| m.values.iter())
            .collect()
    }

    /// First reported value for `key` at the latest year.
    pub fn latest(&self, key: MetricKey) -> Option<&'a MetricValue> {
        let year = self.latest_year?;
        self.series(key).into_iter().find(|v| v.year == year)
    }

    /// First reported value for `key` at the most recent year before the
    /// latest year.
    pub fn previous(&self, key: MetricKey) -> Option<&'a MetricValue> {
        let year = self.latest_year?;
        let series = self.series(key);
        let previous_year = series.iter().map(|v| v.year).filter(|y| *y < year).max()?;
        series.into_iter().find(|v| v.year == previous_year)
    }

    pub fn latest_text(&self, key: MetricKey) -> Option<String> {
        self.latest(key).map(|v| v.raw_value.clone())
    }

    pub fn trend(&self, key: MetricKey) -> Trend {
        Trend::between(
            self.latest(key).and_then(|v| v.numeric_value),
            self.previous(key).and_then(|v| v.numeric_value),
        )
    }

    pub fn tracked_text(&self, key: MetricKey) -> Tracked<String> {
        let latest = self.latest(key);
        Tracked {
            value: latest.map(|v| v.raw_value.clone()),
            year: latest.map(|v| v.year),
            trend: self.trend(key),
        }
    }

    pub fn tracked_number(&self, key: MetricKey) -> Tracked<f64> {
        let latest = self.latest(key);
        Tracked {
            value: latest.and_then(|v| v.numeric_value),
            year: latest.map(|v| v.year),
            trend: self.trend(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{metric, record};

    const BOARD_SIZE: MetricKey = MetricKey::named("Board Size");

    #[test]
    fn test_latest_year_across_all_metrics() {
        let records = vec![
            record(vec![metric("Governance", "Board Size", None, &[(2021, "9")])]),
            record(vec![metric("Social", "Hospital Attendees", None, &[(2023, "100")])]),
        ];
        let pool = MetricPool::from_records(&records);
        assert_eq!(pool.latest_year(), Some(2023));
        // Board Size has nothing at 2023, so it has no latest value
        assert!(pool.latest(BOARD_SIZE).is_none());
        assert_eq!(pool.trend(BOARD_SIZE), Trend::Stable);
    }

    #[test]
    fn test_previous_skips_duplicate_latest_year() {
        let records = vec![record(vec![metric(
            "Governance",
            "Board Size",
            None,
            &[(2023, "11"), (2023, "12"), (2021, "8"), (2022, "9")],
        )])];
        let pool = MetricPool::from_records(&records);
        assert_eq!(pool.latest(BOARD_SIZE).unwrap().raw_value, "11");
        assert_eq!(pool.previous(BOARD_SIZE).unwrap().raw_value, "9");
        assert_eq!(pool.trend(BOARD_SIZE), Trend::Increasing);
    }

    #[test]
    fn test_series_pools_metrics_across_records() {
        let records = vec![
            record(vec![metric("Governance", "Board Size", None, &[(2022, "10")])]),
            record(vec![metric("Governance", "Board Size", None, &[(2023, "8")])]),
        ];
        let pool = MetricPool::from_records(&records);
        assert_eq!(pool.series(BOARD_SIZE).len(), 2);
        assert_eq!(pool.trend(BOARD_SIZE), Trend::Decreasing);
    }

    #[test]
    fn test_unit_key_selects_sub_field() {
        let records = vec![record(vec![
            metric("Social", "Education Programme Attendance", Some("Male"), &[(2023, "400")]),
            metric("Social", "Education Programme Attendance", Some("Female"), &[(2023, "600")]),
        ])];
        let pool = MetricPool::from_records(&records);
        let female = MetricKey::with_unit("Education Programme Attendance", "Female");
        assert_eq!(pool.latest(female).unwrap().numeric_value, Some(600.0));
    }

    #[test]
    fn test_at_year_overrides_latest() {
        let records = vec![record(vec![metric(
            "Governance",
            "Board Size",
            None,
            &[(2021, "8"), (2022, "9"), (2023, "11")],
        )])];
        let pool = MetricPool::from_records(&records).at_year(2022);
        let tracked = pool.tracked_text(BOARD_SIZE);
        assert_eq!(tracked.value.as_deref(), Some("9"));
        assert_eq!(tracked.year, Some(2022));
        assert_eq!(tracked.trend, Trend::Increasing);
    }

    #[test]
    fn test_at_year_without_values_is_empty() {
        let records = vec![record(vec![metric("Governance", "Board Size", None, &[(2023, "11")])])];
        let pool = MetricPool::from_records(&records);
        assert!(!pool.is_empty());
        let pool = pool.at_year(2019);
        assert!(pool.is_empty());
        assert!(pool.latest(BOARD_SIZE).is_none());
    }

    #[test]
    fn test_empty_pool() {
        let pool = MetricPool::from_records(&[]);
        assert!(pool.is_empty());
        assert_eq!(pool.tracked_number(BOARD_SIZE), Tracked::default());
    }

    #[test]
    fn test_non_numeric_values_are_stable() {
        let records = vec![record(vec![metric(
            "Governance",
            "Board Size",
            None,
            &[(2022, "nine"), (2023, "11")],
        )])];
        let pool = MetricPool::from_records(&records);
        assert_eq!(pool.trend(BOARD_SIZE), Trend::Stable);
    }
}
