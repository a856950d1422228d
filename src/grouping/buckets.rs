use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::rules::{classify, SubCategory};
use crate::model::{DataRecord, Metric};

/// Metrics sharing one grouping key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryBucket {
    pub count: usize,
    pub metrics: Vec<Metric>,
}

impl CategoryBucket {
    fn push(&mut self, metric: &Metric) {
        self.count += 1;
        self.metrics.push(metric.clone());
    }
}

/// year -> category -> single-value metric projections
pub type YearlyBuckets = BTreeMap<i32, BTreeMap<String, Vec<Metric>>>;

fn all_metrics(records: &[DataRecord]) -> impl Iterator<Item = &Metric> {
    records.iter().flat_map(|r| r.metrics.iter())
}

/// Bucket every metric of every record by lower-cased category.
///
/// Nothing is deduplicated: a metric repeated across records is counted once
/// per occurrence.
pub fn group_by_category(records: &[DataRecord]) -> BTreeMap<String, CategoryBucket> {
    let mut groups: BTreeMap<String, CategoryBucket> = BTreeMap::new();
    for metric in all_metrics(records) {
        groups
            .entry(metric.category.trim().to_lowercase())
            .or_default()
            .push(metric);
    }
    groups
}

pub fn group_by_sub_category(records: &[DataRecord]) -> BTreeMap<SubCategory, CategoryBucket> {
    let mut groups: BTreeMap<SubCategory, CategoryBucket> = BTreeMap::new();
    for metric in all_metrics(records) {
        groups.entry(classify(&metric.name)).or_default().push(metric);
    }
    groups
}

/// Explode multi-year metrics into per-year projections, so a year-scoped
/// view never sees values from another year.
pub fn group_by_year(records: &[DataRecord]) -> YearlyBuckets {
    let mut groups: YearlyBuckets = BTreeMap::new();
    for metric in all_metrics(records) {
        for value in &metric.values {
            groups
                .entry(value.year)
                .or_default()
                .entry(metric.category.clone())
                .or_default()
                .push(metric.with_single_value(value));
        }
    }
    groups
}

/// Distinct reporting years across all metric values, ascending.
pub fn available_years(records: &[DataRecord]) -> Vec<i32> {
    all_metrics(records)
        .flat_map(|m| m.values.iter().map(|v| v.year))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
