use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::grouping::{available_years, group_by_category};
use crate::model::{CompanyRef, DataRecord};

/// Per-category rollup inside a company summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategorySummary {
    pub count: usize,
    pub units: BTreeSet<String>,
    pub metric_names: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanySummary {
    /// Company of the first record; `None` when there are no records
    pub company: Option<CompanyRef>,
    pub record_count: usize,
    pub metric_count: usize,
    pub years: Vec<i32>,
    pub categories: BTreeMap<String, CategorySummary>,
    /// Mean of the records' data quality scores, ignoring records without one
    pub data_quality: Option<f64>,
    /// Status of the most recently updated record
    pub verification_status: Option<String>,
    pub verification_counts: BTreeMap<String, usize>,
    pub last_updated_at: Option<DateTime<Utc>>,
}

pub fn company_summary(records: &[DataRecord]) -> CompanySummary {
    let categories = group_by_category(records)
        .into_iter()
        .map(|(category, bucket)| {
            let summary = CategorySummary {
                count: bucket.count,
                units: bucket
                    .metrics
                    .iter()
                    .filter_map(|m| m.unit.clone())
                    .collect(),
                metric_names: bucket.metrics.iter().map(|m| m.name.clone()).collect(),
            };
            (category, summary)
        })
        .collect();

    let quality: Vec<f64> = records.iter().filter_map(|r| r.data_quality_score).collect();
    let data_quality = if quality.is_empty() {
        None
    } else {
        Some(quality.iter().sum::<f64>() / quality.len() as f64)
    };

    let mut verification_counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        *verification_counts
            .entry(record.verification_status.clone())
            .or_default() += 1;
    }

    // Records without a timestamp sort before any dated record; ties keep
    // the later record in input order.
    let latest = records
        .iter()
        .enumerate()
        .max_by_key(|(index, r)| (r.last_updated_at, *index))
        .map(|(_, r)| r);

    CompanySummary {
        company: records.first().map(|r| r.company.clone()),
        record_count: records.len(),
        metric_count: records.iter().map(|r| r.metrics.len()).sum(),
        years: available_years(records),
        categories,
        data_quality,
        verification_status: latest.map(|r| r.verification_status.clone()),
        verification_counts,
        last_updated_at: records.iter().filter_map(|r| r.last_updated_at).max(),
    }
}
