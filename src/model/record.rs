use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::answer::Answer;

/// Identity and descriptive fields of a reporting company.
///
/// The engine never inspects these beyond carrying them into summaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// Opaque geometry (typically GeoJSON)
    #[serde(default)]
    pub area_of_interest: Option<serde_json::Value>,
}

/// One observation of a metric for one reporting year.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricValue {
    pub year: i32,
    pub raw_value: String,
    pub numeric_value: Option<f64>,
    pub source_notes: String,
    pub recorded_at: Option<DateTime<Utc>>,
    /// Sentinel decoding of `raw_value`, done once at ingestion
    pub answer: Answer,
}

impl MetricValue {
    pub fn new(year: i32, raw_value: impl Into<String>) -> Self {
        let raw_value = raw_value.into();
        let numeric_value = super::money::parse_plain_number(&raw_value);
        let answer = Answer::decode(&raw_value);
        Self {
            year,
            raw_value,
            numeric_value,
            source_notes: String::new(),
            recorded_at: None,
            answer,
        }
    }
}

/// A named, categorized measurement reported over one or more years.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub category: String,
    pub name: String,
    pub unit: Option<String>,
    pub description: Option<String>,
    /// Reporting order, not necessarily chronological
    pub values: Vec<MetricValue>,
    pub is_active: bool,
}

impl Metric {
    /// Copy of this metric carrying only `value`.
    pub fn with_single_value(&self, value: &MetricValue) -> Self {
        Self {
            category: self.category.clone(),
            name: self.name.clone(),
            unit: self.unit.clone(),
            description: self.description.clone(),
            values: vec![value.clone()],
            is_active: self.is_active,
        }
    }

    /// Case-insensitive name match, with an optional unit qualifier.
    pub fn matches(&self, name: &str, unit: Option<&str>) -> bool {
        if !self.name.trim().eq_ignore_ascii_case(name) {
            return false;
        }
        match unit {
            None => true,
            Some(wanted) => self
                .unit
                .as_deref()
                .is_some_and(|u| u.trim().eq_ignore_ascii_case(wanted)),
        }
    }
}

/// One reporting submission for a company.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRecord {
    pub company: CompanyRef,
    pub reporting_period_start: Option<i32>,
    pub reporting_period_end: Option<i32>,
    pub metrics: Vec<Metric>,
    pub data_quality_score: Option<f64>,
    pub verification_status: String,
    pub last_updated_at: Option<DateTime<Utc>>,
}
