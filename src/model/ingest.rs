use thiserror::Error;
use tracing::{debug, warn};

use super::answer::Answer;
use super::money::parse_plain_number;
use super::record::{DataRecord, Metric, MetricValue};
use super::wire::{RawDataRecord, RawMetric, RawMetricValue};

/// Rejection of input before it reaches the grouping engine.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("record {index} has no company")]
    MissingCompany { index: usize },

    #[error("record {index} has no metrics array")]
    MissingMetrics { index: usize },

    #[error("records are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a JSON array of records as exported by the backend.
pub fn parse_records(json: &str) -> Result<Vec<RawDataRecord>, IngestError> {
    Ok(serde_json::from_str(json)?)
}

/// Validate raw records and convert them into domain records.
///
/// A record without a company or without a metrics array fails the whole
/// batch, since it would corrupt every aggregate computed from it.
pub fn ingest(raw: Vec<RawDataRecord>) -> Result<Vec<DataRecord>, IngestError> {
    let mut records = Vec::with_capacity(raw.len());
    for (index, record) in raw.into_iter().enumerate() {
        let company = record.company.ok_or(IngestError::MissingCompany { index })?;
        let metrics = record.metrics.ok_or(IngestError::MissingMetrics { index })?;

        records.push(DataRecord {
            company,
            reporting_period_start: record.reporting_period_start,
            reporting_period_end: record.reporting_period_end,
            metrics: metrics.into_iter().map(convert_metric).collect(),
            data_quality_score: record.data_quality_score.filter(|v| v.is_finite()),
            verification_status: record
                .verification_status
                .unwrap_or_else(|| "unverified".to_string()),
            last_updated_at: record.last_updated_at,
        });
    }
    debug!(records = records.len(), "ingested data records");
    Ok(records)
}

fn convert_metric(metric: RawMetric) -> Metric {
    let name = metric.name;
    let values = metric
        .values
        .into_iter()
        .filter_map(|value| {
            if !(1000..=9999).contains(&value.year) {
                warn!(metric = %name, year = value.year, "dropping value with invalid year");
                return None;
            }
            Some(convert_value(value))
        })
        .collect();

    Metric {
        category: metric.category,
        name,
        unit: metric.unit.filter(|u| !u.trim().is_empty()),
        description: metric.description,
        values,
        is_active: metric.is_active,
    }
}

fn convert_value(value: RawMetricValue) -> MetricValue {
    let numeric_value = value
        .numeric_value
        .filter(|v| v.is_finite())
        .or_else(|| parse_plain_number(&value.raw_value));
    MetricValue {
        year: value.year,
        answer: Answer::decode(&value.raw_value),
        raw_value: value.raw_value,
        numeric_value,
        source_notes: value.source_notes.unwrap_or_default(),
        recorded_at: value.recorded_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CompanyRef;

    fn raw_record(company: bool, metrics: bool) -> RawDataRecord {
        RawDataRecord {
            company: company.then(|| CompanyRef {
                name: "Acme Tea".to_string(),
                ..Default::default()
            }),
            metrics: metrics.then(|| {
                vec![RawMetric {
                    category: "Governance".to_string(),
                    name: "Board Size".to_string(),
                    unit: Some("  ".to_string()),
                    description: None,
                    values: vec![
                        RawMetricValue {
                            year: 2023,
                            raw_value: "11".to_string(),
                            ..Default::default()
                        },
                        RawMetricValue {
                            year: 23,
                            raw_value: "9".to_string(),
                            ..Default::default()
                        },
                    ],
                    is_active: true,
                }]
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_ingest_valid_record() {
        let records = ingest(vec![raw_record(true, true)]).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].verification_status, "unverified");

        let metric = &records[0].metrics[0];
        assert_eq!(metric.unit, None);
        // Two-digit year dropped
        assert_eq!(metric.values.len(), 1);
        assert_eq!(metric.values[0].numeric_value, Some(11.0));
    }

    #[test]
    fn test_ingest_rejects_missing_company() {
        let err = ingest(vec![raw_record(true, true), raw_record(false, true)]).unwrap_err();
        assert!(matches!(err, IngestError::MissingCompany { index: 1 }));
    }

    #[test]
    fn test_ingest_rejects_missing_metrics() {
        let err = ingest(vec![raw_record(true, false)]).unwrap_err();
        assert!(matches!(err, IngestError::MissingMetrics { index: 0 }));
        assert_eq!(err.to_string(), "record 0 has no metrics array");
    }

    #[test]
    fn test_ingest_accepts_empty_metrics() {
        let mut record = raw_record(true, true);
        record.metrics = Some(vec![]);
        let records = ingest(vec![record]).unwrap();
        assert!(records[0].metrics.is_empty());
    }

    #[test]
    fn test_parse_records_invalid_json() {
        let err = parse_records("{not json").unwrap_err();
        assert!(matches!(err, IngestError::Json(_)));
    }

    #[test]
    fn test_explicit_numeric_value_wins() {
        let value = convert_value(RawMetricValue {
            year: 2023,
            raw_value: "about eleven".to_string(),
            numeric_value: Some(11.0),
            ..Default::default()
        });
        assert_eq!(value.numeric_value, Some(11.0));
        assert_eq!(value.answer, Answer::Other);
    }
}
