use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::record::CompanyRef;

/// A data record as exported by the backend, before boundary validation.
///
/// Every field is optional here so a malformed record can be reported with
/// its position instead of failing the whole document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDataRecord {
    #[serde(default)]
    pub company: Option<CompanyRef>,
    #[serde(default)]
    pub reporting_period_start: Option<i32>,
    #[serde(default)]
    pub reporting_period_end: Option<i32>,
    #[serde(default)]
    pub metrics: Option<Vec<RawMetric>>,
    #[serde(default)]
    pub data_quality_score: Option<f64>,
    #[serde(default)]
    pub verification_status: Option<String>,
    #[serde(default)]
    pub last_updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMetric {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub values: Vec<RawMetricValue>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMetricValue {
    pub year: i32,
    #[serde(default)]
    pub raw_value: String,
    #[serde(default)]
    pub numeric_value: Option<f64>,
    #[serde(default)]
    pub source_notes: Option<String>,
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let json = r#"{
            "company": {"name": "Acme Tea", "industry": "Agriculture", "country": "Kenya"},
            "reportingPeriodStart": 2022,
            "reportingPeriodEnd": 2023,
            "metrics": [{
                "category": "Governance",
                "name": "Board Size",
                "unit": null,
                "values": [{"year": 2023, "rawValue": "11", "numericValue": 11,
                            "sourceNotes": "Annual report p.4",
                            "recordedAt": "2024-01-15T10:00:00Z"}],
                "isActive": true
            }],
            "dataQualityScore": 0.85,
            "verificationStatus": "verified",
            "lastUpdatedAt": "2024-02-01T08:30:00Z"
        }"#;
        let record: RawDataRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.company.unwrap().name, "Acme Tea");
        let metrics = record.metrics.unwrap();
        assert_eq!(metrics[0].values[0].numeric_value, Some(11.0));
        assert_eq!(record.data_quality_score, Some(0.85));
        assert!(record.last_updated_at.is_some());
    }

    #[test]
    fn test_parse_record_missing_company_and_metrics() {
        let record: RawDataRecord = serde_json::from_str(r#"{"verificationStatus": "pending"}"#).unwrap();
        assert!(record.company.is_none());
        assert!(record.metrics.is_none());
    }

    #[test]
    fn test_metric_defaults_active() {
        let metric: RawMetric =
            serde_json::from_str(r#"{"category": "Social", "name": "Hospital Attendees"}"#).unwrap();
        assert!(metric.is_active);
        assert!(metric.values.is_empty());
    }
}
