use serde::Serialize;

use super::names::{EDUCATION_FEMALE, EDUCATION_MALE, HOSPITAL_ATTENDEES};
use super::pool::{MetricKey, MetricPool};
use super::trend::Trend;

/// Community programme reach at the latest year. Missing counts are 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CsrSummary {
    pub year: Option<i32>,
    pub education_males: f64,
    pub education_females: f64,
    pub education_total: f64,
    pub hospital_attendees: f64,
    pub male_education_trend: Trend,
}

fn count(pool: &MetricPool<'_>, key: MetricKey) -> f64 {
    pool.latest(key).and_then(|v| v.numeric_value).unwrap_or(0.0)
}

pub fn csr(pool: &MetricPool<'_>) -> CsrSummary {
    let education_males = count(pool, EDUCATION_MALE);
    let education_females = count(pool, EDUCATION_FEMALE);

    CsrSummary {
        year: pool.latest_year(),
        education_males,
        education_females,
        education_total: education_males + education_females,
        hospital_attendees: count(pool, HOSPITAL_ATTENDEES),
        male_education_trend: pool.trend(EDUCATION_MALE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{metric, record};

    #[test]
    fn test_csr_sums_attendance() {
        let records = vec![record(vec![
            metric(
                "Social",
                "Education Programme Attendance",
                Some("Male"),
                &[(2022, "300"), (2023, "1,200")],
            ),
            metric("Social", "Education Programme Attendance", Some("Female"), &[(2023, "800")]),
            metric("Social", "Hospital Attendees", None, &[(2023, "15000")]),
        ])];
        let summary = csr(&MetricPool::from_records(&records));
        assert_eq!(summary.year, Some(2023));
        assert_eq!(summary.education_males, 1200.0);
        assert_eq!(summary.education_females, 800.0);
        assert_eq!(summary.education_total, 2000.0);
        assert_eq!(summary.hospital_attendees, 15000.0);
        assert_eq!(summary.male_education_trend, Trend::Increasing);
    }

    #[test]
    fn test_csr_missing_values_default_to_zero() {
        let records = vec![record(vec![metric(
            "Social",
            "Education Programme Attendance",
            Some("Female"),
            &[(2023, "Not reported")],
        )])];
        let summary = csr(&MetricPool::from_records(&records));
        assert_eq!(summary.education_total, 0.0);
        assert_eq!(summary.hospital_attendees, 0.0);
        assert_eq!(summary.male_education_trend, Trend::Stable);
    }

    #[test]
    fn test_csr_empty_pool() {
        assert_eq!(csr(&MetricPool::from_records(&[])), CsrSummary::default());
    }
}
