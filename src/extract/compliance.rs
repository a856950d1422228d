use serde::Serialize;

use super::names::{
    ANTI_CORRUPTION, COMPLIANCE_INCIDENTS, ETHICS_CODE, IFRS_DISCLOSURE, SUPPLIER_CODE,
    WHISTLEBLOWING,
};
use super::pool::MetricPool;
use crate::model::answer::normalize;
use crate::model::Answer;

/// Ethics and compliance facts at the latest year. Every field is `None`
/// when the metric was not reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComplianceSummary {
    pub year: Option<i32>,
    pub ethics_code_in_place: Option<bool>,
    pub anti_corruption_policy: Option<bool>,
    pub whistleblowing_mechanism: Option<String>,
    pub compliance_incidents: Option<String>,
    /// Incident count read from `compliance_incidents`
    pub incident_count: Option<u32>,
    pub supplier_code_in_place: Option<bool>,
    pub ifrs_status: Option<String>,
    /// Whether `ifrs_status` states alignment with IFRS S1/S2
    pub ifrs_aligned: bool,
}

impl ComplianceSummary {
    /// Whistleblowing channel described and not a "not reported" sentinel.
    pub fn has_whistleblowing(&self) -> bool {
        self.whistleblowing_mechanism
            .as_deref()
            .is_some_and(|text| Answer::decode(text) != Answer::NotReported)
    }

    /// Zero-incident check on the reported text: any `0` digit counts, so
    /// "0 incidents" and "10 incidents" both pass.
    pub fn reports_zero_incidents(&self) -> bool {
        self.compliance_incidents
            .as_deref()
            .is_some_and(|text| text.contains('0'))
    }
}

/// Read an incident count from text such as `"0 incidents"` or `"None"`.
pub fn parse_incident_count(text: &str) -> Option<u32> {
    let normalized = normalize(text);
    if matches!(normalized.as_str(), "none" | "zero" | "nil")
        || normalized.starts_with("no incident")
    {
        return Some(0);
    }
    let digits: String = normalized
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Whether an IFRS disclosure status claims alignment. Negated statements
/// ("No alignment", "Not aligned") do not count.
pub fn states_ifrs_alignment(status: &str) -> bool {
    let normalized = normalize(status);
    let negated = normalized.starts_with("no ")
        || normalized.starts_with("not ")
        || normalized.contains("non-align")
        || normalized.contains("misalign")
        || normalized.contains("not aligned")
        || normalized.contains("no alignment");
    !negated && (normalized.contains("alignment") || normalized.contains("aligned"))
}

pub fn compliance(pool: &MetricPool<'_>) -> ComplianceSummary {
    let ethics = pool.latest(ETHICS_CODE);
    let anti_corruption = pool.latest(ANTI_CORRUPTION);
    let supplier_code = pool.latest(SUPPLIER_CODE);
    let incidents = pool.latest(COMPLIANCE_INCIDENTS);
    let ifrs_status = pool.latest_text(IFRS_DISCLOSURE);

    let incident_count = incidents.and_then(|v| {
        v.numeric_value
            .filter(|n| *n >= 0.0 && n.fract() == 0.0)
            .map(|n| n as u32)
            .or_else(|| parse_incident_count(&v.raw_value))
    });

    ComplianceSummary {
        year: pool.latest_year(),
        ethics_code_in_place: ethics.map(|v| v.answer.is_in_place()),
        anti_corruption_policy: anti_corruption.map(|v| v.answer.is_yes()),
        whistleblowing_mechanism: pool.latest_text(WHISTLEBLOWING),
        compliance_incidents: incidents.map(|v| v.raw_value.clone()),
        incident_count,
        supplier_code_in_place: supplier_code.map(|v| v.answer.is_in_place()),
        ifrs_aligned: ifrs_status.as_deref().is_some_and(states_ifrs_alignment),
        ifrs_status,
    }
}
