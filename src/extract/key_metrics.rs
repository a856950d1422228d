use serde::Serialize;
use std::collections::BTreeMap;

use super::board::board_composition;
use super::committees::committees;
use super::compliance::compliance;
use super::csr::csr;
use super::pool::MetricPool;
use super::remuneration::remuneration;
use super::suppliers::suppliers;
use super::trend::Trend;

/// Flat dashboard view over all six extractors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeyMetrics {
    pub latest_year: Option<i32>,

    pub board_size: Option<String>,
    pub board_size_trend: Trend,
    pub board_meetings: Option<f64>,
    pub board_meetings_trend: Trend,

    /// Committee label -> independent non-executive share, as reported
    pub independent_directors: BTreeMap<String, Option<String>>,

    pub education_attendance: f64,
    pub hospital_attendees: f64,

    pub local_procurement: Option<String>,
    pub foreign_procurement: Option<String>,
    pub total_procurement: Option<f64>,
    pub supplier_count: Option<f64>,
    pub supplier_trend: Trend,

    pub ethics_code_in_place: bool,
    pub anti_corruption_policy: bool,
    pub whistleblowing_mechanism: Option<String>,
    pub compliance_incidents: Option<String>,
    pub ifrs_status: Option<String>,

    pub remuneration_disclosure: Option<String>,
    pub esg_linked_pay: bool,
}

pub fn key_metrics(pool: &MetricPool<'_>) -> KeyMetrics {
    let board = board_composition(pool);
    let committees = committees(pool);
    let csr = csr(pool);
    let suppliers = suppliers(pool);
    let compliance = compliance(pool);
    let remuneration = remuneration(pool);

    KeyMetrics {
        latest_year: pool.latest_year(),
        board_size: board.size.value,
        board_size_trend: board.size.trend,
        board_meetings: board.meetings.value,
        board_meetings_trend: board.meetings.trend,
        independent_directors: committees
            .committees
            .into_iter()
            .map(|c| (c.committee.label().to_string(), c.independent_non_executive))
            .collect(),
        education_attendance: csr.education_total,
        hospital_attendees: csr.hospital_attendees,
        local_procurement: suppliers.local_spend,
        foreign_procurement: suppliers.foreign_spend,
        total_procurement: suppliers.total_spend,
        supplier_count: suppliers.supplier_count.value,
        supplier_trend: suppliers.supplier_count.trend,
        ethics_code_in_place: compliance.ethics_code_in_place.unwrap_or(false),
        anti_corruption_policy: compliance.anti_corruption_policy.unwrap_or(false),
        whistleblowing_mechanism: compliance.whistleblowing_mechanism,
        compliance_incidents: compliance.compliance_incidents,
        ifrs_status: compliance.ifrs_status,
        remuneration_disclosure: remuneration.disclosure_status,
        esg_linked_pay: remuneration.esg_linked_pay.unwrap_or(false),
    }
}
