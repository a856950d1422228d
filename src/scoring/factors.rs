use super::config::{BoardScoring, ComplianceWeights, CsrScoring, DisclosureWeights};
use crate::extract::{
    BoardComposition, CommitteeSummary, ComplianceSummary, CsrSummary, RemunerationSummary, Trend,
};
use crate::model::parse_percentage;

/// Board independence (0-100).
///
/// Mean of whichever terms are present: the independent non-executive share
/// of each committee (unparseable text such as "Not reported" and shares
/// outside 0-100% are skipped) and the board-size proximity term. No terms
/// at all scores 0.
pub fn board_independence_score(
    board: &BoardComposition,
    committees: &CommitteeSummary,
    config: &BoardScoring,
) -> f64 {
    let mut terms: Vec<f64> = committees
        .committees
        .iter()
        .filter_map(|c| c.independent_non_executive.as_deref())
        .filter_map(parse_percentage)
        .filter(|share| (0.0..=100.0).contains(share))
        .collect();

    if let Some(size) = board.size_count {
        let penalty = ((size - config.target_size).abs() * config.penalty_per_seat).min(100.0);
        terms.push(100.0 - penalty);
    }

    if terms.is_empty() {
        0.0
    } else {
        (terms.iter().sum::<f64>() / terms.len() as f64).clamp(0.0, 100.0)
    }
}

/// Compliance checklist (0-100).
///
/// A missing fact earns nothing but still counts toward the denominator, so
/// gaps in reporting lower the score.
pub fn compliance_score(compliance: &ComplianceSummary, weights: &ComplianceWeights) -> f64 {
    let checks = [
        (compliance.ethics_code_in_place == Some(true), weights.ethics_code),
        (compliance.anti_corruption_policy == Some(true), weights.anti_corruption),
        (compliance.has_whistleblowing(), weights.whistleblowing),
        (compliance.reports_zero_incidents(), weights.zero_incidents),
        (compliance.supplier_code_in_place == Some(true), weights.supplier_code),
        (compliance.ifrs_aligned, weights.ifrs_alignment),
    ];
    // fold from +0.0: an empty f64 sum is -0.0
    let earned = checks
        .iter()
        .filter(|(met, _)| *met)
        .fold(0.0, |acc, (_, w)| acc + w);

    let total = weights.total();
    if total > 0.0 {
        100.0 * earned / total
    } else {
        0.0
    }
}

/// CSR impact (0-100): education reach plus hospital reach, each capped,
/// with a bonus when male education attendance grew.
pub fn csr_impact_score(csr: &CsrSummary, config: &CsrScoring) -> f64 {
    let education = (csr.education_total / config.education_per * config.education_points)
        .min(config.term_cap)
        .max(0.0);
    let health = (csr.hospital_attendees / config.hospital_per * config.hospital_points)
        .min(config.term_cap)
        .max(0.0);
    let bonus = if csr.male_education_trend == Trend::Increasing {
        config.trend_bonus
    } else {
        0.0
    };

    (education + health + bonus).min(config.score_cap).clamp(0.0, 100.0)
}

/// Disclosure quality (0-100): full remuneration disclosure, ESG-linked pay
/// and IFRS alignment each add their points.
pub fn disclosure_score(
    remuneration: &RemunerationSummary,
    compliance: &ComplianceSummary,
    weights: &DisclosureWeights,
) -> f64 {
    let mut score = 0.0;
    if remuneration.fully_disclosed() {
        score += weights.full_remuneration_disclosure;
    }
    if remuneration.esg_linked_pay == Some(true) {
        score += weights.esg_linked_pay;
    }
    if compliance.ifrs_aligned {
        score += weights.ifrs_alignment;
    }
    score
}
