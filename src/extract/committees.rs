use serde::Serialize;

use super::names::{EXECUTIVE_DIRECTORS, INDEPENDENT_NON_EXECUTIVE_DIRECTORS, NON_EXECUTIVE_DIRECTORS};
use super::pool::{MetricKey, MetricPool};

/// Board committees whose composition is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Committee {
    AuditCompliance,
    RiskSustainability,
    RemunerationNominations,
    StakeholderEngagement,
}

impl Committee {
    pub const ALL: [Committee; 4] = [
        Committee::AuditCompliance,
        Committee::RiskSustainability,
        Committee::RemunerationNominations,
        Committee::StakeholderEngagement,
    ];

    /// Metric name the committee is reported under.
    pub fn metric_name(&self) -> &'static str {
        match self {
            Committee::AuditCompliance => "Audit & Compliance Committee",
            Committee::RiskSustainability => "Risk Management & Sustainability Committee",
            Committee::RemunerationNominations => "Remunerations & Nominations Committee",
            Committee::StakeholderEngagement => "Stakeholder Engagement Committee",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Committee::AuditCompliance => "Audit & Compliance",
            Committee::RiskSustainability => "Risk Management & Sustainability",
            Committee::RemunerationNominations => "Remunerations & Nominations",
            Committee::StakeholderEngagement => "Stakeholder Engagement",
        }
    }
}

/// Share of a committee's seats held by each class of director.
///
/// `None` means the class was not reported at all, which is different from
/// a reported `"0%"`. Text is kept as reported (including "Not reported").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitteeComposition {
    pub committee: Committee,
    pub executive: Option<String>,
    pub non_executive: Option<String>,
    pub independent_non_executive: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitteeSummary {
    pub year: Option<i32>,
    pub committees: Vec<CommitteeComposition>,
}

impl CommitteeSummary {
    pub fn get(&self, committee: Committee) -> Option<&CommitteeComposition> {
        self.committees.iter().find(|c| c.committee == committee)
    }
}

pub fn committees(pool: &MetricPool<'_>) -> CommitteeSummary {
    let committees = Committee::ALL
        .iter()
        .map(|committee| {
            let share = |unit: &'static str| {
                pool.latest_text(MetricKey::with_unit(committee.metric_name(), unit))
            };
            CommitteeComposition {
                committee: *committee,
                executive: share(EXECUTIVE_DIRECTORS),
                non_executive: share(NON_EXECUTIVE_DIRECTORS),
                independent_non_executive: share(INDEPENDENT_NON_EXECUTIVE_DIRECTORS),
            }
        })
        .collect();

    CommitteeSummary {
        year: pool.latest_year(),
        committees,
    }
}
