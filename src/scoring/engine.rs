use serde::Serialize;
use tracing::debug;

use super::config::ScoringConfig;
use super::factors::{
    board_independence_score, compliance_score, csr_impact_score, disclosure_score,
};
use super::grade::Grade;
use crate::extract::{board_composition, committees, compliance, csr, remuneration, MetricPool};

/// Whether a component is computed from reported data or a stand-in value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    Measured,
    /// Not modeled yet; the value is a fixed placeholder
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentScore {
    pub score: f64,
    pub status: ScoreStatus,
}

impl ComponentScore {
    pub fn measured(score: f64) -> Self {
        Self {
            score,
            status: ScoreStatus::Measured,
        }
    }

    pub fn placeholder(score: f64) -> Self {
        Self {
            score,
            status: ScoreStatus::Placeholder,
        }
    }
}

/// The five sub-scores behind a composite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub board_independence: ComponentScore,
    pub committee_effectiveness: ComponentScore,
    pub csr_impact: ComponentScore,
    pub compliance: ComponentScore,
    pub disclosure: ComponentScore,
}

impl ScoreBreakdown {
    /// Components with display labels, in composite order.
    pub fn components(&self) -> [(&'static str, ComponentScore); 5] {
        [
            ("Board Independence", self.board_independence),
            ("Committee Effectiveness", self.committee_effectiveness),
            ("CSR Impact", self.csr_impact),
            ("Compliance", self.compliance),
            ("Disclosure", self.disclosure),
        ]
    }

    fn mean(&self) -> f64 {
        let components = self.components();
        components.iter().map(|(_, c)| c.score).sum::<f64>() / components.len() as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Rounded composite, 0-100
    pub score: u32,
    pub grade: Grade,
    pub breakdown: ScoreBreakdown,
}

/// Overall governance score with grade and breakdown.
///
/// A pool with nothing reported at its latest year scores 0 (grade F) rather
/// than being lifted by the committee placeholder.
pub fn calculate_score(pool: &MetricPool<'_>, config: &ScoringConfig) -> ScoreResult {
    let board = board_composition(pool);
    let committees = committees(pool);
    let csr = csr(pool);
    let compliance = compliance(pool);
    let remuneration = remuneration(pool);

    let breakdown = ScoreBreakdown {
        board_independence: ComponentScore::measured(board_independence_score(
            &board,
            &committees,
            &config.board(),
        )),
        committee_effectiveness: ComponentScore::placeholder(config.committee_effectiveness()),
        csr_impact: ComponentScore::measured(csr_impact_score(&csr, &config.csr())),
        compliance: ComponentScore::measured(compliance_score(&compliance, &config.compliance())),
        disclosure: ComponentScore::measured(disclosure_score(
            &remuneration,
            &compliance,
            &config.disclosure(),
        )),
    };

    let score = if pool.is_empty() {
        0
    } else {
        breakdown.mean().round().clamp(0.0, 100.0) as u32
    };
    let grade = config.grades().grade(score as f64);

    debug!(score, grade = %grade, latest_year = ?pool.latest_year(), "calculated governance score");

    ScoreResult {
        score,
        grade,
        breakdown,
    }
}
