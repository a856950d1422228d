use serde::{Deserialize, Serialize};

/// Main scoring configuration.
///
/// Every section is optional; a missing section uses the built-in defaults,
/// and a section that sets only some keys keeps the defaults for the rest.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   board:
///     target_size: 9
///   compliance:
///     supplier_code: 15
///     ifrs_alignment: 5
///   grades: { a: 85, b: 75, c: 65, d: 55 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Board-size proximity term of the independence score
    #[serde(default)]
    pub board: Option<BoardScoring>,

    /// Checklist weights of the compliance score
    #[serde(default)]
    pub compliance: Option<ComplianceWeights>,

    /// Reach scaling of the CSR impact score
    #[serde(default)]
    pub csr: Option<CsrScoring>,

    /// Points of the disclosure component of the composite
    #[serde(default)]
    pub disclosure: Option<DisclosureWeights>,

    /// Stand-in value for committee effectiveness, which is not modeled yet
    #[serde(default)]
    pub committee_effectiveness: Option<f64>,

    /// Lower bounds of the letter grades
    #[serde(default)]
    pub grades: Option<GradeThresholds>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            board: Some(BoardScoring::default()),
            compliance: Some(ComplianceWeights::default()),
            csr: Some(CsrScoring::default()),
            disclosure: Some(DisclosureWeights::default()),
            committee_effectiveness: Some(DEFAULT_COMMITTEE_EFFECTIVENESS),
            grades: Some(GradeThresholds::default()),
        }
    }
}

pub const DEFAULT_COMMITTEE_EFFECTIVENESS: f64 = 75.0;

impl ScoringConfig {
    pub fn board(&self) -> BoardScoring {
        self.board.unwrap_or_default()
    }

    pub fn compliance(&self) -> ComplianceWeights {
        self.compliance.unwrap_or_default()
    }

    pub fn csr(&self) -> CsrScoring {
        self.csr.unwrap_or_default()
    }

    pub fn disclosure(&self) -> DisclosureWeights {
        self.disclosure.unwrap_or_default()
    }

    pub fn committee_effectiveness(&self) -> f64 {
        self.committee_effectiveness
            .unwrap_or(DEFAULT_COMMITTEE_EFFECTIVENESS)
    }

    pub fn grades(&self) -> GradeThresholds {
        self.grades.unwrap_or_default()
    }
}

/// Board-size proximity: `100 - min(100, |size - target_size| * penalty_per_seat)`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BoardScoring {
    pub target_size: f64,
    pub penalty_per_seat: f64,
}

impl Default for BoardScoring {
    fn default() -> Self {
        Self {
            target_size: 10.0,
            penalty_per_seat: 10.0,
        }
    }
}

/// Points earned per satisfied compliance check.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ComplianceWeights {
    pub ethics_code: f64,
    pub anti_corruption: f64,
    pub whistleblowing: f64,
    pub zero_incidents: f64,
    pub supplier_code: f64,
    pub ifrs_alignment: f64,
}

impl ComplianceWeights {
    pub fn total(&self) -> f64 {
        self.ethics_code
            + self.anti_corruption
            + self.whistleblowing
            + self.zero_incidents
            + self.supplier_code
            + self.ifrs_alignment
    }
}

impl Default for ComplianceWeights {
    fn default() -> Self {
        Self {
            ethics_code: 20.0,
            anti_corruption: 20.0,
            whistleblowing: 20.0,
            zero_incidents: 20.0,
            supplier_code: 10.0,
            ifrs_alignment: 10.0,
        }
    }
}

/// Each term earns `points` per `per` attendees, up to `term_cap`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CsrScoring {
    pub education_per: f64,
    pub education_points: f64,
    pub hospital_per: f64,
    pub hospital_points: f64,
    pub term_cap: f64,
    /// Added when male education attendance grew year over year
    pub trend_bonus: f64,
    pub score_cap: f64,
}

impl Default for CsrScoring {
    fn default() -> Self {
        Self {
            education_per: 1_000.0,
            education_points: 5.0,
            hospital_per: 10_000.0,
            hospital_points: 5.0,
            term_cap: 50.0,
            trend_bonus: 5.0,
            score_cap: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DisclosureWeights {
    pub full_remuneration_disclosure: f64,
    pub esg_linked_pay: f64,
    pub ifrs_alignment: f64,
}

impl Default for DisclosureWeights {
    fn default() -> Self {
        Self {
            full_remuneration_disclosure: 50.0,
            esg_linked_pay: 30.0,
            ifrs_alignment: 20.0,
        }
    }
}

/// Inclusive lower bounds; anything below `d` is an F.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GradeThresholds {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            a: 90.0,
            b: 80.0,
            c: 70.0,
            d: 60.0,
        }
    }
}
