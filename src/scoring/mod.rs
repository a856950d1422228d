pub mod config;
pub mod engine;
pub mod factors;
pub mod grade;
pub mod validation;

pub use config::*;
pub use engine::{calculate_score, ComponentScore, ScoreBreakdown, ScoreResult, ScoreStatus};
pub use factors::{
    board_independence_score, compliance_score, csr_impact_score, disclosure_score,
};
pub use grade::Grade;
pub use validation::validate_scoring;
