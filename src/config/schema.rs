use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

impl Config {
    /// Scoring parameters in effect: the configured ones or the defaults.
    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }
}
