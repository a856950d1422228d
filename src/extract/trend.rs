use serde::{Deserialize, Serialize};

/// Direction of a metric between its two most recent reporting years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    #[default]
    Stable,
}

impl Trend {
    /// Compare the latest reading with the previous one. Anything that is
    /// not two comparable numbers is `Stable`.
    pub fn between(latest: Option<f64>, previous: Option<f64>) -> Self {
        match (latest, previous) {
            (Some(latest), Some(previous)) if latest > previous => Trend::Increasing,
            (Some(latest), Some(previous)) if latest < previous => Trend::Decreasing,
            _ => Trend::Stable,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
        }
    }
}
