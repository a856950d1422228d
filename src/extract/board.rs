use serde::Serialize;
use tracing::debug;

use super::names::{BOARD_MEETINGS, BOARD_SIZE};
use super::pool::{MetricPool, Tracked};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoardComposition {
    /// Board size as reported (usually a plain number)
    pub size: Tracked<String>,
    /// Numeric board size at the same year, from the ingested numeric value
    pub size_count: Option<f64>,
    /// Number of board meetings held in the year
    pub meetings: Tracked<f64>,
}

pub fn board_size(pool: &MetricPool<'_>) -> Tracked<String> {
    pool.tracked_text(BOARD_SIZE)
}

pub fn board_meetings(pool: &MetricPool<'_>) -> Tracked<f64> {
    pool.tracked_number(BOARD_MEETINGS)
}

pub fn board_composition(pool: &MetricPool<'_>) -> BoardComposition {
    let composition = BoardComposition {
        size: board_size(pool),
        size_count: pool.tracked_number(BOARD_SIZE).value,
        meetings: board_meetings(pool),
    };
    debug!(
        size = ?composition.size.value,
        meetings = ?composition.meetings.value,
        "extracted board composition"
    );
    composition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Trend;
    use crate::model::fixtures::{metric, record};

    #[test]
    fn test_board_size_trend_increasing() {
        let records = vec![record(vec![metric(
            "Governance",
            "Board Size",
            None,
            &[(2022, "9"), (2023, "11")],
        )])];
        let size = board_size(&MetricPool::from_records(&records));
        assert_eq!(size.trend, Trend::Increasing);
        assert_eq!(size.value.as_deref(), Some("11"));
        assert_eq!(size.year, Some(2023));
    }

    #[test]
    fn test_board_meetings() {
        let records = vec![record(vec![
            metric(
                "Governance",
                "Board Attendance",
                Some("Number of meetings"),
                &[(2023, "4"), (2022, "6")],
            ),
            metric("Governance", "Board Attendance", Some("Attendance rate"), &[(2023, "92%")]),
        ])];
        let meetings = board_meetings(&MetricPool::from_records(&records));
        assert_eq!(meetings.value, Some(4.0));
        assert_eq!(meetings.trend, Trend::Decreasing);
    }

    #[test]
    fn test_missing_board_metrics_default() {
        let records = vec![record(vec![])];
        let board = board_composition(&MetricPool::from_records(&records));
        assert_eq!(board, BoardComposition::default());
        assert_eq!(board.size_count, None);
    }

    #[test]
    fn test_size_count() {
        let records = vec![record(vec![metric("Governance", "Board Size", None, &[(2023, "12")])])];
        let board = board_composition(&MetricPool::from_records(&records));
        assert_eq!(board.size_count, Some(12.0));
    }

    #[test]
    fn test_size_count_uses_ingested_numeric_value() {
        let mut size = metric("Governance", "Board Size", None, &[(2023, "11 members")]);
        size.values[0].numeric_value = Some(11.0);
        let records = vec![record(vec![size])];
        let board = board_composition(&MetricPool::from_records(&records));
        assert_eq!(board.size.value.as_deref(), Some("11 members"));
        assert_eq!(board.size_count, Some(11.0));
    }
}
