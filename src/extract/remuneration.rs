use serde::Serialize;

use super::names::{ESG_LINKED_PAY, REMUNERATION_DISCLOSURE};
use super::pool::MetricPool;
use crate::model::answer::normalize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RemunerationSummary {
    pub year: Option<i32>,
    pub disclosure_status: Option<String>,
    pub esg_linked_pay: Option<bool>,
}

impl RemunerationSummary {
    pub fn fully_disclosed(&self) -> bool {
        self.disclosure_status
            .as_deref()
            .is_some_and(|status| normalize(status) == "fully disclosed")
    }
}

pub fn remuneration(pool: &MetricPool<'_>) -> RemunerationSummary {
    RemunerationSummary {
        year: pool.latest_year(),
        disclosure_status: pool.latest_text(REMUNERATION_DISCLOSURE),
        esg_linked_pay: pool.latest(ESG_LINKED_PAY).map(|v| v.answer.is_yes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{metric, record};

    #[test]
    fn test_remuneration() {
        let records = vec![record(vec![
            metric(
                "Governance",
                "Remuneration Disclosure",
                None,
                &[(2022, "Partially disclosed"), (2023, "Fully disclosed")],
            ),
            metric("Governance", "ESG-Linked Pay", None, &[(2023, "Yes")]),
        ])];
        let summary = remuneration(&MetricPool::from_records(&records));
        assert_eq!(summary.disclosure_status.as_deref(), Some("Fully disclosed"));
        assert!(summary.fully_disclosed());
        assert_eq!(summary.esg_linked_pay, Some(true));
    }

    #[test]
    fn test_partial_disclosure_is_not_full() {
        let records = vec![record(vec![metric(
            "Governance",
            "Remuneration Disclosure",
            None,
            &[(2023, "Partially disclosed")],
        )])];
        let summary = remuneration(&MetricPool::from_records(&records));
        assert!(!summary.fully_disclosed());
        assert_eq!(summary.esg_linked_pay, None);
    }
}
