use serde::Serialize;

use super::names::{FOREIGN_PROCUREMENT, LOCAL_PROCUREMENT, SUPPLIER_COUNT};
use super::pool::{MetricPool, Tracked};
use crate::model::parse_amount;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SupplierSummary {
    pub year: Option<i32>,
    /// Spend with local suppliers, as reported
    pub local_spend: Option<String>,
    /// Spend with foreign suppliers, as reported
    pub foreign_spend: Option<String>,
    /// Sum of both spends; only set when both amounts parse
    pub total_spend: Option<f64>,
    pub supplier_count: Tracked<f64>,
}

pub fn suppliers(pool: &MetricPool<'_>) -> SupplierSummary {
    let local_spend = pool.latest_text(LOCAL_PROCUREMENT);
    let foreign_spend = pool.latest_text(FOREIGN_PROCUREMENT);

    let total_spend = match (
        local_spend.as_deref().and_then(parse_amount),
        foreign_spend.as_deref().and_then(parse_amount),
    ) {
        (Some(local), Some(foreign)) => Some(local + foreign),
        _ => None,
    };

    SupplierSummary {
        year: pool.latest_year(),
        local_spend,
        foreign_spend,
        total_spend,
        supplier_count: pool.tracked_number(SUPPLIER_COUNT),
    }
}
