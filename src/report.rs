use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::extract::{
    board_composition, committees, compliance, csr, key_metrics, remuneration, suppliers,
    BoardComposition, CommitteeSummary, ComplianceSummary, CsrSummary, KeyMetrics, MetricPool,
    RemunerationSummary, SupplierSummary,
};
use crate::grouping::{
    group_by_category, group_by_sub_category, group_by_year, CategoryBucket, SubCategory,
    YearlyBuckets,
};
use crate::model::{ingest, DataRecord, IngestError, RawDataRecord};
use crate::scoring::{
    board_independence_score, calculate_score, compliance_score, csr_impact_score, ScoreResult,
    ScoringConfig,
};
use crate::summary::{company_summary, CompanySummary};

pub use crate::model::parse_records;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Groupings {
    pub by_category: BTreeMap<String, CategoryBucket>,
    pub by_sub_category: BTreeMap<SubCategory, CategoryBucket>,
    pub by_year: YearlyBuckets,
}

/// Output of every extractor for one company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extracted {
    pub board: BoardComposition,
    pub committees: CommitteeSummary,
    pub csr: CsrSummary,
    pub suppliers: SupplierSummary,
    pub compliance: ComplianceSummary,
    pub remuneration: RemunerationSummary,
}

/// Sub-domain scores computed outside the composite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scores {
    pub board_independence: f64,
    pub compliance: f64,
    pub csr_impact: f64,
    pub overall: ScoreResult,
}

/// Every derived view of one company's records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyReport {
    pub summary: CompanySummary,
    pub groupings: Groupings,
    pub extracted: Extracted,
    pub key_metrics: KeyMetrics,
    pub scores: Scores,
}

/// Validate raw records at the boundary and build the full report.
pub fn analyze(raw: Vec<RawDataRecord>, config: &ScoringConfig) -> Result<CompanyReport, IngestError> {
    let records = ingest(raw)?;
    Ok(build_report(&records, config))
}

/// Build the full report from already-validated records.
pub fn build_report(records: &[DataRecord], config: &ScoringConfig) -> CompanyReport {
    let pool = MetricPool::from_records(records);
    debug!(
        metrics = pool.metrics().len(),
        latest_year = ?pool.latest_year(),
        "building company report"
    );

    let extracted = Extracted {
        board: board_composition(&pool),
        committees: committees(&pool),
        csr: csr(&pool),
        suppliers: suppliers(&pool),
        compliance: compliance(&pool),
        remuneration: remuneration(&pool),
    };

    let scores = Scores {
        board_independence: board_independence_score(
            &extracted.board,
            &extracted.committees,
            &config.board(),
        ),
        compliance: compliance_score(&extracted.compliance, &config.compliance()),
        csr_impact: csr_impact_score(&extracted.csr, &config.csr()),
        overall: calculate_score(&pool, config),
    };

    CompanyReport {
        summary: company_summary(records),
        groupings: Groupings {
            by_category: group_by_category(records),
            by_sub_category: group_by_sub_category(records),
            by_year: group_by_year(records),
        },
        key_metrics: key_metrics(&pool),
        extracted,
        scores,
    }
}
