use owo_colors::OwoColorize;
use std::collections::BTreeMap;
use std::io::IsTerminal;

use crate::extract::{KeyMetrics, Trend};
use crate::grouping::{CategoryBucket, SubCategory, YearlyBuckets};
use crate::report::CompanyReport;
use crate::scoring::{Grade, ScoreResult, ScoreStatus};
use crate::summary::CompanySummary;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

fn heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.bold().underline().to_string()
    } else {
        text.to_string()
    }
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// Format a count in compact notation (1.5k, 2.3M, 847)
pub fn format_count(value: f64) -> String {
    let formatted = if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    };

    // Trim trailing .0 (e.g., "1.0k" -> "1k")
    formatted.replace(".0M", "M").replace(".0k", "k")
}

fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Increasing => "↑",
        Trend::Decreasing => "↓",
        Trend::Stable => "→",
    }
}

fn format_grade(grade: Grade, use_colors: bool) -> String {
    if !use_colors {
        return grade.letter().to_string();
    }
    match grade {
        Grade::A | Grade::B => grade.letter().green().bold().to_string(),
        Grade::C => grade.letter().yellow().bold().to_string(),
        Grade::D | Grade::F => grade.letter().red().bold().to_string(),
    }
}

pub fn format_years(years: &[i32]) -> String {
    if years.is_empty() {
        return "No reporting years found.".to_string();
    }
    years
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_summary(summary: &CompanySummary, use_colors: bool) -> String {
    let name = summary
        .company
        .as_ref()
        .map(|c| c.name.as_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("(unknown company)");

    let mut lines = vec![heading(name, use_colors)];
    if let Some(company) = &summary.company {
        let location = [company.industry.as_deref(), company.country.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ");
        if !location.is_empty() {
            lines.push(format!("  {}", location));
        }
    }
    lines.push(format!(
        "  Records: {}  Metrics: {}  Years: {}",
        summary.record_count,
        summary.metric_count,
        format_years(&summary.years)
    ));
    lines.push(format!(
        "  Data quality: {}",
        summary
            .data_quality
            .map(|q| format!("{:.2}", q))
            .unwrap_or_else(|| "-".to_string())
    ));
    lines.push(format!(
        "  Verification: {}",
        or_dash(summary.verification_status.as_deref())
    ));
    if let Some(updated) = summary.last_updated_at {
        lines.push(format!("  Last updated: {}", updated.format("%Y-%m-%d %H:%M UTC")));
    }

    if !summary.categories.is_empty() {
        lines.push(String::new());
        lines.push(heading("Categories", use_colors));
        for (category, rollup) in &summary.categories {
            let units = if rollup.units.is_empty() {
                String::new()
            } else {
                format!(
                    " [{}]",
                    rollup.units.iter().cloned().collect::<Vec<_>>().join(", ")
                )
            };
            lines.push(format!("  {:<24} {:>4}{}", category, rollup.count, units));
        }
    }

    lines.join("\n")
}

/// One line per group: label and metric count
pub fn format_category_groups(groups: &BTreeMap<String, CategoryBucket>) -> String {
    if groups.is_empty() {
        return "No metrics found.".to_string();
    }
    groups
        .iter()
        .map(|(label, bucket)| format!("{:<32} {:>4}", label, bucket.count))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_sub_category_groups(groups: &BTreeMap<SubCategory, CategoryBucket>) -> String {
    if groups.is_empty() {
        return "No metrics found.".to_string();
    }
    groups
        .iter()
        .map(|(label, bucket)| format!("{:<32} {:>4}", label.label(), bucket.count))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_year_groups(groups: &YearlyBuckets) -> String {
    if groups.is_empty() {
        return "No metrics found.".to_string();
    }
    let mut lines = Vec::new();
    for (year, categories) in groups {
        lines.push(year.to_string());
        for (category, metrics) in categories {
            lines.push(format!("  {:<30} {:>4}", category, metrics.len()));
        }
    }
    lines.join("\n")
}

pub fn format_key_metrics(metrics: &KeyMetrics, use_colors: bool) -> String {
    let year = metrics
        .latest_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "no data".to_string());
    let mut lines = vec![heading(&format!("Key metrics ({})", year), use_colors)];

    lines.push(format!(
        "  Board size: {} {}",
        or_dash(metrics.board_size.as_deref()),
        trend_arrow(metrics.board_size_trend)
    ));
    lines.push(format!(
        "  Board meetings: {} {}",
        metrics
            .board_meetings
            .map(format_count)
            .unwrap_or_else(|| "-".to_string()),
        trend_arrow(metrics.board_meetings_trend)
    ));
    for (committee, share) in &metrics.independent_directors {
        lines.push(format!(
            "  Independent NEDs, {}: {}",
            committee,
            or_dash(share.as_deref())
        ));
    }
    lines.push(format!(
        "  Education attendance: {}",
        format_count(metrics.education_attendance)
    ));
    lines.push(format!(
        "  Hospital attendees: {}",
        format_count(metrics.hospital_attendees)
    ));
    lines.push(format!(
        "  Procurement: local {} / foreign {} / total {}",
        or_dash(metrics.local_procurement.as_deref()),
        or_dash(metrics.foreign_procurement.as_deref()),
        metrics
            .total_procurement
            .map(format_count)
            .unwrap_or_else(|| "-".to_string())
    ));
    lines.push(format!(
        "  Suppliers: {} {}",
        metrics
            .supplier_count
            .map(format_count)
            .unwrap_or_else(|| "-".to_string()),
        trend_arrow(metrics.supplier_trend)
    ));
    lines.push(format!(
        "  Ethics code: {}  Anti-corruption: {}  ESG-linked pay: {}",
        yes_no(metrics.ethics_code_in_place),
        yes_no(metrics.anti_corruption_policy),
        yes_no(metrics.esg_linked_pay)
    ));
    lines.push(format!(
        "  Whistleblowing: {}",
        or_dash(metrics.whistleblowing_mechanism.as_deref())
    ));
    lines.push(format!(
        "  Compliance incidents: {}",
        or_dash(metrics.compliance_incidents.as_deref())
    ));
    lines.push(format!("  IFRS: {}", or_dash(metrics.ifrs_status.as_deref())));
    lines.push(format!(
        "  Remuneration disclosure: {}",
        or_dash(metrics.remuneration_disclosure.as_deref())
    ));

    lines.join("\n")
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Composite score, grade and the five components.
/// Placeholder components are marked with an asterisk.
pub fn format_score_result(result: &ScoreResult, use_colors: bool) -> String {
    let mut lines = vec![format!(
        "{} {} / 100  grade {}",
        heading("Governance score", use_colors),
        result.score,
        format_grade(result.grade, use_colors)
    )];

    let mut has_placeholder = false;
    for (label, component) in result.breakdown.components() {
        let marker = if component.status == ScoreStatus::Placeholder {
            has_placeholder = true;
            "*"
        } else {
            ""
        };
        lines.push(format!("  {:<24} {:>6.1}{}", label, component.score, marker));
    }
    if has_placeholder {
        let note = "  * not modeled yet, fixed placeholder value";
        lines.push(if use_colors {
            note.dimmed().to_string()
        } else {
            note.to_string()
        });
    }

    lines.join("\n")
}

pub fn format_report(report: &CompanyReport, use_colors: bool) -> String {
    [
        format_summary(&report.summary, use_colors),
        format_key_metrics(&report.key_metrics, use_colors),
        format!(
            "{}\n  Board independence {:.1}  Compliance {:.1}  CSR impact {:.1}",
            heading("Sub-domain scores", use_colors),
            report.scores.board_independence,
            report.scores.compliance,
            report.scores.csr_impact
        ),
        format_score_result(&report.scores.overall, use_colors),
    ]
    .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::MetricPool;
    use crate::model::fixtures::{metric, record};
    use crate::scoring::{calculate_score, ScoringConfig};
    use crate::summary::company_summary;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(847.0), "847");
        assert_eq!(format_count(1000.0), "1k");
        assert_eq!(format_count(1500.0), "1.5k");
        assert_eq!(format_count(2_300_000.0), "2.3M");
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(&[2021, 2023]), "2021, 2023");
        assert_eq!(format_years(&[]), "No reporting years found.");
    }

    #[test]
    fn test_format_summary_plain() {
        let records = vec![record(vec![metric(
            "Governance",
            "Audit & Compliance Committee",
            Some("Executive Directors"),
            &[(2023, "20%")],
        )])];
        let result = format_summary(&company_summary(&records), false);
        assert!(result.starts_with("Acme Tea"));
        assert!(result.contains("Agriculture, Kenya"));
        assert!(result.contains("Records: 1  Metrics: 1  Years: 2023"));
        assert!(result.contains("Verification: verified"));
        assert!(result.contains("[Executive Directors]"));
    }

    #[test]
    fn test_format_summary_empty() {
        let result = format_summary(&CompanySummary::default(), false);
        assert!(result.starts_with("(unknown company)"));
        assert!(result.contains("Data quality: -"));
    }

    #[test]
    fn test_format_score_marks_placeholder() {
        let records = vec![record(vec![metric("Governance", "Board Size", None, &[(2023, "10")])])];
        let result = calculate_score(&MetricPool::from_records(&records), &ScoringConfig::default());
        let output = format_score_result(&result, false);
        assert!(output.contains("35 / 100  grade F"));
        assert!(output.contains("Committee Effectiveness"));
        assert!(output.contains("75.0*"));
        assert!(output.contains("not modeled yet"));
    }

    #[test]
    fn test_format_key_metrics_dashes_for_missing() {
        let output = format_key_metrics(&KeyMetrics::default(), false);
        assert!(output.starts_with("Key metrics (no data)"));
        assert!(output.contains("Board size: - →"));
        assert!(output.contains("Ethics code: no"));
    }

    #[test]
    fn test_format_group_listings() {
        let records = vec![record(vec![
            metric("Governance", "Board Size", None, &[(2022, "9"), (2023, "10")]),
            metric("Social", "Hospital Attendees", None, &[(2023, "500")]),
        ])];
        let by_sub = crate::grouping::group_by_sub_category(&records);
        let output = format_sub_category_groups(&by_sub);
        assert!(output.contains("Board Governance"));
        assert!(output.contains("Corporate Social Responsibility"));

        let by_year = format_year_groups(&crate::grouping::group_by_year(&records));
        assert!(by_year.starts_with("2022"));
        assert_eq!(format_category_groups(&BTreeMap::new()), "No metrics found.");
    }
}
