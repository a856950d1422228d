pub mod formatter;

pub use formatter::{
    format_category_groups, format_count, format_key_metrics, format_report, format_score_result,
    format_sub_category_groups, format_summary, format_year_groups, format_years,
    should_use_colors,
};
