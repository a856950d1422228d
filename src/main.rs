use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use esg_lens::extract::{key_metrics, MetricPool};
use esg_lens::grouping::{available_years, group_by_category, group_by_sub_category, group_by_year};
use esg_lens::model::{ingest, parse_records, DataRecord};
use esg_lens::output;
use esg_lens::report::build_report;
use esg_lens::scoring::{calculate_score, validate_scoring};
use esg_lens::summary::company_summary;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum GroupBy {
    Category,
    SubCategory,
    Year,
}

#[derive(Args, Debug)]
struct Input {
    /// JSON file holding an array of data records
    file: PathBuf,
}

#[derive(Args, Debug)]
struct YearInput {
    #[command(flatten)]
    input: Input,

    /// Read metrics at this reporting year instead of the latest one
    #[arg(long)]
    year: Option<i32>,
}

impl YearInput {
    fn pool<'a>(&self, records: &'a [DataRecord]) -> MetricPool<'a> {
        let pool = MetricPool::from_records(records);
        match self.year {
            Some(year) => pool.at_year(year),
            None => pool,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Company summary: records, years, categories, data quality
    Summary(Input),
    /// Group metrics by category, governance sub-category or year
    Groups {
        #[command(flatten)]
        input: Input,

        #[arg(long, value_enum, default_value_t = GroupBy::Category)]
        by: GroupBy,
    },
    /// List the distinct reporting years
    Years(Input),
    /// Flat key-metrics view for the latest reporting year
    Metrics(YearInput),
    /// Governance score with grade and component breakdown
    Score(YearInput),
    /// Everything above in one report
    Report(Input),
}

impl Commands {
    fn input(&self) -> &Path {
        match self {
            Commands::Summary(input)
            | Commands::Groups { input, .. }
            | Commands::Years(input)
            | Commands::Report(input) => &input.file,
            Commands::Metrics(scoped) | Commands::Score(scoped) => &scoped.input.file,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "esg-lens")]
#[command(about = "ESG metrics grouping and governance scoring", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/esg-lens/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    // Logs go to stderr so stdout stays clean for --json
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn load_records(path: &Path) -> anyhow::Result<Vec<DataRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let raw = parse_records(&content)?;
    Ok(ingest(raw)?)
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize output: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match esg_lens::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let scoring = config.effective_scoring();
    if let Err(errors) = validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let input = cli.command.input();
    let records = match load_records(input) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };
    debug!(records = records.len(), input = %input.display(), "loaded records");

    let use_colors = output::should_use_colors();

    match &cli.command {
        Commands::Summary(_) => {
            let summary = company_summary(&records);
            if cli.json {
                print_json(&summary);
            } else {
                println!("{}", output::format_summary(&summary, use_colors));
            }
        }
        Commands::Groups { by, .. } => match (*by, cli.json) {
            (GroupBy::Category, true) => print_json(&group_by_category(&records)),
            (GroupBy::Category, false) => {
                println!("{}", output::format_category_groups(&group_by_category(&records)))
            }
            (GroupBy::SubCategory, true) => print_json(&group_by_sub_category(&records)),
            (GroupBy::SubCategory, false) => println!(
                "{}",
                output::format_sub_category_groups(&group_by_sub_category(&records))
            ),
            (GroupBy::Year, true) => print_json(&group_by_year(&records)),
            (GroupBy::Year, false) => {
                println!("{}", output::format_year_groups(&group_by_year(&records)))
            }
        },
        Commands::Years(_) => {
            let years = available_years(&records);
            if cli.json {
                print_json(&years);
            } else {
                println!("{}", output::format_years(&years));
            }
        }
        Commands::Metrics(scoped) => {
            let metrics = key_metrics(&scoped.pool(&records));
            if cli.json {
                print_json(&metrics);
            } else {
                println!("{}", output::format_key_metrics(&metrics, use_colors));
            }
        }
        Commands::Score(scoped) => {
            let result = calculate_score(&scoped.pool(&records), &scoring);
            if cli.json {
                print_json(&result);
            } else {
                println!("{}", output::format_score_result(&result, use_colors));
            }
        }
        Commands::Report(_) => {
            let report = build_report(&records, &scoring);
            if cli.json {
                print_json(&report);
            } else {
                println!("{}", output::format_report(&report, use_colors));
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
