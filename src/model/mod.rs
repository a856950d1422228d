pub mod answer;
pub mod ingest;
pub mod money;
pub mod record;
pub mod wire;

pub use answer::Answer;
pub use ingest::{ingest, parse_records, IngestError};
pub use money::{parse_amount, parse_percentage, parse_plain_number};
pub use record::{CompanyRef, DataRecord, Metric, MetricValue};
pub use wire::{RawDataRecord, RawMetric, RawMetricValue};
