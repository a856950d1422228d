pub mod board;
pub mod committees;
pub mod compliance;
pub mod csr;
pub mod key_metrics;
pub mod names;
pub mod pool;
pub mod remuneration;
pub mod suppliers;
pub mod trend;

pub use board::{board_composition, board_meetings, board_size, BoardComposition};
pub use committees::{committees, Committee, CommitteeComposition, CommitteeSummary};
pub use compliance::{compliance, ComplianceSummary};
pub use csr::{csr, CsrSummary};
pub use key_metrics::{key_metrics, KeyMetrics};
pub use pool::{MetricKey, MetricPool, Tracked};
pub use remuneration::{remuneration, RemunerationSummary};
pub use suppliers::{suppliers, SupplierSummary};
pub use trend::Trend;
