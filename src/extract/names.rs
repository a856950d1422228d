//! Metric names (and sub-field units) the extractors look for.

use super::pool::MetricKey;

pub const BOARD_SIZE: MetricKey = MetricKey::named("Board Size");
pub const BOARD_MEETINGS: MetricKey = MetricKey::with_unit("Board Attendance", "Number of meetings");

pub const EXECUTIVE_DIRECTORS: &str = "Executive Directors";
pub const NON_EXECUTIVE_DIRECTORS: &str = "Non-executive Directors";
pub const INDEPENDENT_NON_EXECUTIVE_DIRECTORS: &str = "Independent Non-executive Directors";

pub const EDUCATION_MALE: MetricKey = MetricKey::with_unit("Education Programme Attendance", "Male");
pub const EDUCATION_FEMALE: MetricKey =
    MetricKey::with_unit("Education Programme Attendance", "Female");
pub const HOSPITAL_ATTENDEES: MetricKey = MetricKey::named("Hospital Attendees");

pub const LOCAL_PROCUREMENT: MetricKey = MetricKey::named("Local Procurement Spend");
pub const FOREIGN_PROCUREMENT: MetricKey = MetricKey::named("Foreign Procurement Spend");
pub const SUPPLIER_COUNT: MetricKey = MetricKey::named("Number of Suppliers");

pub const ETHICS_CODE: MetricKey = MetricKey::named("Code of Ethics");
pub const ANTI_CORRUPTION: MetricKey = MetricKey::named("Anti-Corruption Policy");
pub const WHISTLEBLOWING: MetricKey = MetricKey::named("Whistleblowing Mechanism");
pub const COMPLIANCE_INCIDENTS: MetricKey = MetricKey::named("Compliance Incidents");
pub const SUPPLIER_CODE: MetricKey = MetricKey::named("Supplier Code of Conduct");
pub const IFRS_DISCLOSURE: MetricKey = MetricKey::named("IFRS S1/S2 Disclosure");

pub const REMUNERATION_DISCLOSURE: MetricKey = MetricKey::named("Remuneration Disclosure");
pub const ESG_LINKED_PAY: MetricKey = MetricKey::named("ESG-Linked Pay");
