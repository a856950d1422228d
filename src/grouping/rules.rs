use serde::{Deserialize, Serialize};
use std::fmt;

/// Finer-grained grouping of metrics, inferred from the metric name.
///
/// Declaration order matches rule priority, so a `BTreeMap` keyed by this
/// enum lists sub-categories in the same order the rules test them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SubCategory {
    #[serde(rename = "Board Governance")]
    BoardGovernance,
    #[serde(rename = "Board Committees")]
    BoardCommittees,
    #[serde(rename = "Corporate Social Responsibility")]
    CorporateSocialResponsibility,
    #[serde(rename = "Supply Chain")]
    SupplyChain,
    #[serde(rename = "Ethics & Compliance")]
    EthicsCompliance,
    #[serde(rename = "Remuneration")]
    Remuneration,
    #[serde(rename = "Other")]
    Other,
}

impl SubCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SubCategory::BoardGovernance => "Board Governance",
            SubCategory::BoardCommittees => "Board Committees",
            SubCategory::CorporateSocialResponsibility => "Corporate Social Responsibility",
            SubCategory::SupplyChain => "Supply Chain",
            SubCategory::EthicsCompliance => "Ethics & Compliance",
            SubCategory::Remuneration => "Remuneration",
            SubCategory::Other => "Other",
        }
    }
}

impl fmt::Display for SubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One classification rule: any keyword found in the metric name assigns
/// the label.
#[derive(Debug, Clone, Copy)]
pub struct SubCategoryRule {
    pub priority: u8,
    pub label: SubCategory,
    pub keywords: &'static [&'static str],
}

impl SubCategoryRule {
    /// Keywords are lowercase; `name` must be lowercased by the caller.
    fn matches(&self, lowered_name: &str) -> bool {
        self.keywords.iter().any(|k| lowered_name.contains(k))
    }
}

/// Rules in evaluation order. The first match wins, so reordering entries
/// reclassifies metrics: "Board Audit Committee" is Board Governance because
/// the `board` rule runs before the committee rule.
pub const SUB_CATEGORY_RULES: &[SubCategoryRule] = &[
    SubCategoryRule {
        priority: 1,
        label: SubCategory::BoardGovernance,
        keywords: &["board"],
    },
    SubCategoryRule {
        priority: 2,
        label: SubCategory::BoardCommittees,
        keywords: &["committee", "audit", "risk", "remuneration", "stakeholder"],
    },
    SubCategoryRule {
        priority: 3,
        label: SubCategory::CorporateSocialResponsibility,
        keywords: &["csr", "education", "hospital", "community", "health"],
    },
    SubCategoryRule {
        priority: 4,
        label: SubCategory::SupplyChain,
        keywords: &["supplier", "procurement"],
    },
    SubCategoryRule {
        priority: 5,
        label: SubCategory::EthicsCompliance,
        keywords: &["ethics", "compliance", "corruption", "whistleblow", "ifrs"],
    },
    SubCategoryRule {
        priority: 6,
        label: SubCategory::Remuneration,
        keywords: &["remuneration", "pay", "compensation"],
    },
];

/// Classify a metric name; names matching no rule are `Other`.
pub fn classify(name: &str) -> SubCategory {
    let lowered = name.to_lowercase();
    SUB_CATEGORY_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.label)
        .unwrap_or(SubCategory::Other)
}
