use serde::{Deserialize, Serialize};
use std::fmt;

/// Informational size/risk tier of an industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    High,
    Medium,
    Low,
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SizeCategory::High => "high",
            SizeCategory::Medium => "medium",
            SizeCategory::Low => "low",
        };
        f.write_str(label)
    }
}

/// Calibration parameters for one industry.
///
/// `x_ref` is the reference annual media-presence value a leading company of
/// the industry reaches; `k_risk` amplifies the composite score for socially
/// sensitive industries and is never below 1.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryProfile {
    pub id: String,
    pub name: String,
    pub x_ref: f64,
    pub k_risk: f64,
    pub category: SizeCategory,
    /// Classification-code prefixes used to resolve an industry from a code
    pub code_prefixes: Vec<String>,
    pub examples: Vec<String>,
}

impl IndustryProfile {
    pub fn new(
        id: &str,
        name: &str,
        x_ref: f64,
        k_risk: f64,
        category: SizeCategory,
        code_prefixes: &[&str],
        examples: &[&str],
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            x_ref,
            k_risk,
            category,
            code_prefixes: code_prefixes.iter().map(|p| p.to_string()).collect(),
            examples: examples.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// True when `code` starts with any of this industry's prefixes
    pub fn matches_code(&self, code: &str) -> bool {
        let code = code.trim();
        !code.is_empty() && self.code_prefixes.iter().any(|p| code.starts_with(p.as_str()))
    }
}
