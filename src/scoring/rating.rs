use serde::Serialize;
use std::fmt;

/// Qualitative band of a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityRating {
    CriticallyLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl QualityRating {
    /// Classify a composite score. Bands are checked top-down, first match wins.
    pub fn classify(value: f64) -> Self {
        match value {
            v if v > 100.0 => QualityRating::VeryHigh,
            v if v >= 76.0 => QualityRating::High,
            v if v >= 51.0 => QualityRating::Medium,
            v if v >= 26.0 => QualityRating::Low,
            _ => QualityRating::CriticallyLow,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QualityRating::VeryHigh => "Very High",
            QualityRating::High => "High",
            QualityRating::Medium => "Medium",
            QualityRating::Low => "Low",
            QualityRating::CriticallyLow => "Critically Low",
        }
    }

    /// Traffic-light marker shown next to the label
    pub fn marker(&self) -> &'static str {
        match self {
            QualityRating::VeryHigh | QualityRating::High => "🟢",
            QualityRating::Medium => "🟡",
            QualityRating::Low => "🟠",
            QualityRating::CriticallyLow => "🔴",
        }
    }

    /// Score range as printed on the interpretation scale
    pub fn range(&self) -> &'static str {
        match self {
            QualityRating::VeryHigh => "> 100",
            QualityRating::High => "76-100",
            QualityRating::Medium => "51-75",
            QualityRating::Low => "26-50",
            QualityRating::CriticallyLow => "0-25",
        }
    }

    pub fn interpretation(&self) -> &'static str {
        match self {
            QualityRating::VeryHigh => "Communications create additional value",
            QualityRating::High => "Effective communications system",
            QualityRating::Medium => "Room for improvement",
            QualityRating::Low => "Substantial rework required",
            QualityRating::CriticallyLow => "Communications system is ineffective",
        }
    }

    /// All bands, best first
    pub fn scale() -> [QualityRating; 5] {
        [
            QualityRating::VeryHigh,
            QualityRating::High,
            QualityRating::Medium,
            QualityRating::Low,
            QualityRating::CriticallyLow,
        ]
    }
}

impl fmt::Display for QualityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
