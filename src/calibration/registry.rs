use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

use super::industry::{IndustryProfile, SizeCategory};

/// Id of the fallback profile used for unknown industries.
pub const OTHER_INDUSTRY: &str = "other";

/// Calibration override for one industry, as written in the config file.
///
/// An existing id only needs the fields it changes. A new id must provide
/// `name`, `x_ref` and `k_risk`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct IndustryOverride {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub x_ref: Option<f64>,
    #[serde(default)]
    pub k_risk: Option<f64>,
    #[serde(default)]
    pub category: Option<SizeCategory>,
    #[serde(default)]
    pub code_prefixes: Option<Vec<String>>,
    #[serde(default)]
    pub examples: Option<Vec<String>>,
}

/// Read-only mapping from industry id to calibration parameters.
///
/// Order is significant: code resolution returns the first industry whose
/// prefix matches, and the fallback profile always sits last.
#[derive(Debug, Clone)]
pub struct CalibrationRegistry {
    industries: Vec<IndustryProfile>,
}

impl Default for CalibrationRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CalibrationRegistry {
    /// The calibrated reference table.
    pub fn builtin() -> Self {
        use SizeCategory::{High, Low, Medium};

        let industries = vec![
            IndustryProfile::new(
                "energy",
                "Energy, oil, gas and power",
                60000.0,
                1.10,
                High,
                &["06", "09.1", "35"],
                &["Gazprom", "Rosneft", "Lukoil", "Rosseti"],
            ),
            IndustryProfile::new("nuclear", "Nuclear power", 60000.0, 1.10, High, &["24.46"], &["Rosatom"]),
            IndustryProfile::new(
                "banking",
                "Banking and financial services",
                55000.0,
                1.0,
                High,
                &["64", "65", "66"],
                &["Sber", "VTB", "Alfa-Bank"],
            ),
            IndustryProfile::new(
                "defense",
                "Defense industry",
                45000.0,
                1.10,
                High,
                &["25.4", "30.11", "30.3"],
                &["Rostec", "UAC", "USC"],
            ),
            IndustryProfile::new(
                "telecom_it",
                "Telecommunications and IT",
                45000.0,
                1.0,
                Medium,
                &["61", "62", "63"],
                &["MTS", "MegaFon", "Rostelecom", "Yandex"],
            ),
            IndustryProfile::new(
                "retail",
                "Retail and e-commerce",
                40000.0,
                1.0,
                Medium,
                &["47"],
                &["X5 Group", "Magnit", "Ozon", "Wildberries"],
            ),
            IndustryProfile::new(
                "construction",
                "Construction and development",
                35000.0,
                1.0,
                Medium,
                &["41", "42", "43"],
                &["PIK", "Samolet", "LSR", "Etalon"],
            ),
            IndustryProfile::new(
                "metallurgy",
                "Metallurgy and mining",
                35000.0,
                1.10,
                Medium,
                &["07", "08", "24"],
                &["Nornickel", "NLMK", "Severstal", "ALROSA"],
            ),
            IndustryProfile::new(
                "transport",
                "Transport and logistics",
                30000.0,
                1.0,
                Medium,
                &["49", "50", "51", "52"],
                &["Russian Railways", "Aeroflot", "FESCO"],
            ),
            IndustryProfile::new(
                "chemicals",
                "Chemical industry",
                25000.0,
                1.10,
                Medium,
                &["20", "21"],
                &["Sibur", "PhosAgro", "Uralchem"],
            ),
            IndustryProfile::new(
                "machinery",
                "Machine building",
                25000.0,
                1.0,
                Medium,
                &["28", "29"],
                &["KAMAZ", "GAZ", "Transmashholding"],
            ),
            IndustryProfile::new(
                "pharma",
                "Pharmaceuticals and healthcare",
                25000.0,
                1.0,
                Medium,
                &["21", "86"],
                &["R-Pharm", "Biocad", "Geropharm"],
            ),
            IndustryProfile::new(
                "agriculture",
                "Agriculture and food",
                20000.0,
                1.0,
                Low,
                &["01", "10", "11"],
                &["Rusagro", "Cherkizovo", "Miratorg"],
            ),
            IndustryProfile::new("tobacco", "Tobacco industry", 15000.0, 1.10, Low, &["12"], &[]),
            IndustryProfile::new("alcohol", "Alcohol industry", 15000.0, 1.10, Low, &["11.0"], &[]),
            IndustryProfile::new(OTHER_INDUSTRY, "Other industry", 20000.0, 1.0, Low, &[], &[]),
        ];

        Self { industries }
    }

    /// Built-in table with config overrides applied.
    ///
    /// Returns every validation error at once (not just the first). New
    /// industries are inserted before the fallback profile so they take part
    /// in code resolution.
    pub fn with_overrides(overrides: &[IndustryOverride]) -> Result<Self, Vec<String>> {
        let mut registry = Self::builtin();
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for (i, entry) in overrides.iter().enumerate() {
            let id = entry.id.trim().to_ascii_lowercase();
            if id.is_empty() {
                errors.push(format!("industries[{}].id: must not be empty", i));
                continue;
            }
            if !seen.insert(id.clone()) {
                errors.push(format!("industries[{}].id: duplicate id '{}'", i, id));
                continue;
            }

            if let Some(x_ref) = entry.x_ref {
                if !x_ref.is_finite() || x_ref <= 0.0 {
                    errors.push(format!("industries[{}].x_ref: must be positive (got {})", i, x_ref));
                }
            }
            if let Some(k_risk) = entry.k_risk {
                if !k_risk.is_finite() || k_risk < 1.0 {
                    errors.push(format!("industries[{}].k_risk: must be >= 1.0 (got {})", i, k_risk));
                }
            }

            match registry.position(&id) {
                Some(idx) => registry.industries[idx].apply(entry),
                None => {
                    let mut missing = Vec::new();
                    if entry.name.is_none() {
                        missing.push("name");
                    }
                    if entry.x_ref.is_none() {
                        missing.push("x_ref");
                    }
                    if entry.k_risk.is_none() {
                        missing.push("k_risk");
                    }
                    if !missing.is_empty() {
                        errors.push(format!(
                            "industries[{}]: new industry '{}' requires {}",
                            i,
                            id,
                            missing.join(", ")
                        ));
                        continue;
                    }

                    let mut profile = IndustryProfile::new(&id, "", 0.0, 1.0, SizeCategory::Low, &[], &[]);
                    profile.apply(entry);
                    let fallback_idx = registry.industries.len() - 1;
                    registry.industries.insert(fallback_idx, profile);
                }
            }
        }

        if errors.is_empty() {
            Ok(registry)
        } else {
            Err(errors)
        }
    }

    /// Profile for `id`; unknown ids resolve to the fallback profile.
    pub fn get(&self, id: &str) -> &IndustryProfile {
        match self.position(id) {
            Some(idx) => &self.industries[idx],
            None => self.other(),
        }
    }

    /// Whether `id` names a registered industry (the fallback included).
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// First industry, in registry order, with a prefix matching `code`.
    pub fn resolve_code(&self, code: &str) -> &IndustryProfile {
        self.industries
            .iter()
            .find(|profile| profile.matches_code(code))
            .unwrap_or_else(|| self.other())
    }

    /// Industry for an assessment: an explicit id wins over a classification
    /// code, and neither resolves to the fallback profile.
    pub fn resolve(&self, id: Option<&str>, code: Option<&str>) -> &IndustryProfile {
        if let Some(id) = id {
            if !self.contains(id) {
                warn!(industry = id, "unknown industry, using '{}'", OTHER_INDUSTRY);
            }
            return self.get(id);
        }
        if let Some(code) = code {
            let profile = self.resolve_code(code);
            debug!(code, industry = %profile.id, "resolved classification code");
            return profile;
        }
        self.other()
    }

    /// The fallback profile for unclassified organizations
    pub fn other(&self) -> &IndustryProfile {
        // with_overrides never removes or reorders the fallback entry
        &self.industries[self.industries.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndustryProfile> {
        self.industries.iter()
    }

    pub fn len(&self) -> usize {
        self.industries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.industries.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        let id = id.trim();
        self.industries
            .iter()
            .position(|profile| profile.id.eq_ignore_ascii_case(id))
    }
}

impl IndustryProfile {
    fn apply(&mut self, entry: &IndustryOverride) {
        if let Some(ref name) = entry.name {
            self.name = name.clone();
        }
        if let Some(x_ref) = entry.x_ref {
            self.x_ref = x_ref;
        }
        if let Some(k_risk) = entry.k_risk {
            self.k_risk = k_risk;
        }
        if let Some(category) = entry.category {
            self.category = category;
        }
        if let Some(ref prefixes) = entry.code_prefixes {
            self.code_prefixes = prefixes.clone();
        }
        if let Some(ref examples) = entry.examples {
            self.examples = examples.clone();
        }
    }
}
