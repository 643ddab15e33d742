use serde::{Deserialize, Serialize};

/// Number of monthly observations in a media series.
pub const MONTHS: usize = 12;

/// Raw measurements for one organization and reporting period.
///
/// Example YAML:
/// ```yaml
/// organization: Acme
/// period: 2025
/// industry: telecom_it
/// employees: 12000
/// media:
///   source: monitoring
///   annual_value: 45000
///   monthly: [3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900]
/// employer_brand:
///   status: ranked
///   rank: 45
///   total: 700
/// transparency: [true, true, false, false, true, true, false, true, true, false]
/// institutional: [true, true, true, false, true, true, false, true, true, false, false, false, true]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoreInputs {
    #[serde(default)]
    pub organization: Option<String>,

    /// Reporting year
    #[serde(default)]
    pub period: Option<u16>,

    /// Industry id from the calibration registry
    #[serde(default)]
    pub industry: Option<String>,

    /// Classification code, used to pick the industry when `industry` is absent
    #[serde(default)]
    pub industry_code: Option<String>,

    #[serde(default)]
    pub employees: u64,

    /// Listed as a strategic enterprise
    #[serde(default)]
    pub strategic: bool,

    pub media: MediaInputs,

    pub employer_brand: EmployerBrand,

    /// One answer per transparency criterion, in catalog order
    pub transparency: Vec<bool>,

    /// One answer per institutional-maturity criterion, in catalog order
    pub institutional: Vec<bool>,

    /// Internal management data; when absent the extended score is not computed
    #[serde(default)]
    pub extended: Option<ExtendedInputs>,
}

/// Where the media-presence numbers come from.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(tag = "source", rename_all = "snake_case", deny_unknown_fields)]
pub enum MediaInputs {
    /// Media-monitoring index with a monetary-style reference benchmark
    Monitoring {
        annual_value: f64,
        /// Replaces the industry benchmark when set
        #[serde(default)]
        x_ref: Option<f64>,
        monthly: Vec<f64>,
    },
    /// Hand-counted publications, no reference benchmark
    Manual {
        total: i64,
        positive: i64,
        negative: i64,
        monthly: Vec<f64>,
    },
}

impl MediaInputs {
    pub fn monthly(&self) -> &[f64] {
        match self {
            MediaInputs::Monitoring { monthly, .. } | MediaInputs::Manual { monthly, .. } => monthly,
        }
    }
}

/// Employer-brand standing.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case", deny_unknown_fields)]
pub enum EmployerBrand {
    /// Position in an employer ranking, 1 = best
    Ranked { rank: u32, total: u32 },
    /// Not ranked although large or public
    AbsentLarge,
    /// Not ranked, small or private
    AbsentSmall,
    /// Percentile supplied directly, within [0, 100]
    Manual { value: f64 },
}

/// Optional financial-efficiency block.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ExtendedInputs {
    #[serde(default)]
    pub roi: Option<ReturnInput>,
    #[serde(default)]
    pub sroi: Option<ReturnInput>,
    #[serde(default)]
    pub budget: Option<BudgetInput>,
}

/// A return figure, either as a percentage or as the benefit/cost pair it
/// derives from.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(untagged, deny_unknown_fields)]
pub enum ReturnInput {
    Percent { percent: f64 },
    Computed { benefit: f64, cost: f64 },
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BudgetInput {
    pub plan: f64,
    pub fact: f64,
    /// Overspend approved by management
    #[serde(default)]
    pub approved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_monitoring_inputs() {
        let yaml = r#"
organization: Acme
period: 2025
industry: telecom_it
employees: 12000
media:
  source: monitoring
  annual_value: 45000
  monthly: [3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900]
employer_brand:
  status: ranked
  rank: 45
  total: 700
transparency: [true, true, false, false, true, true, false, true, true, false]
institutional: [true, true, true, false, true, true, false, true, true, false, false, false, true]
"#;
        let inputs: ScoreInputs = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(inputs.organization.as_deref(), Some("Acme"));
        assert_eq!(inputs.period, Some(2025));
        assert!(!inputs.strategic);
        assert_eq!(inputs.media.monthly().len(), MONTHS);
        assert_eq!(inputs.employer_brand, EmployerBrand::Ranked { rank: 45, total: 700 });
        assert!(matches!(
            inputs.media,
            MediaInputs::Monitoring { annual_value, x_ref: None, .. } if annual_value == 45000.0
        ));
        assert!(inputs.extended.is_none());
    }

    #[test]
    fn test_parse_manual_media_and_absent_brand() {
        let yaml = r#"
media:
  source: manual
  total: 100
  positive: 70
  negative: 30
  monthly: [8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8]
employer_brand:
  status: absent_small
transparency: []
institutional: []
"#;
        let inputs: ScoreInputs = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(inputs.employees, 0);
        assert_eq!(inputs.employer_brand, EmployerBrand::AbsentSmall);
        assert!(matches!(
            inputs.media,
            MediaInputs::Manual { total: 100, positive: 70, negative: 30, .. }
        ));
    }

    #[test]
    fn test_parse_extended_block() {
        let yaml = r#"
roi:
  percent: 15
sroi:
  benefit: 630
  cost: 450
budget:
  plan: 430
  fact: 480
"#;
        let extended: ExtendedInputs = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(extended.roi, Some(ReturnInput::Percent { percent: 15.0 }));
        assert_eq!(
            extended.sroi,
            Some(ReturnInput::Computed { benefit: 630.0, cost: 450.0 })
        );
        let budget = extended.budget.unwrap();
        assert_eq!(budget.plan, 430.0);
        assert!(!budget.approved);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = r#"
roi:
  percent: 15
bonus: 3
"#;
        assert!(serde_saphyr::from_str::<ExtendedInputs>(yaml).is_err());
    }

    #[test]
    fn test_misspelled_media_field_rejected() {
        let yaml = r#"
source: monitoring
annual_value: 45000
xref: 90000
monthly: [3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900]
"#;
        assert!(serde_saphyr::from_str::<MediaInputs>(yaml).is_err());

        let yaml = r#"
source: monitoring
annual_value: 45000
x_ref: 90000
monthly: [3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900]
"#;
        let media: MediaInputs = serde_saphyr::from_str(yaml).unwrap();
        assert!(matches!(media, MediaInputs::Monitoring { x_ref: Some(x), .. } if x == 90000.0));
    }

    #[test]
    fn test_extra_employer_brand_field_rejected() {
        let yaml = "status: ranked\nrank: 45\ntotal: 700\npercentile: 90\n";
        assert!(serde_saphyr::from_str::<EmployerBrand>(yaml).is_err());
        let yaml = "status: manual\nvalue: 40\nrank: 3\n";
        assert!(serde_saphyr::from_str::<EmployerBrand>(yaml).is_err());
    }

    #[test]
    fn test_mixed_return_input_rejected() {
        let yaml = r#"
roi:
  percent: 15
  cost: 999
"#;
        assert!(serde_saphyr::from_str::<ExtendedInputs>(yaml).is_err());

        let sroi: ReturnInput = serde_saphyr::from_str("benefit: 630\ncost: 450\n").unwrap();
        assert_eq!(sroi, ReturnInput::Computed { benefit: 630.0, cost: 450.0 });
    }
}
