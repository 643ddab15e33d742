use serde::{Deserialize, Serialize};

use crate::calibration::IndustryOverride;
use crate::output::OutputFormat;

/// Contents of `~/.config/iseec/config.yaml`. Every section is optional.
///
/// Example YAML:
/// ```yaml
/// output:
///   format: text
/// industries:
///   - id: banking
///     x_ref: 60000
///   - id: gaming
///     name: Gaming
///     x_ref: 12000
///     k_risk: 1.0
///     code_prefixes: ["58.21"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Calibration overrides applied on top of the built-in table
    #[serde(default)]
    pub industries: Vec<IndustryOverride>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Report format used when `--format` is not given
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl Config {
    pub fn default_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }
}
