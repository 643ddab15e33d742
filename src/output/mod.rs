pub mod formatter;
pub mod writer;

pub use formatter::{
    format_count, format_industries, format_json, format_report, format_score, format_tsv,
    should_use_colors, Report,
};
pub use writer::write_output;

use serde::{Deserialize, Serialize};

/// Report rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// One `key<TAB>value` line per metric
    Tsv,
    /// Full evaluation as JSON
    Json,
}
