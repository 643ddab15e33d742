use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use iseec::calibration::CalibrationRegistry;
use iseec::output::{self, OutputFormat, Report};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 4;
const EXIT_IO: i32 = 5;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorChoice {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => output::should_use_colors(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score an assessment file
    Score {
        /// Path to the YAML assessment
        file: PathBuf,

        /// Report format (defaults to the config value, then text)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// When to color the text report
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,
    },
    /// List industry calibrations
    Industries,
    /// Show the industry a classification code maps to
    Resolve {
        /// Classification code, e.g. 62.01
        code: String,
    },
    /// Write a template assessment file
    Init {
        /// Destination path
        #[arg(default_value = "assessment.yaml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "iseec")]
#[command(about = "Communications effectiveness scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/iseec/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = iseec::logging::init(cli.verbose) {
        eprintln!("Logging error: {}", e);
        std::process::exit(EXIT_CONFIG);
    }

    let config = match iseec::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate calibration overrides at startup
    let registry = match iseec::config::build_registry(&config) {
        Ok(r) => r,
        Err(errors) => {
            eprintln!("Calibration config errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
    };

    match cli.command {
        Commands::Score {
            file,
            format,
            output: output_path,
            color,
        } => {
            let format = format.or(config.default_format()).unwrap_or_default();
            let code = score(&registry, &file, format, output_path, color);
            std::process::exit(code);
        }
        Commands::Industries => {
            let use_colors = output::should_use_colors();
            let table = output::format_industries(&registry, use_colors);
            if output::write_output(None, &table).is_err() {
                // Reader went away (e.g. piped into `head`)
                std::process::exit(EXIT_IO);
            }
        }
        Commands::Resolve { code } => {
            let profile = registry.resolve_code(&code);
            let line = format!("{}\t{}", profile.id, profile.name);
            if output::write_output(None, &line).is_err() {
                std::process::exit(EXIT_IO);
            }
        }
        Commands::Init { path, force } => {
            if let Err(e) = iseec::config::write_template(&path, force) {
                eprintln!("Init error: {:#}", e);
                std::process::exit(EXIT_IO);
            }
            let message = format!("Wrote template assessment to {}", path.display());
            if output::write_output(None, &message).is_err() {
                std::process::exit(EXIT_IO);
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Run the `score` command and return its exit code.
fn score(
    registry: &CalibrationRegistry,
    file: &Path,
    format: OutputFormat,
    output_path: Option<PathBuf>,
    color: ColorChoice,
) -> i32 {
    let content = match fs::read_to_string(file) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to read assessment at {}: {}", file.display(), e);
            return EXIT_IO;
        }
    };

    let inputs = match iseec::config::parse_assessment(&content) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("Assessment error in {}: {:#}", file.display(), e);
            return EXIT_CONFIG;
        }
    };

    let industry = registry.resolve(inputs.industry.as_deref(), inputs.industry_code.as_deref());

    let evaluation = match iseec::scoring::evaluate(&inputs, industry) {
        Ok(e) => e,
        Err(iseec::scoring::EvaluationError::InvalidInputs(errors)) => {
            eprintln!("Assessment errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            return EXIT_CONFIG;
        }
    };

    info!(
        industry = %industry.id,
        iseec_b = evaluation.composite.iseec_b,
        rating = %evaluation.composite.rating_b,
        "evaluation complete"
    );

    let report = Report {
        organization: inputs.organization.as_deref(),
        period: inputs.period,
        industry,
        employees: inputs.employees,
        strategic: inputs.strategic,
        generated_at: Local::now(),
        evaluation: &evaluation,
    };

    // Colors never go into files
    let use_colors = output_path.is_none() && color.enabled();
    let rendered = match format {
        OutputFormat::Text => output::format_report(&report, use_colors),
        OutputFormat::Tsv => output::format_tsv(&report),
        OutputFormat::Json => match output::format_json(&report) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                return EXIT_IO;
            }
        },
    };

    if let Err(e) = output::write_output(output_path.as_deref(), &rendered) {
        eprintln!("Output error: {:#}", e);
        return EXIT_IO;
    }

    EXIT_SUCCESS
}
