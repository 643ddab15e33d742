use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive (e.g. `iseec=debug`).
pub const LOG_ENV: &str = "ISEEC_LOG";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter '{value}'")]
    Filter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("logging init failed: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Fallback level when `ISEEC_LOG` is unset.
pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn build_filter(env_value: Option<String>, verbose: bool) -> Result<EnvFilter, LoggingError> {
    let value = env_value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default_level(verbose).to_string());
    EnvFilter::try_new(&value).map_err(|source| LoggingError::Filter { value, source })
}

/// Install the global subscriber. Logs go to stderr so reports on stdout stay clean.
pub fn init(verbose: bool) -> Result<(), LoggingError> {
    let filter = build_filter(std::env::var(LOG_ENV).ok(), verbose)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(LoggingError::Subscriber)
}
