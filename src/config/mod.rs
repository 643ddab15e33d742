mod init;
mod schema;

pub use init::{write_template, TEMPLATE};
pub use schema::{Config, OutputConfig};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::calibration::CalibrationRegistry;
use crate::scoring::ScoreInputs;

/// Get the config directory path (~/.config/iseec/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("iseec"))
}

/// Get the default config file path (~/.config/iseec/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/iseec/config.yaml), and a missing default file yields the
///   default configuration.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p
        }
        None => {
            let default_path = get_config_path()?;
            if !default_path.exists() {
                return Ok(Config::default());
            }
            default_path
        }
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

/// Parse an assessment file's contents. Shape checks happen later in `evaluate`.
pub fn parse_assessment(content: &str) -> Result<ScoreInputs> {
    serde_saphyr::from_str(content).context("Failed to parse assessment: invalid YAML")
}

/// Build the calibration registry from a loaded config.
/// Returns all validation errors at once (not just the first).
pub fn build_registry(config: &Config) -> Result<CalibrationRegistry, Vec<String>> {
    CalibrationRegistry::with_overrides(&config.industries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let temp_path = env::temp_dir().join("iseec_test_missing_config.yaml");
        let _ = fs::remove_file(&temp_path);

        let err = load_config(Some(temp_path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_config_from_file() {
        let temp_path = env::temp_dir().join("iseec_test_config.yaml");
        fs::write(
            &temp_path,
            "industries:\n  - id: retail\n    x_ref: 42000\n",
        )
        .unwrap();

        let config = load_config(Some(temp_path.clone())).unwrap();
        let registry = build_registry(&config).unwrap();
        assert_eq!(registry.get("retail").x_ref, 42000.0);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_path = env::temp_dir().join("iseec_test_bad_config.yaml");
        fs::write(&temp_path, "industries: [unterminated\n").unwrap();

        let err = load_config(Some(temp_path.clone())).unwrap_err();
        assert!(err.to_string().contains("invalid YAML"));

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_build_registry_reports_errors() {
        let config: Config =
            serde_saphyr::from_str("industries:\n  - id: retail\n    k_risk: 0.5\n").unwrap();
        let errors = build_registry(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("k_risk"));
    }

    #[test]
    fn test_parse_assessment_template() {
        let inputs = parse_assessment(TEMPLATE).unwrap();
        assert_eq!(inputs.industry.as_deref(), Some("telecom_it"));
        assert!(inputs.extended.is_some());
    }

    #[test]
    fn test_parse_assessment_rejects_unknown_fields() {
        let err = parse_assessment("employees: 10\nheadcount: 12\n").unwrap_err();
        assert!(err.to_string().contains("invalid YAML"));
    }

    #[test]
    fn test_build_registry_collects_all_errors() {
        assert!(build_registry(&Config::default()).is_ok());

        let config: Config = serde_saphyr::from_str(
            "industries:\n  - id: gaming\n    x_ref: -1\n  - id: banking\n  - id: Banking\n",
        )
        .unwrap();
        let errors = build_registry(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
