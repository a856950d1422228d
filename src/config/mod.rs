mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Get the config directory path (~/.config/esg-lens/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("esg-lens"))
}

/// Get the default config file path (~/.config/esg-lens/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/esg-lens/config.yaml) and falls back to built-in defaults
///   when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            read_config(&path)
        }
        None => match get_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => {
                debug!("no config file found, using built-in scoring defaults");
                Ok(Config::default())
            }
        },
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_config(name: &str, content: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("esg-lens-{}-{}.yaml", name, std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_explicit_config() {
        let path = temp_config(
            "explicit",
            "scoring:\n  committee_effectiveness: 60\n  board:\n    target_size: 8\n",
        );
        let config = load_config(Some(path.clone())).unwrap();
        fs::remove_file(&path).ok();

        let scoring = config.effective_scoring();
        assert_eq!(scoring.committee_effectiveness(), 60.0);
        assert_eq!(scoring.board().target_size, 8.0);
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let path = env::temp_dir().join("esg-lens-does-not-exist.yaml");
        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let path = temp_config("invalid", "scoring: [not, a, map]\n");
        let result = load_config(Some(path.clone()));
        fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config.effective_scoring(), crate::scoring::ScoringConfig::default());
    }
}
