//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Resolve the config file path from `PSA_CONFIG_PATH` or the platform config dir.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations (see `config`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned env values are trimmed.

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::{APP_DIR_NAME, CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE};
use crate::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub(crate) fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Returns the platform default path to the configuration file.
///
/// - Linux: `~/.config/psa-client/config.ini`
/// - macOS: `~/Library/Application Support/psa-client/config.ini`
/// - Windows: `%AppData%\psa-client\config\config.ini`
pub(crate) fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_DIR_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(DEFAULT_CONFIG_FILE))
}

/// Resolve the config file to load: `PSA_CONFIG_PATH` wins over the platform default.
pub(crate) fn resolve_config_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = env_var_or_none(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    default_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config_path_matches_expected_project_dirs() {
        let expected = directories::ProjectDirs::from("", "", APP_DIR_NAME)
            .unwrap()
            .config_dir()
            .join(DEFAULT_CONFIG_FILE);

        assert_eq!(default_config_path().unwrap(), expected);
    }

    #[test]
    #[serial]
    fn test_env_var_overrides_default_path() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("  /srv/psa/custom.ini "), || {
            assert_eq!(
                resolve_config_path().unwrap(),
                PathBuf::from("/srv/psa/custom.ini")
            );
        });
    }

    #[test]
    #[serial]
    fn test_blank_env_var_falls_back_to_default() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("   "), || {
            assert_eq!(env_var_or_none(CONFIG_PATH_ENV), None);
            assert_eq!(resolve_config_path().unwrap(), default_config_path().unwrap());
        });
    }
}
