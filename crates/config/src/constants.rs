//! Centralized constants for the PSA client configuration crate.

// =============================================================================
// Config File Location
// =============================================================================

/// Environment variable naming an explicit config file path.
pub const CONFIG_PATH_ENV: &str = "PSA_CONFIG_PATH";

/// Directory name used under the platform config directory.
pub const APP_DIR_NAME: &str = "psa-client";

/// File name of the default INI config.
pub const DEFAULT_CONFIG_FILE: &str = "config.ini";
