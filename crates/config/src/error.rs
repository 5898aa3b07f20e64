//! Error types for configuration loading and lookup.
//!
//! Responsibilities:
//! - Define error variants for construction and lookup failures.
//! - Wrap lower-level INI parse and I/O errors with the offending path.
//!
//! Does NOT handle:
//! - Line-level parse diagnostics (see `ini::IniError`).
//!
//! Invariants:
//! - Every variant carries enough context to identify the input (path, key, or type).
//! - Construction errors never come with a partially built `Config`.

use std::path::PathBuf;
use thiserror::Error;

use crate::ini::IniError;
use crate::value::ConfigKey;

/// Errors that can occur while building or querying a `Config`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Variable type passed to Config not supported: {found}")]
    UnsupportedType { found: &'static str },

    #[error("Config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read config file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: IniError,
    },

    #[error("Item not found in config: {key}")]
    KeyNotFound { key: ConfigKey },

    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
