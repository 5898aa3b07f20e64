//! The configuration container.
//!
//! Responsibilities:
//! - Build a `Config` from an INI file path or an in-memory table.
//! - Merge further entries with `set` and serve `get`/`all` lookups.
//!
//! Does NOT handle:
//! - INI syntax (see `ini`).
//! - Interpreting individual settings; callers own their meaning.
//!
//! Invariants:
//! - A `Config` only exists once its store is fully populated; a failed
//!   file check or parse produces no instance.
//! - `set` is a shallow merge: top-level keys are overwritten, never merged recursively.
//! - `all` hands out a shared borrow, so the store only changes through `set`.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::error::{ConfigError, Result};
use crate::ini::{self, IniError, IniErrorKind};
use crate::path::resolve_config_path;
use crate::source::ConfigSource;
use crate::value::{ConfigKey, ConfigValue, Table};

/// Key/value settings loaded from an INI file or supplied directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Config {
    store: Table,
}

impl Config {
    /// Build a config from a file path or a table.
    ///
    /// # Errors
    ///
    /// For a path source:
    /// - `ConfigError::FileNotFound` if the path is not an existing regular file.
    /// - `ConfigError::Read` if the file cannot be read.
    /// - `ConfigError::Parse` if the contents are not valid UTF-8 or not valid INI.
    pub fn new(source: impl Into<ConfigSource>) -> Result<Self> {
        let source = source.into();
        let kind = source.kind();

        let table = match source {
            ConfigSource::Path(path) => validate_and_parse(&path)?,
            ConfigSource::Map(table) => table,
        };

        let mut config = Self::default();
        config.set(table);
        debug!(source = kind, entries = config.len(), "Loaded config");
        Ok(config)
    }

    /// Build a config by parsing the INI file at `path`.
    ///
    /// # Errors
    ///
    /// - `ConfigError::FileNotFound` if the path is not an existing regular file.
    /// - `ConfigError::Read` if the file cannot be read.
    /// - `ConfigError::Parse` if the contents are not valid UTF-8 or not valid INI.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(path.as_ref())
    }

    /// Build a config from an existing table. No I/O is performed.
    pub fn from_map(table: Table) -> Self {
        let mut config = Self::default();
        config.set(table);
        config
    }

    /// Build a config from dynamically typed input.
    ///
    /// A JSON string is treated as a path and a JSON object as a table.
    /// Any other JSON type fails with `ConfigError::UnsupportedType`.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Self::new(ConfigSource::try_from(value)?)
    }

    /// Load the config file named by `PSA_CONFIG_PATH`, or the platform default
    /// (`<config dir>/psa-client/config.ini`) when the variable is unset.
    ///
    /// # Errors
    ///
    /// - `ConfigError::ConfigDirUnavailable` if the variable is unset and the
    ///   platform config directory cannot be determined.
    /// - Any error of [`Config::from_path`] for the resolved path.
    pub fn load_default() -> Result<Self> {
        let path = resolve_config_path()?;
        Self::from_path(path)
    }

    /// Merge `table` into the store. Existing keys are overwritten.
    pub fn set(&mut self, table: Table) {
        for (key, value) in table {
            trace!(%key, "Setting config entry");
            self.store.insert(key, value);
        }
    }

    /// Look up a single entry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::KeyNotFound` if `key` is absent. Matching is
    /// exact: no case folding, no defaults.
    pub fn get(&self, key: impl Into<ConfigKey>) -> Result<&ConfigValue> {
        let key = key.into();
        match self.store.get(&key) {
            Some(value) => Ok(value),
            None => Err(ConfigError::KeyNotFound { key }),
        }
    }

    /// Every stored entry.
    pub fn all(&self) -> &Table {
        &self.store
    }

    pub fn contains(&self, key: impl Into<ConfigKey>) -> bool {
        self.store.contains_key(&key.into())
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Consume the config and return its store.
    pub fn into_inner(self) -> Table {
        self.store
    }
}

impl From<Table> for Config {
    fn from(table: Table) -> Self {
        Self::from_map(table)
    }
}

/// Check that `path` is a regular file and parse it as INI.
fn validate_and_parse(path: &Path) -> Result<Table> {
    if !path.is_file() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let content = String::from_utf8(bytes).map_err(|err| {
        let valid = &err.as_bytes()[..err.utf8_error().valid_up_to()];
        let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
        ConfigError::Parse {
            path: path.to_path_buf(),
            source: IniError::new(line, IniErrorKind::InvalidUtf8),
        }
    })?;

    let table = ini::parse_str(&content).map_err(|source| ConfigError::Parse {
        path: PathBuf::from(path),
        source,
    })?;

    let sections = table.values().filter(|value| value.is_table()).count();
    debug!(path = %path.display(), sections, "Parsed config file");
    Ok(table)
}
