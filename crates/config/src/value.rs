//! Key and value types held by the configuration store.
//!
//! Responsibilities:
//! - Define `ConfigKey`, the string-or-numeric identifier used for lookups.
//! - Define `ConfigValue`, a scalar string or a nested table.
//!
//! Does NOT handle:
//! - Parsing INI text (see `ini`).
//! - Merge semantics of the store (see `config`).
//!
//! Invariants:
//! - Numeric keys are stored as their decimal text, so `5` and `"5"` are the same key.
//! - Tables iterate in key order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Nested mapping of configuration entries.
pub type Table = BTreeMap<ConfigKey, ConfigValue>;

/// Identifier of a configuration entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigKey(String);

impl ConfigKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConfigKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for ConfigKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&String> for ConfigKey {
    fn from(key: &String) -> Self {
        Self(key.clone())
    }
}

macro_rules! numeric_key {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ConfigKey {
                fn from(key: $ty) -> Self {
                    Self(key.to_string())
                }
            }
        )*
    };
}

numeric_key!(i32, i64, u32, u64, usize);

/// A configuration value: either a scalar string or a nested table.
///
/// INI files only ever produce strings at the top level and one level of
/// tables for sections; in-memory tables may nest arbitrarily.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    String(String),
    Table(Table),
}

impl ConfigValue {
    /// Returns the scalar contents, or `None` for a table.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            ConfigValue::Table(_) => None,
        }
    }

    /// Returns the nested table, or `None` for a scalar.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            ConfigValue::String(_) => None,
            ConfigValue::Table(table) => Some(table),
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self, ConfigValue::Table(_))
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<Table> for ConfigValue {
    fn from(table: Table) -> Self {
        ConfigValue::Table(table)
    }
}
