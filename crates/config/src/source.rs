//! Constructor input for `Config`.
//!
//! A config is built either from an INI file path or from an in-memory
//! table. `ConfigSource` makes that choice explicit; the `serde_json::Value`
//! conversion is the dynamic entry point for callers that only know the
//! input's shape at runtime.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::value::{ConfigValue, Table};

/// Where a `Config` takes its initial entries from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path to an INI file.
    Path(PathBuf),
    /// Pre-built nested table, used as-is.
    Map(Table),
}

impl ConfigSource {
    /// Short label for logging.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            ConfigSource::Path(_) => "path",
            ConfigSource::Map(_) => "map",
        }
    }
}

impl From<PathBuf> for ConfigSource {
    fn from(path: PathBuf) -> Self {
        ConfigSource::Path(path)
    }
}

impl From<&Path> for ConfigSource {
    fn from(path: &Path) -> Self {
        ConfigSource::Path(path.to_path_buf())
    }
}

impl From<Table> for ConfigSource {
    fn from(table: Table) -> Self {
        ConfigSource::Map(table)
    }
}

impl TryFrom<serde_json::Value> for ConfigSource {
    type Error = ConfigError;

    /// A JSON string names a file; a JSON object is a table. Anything else is rejected.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        let found = match &value {
            Value::String(_) | Value::Object(_) => None,
            Value::Null => Some("null"),
            Value::Bool(_) => Some("bool"),
            Value::Number(_) => Some("number"),
            Value::Array(_) => Some("array"),
        };
        if let Some(found) = found {
            return Err(ConfigError::UnsupportedType { found });
        }

        match value {
            Value::String(path) => Ok(ConfigSource::Path(PathBuf::from(path))),
            object => match serde_json::from_value::<ConfigValue>(object) {
                Ok(ConfigValue::Table(table)) => Ok(ConfigSource::Map(table)),
                // Nested numbers, bools, arrays or nulls inside the object.
                _ => Err(ConfigError::UnsupportedType {
                    found: "object with non-string values",
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ConfigKey;
    use serde_json::json;

    #[test]
    fn test_json_string_is_path() {
        let source = ConfigSource::try_from(json!("/etc/psa/config.ini")).unwrap();
        assert_eq!(source, ConfigSource::Path(PathBuf::from("/etc/psa/config.ini")));
        assert_eq!(source.kind(), "path");
    }

    #[test]
    fn test_json_object_is_map() {
        let source = ConfigSource::try_from(json!({
            "company": "acme",
            "api": { "url": "https://psa.example.com" }
        }))
        .unwrap();

        let ConfigSource::Map(table) = source else {
            panic!("expected a map source");
        };
        assert_eq!(table.len(), 2);
        assert!(table[&ConfigKey::from("api")].is_table());
    }

    #[test]
    fn test_json_scalars_are_unsupported() {
        for (value, expected) in [
            (json!(42), "number"),
            (json!(true), "bool"),
            (json!(null), "null"),
            (json!(["a"]), "array"),
        ] {
            let err = ConfigSource::try_from(value).unwrap_err();
            assert!(
                matches!(err, ConfigError::UnsupportedType { found } if found == expected),
                "expected UnsupportedType({expected}), got {err:?}"
            );
        }
    }

    #[test]
    fn test_json_object_with_number_value_is_unsupported() {
        let err = ConfigSource::try_from(json!({ "port": 5432 })).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedType { .. }));
    }
}
