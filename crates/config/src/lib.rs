//! Configuration container for the PSA API client.
//!
//! This crate loads key/value settings from an INI file or an in-memory
//! table and serves them by key.
//!
//! ```rust,ignore
//! use psa_config::Config;
//!
//! let config = Config::from_path("/etc/psa/config.ini")?;
//! let database = config.get("database")?;
//! ```

mod config;
pub mod constants;
mod error;
pub mod ini;
mod path;
mod source;
mod value;

pub use config::Config;
pub use error::{ConfigError, Result};
pub use ini::{IniError, IniErrorKind};
pub use source::ConfigSource;
pub use value::{ConfigKey, ConfigValue, Table};
