//! INI text parsing into nested configuration tables.
//!
//! Responsibilities:
//! - Turn INI text into a `Table`, with `[section]` headers producing nested tables.
//! - Report malformed input with the 1-based line number.
//!
//! Does NOT handle:
//! - File existence checks or reading from disk (see `config`).
//!
//! Invariants:
//! - Lines starting with `;` or `#` are comments; blank lines are ignored.
//! - Keys before the first header are top-level scalars.
//! - A repeated section header merges into the earlier section.
//! - Duplicate keys keep the last value.
//! - Unquoted `true`/`on`/`yes` become `"1"`; `false`/`off`/`no`/`none`/`null` become `""`.
//! - `name[] = v` appends to a table under `name`; `name[k] = v` sets entry `k`.

use thiserror::Error;

use crate::value::{ConfigKey, ConfigValue, Table};


/// A malformed line in INI input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct IniError {
    pub line: usize,
    pub kind: IniErrorKind,
}

/// The reason an INI line was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IniErrorKind {
    #[error("expected `key = value`")]
    MissingEquals,

    #[error("empty key")]
    EmptyKey,

    #[error("section header is missing `]`")]
    UnclosedSection,

    #[error("empty section name")]
    EmptySection,

    #[error("unexpected text after section header")]
    TrailingHeader,

    #[error("unterminated quoted value")]
    UnterminatedQuote,

    #[error("unexpected text after quoted value")]
    TrailingValue,

    #[error("array index past the largest supported index")]
    IndexOverflow,

    #[error("input is not valid UTF-8")]
    InvalidUtf8,
}

impl IniError {
    pub(crate) fn new(line: usize, kind: IniErrorKind) -> Self {
        Self { line, kind }
    }
}

/// Parse INI text into a nested table.
pub fn parse_str(text: &str) -> Result<Table, IniError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut root = Table::new();
    let mut section: Option<ConfigKey> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if line.is_empty() || is_comment(line) {
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            let name = parse_header(rest).map_err(|kind| IniError::new(line_no, kind))?;
            table_entry(&mut root, name.clone());
            section = Some(name);
            continue;
        }

        let (raw_key, raw_value) = line
            .split_once('=')
            .ok_or(IniError::new(line_no, IniErrorKind::MissingEquals))?;
        let value = parse_value(raw_value.trim()).map_err(|kind| IniError::new(line_no, kind))?;

        let target = match &section {
            Some(name) => table_entry(&mut root, name.clone()),
            None => &mut root,
        };
        assign(target, raw_key.trim(), value).map_err(|kind| IniError::new(line_no, kind))?;
    }

    Ok(root)
}

fn is_comment(line: &str) -> bool {
    line.starts_with(';') || line.starts_with('#')
}

/// Parse the remainder of a header line after the opening `[`.
fn parse_header(rest: &str) -> Result<ConfigKey, IniErrorKind> {
    let (name, trailing) = rest
        .split_once(']')
        .ok_or(IniErrorKind::UnclosedSection)?;

    let trailing = trailing.trim();
    if !trailing.is_empty() && !is_comment(trailing) {
        return Err(IniErrorKind::TrailingHeader);
    }

    let name = name.trim();
    if name.is_empty() {
        return Err(IniErrorKind::EmptySection);
    }
    Ok(ConfigKey::from(name))
}

fn parse_value(raw: &str) -> Result<String, IniErrorKind> {
    for quote in ['"', '\''] {
        if let Some(rest) = raw.strip_prefix(quote) {
            let (inner, trailing) = rest
                .split_once(quote)
                .ok_or(IniErrorKind::UnterminatedQuote)?;
            let trailing = trailing.trim();
            if !trailing.is_empty() && !trailing.starts_with(';') {
                return Err(IniErrorKind::TrailingValue);
            }
            return Ok(inner.to_string());
        }
    }

    let unquoted = match raw.split_once(';') {
        Some((value, _comment)) => value.trim(),
        None => raw,
    };
    Ok(coerce_keyword(unquoted))
}

fn coerce_keyword(value: &str) -> String {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" => "1".to_string(),
        "false" | "off" | "no" | "none" | "null" => String::new(),
        _ => value.to_string(),
    }
}

/// Store `value` under `key`, honouring `name[]` and `name[k]` array keys.
fn assign(target: &mut Table, key: &str, value: String) -> Result<(), IniErrorKind> {
    if key.is_empty() {
        return Err(IniErrorKind::EmptyKey);
    }

    let array = key
        .strip_suffix(']')
        .and_then(|head| head.split_once('['));

    match array {
        Some((name, index)) => {
            let entries = table_entry(target, ConfigKey::from(name.trim()));
            let index = index.trim();
            let slot = if index.is_empty() {
                ConfigKey::from(next_index(entries)?)
            } else {
                ConfigKey::from(index)
            };
            entries.insert(slot, ConfigValue::String(value));
        }
        None => {
            target.insert(ConfigKey::from(key), ConfigValue::String(value));
        }
    }
    Ok(())
}

/// One past the largest numeric key, or 0 when there is none.
fn next_index(entries: &Table) -> Result<u64, IniErrorKind> {
    match entries
        .keys()
        .filter_map(|key| key.as_str().parse::<u64>().ok())
        .max()
    {
        Some(max) => max.checked_add(1).ok_or(IniErrorKind::IndexOverflow),
        None => Ok(0),
    }
}

/// Get the table stored under `key`, replacing a scalar or inserting an empty table.
fn table_entry(table: &mut Table, key: ConfigKey) -> &mut Table {
    let slot = table
        .entry(key)
        .or_insert_with(|| ConfigValue::Table(Table::new()));
    if !slot.is_table() {
        *slot = ConfigValue::Table(Table::new());
    }
    match slot {
        ConfigValue::Table(entries) => entries,
        ConfigValue::String(_) => unreachable!("slot was replaced with a table"),
    }
}
