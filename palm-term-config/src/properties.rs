//! Java-properties-style key/value file reader.
//!
//! The palm-term configuration format is a flat UTF-8 text file with
//! one `key=value` pair per logical line. `#` and `!` start comment
//! lines, surrounding whitespace is trimmed, and a trailing backslash
//! continues a pair onto the next line.

use crate::error::ConfigError;
use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;

/// A flat string-to-string key/value set parsed from a properties file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    values: HashMap<String, String>,
}

impl Properties {
    /// Create an empty key/value set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse properties from text.
    ///
    /// Lines without a `=` separator become keys with an empty value;
    /// a later occurrence of a key overwrites an earlier one.
    pub fn parse(text: &str) -> Self {
        let mut values = HashMap::new();
        let mut pending = String::new();

        for raw in text.lines() {
            let line = if pending.is_empty() {
                raw.trim()
            } else {
                raw.trim_start()
            };
            if pending.is_empty()
                && (line.is_empty() || line.starts_with('#') || line.starts_with('!'))
            {
                continue;
            }
            if let Some(head) = line.strip_suffix('\\') {
                pending.push_str(head);
                continue;
            }
            pending.push_str(line);
            Self::insert_pair(&mut values, &std::mem::take(&mut pending));
        }
        // A continuation on the last line has nothing to continue onto.
        if !pending.is_empty() {
            Self::insert_pair(&mut values, &pending);
        }

        Self { values }
    }

    fn insert_pair(values: &mut HashMap<String, String>, logical: &str) {
        let (key, value) = match logical.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (logical.trim(), ""),
        };
        if !key.is_empty() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    /// Read and parse a properties file.
    ///
    /// A missing path yields an empty set. Any other failure (an
    /// existing but unreadable file) is an error for the caller to
    /// report; it carries a [`ConfigError::Io`].
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Ok(Self::parse(&text))
    }

    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Look up a key, falling back to a default.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Insert a pair directly (programmatic construction).
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Number of keys present.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no keys are present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
