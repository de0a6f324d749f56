//! Typed error variants for the palm-term-config crate.
//!
//! Used internally and exposed for library consumers who want to match
//! on specific failure modes instead of opaque `anyhow` strings.

use std::fmt;

/// Errors produced while reading properties or state files.
///
/// The public load functions return `anyhow::Result`; `ConfigError`
/// values coerce automatically via the `From` impl that `anyhow`
/// provides for any `std::error::Error`, and can be recovered with
/// `downcast_ref` when a caller needs to distinguish failure modes.
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O error occurred reading a properties or state file.
    Io(std::io::Error),

    /// A file's contents could not be parsed.
    ///
    /// The inner string describes the offending input.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error reading config: {e}"),
            ConfigError::Parse(msg) => write!(f, "Config parse error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
