//! Config file location resolution.
//!
//! palm-term reads its configuration from `~/.palm-term` (the legacy
//! location) with `~/.config/palm-term` as the XDG-style fallback.
//! Each location holds an optional `palm-term.properties` base file
//! and a `profiles/` directory of per-profile `.properties` files.

use std::path::{Path, PathBuf};

/// File name of the base (default profile) properties file.
pub const BASE_CONFIG_FILE: &str = "palm-term.properties";

/// Extension recognised for profile files.
pub const PROFILE_EXTENSION: &str = "properties";

/// Name of the profiles subdirectory inside a config directory.
pub const PROFILES_DIR: &str = "profiles";

/// Candidate configuration directories, in preference order.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    legacy_dir: PathBuf,
    xdg_dir: PathBuf,
}

impl ConfigPaths {
    /// Resolve the standard locations under the user's home directory.
    pub fn from_home() -> Option<Self> {
        let home = dirs::home_dir()?;
        Some(Self {
            legacy_dir: home.join(".palm-term"),
            xdg_dir: home.join(".config").join("palm-term"),
        })
    }

    /// Build from explicit directories. Tests point this at tempdirs.
    pub fn new(legacy_dir: impl Into<PathBuf>, xdg_dir: impl Into<PathBuf>) -> Self {
        Self {
            legacy_dir: legacy_dir.into(),
            xdg_dir: xdg_dir.into(),
        }
    }

    /// Path of the base config file: the legacy location when the file
    /// exists there, otherwise the XDG location.
    pub fn default_config_file(&self) -> PathBuf {
        let legacy = self.legacy_dir.join(BASE_CONFIG_FILE);
        if legacy.exists() {
            legacy
        } else {
            self.xdg_dir.join(BASE_CONFIG_FILE)
        }
    }

    /// Profile files to load. The XDG profiles directory is only
    /// consulted when the legacy one yields no files.
    ///
    /// A directory that cannot be enumerated (permission denial) is an
    /// error so the caller can surface it; a missing directory is just
    /// empty. Files are sorted by name so load order is deterministic.
    pub fn profile_files(&self) -> std::io::Result<Vec<PathBuf>> {
        let mut files = Self::list_profile_files(&self.legacy_dir.join(PROFILES_DIR))?;
        if files.is_empty() {
            files = Self::list_profile_files(&self.xdg_dir.join(PROFILES_DIR))?;
        }
        Ok(files)
    }

    fn list_profile_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some(PROFILE_EXTENSION)
                && path.is_file()
            {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}
