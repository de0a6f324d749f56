//! Persisted application settings.
//!
//! Small user choices that live outside the properties files: whether
//! the extra-keys row is shown, whether the screen stays on, the
//! current font size, and the last focused session. Stored in a YAML
//! state file that is rewritten atomically on every change.

use crate::error::ConfigError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest font size the UI allows, in pixels.
pub const MAX_FONT_SIZE: i32 = 256;

/// Pixels added or removed by one font size adjustment step.
pub const FONT_SIZE_STEP: i32 = 2;

/// On-disk shape of the state file. Every field optional so old or
/// partial files still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SettingsState {
    show_extra_keys: Option<bool>,
    screen_always_on: Option<bool>,
    font_size: Option<i32>,
    current_session: Option<String>,
}

/// Persisted application settings backed by a YAML state file.
///
/// Construction derives the font size limits from the display density:
/// the minimum is high enough that text cannot be zoomed into
/// invisibility by mistake, the default is a comfortable reading size
/// rounded down to an even number so it stays divisible by the
/// adjustment step.
#[derive(Debug)]
pub struct AppSettings {
    state_path: PathBuf,
    min_font_size: i32,
    show_extra_keys: bool,
    screen_always_on: bool,
    font_size: i32,
    current_session: Option<String>,
}

impl AppSettings {
    /// State file path under the XDG data directory.
    pub fn state_file_path() -> PathBuf {
        if let Some(home_dir) = dirs::home_dir() {
            home_dir
                .join(".local")
                .join("share")
                .join("palm-term")
                .join("state.yaml")
        } else {
            PathBuf::from("state.yaml")
        }
    }

    /// Load settings from `state_path`, falling back to density-derived
    /// defaults when no valid state file exists.
    ///
    /// `dip_in_pixels` is the size of one density-independent pixel in
    /// physical pixels on the current display.
    pub fn load(state_path: impl Into<PathBuf>, dip_in_pixels: f32) -> Self {
        let state_path = state_path.into();
        let min_font_size = ((4.0 * dip_in_pixels) as i32).min(MAX_FONT_SIZE);
        let mut default_font_size = (12.0 * dip_in_pixels).round() as i32;
        if default_font_size % 2 == 1 {
            default_font_size -= 1;
        }

        let state = match Self::read_state(&state_path) {
            Ok(state) => state,
            Err(e) => {
                log::warn!(
                    "Failed to read settings state {}: {e}",
                    state_path.display()
                );
                SettingsState::default()
            }
        };

        let font_size = state
            .font_size
            .unwrap_or(default_font_size)
            .clamp(min_font_size, MAX_FONT_SIZE);

        Self {
            state_path,
            min_font_size,
            show_extra_keys: state.show_extra_keys.unwrap_or(true),
            screen_always_on: state.screen_always_on.unwrap_or(false),
            font_size,
            current_session: state.current_session,
        }
    }

    fn read_state(path: &Path) -> Result<SettingsState> {
        if !path.exists() {
            return Ok(SettingsState::default());
        }
        let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
        let state = serde_yaml_ng::from_str(&contents)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(state)
    }

    /// Write the current settings to the state file.
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.state_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let state = SettingsState {
            show_extra_keys: Some(self.show_extra_keys),
            screen_always_on: Some(self.screen_always_on),
            font_size: Some(self.font_size),
            current_session: self.current_session.clone(),
        };
        let yaml = serde_yaml_ng::to_string(&state)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = self.state_path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, &self.state_path)?;

        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            log::warn!(
                "Failed to save settings state {}: {e}",
                self.state_path.display()
            );
        }
    }

    /// Whether the extra-keys row is shown.
    pub fn show_extra_keys(&self) -> bool {
        self.show_extra_keys
    }

    /// Flip the extra-keys row visibility and return the new value.
    pub fn toggle_show_extra_keys(&mut self) -> bool {
        self.show_extra_keys = !self.show_extra_keys;
        self.persist();
        self.show_extra_keys
    }

    /// Whether the screen is kept on while the app is visible.
    pub fn screen_always_on(&self) -> bool {
        self.screen_always_on
    }

    /// Set the screen-always-on flag.
    pub fn set_screen_always_on(&mut self, value: bool) {
        self.screen_always_on = value;
        self.persist();
    }

    /// Current font size in pixels.
    pub fn font_size(&self) -> i32 {
        self.font_size
    }

    /// Smallest font size allowed on this display.
    pub fn min_font_size(&self) -> i32 {
        self.min_font_size
    }

    /// Adjust the font size one step up or down, clamped to the
    /// allowed range, and return the new value.
    pub fn change_font_size(&mut self, increase: bool) -> i32 {
        let delta = if increase {
            FONT_SIZE_STEP
        } else {
            -FONT_SIZE_STEP
        };
        self.font_size = (self.font_size + delta).clamp(self.min_font_size, MAX_FONT_SIZE);
        self.persist();
        self.font_size
    }

    /// Remember the handle of the most recently focused session.
    pub fn store_current_session(&mut self, handle: impl Into<String>) {
        self.current_session = Some(handle.into());
        self.persist();
    }

    /// Index of the remembered session within `handles`, if it still
    /// exists.
    pub fn current_session_index(&self, handles: &[String]) -> Option<usize> {
        let handle = self.current_session.as_deref()?;
        handles.iter().position(|h| h == handle)
    }
}
