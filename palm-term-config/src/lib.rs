//! Preferences system for the palm-term terminal emulator.
//!
//! This crate loads the user-editable properties files that configure
//! terminal behaviour. It includes:
//!
//! - The `Profile` data model with per-key defaults
//! - Keyboard shortcut parsing for session-management actions
//! - A Java-properties-style key/value file reader
//! - Config path resolution (legacy dot-directory with XDG fallback)
//! - The `ProfileStore` mapping profile ids to loaded profiles
//! - Persisted application settings (font size, extra keys, screen-on)

pub mod error;
pub mod notify;
pub mod paths;
pub mod profile;
pub mod properties;
pub mod settings;
pub mod shortcut;
pub mod store;

// Re-export main types for convenience
pub use error::ConfigError;
pub use notify::{LogNotifier, Notifier};
pub use paths::ConfigPaths;
pub use profile::{BellBehaviour, DEFAULT_PROFILE_ID, Profile};
pub use properties::Properties;
pub use settings::AppSettings;
pub use shortcut::{KeyboardShortcut, ShortcutAction};
pub use store::ProfileStore;
