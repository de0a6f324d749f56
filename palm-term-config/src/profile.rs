//! Profile data model and per-key defaults.
//!
//! A profile is a named bundle of terminal-behaviour settings loaded
//! from one properties file. Every key is optional; unset keys take
//! the documented default, so an empty file is a valid profile.

use crate::notify::Notifier;
use crate::properties::Properties;
use crate::shortcut::{self, KeyboardShortcut, ShortcutAction};

/// Id of the profile loaded from the base config file.
pub const DEFAULT_PROFILE_ID: &str = "default";

/// How the terminal reacts to an ASCII bell character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BellBehaviour {
    /// Vibrate the device.
    #[default]
    Vibrate,
    /// Play an audible beep.
    Beep,
    /// Do nothing.
    Ignore,
}

impl BellBehaviour {
    /// Returns all variants of `BellBehaviour`
    pub fn variants() -> &'static [BellBehaviour] {
        &[
            BellBehaviour::Vibrate,
            BellBehaviour::Beep,
            BellBehaviour::Ignore,
        ]
    }

    /// Returns a human-readable display name for this variant
    pub fn display_name(&self) -> &'static str {
        match self {
            BellBehaviour::Vibrate => "Vibrate",
            BellBehaviour::Beep => "Beep",
            BellBehaviour::Ignore => "Ignore",
        }
    }

    /// Map a `bell-character` property value. Only the exact strings
    /// `beep` and `ignore` select those behaviours; anything else is
    /// Vibrate.
    fn from_property(value: &str) -> Self {
        match value {
            "beep" => BellBehaviour::Beep,
            "ignore" => BellBehaviour::Ignore,
            _ => BellBehaviour::Vibrate,
        }
    }
}

/// The extra-keys grid used when the key is unset: a single row.
pub fn default_extra_keys() -> Vec<Vec<String>> {
    vec![
        ["ESC", "TAB", "CTRL", "ALT", "-", "DOWN", "UP"]
            .into_iter()
            .map(String::from)
            .collect(),
    ]
}

/// A named bundle of terminal-behaviour settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Unique identifier; for file-backed profiles, the file stem.
    pub id: String,

    /// Display name for the profile (defaults to the id).
    pub display_name: String,

    /// Reaction to the ASCII bell character.
    pub bell_behaviour: BellBehaviour,

    /// Whether the back key sends escape instead of navigating back.
    pub back_is_escape: bool,

    /// Whether the volume keys act as real volume keys instead of
    /// virtual terminal keys.
    pub disable_volume_virtual_keys: bool,

    /// Raw `use-black-ui` value, kept verbatim; interpreted by
    /// [`Profile::is_using_dark_ui`].
    pub use_dark_ui: String,

    /// Whether new sessions start in the current session's working
    /// directory instead of the default one.
    pub use_current_session_cwd: bool,

    /// Rows × columns of auxiliary on-screen key labels.
    pub extra_keys: Vec<Vec<String>>,

    /// Ctrl shortcuts bound to session-management actions.
    pub shortcuts: Vec<KeyboardShortcut>,
}

impl Profile {
    /// Build a profile from a flat key/value set, applying the
    /// documented default for every unset key.
    ///
    /// Never fails: a malformed value degrades to its default. A bad
    /// `extra-keys` value is additionally surfaced through `notifier`
    /// and yields an empty grid (zero rows); bad shortcut values are
    /// logged and skipped.
    pub fn from_properties(
        id: impl Into<String>,
        props: &Properties,
        notifier: &dyn Notifier,
    ) -> Self {
        let id = id.into();
        debug_assert!(!id.is_empty());

        let display_name = props.get_or("profile-display-name", &id).to_string();
        let bell_behaviour =
            BellBehaviour::from_property(props.get_or("bell-character", "vibrate"));
        let use_dark_ui = props.get_or("use-black-ui", "false").to_string();

        let extra_keys = match props.get("extra-keys") {
            None => default_extra_keys(),
            Some(raw) => match parse_extra_keys(raw) {
                Ok(grid) => grid,
                Err(e) => {
                    notifier.notify(&format!(
                        "Could not load the extra-keys property from the config: {e}"
                    ));
                    log::error!("Error parsing extra-keys for profile '{id}': {e}");
                    Vec::new()
                }
            },
        };

        let back_is_escape = props.get_or("back-key", "back") == "escape";
        let disable_volume_virtual_keys = props.get_or("volume-keys", "virtual") == "volume";
        let use_current_session_cwd = props.get_or("session.cwd-on-create", "default") == "current";

        let shortcuts = ShortcutAction::variants()
            .iter()
            .filter_map(|action| shortcut::parse_shortcut(*action, props))
            .collect();

        Self {
            id,
            display_name,
            bell_behaviour,
            back_is_escape,
            disable_volume_virtual_keys,
            use_dark_ui,
            use_current_session_cwd,
            extra_keys,
            shortcuts,
        }
    }

    /// A profile with the given id and every field at its default.
    pub fn with_defaults(id: impl Into<String>) -> Self {
        Self::from_properties(id, &Properties::new(), &crate::notify::LogNotifier)
    }

    /// Case-insensitive interpretation of the `use-black-ui` value.
    pub fn is_using_dark_ui(&self) -> bool {
        self.use_dark_ui.eq_ignore_ascii_case("true")
    }
}

/// Parse the extra-keys grid value.
///
/// The documented example form writes the grid with single-quoted
/// strings, so those are rewritten to standard JSON before parsing.
fn parse_extra_keys(raw: &str) -> serde_json::Result<Vec<Vec<String>>> {
    serde_json::from_str(&normalize_quotes(raw))
}

/// Rewrite single-quoted strings into double-quoted JSON strings.
///
/// Tracks which kind of string the scanner is inside so quotes and
/// backslash escapes embedded in string contents pass through intact.
/// Input that is not valid under either quoting style comes out as
/// garbage in, garbage out; the JSON parser rejects it either way.
fn normalize_quotes(raw: &str) -> String {
    enum State {
        Plain,
        Double,
        Single,
    }

    let mut out = String::with_capacity(raw.len());
    let mut state = State::Plain;
    let mut escaped = false;
    for c in raw.chars() {
        match state {
            State::Plain => {
                if c == '\'' {
                    state = State::Single;
                    out.push('"');
                } else {
                    if c == '"' {
                        state = State::Double;
                    }
                    out.push(c);
                }
            }
            State::Double => {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == '"' {
                    state = State::Plain;
                }
                out.push(c);
            }
            State::Single => {
                if escaped {
                    escaped = false;
                    if c == '\'' {
                        // An escaped single quote is just the quote in JSON.
                        out.push('\'');
                    } else {
                        out.push('\\');
                        out.push(c);
                    }
                } else if c == '\\' {
                    escaped = true;
                } else if c == '\'' {
                    state = State::Plain;
                    out.push('"');
                } else if c == '"' {
                    // A bare double quote inside a single-quoted string
                    // needs escaping once the delimiters become double.
                    out.push_str("\\\"");
                } else {
                    out.push(c);
                }
            }
        }
    }
    out
}
