//! Keyboard shortcut parsing for session-management actions.
//!
//! Shortcuts are configured as `ctrl+<key>` property values, one per
//! action, e.g. `shortcut.create-session=ctrl+t`. A value that does not
//! fit the grammar is logged and skipped; it never fails the profile
//! load.

use crate::properties::Properties;

/// Session-management actions that can be bound to a Ctrl shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Open a new terminal session.
    CreateSession,
    /// Switch to the next session.
    NextSession,
    /// Switch to the previous session.
    PreviousSession,
    /// Rename the current session.
    RenameSession,
}

impl ShortcutAction {
    /// Returns all variants of `ShortcutAction`
    pub fn variants() -> &'static [ShortcutAction] {
        &[
            ShortcutAction::CreateSession,
            ShortcutAction::NextSession,
            ShortcutAction::PreviousSession,
            ShortcutAction::RenameSession,
        ]
    }

    /// The properties key this action is configured under.
    pub fn property_key(&self) -> &'static str {
        match self {
            ShortcutAction::CreateSession => "shortcut.create-session",
            ShortcutAction::NextSession => "shortcut.next-session",
            ShortcutAction::PreviousSession => "shortcut.previous-session",
            ShortcutAction::RenameSession => "shortcut.rename-session",
        }
    }

    /// Returns a human-readable display name for this variant
    pub fn display_name(&self) -> &'static str {
        match self {
            ShortcutAction::CreateSession => "Create session",
            ShortcutAction::NextSession => "Next session",
            ShortcutAction::PreviousSession => "Previous session",
            ShortcutAction::RenameSession => "Rename session",
        }
    }
}

/// A Ctrl-modified key binding mapped to a session action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardShortcut {
    /// Code point of the key pressed together with Ctrl.
    pub code_point: char,
    /// The action the binding triggers.
    pub action: ShortcutAction,
}

/// Parse the shortcut property for `action`, if one is configured.
///
/// The value is lower-cased and trimmed, then must split on `+` into
/// exactly `ctrl` and a key of one or two UTF-16 code units. Anything
/// else is rejected with a log entry and yields no binding.
pub(crate) fn parse_shortcut(
    action: ShortcutAction,
    props: &Properties,
) -> Option<KeyboardShortcut> {
    let key = action.property_key();
    let value = props.get(key)?.to_lowercase();
    let parts: Vec<&str> = value.trim().split('+').collect();
    let [modifier, input] = parts.as_slice() else {
        log::warn!("Keyboard shortcut '{key}' is not ctrl+<key>");
        return None;
    };
    if modifier.trim() != "ctrl" {
        log::warn!("Keyboard shortcut '{key}' is not ctrl+<key>");
        return None;
    }

    let units: Vec<u16> = input.trim().encode_utf16().collect();
    let Some(code_point) = code_point_from_utf16(&units) else {
        log::warn!("Keyboard shortcut '{key}' is not ctrl+<key>");
        return None;
    };
    Some(KeyboardShortcut { code_point, action })
}

/// Combine one or two UTF-16 code units into a single scalar value.
///
/// Two-unit input is only accepted as a surrogate pair stored low unit
/// first, the order the legacy on-disk format produced. Everything else
/// (empty input, more than two units, unpaired surrogates) is rejected.
fn code_point_from_utf16(units: &[u16]) -> Option<char> {
    const HIGH: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
    const LOW: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

    match units {
        [unit] => char::from_u32(u32::from(*unit)),
        [low, high] if LOW.contains(low) && HIGH.contains(high) => {
            let combined =
                0x10000 + ((u32::from(*high) - 0xD800) << 10) + (u32::from(*low) - 0xDC00);
            char::from_u32(combined)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props_with(key: &str, value: &str) -> Properties {
        let mut props = Properties::new();
        props.set(key, value);
        props
    }

    #[test]
    fn test_ctrl_letter_parses() {
        let props = props_with("shortcut.create-session", "ctrl+c");
        let shortcut =
            parse_shortcut(ShortcutAction::CreateSession, &props).expect("shortcut parses");
        assert_eq!(shortcut.code_point, 'c');
        assert_eq!(shortcut.action, ShortcutAction::CreateSession);
    }

    #[test]
    fn test_value_is_lowercased_and_trimmed() {
        let props = props_with("shortcut.next-session", "  CTRL + N  ");
        let shortcut =
            parse_shortcut(ShortcutAction::NextSession, &props).expect("shortcut parses");
        assert_eq!(shortcut.code_point, 'n');
    }

    #[test]
    fn test_unset_key_yields_no_shortcut() {
        let props = Properties::new();
        assert!(parse_shortcut(ShortcutAction::RenameSession, &props).is_none());
    }

    #[test]
    fn test_non_ctrl_modifier_rejected() {
        let props = props_with("shortcut.create-session", "shift+c");
        assert!(parse_shortcut(ShortcutAction::CreateSession, &props).is_none());
    }

    #[test]
    fn test_empty_key_part_rejected() {
        let props = props_with("shortcut.create-session", "ctrl+");
        assert!(parse_shortcut(ShortcutAction::CreateSession, &props).is_none());
    }

    #[test]
    fn test_missing_separator_rejected() {
        let props = props_with("shortcut.create-session", "ctrl");
        assert!(parse_shortcut(ShortcutAction::CreateSession, &props).is_none());
    }

    #[test]
    fn test_three_part_value_rejected() {
        let props = props_with("shortcut.create-session", "ctrl+shift+c");
        assert!(parse_shortcut(ShortcutAction::CreateSession, &props).is_none());
    }

    #[test]
    fn test_key_longer_than_two_units_rejected() {
        let props = props_with("shortcut.create-session", "ctrl+abc");
        assert!(parse_shortcut(ShortcutAction::CreateSession, &props).is_none());
    }

    #[test]
    fn test_single_unit_code_point() {
        assert_eq!(code_point_from_utf16(&[0x0063]), Some('c'));
        assert_eq!(code_point_from_utf16(&[0x00E9]), Some('é'));
    }

    #[test]
    fn test_low_then_high_surrogate_pair_combines() {
        // U+1F600 stored low-unit-first: low 0xDE00, high 0xD83D.
        assert_eq!(code_point_from_utf16(&[0xDE00, 0xD83D]), Some('\u{1F600}'));
    }

    #[test]
    fn test_invalid_two_unit_combinations_rejected() {
        // High-before-low (well-formed UTF-16 order) is not the legacy order.
        assert_eq!(code_point_from_utf16(&[0xD83D, 0xDE00]), None);
        // Two BMP units are two characters, not one key.
        assert_eq!(code_point_from_utf16(&[0x0061, 0x0062]), None);
        // Two low surrogates.
        assert_eq!(code_point_from_utf16(&[0xDE00, 0xDE01]), None);
    }

    #[test]
    fn test_lone_surrogate_rejected() {
        assert_eq!(code_point_from_utf16(&[0xD83D]), None);
        assert_eq!(code_point_from_utf16(&[]), None);
    }

    #[test]
    fn test_property_keys_are_distinct() {
        let keys: Vec<&str> = ShortcutAction::variants()
            .iter()
            .map(|a| a.property_key())
            .collect();
        assert_eq!(keys.len(), 4);
        for key in &keys {
            assert!(key.starts_with("shortcut."));
        }
    }
}
