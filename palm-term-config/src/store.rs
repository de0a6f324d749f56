//! Process-wide store of loaded profiles.
//!
//! The store maps profile id to [`Profile`], insertion-ordered, and is
//! rebuilt wholesale on each [`ProfileStore::reload`]. The replacement
//! mapping is built on the side and swapped in once complete, so a
//! reader holding the store never observes a half-updated state.

use std::collections::HashMap;
use std::path::Path;

use crate::notify::Notifier;
use crate::paths::ConfigPaths;
use crate::profile::{DEFAULT_PROFILE_ID, Profile};
use crate::properties::Properties;

/// Insertion-ordered mapping from profile id to loaded profile.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profiles: HashMap<String, Profile>,
    order: Vec<String>,
}

impl ProfileStore {
    /// Create an empty store. Populate it with [`ProfileStore::reload`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a profile by id.
    pub fn get(&self, id: &str) -> Option<&Profile> {
        self.profiles.get(id)
    }

    /// Number of loaded profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the store holds no profiles (true only before the first
    /// reload).
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Profile ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Profiles in insertion order.
    pub fn profiles_ordered(&self) -> Vec<&Profile> {
        self.order
            .iter()
            .filter_map(|id| self.profiles.get(id))
            .collect()
    }

    /// Insert a profile, keeping the original position when the id is
    /// already present.
    fn insert(&mut self, profile: Profile) {
        if !self.profiles.contains_key(&profile.id) {
            self.order.push(profile.id.clone());
        }
        self.profiles.insert(profile.id.clone(), profile);
    }

    /// Rebuild the store from the properties files under `paths`.
    ///
    /// The `default` profile always exists afterwards, even when no
    /// config file is present (a missing file is an empty key set).
    /// Recoverable problems are reported through `notifier` and degrade
    /// instead of aborting: an unreadable file loads as empty, an
    /// unlistable profiles directory counts as zero profile files.
    pub fn reload(&mut self, paths: &ConfigPaths, notifier: &dyn Notifier) {
        let mut next = ProfileStore::new();

        next.insert(Self::load_file(
            DEFAULT_PROFILE_ID,
            &paths.default_config_file(),
            notifier,
        ));

        match paths.profile_files() {
            Ok(files) => {
                for file in files {
                    // Skip names that yield no usable id (non-UTF-8).
                    let Some(id) = file.file_stem().and_then(|stem| stem.to_str()) else {
                        continue;
                    };
                    let profile = Self::load_file(id, &file, notifier);
                    next.insert(profile);
                }
            }
            Err(e) => {
                notifier.notify("Could not list profiles.");
                log::error!("Error listing profiles: {e}");
            }
        }

        *self = next;
    }

    /// Load one profile from a properties file. A missing file is an
    /// empty key set; an unreadable one is reported and also treated
    /// as empty.
    fn load_file(id: &str, path: &Path, notifier: &dyn Notifier) -> Profile {
        let props = match Properties::load(path) {
            Ok(props) => props,
            Err(e) => {
                let name = path.file_name().unwrap_or_default().to_string_lossy();
                notifier.notify(&format!("Could not open properties file {name}."));
                log::error!("Error loading {}: {e}", path.display());
                Properties::new()
            }
        };
        Profile::from_properties(id, &props, notifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{BellBehaviour, default_extra_keys};
    use std::cell::RefCell;
    use std::fs;
    use std::path::Path;

    #[derive(Default)]
    struct RecordingNotifier {
        messages: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    fn paths_in(dir: &Path) -> ConfigPaths {
        ConfigPaths::new(dir.join("legacy"), dir.join("xdg"))
    }

    fn write_profile(dir: &Path, name: &str, contents: &str) {
        let profiles = dir.join("legacy").join("profiles");
        fs::create_dir_all(&profiles).expect("mkdir");
        fs::write(profiles.join(name), contents).expect("write");
    }

    #[test]
    fn test_reload_without_any_files_yields_default_profile() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let notifier = RecordingNotifier::default();
        let mut store = ProfileStore::new();

        store.reload(&paths_in(tmp.path()), &notifier);

        assert_eq!(store.len(), 1);
        let profile = store.get(DEFAULT_PROFILE_ID).expect("default profile");
        assert_eq!(profile.id, DEFAULT_PROFILE_ID);
        assert_eq!(profile.bell_behaviour, BellBehaviour::Vibrate);
        assert_eq!(profile.extra_keys, default_extra_keys());
        assert!(notifier.messages.borrow().is_empty());
    }

    #[test]
    fn test_reload_reads_base_config_for_default_profile() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let legacy = tmp.path().join("legacy");
        fs::create_dir_all(&legacy).expect("mkdir");
        fs::write(
            legacy.join("palm-term.properties"),
            "bell-character=ignore\nback-key=escape\n",
        )
        .expect("write");

        let mut store = ProfileStore::new();
        store.reload(&paths_in(tmp.path()), &RecordingNotifier::default());

        let profile = store.get(DEFAULT_PROFILE_ID).expect("default profile");
        assert_eq!(profile.bell_behaviour, BellBehaviour::Ignore);
        assert!(profile.back_is_escape);
    }

    #[test]
    fn test_profile_id_is_file_stem_with_defaults_for_empty_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write_profile(tmp.path(), "work.properties", "");

        let mut store = ProfileStore::new();
        store.reload(&paths_in(tmp.path()), &RecordingNotifier::default());

        assert_eq!(store.len(), 2);
        let work = store.get("work").expect("work profile");
        assert_eq!(work.id, "work");
        assert_eq!(work.display_name, "work");
        assert_eq!(work.bell_behaviour, BellBehaviour::Vibrate);
        assert_eq!(work.extra_keys, default_extra_keys());
    }

    #[test]
    fn test_insertion_order_is_default_then_files_sorted() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write_profile(tmp.path(), "work.properties", "");
        write_profile(tmp.path(), "home.properties", "");

        let mut store = ProfileStore::new();
        store.reload(&paths_in(tmp.path()), &RecordingNotifier::default());

        let ids: Vec<&str> = store.ids().collect();
        assert_eq!(ids, vec![DEFAULT_PROFILE_ID, "home", "work"]);
        assert_eq!(store.profiles_ordered().len(), 3);
    }

    #[test]
    fn test_profile_file_named_default_overwrites_in_place() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write_profile(tmp.path(), "default.properties", "bell-character=beep\n");
        write_profile(tmp.path(), "extra.properties", "");

        let mut store = ProfileStore::new();
        store.reload(&paths_in(tmp.path()), &RecordingNotifier::default());

        assert_eq!(store.len(), 2);
        let ids: Vec<&str> = store.ids().collect();
        assert_eq!(ids, vec![DEFAULT_PROFILE_ID, "extra"]);
        let default = store.get(DEFAULT_PROFILE_ID).expect("default profile");
        assert_eq!(default.bell_behaviour, BellBehaviour::Beep);
    }

    #[test]
    fn test_reload_replaces_previous_mapping_wholesale() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write_profile(tmp.path(), "old.properties", "");

        let mut store = ProfileStore::new();
        store.reload(&paths_in(tmp.path()), &RecordingNotifier::default());
        assert!(store.get("old").is_some());

        fs::remove_file(tmp.path().join("legacy").join("profiles").join("old.properties"))
            .expect("remove");
        write_profile(tmp.path(), "new.properties", "");
        store.reload(&paths_in(tmp.path()), &RecordingNotifier::default());

        assert!(store.get("old").is_none());
        assert!(store.get("new").is_some());
        assert!(store.get(DEFAULT_PROFILE_ID).is_some());
    }

    #[test]
    fn test_unreadable_profile_file_notifies_and_loads_defaults() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let profiles = tmp.path().join("legacy").join("profiles");
        fs::create_dir_all(&profiles).expect("mkdir");
        // Invalid UTF-8 makes the read fail while the file still exists.
        fs::write(profiles.join("bad.properties"), [0xFF, 0xFE, 0xFD]).expect("write");

        let notifier = RecordingNotifier::default();
        let mut store = ProfileStore::new();
        store.reload(&paths_in(tmp.path()), &notifier);

        let bad = store.get("bad").expect("profile still present");
        assert_eq!(bad.bell_behaviour, BellBehaviour::Vibrate);
        assert_eq!(
            *notifier.messages.borrow(),
            vec!["Could not open properties file bad.properties.".to_string()]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_unlistable_profiles_dir_notifies_and_keeps_default() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().expect("tempdir");
        let profiles = tmp.path().join("legacy").join("profiles");
        fs::create_dir_all(&profiles).expect("mkdir");
        fs::write(profiles.join("hidden.properties"), "").expect("write");
        fs::set_permissions(&profiles, fs::Permissions::from_mode(0o000)).expect("chmod");
        if fs::read_dir(&profiles).is_ok() {
            // Running as root; the permission denial is not enforced.
            fs::set_permissions(&profiles, fs::Permissions::from_mode(0o755)).expect("chmod");
            return;
        }

        let notifier = RecordingNotifier::default();
        let mut store = ProfileStore::new();
        store.reload(&paths_in(tmp.path()), &notifier);

        // Restore permissions so the tempdir can be cleaned up.
        fs::set_permissions(&profiles, fs::Permissions::from_mode(0o755)).expect("chmod");

        assert_eq!(store.len(), 1);
        assert!(store.get(DEFAULT_PROFILE_ID).is_some());
        assert_eq!(
            *notifier.messages.borrow(),
            vec!["Could not list profiles.".to_string()]
        );
    }
}
