//! Durable key-value preference storage.
//!
//! The session talks to a [`PreferenceStore`] rather than the filesystem
//! directly, so the core stays testable with an in-memory substitute and a
//! broken disk never takes the session down. The production store keeps a
//! human-editable `key = value` settings file and rewrites single keys in
//! place, preserving comments and unrelated lines.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use super::types::ThemeMode;

/// Settings key under which the theme preference is stored.
pub const THEME_KEY: &str = "theme";

/// Default settings file written on first save.
const SETTINGS_SKELETON_CONTENT: &str = "\
# Folio settings
# One `key = value` per line; lines starting with # are ignored.

# Palette mode: dark | light
theme = dark
";

/// Durable key-value storage collaborator.
///
/// Both operations are best-effort: `get` answers `None` for missing or
/// unreadable state and `set` reports success without ever panicking. Callers
/// treat a failed write as a lost preference, not an error condition.
pub trait PreferenceStore {
    /// Read the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`. Returns `false` when the write failed.
    fn set(&mut self, key: &str, value: &str) -> bool;
}

/// Preference store backed by a `key = value` settings file.
#[derive(Debug, Clone)]
pub struct FsPreferenceStore {
    /// Settings file location.
    path: PathBuf,
}

/// Strip a trailing `# comment` from a settings value.
fn strip_inline_comment(val: &str) -> &str {
    match val.find('#') {
        Some(i) => val[..i].trim(),
        None => val.trim(),
    }
}

impl FsPreferenceStore {
    /// Store backed by the file at `path`.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store backed by the default settings location.
    pub fn at_default_location() -> Self {
        Self::new(super::paths::settings_path())
    }
}

impl PreferenceStore for FsPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        let content = fs::read_to_string(&self.path).ok()?;
        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
                continue;
            }
            let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
                continue;
            };
            if raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_") == key {
                return Some(strip_inline_comment(raw_val).to_string());
            }
        }
        None
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        if let Some(dir) = self.path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        // Missing or empty file starts from the commented skeleton.
        let existing = fs::read_to_string(&self.path)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| SETTINGS_SKELETON_CONTENT.to_string());
        let mut lines: Vec<String> = existing.lines().map(|s| s.to_string()).collect();
        let mut replaced = false;
        for line in &mut lines {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
                continue;
            }
            if let Some((raw_key, _)) = trimmed.split_once('=')
                && raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_") == key
            {
                *line = format!("{key} = {value}");
                replaced = true;
            }
        }
        if !replaced {
            lines.push(format!("{key} = {value}"));
        }
        let mut content = lines.join("\n");
        content.push('\n');
        fs::write(&self.path, content).is_ok()
    }
}

/// In-memory preference store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        self.values.insert(key.to_string(), value.to_string());
        true
    }
}

/// Read the theme mode from `store`, defaulting to dark when the key is
/// missing, unreadable, or holds an unrecognized value.
pub fn load_theme_mode(store: &dyn PreferenceStore) -> ThemeMode {
    store
        .get(THEME_KEY)
        .and_then(|v| ThemeMode::from_config_key(&v))
        .unwrap_or_default()
}

/// Persist `mode` through `store`, best-effort. A failed write is logged and
/// otherwise ignored; the in-memory mode stays authoritative for the session.
pub fn save_theme_mode(store: &mut dyn PreferenceStore, mode: ThemeMode) {
    if !store.set(THEME_KEY, mode.as_config_key()) {
        tracing::warn!(mode = mode.as_config_key(), "theme preference not persisted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store whose writes always fail, for exercising the fallback path.
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&mut self, _key: &str, _value: &str) -> bool {
            false
        }
    }

    #[test]
    fn fresh_store_defaults_to_dark() {
        let store = MemoryPreferenceStore::default();
        assert_eq!(load_theme_mode(&store), ThemeMode::Dark);
    }

    #[test]
    fn saved_mode_round_trips() {
        let mut store = MemoryPreferenceStore::default();
        save_theme_mode(&mut store, ThemeMode::Light);
        assert_eq!(load_theme_mode(&store), ThemeMode::Light);
        save_theme_mode(&mut store, ThemeMode::Dark);
        assert_eq!(load_theme_mode(&store), ThemeMode::Dark);
    }

    #[test]
    fn unrecognized_value_falls_back_to_dark() {
        let mut store = MemoryPreferenceStore::default();
        assert!(store.set(THEME_KEY, "solarized"));
        assert_eq!(load_theme_mode(&store), ThemeMode::Dark);
    }

    #[test]
    fn broken_store_never_panics() {
        let mut store = BrokenStore;
        save_theme_mode(&mut store, ThemeMode::Light);
        assert_eq!(load_theme_mode(&store), ThemeMode::Dark);
    }

    /// What: File-backed saves rewrite only the targeted key line.
    ///
    /// - Input: a settings file with comments and an unrelated key
    /// - Output: theme line updated, everything else preserved verbatim
    #[test]
    fn fs_store_preserves_unrelated_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        std::fs::write(&path, "# kept comment\ntheme = dark\ncustom_key = 7\n")
            .expect("seed settings");
        let mut store = FsPreferenceStore::new(path.clone());
        save_theme_mode(&mut store, ThemeMode::Light);
        let content = std::fs::read_to_string(&path).expect("read back");
        assert!(content.contains("# kept comment"));
        assert!(content.contains("theme = light"));
        assert!(content.contains("custom_key = 7"));
        assert_eq!(store.get("custom_key").as_deref(), Some("7"));
    }

    #[test]
    fn fs_store_initializes_skeleton_on_first_write() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        let mut store = FsPreferenceStore::new(path.clone());
        assert_eq!(store.get(THEME_KEY), None);
        save_theme_mode(&mut store, ThemeMode::Light);
        let content = std::fs::read_to_string(&path).expect("read back");
        assert!(content.starts_with("# Folio settings"));
        assert_eq!(load_theme_mode(&store), ThemeMode::Light);
    }

    #[test]
    fn fs_store_get_strips_inline_comments() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        std::fs::write(&path, "theme = light # preferred during the day\n").expect("seed");
        let store = FsPreferenceStore::new(path);
        assert_eq!(load_theme_mode(&store), ThemeMode::Light);
    }
}
