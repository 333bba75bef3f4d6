//! Theme system for Folio: palettes, the dark/light mode preference, and the
//! config paths the rest of the crate shares.
//!
//! Split into submodules; public re-exports keep the `crate::theme::*` API in
//! one place.

/// Dark and light palette definitions.
mod palette;
/// Path resolution for config and log directories.
mod paths;
/// Durable key-value preference storage.
mod prefs;
/// Theme type definitions.
mod types;

pub use palette::palette;
pub use paths::{config_dir, logs_dir, settings_path};
pub use prefs::{
    FsPreferenceStore, MemoryPreferenceStore, PreferenceStore, THEME_KEY, load_theme_mode,
    save_theme_mode,
};
pub use types::{Theme, ThemeMode};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// Process-wide mutex serializing tests that swap `HOME` or touch disk state.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
