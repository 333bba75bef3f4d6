//! Integration tests for session behavior: the selection machine, theme
//! persistence through the preference store, the clipboard collaborator, and
//! command-line search parity.

use std::sync::Mutex;

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

use folio::args::search_lines;
use folio::catalog::Catalog;
use folio::clipboard::Clipboard;
use folio::events::handle_event;
use folio::filter::{FilterState, filter};
use folio::state::{AppState, Selection};
use folio::theme::{
    FsPreferenceStore, MemoryPreferenceStore, PreferenceStore, ThemeMode, load_theme_mode,
    save_theme_mode,
};

struct FakeClipboard {
    ok: bool,
    writes: Mutex<Vec<String>>,
}

impl FakeClipboard {
    fn new(ok: bool) -> Self {
        Self {
            ok,
            writes: Mutex::new(Vec::new()),
        }
    }
}

impl Clipboard for FakeClipboard {
    fn write(&self, text: &str) -> bool {
        self.writes.lock().expect("lock").push(text.to_string());
        self.ok
    }
}

fn key(code: KeyCode, mods: KeyModifiers) -> CEvent {
    CEvent::Key(KeyEvent::new(code, mods))
}

#[test]
fn selection_machine_full_cycle() {
    let catalog = Catalog::embedded();
    let a = catalog.projects[0].clone();
    let b = catalog.projects[1].clone();

    let mut sel = Selection::default();
    assert!(sel.current().is_none());

    sel.select(a.clone());
    assert_eq!(sel.current().map(|p| p.name.clone()), Some(a.name));

    // Replacement, never stacking
    sel.select(b.clone());
    assert_eq!(sel.current().map(|p| p.name.clone()), Some(b.name));

    sel.clear();
    assert!(sel.current().is_none());
    // Clearing again stays a no-op
    sel.clear();
    assert!(sel.current().is_none());
}

#[test]
fn theme_preference_round_trips_on_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.conf");

    // Fresh session, nothing stored yet
    let store = FsPreferenceStore::new(path.clone());
    assert_eq!(load_theme_mode(&store), ThemeMode::Dark);

    // Toggle and persist; a second session sees the stored value
    let mut store = FsPreferenceStore::new(path.clone());
    save_theme_mode(&mut store, ThemeMode::Light);
    let reopened = FsPreferenceStore::new(path);
    assert_eq!(load_theme_mode(&reopened), ThemeMode::Light);
}

#[test]
fn theme_toggle_survives_a_broken_store() {
    struct BrokenStore;
    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&mut self, _key: &str, _value: &str) -> bool {
            false
        }
    }

    let mut app = AppState::new(Catalog::embedded(), ThemeMode::Dark);
    let clip = FakeClipboard::new(true);
    let mut prefs = BrokenStore;
    let exited = handle_event(
        key(KeyCode::Char('t'), KeyModifiers::CONTROL),
        &mut app,
        &clip,
        &mut prefs,
    );
    assert!(!exited);
    // The in-memory mode flips even though persistence failed.
    assert_eq!(app.theme_mode, ThemeMode::Light);
}

#[test]
fn copy_email_writes_exactly_the_profile_email() {
    let mut app = AppState::new(Catalog::embedded(), ThemeMode::Dark);
    let email = app.catalog.profile.email.clone();
    let clip = FakeClipboard::new(true);
    let mut prefs = MemoryPreferenceStore::default();
    handle_event(
        key(KeyCode::Char('y'), KeyModifiers::CONTROL),
        &mut app,
        &clip,
        &mut prefs,
    );
    assert_eq!(clip.writes.lock().expect("lock").as_slice(), [email]);
}

#[test]
fn failed_clipboard_does_not_disturb_the_session() {
    let mut app = AppState::new(Catalog::embedded(), ThemeMode::Dark);
    let clip = FakeClipboard::new(false);
    let mut prefs = MemoryPreferenceStore::default();
    let exited = handle_event(
        key(KeyCode::Char('y'), KeyModifiers::CONTROL),
        &mut app,
        &clip,
        &mut prefs,
    );
    assert!(!exited);
    // Still navigable afterwards
    handle_event(key(KeyCode::Down, KeyModifiers::NONE), &mut app, &clip, &mut prefs);
    assert_eq!(app.cursor, 1);
}

#[test]
fn cli_search_prints_what_the_engine_returns() {
    let catalog = Catalog::embedded();
    let lines = search_lines(&catalog, "Tkinter");
    let state = FilterState {
        query: "Tkinter".to_string(),
        ..Default::default()
    };
    let expected: Vec<String> = filter(&catalog.projects, &state)
        .into_iter()
        .map(|p| p.name.clone())
        .collect();
    assert_eq!(lines, expected);
    assert!(!expected.is_empty());
}

#[test]
fn driving_the_session_end_to_end() {
    let mut app = AppState::new(Catalog::embedded(), ThemeMode::Dark);
    let clip = FakeClipboard::new(true);
    let mut prefs = MemoryPreferenceStore::default();
    let mut send = |app: &mut AppState, code, mods| handle_event(key(code, mods), app, &clip, &mut prefs);

    // Narrow with a query, open the first match, close it, clear filters.
    for c in "graph".chars() {
        send(&mut app, KeyCode::Char(c), KeyModifiers::NONE);
    }
    assert_eq!(app.visible.len(), 1);
    send(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(
        app.selection.current().map(|p| p.name.as_str()),
        Some("Movie Knowledge Graph")
    );
    send(&mut app, KeyCode::Esc, KeyModifiers::NONE);
    assert!(!app.selection.is_open());
    send(&mut app, KeyCode::Esc, KeyModifiers::NONE);
    assert!(app.filters.query.is_empty());
    assert_eq!(app.visible.len(), app.catalog.projects.len());
}
