//! Event handling layer for the Folio TUI.
//!
//! Converts raw `crossterm` events into mutations on [`AppState`]. All
//! handling is synchronous and runs to completion on the event loop: typing
//! re-filters the gallery immediately, facet keys cycle the category and
//! technology chips, and Enter/Esc drive the detail-view selection machine.
//!
//! The preference store (theme persistence) and the clipboard (copy email)
//! are passed in by the caller so this layer can be exercised end-to-end with
//! in-memory fakes.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::clipboard::Clipboard;
use crate::state::{AppState, Focus, Modal};
use crate::theme::{PreferenceStore, save_theme_mode};

/// Seconds a footer toast stays visible.
const TOAST_SECS: u64 = 3;

/// Dispatch a single terminal event, mutating [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    clipboard: &dyn Clipboard,
    prefs: &mut dyn PreferenceStore,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    // Ctrl+C always exits, regardless of focus or overlays.
    if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    // Overlay precedence: help first, then the details view.
    if app.modal == Modal::Help {
        if matches!(ke.code, KeyCode::Esc | KeyCode::Enter | KeyCode::F(1)) {
            app.modal = Modal::None;
        }
        return false;
    }
    if app.selection.is_open() {
        handle_details_key(ke, app);
        return false;
    }

    // Global shortcuts.
    match (ke.code, ke.modifiers) {
        (KeyCode::F(1), _) => {
            app.modal = Modal::Help;
            return false;
        }
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => {
            toggle_theme(app, prefs);
            return false;
        }
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => {
            copy_email(app, clipboard);
            return false;
        }
        (KeyCode::Tab, _) | (KeyCode::BackTab, _) => {
            app.focus = match app.focus {
                Focus::Search => Focus::Results,
                Focus::Results => Focus::Search,
            };
            return false;
        }
        _ => {}
    }

    match app.focus {
        Focus::Search => handle_search_key(ke, app),
        Focus::Results => handle_results_key(ke, app),
    }
}

/// Keys while the details overlay is open.
fn handle_details_key(ke: KeyEvent, app: &mut AppState) {
    match (ke.code, ke.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('q'), KeyModifiers::NONE) => {
            app.selection.clear();
        }
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => {
            let url = app
                .selection
                .current()
                .and_then(|item| item.links.code.clone())
                .filter(|u| !u.is_empty());
            match url {
                Some(u) => crate::util::spawn_opener(&u),
                None => app.toast("No code link published for this project", TOAST_SECS),
            }
        }
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
            let url = app
                .selection
                .current()
                .and_then(|item| item.links.demo.clone())
                .filter(|u| !u.is_empty());
            match url {
                Some(u) => crate::util::spawn_opener(&u),
                None => app.toast("No demo link published for this project", TOAST_SECS),
            }
        }
        _ => {}
    }
}

/// Keys while the search input is focused: edits mutate the query and the
/// gallery re-filters on every keystroke.
fn handle_search_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match (ke.code, ke.modifiers) {
        (KeyCode::Esc, _) => {
            if app.filters.is_restrictive() {
                app.filters.reset();
                app.recompute_visible();
                return false;
            }
            return true;
        }
        (KeyCode::Enter, _) => select_highlighted(app),
        (KeyCode::Up, _) => app.move_cursor(-1),
        (KeyCode::Down, _) => app.move_cursor(1),
        (KeyCode::Left, KeyModifiers::SHIFT) => cycle_tech(app, false),
        (KeyCode::Right, KeyModifiers::SHIFT) => cycle_tech(app, true),
        (KeyCode::Left, _) => cycle_category(app, false),
        (KeyCode::Right, _) => cycle_category(app, true),
        (KeyCode::Backspace, _) => {
            app.filters.query.pop();
            app.recompute_visible();
        }
        (KeyCode::Char(c), m) if m.is_empty() || m == KeyModifiers::SHIFT => {
            app.filters.query.push(c);
            app.recompute_visible();
        }
        _ => {}
    }
    false
}

/// Keys while the gallery list is focused: Vim-style navigation plus the
/// same facet cycling as the search pane.
fn handle_results_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match (ke.code, ke.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('q'), KeyModifiers::NONE) => {
            if app.filters.is_restrictive() {
                app.filters.reset();
                app.recompute_visible();
                return false;
            }
            return true;
        }
        (KeyCode::Enter, _) => select_highlighted(app),
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => app.move_cursor(-1),
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => app.move_cursor(1),
        (KeyCode::Home, _) | (KeyCode::Char('g'), KeyModifiers::NONE) => {
            app.move_cursor(isize::MIN + 1)
        }
        (KeyCode::End, _) | (KeyCode::Char('G'), KeyModifiers::SHIFT) => {
            app.move_cursor(isize::MAX)
        }
        (KeyCode::Left, KeyModifiers::SHIFT) => cycle_tech(app, false),
        (KeyCode::Right, KeyModifiers::SHIFT) => cycle_tech(app, true),
        (KeyCode::Left, _) => cycle_category(app, false),
        (KeyCode::Right, _) => cycle_category(app, true),
        _ => {}
    }
    false
}

/// Open the details view for the highlighted project, replacing any item
/// already under inspection.
fn select_highlighted(app: &mut AppState) {
    if let Some(item) = app.highlighted().cloned() {
        app.selection.select(item);
    }
}

/// Advance the category facet through the derived chip row, wrapping.
fn cycle_category(app: &mut AppState, forward: bool) {
    let options = app.catalog.categories();
    let next = step(&options, &app.filters.active_category, forward);
    if let Some(choice) = next {
        app.filters.active_category = choice;
        app.recompute_visible();
    }
}

/// Advance the technology facet through the derived chip row, wrapping.
fn cycle_tech(app: &mut AppState, forward: bool) {
    let options = app.catalog.tech_options();
    let next = step(&options, &app.filters.active_tech, forward);
    if let Some(choice) = next {
        app.filters.active_tech = choice;
        app.recompute_visible();
    }
}

/// Next element of `options` after `current`, wrapping around either end.
fn step<T: Clone + PartialEq>(options: &[T], current: &T, forward: bool) -> Option<T> {
    if options.len() < 2 {
        return None;
    }
    let pos = options.iter().position(|o| o == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % options.len()
    } else {
        (pos + options.len() - 1) % options.len()
    };
    options.get(next).cloned()
}

/// Flip the palette, persist the choice best-effort, and confirm via toast.
fn toggle_theme(app: &mut AppState, prefs: &mut dyn PreferenceStore) {
    app.theme_mode = app.theme_mode.toggled();
    save_theme_mode(prefs, app.theme_mode);
    let label = match app.theme_mode {
        crate::theme::ThemeMode::Dark => "Dark theme",
        crate::theme::ThemeMode::Light => "Light theme",
    };
    app.toast(label, TOAST_SECS);
}

/// Write the profile email to the clipboard, best-effort.
fn copy_email(app: &mut AppState, clipboard: &dyn Clipboard) {
    let email = app.catalog.profile.email.clone();
    if email.is_empty() {
        return;
    }
    if clipboard.write(&email) {
        app.toast("Email copied to clipboard", TOAST_SECS);
    } else {
        app.toast("Clipboard unavailable", TOAST_SECS);
    }
}
