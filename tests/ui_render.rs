//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! These verify that the interface renders the catalog-driven panes, the
//! empty-state message, and the modal overlays without a real terminal.

use ratatui::{Terminal, backend::TestBackend};

use folio::catalog::Catalog;
use folio::state::{AppState, Modal};
use folio::theme::ThemeMode;
use folio::ui;

fn new_app() -> AppState {
    AppState::new(Catalog::embedded(), ThemeMode::Dark)
}

/// Render UI to a `TestBackend` and return the terminal for assertions.
fn render(app: &mut AppState, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal =
        Terminal::new(TestBackend::new(width, height)).expect("failed to create test terminal");
    terminal
        .draw(|f| ui::ui(f, app))
        .expect("failed to draw test terminal");
    terminal
}

/// Flatten the rendered buffer into one string for substring assertions.
fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}

#[test]
fn renders_all_panes_with_the_default_state() {
    let mut app = new_app();
    let terminal = render(&mut app, 140, 45);
    let text = buffer_text(&terminal);
    assert!(text.contains("Sadaqat Ali Shaker"));
    assert!(text.contains("Search"));
    assert!(text.contains("Filters"));
    assert!(text.contains(&format!(
        "Projects ({count}/{count})",
        count = app.catalog.projects.len()
    )));
    assert!(text.contains("Experience"));
    assert!(text.contains("Skills"));
}

#[test]
fn renders_empty_state_message_when_nothing_matches() {
    let mut app = new_app();
    app.filters.query = "zzz-no-match".to_string();
    app.recompute_visible();
    let terminal = render(&mut app, 140, 45);
    let text = buffer_text(&terminal);
    assert!(text.contains("No projects match"));
    assert!(text.contains("Projects (0/"));
}

#[test]
fn renders_details_modal_for_the_open_selection() {
    let mut app = new_app();
    let item = app.catalog.projects[0].clone();
    app.selection.select(item.clone());
    let terminal = render(&mut app, 140, 45);
    let text = buffer_text(&terminal);
    assert!(text.contains("Project"));
    assert!(text.contains(&item.name));
}

#[test]
fn renders_help_modal_over_everything() {
    let mut app = new_app();
    app.modal = Modal::Help;
    let terminal = render(&mut app, 140, 45);
    let text = buffer_text(&terminal);
    assert!(text.contains("Keybindings"));
}

#[test]
fn renders_in_both_palettes_and_small_sizes() {
    for mode in [ThemeMode::Dark, ThemeMode::Light] {
        for (w, h) in [(80u16, 24u16), (200, 60)] {
            let mut app = AppState::new(Catalog::embedded(), mode);
            let terminal = render(&mut app, w, h);
            let buffer = terminal.backend().buffer();
            assert_eq!(buffer.area.width, w);
            assert_eq!(buffer.area.height, h);
        }
    }
}
