//! Folio application runtime (terminal lifecycle and event loop).
//!
//! This module encapsulates the TUI runtime so the binary entrypoint stays
//! minimal: terminal setup/restore, the input-polling thread, the tick task,
//! and the draw/dispatch loop.

use std::time::Duration;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

use crossterm::{
    event,
    event::Event as CEvent,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{select, sync::mpsc};

use crate::args::Args;
use crate::clipboard::SystemClipboard;
use crate::events::handle_event;
use crate::state::AppState;
use crate::theme::{FsPreferenceStore, ThemeMode, load_theme_mode};
use crate::ui::ui;

fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Start the Folio TUI and run the main event loop.
///
/// - Loads the catalog (embedded or user-supplied) and the stored theme
///   preference, with `--theme` taking precedence for this session
/// - Initializes the terminal (raw mode, alternate screen)
/// - Spawns the input-polling thread and the toast tick task
/// - Drives rendering via `ratatui` and delegates input handling to `events`
///
/// Returns `Ok(())` on normal shutdown or an error if initialization fails.
pub async fn run(args: &Args) -> Result<()> {
    let catalog = crate::catalog::load(args.data.as_deref());
    let mut prefs = FsPreferenceStore::at_default_location();
    let mode = args
        .theme
        .as_deref()
        .and_then(ThemeMode::from_config_key)
        .unwrap_or_else(|| load_theme_mode(&prefs));
    let clipboard = SystemClipboard;
    tracing::info!(
        projects = catalog.projects.len(),
        theme = mode.as_config_key(),
        "session starting"
    );

    setup_terminal()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    let mut app = AppState::new(catalog, mode);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    std::thread::spawn(move || {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(50))
                && let Ok(ev) = event::read()
                && event_tx.send(ev).is_err()
            {
                break;
            }
        }
    });

    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<()>();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(200));
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });

    loop {
        let _ = terminal.draw(|f| ui(f, &mut app));

        select! {
            Some(ev) = event_rx.recv() => {
                if handle_event(ev, &mut app, &clipboard, &mut prefs) {
                    break;
                }
            }
            Some(()) = tick_rx.recv() => {
                app.expire_toast();
            }
            else => { break; }
        }
    }

    restore_terminal()?;
    Ok(())
}
