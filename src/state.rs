//! Core application state for the Folio TUI.
//!
//! This module defines the transient session state mutated by the event
//! layer: the current [`crate::filter::FilterState`], the visible project
//! indices derived from it, the detail-view [`Selection`] machine, UI focus,
//! overlays, and the active theme mode. The catalog itself is immutable and
//! lives alongside as read-only input.

use std::time::Instant;

use ratatui::widgets::ListState;

use crate::catalog::{Catalog, CatalogItem};
use crate::filter::{FilterState, filter_indices};
use crate::theme::ThemeMode;

/// Which pane currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The search input: typing edits the query.
    Search,
    /// The project gallery list: navigation keys move the highlight.
    Results,
}

/// Overlay dialogs that take key precedence while visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Keybinding help, dismissed with Esc/Enter.
    Help,
}

/// Detail-view state: at most one project is under inspection.
///
/// The machine has exactly two states and no terminal state; it cycles
/// between them for the whole session, driven by discrete selection events.
#[derive(Debug, Clone, Default)]
pub enum Selection {
    /// No project selected.
    #[default]
    Closed,
    /// One project open in the details overlay.
    Open(CatalogItem),
}

impl Selection {
    /// Open `item`, replacing any project already under inspection.
    pub fn select(&mut self, item: CatalogItem) {
        *self = Selection::Open(item);
    }

    /// Close the detail view. A no-op when already closed, never an error.
    pub fn clear(&mut self) {
        *self = Selection::Closed;
    }

    /// The project under inspection, if any.
    pub fn current(&self) -> Option<&CatalogItem> {
        match self {
            Selection::Closed => None,
            Selection::Open(item) => Some(item),
        }
    }

    /// Whether the detail view is open.
    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }
}

/// Session state shared by the event and UI layers.
///
/// Mutated only by explicit user actions on the single-threaded event loop;
/// discarded when the session ends. Only the theme preference outlives the
/// session, through the preference store.
#[derive(Debug)]
pub struct AppState {
    /// The immutable portfolio backing every pane.
    pub catalog: Catalog,
    /// Current filter inputs.
    pub filters: FilterState,
    /// Indices into `catalog.projects` visible under `filters`, in order.
    pub visible: Vec<usize>,
    /// Position of the highlight within `visible`.
    pub cursor: usize,
    /// List widget selection state for the gallery.
    pub list_state: ListState,
    /// Which pane receives keys.
    pub focus: Focus,
    /// Detail-view machine.
    pub selection: Selection,
    /// Active overlay dialog.
    pub modal: Modal,
    /// Active palette mode.
    pub theme_mode: ThemeMode,
    /// Transient status message shown in the footer.
    pub toast_message: Option<String>,
    /// Deadline after which the toast disappears.
    pub toast_expires_at: Option<Instant>,
}

impl AppState {
    /// Build a fresh session over `catalog` with default filters, everything
    /// visible, and the highlight on the first project.
    pub fn new(catalog: Catalog, theme_mode: ThemeMode) -> Self {
        let visible: Vec<usize> = (0..catalog.projects.len()).collect();
        let mut list_state = ListState::default();
        if !visible.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            catalog,
            filters: FilterState::default(),
            visible,
            cursor: 0,
            list_state,
            focus: Focus::Search,
            selection: Selection::default(),
            modal: Modal::None,
            theme_mode,
            toast_message: None,
            toast_expires_at: None,
        }
    }

    /// Recompute the visible set from the current filters, keeping the
    /// highlight on the same project when it survives the re-filter.
    pub fn recompute_visible(&mut self) {
        let previous = self.visible.get(self.cursor).copied();
        self.visible = filter_indices(&self.catalog.projects, &self.filters);
        self.cursor = previous
            .and_then(|p| self.visible.iter().position(|&i| i == p))
            .unwrap_or(0);
        if self.visible.is_empty() {
            self.list_state.select(None);
        } else {
            self.cursor = self.cursor.min(self.visible.len() - 1);
            self.list_state.select(Some(self.cursor));
        }
    }

    /// The highlighted project, if the visible set is non-empty.
    pub fn highlighted(&self) -> Option<&CatalogItem> {
        self.visible
            .get(self.cursor)
            .and_then(|&i| self.catalog.projects.get(i))
    }

    /// Move the gallery highlight by `delta`, clamped to the visible range.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.visible.is_empty() {
            return;
        }
        let len = self.visible.len() as isize;
        let next = (self.cursor as isize).saturating_add(delta).clamp(0, len - 1);
        self.cursor = next as usize;
        self.list_state.select(Some(self.cursor));
    }

    /// Show `message` in the footer for `secs` seconds.
    pub fn toast(&mut self, message: impl Into<String>, secs: u64) {
        self.toast_message = Some(message.into());
        self.toast_expires_at = Some(Instant::now() + std::time::Duration::from_secs(secs));
    }

    /// Drop the toast once its deadline has passed.
    pub fn expire_toast(&mut self) {
        if let Some(deadline) = self.toast_expires_at
            && Instant::now() >= deadline
        {
            self.toast_message = None;
            self.toast_expires_at = None;
        }
    }
}
