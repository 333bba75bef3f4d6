//! Rendering layer for the Folio TUI.
//!
//! The interface is a pure function of [`AppState`]: header and hero at the
//! top, a three-pane middle (experience timeline, project gallery, skills
//! grid), a footer with key hints and toasts, and centered modal overlays for
//! project details and help.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};

use crate::state::AppState;
use crate::theme::palette;

mod gallery;
pub mod helpers;
mod modals;
mod side;

/// Render one frame of the interface from the current state.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = palette(app.theme_mode);
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, app, chunks[0]);
    render_hero(f, app, chunks[1]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(chunks[2]);

    side::render_experience(f, app, middle[0]);
    gallery::render_gallery(f, app, middle[1]);
    side::render_skills(f, app, middle[2]);

    render_footer(f, app, chunks[3]);

    modals::render_modals(f, app, area);
}

/// Profile header: name, headline, and contact line.
fn render_header(f: &mut Frame, app: &AppState, area: ratatui::prelude::Rect) {
    let th = palette(app.theme_mode);
    let p = &app.catalog.profile;
    let lines = vec![
        Line::from(vec![
            Span::styled(
                p.name.clone(),
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", p.title), Style::default().fg(th.subtext)),
        ]),
        Line::from(vec![
            Span::styled(p.location.clone(), Style::default().fg(th.overlay)),
            Span::styled("  |  ", Style::default().fg(th.surface)),
            Span::styled(p.email.clone(), Style::default().fg(th.sapphire)),
        ]),
        Line::from(vec![
            Span::styled(p.github.clone(), Style::default().fg(th.overlay)),
            Span::styled("  |  ", Style::default().fg(th.surface)),
            Span::styled(p.linkedin.clone(), Style::default().fg(th.overlay)),
            Span::styled("  |  ", Style::default().fg(th.surface)),
            Span::styled(p.resume_url.clone(), Style::default().fg(th.overlay)),
        ]),
    ];
    let header = Paragraph::new(lines).style(Style::default().bg(th.base));
    f.render_widget(header, area);
}

/// Hero section: quick-pitch lines and the badge row.
fn render_hero(f: &mut Frame, app: &AppState, area: ratatui::prelude::Rect) {
    let th = palette(app.theme_mode);
    let mut lines: Vec<Line<'static>> = app
        .catalog
        .pitch
        .iter()
        .map(|p| Line::from(Span::styled(p.clone(), Style::default().fg(th.text))))
        .collect();
    if !app.catalog.badges.is_empty() {
        let mut segs: Vec<Span<'static>> = Vec::new();
        for b in &app.catalog.badges {
            segs.push(Span::styled(
                format!(" {b} "),
                Style::default().fg(th.lavender).bg(th.mantle),
            ));
            segs.push(Span::raw(" "));
        }
        lines.push(Line::from(segs));
    }
    let hero = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.base))
        .wrap(Wrap { trim: true });
    f.render_widget(hero, area);
}

/// Footer: key hints on the left, transient toast on the right.
fn render_footer(f: &mut Frame, app: &AppState, area: ratatui::prelude::Rect) {
    let th = palette(app.theme_mode);
    let hints = "Tab panes  Enter details  ←/→ category  Shift+←/→ tech  Ctrl+T theme  Ctrl+Y copy email  F1 help";
    let mut segs = vec![Span::styled(hints, Style::default().fg(th.overlay))];
    if let Some(toast) = &app.toast_message {
        segs.push(Span::raw("  "));
        segs.push(Span::styled(
            toast.clone(),
            Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
        ));
    }
    let footer = Paragraph::new(Line::from(segs)).style(Style::default().bg(th.base));
    f.render_widget(footer, area);
}
