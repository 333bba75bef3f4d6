//! Side panes: the experience timeline and the skills grid.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::state::AppState;
use crate::theme::palette;

/// Left pane: experience entries with their bullets.
pub fn render_experience(f: &mut Frame, app: &AppState, area: Rect) {
    let th = palette(app.theme_mode);
    let mut lines: Vec<Line<'static>> = Vec::new();
    for e in &app.catalog.experience {
        lines.push(Line::from(Span::styled(
            e.title.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("{}  {}", e.org, e.date),
            Style::default().fg(th.subtext),
        )));
        for b in &e.bullets {
            lines.push(Line::from(vec![
                Span::styled("- ", Style::default().fg(th.overlay)),
                Span::styled(b.clone(), Style::default().fg(th.subtext)),
            ]));
        }
        lines.push(Line::from(""));
    }
    let pane = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(" Experience ", Style::default().fg(th.overlay)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface)),
        );
    f.render_widget(pane, area);
}

/// Right pane: grouped skills.
pub fn render_skills(f: &mut Frame, app: &AppState, area: Rect) {
    let th = palette(app.theme_mode);
    let mut lines: Vec<Line<'static>> = Vec::new();
    for g in &app.catalog.skills {
        lines.push(Line::from(Span::styled(
            g.group.clone(),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            g.items.join(", "),
            Style::default().fg(th.subtext),
        )));
        lines.push(Line::from(""));
    }
    let pane = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(" Skills ", Style::default().fg(th.overlay)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface)),
        );
    f.render_widget(pane, area);
}
