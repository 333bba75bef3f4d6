//! Modal overlays: project details and keybinding help.
//!
//! Clears the area behind the modal and draws a styled box centered on the
//! screen.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AppState, Modal};
use crate::theme::palette;

use super::helpers::{centered_rect, kv};

/// Render whichever overlay is active; help wins over the details view.
pub fn render_modals(f: &mut Frame, app: &mut AppState, area: Rect) {
    if app.modal == Modal::Help {
        render_help(f, app, area);
        return;
    }
    if app.selection.is_open() {
        render_details(f, app, area);
    }
}

fn render_details(f: &mut Frame, app: &AppState, area: Rect) {
    let th = palette(app.theme_mode);
    let Some(item) = app.selection.current() else {
        return;
    };
    let w = area.width.saturating_sub(6).min(90);
    let h = area.height.saturating_sub(4).min(22);
    let rect = centered_rect(area, w, h);
    f.render_widget(Clear, rect);

    let mut lines: Vec<Line<'static>> = vec![
        Line::from(vec![
            Span::styled(
                item.name.clone(),
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{}]", item.category.label()),
                Style::default().fg(th.overlay),
            ),
        ]),
        Line::from(Span::styled(
            item.tag.clone(),
            Style::default().fg(th.subtext),
        )),
        Line::from(""),
    ];
    if let Some(impact) = &item.impact {
        lines.push(Line::from(Span::styled(
            impact.clone(),
            Style::default().fg(th.text),
        )));
        lines.push(Line::from(""));
    }
    for b in &item.bullets {
        lines.push(Line::from(vec![
            Span::styled("- ", Style::default().fg(th.overlay)),
            Span::styled(b.clone(), Style::default().fg(th.text)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(kv("Tech", item.tech.join(", "), &th));
    let code = match item.links.code.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => "not published".to_string(),
    };
    let demo = match item.links.demo.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => "not published".to_string(),
    };
    let link_width = rect.width.saturating_sub(10);
    lines.push(kv("Code", crate::util::truncate_width(&code, link_width), &th));
    lines.push(kv("Demo", crate::util::truncate_width(&demo, link_width), &th));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc close  Ctrl+O open code  Ctrl+D open demo",
        Style::default().fg(th.subtext),
    )));

    let boxw = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    " Project ",
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.mauve))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(boxw, rect);
}

fn render_help(f: &mut Frame, app: &AppState, area: Rect) {
    let th = palette(app.theme_mode);
    let rect = centered_rect(area, area.width.saturating_sub(10).min(70), 16);
    f.render_widget(Clear, rect);
    let rows: &[(&str, &str)] = &[
        ("Type / Backspace", "edit the search query"),
        ("Tab / Shift+Tab", "switch between search and gallery"),
        ("Up/Down, j/k", "move the gallery highlight"),
        ("Left/Right", "cycle the category filter"),
        ("Shift+Left/Right", "cycle the technology filter"),
        ("Enter", "open project details"),
        ("Esc", "close overlay / clear filters / exit"),
        ("Ctrl+T", "toggle dark/light theme"),
        ("Ctrl+Y", "copy email to clipboard"),
        ("Ctrl+O / Ctrl+D", "open code / demo link (details view)"),
        ("Ctrl+C", "exit"),
    ];
    let mut lines = vec![
        Line::from(Span::styled(
            "Keybindings",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (keys, what) in rows {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{keys:<18}"),
                Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
            ),
            Span::styled((*what).to_string(), Style::default().fg(th.text)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter or Esc to close",
        Style::default().fg(th.subtext),
    )));
    let boxw = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    " Help ",
                    Style::default().fg(th.lavender).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.lavender))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(boxw, rect);
}
