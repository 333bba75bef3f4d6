//! Center pane: search input, filter chips, and the project list.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::catalog::FEATURED_COUNT;
use crate::state::{AppState, Focus};
use crate::theme::palette;

use super::helpers::{category_color, chips_line};

/// Render the gallery column: search box, chip rows, then the list or the
/// empty-state message.
pub fn render_gallery(f: &mut Frame, app: &mut AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(3),
        ])
        .split(area);

    render_search_input(f, app, chunks[0]);
    render_filter_chips(f, app, chunks[1]);
    render_results(f, app, chunks[2]);
}

fn render_search_input(f: &mut Frame, app: &AppState, area: Rect) {
    let th = palette(app.theme_mode);
    let focused = matches!(app.focus, Focus::Search);
    let prompt = Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if focused { th.sapphire } else { th.overlay }),
        ),
        Span::styled(
            app.filters.query.clone(),
            Style::default().fg(if focused { th.text } else { th.subtext }),
        ),
    ]);
    let input = Paragraph::new(prompt).block(
        Block::default()
            .title(Span::styled(
                " Search ",
                Style::default().fg(if focused { th.sapphire } else { th.overlay }),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { th.sapphire } else { th.surface })),
    );
    f.render_widget(input, area);
}

fn render_filter_chips(f: &mut Frame, app: &AppState, area: Rect) {
    let th = palette(app.theme_mode);
    let cat_labels: Vec<String> = app
        .catalog
        .categories()
        .iter()
        .map(|c| c.label().to_string())
        .collect();
    let tech_labels: Vec<String> = app
        .catalog
        .tech_options()
        .iter()
        .map(|t| t.label().to_string())
        .collect();
    let lines = vec![
        chips_line(&cat_labels, app.filters.active_category.label(), &th),
        chips_line(&tech_labels, app.filters.active_tech.label(), &th),
    ];
    let chips = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" Filters ", Style::default().fg(th.overlay)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface)),
    );
    f.render_widget(chips, area);
}

fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = palette(app.theme_mode);
    let focused = matches!(app.focus, Focus::Results);
    let block = Block::default()
        .title(Span::styled(
            format!(
                " Projects ({}/{}) ",
                app.visible.len(),
                app.catalog.projects.len()
            ),
            Style::default().fg(if focused { th.sapphire } else { th.overlay }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.sapphire } else { th.surface }));

    if app.visible.is_empty() {
        // Valid state, not an error: keep the frame and explain.
        let empty = Paragraph::new(Line::from(Span::styled(
            "No projects match your search/filters. Try removing filters.",
            Style::default().fg(th.subtext),
        )))
        .wrap(Wrap { trim: true })
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .visible
        .iter()
        .map(|&i| {
            let p = &app.catalog.projects[i];
            let mut segs = vec![
                Span::styled(
                    format!("{} ", p.category.label()),
                    Style::default().fg(category_color(&th, p.category)),
                ),
                Span::styled(
                    p.name.clone(),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                ),
            ];
            if !p.tag.is_empty() {
                segs.push(Span::raw("  - "));
                segs.push(Span::styled(p.tag.clone(), Style::default().fg(th.subtext)));
            }
            if i < FEATURED_COUNT {
                segs.push(Span::raw("  "));
                segs.push(Span::styled(
                    "[Featured]",
                    Style::default().fg(th.green).add_modifier(Modifier::BOLD),
                ));
            }
            ListItem::new(Line::from(segs))
        })
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(Style::default().fg(th.mantle).bg(th.lavender))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}
