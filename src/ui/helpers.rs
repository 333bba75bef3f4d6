//! Small rendering helpers shared across the UI modules.

use ratatui::{
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::catalog::Category;
use crate::theme::Theme;

/// Rectangle of at most `w` x `h` cells centered inside `area`.
pub fn centered_rect(area: Rect, w: u16, h: u16) -> Rect {
    let width = w.min(area.width);
    let height = h.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Accent color used for a category badge.
pub const fn category_color(th: &Theme, category: Category) -> ratatui::style::Color {
    match category {
        Category::AiMl => th.mauve,
        Category::Data => th.sapphire,
        Category::BackendApps => th.green,
        Category::Databases => th.yellow,
        Category::DevOpsLinux => th.lavender,
    }
}

/// One chip row: every option label, with the active one highlighted.
pub fn chips_line(labels: &[String], active: &str, th: &Theme) -> Line<'static> {
    let mut segs: Vec<Span<'static>> = Vec::with_capacity(labels.len() * 2);
    for label in labels {
        if label == active {
            segs.push(Span::styled(
                format!(" {label} "),
                Style::default()
                    .fg(th.mantle)
                    .bg(th.lavender)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            segs.push(Span::styled(
                format!(" {label} "),
                Style::default().fg(th.subtext),
            ));
        }
        segs.push(Span::raw(" "));
    }
    Line::from(segs)
}

/// Key-value display line: bold accent key, plain value.
pub fn kv(key: &str, val: String, th: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{key}: "),
            Style::default()
                .fg(th.sapphire)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(val, Style::default().fg(th.text)),
    ])
}
