pub mod form;
pub mod game;
pub mod help;
pub mod menu;
pub mod theme_select;

use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
};

/// A `width` x `height` box centered in `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// One line per label; the selected one gets `marker` and `active`.
pub fn choice_lines<I>(
    labels: I,
    selected: usize,
    marker: &str,
    active: Style,
    idle: Style,
) -> Vec<Line<'static>>
where
    I: IntoIterator<Item = String>,
{
    let blank = " ".repeat(marker.chars().count());
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let (prefix, style) = if i == selected {
                (marker, active)
            } else {
                (blank.as_str(), idle)
            };
            Line::from(Span::styled(format!("{}{}", prefix, label), style))
        })
        .collect()
}

/// Footer of `(key, action)` pairs.
pub fn key_hints(hints: &[(&'static str, &'static str)], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, action)) in hints.iter().enumerate() {
        let sep = if i + 1 < hints.len() { "  " } else { "" };
        spans.push(Span::styled(*key, Style::default().fg(theme.primary)));
        spans.push(Span::styled(
            format!(" {}{}", action, sep),
            Style::default().fg(theme.dimmed),
        ));
    }
    Line::from(spans)
}

/// Move a list selection one step up, stopping at the top.
pub fn select_prev(selected: &mut usize) {
    *selected = selected.saturating_sub(1);
}

/// Move a list selection one step down, stopping at the last of `len`.
pub fn select_next(selected: &mut usize, len: usize) {
    if *selected + 1 < len {
        *selected += 1;
    }
}
