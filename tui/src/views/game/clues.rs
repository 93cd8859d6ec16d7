use crate::theme::Theme;
use lexigrid_core::{Direction, Session};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// One clue list (across or down) for the side panel.
pub struct ClueList<'a> {
    session: &'a Session,
    theme: &'a Theme,
    direction: Direction,
}

/// Shorten `text` to `width` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

impl<'a> ClueList<'a> {
    pub fn new(session: &'a Session, theme: &'a Theme, direction: Direction) -> Self {
        Self {
            session,
            theme,
            direction,
        }
    }

    /// Build the widget for `area` and the clue index behind each visible
    /// row, so clicks can be mapped back to clues.
    pub fn build(&self, area: Rect) -> (Paragraph<'static>, Vec<(Rect, usize)>) {
        let theme = self.theme;
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.dimmed))
            .title(Span::styled(
                self.direction.name().to_uppercase(),
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);

        let clues = self.session.puzzle().clues_by_direction(self.direction);
        let active = self.session.active();
        let height = inner.height as usize;

        // keep the active clue in view
        let offset = clues
            .iter()
            .position(|(idx, _)| Some(*idx) == active)
            .map(|pos| (pos + 1).saturating_sub(height))
            .unwrap_or(0);

        let mut lines = Vec::new();
        let mut hits = Vec::new();
        for (row, (idx, clue)) in clues.iter().skip(offset).take(height).enumerate() {
            let is_active = Some(*idx) == active;
            let number = format!("{:>3}. ", clue.number);
            let text_width = (inner.width as usize).saturating_sub(number.chars().count());
            let text = truncate(
                &format!("{} ({})", clue.text, clue.length()),
                text_width,
            );

            let (number_style, text_style) = if is_active {
                (
                    Style::default()
                        .fg(theme.accent)
                        .bg(theme.word_bg)
                        .add_modifier(Modifier::BOLD),
                    Style::default()
                        .fg(theme.accent)
                        .bg(theme.word_bg),
                )
            } else {
                (
                    Style::default().fg(theme.primary),
                    Style::default().fg(theme.text),
                )
            };
            lines.push(Line::from(vec![
                Span::styled(number, number_style),
                Span::styled(text, text_style),
            ]));
            hits.push((Rect::new(inner.x, inner.y + row as u16, inner.width, 1), *idx));
        }

        (Paragraph::new(lines).block(block), hits)
    }
}
