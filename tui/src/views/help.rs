use super::{centered, key_hints};
use crate::{App, AppView};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Help content sections with their keyboard shortcuts.
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("Arrow keys", "Move between cells"),
            ("Tab / Shift+Tab", "Next / previous clue"),
            ("Space / Enter", "Select clue (toggles at crossings)"),
            ("Mouse click", "Select cell or clue"),
        ],
    ),
    (
        "Input",
        &[
            ("A-Z", "Enter letter"),
            ("Backspace", "Clear cell, then step back"),
            ("Delete", "Clear cell"),
        ],
    ),
    (
        "Puzzle",
        &[
            ("Ctrl+K", "Check answers"),
            ("Ctrl+R", "Reveal all answers"),
            ("Ctrl+X", "Reset puzzle"),
            ("Ctrl+P", "Print to text file"),
        ],
    ),
    (
        "General",
        &[
            ("Ctrl+N", "New puzzle"),
            ("Ctrl+H", "Show help"),
            ("ESC", "Back to menu"),
            ("Ctrl+C", "Quit application"),
        ],
    ),
];

impl App {
    pub fn draw_help(&mut self, frame: &mut Frame) {
        let theme = self.state.theme;

        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled(
            "━━━ Keyboard Controls ━━━",
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        for (section_name, items) in HELP_SECTIONS {
            lines.push(Line::from(Span::styled(
                section_name.to_string(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )));

            for (key, description) in *items {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<16}", key), Style::default().fg(theme.secondary)),
                    Span::styled(
                        format!("  {}", description),
                        Style::default().fg(theme.dimmed),
                    ),
                ]));
            }

            lines.push(Line::from(""));
        }

        lines.push(key_hints(&[("ESC", "to return")], theme));

        let area = centered(frame.area(), 54, lines.len() as u16);
        frame.render_widget(Paragraph::new(lines), area);
    }

    pub fn handle_help_input(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace) {
            // Return to previous view if set, otherwise go to menu
            self.view = self.previous_view.take().unwrap_or(AppView::Menu);
        }
    }
}
