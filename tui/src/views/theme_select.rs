//! Theme picker with a live preview of the hovered theme.

use super::{centered, choice_lines, key_hints, select_next, select_prev};
use crate::{App, AppView, theme::Theme};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

#[derive(Debug, Default)]
pub struct ThemeSelectState {
    /// Hovered index into [`Theme::ALL`].
    pub selected: usize,
}

impl ThemeSelectState {
    pub fn hovered(&self) -> &'static Theme {
        Theme::ALL.get(self.selected).unwrap_or(&crate::theme::DEFAULT)
    }
}

/// Sample cells in the grid's states: active word, correct, incorrect, focus.
fn swatch(theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(" A ", Style::default().fg(theme.text).bg(theme.word_bg)),
        Span::styled(" B ", Style::default().fg(theme.correct)),
        Span::styled(" C ", Style::default().fg(theme.incorrect)),
        Span::styled(" D ", Style::default().fg(theme.text).bg(theme.accent)),
    ])
}

impl App {
    pub fn draw_theme_select(&mut self, frame: &mut Frame) {
        let preview = self.state.theme_select.hovered();
        let current = self.state.theme.id;

        let labels = Theme::ALL.iter().map(|theme| {
            let mark = if theme.id == current { " ✓" } else { "" };
            format!("{}{}", theme.name, mark)
        });

        let mut lines = vec![
            Line::from(Span::styled(
                "━━━ Theme ━━━",
                Style::default()
                    .fg(preview.secondary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(choice_lines(
            labels,
            self.state.theme_select.selected,
            "▸ ",
            Style::default()
                .fg(preview.primary)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(preview.dimmed),
        ));
        lines.push(Line::from(""));
        lines.push(swatch(preview));
        lines.push(Line::from(""));
        lines.push(key_hints(
            &[("↑↓", "navigate"), ("Enter", "select"), ("ESC", "back")],
            preview,
        ));

        let area = centered(frame.area(), 36, lines.len() as u16);
        frame.render_widget(Paragraph::new(lines), area);
    }

    pub fn handle_theme_select_input(&mut self, key: KeyEvent) {
        let selected = &mut self.state.theme_select.selected;
        match key.code {
            // leave without changing the theme
            KeyCode::Esc => self.view = AppView::Menu,
            KeyCode::Up => select_prev(selected),
            KeyCode::Down => select_next(selected, Theme::ALL.len()),
            KeyCode::Enter => {
                let theme = self.state.theme_select.hovered();
                self.state.theme = theme;
                self.state.preferences.theme_id = theme.id.to_string();
                log::info!("theme set to {}", theme.id);
                self.save_preferences();
                self.view = AppView::Menu;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppState;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_theme_select_input(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_navigation_stays_in_list() {
        let mut app = App::with_state(AppState::default());
        app.view = AppView::ThemeSelect;
        press(&mut app, KeyCode::Up);
        assert_eq!(app.state.theme_select.selected, 0);
        for _ in 0..Theme::ALL.len() + 3 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.state.theme_select.selected, Theme::ALL.len() - 1);
    }

    #[test]
    fn test_esc_keeps_theme() {
        let mut app = App::with_state(AppState::default());
        app.view = AppView::ThemeSelect;
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view, AppView::Menu);
        assert_eq!(app.state.theme.id, crate::theme::DEFAULT.id);
    }
}
