use super::{centered, choice_lines, key_hints, select_next, select_prev};
use crate::{App, AppView};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

#[derive(Default, Debug)]
pub struct MenuState {
    /// Selected menu item index.
    pub sel: usize,
}

/// A menu item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuItem {
    /// Back to the puzzle in progress.
    Resume,
    NewPuzzle,
    Theme,
    Help,
    Exit,
}

impl MenuItem {
    /// Items shown in the menu; `Resume` only while a puzzle is loaded.
    pub fn available(has_puzzle: bool) -> Vec<MenuItem> {
        let mut items = Vec::with_capacity(5);
        if has_puzzle {
            items.push(MenuItem::Resume);
        }
        items.extend([
            MenuItem::NewPuzzle,
            MenuItem::Theme,
            MenuItem::Help,
            MenuItem::Exit,
        ]);
        items
    }

    pub fn fmt(&self) -> &'static str {
        match self {
            MenuItem::Resume => "Resume Puzzle",
            MenuItem::NewPuzzle => "New Puzzle",
            MenuItem::Theme => "Theme",
            MenuItem::Help => "Help",
            MenuItem::Exit => "Exit",
        }
    }
}

impl App {
    fn menu_items(&self) -> Vec<MenuItem> {
        MenuItem::available(self.state.game.session.is_some())
    }

    pub fn draw_menu(&mut self, frame: &mut Frame) {
        let theme = self.state.theme;
        let items = self.menu_items();
        self.state.menu.sel = self.state.menu.sel.min(items.len() - 1);

        let mut lines = vec![
            Line::from(Span::styled(
                "lexigrid",
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "crosswords from any text",
                Style::default().fg(theme.dimmed),
            )),
            Line::from(""),
        ];
        lines.extend(choice_lines(
            items.iter().map(|item| item.fmt().to_string()),
            self.state.menu.sel,
            "> ",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(theme.text),
        ));
        lines.push(Line::from(""));
        lines.push(key_hints(&[("↑↓", "navigate"), ("ESC", "quit")], theme));

        // room for the border
        let area = centered(frame.area(), 32, lines.len() as u16 + 4);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.secondary));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(lines).centered(), inner);
    }

    pub fn handle_menu_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Up => self.menu_up(),
            KeyCode::Down => self.menu_down(),
            KeyCode::Enter => self.select_menu_item(),
            _ => {}
        }
    }

    fn menu_up(&mut self) {
        select_prev(&mut self.state.menu.sel);
    }

    fn menu_down(&mut self) {
        let len = self.menu_items().len();
        select_next(&mut self.state.menu.sel, len);
    }

    fn select_menu_item(&mut self) {
        let Some(item) = self.menu_items().get(self.state.menu.sel).copied() else {
            return;
        };
        match item {
            MenuItem::Resume => self.set_view(AppView::Playing),
            MenuItem::NewPuzzle => self.set_view(AppView::Form),
            MenuItem::Theme => {
                self.state.theme_select.selected = crate::theme::Theme::index_of(self.state.theme.id);
                self.set_view(AppView::ThemeSelect);
            }
            MenuItem::Help => self.show_help(),
            MenuItem::Exit => self.quit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_only_with_puzzle() {
        assert_eq!(MenuItem::available(false)[0], MenuItem::NewPuzzle);
        assert_eq!(MenuItem::available(true)[0], MenuItem::Resume);
        assert_eq!(MenuItem::available(true).len(), 5);
    }
}
