use crate::{App, AppView, print};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use lexigrid_core::{Arrow, Direction, Session, Verdict};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

mod boxchars;

mod grid;
pub use grid::*;

mod clues;
pub use clues::*;

/// A one-line message in the footer.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

#[derive(Default, Debug)]
pub struct GameState {
    /// Puzzle being solved, if any.
    pub session: Option<Session>,
    pub notice: Option<Notice>,

    /* mouse hit areas, refreshed on every draw */
    /// Where the grid was drawn.
    pub grid_area: Rect,
    /// Grid scroll offset (vertical, horizontal).
    pub grid_scroll: (u16, u16),
    /// Clue list rows and the clue each one shows.
    pub clue_hits: Vec<(Rect, usize)>,
}

impl GameState {
    pub fn new(session: Session) -> Self {
        Self {
            session: Some(session),
            ..Default::default()
        }
    }
}

/// Footer text after a check.
fn check_summary(session: &Session) -> Notice {
    let checked = session.checked();
    if checked.is_empty() {
        return Notice::info("Nothing to check yet");
    }
    if session.is_solved() {
        return Notice::info("Solved! Every answer is correct.");
    }
    Notice::info(format!(
        "{} correct, {} incorrect",
        checked.count(Verdict::Correct),
        checked.count(Verdict::Incorrect)
    ))
}

impl App {
    pub fn draw_game(&mut self, frame: &mut Frame) {
        let theme = self.state.theme;
        let game = &mut self.state.game;
        let Some(session) = game.session.as_ref() else {
            return; // nothing to draw
        };

        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        // Header: title, progress and the active clue
        let mut header = vec![Line::from(vec![
            Span::styled(
                "lexigrid",
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}% filled", session.completion_percentage()),
                Style::default().fg(theme.dimmed),
            ),
        ])];
        header.push(match session.active_clue() {
            Some(clue) => Line::from(vec![
                Span::styled(
                    format!("{} {}: ", clue.number, clue.direction.name().to_uppercase()),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{} ({})", clue.text, clue.length()),
                    Style::default().fg(theme.text),
                ),
            ]),
            None => Line::from(Span::styled(
                "Select a cell or clue to start",
                Style::default().fg(theme.dimmed),
            )),
        });
        frame.render_widget(Paragraph::new(header), header_area);

        // Body: grid on the left, clue lists on the right
        let (grid_width, grid_height) = GridView::dimensions(session.grid().size());
        let [grid_area, clues_area] =
            Layout::horizontal([Constraint::Length(grid_width), Constraint::Min(20)])
                .spacing(2)
                .areas(body_area);
        let grid_area = Rect {
            height: grid_area.height.min(grid_height),
            ..grid_area
        };

        let scroll = match session.focus() {
            Some(focus) => (
                scroll_to(
                    cell_offset(focus.row, CELL_HEIGHT, 1),
                    grid_area.height,
                    grid_height,
                ),
                scroll_to(
                    cell_offset(focus.col, CELL_WIDTH, 2),
                    grid_area.width,
                    grid_width,
                ),
            ),
            None => (0, 0),
        };
        let par = GridView::new(session, theme).to_par().scroll(scroll);
        frame.render_widget(par, grid_area);

        let [across_area, down_area] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(clues_area);
        let mut clue_hits = Vec::new();
        for (direction, area) in [(Direction::Across, across_area), (Direction::Down, down_area)] {
            let (list, hits) = ClueList::new(session, theme, direction).build(area);
            frame.render_widget(list, area);
            clue_hits.extend(hits);
        }

        // Footer: notice or key hints
        let footer = match &game.notice {
            Some(notice) => Line::from(Span::styled(
                notice.text.clone(),
                Style::default().fg(if notice.is_error {
                    theme.error
                } else {
                    theme.success
                }),
            )),
            None => {
                let mut spans = Vec::new();
                for (key, label) in [
                    ("^K", "check"),
                    ("^R", "reveal"),
                    ("^X", "reset"),
                    ("^P", "print"),
                    ("^N", "new"),
                    ("^H", "help"),
                    ("ESC", "menu"),
                ] {
                    spans.push(Span::styled(key, Style::default().fg(theme.primary)));
                    spans.push(Span::styled(
                        format!(" {}  ", label),
                        Style::default().fg(theme.dimmed),
                    ));
                }
                Line::from(spans)
            }
        };
        frame.render_widget(Paragraph::new(footer), footer_area);

        game.grid_area = grid_area;
        game.grid_scroll = scroll;
        game.clue_hits = clue_hits;
    }

    pub fn handle_game_input(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                self.set_view(AppView::Menu);
                return;
            }
            KeyCode::Char('n') | KeyCode::Char('N') if ctrl => {
                self.set_view(AppView::Form);
                return;
            }
            KeyCode::Char('h') | KeyCode::Char('H') if ctrl => {
                self.show_help();
                return;
            }
            _ => {}
        }

        let game = &mut self.state.game;
        let Some(session) = game.session.as_mut() else {
            return;
        };
        game.notice = None;

        match key.code {
            KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
                'k' => {
                    session.check();
                    game.notice = Some(check_summary(session));
                }
                'r' => {
                    session.reveal();
                    game.notice = Some(Notice::info("Answers revealed"));
                }
                'x' => {
                    session.reset();
                    game.notice = Some(Notice::info("Puzzle reset"));
                }
                'p' => {
                    game.notice = Some(match print::print_puzzle(session.puzzle()) {
                        Ok(path) => Notice::info(format!("Printed to {}", path.display())),
                        Err(e) => {
                            log::error!("print failed: {}", e);
                            Notice::error(format!("Print failed: {}", e))
                        }
                    });
                }
                _ => {}
            },
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(focus) = session.focus() {
                    session.cell_select(focus);
                }
            }
            KeyCode::Char(c) if c.is_alphabetic() => {
                if let Some(focus) = session.focus() {
                    session.answer_change(focus, &c.to_string());
                    if session.is_solved() {
                        log::info!("puzzle solved");
                        game.notice = Some(Notice::info("Every cell is filled correctly!"));
                    }
                }
            }
            KeyCode::Backspace => session.backspace(),
            KeyCode::Delete => {
                if let Some(focus) = session.focus() {
                    session.answer_change(focus, "");
                }
            }
            KeyCode::Up => session.navigate(Arrow::Up),
            KeyCode::Down => session.navigate(Arrow::Down),
            KeyCode::Left => session.navigate(Arrow::Left),
            KeyCode::Right => session.navigate(Arrow::Right),
            KeyCode::Tab => session.next_clue(),
            KeyCode::BackTab => session.previous_clue(),
            _ => {}
        }
    }

    pub fn handle_game_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let game = &mut self.state.game;
        let Some(session) = game.session.as_mut() else {
            return;
        };
        let position = Position::new(mouse.column, mouse.row);

        if game.grid_area.contains(position) {
            let x = mouse.column - game.grid_area.x + game.grid_scroll.1;
            let y = mouse.row - game.grid_area.y + game.grid_scroll.0;
            if let Some(coord) = cell_at(session.grid().size(), x, y) {
                session.cell_select(coord);
            }
        } else if let Some((_, idx)) = game.clue_hits.iter().find(|(r, _)| r.contains(position)) {
            session.clue_select(*idx);
        }
    }
}
