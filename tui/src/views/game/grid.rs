use super::boxchars::*;
use crate::theme::Theme;
use lexigrid_core::{Coord, Session, Verdict};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Columns per cell, counting its left border.
pub const CELL_WIDTH: u16 = 4;
/// Lines per cell, counting its top border.
pub const CELL_HEIGHT: u16 = 2;

/// Renders the session's grid.
///
/// Each cell is drawn as a top border carrying the clue number and one
/// content line with the letter:
///
/// ```txt
/// ┌1──┬2──┬───┐
/// │ C │ A │░░░│
/// ├───┼───┼───┤
/// ```
///
/// Borders are shared between neighbours, so only the last column and row
/// draw their right and bottom edges.
pub struct GridView<'a> {
    session: &'a Session,
    theme: &'a Theme,
}

impl<'a> GridView<'a> {
    pub fn new(session: &'a Session, theme: &'a Theme) -> Self {
        Self { session, theme }
    }

    /// Rendered `(width, height)` of a grid with `size` cells per side.
    ///
    /// Saturates at `u16::MAX` for grids too large for any terminal.
    pub fn dimensions(size: usize) -> (u16, u16) {
        (cell_offset(size, CELL_WIDTH, 1), cell_offset(size, CELL_HEIGHT, 1))
    }

    fn cell_style(&self, coord: Coord) -> Style {
        let theme = self.theme;
        let fg = match self.session.checked().get(coord) {
            Some(Verdict::Correct) => theme.correct,
            Some(Verdict::Incorrect) => theme.incorrect,
            None => theme.text,
        };
        let style = Style::default().fg(fg).add_modifier(Modifier::BOLD);

        if self.session.focus() == Some(coord) {
            style.bg(theme.accent)
        } else if self.session.in_active_clue(coord) {
            style.bg(theme.word_bg)
        } else {
            style
        }
    }

    pub fn to_par(&self) -> Paragraph<'static> {
        let grid = self.session.grid();
        let size = grid.size();
        let border_style = Style::default().fg(self.theme.grid_border);
        let number_style = Style::default().fg(self.theme.secondary);
        let blocked_style = Style::default()
            .fg(self.theme.filled_cell_fg)
            .bg(self.theme.filled_cell_bg);

        let border = |c: char| Span::styled(c.to_string(), border_style);
        let h_line = || Span::styled(BOX_H.to_string().repeat(3), border_style);

        let mut lines: Vec<Line<'static>> = Vec::with_capacity(size * 2 + 1);

        for row in 0..size {
            let is_first_row = row == 0;
            let mut top: Vec<Span<'static>> = Vec::new();
            let mut content: Vec<Span<'static>> = Vec::new();

            for col in 0..size {
                let coord = Coord::new(row, col);
                let is_last_col = col == size - 1;

                let corner = match (is_first_row, col == 0) {
                    (true, true) => BOX_TL,
                    (true, false) => BOX_T,
                    (false, true) => BOX_L,
                    (false, false) => BOX_X,
                };
                top.push(border(corner));
                match grid.clue_number_at(coord) {
                    Some(n) => {
                        let digits = n.to_string();
                        let pad = 3usize.saturating_sub(digits.chars().count());
                        top.push(Span::styled(digits, number_style));
                        top.push(Span::styled(BOX_H.to_string().repeat(pad), border_style));
                    }
                    None => top.push(h_line()),
                }

                content.push(border(BOX_V));
                if grid.is_occupied(coord) {
                    let letter = self.session.answers().get(coord).unwrap_or(' ');
                    content.push(Span::styled(format!(" {} ", letter), self.cell_style(coord)));
                } else {
                    content.push(Span::styled(BOX_SHADE.to_string().repeat(3), blocked_style));
                }

                if is_last_col {
                    top.push(border(if is_first_row { BOX_TR } else { BOX_R }));
                    content.push(border(BOX_V));
                }
            }

            lines.push(Line::from(top));
            lines.push(Line::from(content));
        }

        // bottom border
        let mut bottom: Vec<Span<'static>> = Vec::new();
        for col in 0..size {
            bottom.push(border(if col == 0 { BOX_BL } else { BOX_B }));
            bottom.push(h_line());
        }
        bottom.push(border(BOX_BR));
        lines.push(Line::from(bottom));

        Paragraph::new(lines)
    }
}

/// Terminal offset of `shift` columns (or lines) into cell `index`, where
/// each cell spans `span`.
pub fn cell_offset(index: usize, span: u16, shift: u16) -> u16 {
    u16::try_from(index)
        .unwrap_or(u16::MAX)
        .saturating_mul(span)
        .saturating_add(shift)
}

/// Cell under a position given relative to the grid's top-left corner.
///
/// The number line above a cell belongs to that cell; vertical borders and
/// the bottom edge belong to none.
pub fn cell_at(size: usize, x: u16, y: u16) -> Option<Coord> {
    if x % CELL_WIDTH == 0 {
        return None;
    }
    let row = (y / CELL_HEIGHT) as usize;
    let col = (x / CELL_WIDTH) as usize;
    (row < size && col < size).then(|| Coord::new(row, col))
}

/// Scroll offset along one axis that keeps `target` in a view of `view`
/// cells over content of `content` cells.
pub fn scroll_to(target: u16, view: u16, content: u16) -> u16 {
    if content <= view {
        return 0;
    }
    target
        .saturating_sub(view / 2)
        .min(content - view)
}
