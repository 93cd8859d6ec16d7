//! Per-puzzle play state.
//!
//! A [`Session`] owns everything that lives as long as one generated puzzle:
//! the puzzle itself, its derived [`PuzzleGrid`], the user's answers, the
//! last check, the active clue and the focused cell. Each user event maps to
//! one method; regenerating a puzzle replaces the whole session.

use crate::selection::{self, Arrow, Selection};
use crate::{AnswerStore, CheckedAnswers, Clue, Coord, Direction, Puzzle, PuzzleGrid, Verdict};

#[derive(Debug, Clone)]
pub struct Session {
    puzzle: Puzzle,
    grid: PuzzleGrid,
    answers: AnswerStore,
    checked: CheckedAnswers,
    selection: Selection,
    focus: Option<Coord>,
}

impl Session {
    /// Start a session. Focus starts on the first occupied cell, with no
    /// active clue.
    pub fn new(puzzle: Puzzle) -> Self {
        let grid = PuzzleGrid::from_puzzle(&puzzle);
        let focus = grid.first_occupied();
        log::debug!(
            "New session: {} clues, {} cells",
            puzzle.clues.len(),
            grid.occupied_count()
        );
        Self {
            puzzle,
            grid,
            answers: AnswerStore::new(),
            checked: CheckedAnswers::default(),
            selection: Selection::default(),
            focus,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn grid(&self) -> &PuzzleGrid {
        &self.grid
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn checked(&self) -> &CheckedAnswers {
        &self.checked
    }

    pub fn focus(&self) -> Option<Coord> {
        self.focus
    }

    pub fn active(&self) -> Option<usize> {
        self.selection.active()
    }

    pub fn active_clue(&self) -> Option<&Clue> {
        self.selection.active_clue(&self.puzzle)
    }

    /// Is the cell part of the active clue's span?
    pub fn in_active_clue(&self, coord: Coord) -> bool {
        self.active_clue().is_some_and(|clue| clue.contains(coord))
    }

    /// Text typed into a cell.
    ///
    /// Stores the letter, invalidates the last check and, when a letter was
    /// committed inside the active clue, advances focus along it.
    pub fn answer_change(&mut self, coord: Coord, value: &str) {
        if !self.grid.is_occupied(coord) {
            return;
        }
        let letter = self.answers.set(coord, value);
        self.checked.clear();
        self.focus = Some(coord);

        if letter.is_some() {
            if let Some(clue) = self.selection.active_clue(&self.puzzle) {
                self.focus = Some(selection::advance_after_input(clue, coord));
            }
        }
    }

    /// A click on a cell.
    ///
    /// Focus lands on the clicked cell; if the click changed the active clue,
    /// it then jumps to the clue's first empty cell.
    pub fn cell_select(&mut self, coord: Coord) {
        let candidates = self.grid.clues_at(coord);
        if candidates.is_empty() {
            return;
        }
        self.focus = Some(coord);
        if self.selection.select_cell(&self.puzzle, candidates) {
            self.focus_active_clue();
        }
    }

    /// A click on a clue in the clue list.
    pub fn clue_select(&mut self, idx: usize) {
        if idx >= self.puzzle.clues.len() {
            return;
        }
        if self.selection.activate(idx) {
            self.focus_active_clue();
        }
    }

    /// Activate the clue after the active one in clue-list order
    /// (across by number, then down by number), wrapping around.
    pub fn next_clue(&mut self) {
        self.step_clue(1);
    }

    pub fn previous_clue(&mut self) {
        self.step_clue(-1);
    }

    fn step_clue(&mut self, step: isize) {
        let order = self.clue_order();
        if order.is_empty() {
            return;
        }
        let len = order.len() as isize;
        let next = match self.active().and_then(|a| order.iter().position(|&i| i == a)) {
            Some(pos) => (pos as isize + step).rem_euclid(len),
            None if step >= 0 => 0,
            None => len - 1,
        };
        self.clue_select(order[next as usize]);
    }

    /// Clue indices in the order the clue lists show them.
    fn clue_order(&self) -> Vec<usize> {
        Direction::ALL
            .iter()
            .flat_map(|d| self.puzzle.clues_by_direction(*d))
            .map(|(idx, _)| idx)
            .collect()
    }

    fn focus_active_clue(&mut self) {
        if let Some(clue) = self.selection.active_clue(&self.puzzle) {
            self.focus = Some(selection::activation_focus(clue, &self.answers));
        }
    }

    /// Move focus with an arrow key. Blocked targets leave focus unchanged.
    pub fn navigate(&mut self, arrow: Arrow) {
        let Some(focus) = self.focus else {
            return;
        };
        let target = selection::arrow_target(focus, arrow, self.grid.size());
        if self.grid.is_occupied(target) {
            self.focus = Some(target);
        }
    }

    /// Backspace on the focused cell.
    ///
    /// A filled cell is cleared in place. An empty cell moves focus one cell
    /// back along the active clue's direction.
    pub fn backspace(&mut self) {
        let Some(focus) = self.focus else {
            return;
        };
        if self.answers.has_entry(focus) {
            self.answer_change(focus, "");
            return;
        }
        let Some(clue) = self.active_clue() else {
            return;
        };
        let target = selection::backspace_target(focus, clue.direction);
        if self.grid.is_occupied(target) {
            self.focus = Some(target);
        }
    }

    /// Move focus to a cell without changing the active clue.
    pub fn focus_cell(&mut self, coord: Coord) {
        if self.grid.is_occupied(coord) {
            self.focus = Some(coord);
        }
    }

    pub fn check(&mut self) {
        self.checked = crate::check(&self.puzzle, &self.answers);
        log::debug!(
            "Checked {} cells: {} correct",
            self.checked.len(),
            self.checked.count(Verdict::Correct)
        );
    }

    /// Fill every cell with its solution letter.
    pub fn reveal(&mut self) {
        self.answers.reveal(&self.puzzle);
        self.checked.clear();
    }

    /// Clear answers, verdicts and the active clue.
    pub fn reset(&mut self) {
        self.answers.reset();
        self.checked.clear();
        self.selection.clear();
    }

    /// Percentage (0-100) of puzzle cells holding a letter.
    pub fn completion_percentage(&self) -> u8 {
        let total = self.grid.occupied_count();
        if total == 0 {
            return 100;
        }
        let filled = self
            .grid
            .occupied_cells()
            .into_iter()
            .filter(|coord| self.answers.has_entry(*coord))
            .count();
        ((filled * 100) / total) as u8
    }

    /// Every puzzle cell holds its solution letter.
    pub fn is_solved(&self) -> bool {
        let solution = self.puzzle.solution();
        !solution.is_empty()
            && solution
                .iter()
                .all(|(coord, letter)| self.answers.get(*coord) == Some(*letter))
    }
}
