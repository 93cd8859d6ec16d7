//! Active clue tracking and focus navigation.
//!
//! Everything here computes targets; the [`Session`](crate::Session) decides
//! whether to apply them.

use crate::{AnswerStore, Clue, Coord, Direction, Puzzle};

/// Arrow key directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Up,
    Down,
    Left,
    Right,
}

/// The active clue, referenced by its index in [`Puzzle::clues`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    active: Option<usize>,
}

impl Selection {
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_clue<'a>(&self, puzzle: &'a Puzzle) -> Option<&'a Clue> {
        self.active.and_then(|idx| puzzle.clue(idx))
    }

    /// Activate a clue. Returns `true` if the active clue changed.
    pub fn activate(&mut self, idx: usize) -> bool {
        let changed = self.active != Some(idx);
        self.active = Some(idx);
        changed
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Resolve a click on a cell covered by `candidates`.
    ///
    /// Returns `true` if the active clue changed.
    pub fn select_cell(&mut self, puzzle: &Puzzle, candidates: &[usize]) -> bool {
        match resolve_cell_click(puzzle, candidates, self.active) {
            Some(idx) => self.activate(idx),
            None => false,
        }
    }
}

/// Pick the clue a cell click should activate.
///
/// - no candidates: nothing (blocked cell)
/// - the active clue is one of two or more candidates: the other candidate
/// - otherwise: the across candidate if any, else the first candidate
pub fn resolve_cell_click(
    puzzle: &Puzzle,
    candidates: &[usize],
    active: Option<usize>,
) -> Option<usize> {
    let first = *candidates.first()?;

    if let Some(active) = active {
        if candidates.len() > 1 && candidates.contains(&active) {
            return candidates.iter().copied().find(|&c| c != active).or(Some(first));
        }
    }

    candidates
        .iter()
        .copied()
        .find(|&idx| puzzle.clues[idx].direction == Direction::Across)
        .or(Some(first))
}

/// Cell to focus when a clue becomes active: its first empty cell, or its
/// start when every cell is filled.
pub fn activation_focus(clue: &Clue, answers: &AnswerStore) -> Coord {
    clue.positions()
        .into_iter()
        .find(|coord| !answers.has_entry(*coord))
        .unwrap_or_else(|| clue.start())
}

/// Focus after a letter was committed at `coord`.
///
/// Moves one cell along the clue unless `coord` is its last cell. Cells
/// outside the clue's span keep focus.
pub fn advance_after_input(clue: &Clue, coord: Coord) -> Coord {
    match clue.offset_of(coord) {
        Some(i) if i + 1 < clue.length() => clue.cell(i + 1),
        _ => coord,
    }
}

/// One step in a compass direction, clamped to the grid edges.
pub fn arrow_target(coord: Coord, arrow: Arrow, grid_size: usize) -> Coord {
    let last = grid_size.saturating_sub(1);
    match arrow {
        Arrow::Up => Coord::new(coord.row.saturating_sub(1), coord.col),
        Arrow::Down => Coord::new((coord.row + 1).min(last), coord.col),
        Arrow::Left => Coord::new(coord.row, coord.col.saturating_sub(1)),
        Arrow::Right => Coord::new(coord.row, (coord.col + 1).min(last)),
    }
}

/// One step backwards along `direction`, clamped at 0.
pub fn backspace_target(coord: Coord, direction: Direction) -> Coord {
    match direction {
        Direction::Across => Coord::new(coord.row, coord.col.saturating_sub(1)),
        Direction::Down => Coord::new(coord.row.saturating_sub(1), coord.col),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle() -> Puzzle {
        Puzzle::new(
            5,
            vec![
                Clue::new(1, Direction::Down, "", "CAR", 0, 0),
                Clue::new(1, Direction::Across, "", "CAT", 0, 0),
                Clue::new(3, Direction::Across, "", "WORD", 2, 0),
            ],
        )
    }

    #[test]
    fn test_click_prefers_across_even_when_inserted_second() {
        let puzzle = puzzle();
        assert_eq!(resolve_cell_click(&puzzle, &[0, 1], None), Some(1));
    }

    #[test]
    fn test_click_toggles_at_intersection() {
        let puzzle = puzzle();
        assert_eq!(resolve_cell_click(&puzzle, &[0, 1], Some(1)), Some(0));
        assert_eq!(resolve_cell_click(&puzzle, &[0, 1], Some(0)), Some(1));
    }

    #[test]
    fn test_click_single_candidate_keeps_it() {
        let puzzle = puzzle();
        assert_eq!(resolve_cell_click(&puzzle, &[0], Some(0)), Some(0));
        assert_eq!(resolve_cell_click(&puzzle, &[0], Some(2)), Some(0));
        assert_eq!(resolve_cell_click(&puzzle, &[], Some(2)), None);
    }

    #[test]
    fn test_select_cell_reports_change() {
        let puzzle = puzzle();
        let mut selection = Selection::default();
        assert!(selection.select_cell(&puzzle, &[2]));
        assert!(!selection.select_cell(&puzzle, &[2]));
        assert!(!selection.select_cell(&puzzle, &[]));
        assert_eq!(selection.active(), Some(2));
    }

    #[test]
    fn test_activation_focus() {
        let clue = Clue::new(3, Direction::Across, "", "WORD", 2, 0);
        let mut answers = AnswerStore::new();
        assert_eq!(activation_focus(&clue, &answers), Coord::new(2, 0));

        answers.set(Coord::new(2, 0), "W");
        answers.set(Coord::new(2, 2), "R");
        assert_eq!(activation_focus(&clue, &answers), Coord::new(2, 1));

        answers.set(Coord::new(2, 1), "O");
        answers.set(Coord::new(2, 3), "D");
        assert_eq!(activation_focus(&clue, &answers), Coord::new(2, 0));
    }

    #[test]
    fn test_advance_after_input() {
        let clue = Clue::new(3, Direction::Down, "", "WORD", 1, 4);
        assert_eq!(advance_after_input(&clue, Coord::new(1, 4)), Coord::new(2, 4));
        assert_eq!(advance_after_input(&clue, Coord::new(4, 4)), Coord::new(4, 4));
        assert_eq!(advance_after_input(&clue, Coord::new(0, 0)), Coord::new(0, 0));
    }

    #[test]
    fn test_arrow_target_clamps() {
        assert_eq!(arrow_target(Coord::new(0, 0), Arrow::Up, 5), Coord::new(0, 0));
        assert_eq!(arrow_target(Coord::new(0, 0), Arrow::Left, 5), Coord::new(0, 0));
        assert_eq!(arrow_target(Coord::new(4, 4), Arrow::Down, 5), Coord::new(4, 4));
        assert_eq!(arrow_target(Coord::new(4, 4), Arrow::Right, 5), Coord::new(4, 4));
        assert_eq!(arrow_target(Coord::new(2, 2), Arrow::Right, 5), Coord::new(2, 3));
        assert_eq!(arrow_target(Coord::new(2, 2), Arrow::Up, 5), Coord::new(1, 2));
    }

    #[test]
    fn test_backspace_target() {
        assert_eq!(backspace_target(Coord::new(2, 2), Direction::Across), Coord::new(2, 1));
        assert_eq!(backspace_target(Coord::new(2, 2), Direction::Down), Coord::new(1, 2));
        assert_eq!(backspace_target(Coord::new(0, 0), Direction::Down), Coord::new(0, 0));
    }
}
