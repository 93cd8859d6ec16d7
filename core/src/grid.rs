use crate::{Coord, Direction, Puzzle};
use std::collections::{HashMap, HashSet};

/// Read-only structures derived from a [`Puzzle`].
///
/// Built in a single pass over every letter of every clue:
///
/// ```txt
/// C A T       1-Across "CAT" at (0,0)
/// A . .       1-Down   "CAR" at (0,0)
/// R . .
/// ```
///
/// - layout: `(0,0) (0,1) (0,2) (1,0) (2,0)` are occupied, the rest is blocked
/// - clue starts: `(0,0) -> 1`, a single label shared by both words
/// - cell clues: `(0,0) -> [1A, 1D]`, `(0,1) -> [1A]`, `(1,0) -> [1D]`
///
/// Clues are referenced by their index in [`Puzzle::clues`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuzzleGrid {
    size: usize,
    layout: HashSet<Coord>,
    clue_starts: HashMap<Coord, u32>,
    cell_clues: HashMap<Coord, Vec<usize>>,
}

impl PuzzleGrid {
    /// Derive the layout, clue starts and cell-to-clue index of a puzzle.
    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        let mut grid = Self {
            size: puzzle.grid_size,
            ..Self::default()
        };

        for (idx, clue) in puzzle.clues.iter().enumerate() {
            let start = clue.start();
            match grid.clue_starts.get(&start) {
                Some(&number) if number != clue.number => {
                    log::warn!(
                        "Clue {} starts at ({}, {}) which is already labelled {}",
                        clue.label(),
                        start.row,
                        start.col,
                        number
                    );
                }
                Some(_) => {}
                None => {
                    grid.clue_starts.insert(start, clue.number);
                }
            }

            for i in 0..clue.length() {
                let coord = clue.cell(i);
                grid.layout.insert(coord);
                grid.cell_clues.entry(coord).or_default().push(idx);
            }
        }

        grid
    }

    /// Width and height of the square grid.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.layout.contains(&coord)
    }

    pub fn occupied_count(&self) -> usize {
        self.layout.len()
    }

    /// Occupied cells in row-major order.
    pub fn occupied_cells(&self) -> Vec<Coord> {
        let mut cells: Vec<Coord> = self.layout.iter().copied().collect();
        cells.sort();
        cells
    }

    /// Number printed in the corner of a starting cell.
    pub fn clue_number_at(&self, coord: Coord) -> Option<u32> {
        self.clue_starts.get(&coord).copied()
    }

    pub fn start_count(&self) -> usize {
        self.clue_starts.len()
    }

    /// Clues covering a cell, in insertion order. Empty for blocked cells.
    pub fn clues_at(&self, coord: Coord) -> &[usize] {
        self.cell_clues
            .get(&coord)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The clue of the given direction covering a cell, if any.
    pub fn clue_at(&self, puzzle: &Puzzle, coord: Coord, direction: Direction) -> Option<usize> {
        self.clues_at(coord)
            .iter()
            .copied()
            .find(|&idx| puzzle.clues[idx].direction == direction)
    }

    /// First occupied cell in row-major order.
    pub fn first_occupied(&self) -> Option<Coord> {
        self.layout.iter().min().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Clue;

    fn cross() -> Puzzle {
        Puzzle::new(
            3,
            vec![
                Clue::new(1, Direction::Across, "Feline", "CAT", 0, 0),
                Clue::new(1, Direction::Down, "Vehicle", "CAR", 0, 0),
            ],
        )
    }

    #[test]
    fn test_layout_marks_covered_cells_only() {
        let grid = PuzzleGrid::from_puzzle(&cross());
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.occupied_count(), 5);
        for row in 0..3 {
            for col in 0..3 {
                let covered = row == 0 || col == 0;
                assert_eq!(grid.is_occupied(Coord::new(row, col)), covered, "({row}, {col})");
            }
        }
    }

    #[test]
    fn test_shared_start_has_single_label() {
        let grid = PuzzleGrid::from_puzzle(&cross());
        assert_eq!(grid.start_count(), 1);
        assert_eq!(grid.clue_number_at(Coord::new(0, 0)), Some(1));
        assert_eq!(grid.clue_number_at(Coord::new(0, 1)), None);
    }

    #[test]
    fn test_conflicting_start_numbers_keep_first() {
        let puzzle = Puzzle::new(
            3,
            vec![
                Clue::new(2, Direction::Across, "", "CAT", 0, 0),
                Clue::new(5, Direction::Down, "", "CAR", 0, 0),
            ],
        );
        let grid = PuzzleGrid::from_puzzle(&puzzle);
        assert_eq!(grid.clue_number_at(Coord::new(0, 0)), Some(2));
    }

    #[test]
    fn test_cell_clues_preserve_insertion_order() {
        let puzzle = cross();
        let grid = PuzzleGrid::from_puzzle(&puzzle);
        assert_eq!(grid.clues_at(Coord::new(0, 0)), &[0, 1]);
        assert_eq!(grid.clues_at(Coord::new(0, 2)), &[0]);
        assert_eq!(grid.clues_at(Coord::new(2, 0)), &[1]);
        assert!(grid.clues_at(Coord::new(1, 1)).is_empty());

        assert_eq!(grid.clue_at(&puzzle, Coord::new(0, 0), Direction::Down), Some(1));
        assert_eq!(grid.clue_at(&puzzle, Coord::new(0, 1), Direction::Down), None);
    }

    #[test]
    fn test_first_occupied_is_row_major() {
        let puzzle = Puzzle::new(
            4,
            vec![
                Clue::new(2, Direction::Across, "", "ODE", 3, 1),
                Clue::new(1, Direction::Down, "", "TOD", 1, 2),
            ],
        );
        let grid = PuzzleGrid::from_puzzle(&puzzle);
        assert_eq!(grid.first_occupied(), Some(Coord::new(1, 2)));
        assert_eq!(grid.occupied_cells().last(), Some(&Coord::new(3, 3)));
    }
}
