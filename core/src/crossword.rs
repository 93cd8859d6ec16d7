use crate::{Clue, Coord, Direction};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A validated puzzle: grid size plus the ordered clue list.
///
/// Puzzles are never mutated after construction; a new generation replaces
/// the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    #[serde(rename = "gridSize")]
    pub grid_size: usize,
    pub clues: Vec<Clue>,
}

impl Puzzle {
    pub fn new(grid_size: usize, clues: Vec<Clue>) -> Self {
        Self { grid_size, clues }
    }

    pub fn clue(&self, idx: usize) -> Option<&Clue> {
        self.clues.get(idx)
    }

    /// Clues of one direction with their indices, sorted by clue number.
    pub fn clues_by_direction(&self, direction: Direction) -> Vec<(usize, &Clue)> {
        let mut clues: Vec<_> = self
            .clues
            .iter()
            .enumerate()
            .filter(|(_, clue)| clue.direction == direction)
            .collect();
        clues.sort_by_key(|(_, clue)| clue.number);
        clues
    }

    /// Index of the clue with this number and direction.
    pub fn find_clue(&self, number: u32, direction: Direction) -> Option<usize> {
        self.clues
            .iter()
            .position(|clue| clue.number == number && clue.direction == direction)
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.grid_size && coord.col < self.grid_size
    }

    /// Solution letter of every covered cell.
    ///
    /// Intersections where two clues disagree keep the letter of the clue
    /// processed last, and the disagreement is logged.
    pub fn solution(&self) -> HashMap<Coord, char> {
        let mut solution = HashMap::new();
        for clue in &self.clues {
            for (coord, letter) in clue.letters() {
                if let Some(previous) = solution.insert(coord, letter) {
                    if previous != letter {
                        log::warn!(
                            "Letter conflict at ({}, {}): {} overrides {}",
                            coord.row,
                            coord.col,
                            letter,
                            previous
                        );
                    }
                }
            }
        }
        solution
    }
}
