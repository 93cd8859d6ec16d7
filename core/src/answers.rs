//! Letters entered by the user.

use crate::{Coord, Puzzle};
use std::collections::HashMap;

/// Per-cell user input. Independent of the derived [`PuzzleGrid`](crate::PuzzleGrid).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerStore {
    entries: HashMap<Coord, char>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, coord: Coord) -> Option<char> {
        self.entries.get(&coord).copied()
    }

    pub fn has_entry(&self, coord: Coord) -> bool {
        self.entries.contains_key(&coord)
    }

    /// Store the input typed into a cell.
    ///
    /// The value is uppercased and only its last character is kept, so typing
    /// over a filled cell replaces the letter. An empty value clears the cell.
    /// Returns the stored letter.
    pub fn set(&mut self, coord: Coord, value: &str) -> Option<char> {
        match value.to_uppercase().chars().last() {
            Some(letter) => {
                self.entries.insert(coord, letter);
                Some(letter)
            }
            None => {
                self.entries.remove(&coord);
                None
            }
        }
    }

    pub fn clear(&mut self, coord: Coord) {
        self.entries.remove(&coord);
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Replace every entry with the puzzle's solution.
    pub fn reveal(&mut self, puzzle: &Puzzle) {
        self.entries = puzzle.solution();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.entries.iter().map(|(coord, letter)| (*coord, *letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Clue, Direction};

    #[test]
    fn test_set_uppercases() {
        let mut answers = AnswerStore::new();
        assert_eq!(answers.set(Coord::new(0, 0), "a"), Some('A'));
        assert_eq!(answers.get(Coord::new(0, 0)), Some('A'));
    }

    #[test]
    fn test_set_keeps_last_character() {
        let mut answers = AnswerStore::new();
        answers.set(Coord::new(1, 1), "B");
        answers.set(Coord::new(1, 1), "bq");
        assert_eq!(answers.get(Coord::new(1, 1)), Some('Q'));
    }

    #[test]
    fn test_set_empty_clears() {
        let mut answers = AnswerStore::new();
        answers.set(Coord::new(1, 1), "z");
        assert_eq!(answers.set(Coord::new(1, 1), ""), None);
        assert!(answers.is_empty());
    }

    #[test]
    fn test_set_non_ascii() {
        let mut answers = AnswerStore::new();
        assert_eq!(answers.set(Coord::new(0, 0), "ñ"), Some('Ñ'));
    }

    #[test]
    fn test_reveal_and_reset() {
        let puzzle = Puzzle::new(
            3,
            vec![
                Clue::new(1, Direction::Across, "", "CAT", 0, 0),
                Clue::new(1, Direction::Down, "", "CAR", 0, 0),
            ],
        );
        let mut answers = AnswerStore::new();
        answers.set(Coord::new(2, 2), "x");
        answers.reveal(&puzzle);
        assert_eq!(answers.len(), 5);
        assert_eq!(answers.get(Coord::new(2, 0)), Some('R'));
        assert_eq!(answers.get(Coord::new(2, 2)), None);

        answers.reset();
        assert!(answers.is_empty());
    }
}
