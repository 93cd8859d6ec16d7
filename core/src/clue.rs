use crate::{Coord, Direction};
use serde::{Deserialize, Serialize};

/// One word of the puzzle: its prompt, answer and placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub number: u32,
    #[serde(rename = "clue")]
    pub text: String,
    pub answer: String,
    pub direction: Direction,
    pub row: usize,
    pub col: usize,
}

impl Clue {
    pub fn new(
        number: u32,
        direction: Direction,
        text: impl Into<String>,
        answer: impl Into<String>,
        row: usize,
        col: usize,
    ) -> Self {
        Self {
            number,
            direction,
            text: text.into(),
            answer: answer.into().to_uppercase(),
            row,
            col,
        }
    }

    /// Number of letters (characters, not bytes) in the answer.
    pub fn length(&self) -> usize {
        self.answer.chars().count()
    }

    pub fn start(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    /// Cell covered by the `i`-th letter.
    pub fn cell(&self, i: usize) -> Coord {
        self.start().offset(self.direction, i)
    }

    pub fn last_cell(&self) -> Option<Coord> {
        self.length().checked_sub(1).map(|i| self.cell(i))
    }

    pub fn positions(&self) -> Vec<Coord> {
        (0..self.length()).map(|i| self.cell(i)).collect()
    }

    /// Each covered cell paired with its expected letter, in span order.
    pub fn letters(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.answer
            .chars()
            .enumerate()
            .map(|(i, letter)| (self.cell(i), letter))
    }

    /// Index of `coord` within this clue's span, if the span covers it.
    pub fn offset_of(&self, coord: Coord) -> Option<usize> {
        let i = match self.direction {
            Direction::Across if coord.row == self.row => coord.col.checked_sub(self.col)?,
            Direction::Down if coord.col == self.col => coord.row.checked_sub(self.row)?,
            _ => return None,
        };
        (i < self.length()).then_some(i)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.offset_of(coord).is_some()
    }

    /// Short label such as `3A` or `12D`.
    pub fn label(&self) -> String {
        let suffix = match self.direction {
            Direction::Across => "A",
            Direction::Down => "D",
        };
        format!("{}{}", self.number, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_follow_direction() {
        let across = Clue::new(1, Direction::Across, "", "cat", 2, 3);
        assert_eq!(
            across.positions(),
            vec![Coord::new(2, 3), Coord::new(2, 4), Coord::new(2, 5)]
        );

        let down = Clue::new(2, Direction::Down, "", "DOG", 0, 7);
        assert_eq!(down.last_cell(), Some(Coord::new(2, 7)));
    }

    #[test]
    fn test_offset_of() {
        let clue = Clue::new(3, Direction::Across, "", "WORD", 2, 2);
        assert_eq!(clue.offset_of(Coord::new(2, 2)), Some(0));
        assert_eq!(clue.offset_of(Coord::new(2, 5)), Some(3));
        assert_eq!(clue.offset_of(Coord::new(2, 6)), None);
        assert_eq!(clue.offset_of(Coord::new(2, 1)), None);
        assert_eq!(clue.offset_of(Coord::new(3, 3)), None);
    }

    #[test]
    fn test_length_counts_characters() {
        let clue = Clue::new(1, Direction::Down, "Year", "año", 0, 0);
        assert_eq!(clue.answer, "AÑO");
        assert_eq!(clue.length(), 3);
        assert_eq!(clue.last_cell(), Some(Coord::new(2, 0)));
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{"number":4,"clue":"Feline","answer":"CAT","direction":"down","row":1,"col":0}"#;
        let clue: Clue = serde_json::from_str(json).unwrap();
        assert_eq!(clue.text, "Feline");
        assert_eq!(clue.direction, Direction::Down);
        assert_eq!(clue.label(), "4D");
    }
}
