use serde::{Deserialize, Serialize};

/// Orientation of a word in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Across,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Across, Direction::Down];

    /// Row and column step of one letter along this direction.
    pub fn delta(self) -> (usize, usize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    /// Toggle between Across and Down.
    pub fn toggle(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Across => "Across",
            Direction::Down => "Down",
        }
    }

    /// Parses the lowercase wire name used by generator responses.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "across" => Some(Direction::Across),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }
}
