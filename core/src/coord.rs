//! Cell coordinates.

use crate::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 0-indexed `(row, col)` cell position.
///
/// Used directly as the key of every per-cell map. [`Coord::key`] gives the
/// canonical `"<row>-<col>"` string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn key(&self) -> String {
        self.to_string()
    }

    /// The coordinate `steps` letters further along `direction`.
    pub fn offset(self, direction: Direction, steps: usize) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr * steps, self.col + dc * steps)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for Coord {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid cell key: {}", s))?;
        let row = row.parse().map_err(|_| format!("Invalid row in key: {}", s))?;
        let col = col.parse().map_err(|_| format!("Invalid col in key: {}", s))?;
        Ok(Self::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format() {
        assert_eq!(Coord::new(3, 12).key(), "3-12");
        assert_eq!("3-12".parse::<Coord>(), Ok(Coord::new(3, 12)));
    }

    #[test]
    fn test_key_is_injective_for_multi_digit_values() {
        // "1-11" and "11-1" must not collide
        assert_ne!(Coord::new(1, 11).key(), Coord::new(11, 1).key());
    }

    #[test]
    fn test_offset() {
        let start = Coord::new(2, 2);
        assert_eq!(start.offset(Direction::Across, 3), Coord::new(2, 5));
        assert_eq!(start.offset(Direction::Down, 1), Coord::new(3, 2));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("12".parse::<Coord>().is_err());
        assert!("a-b".parse::<Coord>().is_err());
    }
}
