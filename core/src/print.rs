//! Plain-text print layout.
//!
//! Two pages separated by a form feed: the blank puzzle and the answer key,
//! each followed by the clue lists.
//!
//! ```txt
//! +---+---+---+
//! |1  |2  |###|
//! |   |   |###|
//! +---+---+---+
//! ```

use crate::{Coord, Direction, Puzzle, PuzzleGrid};
use std::collections::HashMap;
use std::fmt::Write;

const BLOCKED: &str = "###";

/// Render a grid. With `answers`, the letters are printed in each cell.
pub fn render_grid(
    puzzle: &Puzzle,
    grid: &PuzzleGrid,
    answers: Option<&HashMap<Coord, char>>,
) -> String {
    let size = puzzle.grid_size;
    let border = format!("{}+\n", "+---".repeat(size));
    let mut out = String::new();

    for row in 0..size {
        out.push_str(&border);
        let mut numbers = String::new();
        let mut letters = String::new();
        for col in 0..size {
            let coord = Coord::new(row, col);
            if !grid.is_occupied(coord) {
                numbers.push('|');
                numbers.push_str(BLOCKED);
                letters.push('|');
                letters.push_str(BLOCKED);
                continue;
            }
            let number = grid
                .clue_number_at(coord)
                .map(|n| n.to_string())
                .unwrap_or_default();
            let letter = answers
                .and_then(|a| a.get(&coord))
                .copied()
                .unwrap_or(' ');
            let _ = write!(numbers, "|{:<3}", number);
            let _ = write!(letters, "| {} ", letter);
        }
        out.push_str(&numbers);
        out.push_str("|\n");
        out.push_str(&letters);
        out.push_str("|\n");
    }
    out.push_str(&border);
    out
}

/// Render the across and down clue lists, sorted by number.
pub fn render_clues(puzzle: &Puzzle) -> String {
    let mut out = String::new();
    for direction in Direction::ALL {
        out.push_str(&direction.name().to_uppercase());
        out.push('\n');
        for (_, clue) in puzzle.clues_by_direction(direction) {
            let _ = writeln!(out, "  {}. {}", clue.number, clue.text);
        }
        out.push('\n');
    }
    out
}

/// Full print layout: puzzle page, form feed, answer key page.
pub fn render_print_layout(puzzle: &Puzzle) -> String {
    let grid = PuzzleGrid::from_puzzle(puzzle);
    let solution = puzzle.solution();
    let clues = render_clues(puzzle);

    let mut out = String::new();
    out.push_str("Crossword Puzzle\n\n");
    out.push_str(&render_grid(puzzle, &grid, None));
    out.push('\n');
    out.push_str(&clues);
    out.push('\u{c}');
    out.push_str("Answer Key\n\n");
    out.push_str(&render_grid(puzzle, &grid, Some(&solution)));
    out.push('\n');
    out.push_str(&clues);
    out
}
