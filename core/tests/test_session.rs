use lexigrid_core::{
    Clue, Coord, Direction, Language, Puzzle, PuzzleGrid, Session, ValidationError, Verdict,
    validate,
};
use serde_json::json;
use std::collections::HashSet;

/// A small interlocking puzzle:
///
/// ```txt
/// . . . . . . .
/// . . . . . . .
/// . . R U S T .
/// . . O . . O .
/// . . P . . E .
/// . . E . . . .
/// ```
fn puzzle() -> Puzzle {
    Puzzle::new(
        7,
        vec![
            Clue::new(3, Direction::Across, "Oxidation", "RUST", 2, 2),
            Clue::new(3, Direction::Down, "Cord", "ROPE", 2, 2),
            Clue::new(4, Direction::Down, "Foot digit", "TOE", 2, 5),
        ],
    )
}

#[test]
fn test_layout_matches_covered_cells() {
    let puzzle = puzzle();
    let grid = PuzzleGrid::from_puzzle(&puzzle);

    let covered: HashSet<Coord> = puzzle.clues.iter().flat_map(|c| c.positions()).collect();
    for row in 0..puzzle.grid_size {
        for col in 0..puzzle.grid_size {
            let coord = Coord::new(row, col);
            assert_eq!(grid.is_occupied(coord), covered.contains(&coord), "{coord}");
        }
    }
}

#[test]
fn test_one_start_label_per_start_cell() {
    let puzzle = puzzle();
    let grid = PuzzleGrid::from_puzzle(&puzzle);

    let starts: HashSet<Coord> = puzzle.clues.iter().map(Clue::start).collect();
    assert_eq!(grid.start_count(), starts.len());
    assert_eq!(grid.clue_number_at(Coord::new(2, 2)), Some(3));
    assert_eq!(grid.clue_number_at(Coord::new(2, 5)), Some(4));
}

#[test]
fn test_reveal_then_check_is_all_correct() {
    let mut session = Session::new(puzzle());
    session.answer_change(Coord::new(2, 3), "x");
    session.reveal();
    session.check();

    let checked = session.checked();
    assert_eq!(checked.len(), session.grid().occupied_count());
    assert!(checked.iter().all(|(_, verdict)| verdict == Verdict::Correct));
}

#[test]
fn test_reset_then_check_is_empty() {
    let mut session = Session::new(puzzle());
    session.answer_change(Coord::new(2, 2), "R");
    session.answer_change(Coord::new(3, 2), "Z");
    session.reset();
    session.check();
    assert!(session.checked().is_empty());
}

#[test]
fn test_check_twice_is_identical() {
    let mut session = Session::new(puzzle());
    session.answer_change(Coord::new(2, 2), "R");
    session.answer_change(Coord::new(3, 2), "Z");
    session.check();
    let first = session.checked().clone();
    session.check();
    assert_eq!(&first, session.checked());
    assert_eq!(first.get(Coord::new(3, 2)), Some(Verdict::Incorrect));
}

#[test]
fn test_selection_tie_break_sequence() {
    let mut session = Session::new(Puzzle::new(
        5,
        vec![
            Clue::new(1, Direction::Across, "Feline", "CAT", 0, 0),
            Clue::new(1, Direction::Down, "Vehicle", "CAR", 0, 0),
        ],
    ));

    // no active clue: across wins
    session.cell_select(Coord::new(0, 0));
    assert_eq!(session.active_clue().map(|c| c.direction), Some(Direction::Across));

    // clicking the intersection again toggles to down
    session.cell_select(Coord::new(0, 0));
    assert_eq!(session.active_clue().map(|c| c.direction), Some(Direction::Down));

    // clicking an across-only cell while down is active selects across
    session.cell_select(Coord::new(0, 1));
    assert_eq!(session.active_clue().map(|c| c.direction), Some(Direction::Across));
}

#[test]
fn test_typing_advance_on_three_across() {
    let mut session = Session::new(puzzle());
    session.clue_select(0);
    assert_eq!(session.focus(), Some(Coord::new(2, 2)));

    session.answer_change(Coord::new(2, 2), "r");
    assert_eq!(session.focus(), Some(Coord::new(2, 3)));

    session.answer_change(Coord::new(2, 5), "t");
    assert_eq!(session.focus(), Some(Coord::new(2, 5)));
}

#[test]
fn test_validated_response_drives_a_session() {
    let raw = json!({
        "gridSize": 15,
        "clues": [
            { "number": 1, "clue": "Oxidation", "answer": "rust", "direction": "across", "row": 0, "col": 0 },
            { "number": 1, "clue": "Cord", "answer": "ROPE", "direction": "down", "row": 0, "col": 0 },
            { "number": 2, "clue": "Greeting", "answer": "HELLO", "direction": "across", "row": 4, "col": 13 },
            { "number": 3, "clue": "Night bird", "answer": "OWL", "direction": "across", "row": 1, "col": 0 },
            { "number": 4, "clue": "Hole", "answer": "PIT", "direction": "across", "row": 2, "col": 0 },
            { "number": 5, "clue": "Slippery fish", "answer": "EEL", "direction": "across", "row": 3, "col": 0 }
        ]
    });

    let validated = validate(&raw, Language::English).unwrap();
    assert_eq!(validated.warnings.len(), 1);

    let mut session = Session::new(validated.puzzle);
    assert_eq!(session.grid().occupied_count(), 13);
    session.reveal();
    assert!(session.is_solved());
}

#[test]
fn test_four_valid_clues_are_rejected() {
    let raw = json!({
        "gridSize": 15,
        "clues": [
            { "number": 1, "clue": "a", "answer": "ONE", "direction": "across", "row": 0, "col": 0 },
            { "number": 2, "clue": "b", "answer": "TWO", "direction": "across", "row": 2, "col": 0 },
            { "number": 3, "clue": "c", "answer": "SIX", "direction": "across", "row": 4, "col": 0 },
            { "number": 4, "clue": "d", "answer": "TEN", "direction": "across", "row": 6, "col": 0 },
            { "number": 5, "clue": "e", "answer": "MISSING" }
        ]
    });
    assert_eq!(
        validate(&raw, Language::English),
        Err(ValidationError::TooFewValidClues { found: 4 })
    );
}
