//! Ingestion of raw generator output.
//!
//! Generator responses are untrusted JSON. [`validate`] rejects responses that
//! cannot make a usable puzzle and silently repairs the rest by dropping the
//! clues that do not fit the grid.

use crate::{Clue, Direction, Language, Puzzle};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Fewest clues a puzzle may have, before and after filtering.
pub const MIN_CLUES: usize = 5;

/// Largest grid accepted. The generator is asked for 15x15.
pub const MAX_GRID_SIZE: i64 = 50;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing or non-positive grid size")]
    MissingGridSize,
    #[error("Grid size {size} exceeds the maximum of {max}", max = MAX_GRID_SIZE)]
    GridTooLarge { size: i64 },
    #[error("Missing clue list")]
    MissingClues,
    #[error("Only {found} clues, at least {min} required", min = MIN_CLUES)]
    TooFewClues { found: usize },
    #[error("Only {found} usable clues after filtering, at least {min} required", min = MIN_CLUES)]
    TooFewValidClues { found: usize },
}

impl ValidationError {
    /// Message shown to the user, suggesting different input.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingGridSize
            | ValidationError::GridTooLarge { .. }
            | ValidationError::MissingClues
            | ValidationError::TooFewClues { .. } => {
                "The AI failed to create a valid puzzle from the text. Please try again with a longer or different piece of text, or adjust the puzzle options."
            }
            ValidationError::TooFewValidClues { .. } => {
                "The AI created a puzzle that was not valid. Please try generating again, perhaps with a different text or options."
            }
        }
    }
}

/// Why a clue was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// A required field is absent or has the wrong type.
    MissingField(&'static str),
    EmptyAnswer,
    StartOutOfBounds { row: i64, col: i64 },
    /// The word would end past the grid edge.
    EndOutOfBounds { end: i64 },
    /// Another clue already uses this number and direction.
    Duplicate(String),
    /// Nothing was left of the answer after stripping non-alphabet characters.
    EmptyAfterNormalization,
    /// Uppercasing lengthened the answer (`ß` to `SS`) past the grid edge.
    NormalizedPastEdge { end: usize },
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::MissingField(field) => write!(f, "missing or invalid field `{}`", field),
            DropReason::EmptyAnswer => write!(f, "empty answer"),
            DropReason::StartOutOfBounds { row, col } => {
                write!(f, "start ({}, {}) is out of bounds", row, col)
            }
            DropReason::EndOutOfBounds { end } => {
                write!(f, "word ends at {} which is past the grid edge", end)
            }
            DropReason::Duplicate(label) => write!(f, "duplicate clue {}", label),
            DropReason::EmptyAfterNormalization => {
                write!(f, "answer has no letters of the puzzle alphabet")
            }
            DropReason::NormalizedPastEdge { end } => {
                write!(f, "normalized word ends at {} which is past the grid edge", end)
            }
        }
    }
}

/// A clue dropped during validation, by position in the raw clue list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueWarning {
    pub index: usize,
    pub reason: DropReason,
}

impl fmt::Display for ClueWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clue #{} removed: {}", self.index, self.reason)
    }
}

/// A usable puzzle plus the clues that had to be dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated {
    pub puzzle: Puzzle,
    pub warnings: Vec<ClueWarning>,
}

/// Validate and repair a raw generator response.
///
/// Steps, in order:
/// 1. reject a missing grid size, one above [`MAX_GRID_SIZE`], or a clue
///    list shorter than [`MIN_CLUES`]
/// 2. drop clues with missing fields or a span that leaves the grid
/// 3. reject if fewer than [`MIN_CLUES`] clues survive
/// 4. uppercase answers and strip characters outside the language alphabet
///
/// Bounds are checked on the raw answer, before step 4, and a word shortened
/// by stripping is kept even though it now ends earlier. Uppercasing can also
/// lengthen a word (`ß` becomes `SS`); such a word is dropped in step 4 if it
/// no longer fits. The survivor count is not re-checked after step 4.
pub fn validate(raw: &Value, language: Language) -> Result<Validated, ValidationError> {
    let grid_size = raw
        .get("gridSize")
        .and_then(as_int)
        .filter(|size| *size > 0)
        .ok_or(ValidationError::MissingGridSize)?;
    if grid_size > MAX_GRID_SIZE {
        return Err(ValidationError::GridTooLarge { size: grid_size });
    }

    let raw_clues = raw
        .get("clues")
        .and_then(Value::as_array)
        .ok_or(ValidationError::MissingClues)?;
    if raw_clues.len() < MIN_CLUES {
        return Err(ValidationError::TooFewClues {
            found: raw_clues.len(),
        });
    }

    let mut warnings = Vec::new();
    let mut seen = HashSet::new();
    let mut clues = Vec::with_capacity(raw_clues.len());

    for (index, raw_clue) in raw_clues.iter().enumerate() {
        let checked = parse_clue(raw_clue, grid_size).and_then(|clue| {
            if seen.insert((clue.direction, clue.number)) {
                Ok(clue)
            } else {
                Err(DropReason::Duplicate(clue.label()))
            }
        });
        match checked {
            Ok(clue) => clues.push((index, clue)),
            Err(reason) => drop_clue(&mut warnings, index, reason),
        }
    }

    if clues.len() < MIN_CLUES {
        return Err(ValidationError::TooFewValidClues { found: clues.len() });
    }

    let mut normalized = Vec::with_capacity(clues.len());
    for (index, mut clue) in clues {
        clue.answer = language.normalize(&clue.answer);
        if clue.answer.is_empty() {
            drop_clue(&mut warnings, index, DropReason::EmptyAfterNormalization);
            continue;
        }
        let start = match clue.direction {
            Direction::Across => clue.col,
            Direction::Down => clue.row,
        };
        let end = start + clue.length();
        if end as i64 > grid_size {
            drop_clue(&mut warnings, index, DropReason::NormalizedPastEdge { end });
            continue;
        }
        normalized.push(clue);
    }

    log::info!(
        "Validated puzzle: {}x{} grid, {} clues, {} dropped",
        grid_size,
        grid_size,
        normalized.len(),
        warnings.len()
    );

    Ok(Validated {
        // the filter above guarantees a positive size
        puzzle: Puzzle::new(grid_size as usize, normalized),
        warnings,
    })
}

fn drop_clue(warnings: &mut Vec<ClueWarning>, index: usize, reason: DropReason) {
    let warning = ClueWarning { index, reason };
    log::warn!("{}", warning);
    warnings.push(warning);
}

/// Integer value of a JSON number, accepting integral floats such as `3.0`.
fn as_int(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.is_finite())
            .map(|f| f as i64)
    })
}

/// Parse one raw clue and check that its span fits the grid.
fn parse_clue(raw: &Value, grid_size: i64) -> Result<Clue, DropReason> {
    let row = raw
        .get("row")
        .and_then(as_int)
        .ok_or(DropReason::MissingField("row"))?;
    let col = raw
        .get("col")
        .and_then(as_int)
        .ok_or(DropReason::MissingField("col"))?;
    let answer = raw
        .get("answer")
        .and_then(Value::as_str)
        .ok_or(DropReason::MissingField("answer"))?;
    if answer.is_empty() {
        return Err(DropReason::EmptyAnswer);
    }
    let number = raw
        .get("number")
        .and_then(as_int)
        .and_then(|n| u32::try_from(n).ok())
        .filter(|n| *n > 0)
        .ok_or(DropReason::MissingField("number"))?;
    let text = raw
        .get("clue")
        .and_then(Value::as_str)
        .ok_or(DropReason::MissingField("clue"))?;
    let direction = raw
        .get("direction")
        .and_then(Value::as_str)
        .and_then(|d| Direction::from_wire(&d.to_lowercase()))
        .ok_or(DropReason::MissingField("direction"))?;

    if row < 0 || col < 0 || row >= grid_size || col >= grid_size {
        return Err(DropReason::StartOutOfBounds { row, col });
    }
    let length = answer.chars().count() as i64;
    let end = match direction {
        Direction::Across => col + length,
        Direction::Down => row + length,
    };
    if end > grid_size {
        return Err(DropReason::EndOutOfBounds { end });
    }

    Ok(Clue {
        number,
        text: text.to_string(),
        answer: answer.to_string(),
        direction,
        row: row as usize,
        col: col as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coord;
    use serde_json::json;

    fn clue(number: u32, direction: &str, answer: &str, row: i64, col: i64) -> Value {
        json!({
            "number": number,
            "clue": format!("Clue {}", number),
            "answer": answer,
            "direction": direction,
            "row": row,
            "col": col,
        })
    }

    fn five_valid() -> Vec<Value> {
        vec![
            clue(1, "across", "RUST", 0, 0),
            clue(1, "down", "ROPE", 0, 0),
            clue(2, "across", "OWL", 1, 0),
            clue(3, "across", "PIT", 2, 0),
            clue(4, "across", "EEL", 3, 0),
        ]
    }

    #[test]
    fn test_accepts_valid_response() {
        let raw = json!({ "gridSize": 15, "clues": five_valid() });
        let validated = validate(&raw, Language::English).unwrap();
        assert_eq!(validated.puzzle.grid_size, 15);
        assert_eq!(validated.puzzle.clues.len(), 5);
        assert!(validated.warnings.is_empty());
        assert_eq!(validated.puzzle.clues[1].direction, Direction::Down);
    }

    #[test]
    fn test_drops_clue_running_off_the_grid() {
        let mut clues = five_valid();
        clues.insert(2, clue(9, "across", "HELLO", 4, 13));
        let raw = json!({ "gridSize": 15, "clues": clues });

        let validated = validate(&raw, Language::English).unwrap();
        assert_eq!(validated.puzzle.clues.len(), 5);
        assert!(validated.puzzle.find_clue(9, Direction::Across).is_none());
        assert_eq!(
            validated.warnings,
            vec![ClueWarning {
                index: 2,
                reason: DropReason::EndOutOfBounds { end: 18 }
            }]
        );
    }

    #[test]
    fn test_rejects_four_valid_clues() {
        let mut clues = five_valid();
        clues[4] = clue(4, "across", "EEL", -1, 0);
        let raw = json!({ "gridSize": 15, "clues": clues });
        assert_eq!(
            validate(&raw, Language::English),
            Err(ValidationError::TooFewValidClues { found: 4 })
        );

        let four = five_valid()[..4].to_vec();
        let raw = json!({ "gridSize": 15, "clues": four });
        assert_eq!(
            validate(&raw, Language::English),
            Err(ValidationError::TooFewClues { found: 4 })
        );
    }

    #[test]
    fn test_rejects_missing_grid_size_or_clues() {
        let clues = five_valid();
        for raw in [
            json!({ "clues": clues }),
            json!({ "gridSize": 0, "clues": clues }),
            json!({ "gridSize": -3, "clues": clues }),
            json!({ "gridSize": "15", "clues": clues }),
        ] {
            assert_eq!(
                validate(&raw, Language::English),
                Err(ValidationError::MissingGridSize)
            );
        }
        for raw in [json!({ "gridSize": 15 }), json!({ "gridSize": 15, "clues": "RUST" })] {
            assert_eq!(validate(&raw, Language::English), Err(ValidationError::MissingClues));
        }
    }

    #[test]
    fn test_drops_clues_with_missing_fields() {
        let mut clues = five_valid();
        clues.push(json!({ "number": 7, "clue": "No row", "answer": "AB", "direction": "down", "col": 1 }));
        clues.push(json!({ "number": 8, "clue": "Bad answer", "answer": 12, "direction": "down", "row": 0, "col": 1 }));
        clues.push(clue(9, "diagonal", "AB", 0, 1));
        clues.push(clue(10, "down", "", 0, 1));
        let raw = json!({ "gridSize": 15, "clues": clues });

        let validated = validate(&raw, Language::English).unwrap();
        let reasons: Vec<_> = validated.warnings.iter().map(|w| w.reason.clone()).collect();
        assert_eq!(
            reasons,
            vec![
                DropReason::MissingField("row"),
                DropReason::MissingField("answer"),
                DropReason::MissingField("direction"),
                DropReason::EmptyAnswer,
            ]
        );
    }

    #[test]
    fn test_drops_start_out_of_bounds() {
        let mut clues = five_valid();
        clues.push(clue(6, "down", "A", 15, 0));
        let raw = json!({ "gridSize": 15, "clues": clues });
        let validated = validate(&raw, Language::English).unwrap();
        assert_eq!(
            validated.warnings[0].reason,
            DropReason::StartOutOfBounds { row: 15, col: 0 }
        );
    }

    #[test]
    fn test_drops_duplicate_number_and_direction() {
        let mut clues = five_valid();
        clues.push(clue(2, "across", "ANT", 5, 5));
        clues.push(clue(2, "down", "ANT", 5, 5));
        let raw = json!({ "gridSize": 15, "clues": clues });
        let validated = validate(&raw, Language::English).unwrap();
        assert_eq!(validated.puzzle.clues.len(), 6);
        assert_eq!(validated.warnings[0].reason, DropReason::Duplicate("2A".to_string()));
    }

    #[test]
    fn test_normalizes_answers_per_language() {
        let mut clues = five_valid();
        clues[2] = clue(2, "across", "o-w l", 1, 0);
        clues.push(clue(5, "down", "año", 5, 5));

        let raw = json!({ "gridSize": 15, "clues": clues });
        let english = validate(&raw, Language::English).unwrap();
        assert_eq!(english.puzzle.clues[2].answer, "OWL");
        assert_eq!(english.puzzle.clues[5].answer, "AO");

        let spanish = validate(&raw, Language::Spanish).unwrap();
        assert_eq!(spanish.puzzle.clues[5].answer, "AÑO");
    }

    #[test]
    fn test_bounds_checked_before_stripping() {
        // "NEW YORK" is 8 characters raw and ends exactly on the edge of a
        // 15 grid from col 7; stripped it is 7 letters and ends one cell
        // earlier than validated. Bounds are not re-checked.
        let mut clues = five_valid();
        clues.push(clue(6, "across", "New York", 9, 7));
        let raw = json!({ "gridSize": 15, "clues": clues });
        let validated = validate(&raw, Language::English).unwrap();
        let ny = &validated.puzzle.clues[5];
        assert_eq!(ny.answer, "NEWYORK");
        assert_eq!(ny.last_cell(), Some(Coord::new(9, 13)));

        // and a word that only fits once stripped is still dropped
        let mut clues = five_valid();
        clues.push(clue(6, "across", "New York", 9, 8));
        let raw = json!({ "gridSize": 15, "clues": clues });
        let validated = validate(&raw, Language::English).unwrap();
        assert_eq!(validated.puzzle.clues.len(), 5);
    }

    #[test]
    fn test_drops_answer_lengthened_past_edge_by_uppercasing() {
        // "straße" is 6 characters and fits from col 9 of a 15 grid, but
        // uppercases to the 7 letter STRASSE
        let mut clues = five_valid();
        clues.push(clue(6, "across", "straße", 8, 9));
        clues.push(clue(7, "down", "straße", 5, 12));
        let raw = json!({ "gridSize": 15, "clues": clues });
        let validated = validate(&raw, Language::English).unwrap();

        assert!(validated.puzzle.find_clue(6, Direction::Across).is_none());
        assert_eq!(
            validated.warnings,
            vec![ClueWarning {
                index: 5,
                reason: DropReason::NormalizedPastEdge { end: 16 }
            }]
        );
        let down = &validated.puzzle.clues[validated.puzzle.find_clue(7, Direction::Down).unwrap()];
        assert_eq!(down.answer, "STRASSE");
        assert_eq!(down.last_cell(), Some(Coord::new(11, 12)));
        for clue in &validated.puzzle.clues {
            let last = clue.last_cell().unwrap();
            assert!(last.row < 15 && last.col < 15);
        }
    }

    #[test]
    fn test_rejects_grid_too_large_to_draw() {
        let raw = json!({ "gridSize": 20000, "clues": five_valid() });
        assert_eq!(
            validate(&raw, Language::English),
            Err(ValidationError::GridTooLarge { size: 20000 })
        );

        let raw = json!({ "gridSize": MAX_GRID_SIZE, "clues": five_valid() });
        assert!(validate(&raw, Language::English).is_ok());
    }

    #[test]
    fn test_drops_answer_emptied_by_normalization_without_recount() {
        let mut clues = five_valid();
        clues[0] = clue(1, "across", "123", 0, 0);
        let raw = json!({ "gridSize": 15, "clues": clues });
        let validated = validate(&raw, Language::English).unwrap();
        assert_eq!(validated.puzzle.clues.len(), 4);
        assert_eq!(
            validated.warnings[0].reason,
            DropReason::EmptyAfterNormalization
        );
    }

    #[test]
    fn test_accepts_integral_floats_and_capitalized_direction() {
        let mut clues = five_valid();
        clues.push(json!({ "number": 6.0, "clue": "Cat", "answer": "CAT", "direction": "Down", "row": 5.0, "col": 9 }));
        let raw = json!({ "gridSize": 15.0, "clues": clues });
        let validated = validate(&raw, Language::English).unwrap();
        assert_eq!(validated.puzzle.clues[5].start(), Coord::new(5, 9));
        assert_eq!(validated.puzzle.clues[5].direction, Direction::Down);
    }

    #[test]
    fn test_user_messages_differ_by_stage() {
        assert_ne!(
            ValidationError::MissingClues.user_message(),
            ValidationError::TooFewValidClues { found: 2 }.user_message()
        );
    }
}
