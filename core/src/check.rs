use crate::{AnswerStore, Coord, Puzzle};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Correctness of one filled cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Verdicts of the last check. Cells without an entry have no verdict.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedAnswers {
    verdicts: HashMap<Coord, Verdict>,
}

impl CheckedAnswers {
    pub fn get(&self, coord: Coord) -> Option<Verdict> {
        self.verdicts.get(&coord).copied()
    }

    pub fn clear(&mut self) {
        self.verdicts.clear();
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    pub fn count(&self, verdict: Verdict) -> usize {
        self.verdicts.values().filter(|v| **v == verdict).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, Verdict)> + '_ {
        self.verdicts.iter().map(|(coord, verdict)| (*coord, *verdict))
    }
}

/// Compare every entered letter against the clue letters covering its cell.
///
/// Intersections are visited once per covering clue and the last visit wins,
/// which only matters when the two clues disagree.
pub fn check(puzzle: &Puzzle, answers: &AnswerStore) -> CheckedAnswers {
    let mut verdicts = HashMap::new();
    for clue in &puzzle.clues {
        for (coord, expected) in clue.letters() {
            if let Some(entered) = answers.get(coord) {
                let verdict = if entered == expected {
                    Verdict::Correct
                } else {
                    Verdict::Incorrect
                };
                verdicts.insert(coord, verdict);
            }
        }
    }
    CheckedAnswers { verdicts }
}
