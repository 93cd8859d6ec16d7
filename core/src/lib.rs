pub mod answers;
pub mod check;
pub mod clue;
pub mod coord;
pub mod crossword;
pub mod direction;
pub mod grid;
pub mod language;
pub mod print;
pub mod selection;
pub mod session;
pub mod validate;

pub use answers::AnswerStore;
pub use check::{CheckedAnswers, Verdict, check};
pub use clue::Clue;
pub use coord::Coord;
pub use crossword::Puzzle;
pub use direction::Direction;
pub use grid::PuzzleGrid;
pub use language::Language;
pub use selection::{Arrow, Selection};
pub use session::Session;
pub use validate::{ClueWarning, Validated, ValidationError, validate};
