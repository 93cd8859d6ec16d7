pub mod pipeline;
pub mod prompt;
pub mod providers;
pub mod util;

mod errors;
pub use errors::ProviderError;

pub use lexigrid_core::Language;
pub use pipeline::{GenerateRequest, GenerationError, generate_puzzle};
pub use providers::gemini::{self, GeminiClient};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;

/// A service that writes crossword material with a language model.
///
/// Both calls are asynchronous and may fail; [`CrosswordService::generate`]
/// returns the raw, untrusted puzzle JSON which must go through
/// [`lexigrid_core::validate`].
pub trait CrosswordService {
    /// Expand a short topic into roughly 250 words of prose.
    fn expand_topic(
        &self,
        topic: &str,
        language: Language,
    ) -> impl Future<Output = Result<String, ProviderError>> + Send;

    /// Generate a puzzle from `content`.
    fn generate(
        &self,
        content: &str,
        word_count: WordCount,
        difficulty: Difficulty,
        language: Language,
    ) -> impl Future<Output = Result<Value, ProviderError>> + Send;
}

/// Puzzle difficulty requested from the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Approximate number of words in the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WordCount {
    Small,
    #[default]
    Medium,
    Large,
}

impl WordCount {
    pub const ALL: [WordCount; 3] = [WordCount::Small, WordCount::Medium, WordCount::Large];

    /// Range string sent to the generator, e.g. `15-20`.
    pub fn range(&self) -> &'static str {
        match self {
            WordCount::Small => "10-15",
            WordCount::Medium => "15-20",
            WordCount::Large => "20-25",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WordCount::Small => "Small (10-15)",
            WordCount::Medium => "Medium (15-20)",
            WordCount::Large => "Large (20-25)",
        }
    }
}

/// Where the puzzle content comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputSource {
    /// Text pasted by the user.
    #[default]
    Text,
    /// Text read from a file.
    File,
    /// A topic expanded into text by the model first.
    Topic,
}

impl InputSource {
    pub const ALL: [InputSource; 3] = [InputSource::Text, InputSource::File, InputSource::Topic];

    pub fn name(&self) -> &'static str {
        match self {
            InputSource::Text => "Paste Text",
            InputSource::File => "Upload File",
            InputSource::Topic => "Generate with AI",
        }
    }
}
