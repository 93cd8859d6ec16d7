//! Prompts and the response schema sent to the model.

use crate::{Difficulty, Language, WordCount};
use serde_json::{Value, json};

/// Prompt asking for prose about a topic, rich in crossword material.
pub fn topic_prompt(topic: &str, language: Language) -> String {
    format!(
        "Generate a rich, descriptive text in {language} of around 250 words about \"{topic}\". \
         The text should be suitable for creating a crossword puzzle, so it should contain many \
         specific nouns, verbs, and key terms related to the topic. Do not format it as a list. \
         Write it as a single block of prose.",
        language = language.name(),
        topic = topic,
    )
}

/// Prompt asking for a crossword built from `content`.
pub fn crossword_prompt(
    content: &str,
    word_count: WordCount,
    difficulty: Difficulty,
    language: Language,
) -> String {
    format!(
        "Generate a high-quality, solvable 15x15 crossword puzzle with approximately {words} words \
         and a {difficulty} difficulty level. The language for the clues and answers must be \
         {language}. The clues and answers must be derived exclusively from the following text \
         content. The words should intersect correctly. Provide the output as a JSON object that \
         strictly matches the provided schema. The answers must be uppercase and contain no spaces \
         or special characters. Ensure all coordinates are 0-indexed and within the 15x15 grid. \
         Make it challenging but fair, according to the specified difficulty.\n\n\
         Content to use:\n---\n{content}\n---",
        words = word_count.range(),
        difficulty = difficulty.name(),
        language = language.name(),
        content = content,
    )
}

/// JSON schema constraining the model's puzzle output.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "gridSize": {
                "type": "INTEGER",
                "description": "The size of the grid (e.g., 15 for a 15x15 grid). Max 15."
            },
            "clues": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "number": { "type": "INTEGER", "description": "The clue number on the grid." },
                        "clue": { "type": "STRING", "description": "The crossword puzzle clue." },
                        "answer": {
                            "type": "STRING",
                            "description": "The answer to the clue. Should be all uppercase, contain no spaces or special characters."
                        },
                        "direction": { "type": "STRING", "description": "The direction of the word: 'across' or 'down'." },
                        "row": { "type": "INTEGER", "description": "The 0-indexed starting row of the word." },
                        "col": { "type": "INTEGER", "description": "The 0-indexed starting column of the word." }
                    },
                    "required": ["number", "clue", "answer", "direction", "row", "col"]
                }
            }
        },
        "required": ["gridSize", "clues"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossword_prompt_carries_options() {
        let prompt = crossword_prompt(
            "The quick brown fox.",
            WordCount::Large,
            Difficulty::Hard,
            Language::Spanish,
        );
        assert!(prompt.contains("approximately 20-25 words"));
        assert!(prompt.contains("a Hard difficulty level"));
        assert!(prompt.contains("must be Spanish"));
        assert!(prompt.ends_with("---\nThe quick brown fox.\n---"));
    }

    #[test]
    fn test_topic_prompt() {
        let prompt = topic_prompt("volcanoes", Language::English);
        assert!(prompt.contains("in English of around 250 words about \"volcanoes\""));
    }

    #[test]
    fn test_schema_requires_every_clue_field() {
        let schema = response_schema();
        let required = &schema["properties"]["clues"]["items"]["required"];
        assert_eq!(required.as_array().map(Vec::len), Some(6));
        assert_eq!(schema["required"], json!(["gridSize", "clues"]));
    }
}
