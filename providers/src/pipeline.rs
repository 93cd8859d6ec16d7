//! Text (or topic) in, validated puzzle out.

use crate::{CrosswordService, Difficulty, InputSource, ProviderError, WordCount};
use lexigrid_core::{Language, Validated, ValidationError, validate};
use thiserror::Error;

const TOPIC_FAILED: &str =
    "The AI failed to generate text for the topic. Please try another topic.";
const GENERATION_FAILED: &str = "Failed to generate crossword puzzle. The provided text might be too short, too complex, or the AI is currently unavailable.";

/// Everything the form collects for one generation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerateRequest {
    pub source: InputSource,
    /// Puzzle text, or the topic when `source` is [`InputSource::Topic`].
    pub content: String,
    pub word_count: WordCount,
    pub difficulty: Difficulty,
    pub language: Language,
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("topic expansion failed: {0}")]
    Topic(#[source] ProviderError),
    #[error("puzzle generation failed: {0}")]
    Generation(#[source] ProviderError),
    #[error("invalid puzzle: {0}")]
    Validation(#[from] ValidationError),
}

impl GenerationError {
    /// Message shown in the form. Refusals are passed through untouched.
    pub fn user_message(&self) -> String {
        match self {
            GenerationError::Topic(ProviderError::Refused(message))
            | GenerationError::Generation(ProviderError::Refused(message)) => message.clone(),
            GenerationError::Topic(ProviderError::MissingApiKey)
            | GenerationError::Generation(ProviderError::MissingApiKey) => {
                "No API key found. Set GEMINI_API_KEY or add api_key to ~/.lexigrid/preferences.json."
                    .to_string()
            }
            GenerationError::Topic(_) => TOPIC_FAILED.to_string(),
            GenerationError::Generation(_) => GENERATION_FAILED.to_string(),
            GenerationError::Validation(e) => e.user_message().to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, GenerationError::Validation(_))
    }
}

/// Run one generation: expand the topic if needed, generate, validate.
pub async fn generate_puzzle<S>(
    service: &S,
    request: &GenerateRequest,
) -> Result<Validated, GenerationError>
where
    S: CrosswordService + ?Sized,
{
    let content = match request.source {
        InputSource::Topic => {
            log::info!("expanding topic {:?}", request.content.trim());
            service
                .expand_topic(request.content.trim(), request.language)
                .await
                .map_err(GenerationError::Topic)?
        }
        InputSource::Text | InputSource::File => request.content.clone(),
    };

    log::info!(
        "generating {} puzzle ({}, {}) from {} characters",
        request.language.name(),
        request.word_count.name(),
        request.difficulty.name(),
        content.chars().count()
    );
    let raw = service
        .generate(
            &content,
            request.word_count,
            request.difficulty,
            request.language,
        )
        .await
        .map_err(GenerationError::Generation)?;

    let validated = validate(&raw, request.language)?;
    log::info!(
        "puzzle ready: {} clues, {} dropped",
        validated.puzzle.clues.len(),
        validated.warnings.len()
    );
    Ok(validated)
}
