use thiserror::Error;

/// Failure talking to a generation service.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Serde parse error: {0}")]
    SerdeParse(#[from] serde_json::Error),
    #[error("Service returned {status}: {message}")]
    Status { status: u16, message: String },
    /// The model declined the request; the message is meant for the user.
    #[error("{0}")]
    Refused(String),
    #[error("Service returned an empty response")]
    EmptyResponse,
    #[error("No API key configured, set GEMINI_API_KEY")]
    MissingApiKey,
}
