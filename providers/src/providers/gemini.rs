use crate::prompt::{crossword_prompt, response_schema, topic_prompt};
use crate::util::{env_var_any, http_client};
use crate::{CrosswordService, Difficulty, Language, ProviderError, WordCount};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables checked for an API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Client for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: http_client(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Build a client from `GEMINI_API_KEY` or `API_KEY`.
    pub fn from_env() -> Result<Self, ProviderError> {
        env_var_any(&API_KEY_VARS)
            .map(Self::new)
            .ok_or(ProviderError::MissingApiKey)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Send one prompt and return the text of the first candidate.
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<String, ProviderError> {
        if self.api_key.trim().is_empty() {
            return Err(ProviderError::MissingApiKey);
        }

        log::debug!("POST {} ({})", self.endpoint(), self.model);
        let res = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            log::error!("generation request failed with {}: {}", status, message);
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let response: GenerateContentResponse = serde_json::from_str(&body)?;
        extract_text(response)
    }
}

impl CrosswordService for GeminiClient {
    async fn expand_topic(
        &self,
        topic: &str,
        language: Language,
    ) -> Result<String, ProviderError> {
        let request = GenerateContentRequest::text(topic_prompt(topic, language));
        let text = self.generate_content(&request).await?;
        log::info!("expanded topic into {} characters", text.len());
        Ok(text)
    }

    async fn generate(
        &self,
        content: &str,
        word_count: WordCount,
        difficulty: Difficulty,
        language: Language,
    ) -> Result<Value, ProviderError> {
        let prompt = crossword_prompt(content, word_count, difficulty, language);
        let request = GenerateContentRequest::json(prompt, response_schema());
        let text = self.generate_content(&request).await?;
        parse_puzzle_text(&text)
    }
}

/// Parse the model's text as JSON. Prose instead of JSON is a refusal.
fn parse_puzzle_text(text: &str) -> Result<Value, ProviderError> {
    let trimmed = text
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();
    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) if value.is_object() => Ok(value),
        _ => {
            log::warn!("model answered without puzzle JSON");
            Err(ProviderError::Refused(text.trim().to_string()))
        }
    }
}

fn extract_text(response: GenerateContentResponse) -> Result<String, ProviderError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(ProviderError::Refused(format!(
            "The request was blocked by the model ({}). Please try different content.",
            reason
        )));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(ProviderError::EmptyResponse)?;

    let text: String = candidate
        .content
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if !text.trim().is_empty() {
        return Ok(text);
    }

    match candidate.finish_reason.as_deref() {
        None | Some("STOP") => Err(ProviderError::EmptyResponse),
        Some(reason) => Err(ProviderError::Refused(format!(
            "The model stopped without an answer ({}). Please try different content.",
            reason
        ))),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    fn text(prompt: String) -> Self {
        Self {
            contents: vec![Content::user(prompt)],
            generation_config: None,
        }
    }

    fn json(prompt: String, schema: Value) -> Self {
        Self {
            contents: vec![Content::user(prompt)],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            }),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn user(text: String) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: Some(text) }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let res = response(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "{\"gridSize\":" }, { "text": "15}" }] },
                "finishReason": "STOP"
            }]
        }));
        assert_eq!(extract_text(res).unwrap(), "{\"gridSize\":15}");
    }

    #[test]
    fn test_extract_text_blocked_prompt() {
        let res = response(json!({ "promptFeedback": { "blockReason": "SAFETY" } }));
        match extract_text(res) {
            Err(ProviderError::Refused(message)) => assert!(message.contains("SAFETY")),
            other => panic!("expected refusal, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_text_no_candidates() {
        let res = response(json!({ "candidates": [] }));
        assert!(matches!(extract_text(res), Err(ProviderError::EmptyResponse)));
    }

    #[test]
    fn test_extract_text_safety_finish() {
        let res = response(json!({ "candidates": [{ "finishReason": "SAFETY" }] }));
        assert!(matches!(extract_text(res), Err(ProviderError::Refused(_))));
    }

    #[test]
    fn test_parse_puzzle_text() {
        let value = parse_puzzle_text("```json\n{\"gridSize\": 15, \"clues\": []}\n```").unwrap();
        assert_eq!(value["gridSize"], 15);
    }

    #[test]
    fn test_parse_puzzle_text_prose_is_refusal() {
        let prose = "I'm sorry, I cannot create a crossword from this text.";
        match parse_puzzle_text(prose) {
            Err(ProviderError::Refused(message)) => assert_eq!(message, prose),
            other => panic!("expected refusal, got {:?}", other),
        }
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateContentRequest::json("hi".to_string(), json!({ "type": "OBJECT" }));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");

        let plain = serde_json::to_value(GenerateContentRequest::text("x".to_string())).unwrap();
        assert!(plain.get("generationConfig").is_none());
    }

    #[test]
    fn test_builder() {
        let client = GeminiClient::new("key")
            .with_model("gemini-2.5-pro")
            .with_base_url("http://localhost:9000/");
        assert_eq!(client.model(), "gemini-2.5-pro");
        assert_eq!(
            client.endpoint(),
            "http://localhost:9000/models/gemini-2.5-pro:generateContent"
        );
    }

    #[tokio::test]
    async fn test_empty_key_is_rejected_before_sending() {
        let client = GeminiClient::new("  ");
        let result = client.expand_topic("space", Language::English).await;
        assert!(matches!(result, Err(ProviderError::MissingApiKey)));
    }
}
