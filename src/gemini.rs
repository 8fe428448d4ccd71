use std::collections::HashSet;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::error::PathError;
use crate::models::{Language, LearningPath, LearningPathInput};
use crate::prompt;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: Some(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Reads `GEMINI_API_KEY` and `GEMINI_API_BASE` from the environment.
    /// A missing key is not an error here; it surfaces when a call is made.
    pub fn from_env() -> Self {
        let base_url = std::env::var("GEMINI_API_BASE")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            client: Client::new(),
            api_key: std::env::var("GEMINI_API_KEY").ok(),
            base_url,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Custom base URL, e.g. for proxies or tests.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// One `generateContent` round trip. No retries, no streaming.
    pub(crate) async fn generate_content(
        &self,
        body: serde_json::Value,
    ) -> Result<GenerateContentResponse, PathError> {
        let api_key = self.api_key.as_deref().ok_or(PathError::MissingApiKey)?;
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| PathError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(%status, "❌ Gemini API call failed: {}", error_body);
            return Err(PathError::Service {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| PathError::Http(e.to_string()))?;

        serde_json::from_str(&response_text)
            .map_err(|e| PathError::Parse(format!("response envelope: {e}")))
    }

    /// Issues exactly one generation call and decodes the structured JSON
    /// payload into a `LearningPath`. Either a fully validated path comes
    /// back or the call fails as a whole; there are no partial results and
    /// identical inputs are never deduplicated.
    pub async fn generate_learning_path(
        &self,
        input: &LearningPathInput,
        lang: Language,
    ) -> Result<LearningPath, PathError> {
        prompt::validate(input)?;

        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt::prompt_text(input) }]
            }],
            "systemInstruction": {
                "parts": [{ "text": prompt::system_instruction(lang) }]
            },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": prompt::response_schema()
            }
        });

        info!("🚀 Requesting learning path for goal: {}", input.goal.trim());
        let response = self.generate_content(body).await?;

        // An absent payload decodes as an empty object; the required fields
        // then fail the decode instead of blowing up downstream.
        let payload = response
            .first_text()
            .unwrap_or_else(|| "{}".to_string());
        let path: LearningPath = serde_json::from_str(&payload)
            .map_err(|e| PathError::Parse(format!("learning path payload: {e}")))?;
        validate_path(&path)?;

        info!("✅ Learning path generated with {} steps", path.steps.len());
        Ok(path)
    }
}

/// Gate between the external model and rendered state: a decoded path is
/// accepted only if it has steps and their ids are unique (the completed
/// set is keyed by id).
fn validate_path(path: &LearningPath) -> Result<(), PathError> {
    if path.steps.is_empty() {
        return Err(PathError::Schema("path has no steps".into()));
    }
    let mut seen = HashSet::new();
    for step in &path.steps {
        if !seen.insert(step.id.as_str()) {
            return Err(PathError::Schema(format!(
                "duplicate step id: {}",
                step.id
            )));
        }
    }
    Ok(())
}

// --- Response Parsing Helpers ---

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    Other(serde_json::Value),
}

impl GenerateContentResponse {
    /// First non-empty text part across candidates, in document order.
    pub(crate) fn first_text(&self) -> Option<String> {
        for candidate in &self.candidates {
            for part in &candidate.content.parts {
                if let Part::Text { text } = part {
                    if !text.trim().is_empty() {
                        return Some(text.clone());
                    }
                }
            }
        }
        None
    }
}
