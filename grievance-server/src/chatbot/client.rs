//! Generative AI client
//!
//! One request per call. No timeout, no retry: a hung call stays hung and a
//! failed one surfaces once as a [`GenerationError`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::models::ChatFailureKind;
use thiserror::Error;

use crate::core::GeminiConfig;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response contained no text")]
    EmptyResponse,
}

impl GenerationError {
    /// Which of the three user-facing failures this is
    pub fn kind(&self) -> ChatFailureKind {
        match self {
            Self::MissingApiKey => ChatFailureKind::NotConfigured,
            Self::Api { message, .. } if message.contains("API key") => {
                ChatFailureKind::NotConfigured
            }
            Self::Api { status, message }
                if *status == 404 || message.contains("not found for API version") =>
            {
                ChatFailureKind::ModelNotFound
            }
            _ => ChatFailureKind::Generic,
        }
    }
}

/// Text completion backend
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Gemini `generateContent` over REST
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingApiKey)?;

        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await?;
            let message = serde_json::from_str::<ErrorEnvelope>(&raw)
                .map(|e| e.error.message)
                .unwrap_or(raw);
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text)
    }
}
