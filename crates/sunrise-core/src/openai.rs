//! OpenAI-compatible provider: chat completions and image generations over reqwest.
//!
//! The generators only see the [`ChatCompletion`] and [`ImageGeneration`] traits, so tests
//! and alternative providers can stand in for [`OpenAiClient`].

use crate::error::{ProviderError, ProviderResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat-completions request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Images-generations request body.
#[derive(Debug, Clone, Serialize)]
pub struct ImageRequest {
    pub model: String,
    pub prompt: String,
    pub size: String,
    pub quality: String,
    pub n: u8,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Option<Vec<ChatChoice>>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatMessageResponse>,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Option<Vec<ImageDatum>>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    url: Option<String>,
}

/// Chat-completion endpoint: returns the first choice's text.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> ProviderResult<String>;
}

/// Image-generation endpoint: returns every image URL in the response, in order.
#[async_trait]
pub trait ImageGeneration: Send + Sync {
    async fn generate_images(&self, request: &ImageRequest) -> ProviderResult<Vec<String>>;
}

/// reqwest client for an OpenAI-compatible API. Without a key every call fails with
/// [`ProviderError::MissingApiKey`] instead of hitting the network.
#[derive(Clone)]
pub struct OpenAiClient {
    api_key: Option<String>,
    api_base: String,
    client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            api_base: DEFAULT_API_BASE.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Point at another OpenAI-compatible base URL (proxy, mock server).
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ProviderResult<String> {
        let key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)?;
        let url = format!("{}/{}", self.api_base, path);

        let res = self
            .client
            .post(&url)
            .bearer_auth(key)
            .json(body)
            .send()
            .await?;

        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(text)
    }
}

#[async_trait]
impl ChatCompletion for OpenAiClient {
    async fn complete(&self, request: &ChatRequest) -> ProviderResult<String> {
        let text = self.post_json("chat/completions", request).await?;
        let parsed: ChatResponse =
            serde_json::from_str(&text).map_err(|e| ProviderError::Parse(e.to_string()))?;

        parsed
            .choices
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .ok_or(ProviderError::EmptyResponse("chat completion"))
    }
}

#[async_trait]
impl ImageGeneration for OpenAiClient {
    async fn generate_images(&self, request: &ImageRequest) -> ProviderResult<Vec<String>> {
        let text = self.post_json("images/generations", request).await?;
        let parsed: ImageResponse =
            serde_json::from_str(&text).map_err(|e| ProviderError::Parse(e.to_string()))?;

        Ok(parsed
            .data
            .unwrap_or_default()
            .into_iter()
            .filter_map(|d| d.url)
            .collect())
    }
}
