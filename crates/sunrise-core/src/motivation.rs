//! Motivation Generator: one chat-completion call, fallback text on any failure.

use crate::error::{ProviderError, ProviderResult};
use crate::openai::{ChatCompletion, ChatMessage, ChatRequest};
use crate::persona::Persona;
use std::sync::Arc;

/// Shown when the chat call fails for any reason.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, I couldn't think of anything right now — but you're awesome!";

/// Outcome of a motivation request. `text()` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Motivation {
    Generated(String),
    Fallback,
}

impl Motivation {
    pub fn text(&self) -> &str {
        match self {
            Motivation::Generated(text) => text,
            Motivation::Fallback => FALLBACK_MESSAGE,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Motivation::Fallback)
    }
}

#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            max_tokens: 500,
            temperature: 0.9,
        }
    }
}

pub struct MotivationGenerator {
    chat: Arc<dyn ChatCompletion>,
    settings: ChatSettings,
}

impl MotivationGenerator {
    pub fn new(chat: Arc<dyn ChatCompletion>, settings: ChatSettings) -> Self {
        Self { chat, settings }
    }

    /// Single attempt, no retry. Errors are logged and replaced by [`Motivation::Fallback`].
    pub async fn generate(&self, prompt: &str, persona: Persona) -> Motivation {
        match self.try_generate(prompt, persona).await {
            Ok(text) => Motivation::Generated(text),
            Err(e) => {
                tracing::error!(call = "chat_completion", persona = %persona, error = %e, "motivation generation failed; using fallback");
                Motivation::Fallback
            }
        }
    }

    /// The raw call: trimmed reply, or the provider error. A blank reply counts as empty.
    pub async fn try_generate(&self, prompt: &str, persona: Persona) -> ProviderResult<String> {
        let request = ChatRequest {
            model: self.settings.model.clone(),
            messages: vec![
                ChatMessage::system(persona.system_prompt()),
                ChatMessage::user(prompt),
            ],
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        let reply = self.chat.complete(&request).await?;
        let trimmed = reply.trim();
        if trimmed.is_empty() {
            return Err(ProviderError::EmptyResponse("motivation text"));
        }
        Ok(trimmed.to_string())
    }
}
