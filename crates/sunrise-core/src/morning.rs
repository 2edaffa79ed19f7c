//! Morning pipeline: mood text → persona → motivation → video id → image.
//!
//! Everything is computed fresh per call; the coach holds only immutable settings and the
//! provider handles. The two provider calls run one after the other.

use crate::config::SunriseConfig;
use crate::image::{ImageGenerator, ImageSettings};
use crate::motivation::{ChatSettings, Motivation, MotivationGenerator};
use crate::openai::{ChatCompletion, ImageGeneration, OpenAiClient};
use crate::persona::Persona;
use crate::prompts::motivation_prompt;
use crate::sentiment::polarity;
use crate::video::extract_video_id;
use serde::Deserialize;
use std::sync::Arc;

/// What the user submitted.
#[derive(Debug, Clone, Deserialize)]
pub struct UserMood {
    pub text: String,
    pub tone: String,
}

impl UserMood {
    pub fn new(text: impl Into<String>, tone: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: tone.into(),
        }
    }
}

/// Everything the view needs for one response.
#[derive(Debug, Clone)]
pub struct MorningReport {
    pub polarity: f64,
    pub persona: Persona,
    pub motivation: Motivation,
    pub video_id: Option<String>,
    pub image_url: Option<String>,
}

pub struct MorningCoach {
    motivation: MotivationGenerator,
    image: ImageGenerator,
}

impl MorningCoach {
    pub fn new(motivation: MotivationGenerator, image: ImageGenerator) -> Self {
        Self { motivation, image }
    }

    /// Coach with a single provider serving both calls.
    pub fn with_provider<P>(provider: Arc<P>, chat: ChatSettings, image: ImageSettings) -> Self
    where
        P: ChatCompletion + ImageGeneration + 'static,
    {
        let chat_handle: Arc<dyn ChatCompletion> = provider.clone();
        let image_handle: Arc<dyn ImageGeneration> = provider;
        Self::new(
            MotivationGenerator::new(chat_handle, chat),
            ImageGenerator::new(image_handle, image),
        )
    }

    /// OpenAI client built from config. A missing key is allowed; calls then fall back.
    pub fn from_config(cfg: &SunriseConfig) -> Self {
        let client = OpenAiClient::new(cfg.api_key.clone()).with_api_base(&cfg.api_base);
        Self::with_provider(
            Arc::new(client),
            ChatSettings {
                model: cfg.chat_model.clone(),
                max_tokens: cfg.max_tokens,
                temperature: cfg.temperature,
            },
            ImageSettings {
                model: cfg.image_model.clone(),
                size: cfg.image_size.clone(),
                quality: cfg.image_quality.clone(),
            },
        )
    }

    pub async fn respond(&self, mood: &UserMood) -> MorningReport {
        let score = polarity(&mood.text);
        let persona = Persona::from_polarity(score);
        tracing::debug!(polarity = score, persona = %persona, "persona selected");

        let prompt = motivation_prompt(&mood.text, &mood.tone, persona);
        let motivation = self.motivation.generate(&prompt, persona).await;
        let video_id = extract_video_id(motivation.text()).map(str::to_string);
        let image_url = self.image.generate(&mood.text, &mood.tone).await;

        tracing::info!(
            persona = %persona,
            fallback = motivation.is_fallback(),
            video = video_id.is_some(),
            image = image_url.is_some(),
            "morning report ready"
        );

        MorningReport {
            polarity: score,
            persona,
            motivation,
            video_id,
            image_url,
        }
    }
}
