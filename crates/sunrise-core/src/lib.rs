//! Sunrise: core library.
//! Mood scoring, coach personas, prompt templates, and the generative provider seam
//! behind the morning motivation gateway.

pub mod config;
pub mod error;
pub mod image;
pub mod morning;
pub mod motivation;
pub mod openai;
pub mod persona;
pub mod prompts;
pub mod sentiment;
pub mod video;

pub use config::SunriseConfig;
pub use error::{ConfigError, ProviderError, ProviderResult};
pub use image::{ImageGenerator, ImageSettings};
pub use morning::{MorningCoach, MorningReport, UserMood};
pub use motivation::{ChatSettings, Motivation, MotivationGenerator, FALLBACK_MESSAGE};
pub use openai::{
    ChatCompletion, ChatMessage, ChatRequest, ImageGeneration, ImageRequest, OpenAiClient,
};
pub use persona::Persona;
pub use prompts::{image_prompt, motivation_prompt};
pub use sentiment::polarity;
pub use video::{embed_url, extract_video_id};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
