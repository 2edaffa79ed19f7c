//! Error types for Sunrise provider calls and configuration.

use thiserror::Error;

/// Result alias for calls against the generative provider.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Failures talking to the chat-completion or image-generation provider.
///
/// These never reach the end user: the generators log them and substitute
/// a fallback (see `MotivationGenerator::generate` and `ImageGenerator::generate`).
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("provider API key is not configured (set OPENAI_API_KEY)")]
    MissingApiKey,

    #[error("provider request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("provider response parse: {0}")]
    Parse(String),

    #[error("provider returned no {0}")]
    EmptyResponse(&'static str),
}

/// Errors raised while loading [`crate::SunriseConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config source: {0}")]
    Source(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
