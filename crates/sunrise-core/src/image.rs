//! Image Generator: one morning-scene image per request, `None` on failure.

use crate::error::{ProviderError, ProviderResult};
use crate::openai::{ImageGeneration, ImageRequest};
use crate::prompts::image_prompt;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ImageSettings {
    pub model: String,
    pub size: String,
    pub quality: String,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            model: "dall-e-3".to_string(),
            size: "1024x1024".to_string(),
            quality: "standard".to_string(),
        }
    }
}

pub struct ImageGenerator {
    images: Arc<dyn ImageGeneration>,
    settings: ImageSettings,
}

impl ImageGenerator {
    pub fn new(images: Arc<dyn ImageGeneration>, settings: ImageSettings) -> Self {
        Self { images, settings }
    }

    /// URL of the generated image. `None` means "no image", not an error for the page.
    pub async fn generate(&self, user_text: &str, tone: &str) -> Option<String> {
        match self.try_generate(user_text, tone).await {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::error!(call = "image_generation", error = %e, "image generation failed; rendering without image");
                None
            }
        }
    }

    pub async fn try_generate(&self, user_text: &str, tone: &str) -> ProviderResult<String> {
        let request = ImageRequest {
            model: self.settings.model.clone(),
            prompt: image_prompt(user_text, tone),
            size: self.settings.size.clone(),
            quality: self.settings.quality.clone(),
            n: 1,
        };
        self.images
            .generate_images(&request)
            .await?
            .into_iter()
            .next()
            .ok_or(ProviderError::EmptyResponse("image url"))
    }
}
