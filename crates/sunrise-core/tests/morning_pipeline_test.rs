//! Integration test: the morning pipeline end to end against fake and mock providers.
//!
//! Verifies that:
//! 1. A low mood selects the Supportive persona and its framing reaches the chat prompt.
//! 2. The video id is pulled from the generated text and the image URL is passed through.
//! 3. Provider outages degrade to the fallback text and no image, never an error.
//! 4. A coach built from config with no API key still answers.

use async_trait::async_trait;
use httpmock::Method::POST;
use httpmock::MockServer;
use serde_json::json;
use std::sync::{Arc, Mutex};
use sunrise_core::{
    ChatCompletion, ChatRequest, ChatSettings, ImageGeneration, ImageRequest, ImageSettings,
    MorningCoach, OpenAiClient, Persona, ProviderError, ProviderResult, SunriseConfig, UserMood,
    FALLBACK_MESSAGE,
};

#[derive(Default)]
struct RecordingProvider {
    fail: bool,
    chat_requests: Mutex<Vec<ChatRequest>>,
    image_requests: Mutex<Vec<ImageRequest>>,
}

#[async_trait]
impl ChatCompletion for RecordingProvider {
    async fn complete(&self, request: &ChatRequest) -> ProviderResult<String> {
        self.chat_requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(ProviderError::Api {
                status: 503,
                body: "unavailable".into(),
            });
        }
        Ok("You can do this!\nHaiku...\nhttps://www.youtube.com/watch?v=ZbZSe6N_BXs".into())
    }
}

#[async_trait]
impl ImageGeneration for RecordingProvider {
    async fn generate_images(&self, request: &ImageRequest) -> ProviderResult<Vec<String>> {
        self.image_requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(ProviderError::Parse("bad json".into()));
        }
        Ok(vec!["https://images.example/sunrise.png".into()])
    }
}

fn coach(provider: Arc<RecordingProvider>) -> MorningCoach {
    MorningCoach::with_provider(provider, ChatSettings::default(), ImageSettings::default())
}

#[tokio::test]
async fn low_mood_flows_through_supportive_persona() {
    let provider = Arc::new(RecordingProvider::default());
    let report = coach(provider.clone())
        .respond(&UserMood::new("I feel exhausted and dreading today", "Gentle"))
        .await;

    assert!(report.polarity < -0.3);
    assert_eq!(report.persona, Persona::Supportive);
    assert!(!report.motivation.is_fallback());
    assert_eq!(report.video_id.as_deref(), Some("ZbZSe6N_BXs"));
    assert_eq!(report.image_url.as_deref(), Some("https://images.example/sunrise.png"));

    let chats = provider.chat_requests.lock().unwrap();
    assert_eq!(chats.len(), 1);
    assert_eq!(chats[0].messages[0].role, "system");
    assert!(chats[0].messages[0].content.contains("very supportive life coach"));
    assert!(chats[0].messages[1].content.contains("very supportive life coach"));
    assert!(chats[0].messages[1].content.contains("in a gentle tone"));

    let images = provider.image_requests.lock().unwrap();
    assert_eq!(images.len(), 1);
    assert!(images[0].prompt.contains("feeling I feel exhausted and dreading today"));
}

#[tokio::test]
async fn outage_degrades_gracefully() {
    let provider = Arc::new(RecordingProvider {
        fail: true,
        ..Default::default()
    });
    let report = coach(provider.clone())
        .respond(&UserMood::new("Best morning ever, so happy!", "Cheerful"))
        .await;

    assert_eq!(report.persona, Persona::HighEnergy);
    assert!(report.motivation.is_fallback());
    assert_eq!(report.motivation.text(), FALLBACK_MESSAGE);
    assert_eq!(report.video_id, None);
    assert_eq!(report.image_url, None);
    // The image call is still attempted after the chat call fails.
    assert_eq!(provider.image_requests.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn empty_text_is_encouraging() {
    let report = coach(Arc::new(RecordingProvider::default()))
        .respond(&UserMood::new("", "calm"))
        .await;
    assert_eq!(report.polarity, 0.0);
    assert_eq!(report.persona, Persona::Encouraging);
}

#[tokio::test]
async fn openai_client_against_mock_server() {
    let server = MockServer::start_async().await;
    let chat = server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(json!({
                "choices": [{ "message": { "content": "Go! https://youtu.be/dQw4w9WgXcQ" } }]
            }));
        })
        .await;
    let images = server
        .mock_async(|when, then| {
            when.method(POST).path("/images/generations");
            then.status(500).body("upstream error");
        })
        .await;

    let client = OpenAiClient::new(Some("sk-test".into())).with_api_base(&server.base_url());
    let coach = MorningCoach::with_provider(
        Arc::new(client),
        ChatSettings::default(),
        ImageSettings::default(),
    );
    let report = coach.respond(&UserMood::new("a bit tired", "Funny")).await;

    assert_eq!(report.motivation.text(), "Go! https://youtu.be/dQw4w9WgXcQ");
    assert_eq!(report.video_id.as_deref(), Some("dQw4w9WgXcQ"));
    assert_eq!(report.image_url, None);
    chat.assert_async().await;
    images.assert_async().await;
}

#[tokio::test]
async fn coach_from_config_without_key_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = SunriseConfig::load_from(&dir.path().join("none.toml")).unwrap();
    cfg.api_key = None;

    let report = MorningCoach::from_config(&cfg)
        .respond(&UserMood::new("meh", "calm"))
        .await;
    assert!(report.motivation.is_fallback());
    assert_eq!(report.image_url, None);
}
