//! Route handlers. Provider failures never reach this layer as errors; only a bad form does.

use crate::render::{render_page, FormValues};
use crate::AppState;
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::Html,
    Form,
};
use serde::Deserialize;
use std::sync::Arc;
use sunrise_core::UserMood;

#[derive(Debug, Deserialize)]
pub struct MoodForm {
    pub feeling: String,
    pub tone: String,
}

pub async fn health() -> &'static str {
    "OK"
}

/// Empty form.
pub async fn index() -> Result<Html<String>, (StatusCode, String)> {
    render_page(None, None, false).map(Html).map_err(render_failed)
}

/// Both fields are required; there is no defaulting.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    form: Result<Form<MoodForm>, FormRejection>,
) -> Result<Html<String>, (StatusCode, String)> {
    let Form(form) = form.map_err(|e| {
        tracing::warn!(error = %e, "rejected mood form");
        (StatusCode::BAD_REQUEST, format!("Bad request: {}", e.body_text()))
    })?;

    let mood = UserMood::new(form.feeling, form.tone);
    let report = state.coach.respond(&mood).await;

    let values = FormValues {
        feeling: &mood.text,
        tone: &mood.tone,
    };
    render_page(Some(values), Some(&report), state.debug)
        .map(Html)
        .map_err(render_failed)
}

fn render_failed(e: tera::Error) -> (StatusCode, String) {
    tracing::error!(error = ?e, "page render failed");
    (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page".to_string())
}
