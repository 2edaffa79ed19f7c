//! Sunrise Gateway: one form, one route.
//! GET `/` renders the empty mood form; POST `/` runs the morning pipeline and renders results.

pub mod handlers;
pub mod render;

use axum::{routing::get, Router};
use std::sync::Arc;
use sunrise_core::MorningCoach;
use tower_http::trace::TraceLayer;

/// Shared, read-only across requests.
pub struct AppState {
    pub coach: MorningCoach,
    /// Adds the polarity/persona line under the results.
    pub debug: bool,
}

impl AppState {
    pub fn new(coach: MorningCoach, debug: bool) -> Self {
        Self { coach, debug }
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
