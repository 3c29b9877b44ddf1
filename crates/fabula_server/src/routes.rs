//! HTTP routes for the story service.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tracing::instrument;

use fabula_core::StoryRequest;
use fabula_error::FabulaErrorKind;
use fabula_interface::StoryDriver;

use crate::pipeline;

/// Shared router state: the backend driver, resolved once at startup.
#[derive(Clone)]
struct AppState {
    driver: Arc<dyn StoryDriver>,
}

/// Build the service router.
///
/// `POST /api/story` runs the pipeline; `GET /health` reports liveness.
/// CORS is wide open: the service fronts a static browser client and
/// carries no credentials.
pub fn app(driver: Arc<dyn StoryDriver>) -> Router {
    Router::new()
        .route("/api/story", post(create_story))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(AppState { driver })
}

#[instrument(skip_all)]
async fn create_story(
    State(state): State<AppState>,
    Json(request): Json<StoryRequest>,
) -> Response {
    match pipeline::generate_stories(state.driver.as_ref(), &request).await {
        Ok(set) => (StatusCode::OK, Json(set)).into_response(),
        Err(failure) => {
            let status = status_for(failure.error.kind());
            (status, Json(failure.result)).into_response()
        }
    }
}

/// Map error kinds to HTTP statuses. The body is a well-formed JSON
/// `ErrorResult` in every case, so callers that only look at the payload
/// keep working.
fn status_for(kind: &FabulaErrorKind) -> StatusCode {
    match kind {
        // The upstream model produced the problem
        FabulaErrorKind::Backend(_) | FabulaErrorKind::Parse(_) | FabulaErrorKind::Schema(_) => {
            StatusCode::BAD_GATEWAY
        }
        FabulaErrorKind::Template(_) | FabulaErrorKind::Config(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
