//! Inbound HTTP surface.
//!
//! One render operation (`POST /api/v1/captions`), a liveness probe, and
//! static serving of rendered outputs. The boundary maps the core's failure
//! taxonomy onto HTTP: bad-input kinds become 400, everything else 500.
//! Callers only ever see a `(kind, message)` pair, never internals.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use imprint_core::{CaptionRequest, RenderError, Renderer};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<Renderer>,
}

pub fn app_router(state: AppState, output_dir: &Path) -> Router {
    Router::new()
        .route("/api/v1/captions", post(render_caption))
        .route("/health", get(health))
        .nest_service("/outputs", ServeDir::new(output_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Serialize)]
struct CaptionResponse {
    image_url: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

async fn render_caption(
    State(state): State<AppState>,
    Json(request): Json<CaptionRequest>,
) -> Response {
    let renderer = state.renderer.clone();

    // The pipeline is synchronous (blocking fetch and disk write); run it
    // off the async workers. A panicked render must not take the error
    // details to the caller, so a join failure maps to the fixed catch-all.
    let result = tokio::task::spawn_blocking(move || renderer.render(&request))
        .await
        .unwrap_or_else(|join_error| {
            tracing::error!("render task failed to complete: {}", join_error);
            Err(RenderError::Internal)
        });

    match result {
        Ok(rendered) => (
            StatusCode::OK,
            Json(CaptionResponse {
                image_url: rendered.locator,
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::warn!(kind = err.kind(), "render failed: {}", err);
            (
                error_status(&err),
                Json(ErrorResponse {
                    error: err.kind(),
                    message: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn error_status(err: &RenderError) -> StatusCode {
    if err.is_bad_input() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
