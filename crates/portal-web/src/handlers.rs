//! Route handlers.

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use tracing::{debug, error, instrument};

use portal_core::{load_articles, ViewRecord};

use crate::render::{render_grid, render_page, GridState};
use crate::state::AppState;

/// Errors surfaced by the JSON endpoint.
#[derive(Debug)]
pub enum ApiError {
    /// The CMS could not be reached or answered with something unusable.
    Upstream(portal_core::Error),
    Internal(String),
}

impl From<portal_core::Error> for ApiError {
    fn from(err: portal_core::Error) -> Self {
        match err {
            portal_core::Error::Config(msg) => ApiError::Internal(msg),
            other => ApiError::Upstream(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Upstream(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Page shell with the skeleton grid; the grid is filled by the loader script.
pub async fn index() -> Html<String> {
    Html(render_page(&render_grid(&GridState::Loading)))
}

/// Rendered card grid. A failed load is logged and renders an empty grid.
#[instrument(skip_all, fields(subsystem = "web", component = "render", op = "render_grid"))]
pub async fn articles_fragment(State(state): State<AppState>) -> Html<String> {
    let start = Instant::now();
    let records = match load_articles(state.source.as_ref(), &state.image_base_url).await {
        Ok(records) => records,
        Err(e) => {
            error!(error = %e, "Error fetching articles");
            Vec::new()
        }
    };
    debug!(
        article_count = records.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Rendered article grid"
    );
    Html(render_grid(&GridState::Ready(records)))
}

/// View records as JSON.
#[instrument(skip_all, fields(subsystem = "web", component = "api", op = "list_articles"))]
pub async fn articles_json(
    State(state): State<AppState>,
) -> Result<Json<Vec<ViewRecord>>, ApiError> {
    let records = load_articles(state.source.as_ref(), &state.image_base_url).await?;
    Ok(Json(records))
}
