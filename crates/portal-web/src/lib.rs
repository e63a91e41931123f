//! # portal-web
//!
//! HTTP front-end for article-portal: a page shell with a skeleton grid,
//! the rendered card grid fragment, and the view records as JSON.

pub mod handlers;
pub mod render;
pub mod state;
pub mod telemetry;

use axum::routing::get;
use axum::Router;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/", get(handlers::index))
        .route(render::FRAGMENT_PATH, get(handlers::articles_fragment))
        .route("/api/articles", get(handlers::articles_json))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
