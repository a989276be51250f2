use std::sync::Arc;

use axum::{http::StatusCode, middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    dataset::Dataset,
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::providers::MovieDataProvider,
};

pub mod genres;
pub mod movies;
pub mod recommendations;

/// Default number of results for both recommendation endpoints
pub const DEFAULT_LIMIT: usize = 5;

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub provider: Arc<dyn MovieDataProvider>,
}

/// Creates the application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movies::list))
        .route("/movies/details", get(movies::details))
        .route("/genres", get(genres::list))
        .route("/recommendations", get(recommendations::by_title))
        .route("/recommendations/by-genre", get(recommendations::by_genres))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
