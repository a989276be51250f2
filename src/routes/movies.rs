use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{MovieDetails, MovieListEntry},
    routes::AppState,
    services::enrichment,
};

/// Handler for the catalog listing endpoint
pub async fn list(State(state): State<AppState>) -> Json<Vec<MovieListEntry>> {
    let movies = state
        .dataset
        .catalog()
        .entries()
        .iter()
        .map(MovieListEntry::from)
        .collect();

    Json(movies)
}

#[derive(Debug, Deserialize)]
pub struct DetailsQuery {
    title: String,
}

/// Handler for the movie detail endpoint
///
/// The title query is matched against the catalog with surrounding
/// whitespace ignored; unknown titles are a 404.
pub async fn details(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<DetailsQuery>,
) -> AppResult<Json<MovieDetails>> {
    let entry = state
        .dataset
        .catalog()
        .find_by_title(&params.title)
        .ok_or_else(|| {
            AppError::NotFound(format!("Movie '{}' not found", params.title.trim()))
        })?;

    tracing::info!(
        request_id = %request_id,
        movie_id = entry.id,
        title = %entry.title,
        "Building movie details"
    );

    let details = enrichment::movie_details(state.provider.clone(), entry).await?;
    Ok(Json(details))
}
