use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::RecommendationsResponse,
    routes::{AppState, DEFAULT_LIMIT},
    services::{enrichment, Recommender},
};

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    title: String,
    limit: Option<usize>,
}

/// Handler for title-based recommendations
///
/// The title must match a catalog row exactly; unknown titles are a 404
/// rather than an empty list, so clients can distinguish a bad title from
/// a movie with no neighbors.
pub async fn by_title(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<TitleQuery>,
) -> AppResult<Json<RecommendationsResponse>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

    if state.dataset.catalog().position_of(&params.title).is_none() {
        return Err(AppError::NotFound(format!(
            "Movie '{}' not found",
            params.title
        )));
    }

    let recommender = Recommender::new(&state.dataset);
    let picks = recommender.recommend(&params.title, limit);

    tracing::info!(
        request_id = %request_id,
        title = %params.title,
        picks = picks.len(),
        "Recommendations computed"
    );

    let recommendations = enrichment::with_posters(state.provider.clone(), &picks).await;
    Ok(Json(RecommendationsResponse { recommendations }))
}

#[derive(Debug, Deserialize)]
pub struct GenresQuery {
    /// Comma-separated genre names
    genres: String,
    limit: Option<usize>,
}

/// Handler for genre-based suggestions
pub async fn by_genres(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<GenresQuery>,
) -> AppResult<Json<RecommendationsResponse>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

    let genres: Vec<String> = params
        .genres
        .split(',')
        .map(|genre| genre.trim().to_string())
        .filter(|genre| !genre.is_empty())
        .collect();

    if genres.is_empty() {
        return Err(AppError::InvalidInput(
            "At least one genre must be selected".to_string(),
        ));
    }

    let recommender = Recommender::new(&state.dataset);
    let picks = recommender.suggest_by_genres(&genres, limit);

    tracing::info!(
        request_id = %request_id,
        genres = %params.genres,
        picks = picks.len(),
        "Genre suggestions computed"
    );

    let recommendations = enrichment::with_posters(state.provider.clone(), &picks).await;
    Ok(Json(RecommendationsResponse { recommendations }))
}
