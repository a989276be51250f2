use axum::{extract::State, Json};

use crate::routes::AppState;

/// Handler for the genre listing endpoint
pub async fn list(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.dataset.catalog().all_genres())
}
