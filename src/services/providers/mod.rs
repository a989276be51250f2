/// Movie metadata provider abstraction
///
/// This module provides a pluggable architecture for external movie metadata
/// sources. TMDB is the production implementation; tests substitute mocks or
/// fixtures behind the same trait.
use crate::{
    error::AppResult,
    models::tmdb::{TmdbMovie, TmdbVideo},
};

pub mod tmdb;

/// Poster URL returned when a movie has no art or the lookup fails
pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/500x750?text=No+Image";

/// Trait for movie metadata providers
///
/// Providers resolve catalog ids to display metadata: full details, attached
/// videos, and poster art. All lookups are keyed by the provider's numeric
/// movie id carried in the catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieDataProvider: Send + Sync {
    /// Fetch full movie details by id
    async fn fetch_movie(&self, movie_id: u64) -> AppResult<TmdbMovie>;

    /// Fetch the videos attached to a movie
    async fn fetch_videos(&self, movie_id: u64) -> AppResult<Vec<TmdbVideo>>;

    /// Resolve the full poster image URL for a movie
    ///
    /// Implementations return [`PLACEHOLDER_POSTER_URL`] when the movie
    /// exists but carries no poster art.
    async fn fetch_poster_url(&self, movie_id: u64) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
