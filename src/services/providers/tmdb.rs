/// TMDB API provider
///
/// Resolves catalog movie ids to display metadata using The Movie Database.
///
/// API Flow:
/// 1. Details: /movie/{id} → overview, poster path, release date, runtime
/// 2. Videos: /movie/{id}/videos → attached clips, from which we pick a trailer
///
/// Authentication uses the `api_key` query parameter on every request.
use crate::{
    error::{AppError, AppResult},
    models::tmdb::{TmdbMovie, TmdbVideo, TmdbVideosResponse},
    services::providers::{MovieDataProvider, PLACEHOLDER_POSTER_URL},
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String, image_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            image_url,
        }
    }

    /// GET a TMDB endpoint and deserialize its JSON body
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = format!("{}{}", self.api_url, path);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }

    /// Full poster URL for a poster path, or the placeholder when absent
    fn poster_url(&self, poster_path: Option<&str>) -> String {
        match poster_path {
            Some(path) => format!("{}{}", self.image_url, path),
            None => PLACEHOLDER_POSTER_URL.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl MovieDataProvider for TmdbProvider {
    async fn fetch_movie(&self, movie_id: u64) -> AppResult<TmdbMovie> {
        let movie: TmdbMovie = self.get_json(&format!("/movie/{}", movie_id)).await?;

        tracing::debug!(
            movie_id = movie_id,
            title = %movie.title,
            provider = "tmdb",
            "Movie details fetched"
        );

        Ok(movie)
    }

    async fn fetch_videos(&self, movie_id: u64) -> AppResult<Vec<TmdbVideo>> {
        let response: TmdbVideosResponse = self
            .get_json(&format!("/movie/{}/videos", movie_id))
            .await?;

        tracing::debug!(
            movie_id = movie_id,
            videos = response.results.len(),
            provider = "tmdb",
            "Videos fetched"
        );

        Ok(response.results)
    }

    async fn fetch_poster_url(&self, movie_id: u64) -> AppResult<String> {
        let movie: TmdbMovie = self.get_json(&format!("/movie/{}", movie_id)).await?;
        Ok(self.poster_url(movie.poster_path.as_deref()))
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

/// First YouTube video marked as a trailer, in API response order
pub fn select_trailer(videos: &[TmdbVideo]) -> Option<&TmdbVideo> {
    videos
        .iter()
        .find(|video| video.site == "YouTube" && video.video_type == "Trailer")
}

/// Watch URL for the movie's trailer, when one exists
pub fn trailer_url(videos: &[TmdbVideo]) -> Option<String> {
    select_trailer(videos).map(|video| format!("{}{}", YOUTUBE_WATCH_URL, video.key))
}
