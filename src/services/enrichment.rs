use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{CatalogEntry, MovieDetails, RecommendedMovie},
    services::providers::{tmdb, MovieDataProvider, PLACEHOLDER_POSTER_URL},
};

const OVERVIEW_WORD_LIMIT: usize = 35;
const MISSING_OVERVIEW: &str = "No overview available.";

/// Attaches poster art to ranked picks, preserving their order
///
/// Posters resolve in parallel. A failed lookup degrades that entry to the
/// placeholder image instead of failing the whole response.
pub async fn with_posters(
    provider: Arc<dyn MovieDataProvider>,
    picks: &[&CatalogEntry],
) -> Vec<RecommendedMovie> {
    let mut tasks = Vec::new();

    // Spawn parallel poster lookups, one per pick
    for entry in picks {
        let provider = Arc::clone(&provider);
        let movie_id = entry.id;
        let task = tokio::spawn(async move { provider.fetch_poster_url(movie_id).await });
        tasks.push(task);
    }

    let mut movies = Vec::with_capacity(picks.len());

    for (entry, task) in picks.iter().zip(tasks) {
        let poster_url = match task.await {
            Ok(Ok(url)) => url,
            Ok(Err(e)) => {
                tracing::error!(
                    movie_id = entry.id,
                    title = %entry.title,
                    error = %e,
                    "Poster fetch failed"
                );
                PLACEHOLDER_POSTER_URL.to_string()
            }
            Err(e) => {
                tracing::error!(movie_id = entry.id, error = %e, "Task join error");
                PLACEHOLDER_POSTER_URL.to_string()
            }
        };

        movies.push(RecommendedMovie {
            id: entry.id,
            title: entry.title.clone(),
            poster_url,
        });
    }

    movies
}

/// Assembles the full detail view for a catalog entry
///
/// Release date, runtime, overview, poster and trailer come from the
/// provider; the three lookups run concurrently. Unlike the list view, a
/// provider failure here fails the request, since the detail view is
/// unusable without live metadata.
pub async fn movie_details(
    provider: Arc<dyn MovieDataProvider>,
    entry: &CatalogEntry,
) -> AppResult<MovieDetails> {
    let (movie, videos, poster_url) = tokio::try_join!(
        provider.fetch_movie(entry.id),
        provider.fetch_videos(entry.id),
        provider.fetch_poster_url(entry.id),
    )?;

    let overview = movie
        .overview
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .or(entry.overview.as_deref())
        .map(|text| truncate_overview(text, OVERVIEW_WORD_LIMIT))
        .unwrap_or_else(|| MISSING_OVERVIEW.to_string());

    Ok(MovieDetails {
        id: entry.id,
        title: entry.title.clone(),
        overview,
        poster_url,
        trailer_url: tmdb::trailer_url(&videos),
        genres: entry.genres.clone(),
        release_date: movie.release_date,
        runtime: movie.runtime,
        vote_average: entry.vote_average,
        vote_count: entry.vote_count,
        popularity: round_to_hundredths(entry.popularity),
        score: entry.score,
        cast: entry.cast.clone(),
        crew: entry.crew.clone(),
    })
}

/// Truncates an overview to a fixed number of words
///
/// Text at or under the limit passes through unchanged; longer text is cut
/// at the word boundary and marked with an ellipsis.
fn truncate_overview(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return text.to_string();
    }

    format!("{}...", words[..max_words].join(" "))
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::tmdb::{TmdbMovie, TmdbVideo};
    use crate::services::providers::MockMovieDataProvider;
    use mockall::predicate::eq;

    fn create_test_entry(id: u64, title: &str) -> CatalogEntry {
        CatalogEntry {
            id,
            title: title.to_string(),
            genres: vec!["Action".to_string()],
            score: 8.1,
            vote_average: 7.9,
            vote_count: 4200,
            popularity: 88.12345,
            cast: vec!["Lead Actor".to_string()],
            crew: vec!["The Director".to_string()],
            overview: Some("Catalog overview text.".to_string()),
        }
    }

    fn create_test_movie(id: u64, overview: Option<&str>) -> TmdbMovie {
        TmdbMovie {
            id,
            title: "Remote Title".to_string(),
            overview: overview.map(|s| s.to_string()),
            poster_path: Some("/poster.jpg".to_string()),
            release_date: Some("2017-03-09".to_string()),
            runtime: Some(121),
            vote_average: Some(7.9),
            vote_count: Some(4200),
            popularity: Some(88.12345),
        }
    }

    #[test]
    fn test_truncate_overview_under_limit_unchanged() {
        let text = "A short overview.";
        assert_eq!(truncate_overview(text, 35), text);
    }

    #[test]
    fn test_truncate_overview_at_limit_unchanged() {
        let text = (0..35).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ");
        assert_eq!(truncate_overview(&text, 35), text);
    }

    #[test]
    fn test_truncate_overview_over_limit_cuts_with_ellipsis() {
        let text = (0..40).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ");
        let truncated = truncate_overview(&text, 35);

        assert!(truncated.ends_with("w34..."));
        assert_eq!(truncated.split_whitespace().count(), 35);
    }

    #[test]
    fn test_round_to_hundredths() {
        assert_eq!(round_to_hundredths(88.12345), 88.12);
        assert_eq!(round_to_hundredths(88.125), 88.13);
        assert_eq!(round_to_hundredths(10.0), 10.0);
    }

    #[test]
    fn test_with_posters_preserves_order_and_degrades_failures() {
        let first = create_test_entry(1, "First");
        let second = create_test_entry(2, "Second");
        let picks = vec![&first, &second];

        let mut mock = MockMovieDataProvider::new();
        mock.expect_fetch_poster_url()
            .with(eq(1))
            .returning(|_| Ok("https://image.tmdb.org/t/p/w500/first.jpg".to_string()));
        mock.expect_fetch_poster_url()
            .with(eq(2))
            .returning(|_| Err(AppError::ExternalApi("boom".to_string())));

        let provider: Arc<dyn MovieDataProvider> = Arc::new(mock);
        let movies = tokio_test::block_on(with_posters(provider, &picks));

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "First");
        assert_eq!(
            movies[0].poster_url,
            "https://image.tmdb.org/t/p/w500/first.jpg"
        );
        assert_eq!(movies[1].title, "Second");
        assert_eq!(movies[1].poster_url, PLACEHOLDER_POSTER_URL);
    }

    #[test]
    fn test_with_posters_empty_picks() {
        let mock = MockMovieDataProvider::new();
        let provider: Arc<dyn MovieDataProvider> = Arc::new(mock);

        let movies = tokio_test::block_on(with_posters(provider, &[]));
        assert!(movies.is_empty());
    }

    #[test]
    fn test_movie_details_assembles_all_fields() {
        let entry = create_test_entry(42, "Local Title");

        let mut mock = MockMovieDataProvider::new();
        mock.expect_fetch_movie()
            .with(eq(42))
            .returning(|id| Ok(create_test_movie(id, Some("Remote overview text."))));
        mock.expect_fetch_videos().with(eq(42)).returning(|_| {
            Ok(vec![TmdbVideo {
                key: "abc123".to_string(),
                site: "YouTube".to_string(),
                video_type: "Trailer".to_string(),
            }])
        });
        mock.expect_fetch_poster_url()
            .with(eq(42))
            .returning(|_| Ok("https://image.tmdb.org/t/p/w500/poster.jpg".to_string()));

        let provider: Arc<dyn MovieDataProvider> = Arc::new(mock);
        let details = tokio_test::block_on(movie_details(provider, &entry)).unwrap();

        assert_eq!(details.id, 42);
        assert_eq!(details.title, "Local Title");
        assert_eq!(details.overview, "Remote overview text.");
        assert_eq!(
            details.trailer_url.as_deref(),
            Some("https://www.youtube.com/watch?v=abc123")
        );
        assert_eq!(details.release_date.as_deref(), Some("2017-03-09"));
        assert_eq!(details.runtime, Some(121));
        assert_eq!(details.popularity, 88.12);
        assert_eq!(details.cast, vec!["Lead Actor".to_string()]);
    }

    #[test]
    fn test_movie_details_falls_back_to_catalog_overview() {
        let entry = create_test_entry(42, "Local Title");

        let mut mock = MockMovieDataProvider::new();
        mock.expect_fetch_movie()
            .returning(|id| Ok(create_test_movie(id, Some("   "))));
        mock.expect_fetch_videos().returning(|_| Ok(vec![]));
        mock.expect_fetch_poster_url()
            .returning(|_| Ok(PLACEHOLDER_POSTER_URL.to_string()));

        let provider: Arc<dyn MovieDataProvider> = Arc::new(mock);
        let details = tokio_test::block_on(movie_details(provider, &entry)).unwrap();

        assert_eq!(details.overview, "Catalog overview text.");
        assert_eq!(details.trailer_url, None);
    }

    #[test]
    fn test_movie_details_missing_overview_placeholder() {
        let mut entry = create_test_entry(42, "Local Title");
        entry.overview = None;

        let mut mock = MockMovieDataProvider::new();
        mock.expect_fetch_movie()
            .returning(|id| Ok(create_test_movie(id, None)));
        mock.expect_fetch_videos().returning(|_| Ok(vec![]));
        mock.expect_fetch_poster_url()
            .returning(|_| Ok(PLACEHOLDER_POSTER_URL.to_string()));

        let provider: Arc<dyn MovieDataProvider> = Arc::new(mock);
        let details = tokio_test::block_on(movie_details(provider, &entry)).unwrap();

        assert_eq!(details.overview, MISSING_OVERVIEW);
    }

    #[test]
    fn test_movie_details_provider_failure_is_an_error() {
        let entry = create_test_entry(42, "Local Title");

        let mut mock = MockMovieDataProvider::new();
        mock.expect_fetch_movie()
            .returning(|_| Err(AppError::ExternalApi("TMDB down".to_string())));
        mock.expect_fetch_videos().returning(|_| Ok(vec![]));
        mock.expect_fetch_poster_url()
            .returning(|_| Ok(PLACEHOLDER_POSTER_URL.to_string()));

        let provider: Arc<dyn MovieDataProvider> = Arc::new(mock);
        let result = tokio_test::block_on(movie_details(provider, &entry));

        assert!(result.is_err());
    }
}
