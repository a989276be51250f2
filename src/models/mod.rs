use serde::{Deserialize, Serialize};

pub mod movie;
pub mod tmdb;

pub use movie::CatalogEntry;

/// Catalog listing entry returned by the movie index endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieListEntry {
    pub id: u64,
    pub title: String,
}

impl From<&CatalogEntry> for MovieListEntry {
    fn from(entry: &CatalogEntry) -> Self {
        MovieListEntry {
            id: entry.id,
            title: entry.title.clone(),
        }
    }
}

// ============================================================================
// Recommendation Response Types
// ============================================================================

/// A recommended movie with its poster art resolved
///
/// `poster_url` always holds a renderable URL; lookups that fail upstream
/// fall back to a placeholder image rather than dropping the entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendedMovie {
    pub id: u64,
    pub title: String,
    pub poster_url: String,
}

/// Response envelope for both recommendation endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<RecommendedMovie>,
}

// ============================================================================
// Detail View Types
// ============================================================================

/// Full detail payload for a single movie
///
/// Quality stats and credits come from the catalog; release date, runtime,
/// poster and trailer are resolved live from the metadata provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub poster_url: String,
    pub trailer_url: Option<String>,
    pub genres: Vec<String>,
    pub release_date: Option<String>,
    pub runtime: Option<u32>,
    pub vote_average: f64,
    pub vote_count: u64,
    pub popularity: f64,
    pub score: f64,
    pub cast: Vec<String>,
    pub crew: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> CatalogEntry {
        CatalogEntry {
            id: 19995,
            title: "Avatar".to_string(),
            genres: vec!["Action".to_string(), "Adventure".to_string()],
            score: 7.2,
            vote_average: 7.2,
            vote_count: 11800,
            popularity: 150.44,
            cast: vec!["Sam Worthington".to_string()],
            crew: vec!["James Cameron".to_string()],
            overview: Some("A paraplegic Marine is dispatched to Pandora.".to_string()),
        }
    }

    #[test]
    fn test_movie_list_entry_from_catalog_entry() {
        let entry = create_test_entry();
        let listed: MovieListEntry = (&entry).into();
        assert_eq!(listed.id, 19995);
        assert_eq!(listed.title, "Avatar");
    }

    #[test]
    fn test_recommended_movie_serialization() {
        let movie = RecommendedMovie {
            id: 155,
            title: "The Dark Knight".to_string(),
            poster_url: "https://image.tmdb.org/t/p/w500/qJ2tW6WMUDux911r6m7haRef0WH.jpg"
                .to_string(),
        };

        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["id"], 155);
        assert_eq!(json["title"], "The Dark Knight");
        assert_eq!(
            json["poster_url"],
            "https://image.tmdb.org/t/p/w500/qJ2tW6WMUDux911r6m7haRef0WH.jpg"
        );
    }

    #[test]
    fn test_movie_details_round_trip() {
        let details = MovieDetails {
            id: 19995,
            title: "Avatar".to_string(),
            overview: "A paraplegic Marine is dispatched to Pandora.".to_string(),
            poster_url: "https://image.tmdb.org/t/p/w500/poster.jpg".to_string(),
            trailer_url: Some("https://www.youtube.com/watch?v=5PSNL1qE6VY".to_string()),
            genres: vec!["Action".to_string()],
            release_date: Some("2009-12-10".to_string()),
            runtime: Some(162),
            vote_average: 7.2,
            vote_count: 11800,
            popularity: 150.44,
            score: 7.2,
            cast: vec!["Sam Worthington".to_string()],
            crew: vec!["James Cameron".to_string()],
        };

        let json = serde_json::to_string(&details).unwrap();
        let deserialized: MovieDetails = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, details);
    }
}
