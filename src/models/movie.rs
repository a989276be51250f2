use serde::{Deserialize, Serialize};

/// A single movie in the static catalog
///
/// Entries come out of the offline pipeline in a fixed row order shared with
/// the similarity matrix, and never change after load. `title` is the lookup
/// key for title-driven queries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// TMDB movie id
    pub id: u64,
    /// Display title, unique within the catalog
    pub title: String,
    /// Genre tags; compared case-insensitively
    pub genres: Vec<String>,
    /// Precomputed quality signal used to rank genre matches
    pub score: f64,
    pub vote_average: f64,
    pub vote_count: u64,
    pub popularity: f64,
    /// Top-billed cast, in billing order
    #[serde(default)]
    pub cast: Vec<String>,
    /// Director credits
    #[serde(default)]
    pub crew: Vec<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl CatalogEntry {
    /// True when this entry carries every one of the given lowercased tags
    ///
    /// Extra tags on the entry are allowed; the check is a superset test,
    /// not an overlap test.
    pub fn has_all_genres(&self, wanted: &[String]) -> bool {
        wanted
            .iter()
            .all(|genre| self.genres.iter().any(|tag| tag.to_lowercase() == *genre))
    }
}
