use std::cmp::Ordering;
use std::collections::HashSet;

use crate::dataset::Dataset;
use crate::models::CatalogEntry;

/// Ranking engine over the loaded catalog and similarity matrix
///
/// Both queries are pure reads of the dataset: no I/O, no mutation, and
/// deterministic output for a given catalog. Callers enrich the returned
/// entries with poster art separately.
pub struct Recommender<'a> {
    dataset: &'a Dataset,
}

impl<'a> Recommender<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Movies most similar to the given title, most similar first
    ///
    /// The title must match a catalog row exactly; unknown titles produce an
    /// empty list. The source movie is excluded by title equality, which also
    /// drops any duplicate rows sharing its title, and each returned title
    /// appears once. Score ties keep catalog order.
    pub fn recommend(&self, title: &str, limit: usize) -> Vec<&'a CatalogEntry> {
        let Some(position) = self.dataset.catalog().position_of(title) else {
            return Vec::new();
        };

        // new() guarantees the matrix covers every catalog position
        let Some(row) = self.dataset.similarity().row(position) else {
            return Vec::new();
        };

        let mut ranked: Vec<(usize, f32)> = row.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let entries = self.dataset.catalog().entries();
        let source_title = &entries[position].title;

        let mut picks = Vec::new();
        let mut seen_titles = HashSet::new();

        for (candidate, _score) in ranked {
            if picks.len() == limit {
                break;
            }

            let entry = &entries[candidate];
            if entry.title == *source_title {
                continue;
            }
            if !seen_titles.insert(entry.title.as_str()) {
                continue;
            }

            picks.push(entry);
        }

        picks
    }

    /// Movies carrying every requested genre, best scored first
    ///
    /// Genre comparison is case-insensitive, and entries may carry extra
    /// genres beyond the requested set. An empty genre set selects nothing.
    /// Score ties keep catalog order.
    pub fn suggest_by_genres(&self, genres: &[String], limit: usize) -> Vec<&'a CatalogEntry> {
        if genres.is_empty() {
            return Vec::new();
        }

        let wanted: Vec<String> = genres.iter().map(|genre| genre.to_lowercase()).collect();

        let mut matches: Vec<&'a CatalogEntry> = self
            .dataset
            .catalog()
            .entries()
            .iter()
            .filter(|entry| entry.has_all_genres(&wanted))
            .collect();

        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        matches.truncate(limit);
        matches
    }
}
