use std::collections::{BTreeSet, HashMap};

use crate::models::CatalogEntry;

/// The in-memory movie catalog
///
/// Row order matches the similarity matrix produced by the offline pipeline
/// and never changes after load. The title index is keyed by trimmed titles;
/// when two rows share a title the first occurrence wins.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    title_index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut title_index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            title_index
                .entry(entry.title.trim().to_string())
                .or_insert(position);
        }

        Catalog {
            entries,
            title_index,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn entry(&self, position: usize) -> Option<&CatalogEntry> {
        self.entries.get(position)
    }

    /// Row position for an exact title match
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.title_index.get(title).copied()
    }

    /// Entry lookup tolerant of surrounding whitespace in the query
    pub fn find_by_title(&self, title: &str) -> Option<&CatalogEntry> {
        self.title_index
            .get(title.trim())
            .and_then(|&position| self.entries.get(position))
    }

    /// Every distinct genre tag in the catalog, sorted alphabetically
    pub fn all_genres(&self) -> Vec<String> {
        let mut genres = BTreeSet::new();
        for entry in &self.entries {
            for genre in &entry.genres {
                genres.insert(genre.clone());
            }
        }
        genres.into_iter().collect()
    }
}
