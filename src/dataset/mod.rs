use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{ensure, Context, Result};

use crate::models::CatalogEntry;

pub mod catalog;
pub mod similarity;

pub use catalog::Catalog;
pub use similarity::SimilarityMatrix;

/// The immutable data backing every query: catalog rows plus their pairwise
/// similarity scores
///
/// Loaded once at startup and shared behind an `Arc`; handlers never touch
/// the filesystem.
#[derive(Debug, Clone)]
pub struct Dataset {
    catalog: Catalog,
    similarity: SimilarityMatrix,
}

impl Dataset {
    /// Pair a catalog with its similarity matrix
    ///
    /// The two artifacts are only meaningful together; a dimension mismatch
    /// means they came from different pipeline runs and is fatal.
    pub fn new(catalog: Catalog, similarity: SimilarityMatrix) -> Result<Self> {
        ensure!(
            similarity.dim() == catalog.len(),
            "Similarity matrix dimension {} does not match catalog size {}",
            similarity.dim(),
            catalog.len()
        );

        Ok(Dataset {
            catalog,
            similarity,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    /// Load both artifacts from disk
    pub fn load(
        catalog_path: impl AsRef<Path>,
        similarity_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let catalog_path = catalog_path.as_ref();
        let similarity_path = similarity_path.as_ref();

        let catalog_file = File::open(catalog_path)
            .with_context(|| format!("Failed to open catalog at {}", catalog_path.display()))?;
        let entries: Vec<CatalogEntry> = serde_json::from_reader(BufReader::new(catalog_file))
            .with_context(|| format!("Failed to parse catalog at {}", catalog_path.display()))?;

        let similarity_file = File::open(similarity_path).with_context(|| {
            format!(
                "Failed to open similarity matrix at {}",
                similarity_path.display()
            )
        })?;
        let similarity = SimilarityMatrix::from_reader(BufReader::new(similarity_file))?;

        let dataset = Dataset::new(Catalog::new(entries), similarity)?;

        tracing::info!(
            movies = dataset.catalog.len(),
            genres = dataset.catalog.all_genres().len(),
            "Dataset loaded"
        );

        Ok(dataset)
    }
}
