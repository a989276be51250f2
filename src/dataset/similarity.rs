use std::io::{Read, Write};

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

/// Dense square similarity matrix in row-major order
///
/// `scores[i * dim + j]` holds the pairwise similarity between catalog rows
/// `i` and `j`. Scores are produced offline and treated as opaque here; only
/// their relative order matters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityMatrix {
    dim: usize,
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    pub fn new(dim: usize, scores: Vec<f32>) -> Result<Self> {
        let expected = dim
            .checked_mul(dim)
            .with_context(|| format!("Similarity matrix dimension {} is too large", dim))?;
        ensure!(
            scores.len() == expected,
            "Similarity matrix has {} scores but dimension {} requires {}",
            scores.len(),
            dim,
            expected
        );

        Ok(SimilarityMatrix { dim, scores })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// One full row of pairwise scores, indexed by catalog position
    pub fn row(&self, index: usize) -> Option<&[f32]> {
        if index >= self.dim {
            return None;
        }

        let start = index * self.dim;
        Some(&self.scores[start..start + self.dim])
    }

    /// Deserialize a matrix from its binary artifact form
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let matrix: SimilarityMatrix =
            bincode::deserialize_from(reader).context("Failed to decode similarity matrix")?;

        // Decoded fields are untrusted until they pass the constructor check
        SimilarityMatrix::new(matrix.dim, matrix.scores)
    }

    /// Serialize the matrix into its binary artifact form
    pub fn to_writer(&self, writer: impl Write) -> Result<()> {
        bincode::serialize_into(writer, self).context("Failed to encode similarity matrix")
    }
}
