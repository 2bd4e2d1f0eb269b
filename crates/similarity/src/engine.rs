//! Cosine similarity matrices over the normalized rating matrix.
//!
//! ## Algorithm
//! 1. Normalize the rating matrix once (shared by both computations)
//! 2. User similarity: pairwise cosine over normalized *rows*
//! 3. Item similarity: pairwise cosine over normalized *columns*
//!
//! Cosine of any zero-norm vector is defined as 0, so users or movies
//! whose normalized vector vanished (all their columns degenerate)
//! simply have no neighbors instead of producing NaN. The diagonal is
//! therefore 1 exactly for non-zero vectors and 0 for zero vectors.

use crate::normalize::NormalizedMatrix;
use rayon::prelude::*;
use snapshots::UserItemMatrix;
use tracing::{debug, warn};

/// Norms below this count as zero for the cosine fallback.
const NORM_EPSILON: f32 = 1e-6;

/// Square, symmetric cosine-similarity matrix over users or movies.
/// Indices are matrix positions (row position for the user variant,
/// column position for the item variant).
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    values: Vec<f32>,
    size: usize,
}

impl SimilarityMatrix {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.values[i * self.size + j]
    }

    pub fn row(&self, i: usize) -> &[f32] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// The `k` most similar entries to `i`, excluding `i` itself,
    /// highest similarity first. Equal similarities break toward the
    /// lower index; index order tracks the matrix's deterministic id
    /// ordering, so this is the ascending-id tie-break rule.
    pub fn top_neighbors(&self, i: usize, k: usize) -> Vec<(usize, f32)> {
        let mut neighbors: Vec<(usize, f32)> = self
            .row(i)
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(j, &sim)| (j, sim))
            .collect();
        neighbors.sort_by(|a, b| {
            b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
        });
        neighbors.truncate(k);
        neighbors
    }
}

/// Pairwise cosine similarity over a set of equal-length vectors.
fn pairwise_cosine(vectors: &[Vec<f32>]) -> SimilarityMatrix {
    let size = vectors.len();
    let norms: Vec<f32> = vectors
        .iter()
        .map(|v| v.iter().map(|x| x * x).sum::<f32>().sqrt())
        .collect();

    let values: Vec<f32> = (0..size)
        .into_par_iter()
        .flat_map_iter(|i| {
            let vectors = &vectors;
            let norms = &norms;
            (0..size).map(move |j| {
                if norms[i] < NORM_EPSILON || norms[j] < NORM_EPSILON {
                    return 0.0;
                }
                let dot: f32 = vectors[i]
                    .iter()
                    .zip(&vectors[j])
                    .map(|(a, b)| a * b)
                    .sum();
                dot / (norms[i] * norms[j])
            })
        })
        .collect();

    SimilarityMatrix { values, size }
}

/// User-user and item-item similarity derived from one rating matrix.
///
/// Built once per snapshot and read-only afterwards; a fresher
/// snapshot gets a fresh engine, never an in-place update.
#[derive(Debug, Clone)]
pub struct SimilarityEngine {
    normalized: NormalizedMatrix,
    users: Option<SimilarityMatrix>,
    items: Option<SimilarityMatrix>,
}

impl SimilarityEngine {
    /// Build the engine from a rating matrix.
    ///
    /// Returns `None` for an empty matrix (uninitialized state). With
    /// fewer than 2 users the user matrix is absent, with fewer than 2
    /// movies the item matrix is absent; a 1x1 "similarity matrix"
    /// carries no signal and strategies must short-circuit instead.
    pub fn build(matrix: &UserItemMatrix) -> Option<Self> {
        if matrix.is_empty() {
            warn!("Empty rating matrix, similarity engine uninitialized");
            return None;
        }

        let normalized = NormalizedMatrix::from_matrix(matrix);

        let users = if matrix.n_users() >= 2 {
            let rows: Vec<Vec<f32>> = (0..matrix.n_users())
                .map(|row| normalized.row(row).to_vec())
                .collect();
            Some(pairwise_cosine(&rows))
        } else {
            debug!("Fewer than 2 users, skipping user similarity");
            None
        };

        let items = if matrix.n_movies() >= 2 {
            let columns: Vec<Vec<f32>> = (0..matrix.n_movies())
                .map(|col| normalized.column(col))
                .collect();
            Some(pairwise_cosine(&columns))
        } else {
            debug!("Fewer than 2 movies, skipping item similarity");
            None
        };

        debug!(
            "Similarity matrices calculated (users: {}, items: {})",
            users.is_some(),
            items.is_some()
        );

        Some(Self {
            normalized,
            users,
            items,
        })
    }

    pub fn normalized(&self) -> &NormalizedMatrix {
        &self.normalized
    }

    /// User-user similarity, `None` with fewer than 2 users.
    pub fn user_similarity(&self) -> Option<&SimilarityMatrix> {
        self.users.as_ref()
    }

    /// Item-item similarity, `None` with fewer than 2 movies.
    pub fn item_similarity(&self) -> Option<&SimilarityMatrix> {
        self.items.as_ref()
    }
}
