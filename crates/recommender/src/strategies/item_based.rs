//! Item-based collaborative filtering.
//!
//! "Because you rated this movie, you may like these."
//!
//! ## Algorithm
//! 1. For each movie the user rated, take its `neighbor_count` most
//!    similar other movies
//! 2. For each such neighbor the user has not rated, accumulate
//!    `rating_of_source * similarity(source, neighbor)`
//!
//! As with the user-based strategy, similarity is signed and
//! zero-similarity neighbors are skipped.

use similarity::SimilarityMatrix;
use snapshots::{MovieId, UserItemMatrix};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Score unseen movies for the user at `user_row` from the movies they
/// already rated.
pub fn score(
    matrix: &UserItemMatrix,
    similarity: &SimilarityMatrix,
    user_row: usize,
    neighbor_count: usize,
) -> HashMap<MovieId, f32> {
    if similarity.size() != matrix.n_movies() {
        warn!(
            "Item similarity size {} does not match {} movies, skipping item-based strategy",
            similarity.size(),
            matrix.n_movies()
        );
        return HashMap::new();
    }

    let user_ratings = matrix.row(user_row);
    let mut scores: HashMap<MovieId, f32> = HashMap::new();

    for (source_col, &rating) in user_ratings.iter().enumerate() {
        if rating == 0.0 {
            continue;
        }
        for (candidate_col, sim) in similarity.top_neighbors(source_col, neighbor_count) {
            if sim == 0.0 || user_ratings[candidate_col] > 0.0 {
                continue;
            }
            *scores
                .entry(matrix.movie_id_at(candidate_col))
                .or_insert(0.0) += rating * sim;
        }
    }

    debug!(
        "Item-based strategy proposed {} candidates for row {}",
        scores.len(),
        user_row
    );
    scores
}
