//! User-based collaborative filtering.
//!
//! "Users who rate like you also liked these movies."
//!
//! ## Algorithm
//! 1. Take the top `neighbor_count` most similar other users
//! 2. For each neighbor rating on a movie the target user has not
//!    rated, accumulate `rating * similarity(target, neighbor)`
//!
//! Similarity is signed: a contrarian neighbor pushes a candidate's
//! score down instead of up. Zero-similarity neighbors (including
//! zero-norm rows) carry no signal and are skipped.

use similarity::SimilarityMatrix;
use snapshots::{MovieId, UserItemMatrix};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Score unseen movies for the user at `user_row`.
pub fn score(
    matrix: &UserItemMatrix,
    similarity: &SimilarityMatrix,
    user_row: usize,
    neighbor_count: usize,
) -> HashMap<MovieId, f32> {
    if user_row >= similarity.size() {
        warn!(
            "User row {} outside similarity matrix of size {}, skipping user-based strategy",
            user_row,
            similarity.size()
        );
        return HashMap::new();
    }

    let user_ratings = matrix.row(user_row);
    let mut scores: HashMap<MovieId, f32> = HashMap::new();

    for (neighbor_row, sim) in similarity.top_neighbors(user_row, neighbor_count) {
        if sim == 0.0 {
            continue;
        }
        for (col, &rating) in matrix.row(neighbor_row).iter().enumerate() {
            if rating > 0.0 && user_ratings[col] == 0.0 {
                *scores.entry(matrix.movie_id_at(col)).or_insert(0.0) += rating * sim;
            }
        }
    }

    debug!(
        "User-based strategy proposed {} candidates for row {}",
        scores.len(),
        user_row
    );
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use similarity::SimilarityEngine;
    use snapshots::{RatingMatrixBuilder, RatingRecord};

    fn build_matrix(records: Vec<(&str, u32, u8)>) -> UserItemMatrix {
        RatingMatrixBuilder::new()
            .add_records(
                records
                    .into_iter()
                    .map(|(u, m, r)| RatingRecord::new(u, m, r)),
            )
            .build()
    }

    #[test]
    fn test_proposes_only_unrated_movies_of_neighbors() {
        // Movies: A=1, B=2, C=3, D=4, E=5. U2 is U1's only neighbor.
        let matrix = build_matrix(vec![
            ("u1", 1, 5),
            ("u1", 2, 4),
            ("u1", 3, 5),
            ("u2", 1, 5),
            ("u2", 4, 4),
            ("u2", 5, 5),
        ]);
        let engine = SimilarityEngine::build(&matrix).unwrap();
        let user_row = matrix.user_position("u1").unwrap();

        let scores = score(&matrix, engine.user_similarity().unwrap(), user_row, 5);

        // D and E are the eligible candidates; everything U1 already
        // rated is excluded.
        assert!(scores.contains_key(&4));
        assert!(scores.contains_key(&5));
        for rated in [1, 2, 3] {
            assert!(!scores.contains_key(&rated));
        }

        // Candidate scores are rating * similarity(u1, u2); with two
        // users the ratio of scores is the ratio of ratings.
        let sim = engine.user_similarity().unwrap().get(0, 1);
        assert!((scores[&4] - 4.0 * sim).abs() < 1e-5);
        assert!((scores[&5] - 5.0 * sim).abs() < 1e-5);
    }

    #[test]
    fn test_agreeing_neighbor_contributes_positively() {
        // u2 rates like u1 and has seen movie 3; u3 and u4 disagree
        // with u1. With a single neighbor slot only u2 counts.
        let matrix = build_matrix(vec![
            ("u1", 1, 5),
            ("u1", 2, 1),
            ("u2", 1, 5),
            ("u2", 2, 1),
            ("u2", 3, 5),
            ("u3", 1, 1),
            ("u3", 2, 5),
            ("u3", 3, 1),
            ("u4", 1, 3),
            ("u4", 2, 3),
            ("u4", 3, 5),
        ]);
        let engine = SimilarityEngine::build(&matrix).unwrap();
        let users = engine.user_similarity().unwrap();
        let user_row = matrix.user_position("u1").unwrap();

        // Sanity: u2 really is the closest neighbor.
        let neighbors = users.top_neighbors(user_row, 1);
        assert_eq!(neighbors[0].0, matrix.user_position("u2").unwrap());
        assert!(neighbors[0].1 > 0.0);

        let scores = score(&matrix, users, user_row, 1);
        assert_eq!(scores.len(), 1);
        assert!(scores[&3] > 0.0);
    }

    #[test]
    fn test_out_of_range_row_degrades_to_empty() {
        let matrix = build_matrix(vec![
            ("u1", 1, 5),
            ("u1", 2, 1),
            ("u2", 1, 1),
            ("u2", 2, 5),
        ]);
        let engine = SimilarityEngine::build(&matrix).unwrap();
        let scores = score(&matrix, engine.user_similarity().unwrap(), 99, 5);
        assert!(scores.is_empty());
    }
}
