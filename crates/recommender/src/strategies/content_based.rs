//! Content-based filtering.
//!
//! "More movies like the ones you loved."
//!
//! ## Algorithm
//! 1. Take the user's liked movies (rating >= `liked_threshold`)
//! 2. Query the content model for each one's most similar movies
//! 3. A candidate's score is the *maximum* source rating over all
//!    liked movies that recommend it (not a sum: being near two
//!    4-star movies should not beat being near one 5-star movie)
//!
//! Fails soft with the content model: unfitted model or out-of-corpus
//! movies simply contribute nothing.

use content::ContentModel;
use snapshots::MovieId;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Score unseen movies from the descriptions of liked ones.
///
/// `ratings` is the user's full `(movie_id, rating)` list; candidates
/// the user already rated are excluded.
pub fn score(
    model: &ContentModel,
    ratings: &[(MovieId, u8)],
    liked_threshold: u8,
    neighbor_count: usize,
) -> HashMap<MovieId, f32> {
    let rated: HashSet<MovieId> = ratings.iter().map(|&(movie_id, _)| movie_id).collect();
    let mut scores: HashMap<MovieId, f32> = HashMap::new();

    for &(movie_id, rating) in ratings {
        if rating < liked_threshold {
            continue;
        }
        for candidate in model.similar(movie_id, neighbor_count) {
            if rated.contains(&candidate) {
                continue;
            }
            let entry = scores.entry(candidate).or_insert(0.0);
            *entry = entry.max(rating as f32);
        }
    }

    debug!(
        "Content-based strategy proposed {} candidates from {} liked movies",
        scores.len(),
        ratings
            .iter()
            .filter(|&&(_, r)| r >= liked_threshold)
            .count()
    );
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapshots::MovieMetadata;

    fn fitted_model() -> ContentModel {
        let mut model = ContentModel::new();
        model.fit(&[
            MovieMetadata::new(1, "A starship crew explores a distant wormhole galaxy."),
            MovieMetadata::new(2, "A starship crew explores a wormhole near a black hole."),
            MovieMetadata::new(3, "A wedding planner falls for the groom."),
            MovieMetadata::new(4, "A wedding planner falls for the best man."),
        ]);
        model
    }

    #[test]
    fn test_only_liked_movies_generate_candidates() {
        let model = fitted_model();
        // Movie 1 liked, movie 3 merely tolerated.
        let scores = score(&model, &[(1, 5), (3, 2)], 4, 5);

        assert!(scores.contains_key(&2));
        assert!(!scores.contains_key(&4));
    }

    #[test]
    fn test_candidate_score_is_max_source_rating() {
        let mut model = ContentModel::new();
        // Movies 1 and 3 are both similar to movie 2.
        model.fit(&[
            MovieMetadata::new(1, "Ghost pirates haunt a cursed treasure island."),
            MovieMetadata::new(2, "Pirates hunt a cursed treasure on a haunted island."),
            MovieMetadata::new(3, "Cursed pirates guard the treasure island."),
        ]);

        let scores = score(&model, &[(1, 4), (3, 5)], 4, 5);
        // Max, not sum: 5.0 wins over 4.0 + 5.0.
        assert_eq!(scores[&2], 5.0);
    }

    #[test]
    fn test_rated_movies_are_never_candidates() {
        let model = fitted_model();
        // Both space movies rated: each recommends the other, but both
        // are already seen.
        let scores = score(&model, &[(1, 5), (2, 5), (3, 1)], 4, 5);
        assert!(!scores.contains_key(&1));
        assert!(!scores.contains_key(&2));
    }

    #[test]
    fn test_unfitted_model_contributes_nothing() {
        let model = ContentModel::new();
        let scores = score(&model, &[(1, 5), (2, 5)], 4, 5);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_movie_outside_corpus_contributes_nothing() {
        let model = fitted_model();
        let scores = score(&model, &[(99, 5)], 4, 5);
        assert!(scores.is_empty());
    }
}
