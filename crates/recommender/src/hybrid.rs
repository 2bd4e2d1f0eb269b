//! # Hybrid recommender orchestration
//!
//! Coordinates a recommendation request end to end:
//! 1. Check engine state (matrices built?)
//! 2. Check user eligibility (known? enough ratings?)
//! 3. Re-fit the content model when fresh metadata is supplied
//! 4. Run the three strategies
//! 5. Merge with fixed weights and rank deterministically
//!
//! A recommender is built once from an immutable rating snapshot;
//! matrices are never updated in place. To reflect new ratings, build
//! a new instance from a fresh snapshot.

use crate::status::RecommendationStatus;
use crate::strategies::{self, StrategyWeights};
use content::ContentModel;
use similarity::SimilarityEngine;
use snapshots::{MovieId, MovieMetadata, RatingMatrixBuilder, RatingRecord, UserItemMatrix};
use std::collections::HashMap;
use tracing::{info, instrument, warn};

/// Result of a recommendation request: a ranked movie list plus the
/// status explaining it. The list is non-empty only on `Success`.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub movie_ids: Vec<MovieId>,
    pub status: RecommendationStatus,
}

impl Recommendation {
    fn empty(status: RecommendationStatus) -> Self {
        Self {
            movie_ids: Vec::new(),
            status,
        }
    }
}

/// Hybrid recommender blending user-based CF, item-based CF and
/// content similarity.
pub struct HybridRecommender {
    matrix: UserItemMatrix,
    engine: Option<SimilarityEngine>,
    content: ContentModel,
    weights: StrategyWeights,
    /// Minimum ratings before a user is eligible.
    min_ratings_required: usize,
    /// Ratings at or above this count as "liked" for the content
    /// strategy.
    liked_threshold: u8,
    /// Similar users / similar movies consulted per strategy.
    neighbor_count: usize,
}

impl HybridRecommender {
    /// Build a recommender from a rating snapshot.
    ///
    /// Construction eagerly builds the rating matrix and both
    /// similarity matrices; an empty snapshot produces a recommender
    /// that answers every request with `Uninitialized`.
    pub fn from_snapshot(ratings: impl IntoIterator<Item = RatingRecord>) -> Self {
        let matrix = RatingMatrixBuilder::new().add_records(ratings).build();
        let engine = SimilarityEngine::build(&matrix);
        info!(
            "Built recommender over {} users x {} movies",
            matrix.n_users(),
            matrix.n_movies()
        );
        Self {
            matrix,
            engine,
            content: ContentModel::new(),
            weights: StrategyWeights::default(),
            min_ratings_required: 3,
            liked_threshold: 4,
            neighbor_count: 5,
        }
    }

    /// Configure the eligibility threshold (default: 3).
    pub fn with_min_ratings(mut self, min: usize) -> Self {
        self.min_ratings_required = min;
        self
    }

    /// Configure the "liked" rating threshold (default: 4).
    pub fn with_liked_threshold(mut self, threshold: u8) -> Self {
        self.liked_threshold = threshold;
        self
    }

    /// Configure how many neighbors each strategy consults (default: 5).
    pub fn with_neighbor_count(mut self, count: usize) -> Self {
        self.neighbor_count = count;
        self
    }

    /// Configure the blend weights (default: 0.4 / 0.3 / 0.3).
    pub fn with_weights(mut self, weights: StrategyWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn matrix(&self) -> &UserItemMatrix {
        &self.matrix
    }

    /// Get the top `n` hybrid recommendations for `user_id`.
    ///
    /// When `metadata` is supplied the content model is re-fit on it
    /// first; without it the content strategy runs on whatever corpus
    /// was fitted before (possibly none).
    ///
    /// # Panics
    /// `n == 0` is a caller contract violation and panics; every
    /// data-quality condition is reported through the status instead.
    #[instrument(skip(self, metadata), fields(user_id = user_id, n = n))]
    pub fn get_recommendations(
        &mut self,
        user_id: &str,
        n: usize,
        metadata: Option<&[MovieMetadata]>,
    ) -> Recommendation {
        assert!(n > 0, "requested recommendation count must be positive");

        let Some(engine) = &self.engine else {
            warn!("Recommendation system not properly initialized");
            return Recommendation::empty(RecommendationStatus::Uninitialized);
        };
        if engine.user_similarity().is_none() && engine.item_similarity().is_none() {
            warn!("No similarity matrix could be built from the snapshot");
            return Recommendation::empty(RecommendationStatus::Uninitialized);
        }

        let Some(user_row) = self.matrix.user_position(user_id) else {
            info!("User {} not found in the matrix", user_id);
            return Recommendation::empty(RecommendationStatus::UserNotFound);
        };

        let rating_count = self.matrix.rating_count_of(user_row);
        if rating_count < self.min_ratings_required {
            info!(
                "User {} has insufficient ratings: {}",
                user_id, rating_count
            );
            return Recommendation::empty(RecommendationStatus::InsufficientRatings {
                required: self.min_ratings_required,
            });
        }

        if let Some(movies) = metadata {
            self.content.fit(movies);
        }

        let user_scores = engine
            .user_similarity()
            .map(|sim| strategies::user_based::score(&self.matrix, sim, user_row, self.neighbor_count))
            .unwrap_or_default();
        let item_scores = engine
            .item_similarity()
            .map(|sim| strategies::item_based::score(&self.matrix, sim, user_row, self.neighbor_count))
            .unwrap_or_default();
        let content_scores = strategies::content_based::score(
            &self.content,
            &self.matrix.ratings_of(user_row),
            self.liked_threshold,
            self.neighbor_count,
        );

        let combined: HashMap<MovieId, f32> =
            strategies::merge(&user_scores, &item_scores, &content_scores, self.weights);
        let movie_ids = strategies::rank(combined, n);

        if movie_ids.is_empty() {
            info!("No candidates survived for user {}", user_id);
            return Recommendation::empty(RecommendationStatus::NoRecommendations);
        }

        info!(
            "Generated {} recommendations for user {}",
            movie_ids.len(),
            user_id
        );
        Recommendation {
            movie_ids,
            status: RecommendationStatus::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(user: &str, movie: MovieId, rating: u8) -> RatingRecord {
        RatingRecord::new(user, movie, rating)
    }

    /// Two users with overlapping taste; u1 is eligible, u2 leaves
    /// candidates u1 has not seen.
    fn snapshot() -> Vec<RatingRecord> {
        vec![
            record("u1", 1, 5),
            record("u1", 2, 4),
            record("u1", 3, 5),
            record("u2", 1, 5),
            record("u2", 4, 4),
            record("u2", 5, 5),
        ]
    }

    #[test]
    fn test_empty_snapshot_reports_uninitialized() {
        let mut recommender = HybridRecommender::from_snapshot(vec![]);
        let result = recommender.get_recommendations("u1", 5, None);
        assert_eq!(result.status, RecommendationStatus::Uninitialized);
        assert!(result.movie_ids.is_empty());
    }

    #[test]
    fn test_unknown_user_reports_user_not_found() {
        let mut recommender = HybridRecommender::from_snapshot(snapshot());
        let result = recommender.get_recommendations("nobody", 5, None);
        assert_eq!(result.status, RecommendationStatus::UserNotFound);
        assert!(result.movie_ids.is_empty());
    }

    #[test]
    fn test_too_few_ratings_reports_insufficient() {
        let mut recommender = HybridRecommender::from_snapshot(vec![
            record("u1", 1, 5),
            record("u1", 2, 4),
            record("u2", 1, 5),
            record("u2", 2, 4),
            record("u2", 3, 5),
        ]);
        let result = recommender.get_recommendations("u1", 5, None);
        assert_eq!(
            result.status,
            RecommendationStatus::InsufficientRatings { required: 3 }
        );
        assert!(result.movie_ids.is_empty());
        assert!(result.status.to_string().contains('3'));
    }

    #[test]
    fn test_duplicate_ratings_count_once_for_eligibility() {
        // Three records, but only two distinct movies.
        let mut recommender = HybridRecommender::from_snapshot(vec![
            record("u1", 1, 2),
            record("u1", 1, 5),
            record("u1", 2, 4),
            record("u2", 1, 5),
            record("u2", 2, 4),
            record("u2", 3, 5),
        ]);
        let result = recommender.get_recommendations("u1", 5, None);
        assert_eq!(
            result.status,
            RecommendationStatus::InsufficientRatings { required: 3 }
        );
    }

    #[test]
    fn test_eligible_user_gets_unseen_movies() {
        let mut recommender = HybridRecommender::from_snapshot(snapshot());
        let result = recommender.get_recommendations("u1", 5, None);

        assert_eq!(result.status, RecommendationStatus::Success);
        assert!(!result.movie_ids.is_empty());
        // Never recommend something already rated.
        for rated in [1, 2, 3] {
            assert!(!result.movie_ids.contains(&rated));
        }
    }

    #[test]
    fn test_result_respects_requested_length() {
        let mut recommender = HybridRecommender::from_snapshot(snapshot());
        let result = recommender.get_recommendations("u1", 1, None);
        assert_eq!(result.movie_ids.len(), 1);

        // Asking for more than exists returns all candidates, no padding.
        let result = recommender.get_recommendations("u1", 50, None);
        assert!(result.movie_ids.len() <= 2);
        assert_eq!(result.status, RecommendationStatus::Success);
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_zero_count_is_a_contract_violation() {
        let mut recommender = HybridRecommender::from_snapshot(snapshot());
        recommender.get_recommendations("u1", 0, None);
    }

    #[test]
    fn test_metadata_refit_enables_content_strategy() {
        // Single user: no user similarity, but item similarity and
        // content still work.
        let mut recommender = HybridRecommender::from_snapshot(vec![
            record("u1", 1, 5),
            record("u1", 2, 4),
            record("u1", 3, 2),
        ]);
        let metadata = vec![
            MovieMetadata::new(1, "A knight quests for a dragon's hoard."),
            MovieMetadata::new(4, "A knight battles a dragon for its hoard."),
            MovieMetadata::new(5, "A documentary about deep sea fishing."),
        ];
        let result = recommender.get_recommendations("u1", 5, Some(&metadata));

        assert_eq!(result.status, RecommendationStatus::Success);
        assert!(result.movie_ids.contains(&4));
        assert!(!result.movie_ids.contains(&5));
    }

    #[test]
    fn test_refit_replaces_stale_corpus() {
        let mut recommender = HybridRecommender::from_snapshot(vec![
            record("u1", 1, 5),
            record("u1", 2, 4),
            record("u1", 3, 2),
        ]);
        let stale = vec![
            MovieMetadata::new(1, "A knight quests for a dragon's hoard."),
            MovieMetadata::new(4, "A knight battles a dragon for its hoard."),
        ];
        recommender.get_recommendations("u1", 5, Some(&stale));

        // The new snapshot no longer contains movie 4.
        let fresh = vec![
            MovieMetadata::new(1, "A knight quests for a dragon's hoard."),
            MovieMetadata::new(6, "A dragon guards its hoard from a knight."),
        ];
        let result = recommender.get_recommendations("u1", 5, Some(&fresh));
        assert!(!result.movie_ids.contains(&4));
        assert!(result.movie_ids.contains(&6));
    }
}
