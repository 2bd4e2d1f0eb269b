//! The three scoring strategies and their fusion.
//!
//! Each strategy independently maps candidate movies to scores; a
//! movie missing from a strategy's output simply contributes 0 for
//! that term. Fusion is a fixed-weight linear blend followed by a
//! deterministic ranking.

pub mod content_based;
pub mod item_based;
pub mod user_based;

use snapshots::MovieId;
use std::collections::HashMap;

/// Blend weights for the three strategies.
#[derive(Debug, Clone, Copy)]
pub struct StrategyWeights {
    /// Weight for user-based collaborative filtering (default: 0.4).
    pub user: f32,
    /// Weight for item-based collaborative filtering (default: 0.3).
    pub item: f32,
    /// Weight for content similarity (default: 0.3).
    pub content: f32,
}

impl Default for StrategyWeights {
    fn default() -> Self {
        Self {
            user: 0.4,
            item: 0.3,
            content: 0.3,
        }
    }
}

/// Blend the three per-strategy score maps into combined scores.
///
/// `combined[m] = w_user * user[m] + w_item * item[m] + w_content * content[m]`,
/// with absent entries contributing 0. A movie present in any single
/// strategy is still a candidate.
pub fn merge(
    user: &HashMap<MovieId, f32>,
    item: &HashMap<MovieId, f32>,
    content: &HashMap<MovieId, f32>,
    weights: StrategyWeights,
) -> HashMap<MovieId, f32> {
    let mut combined: HashMap<MovieId, f32> = HashMap::new();
    for (&movie_id, &score) in user {
        *combined.entry(movie_id).or_insert(0.0) += weights.user * score;
    }
    for (&movie_id, &score) in item {
        *combined.entry(movie_id).or_insert(0.0) += weights.item * score;
    }
    for (&movie_id, &score) in content {
        *combined.entry(movie_id).or_insert(0.0) += weights.content * score;
    }
    combined
}

/// Rank combined scores: descending score, ties broken by ascending
/// movie id, truncated to `n`. No padding when fewer than `n`
/// candidates exist.
pub fn rank(combined: HashMap<MovieId, f32>, n: usize) -> Vec<MovieId> {
    let mut ranked: Vec<(MovieId, f32)> = combined.into_iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked.into_iter().map(|(movie_id, _)| movie_id).collect()
}
