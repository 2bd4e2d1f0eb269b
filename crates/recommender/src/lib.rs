//! # Recommender Crate
//!
//! The hybrid recommendation orchestrator. Blends three strategies:
//!
//! - **User-based CF**: movies liked by users who rate like you
//! - **Item-based CF**: movies whose rating pattern tracks the ones
//!   you rated
//! - **Content**: movies whose descriptions resemble the ones you
//!   loved
//!
//! A [`HybridRecommender`] is built once from a rating snapshot and is
//! immutable apart from content-model re-fits; eligibility rules,
//! per-strategy scoring, fixed-weight fusion and deterministic ranking
//! all live here.

pub mod hybrid;
pub mod status;
pub mod strategies;

// Re-export main types
pub use hybrid::{HybridRecommender, Recommendation};
pub use status::RecommendationStatus;
pub use strategies::StrategyWeights;
