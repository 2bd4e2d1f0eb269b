//! # Similarity Crate
//!
//! Derives the collaborative-filtering similarity structures from a
//! rating matrix:
//!
//! - [`NormalizedMatrix`]: per-movie z-score normalization
//! - [`SimilarityEngine`]: user-user and item-item cosine similarity
//!   computed over one shared normalization
//!
//! All structures are built eagerly from an immutable snapshot and are
//! read-only afterwards, so they can be shared across concurrent
//! recommendation requests. The pairwise computation is
//! row-parallelized with rayon; cost is O(users^2) / O(movies^2).

pub mod engine;
pub mod normalize;

// Re-export main types
pub use engine::{SimilarityEngine, SimilarityMatrix};
pub use normalize::NormalizedMatrix;
