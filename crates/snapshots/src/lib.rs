//! # Snapshots Crate
//!
//! Domain types and snapshot handling for the recommendation engine:
//! - [`RatingRecord`] / [`MovieMetadata`] snapshot types
//! - JSON loaders with rating-range validation
//! - [`RatingMatrixBuilder`], which turns a flat rating snapshot into
//!   a dense [`UserItemMatrix`] with deterministic index maps
//!
//! Snapshots are values: the engine reads them once at construction
//! time and never mutates them. Refreshing means loading a new
//! snapshot and building a new matrix, never editing one in place.

pub mod error;
pub mod loader;
pub mod matrix;
pub mod types;

// Re-export commonly used types
pub use error::{Result, SnapshotError};
pub use loader::{load_metadata, load_ratings, parse_metadata, parse_ratings};
pub use matrix::{RatingMatrixBuilder, UserItemMatrix};
pub use types::{MovieId, MovieMetadata, RatingRecord, UserId};
