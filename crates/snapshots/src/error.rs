//! Error types for snapshot loading.

use thiserror::Error;

/// Errors that can occur while reading a rating or metadata snapshot
/// from disk.
///
/// These only surface at the I/O boundary. Once a snapshot is in
/// memory the engine degrades softly (empty matrices, empty results)
/// instead of raising.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// I/O error occurred while reading the snapshot file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot file wasn't valid JSON of the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A rating fell outside the 1-5 star range
    #[error("Invalid rating {rating} for user {user_id} on movie {movie_id} (expected 1-5)")]
    InvalidRating {
        user_id: String,
        movie_id: u32,
        rating: u8,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SnapshotError>;
