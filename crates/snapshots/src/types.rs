//! Core domain types shared by every crate in the workspace.
//!
//! A rating snapshot is a flat sequence of [`RatingRecord`]s read from
//! the external rating store; a metadata snapshot is a sequence of
//! [`MovieMetadata`] entries fetched from the catalog provider. Both
//! are treated as immutable values: the engine never writes back.

use serde::{Deserialize, Serialize};

/// Unique identifier for a user. Sessions mint opaque string ids, so
/// the engine never assumes anything about their shape.
pub type UserId = String;

/// Unique identifier for a movie (the catalog provider's integer id).
pub type MovieId = u32;

/// A single `(user, movie) -> rating` observation.
///
/// Ratings are whole stars in `1..=5`. At most one record per
/// `(user_id, movie_id)` pair is live in the store; when a snapshot
/// still contains duplicates, the last record wins (the store's
/// last-write-wins semantics).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub user_id: UserId,
    pub movie_id: MovieId,
    /// Star rating from 1 to 5. Zero is reserved as the "unrated"
    /// sentinel inside the matrix and never appears in a record.
    pub rating: u8,
}

impl RatingRecord {
    pub fn new(user_id: impl Into<UserId>, movie_id: MovieId, rating: u8) -> Self {
        Self {
            user_id: user_id.into(),
            movie_id,
            rating,
        }
    }
}

/// Catalog metadata for one movie, as consumed by the content model.
///
/// The engine only reads `id` and `overview`; `title` is carried for
/// display layers. Genre ids, popularity and release dates stay with
/// the catalog provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieMetadata {
    pub id: MovieId,
    #[serde(default)]
    pub title: Option<String>,
    /// Free-text plot description. Empty or missing overviews exclude
    /// the movie from the content corpus.
    #[serde(default)]
    pub overview: Option<String>,
}

impl MovieMetadata {
    pub fn new(id: MovieId, overview: impl Into<String>) -> Self {
        Self {
            id,
            title: None,
            overview: Some(overview.into()),
        }
    }

    /// The trimmed overview, or `None` when the movie has no usable
    /// description.
    pub fn description(&self) -> Option<&str> {
        self.overview
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_filters_blank_overviews() {
        let with_text = MovieMetadata::new(1, "A heist goes wrong.");
        assert_eq!(with_text.description(), Some("A heist goes wrong."));

        let blank = MovieMetadata {
            id: 2,
            title: None,
            overview: Some("   ".to_string()),
        };
        assert_eq!(blank.description(), None);

        let missing = MovieMetadata {
            id: 3,
            title: None,
            overview: None,
        };
        assert_eq!(missing.description(), None);
    }
}
