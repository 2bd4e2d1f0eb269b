//! Loaders for rating and metadata snapshot files.
//!
//! Both snapshots are JSON arrays:
//! - ratings: `[{"user_id": "...", "movie_id": 603, "rating": 5}, ...]`
//! - metadata: `[{"id": 603, "title": "...", "overview": "..."}, ...]`
//!
//! Parsing is split from file access so tests can feed readers
//! directly. Rating values are validated here; everything past this
//! boundary can assume 1-5.

use crate::error::{Result, SnapshotError};
use crate::types::{MovieMetadata, RatingRecord};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// Parse a rating snapshot from any reader.
pub fn parse_ratings(reader: impl Read) -> Result<Vec<RatingRecord>> {
    let records: Vec<RatingRecord> = serde_json::from_reader(reader)?;
    for record in &records {
        if !(1..=5).contains(&record.rating) {
            return Err(SnapshotError::InvalidRating {
                user_id: record.user_id.clone(),
                movie_id: record.movie_id,
                rating: record.rating,
            });
        }
    }
    Ok(records)
}

/// Load a rating snapshot from a JSON file.
pub fn load_ratings(path: impl AsRef<Path>) -> Result<Vec<RatingRecord>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let records = parse_ratings(BufReader::new(file))?;
    info!("Loaded {} ratings from {}", records.len(), path.display());
    Ok(records)
}

/// Parse a metadata snapshot from any reader.
pub fn parse_metadata(reader: impl Read) -> Result<Vec<MovieMetadata>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a metadata snapshot from a JSON file.
pub fn load_metadata(path: impl AsRef<Path>) -> Result<Vec<MovieMetadata>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let movies = parse_metadata(BufReader::new(file))?;
    info!(
        "Loaded metadata for {} movies from {}",
        movies.len(),
        path.display()
    );
    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ratings() {
        let json = br#"[
            {"user_id": "u1", "movie_id": 603, "rating": 5},
            {"user_id": "u2", "movie_id": 604, "rating": 3}
        ]"#;
        let records = parse_ratings(&json[..]).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], RatingRecord::new("u1", 603, 5));
    }

    #[test]
    fn test_parse_ratings_rejects_out_of_range() {
        let json = br#"[{"user_id": "u1", "movie_id": 603, "rating": 6}]"#;
        let err = parse_ratings(&json[..]).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::InvalidRating { rating: 6, .. }
        ));
    }

    #[test]
    fn test_parse_metadata_tolerates_missing_fields() {
        let json = br#"[
            {"id": 603, "title": "The Matrix", "overview": "A hacker learns the truth."},
            {"id": 604}
        ]"#;
        let movies = parse_metadata(&json[..]).unwrap();
        assert_eq!(movies.len(), 2);
        assert!(movies[0].description().is_some());
        assert!(movies[1].description().is_none());
    }

    #[test]
    fn test_parse_ratings_rejects_malformed_json() {
        let json = br#"{"not": "an array"}"#;
        assert!(matches!(
            parse_ratings(&json[..]),
            Err(SnapshotError::Json(_))
        ));
    }
}
