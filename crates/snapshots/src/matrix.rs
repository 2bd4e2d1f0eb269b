//! Dense user x movie rating matrix and its builder.
//!
//! The labeled-dataframe pivot of earlier prototypes is replaced here
//! by an explicit dense matrix plus deterministic index maps:
//! - rows are users, ordered lexicographically by user_id
//! - columns are movies, ordered by ascending movie_id
//!
//! The ordering is part of the contract: downstream tie-breaks lean on
//! "ascending column index == ascending movie_id".

use crate::types::{MovieId, RatingRecord, UserId};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

/// Dense user x movie matrix. Cells hold the star rating as `f32`,
/// with 0.0 meaning "unrated" (real ratings are 1-5, so 0 is a safe
/// sentinel, never an actual opinion).
#[derive(Debug, Clone, Default)]
pub struct UserItemMatrix {
    /// Row-major values, `n_users * n_movies` long.
    values: Vec<f32>,
    /// Row position -> user_id, sorted lexicographically.
    user_ids: Vec<UserId>,
    /// Column position -> movie_id, sorted ascending.
    movie_ids: Vec<MovieId>,
    /// Reverse lookups for O(1) position queries.
    user_index: HashMap<UserId, usize>,
    movie_index: HashMap<MovieId, usize>,
}

impl UserItemMatrix {
    pub fn n_users(&self) -> usize {
        self.user_ids.len()
    }

    pub fn n_movies(&self) -> usize {
        self.movie_ids.len()
    }

    /// True when the snapshot produced no usable matrix at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rating at `(row, col)`, 0.0 when unrated.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.values[row * self.n_movies() + col]
    }

    /// One user's full rating row (unrated cells are 0.0).
    pub fn row(&self, row: usize) -> &[f32] {
        let width = self.n_movies();
        &self.values[row * width..(row + 1) * width]
    }

    /// One movie's full rating column, materialized.
    pub fn column(&self, col: usize) -> Vec<f32> {
        (0..self.n_users()).map(|row| self.get(row, col)).collect()
    }

    pub fn user_position(&self, user_id: &str) -> Option<usize> {
        self.user_index.get(user_id).copied()
    }

    pub fn movie_position(&self, movie_id: MovieId) -> Option<usize> {
        self.movie_index.get(&movie_id).copied()
    }

    pub fn user_id_at(&self, row: usize) -> &UserId {
        &self.user_ids[row]
    }

    pub fn movie_id_at(&self, col: usize) -> MovieId {
        self.movie_ids[col]
    }

    pub fn movie_ids(&self) -> &[MovieId] {
        &self.movie_ids
    }

    /// The `(movie_id, rating)` pairs a user actually rated, in
    /// ascending movie_id order.
    pub fn ratings_of(&self, row: usize) -> Vec<(MovieId, u8)> {
        self.row(row)
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value > 0.0)
            .map(|(col, &value)| (self.movie_ids[col], value as u8))
            .collect()
    }

    /// Number of movies a user has rated.
    pub fn rating_count_of(&self, row: usize) -> usize {
        self.row(row).iter().filter(|&&value| value > 0.0).count()
    }
}

/// Builds a [`UserItemMatrix`] from a flat rating snapshot.
///
/// ## Algorithm
/// 1. Deduplicate records per `(user, movie)`, last record wins
/// 2. Collect the distinct users (sorted) and movies (sorted)
/// 3. Allocate the dense matrix filled with the 0.0 sentinel
/// 4. Write each surviving rating into its cell
///
/// An empty snapshot builds an empty matrix; this is not an error.
#[derive(Debug, Default)]
pub struct RatingMatrixBuilder {
    records: Vec<RatingRecord>,
}

impl RatingMatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append records from the snapshot (builder pattern).
    pub fn add_records(mut self, records: impl IntoIterator<Item = RatingRecord>) -> Self {
        self.records.extend(records);
        self
    }

    pub fn build(self) -> UserItemMatrix {
        if self.records.is_empty() {
            warn!("No ratings data available, building empty matrix");
            return UserItemMatrix::default();
        }

        debug!("Building rating matrix from {} records", self.records.len());

        // Last write wins per (user, movie); BTreeSets keep the index
        // maps deterministic without a separate sort pass.
        let mut cells: HashMap<(UserId, MovieId), u8> = HashMap::new();
        let mut users: BTreeSet<UserId> = BTreeSet::new();
        let mut movies: BTreeSet<MovieId> = BTreeSet::new();
        for record in self.records {
            if !(1..=5).contains(&record.rating) {
                warn!(
                    "Skipping out-of-range rating {} for user {} on movie {}",
                    record.rating, record.user_id, record.movie_id
                );
                continue;
            }
            users.insert(record.user_id.clone());
            movies.insert(record.movie_id);
            cells.insert((record.user_id, record.movie_id), record.rating);
        }

        if cells.is_empty() {
            return UserItemMatrix::default();
        }

        let user_ids: Vec<UserId> = users.into_iter().collect();
        let movie_ids: Vec<MovieId> = movies.into_iter().collect();
        let user_index: HashMap<UserId, usize> = user_ids
            .iter()
            .enumerate()
            .map(|(row, id)| (id.clone(), row))
            .collect();
        let movie_index: HashMap<MovieId, usize> = movie_ids
            .iter()
            .enumerate()
            .map(|(col, &id)| (id, col))
            .collect();

        let mut values = vec![0.0_f32; user_ids.len() * movie_ids.len()];
        for ((user_id, movie_id), rating) in cells {
            let row = user_index[&user_id];
            let col = movie_index[&movie_id];
            values[row * movie_ids.len() + col] = rating as f32;
        }

        debug!(
            "Built matrix with shape {}x{}",
            user_ids.len(),
            movie_ids.len()
        );

        UserItemMatrix {
            values,
            user_ids,
            movie_ids,
            user_index,
            movie_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(user: &str, movie: MovieId, rating: u8) -> RatingRecord {
        RatingRecord::new(user, movie, rating)
    }

    #[test]
    fn test_empty_snapshot_builds_empty_matrix() {
        let matrix = RatingMatrixBuilder::new().build();
        assert!(matrix.is_empty());
        assert_eq!(matrix.n_users(), 0);
        assert_eq!(matrix.n_movies(), 0);
    }

    #[test]
    fn test_index_maps_are_sorted() {
        let matrix = RatingMatrixBuilder::new()
            .add_records(vec![
                record("zoe", 30, 4),
                record("amy", 10, 5),
                record("mia", 20, 3),
            ])
            .build();

        assert_eq!(matrix.user_id_at(0), "amy");
        assert_eq!(matrix.user_id_at(1), "mia");
        assert_eq!(matrix.user_id_at(2), "zoe");
        assert_eq!(matrix.movie_ids(), &[10, 20, 30]);
    }

    #[test]
    fn test_missing_cells_fill_with_zero() {
        let matrix = RatingMatrixBuilder::new()
            .add_records(vec![record("u1", 1, 5), record("u2", 2, 3)])
            .build();

        let u1 = matrix.user_position("u1").unwrap();
        let col2 = matrix.movie_position(2).unwrap();
        assert_eq!(matrix.get(u1, col2), 0.0);
        assert_eq!(matrix.rating_count_of(u1), 1);
    }

    #[test]
    fn test_duplicate_ratings_last_write_wins() {
        let matrix = RatingMatrixBuilder::new()
            .add_records(vec![
                record("u1", 1, 2),
                record("u1", 1, 5),
            ])
            .build();

        let row = matrix.user_position("u1").unwrap();
        let col = matrix.movie_position(1).unwrap();
        assert_eq!(matrix.get(row, col), 5.0);
        // Replacement, not aggregation: still a single rated cell.
        assert_eq!(matrix.rating_count_of(row), 1);
    }

    #[test]
    fn test_out_of_range_ratings_are_skipped() {
        let matrix = RatingMatrixBuilder::new()
            .add_records(vec![record("u1", 1, 0), record("u1", 2, 9)])
            .build();
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_ratings_of_lists_rated_movies_in_id_order() {
        let matrix = RatingMatrixBuilder::new()
            .add_records(vec![
                record("u1", 7, 4),
                record("u1", 3, 5),
                record("u2", 3, 2),
            ])
            .build();

        let row = matrix.user_position("u1").unwrap();
        assert_eq!(matrix.ratings_of(row), vec![(3, 5), (7, 4)]);
    }
}
