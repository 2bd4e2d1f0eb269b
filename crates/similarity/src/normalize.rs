//! Per-movie z-score normalization of the rating matrix.
//!
//! Each movie column is rescaled to `(rating - mean) / std` so that
//! cosine similarity compares rating *patterns* instead of absolute
//! generosity. The statistics run over the full column, 0-filled
//! cells included, and use the sample standard deviation (n - 1).
//!
//! A column with no spread (a single user, or every entry equal)
//! normalizes to exactly 0.0 for all entries and records a std of 0.0;
//! this is the defined fallback, not an error.

use snapshots::UserItemMatrix;

/// Threshold under which a column std counts as zero variance.
const STD_EPSILON: f32 = 1e-6;

/// Column-normalized copy of a [`UserItemMatrix`].
///
/// Keeps the per-column means and stds so the original matrix can be
/// recovered (`denormalize`), which makes the transform testable.
#[derive(Debug, Clone)]
pub struct NormalizedMatrix {
    values: Vec<f32>,
    n_users: usize,
    n_movies: usize,
    column_means: Vec<f32>,
    /// 0.0 marks a degenerate (zero variance) column.
    column_stds: Vec<f32>,
}

impl NormalizedMatrix {
    /// Normalize every movie column of `matrix`.
    pub fn from_matrix(matrix: &UserItemMatrix) -> Self {
        let n_users = matrix.n_users();
        let n_movies = matrix.n_movies();

        let mut column_means = vec![0.0_f32; n_movies];
        let mut column_stds = vec![0.0_f32; n_movies];
        let mut values = vec![0.0_f32; n_users * n_movies];

        for col in 0..n_movies {
            let column = matrix.column(col);
            let mean = column.iter().sum::<f32>() / n_users as f32;
            column_means[col] = mean;

            if n_users < 2 {
                continue;
            }
            let variance = column
                .iter()
                .map(|&value| (value - mean).powi(2))
                .sum::<f32>()
                / (n_users - 1) as f32;
            let std = variance.sqrt();
            if std < STD_EPSILON {
                continue;
            }
            column_stds[col] = std;
            for (row, &value) in column.iter().enumerate() {
                values[row * n_movies + col] = (value - mean) / std;
            }
        }

        Self {
            values,
            n_users,
            n_movies,
            column_means,
            column_stds,
        }
    }

    pub fn n_users(&self) -> usize {
        self.n_users
    }

    pub fn n_movies(&self) -> usize {
        self.n_movies
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.values[row * self.n_movies + col]
    }

    /// One user's normalized rating vector.
    pub fn row(&self, row: usize) -> &[f32] {
        &self.values[row * self.n_movies..(row + 1) * self.n_movies]
    }

    /// One movie's normalized rating vector, materialized.
    pub fn column(&self, col: usize) -> Vec<f32> {
        (0..self.n_users).map(|row| self.get(row, col)).collect()
    }

    pub fn column_mean(&self, col: usize) -> f32 {
        self.column_means[col]
    }

    pub fn column_std(&self, col: usize) -> f32 {
        self.column_stds[col]
    }

    /// Recover the original cell value. For degenerate columns the
    /// normalized value carries no information, so this returns the
    /// column mean instead.
    pub fn denormalize(&self, row: usize, col: usize) -> f32 {
        let std = self.column_stds[col];
        if std == 0.0 {
            self.column_means[col]
        } else {
            self.get(row, col) * std + self.column_means[col]
        }
    }
}
