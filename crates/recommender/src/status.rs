//! Request outcome statuses.
//!
//! Everything short of a caller contract violation is a status, not an
//! error: data-quality and eligibility problems degrade to an empty
//! list plus a human-readable reason.

use std::fmt;

/// Outcome of a recommendation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationStatus {
    /// The rating snapshot produced no usable matrices.
    Uninitialized,
    /// The user has no ratings in the snapshot.
    UserNotFound,
    /// The user has ratings, but fewer than the required minimum.
    InsufficientRatings { required: usize },
    /// Eligible user, but no strategy produced a candidate.
    NoRecommendations,
    Success,
}

impl RecommendationStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for RecommendationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => {
                write!(f, "System not properly initialized. Please try again later.")
            }
            Self::UserNotFound => write!(f, "No ratings found for this user."),
            Self::InsufficientRatings { required } => write!(
                f,
                "Please rate at least {required} movies to get recommendations."
            ),
            Self::NoRecommendations => {
                write!(f, "No recommendations found based on your ratings.")
            }
            Self::Success => write!(f, "Success"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_ratings_message_surfaces_threshold() {
        let status = RecommendationStatus::InsufficientRatings { required: 3 };
        assert!(status.to_string().contains('3'));
        assert!(!status.is_success());
    }
}
