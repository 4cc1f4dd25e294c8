use crate::catalog::TrackId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecommendError {
    #[error("Song with ID {0} not found")]
    SeedNotFound(TrackId),

    #[error("k must be a non-negative integer, got {0}")]
    InvalidK(i64),

    #[error("Catalogue is empty, there is no seed to recommend from")]
    EmptyCatalogue,

    #[error("Song {0} has a degenerate feature vector, similarity is undefined")]
    DegenerateVector(TrackId),
}
