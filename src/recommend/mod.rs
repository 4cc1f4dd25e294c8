//! Content-based song recommendations.
//!
//! Features are standardized per column across the whole catalogue, every
//! pair of songs is scored with cosine similarity, and the seed's row of the
//! similarity matrix is ranked to pick the closest songs.

mod error;
mod ranker;
mod similarity;
mod standardize;

pub use error::RecommendError;
pub use ranker::{
    checked_k, rank, rank_with, DegenerateVectorPolicy, RankerSettings, Recommendation,
};
pub use similarity::{cosine, dot, norm, SimilarityMatrix, NORM_EPSILON};
pub use standardize::{
    standardize, FeatureStats, StandardizedMatrix, ZeroVariancePolicy, MIN_STD_DEV,
};
