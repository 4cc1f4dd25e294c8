//! Song Recommender Library
//!
//! Content-based recommendations over a small in-memory catalogue: given a
//! seed song, [`rank`] returns the songs whose standardized audio features
//! are closest to it under cosine similarity.

pub mod catalog;
pub mod config;
pub mod recommend;

// Re-export commonly used types for convenience
pub use catalog::{load_songs, Catalogue, CatalogueError, Song, TrackId};
pub use recommend::{rank, rank_with, RankerSettings, RecommendError, Recommendation};
