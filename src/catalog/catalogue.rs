//! In-memory song catalogue.
//!
//! A `Catalogue` is validated once at construction and immutable afterwards,
//! so every ranking call can rely on a consistent feature dimension and on
//! unique track ids.

use super::{Song, TrackId};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CatalogueError {
    #[error("Song {id} has {actual} features, expected {expected}")]
    DimensionMismatch {
        id: TrackId,
        expected: usize,
        actual: usize,
    },

    #[error("Song {0} has an empty feature vector")]
    EmptyFeatureVector(TrackId),

    #[error("Song with id {0} appears more than once")]
    DuplicateId(TrackId),

    #[error("Song {id} has a non-finite value at feature {feature}")]
    NonFiniteFeature { id: TrackId, feature: usize },
}

#[derive(Debug, Clone)]
pub struct Catalogue {
    songs: Vec<Song>,
    index_by_id: HashMap<TrackId, usize>,
    dimension: usize,
}

impl Catalogue {
    /// Builds a catalogue, rejecting inconsistent or duplicated songs.
    ///
    /// The feature dimension is taken from the first song. An empty catalogue
    /// is valid and has dimension 0.
    pub fn new(songs: Vec<Song>) -> Result<Catalogue, CatalogueError> {
        let dimension = songs.first().map(|s| s.features.len()).unwrap_or(0);
        let mut index_by_id = HashMap::with_capacity(songs.len());

        for (index, song) in songs.iter().enumerate() {
            if song.features.is_empty() {
                return Err(CatalogueError::EmptyFeatureVector(song.id));
            }
            if song.features.len() != dimension {
                return Err(CatalogueError::DimensionMismatch {
                    id: song.id,
                    expected: dimension,
                    actual: song.features.len(),
                });
            }
            if let Some(feature) = song.features.iter().position(|v| !v.is_finite()) {
                return Err(CatalogueError::NonFiniteFeature {
                    id: song.id,
                    feature,
                });
            }
            if index_by_id.insert(song.id, index).is_some() {
                return Err(CatalogueError::DuplicateId(song.id));
            }
        }

        Ok(Catalogue {
            songs,
            index_by_id,
            dimension,
        })
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Number of features per song.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn index_of(&self, id: TrackId) -> Option<usize> {
        self.index_by_id.get(&id).copied()
    }

    pub fn get_by_id(&self, id: TrackId) -> Option<&Song> {
        self.index_of(id).map(|index| &self.songs[index])
    }

    pub fn ids(&self) -> Vec<TrackId> {
        self.songs.iter().map(|s| s.id).collect()
    }

    /// Raw feature vectors in catalogue order, one row per song.
    pub fn feature_matrix(&self) -> Vec<Vec<f64>> {
        self.songs.iter().map(|s| s.features.clone()).collect()
    }
}
