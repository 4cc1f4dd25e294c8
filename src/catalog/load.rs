//! Catalogue loading from CSV files

use super::{Catalogue, Song, TrackId};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Audio feature columns, in the order they are stored in `Song::features`.
pub const FEATURE_COLUMNS: [&str; 5] = [
    "danceability",
    "energy",
    "valence",
    "tempo",
    "acousticness",
];

#[derive(Debug, Deserialize)]
struct SongRow {
    track_id: TrackId,
    track_name: String,
    artist: String,
    danceability: f64,
    energy: f64,
    valence: f64,
    tempo: f64,
    acousticness: f64,
}

impl From<SongRow> for Song {
    fn from(row: SongRow) -> Self {
        Song {
            id: row.track_id,
            name: row.track_name,
            artist: row.artist,
            features: vec![
                row.danceability,
                row.energy,
                row.valence,
                row.tempo,
                row.acousticness,
            ],
        }
    }
}

pub fn load_songs<P: AsRef<Path>>(path: P) -> Result<Catalogue> {
    let path = path.as_ref();
    info!("Loading songs from {:?}...", path);

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open songs file: {:?}", path))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read header of songs file: {:?}", path))?;
    let missing: Vec<&str> = FEATURE_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        bail!(
            "Songs file {:?} is missing feature columns: {}",
            path,
            missing.join(", ")
        );
    }

    let mut songs = vec![];
    for (line, row) in reader.deserialize::<SongRow>().enumerate() {
        // +2: header line and 1-based numbering
        let row = row.with_context(|| format!("Invalid song row at line {}", line + 2))?;
        songs.push(Song::from(row));
    }
    debug!("Parsed {} rows from {:?}", songs.len(), path);

    let catalogue = Catalogue::new(songs)
        .with_context(|| format!("Songs file {:?} is not a valid catalogue", path))?;
    info!("Catalogue has {} songs", catalogue.len());
    Ok(catalogue)
}
