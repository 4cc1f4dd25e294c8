use serde::Serialize;

pub type TrackId = u64;

/// A song with its display attributes and raw audio features.
///
/// The core never looks at `name` or `artist`, they are carried through to
/// whoever presents the recommendations.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct Song {
    pub id: TrackId,
    pub name: String,
    pub artist: String,
    pub features: Vec<f64>,
}

impl Song {
    pub fn new<N: Into<String>, A: Into<String>>(
        id: TrackId,
        name: N,
        artist: A,
        features: Vec<f64>,
    ) -> Song {
        Song {
            id,
            name: name.into(),
            artist: artist.into(),
            features,
        }
    }
}
