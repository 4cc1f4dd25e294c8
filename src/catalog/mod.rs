mod catalogue;
mod load;
mod song;

pub use catalogue::{Catalogue, CatalogueError};
pub use load::{load_songs, FEATURE_COLUMNS};
pub use song::{Song, TrackId};
