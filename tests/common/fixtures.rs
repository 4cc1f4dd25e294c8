//! Songs files written to temporary directories
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const SONGS_HEADER: &str =
    "track_id,track_name,artist,danceability,energy,valence,tempo,acousticness";

pub const UPBEAT_ID: u64 = 1;
pub const UPBEAT_TWIN_ID: u64 = 2;
pub const ACOUSTIC_ID: u64 = 3;
pub const MELLOW_ID: u64 = 4;
pub const MISSING_ID: u64 = 999;

/// Four songs: 1 and 2 share features, 3 is their opposite, 4 sits in between
/// but leans acoustic.
pub const TEST_SONGS: &[&str] = &[
    "1,Upbeat,Band A,1.0,1.0,1.0,100.0,0.0",
    "2,Upbeat Twin,Band B,1.0,1.0,1.0,100.0,0.0",
    "3,Acoustic,Band C,0.0,0.0,0.0,0.0,1.0",
    "4,Mellow,Band D,0.4,0.3,0.5,60.0,0.8",
];

/// A temporary directory holding `songs.csv` and, optionally, `config.toml`.
pub struct TestFiles {
    pub dir: TempDir,
}

impl TestFiles {
    pub fn with_songs(rows: &[&str]) -> TestFiles {
        let dir = TempDir::new().unwrap();
        let mut content = String::from(SONGS_HEADER);
        content.push('\n');
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        fs::write(dir.path().join("songs.csv"), content).unwrap();
        TestFiles { dir }
    }

    pub fn default_songs() -> TestFiles {
        Self::with_songs(TEST_SONGS)
    }

    pub fn songs_path(&self) -> PathBuf {
        self.dir.path().join("songs.csv")
    }

    pub fn write_config(&self, toml: &str) -> PathBuf {
        let path = self.dir.path().join("config.toml");
        fs::write(&path, toml).unwrap();
        path
    }
}
