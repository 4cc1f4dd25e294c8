mod file_config;

pub use file_config::{FileConfig, RankerConfig};

use crate::recommend::{checked_k, DegenerateVectorPolicy, RankerSettings, ZeroVariancePolicy};
use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use std::path::PathBuf;

pub const DEFAULT_SONGS_CSV: &str = "data/raw/toy_songs.csv";
pub const DEFAULT_K: usize = 5;

/// CLI arguments that can be used for config resolution.
/// Every field is optional so that the TOML file or the defaults can fill it.
/// `default_k` has no flag: `demo --k` is per run and bypasses it.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub songs_csv: Option<PathBuf>,
    pub zero_variance: Option<ZeroVariancePolicy>,
    pub degenerate_vectors: Option<DegenerateVectorPolicy>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub songs_csv: PathBuf,
    pub default_k: usize,
    pub ranker: RankerSettings,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let songs_csv = file
            .songs_csv
            .map(PathBuf::from)
            .or_else(|| cli.songs_csv.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SONGS_CSV));

        if !songs_csv.exists() {
            bail!("Songs file does not exist: {:?}", songs_csv);
        }
        if !songs_csv.is_file() {
            bail!("songs_csv is not a file: {:?}", songs_csv);
        }

        let default_k = match file.default_k {
            Some(k) => checked_k(k).context("Invalid default_k")?,
            None => DEFAULT_K,
        };

        let ranker_file = file.ranker.unwrap_or_default();

        let zero_variance = match ranker_file.zero_variance {
            Some(s) => parse_zero_variance(&s)
                .with_context(|| format!("Unknown zero_variance policy: {:?}", s))?,
            None => cli.zero_variance.unwrap_or_default(),
        };

        let degenerate_vectors = match ranker_file.degenerate_vectors {
            Some(s) => parse_degenerate_vectors(&s)
                .with_context(|| format!("Unknown degenerate_vectors policy: {:?}", s))?,
            None => cli.degenerate_vectors.unwrap_or_default(),
        };

        Ok(Self {
            songs_csv,
            default_k,
            ranker: RankerSettings {
                zero_variance,
                degenerate_vectors,
            },
        })
    }
}

/// Case-insensitive, accepts the same spellings as the CLI flag.
pub fn parse_zero_variance(s: &str) -> Option<ZeroVariancePolicy> {
    ZeroVariancePolicy::from_str(s, true).ok()
}

pub fn parse_degenerate_vectors(s: &str) -> Option<DegenerateVectorPolicy> {
    DegenerateVectorPolicy::from_str(s, true).ok()
}
