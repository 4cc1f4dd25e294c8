use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli_style;
use cli_style::{get_styles, print_error, print_recommendations, print_songs, print_success};

use song_recommender::catalog::{load_songs, TrackId};
use song_recommender::config::{AppConfig, CliConfig, FileConfig};
use song_recommender::recommend::{
    checked_k, rank_with, DegenerateVectorPolicy, ZeroVariancePolicy,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(styles = get_styles(), version, about = "Content-based song recommendations")]
struct CliArgs {
    /// Path to the songs CSV file.
    #[clap(long, global = true, value_parser = parse_path)]
    pub songs_csv: Option<PathBuf>,

    /// Path to a TOML config file, its values override the flags.
    #[clap(long, global = true, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// How to treat features with zero variance.
    #[clap(long, global = true, value_enum, ignore_case = true)]
    pub zero_variance: Option<ZeroVariancePolicy>,

    /// How to treat a seed with a degenerate feature vector.
    #[clap(long, global = true, value_enum, ignore_case = true)]
    pub degenerate_vectors: Option<DegenerateVectorPolicy>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recommends the songs most similar to a seed song.
    Demo {
        /// Track id of the seed song.
        #[clap(long)]
        seed: TrackId,

        /// Number of songs to recommend, defaults to the configured default_k.
        #[clap(long, allow_negative_numbers = true)]
        k: Option<i64>,

        /// Print the recommendations as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Lists the songs in the catalogue.
    Songs,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = cli_args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    let cli_config = CliConfig {
        songs_csv: cli_args.songs_csv.clone(),
        zero_variance: cli_args.zero_variance,
        degenerate_vectors: cli_args.degenerate_vectors,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    let catalogue = load_songs(&config.songs_csv)?;

    match cli_args.command {
        Command::Demo { seed, k, json } => {
            let seed_song = match catalogue.get_by_id(seed) {
                Some(song) => song,
                None => {
                    print_error(&format!("Song with ID {} not found!", seed));
                    let available: Vec<String> =
                        catalogue.ids().iter().map(|id| id.to_string()).collect();
                    println!("   Available IDs: [{}]", available.join(", "));
                    std::process::exit(1);
                }
            };

            let k = match k {
                Some(k) => checked_k(k)?,
                None => config.default_k,
            };

            info!("Generating recommendations for song {}...", seed);
            let recommendations = rank_with(&catalogue, seed, k, &config.ranker)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&recommendations)?);
            } else {
                print_recommendations(seed_song, k, &recommendations);
                print_success("Recommendation complete!");
            }
        }
        Command::Songs => print_songs(&catalogue),
    }

    Ok(())
}
