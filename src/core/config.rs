//! Runtime configuration read from the environment.

use super::constants::TMDB_DEFAULT_BASE_URL;
use crate::selection::FloorPolicy;
use directories::ProjectDirs;
use std::env;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding movies.json, players.json and history.json
    pub data_dir: PathBuf,
    pub floor_policy: FloorPolicy,
    pub tmdb: TmdbConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmdbConfig {
    /// Search is disabled when no key is configured
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: TMDB_DEFAULT_BASE_URL.to_string(),
        }
    }
}

fn get_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Platform data directory for the game, e.g. ~/.local/share/movie-roulette
pub fn default_data_dir() -> io::Result<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "movie-roulette").ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine data directory",
        )
    })?;
    Ok(project_dirs.data_dir().to_path_buf())
}

impl Config {
    /// Build the configuration from `ROULETTE_*` and `TMDB_*` variables.
    ///
    /// An unrecognised `ROULETTE_FLOOR_POLICY` falls back to the fixed
    /// two-owner split with a warning.
    pub fn from_env() -> io::Result<Self> {
        let data_dir = match get_env("ROULETTE_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };

        let floor_policy = match get_env("ROULETTE_FLOOR_POLICY") {
            Some(raw) => FloorPolicy::parse(&raw).unwrap_or_else(|| {
                log::warn!("Unknown ROULETTE_FLOOR_POLICY {raw:?}, using fixed");
                FloorPolicy::default()
            }),
            None => FloorPolicy::default(),
        };

        let tmdb = TmdbConfig {
            api_key: get_env("TMDB_API_KEY"),
            base_url: get_env("TMDB_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| TMDB_DEFAULT_BASE_URL.to_string()),
        };

        Ok(Self {
            data_dir,
            floor_policy,
            tmdb,
        })
    }

    /// Configuration rooted at an explicit directory, everything else default.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            floor_policy: FloorPolicy::default(),
            tmdb: TmdbConfig::default(),
        }
    }
}
