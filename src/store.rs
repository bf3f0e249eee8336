//! On-disk store for the roster and spin history.
//!
//! Layout inside the data directory:
//! - movies.json   list of movies, newest first
//! - players.json  list of players
//! - history.json  spin records, newest first
//! - defaults.json optional `{ "movies": [...], "players": [...] }` seed

use crate::roster::{default_movies, default_players, Movie, Player, Roster};
use crate::selection::{History, SpinRecord};
use crate::utils::persistence::{commit_staged, load_json, save_json, stage_json};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const MOVIES_FILE: &str = "movies.json";
const PLAYERS_FILE: &str = "players.json";
const HISTORY_FILE: &str = "history.json";
const DEFAULTS_FILE: &str = "defaults.json";

/// Optional seed file dropped next to the save files
#[derive(Debug, Default, Deserialize)]
struct DefaultsFile {
    #[serde(default)]
    movies: Option<Vec<Movie>>,
    #[serde(default, alias = "users")]
    players: Option<Vec<Player>>,
}

/// Everything the game keeps between runs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameData {
    pub roster: Roster,
    pub history: History,
}

pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn load_defaults(&self) -> DefaultsFile {
        let path = self.path(DEFAULTS_FILE);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(_) => return DefaultsFile::default(),
        };
        serde_json::from_str(&json).unwrap_or_else(|e| {
            log::warn!(
                "Could not parse {}, using embedded seeds: {}",
                path.display(),
                e
            );
            DefaultsFile::default()
        })
    }

    /// Load saved data, seeding whatever is missing.
    ///
    /// Missing movies or players come from defaults.json, then from the
    /// embedded seed, and are written back. Existing files are never
    /// overwritten here.
    pub fn load(&self) -> io::Result<GameData> {
        let saved_movies: Option<Vec<Movie>> = load_json(&self.path(MOVIES_FILE));
        let saved_players: Option<Vec<Player>> = load_json(&self.path(PLAYERS_FILE));

        let defaults = if saved_movies.is_none() || saved_players.is_none() {
            self.load_defaults()
        } else {
            DefaultsFile::default()
        };

        let movies = match saved_movies {
            Some(movies) => movies,
            None => {
                let movies = defaults.movies.unwrap_or_else(default_movies);
                log::info!("Seeding {} with {} movies", MOVIES_FILE, movies.len());
                save_json(&self.path(MOVIES_FILE), &movies)?;
                movies
            }
        };

        let players = match saved_players {
            Some(players) => players,
            None => {
                let players = defaults.players.unwrap_or_else(default_players);
                log::info!("Seeding {} with {} players", PLAYERS_FILE, players.len());
                save_json(&self.path(PLAYERS_FILE), &players)?;
                players
            }
        };

        let records: Vec<SpinRecord> = load_json(&self.path(HISTORY_FILE)).unwrap_or_default();

        Ok(GameData {
            roster: Roster::new(movies, players),
            history: History::from_records(records),
        })
    }

    pub fn save_roster(&self, roster: &Roster) -> io::Result<()> {
        save_json(&self.path(MOVIES_FILE), &roster.movies)?;
        save_json(&self.path(PLAYERS_FILE), &roster.players)
    }

    pub fn save_history(&self, history: &History) -> io::Result<()> {
        save_json(&self.path(HISTORY_FILE), history)
    }

    /// Save roster and history together.
    ///
    /// Every file is staged before any is replaced, and the history goes in
    /// first, so a failed save never leaves a coin reward on disk without
    /// its spin record.
    pub fn save(&self, data: &GameData) -> io::Result<()> {
        let targets = [
            self.path(HISTORY_FILE),
            self.path(MOVIES_FILE),
            self.path(PLAYERS_FILE),
        ];
        let staged = [
            stage_json(&targets[0], &data.history),
            stage_json(&targets[1], &data.roster.movies),
            stage_json(&targets[2], &data.roster.players),
        ];

        if let Some(err) = staged.iter().find_map(|s| s.as_ref().err()) {
            let err = io::Error::new(err.kind(), err.to_string());
            for path in staged.iter().flatten() {
                fs::remove_file(path).ok();
            }
            return Err(err);
        }

        for (file, target) in staged.iter().flatten().zip(&targets) {
            if let Err(e) = commit_staged(file, target) {
                for path in staged.iter().flatten() {
                    fs::remove_file(path).ok();
                }
                return Err(e);
            }
        }
        Ok(())
    }
}
