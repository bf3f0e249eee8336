//! Movies, players and the roster snapshot the engine draws from.

use crate::core::constants::DEFAULT_WEIGHT;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A movie in the shared pool, contributed by one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub poster: String,
    pub owner_id: String,
    /// Comma-separated genre names or catalog genre ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmdb_id: Option<u64>,
}

/// Fields for a movie that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewMovie {
    pub title: String,
    pub poster: String,
    pub owner_id: String,
    pub genre: Option<String>,
    pub tmdb_id: Option<u64>,
}

/// A player account with a coin balance and per-movie preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub coins: u32,
    /// Preference weight per movie id; missing entries are neutral
    #[serde(default)]
    pub weights: HashMap<String, f64>,
    /// Coins staked directly on a movie; missing entries are zero
    #[serde(default)]
    pub per_movie_coins: HashMap<String, u32>,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        let avatar = name.chars().next().map(|c| c.to_uppercase().to_string());
        Self {
            id: id.into(),
            name,
            avatar,
            coins: 0,
            weights: HashMap::new(),
            per_movie_coins: HashMap::new(),
        }
    }

    /// Preference weight for a movie, 1.0 when unset.
    pub fn weight_of(&self, movie_id: &str) -> f64 {
        self.weights
            .get(movie_id)
            .copied()
            .unwrap_or(DEFAULT_WEIGHT)
    }

    /// Coins staked on a movie, 0 when unset.
    pub fn stake_on(&self, movie_id: &str) -> u32 {
        self.per_movie_coins.get(movie_id).copied().unwrap_or(0)
    }
}

/// The entity store snapshot: every movie and player, in stored order.
///
/// Order matters. The selector walks `movies` front to back and the coin
/// reward goes to the first non-owner in `players`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Roster {
    pub fn new(movies: Vec<Movie>, players: Vec<Player>) -> Self {
        Self { movies, players }
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn player_mut(&mut self, player_id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    pub fn movie(&self, movie_id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == movie_id)
    }

    /// Movies contributed by a player, in stored order
    pub fn movies_of<'a>(&'a self, owner_id: &'a str) -> impl Iterator<Item = &'a Movie> + 'a {
        self.movies.iter().filter(move |m| m.owner_id == owner_id)
    }

    /// Movies whose owner is a known player; only these can be drawn.
    pub fn eligible_movies(&self) -> Vec<Movie> {
        self.movies
            .iter()
            .filter(|m| self.player(&m.owner_id).is_some())
            .cloned()
            .collect()
    }

    /// Overwrite a player's coin balance.
    /// Returns false if the player does not exist.
    pub fn adjust_player_coins(&mut self, player_id: &str, coins: u32) -> bool {
        match self.player_mut(player_id) {
            Some(player) => {
                player.coins = coins;
                true
            }
            None => false,
        }
    }
}
