//! Selection data structures: odds, policies and spin records.

use crate::roster::Movie;
use serde::{Deserialize, Serialize};

/// How the fairness pool is divided between owners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FloorPolicy {
    /// Reference two-player rule: a flat 0.45 for each of the first two
    /// owners. Any further owners get no fairness share.
    #[default]
    Fixed,
    /// (1 - coin pool) split evenly across every owner with movies.
    /// Changes probabilities whenever there are not exactly two owners.
    EvenSplit,
}

impl FloorPolicy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "fixed" => Some(FloorPolicy::Fixed),
            "even-split" | "even_split" | "even" => Some(FloorPolicy::EvenSplit),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FloorPolicy::Fixed => "fixed",
            FloorPolicy::EvenSplit => "even-split",
        }
    }
}

/// Probability breakdown for one movie
#[derive(Debug, Clone, PartialEq)]
pub struct MovieOdds<'a> {
    pub movie: &'a Movie,
    /// Share of the fairness pool
    pub fairness: f64,
    /// Raw coin score before normalization
    pub coin_score: f64,
    /// Share of the coin pool
    pub coin_share: f64,
}

impl MovieOdds<'_> {
    pub fn probability(&self) -> f64 {
        self.fairness + self.coin_share
    }
}

/// Immutable record of one completed spin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinRecord {
    pub id: String,
    pub movie_id: String,
    pub movie_title: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub selected_owner_id: String,
}

impl SpinRecord {
    pub fn new(id: String, movie: &Movie, timestamp: i64) -> Self {
        Self {
            id,
            movie_id: movie.id.clone(),
            movie_title: movie.title.clone(),
            timestamp,
            selected_owner_id: movie.owner_id.clone(),
        }
    }

    /// Local calendar date of the spin, for history listings
    pub fn date_label(&self) -> String {
        use chrono::{Local, TimeZone};
        match Local.timestamp_millis_opt(self.timestamp).single() {
            Some(dt) => dt.format("%Y-%m-%d").to_string(),
            None => "unknown date".to_string(),
        }
    }
}
