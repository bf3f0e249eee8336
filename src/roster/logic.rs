//! Direct edits to the roster: movies, names, coins, weights and stakes.

use super::types::{Movie, NewMovie, Roster};
use crate::catalog::{poster_url, CatalogMovie};
use crate::core::constants::{
    MAX_EDITABLE_WEIGHT, MIN_EDITABLE_WEIGHT, TMDB_DEFAULT_POSTER_SIZE, WEIGHT_STEP,
};
use crate::error::{RosterError, RosterResult};
use crate::utils::new_id;

/// Clamp a preference weight to the editable range and snap it to the
/// slider step.
pub fn clamp_weight(weight: f64) -> f64 {
    if !weight.is_finite() {
        return MIN_EDITABLE_WEIGHT;
    }
    let snapped = (weight / WEIGHT_STEP).round() * WEIGHT_STEP;
    snapped.clamp(MIN_EDITABLE_WEIGHT, MAX_EDITABLE_WEIGHT)
}

impl Roster {
    fn require_player(&self, player_id: &str) -> RosterResult<()> {
        match self.player(player_id) {
            Some(_) => Ok(()),
            None => Err(RosterError::UnknownPlayer(player_id.to_string())),
        }
    }

    /// Add a movie at the front of the pool and return its new id.
    pub fn add_movie(&mut self, new_movie: NewMovie) -> RosterResult<String> {
        self.require_player(&new_movie.owner_id)?;
        let title = new_movie.title.trim().to_string();
        if title.is_empty() {
            return Err(RosterError::InvalidValue("movie title is empty".to_string()));
        }

        let id = new_id("m");
        self.movies.insert(
            0,
            Movie {
                id: id.clone(),
                title,
                poster: new_movie.poster,
                owner_id: new_movie.owner_id,
                genre: new_movie.genre,
                tmdb_id: new_movie.tmdb_id,
            },
        );
        log::debug!("Added movie {id}");
        Ok(id)
    }

    /// Add a movie built from a catalog search result.
    pub fn add_movie_from_catalog(
        &mut self,
        owner_id: &str,
        result: &CatalogMovie,
    ) -> RosterResult<String> {
        let genre = if result.genre_ids.is_empty() {
            None
        } else {
            Some(
                result
                    .genre_ids
                    .iter()
                    .map(|g| g.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            )
        };

        self.add_movie(NewMovie {
            title: result.title.clone(),
            poster: poster_url(result.poster_path.as_deref(), TMDB_DEFAULT_POSTER_SIZE),
            owner_id: owner_id.to_string(),
            genre,
            tmdb_id: Some(result.id),
        })
    }

    /// Remove a movie only if it belongs to `owner_id`.
    /// Returns true if a movie was removed.
    pub fn remove_movie(&mut self, owner_id: &str, movie_id: &str) -> bool {
        let before = self.movies.len();
        self.movies
            .retain(|m| !(m.id == movie_id && m.owner_id == owner_id));
        self.movies.len() != before
    }

    pub fn rename_player(&mut self, player_id: &str, name: &str) -> RosterResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::InvalidValue("player name is empty".to_string()));
        }
        let player = self
            .player_mut(player_id)
            .ok_or_else(|| RosterError::UnknownPlayer(player_id.to_string()))?;
        player.name = name.to_string();
        Ok(())
    }

    /// Manually set a coin balance (admin edit).
    pub fn set_player_coins(&mut self, player_id: &str, coins: u32) -> RosterResult<()> {
        if self.adjust_player_coins(player_id, coins) {
            Ok(())
        } else {
            Err(RosterError::UnknownPlayer(player_id.to_string()))
        }
    }

    /// Manual +1 coin bonus. Returns the new balance.
    pub fn grant_coin(&mut self, player_id: &str) -> RosterResult<u32> {
        let coins = self
            .player(player_id)
            .map(|p| p.coins.saturating_add(1))
            .ok_or_else(|| RosterError::UnknownPlayer(player_id.to_string()))?;
        self.adjust_player_coins(player_id, coins);
        Ok(coins)
    }

    /// Set a preference weight, clamped to the editable range.
    /// Returns the stored value.
    pub fn set_player_weight(
        &mut self,
        player_id: &str,
        movie_id: &str,
        weight: f64,
    ) -> RosterResult<f64> {
        if self.movie(movie_id).is_none() {
            return Err(RosterError::UnknownMovie(movie_id.to_string()));
        }
        let player = self
            .player_mut(player_id)
            .ok_or_else(|| RosterError::UnknownPlayer(player_id.to_string()))?;
        let weight = clamp_weight(weight);
        player.weights.insert(movie_id.to_string(), weight);
        Ok(weight)
    }

    /// Stake extra coins on a movie. Zero clears the stake.
    pub fn set_movie_stake(
        &mut self,
        player_id: &str,
        movie_id: &str,
        coins: u32,
    ) -> RosterResult<()> {
        if self.movie(movie_id).is_none() {
            return Err(RosterError::UnknownMovie(movie_id.to_string()));
        }
        let player = self
            .player_mut(player_id)
            .ok_or_else(|| RosterError::UnknownPlayer(player_id.to_string()))?;
        if coins == 0 {
            player.per_movie_coins.remove(movie_id);
        } else {
            player.per_movie_coins.insert(movie_id.to_string(), coins);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::defaults::default_roster;

    fn new_movie(title: &str, owner: &str) -> NewMovie {
        NewMovie {
            title: title.to_string(),
            owner_id: owner.to_string(),
            ..NewMovie::default()
        }
    }

    #[test]
    fn test_clamp_weight_range_and_step() {
        assert_eq!(clamp_weight(0.2), 1.0);
        assert_eq!(clamp_weight(9.0), 4.0);
        assert_eq!(clamp_weight(1.3), 1.25);
        assert_eq!(clamp_weight(2.4), 2.5);
        assert_eq!(clamp_weight(f64::NAN), 1.0);
    }

    #[test]
    fn test_add_movie_prepends() {
        let mut roster = default_roster();
        let id = roster.add_movie(new_movie("Heat", "u2")).unwrap();
        assert_eq!(roster.movies[0].id, id);
        assert_eq!(roster.movies[0].title, "Heat");
        assert!(id.starts_with("m_"));
    }

    #[test]
    fn test_add_movie_requires_known_owner() {
        let mut roster = default_roster();
        let before = roster.movies.len();
        let err = roster.add_movie(new_movie("Heat", "u9")).unwrap_err();
        assert_eq!(err, RosterError::UnknownPlayer("u9".to_string()));
        assert_eq!(roster.movies.len(), before);
    }

    #[test]
    fn test_add_movie_rejects_blank_title() {
        let mut roster = default_roster();
        assert!(matches!(
            roster.add_movie(new_movie("   ", "u1")),
            Err(RosterError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_add_movie_from_catalog() {
        let mut roster = default_roster();
        let result = CatalogMovie {
            id: 680,
            title: "Pulp Fiction".to_string(),
            poster_path: Some("/pulp.jpg".to_string()),
            genre_ids: vec![53, 80],
            ..CatalogMovie::default()
        };
        let id = roster.add_movie_from_catalog("u1", &result).unwrap();
        let movie = roster.movie(&id).unwrap();
        assert_eq!(movie.poster, "https://image.tmdb.org/t/p/w500/pulp.jpg");
        assert_eq!(movie.genre.as_deref(), Some("53,80"));
        assert_eq!(movie.tmdb_id, Some(680));
        assert_eq!(movie.owner_id, "u1");
    }

    #[test]
    fn test_catalog_movie_without_genres_or_poster() {
        let mut roster = default_roster();
        let result = CatalogMovie {
            id: 1,
            title: "Obscure".to_string(),
            ..CatalogMovie::default()
        };
        let id = roster.add_movie_from_catalog("u2", &result).unwrap();
        let movie = roster.movie(&id).unwrap();
        assert!(movie.genre.is_none());
        assert!(movie.poster.is_empty());
    }

    #[test]
    fn test_remove_movie_requires_matching_owner() {
        let mut roster = default_roster();
        assert!(!roster.remove_movie("u2", "m1"));
        assert!(roster.movie("m1").is_some());
        assert!(roster.remove_movie("u1", "m1"));
        assert!(roster.movie("m1").is_none());
        assert!(!roster.remove_movie("u1", "m1"));
    }

    #[test]
    fn test_rename_player() {
        let mut roster = default_roster();
        roster.rename_player("u1", "  Alicia ").unwrap();
        assert_eq!(roster.player("u1").unwrap().name, "Alicia");
        assert!(roster.rename_player("u1", "").is_err());
        assert!(roster.rename_player("u7", "X").is_err());
    }

    #[test]
    fn test_grant_coin_and_set_coins() {
        let mut roster = default_roster();
        assert_eq!(roster.grant_coin("u2").unwrap(), 3);
        roster.set_player_coins("u2", 0).unwrap();
        assert_eq!(roster.player("u2").unwrap().coins, 0);
        assert!(roster.grant_coin("nobody").is_err());
    }

    #[test]
    fn test_set_player_weight_clamps() {
        let mut roster = default_roster();
        assert_eq!(roster.set_player_weight("u1", "m3", 7.0).unwrap(), 4.0);
        assert_eq!(roster.player("u1").unwrap().weight_of("m3"), 4.0);
        assert!(matches!(
            roster.set_player_weight("u1", "m99", 2.0),
            Err(RosterError::UnknownMovie(_))
        ));
    }

    #[test]
    fn test_set_movie_stake_zero_clears() {
        let mut roster = default_roster();
        roster.set_movie_stake("u2", "m2", 4).unwrap();
        assert_eq!(roster.player("u2").unwrap().stake_on("m2"), 4);
        roster.set_movie_stake("u2", "m2", 0).unwrap();
        let bob = roster.player("u2").unwrap();
        assert!(!bob.per_movie_coins.contains_key("m2"));
    }
}
