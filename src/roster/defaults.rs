//! Embedded seed data used when no saved roster or defaults.json exists.

use super::types::{Movie, Player, Roster};
use std::collections::HashMap;

/// (id, title, poster file, owner, genres, catalog id)
type SeedMovie = (&'static str, &'static str, &'static str, &'static str, &'static str, u64);

const SEED_MOVIES: [SeedMovie; 6] = [
    (
        "m1",
        "Inception",
        "qmDpIHrmpJINaRKAfWQfftjCdyi.jpg",
        "u1",
        "Action,Science Fiction",
        27205,
    ),
    (
        "m2",
        "Parasite",
        "7IiTTgloJzvGI1TAYymCfbfl3vT.jpg",
        "u2",
        "Drama,Thriller",
        496243,
    ),
    (
        "m3",
        "Spirited Away",
        "dL11DBPcRhWWnJcFXl9A07MrqTI.jpg",
        "u1",
        "Animation,Family,Fantasy",
        129,
    ),
    (
        "m4",
        "The Matrix",
        "f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
        "u2",
        "Action,Science Fiction",
        603,
    ),
    (
        "m5",
        "The Grand Budapest Hotel",
        "nX5XotM9yprCKarRH4fzOq1VM1J.jpg",
        "u1",
        "Comedy,Drama",
        120467,
    ),
    (
        "m7",
        "The Shawshank Redemption",
        "q6y0Go1tsGEsmtFryDOJo3dEmqu.jpg",
        "u2",
        "Drama,Crime",
        278,
    ),
];

pub fn default_movies() -> Vec<Movie> {
    SEED_MOVIES
        .iter()
        .map(|(id, title, poster, owner_id, genre, tmdb_id)| Movie {
            id: id.to_string(),
            title: title.to_string(),
            poster: format!("https://image.tmdb.org/t/p/w500/{poster}"),
            owner_id: owner_id.to_string(),
            genre: Some(genre.to_string()),
            tmdb_id: Some(*tmdb_id),
        })
        .collect()
}

pub fn default_players() -> Vec<Player> {
    let mut alice = Player::new("u1", "Alice");
    alice.coins = 5;
    alice.weights = HashMap::from([("m1".to_string(), 1.5), ("m5".to_string(), 1.3)]);
    alice.per_movie_coins = HashMap::from([("m3".to_string(), 1)]);

    let mut bob = Player::new("u2", "Bob");
    bob.coins = 2;
    bob.weights = HashMap::from([("m4".to_string(), 2.0), ("m7".to_string(), 1.8)]);
    bob.per_movie_coins = HashMap::from([("m4".to_string(), 2)]);

    vec![alice, bob]
}

pub fn default_roster() -> Roster {
    Roster::new(default_movies(), default_players())
}
