//! Integration test: probability properties
//!
//! Checks the fairness/coin pool split over randomized rosters.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use roulette::selection::{compute_odds, pick_weighted, total_probability};
use roulette::{FloorPolicy, Movie, Player};

const TOLERANCE: f64 = 1e-9;

fn random_roster(rng: &mut ChaCha8Rng, with_coins: bool) -> (Vec<Movie>, Vec<Player>) {
    let owners = ["u1", "u2"];
    let movie_count = rng.gen_range(1..12);
    let movies: Vec<Movie> = (0..movie_count)
        .map(|i| Movie {
            id: format!("m{i}"),
            title: format!("Movie {i}"),
            poster: String::new(),
            owner_id: owners[rng.gen_range(0..owners.len())].to_string(),
            genre: None,
            tmdb_id: None,
        })
        .collect();

    let players = owners
        .iter()
        .map(|id| {
            let mut player = Player::new(*id, *id);
            if with_coins {
                player.coins = rng.gen_range(0..20);
                for movie in &movies {
                    if rng.gen_bool(0.5) {
                        let weight = rng.gen_range(0.0..4.0);
                        player.weights.insert(movie.id.clone(), weight);
                    }
                    if rng.gen_bool(0.2) {
                        let stake = rng.gen_range(0..5);
                        player.per_movie_coins.insert(movie.id.clone(), stake);
                    }
                }
            }
            player
        })
        .collect();

    (movies, players)
}

fn owners_with_movies(movies: &[Movie]) -> usize {
    let mut owners: Vec<&str> = movies.iter().map(|m| m.owner_id.as_str()).collect();
    owners.sort_unstable();
    owners.dedup();
    owners.len().min(2)
}

#[test]
fn test_weights_are_never_negative() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..500 {
        let (movies, players) = random_roster(&mut rng, true);
        let odds = compute_odds(&movies, &players, FloorPolicy::Fixed);
        assert_eq!(odds.len(), movies.len());
        assert!(odds.iter().all(|o| o.probability() >= 0.0));
    }
}

#[test]
fn test_sum_matches_fairness_plus_coin_pool() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..500 {
        let (movies, players) = random_roster(&mut rng, true);
        let odds = compute_odds(&movies, &players, FloorPolicy::Fixed);
        let any_score = odds.iter().any(|o| o.coin_score > 0.0);
        let expected =
            0.45 * owners_with_movies(&movies) as f64 + if any_score { 0.10 } else { 0.0 };
        assert!(
            (total_probability(&odds) - expected).abs() < TOLERANCE,
            "expected {expected}, got {}",
            total_probability(&odds)
        );
    }
}

#[test]
fn test_without_coins_rolls_past_floor_hit_last_movie() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..200 {
        let (movies, players) = random_roster(&mut rng, false);
        let odds = compute_odds(&movies, &players, FloorPolicy::Fixed);
        let total = total_probability(&odds);
        assert!(total <= 0.9 + TOLERANCE);

        let roll = rng.gen_range(total + 1e-6..=1.0);
        let picked = pick_weighted(&odds, roll).unwrap();
        assert_eq!(picked.id, movies.last().unwrap().id);
    }
}

#[test]
fn test_roll_of_one_with_ninety_percent_total_picks_last() {
    let (movies, players) = {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let (mut movies, players) = random_roster(&mut rng, false);
        movies[0].owner_id = "u1".to_string();
        movies.push(Movie {
            id: "tail".to_string(),
            title: "Tail".to_string(),
            poster: String::new(),
            owner_id: "u2".to_string(),
            genre: None,
            tmdb_id: None,
        });
        (movies, players)
    };
    let odds = compute_odds(&movies, &players, FloorPolicy::Fixed);
    assert!((total_probability(&odds) - 0.9).abs() < TOLERANCE);
    assert_eq!(pick_weighted(&odds, 1.0).unwrap().id, "tail");
}

#[test]
fn test_even_split_sums_to_one_with_coins() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    for _ in 0..200 {
        let (movies, mut players) = random_roster(&mut rng, true);
        // Guarantee a positive coin score
        players[0].per_movie_coins.insert(movies[0].id.clone(), 1);
        let odds = compute_odds(&movies, &players, FloorPolicy::EvenSplit);
        assert!((total_probability(&odds) - 1.0).abs() < TOLERANCE);
    }
}
