//! Probability calculator: fairness pool plus coin pool.
//!
//! Each owner gets a flat fairness share split evenly across their movies,
//! so contributing more movies never buys more total odds. A further fixed
//! coin pool is spread by coin score, which caps what coins can buy.

use super::types::{FloorPolicy, MovieOdds};
use crate::core::constants::{COIN_POOL_SHARE, FAIRNESS_MAX_OWNERS, FAIRNESS_SHARE_PER_OWNER};
use crate::roster::{Movie, Player};

/// Movie counts per owner, in order of first appearance.
fn owner_counts(movies: &[Movie]) -> Vec<(&str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for movie in movies {
        let owner = movie.owner_id.as_str();
        match counts.iter_mut().find(|(id, _)| *id == owner) {
            Some((_, count)) => *count += 1,
            None => counts.push((owner, 1)),
        }
    }
    counts
}

/// Total fairness share granted to the owner at `rank` (0-based, by first
/// appearance) among `owners` owners with movies.
pub fn owner_floor_share(policy: FloorPolicy, rank: usize, owners: usize) -> f64 {
    match policy {
        FloorPolicy::Fixed if rank < FAIRNESS_MAX_OWNERS => FAIRNESS_SHARE_PER_OWNER,
        FloorPolicy::Fixed => 0.0,
        FloorPolicy::EvenSplit if owners > 0 => (1.0 - COIN_POOL_SHARE) / owners as f64,
        FloorPolicy::EvenSplit => 0.0,
    }
}

/// Coin score of one movie summed over every player.
///
/// A weight above neutral spends `coins * (weight - 1)`; a direct stake adds
/// its coins as-is. Weights at or below 1.0 contribute nothing. Scores that
/// overflow are capped at `f64::MAX`.
pub fn coin_score(movie_id: &str, players: &[Player]) -> f64 {
    let score: f64 = players
        .iter()
        .map(|player| {
            let mut score = 0.0;
            let weight = player.weight_of(movie_id);
            if weight > 1.0 && player.coins > 0 {
                score += player.coins as f64 * (weight - 1.0);
            }
            let stake = player.stake_on(movie_id);
            if stake > 0 {
                score += stake as f64;
            }
            score
        })
        .sum();
    score.min(f64::MAX)
}

/// Compute the selection odds for every movie, in the order supplied.
///
/// Sums to the fairness total plus 0.10 when any coin score is positive,
/// and to the fairness total alone otherwise.
pub fn compute_odds<'a>(
    movies: &'a [Movie],
    players: &[Player],
    policy: FloorPolicy,
) -> Vec<MovieOdds<'a>> {
    if movies.is_empty() {
        return Vec::new();
    }

    let counts = owner_counts(movies);
    let per_movie_floor = |owner_id: &str| -> f64 {
        counts
            .iter()
            .enumerate()
            .find(|(_, (owner, _))| *owner == owner_id)
            .map(|(rank, (_, count))| {
                owner_floor_share(policy, rank, counts.len()) / *count as f64
            })
            .unwrap_or(0.0)
    };

    let scores: Vec<f64> = movies
        .iter()
        .map(|m| coin_score(&m.id, players))
        .collect();

    // Huge scores can overflow the sum; scale them down so the shares stay finite
    let scale = if scores.iter().sum::<f64>().is_finite() {
        1.0
    } else {
        1.0 / (2.0 * scores.len() as f64)
    };
    let total_score: f64 = scores.iter().map(|s| s * scale).sum();

    movies
        .iter()
        .zip(scores)
        .map(|(movie, score)| {
            let coin_share = if total_score > 0.0 {
                COIN_POOL_SHARE * (score * scale / total_score)
            } else {
                0.0
            };
            MovieOdds {
                movie,
                fairness: per_movie_floor(&movie.owner_id),
                coin_score: score,
                coin_share,
            }
        })
        .collect()
}

/// Sum of all probabilities; below 1.0 when the coin pool is empty.
pub fn total_probability(odds: &[MovieOdds<'_>]) -> f64 {
    odds.iter().map(|o| o.probability()).sum()
}
