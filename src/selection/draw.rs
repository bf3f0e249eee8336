//! Weighted selector: one cumulative-distribution draw per spin.

use super::types::MovieOdds;
use crate::roster::Movie;
use rand::Rng;

/// Pick a movie for a roll in [0, 1).
///
/// Walks the odds in order and takes the first movie whose running total
/// reaches `roll`. When the odds sum to less than the roll (empty coin
/// pool), the last movie wins; the distribution is not renormalized.
/// Returns None only for empty odds.
pub fn pick_weighted<'a>(odds: &[MovieOdds<'a>], roll: f64) -> Option<&'a Movie> {
    let mut acc = 0.0;
    for entry in odds {
        acc += entry.probability();
        if roll <= acc {
            return Some(entry.movie);
        }
    }

    let last = odds.last()?;
    log::debug!(
        "Roll {roll:.4} exceeded cumulative odds {acc:.4}, falling back to last movie {}",
        last.movie.id
    );
    Some(last.movie)
}

/// Draw a movie using one fresh sample from `rng`.
pub fn draw<'a, R: Rng>(odds: &[MovieOdds<'a>], rng: &mut R) -> Option<&'a Movie> {
    if odds.is_empty() {
        return None;
    }
    let roll = rng.gen::<f64>();
    pick_weighted(odds, roll)
}
