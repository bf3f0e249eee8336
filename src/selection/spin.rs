//! Spin orchestration: snapshot, odds, draw, coin reward, history.

use super::draw::pick_weighted;
use super::economy::{reward_opponent, CoinTransfer};
use super::history::History;
use super::odds::{compute_odds, total_probability};
use super::types::{FloorPolicy, SpinRecord};
use crate::core::constants::PROBABILITY_EPSILON;
use crate::error::SpinError;
use crate::roster::Roster;
use crate::utils::new_id;
use chrono::Utc;
use rand::Rng;

/// Everything a spin changed
#[derive(Debug, Clone, PartialEq)]
pub struct SpinResult {
    pub record: SpinRecord,
    pub transfer: Option<CoinTransfer>,
}

/// Spin once using a fresh sample from `rng`.
///
/// On success the opponent's coins and the history have both been updated.
/// On `NoEligibleItems` neither has been touched.
pub fn resolve_selection<R: Rng>(
    roster: &mut Roster,
    history: &mut History,
    policy: FloorPolicy,
    rng: &mut R,
) -> Result<SpinResult, SpinError> {
    let roll = rng.gen::<f64>();
    resolve_with_roll(roster, history, policy, roll, Utc::now().timestamp_millis())
}

/// Spin with an explicit roll and timestamp.
pub fn resolve_with_roll(
    roster: &mut Roster,
    history: &mut History,
    policy: FloorPolicy,
    roll: f64,
    timestamp: i64,
) -> Result<SpinResult, SpinError> {
    let movies = roster.eligible_movies();
    if movies.is_empty() {
        log::info!("Spin skipped: no eligible movies");
        return Err(SpinError::NoEligibleItems);
    }

    let winner = {
        let odds = compute_odds(&movies, &roster.players, policy);
        let total = total_probability(&odds);
        for entry in &odds {
            log::debug!(
                "{} ({}) p={:.4} fairness={:.4} coin_share={:.4}",
                entry.movie.id,
                entry.movie.owner_id,
                entry.probability(),
                entry.fairness,
                entry.coin_share
            );
        }
        if total < 1.0 - PROBABILITY_EPSILON {
            log::debug!("Odds sum to {total:.4}; rolls above that land on the last movie");
        }
        pick_weighted(&odds, roll)
            .cloned()
            .ok_or(SpinError::NoEligibleItems)?
    };

    let transfer = reward_opponent(roster, &winner.owner_id);
    let record = SpinRecord::new(new_id("spin"), &winner, timestamp);
    history.append(record.clone());

    match &transfer {
        Some(t) => log::info!(
            "Spin picked {} ({}) for {}; {} now has {} coins",
            record.movie_title,
            record.movie_id,
            record.selected_owner_id,
            t.player_id,
            t.coins
        ),
        None => log::info!(
            "Spin picked {} ({}) for {}; no opponent to reward",
            record.movie_title,
            record.movie_id,
            record.selected_owner_id
        ),
    }

    Ok(SpinResult { record, transfer })
}
