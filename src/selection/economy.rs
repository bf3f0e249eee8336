//! Coin economy: the losing side earns a coin after every spin.

use crate::core::constants::OPPONENT_SPIN_REWARD;
use crate::roster::{Player, Roster};

/// A coin payout applied to one player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinTransfer {
    pub player_id: String,
    pub previous_coins: u32,
    pub coins: u32,
}

/// First player in stored order who is not the winning owner.
pub fn find_opponent<'a>(players: &'a [Player], owner_id: &str) -> Option<&'a Player> {
    players.iter().find(|p| p.id != owner_id)
}

/// Pay the spin reward to the opponent of `owner_id`.
/// Returns None without touching the roster when nobody else is playing.
pub fn reward_opponent(roster: &mut Roster, owner_id: &str) -> Option<CoinTransfer> {
    let opponent = find_opponent(&roster.players, owner_id)?;
    let transfer = CoinTransfer {
        player_id: opponent.id.clone(),
        previous_coins: opponent.coins,
        coins: opponent.coins.saturating_add(OPPONENT_SPIN_REWARD),
    };
    roster.adjust_player_coins(&transfer.player_id, transfer.coins);
    Some(transfer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_with(players: &[(&str, u32)]) -> Roster {
        let players = players
            .iter()
            .map(|(id, coins)| {
                let mut p = Player::new(*id, *id);
                p.coins = *coins;
                p
            })
            .collect();
        Roster::new(Vec::new(), players)
    }

    #[test]
    fn test_opponent_gains_one_coin() {
        let mut roster = roster_with(&[("u1", 5), ("u2", 2)]);
        let transfer = reward_opponent(&mut roster, "u1").unwrap();
        assert_eq!(transfer.player_id, "u2");
        assert_eq!(transfer.previous_coins, 2);
        assert_eq!(roster.player("u2").unwrap().coins, 3);
        assert_eq!(roster.player("u1").unwrap().coins, 5);
    }

    #[test]
    fn test_first_non_owner_is_rewarded() {
        let mut roster = roster_with(&[("u1", 0), ("u2", 0), ("u3", 0)]);
        reward_opponent(&mut roster, "u2").unwrap();
        assert_eq!(roster.player("u1").unwrap().coins, 1);
        assert_eq!(roster.player("u2").unwrap().coins, 0);
        assert_eq!(roster.player("u3").unwrap().coins, 0);
    }

    #[test]
    fn test_single_player_pool_has_no_opponent() {
        let mut roster = roster_with(&[("u1", 4)]);
        assert!(reward_opponent(&mut roster, "u1").is_none());
        assert_eq!(roster.player("u1").unwrap().coins, 4);
    }

    #[test]
    fn test_reward_saturates_at_max() {
        let mut roster = roster_with(&[("u1", 0), ("u2", u32::MAX)]);
        let transfer = reward_opponent(&mut roster, "u1").unwrap();
        assert_eq!(transfer.coins, u32::MAX);
    }
}
