//! Scoring utilities for finished (or in-progress) games.
//!
//! A player's score is the sum of their cards minus their remaining chips, lower is better.
//! Ties on the lowest score go to the lowest player id.

use crate::action::PlayerId;
use crate::player::Player;

/// Bonus added to the winner's reward by the environment adapter.
pub const WINNER_BONUS: i32 = 500;

/// Players ordered best-first: ascending score, then ascending id.
pub fn standings(players: &[Player]) -> Vec<PlayerId> {
    let mut order: Vec<(i32, PlayerId)> = players.iter().map(|p| (p.score(), p.id())).collect();
    order.sort_unstable();
    order.into_iter().map(|(_, id)| id).collect()
}

pub fn winner(players: &[Player]) -> Option<PlayerId> {
    players
        .iter()
        .min_by_key(|p| (p.score(), p.id()))
        .map(Player::id)
}

/// Negated scores, with `bonus` added for the winner. Indexed by player id.
pub fn rewards(players: &[Player], bonus: i32) -> Vec<i32> {
    let best = winner(players);
    players
        .iter()
        .map(|p| {
            let base = -p.score();
            if Some(p.id()) == best { base + bonus } else { base }
        })
        .collect()
}
