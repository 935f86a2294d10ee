use crate::action::Action;
use crate::card::{CARD_RANGE, Card};
use crate::error::{GameError, InvalidAction};
use crate::player::Player;

/// Score and chip count precede the membership flags.
pub const PLAYER_HEADER_FEATURES: usize = 2;
pub const PLAYER_FEATURES: usize = PLAYER_HEADER_FEATURES + CARD_RANGE;
/// Exposed card and pot precede the per-player blocks.
pub const GAME_HEADER_FEATURES: usize = 2;

pub const PASS_INDEX: usize = 0;
pub const TAKE_INDEX: usize = 1;
pub const MAX_ACTIONS: usize = 2;

/// Length of the flattened game vector for `num_players` seats.
pub const fn game_features(num_players: usize) -> usize {
    GAME_HEADER_FEATURES + num_players * PLAYER_FEATURES
}

/// Fixed-schema encoding of one player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerFeatures {
    pub score: i32,
    pub chips: u32,
    /// `held[i] == 1` when the player owns card value `i + 3`.
    pub held: [u8; CARD_RANGE],
}

impl PlayerFeatures {
    pub fn from_player(player: &Player) -> Self {
        let mut held = [0u8; CARD_RANGE];
        for card in player.cards() {
            held[card.index()] = 1;
        }
        Self {
            score: player.score(),
            chips: player.chips(),
            held,
        }
    }

    pub fn to_array(&self) -> [i32; PLAYER_FEATURES] {
        let mut out = [0i32; PLAYER_FEATURES];
        out[0] = self.score;
        out[1] = self.chips as i32;
        for (slot, flag) in out[PLAYER_HEADER_FEATURES..].iter_mut().zip(self.held) {
            *slot = i32::from(flag);
        }
        out
    }
}

/// Fixed-schema encoding of the whole table, players in id order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameFeatures {
    /// Exposed card; `None` once the deck is exhausted.
    pub card: Option<Card>,
    pub pot: u32,
    pub players: Vec<PlayerFeatures>,
}

impl GameFeatures {
    pub fn feature_count(&self) -> usize {
        game_features(self.players.len())
    }

    /// Flattens to `[card, pot, player_0.., player_1.., ..]`. A finished game encodes the
    /// card slot as 0, which no real card uses.
    pub fn to_vec(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.feature_count());
        out.push(self.card.map(|c| i32::from(c.value())).unwrap_or(0));
        out.push(self.pot as i32);
        for player in &self.players {
            out.extend_from_slice(&player.to_array());
        }
        debug_assert_eq!(out.len(), self.feature_count());
        out
    }
}

/// Binary action space shared by the environment adapter and bots.
pub struct ActionSpace;

impl ActionSpace {
    pub const MAX: usize = MAX_ACTIONS;

    pub fn action_index(action: Action) -> usize {
        match action {
            Action::Pass => PASS_INDEX,
            Action::Take => TAKE_INDEX,
        }
    }

    pub fn index_to_action(index: usize) -> Result<Action, GameError> {
        match index {
            PASS_INDEX => Ok(Action::Pass),
            TAKE_INDEX => Ok(Action::Take),
            other => Err(InvalidAction::UnknownIndex(other).into()),
        }
    }

    pub fn mask(legal: &[Action]) -> [u8; MAX_ACTIONS] {
        let mut mask = [0u8; MAX_ACTIONS];
        for action in legal {
            mask[Self::action_index(*action)] = 1;
        }
        mask
    }
}
