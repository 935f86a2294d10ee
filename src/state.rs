use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::{Card, DECK_SIZE, MAX_PLAYERS, MIN_PLAYERS, STARTING_CHIPS};
use crate::error::GameError;

/// Global constants for a running game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    pub num_players: usize,
    pub deck_size: usize,
    pub starting_chips: u32,
}

impl GameSettings {
    pub fn new(num_players: usize) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::InvalidConfiguration(
                "players must be between 2 and 7",
            ));
        }
        Ok(Self {
            num_players,
            deck_size: DECK_SIZE,
            starting_chips: STARTING_CHIPS,
        })
    }

    /// Chips in circulation; players plus pot always add up to this.
    pub fn total_chips(&self) -> u32 {
        // num_players is bounded by MAX_PLAYERS.
        self.num_players as u32 * self.starting_chips
    }
}

/// Status of the entire game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished { winner: PlayerId },
}

/// Public state of a single player. Everything in No Thanks is open information.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerView {
    pub id: PlayerId,
    pub chips: u32,
    /// Collected cards, ascending.
    pub cards: Vec<Card>,
    pub score: i32,
}

/// Game state snapshot tailored for bots and renderers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub settings: GameSettings,
    pub status: GameStatus,
    pub current_player: PlayerId,
    pub current_card: Option<Card>,
    pub pot: u32,
    pub cards_remaining: usize,
    pub players: Vec<PlayerView>,
}

impl GameStateView {
    pub fn current(&self) -> &PlayerView {
        &self.players[self.current_player]
    }
}
