use thiserror::Error;

use crate::action::PlayerId;

/// Errors that can occur when manipulating the game state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("player index {0} is out of range")]
    InvalidPlayer(PlayerId),
    #[error("not the specified player's turn")]
    NotPlayersTurn,
    #[error("invalid action: {0}")]
    InvalidAction(#[from] InvalidAction),
    #[error("game is already over")]
    GameOver,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("invalid deck: {0}")]
    InvalidDeck(&'static str),
    #[error("card value {0} is outside the playable range")]
    InvalidCard(u8),
}

/// Details of invalid user actions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("player {player} has no chips left and must take the card")]
    NoChips { player: PlayerId },
    #[error("action index {0} is out of range")]
    UnknownIndex(usize),
    #[error("an action is required while the game is running")]
    MissingAction,
}
