//! No Thanks game engine with a fixed-schema state encoding for external agents.

pub mod action;
pub mod bot;
pub mod bots;
pub mod card;
pub mod deck;
pub mod encoding;
pub mod env;
pub mod error;
pub mod game;
pub mod player;
pub mod score;
pub mod state;
pub mod visualize;

pub use crate::action::{Action, PlayerId};
pub use crate::bot::Bot;
pub use crate::bots::{HumanBot, RandomBot, create_bot_from_spec, label_for_spec};
pub use crate::card::Card;
pub use crate::deck::Deck;
pub use crate::encoding::{ActionSpace, GameFeatures, PlayerFeatures};
pub use crate::env::{CardGameEnv, Observation, run_episode};
pub use crate::error::{GameError, InvalidAction};
pub use crate::game::{Game, GameBuilder, GameConfig};
pub use crate::player::Player;
pub use crate::score::{WINNER_BONUS, rewards, standings, winner};
pub use crate::state::{GameSettings, GameStateView, GameStatus, PlayerView};
pub use crate::visualize::{VisualOptions, describe_action, render_state};
