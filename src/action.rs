use serde::{Deserialize, Serialize};

/// Zero-based index of a player within the game.
pub type PlayerId = usize;

/// Action available to an agent during its turn.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Decline the exposed card, paying one chip onto it.
    Pass,
    /// Take the exposed card together with every chip on it.
    Take,
}
