use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Representation of a No Thanks card. The value is both its identity and its point cost.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

pub const MIN_CARD_VALUE: u8 = 3;
pub const MAX_CARD_VALUE: u8 = 35;
/// Number of distinct values in the card universe.
pub const CARD_RANGE: usize = (MAX_CARD_VALUE - MIN_CARD_VALUE + 1) as usize;
/// Cards dropped face-down from the shuffled universe before play starts.
pub const REMOVED_CARDS: usize = 9;
pub const DECK_SIZE: usize = CARD_RANGE - REMOVED_CARDS;
pub const STARTING_CHIPS: u32 = 11;
pub const DEFAULT_PLAYERS: usize = 4;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 7;

impl Card {
    pub fn new(value: u8) -> Result<Self, GameError> {
        if (MIN_CARD_VALUE..=MAX_CARD_VALUE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GameError::InvalidCard(value))
        }
    }

    #[inline]
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Position of the card within the ascending universe, in `0..CARD_RANGE`.
    #[inline]
    pub fn index(&self) -> usize {
        (self.0 - MIN_CARD_VALUE) as usize
    }
}

impl TryFrom<u8> for Card {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every card value in ascending order (unshuffled).
pub fn all_cards() -> impl Iterator<Item = Card> {
    (MIN_CARD_VALUE..=MAX_CARD_VALUE).map(Card)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_values_outside_range() {
        assert_eq!(Card::new(2), Err(GameError::InvalidCard(2)));
        assert_eq!(Card::new(36), Err(GameError::InvalidCard(36)));
        assert_eq!(Card::new(3).map(|c| c.index()), Ok(0));
        assert_eq!(Card::new(35).map(|c| c.index()), Ok(CARD_RANGE - 1));
    }

    #[test]
    fn universe_is_ascending_and_complete() {
        let values: Vec<u8> = all_cards().map(|c| c.value()).collect();
        assert_eq!(values.len(), 33);
        assert_eq!(values.first(), Some(&3));
        assert_eq!(values.last(), Some(&35));
        assert!(values.windows(2).all(|w| w[0] + 1 == w[1]));
        assert_eq!(DECK_SIZE, 24);
    }
}
