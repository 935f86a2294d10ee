use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{CARD_RANGE, Card, DECK_SIZE, all_cards};
use crate::error::GameError;

/// Draw order for one game plus a cursor pointing at the exposed card.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
    removed: Vec<Card>,
    cursor: usize,
}

// Decks are never empty, so there is no `is_empty`.
#[allow(clippy::len_without_is_empty)]
impl Deck {
    /// Shuffles the full universe and sets aside the trailing cards that never enter play.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards: Vec<Card> = all_cards().collect();
        cards.shuffle(rng);
        let removed = cards.split_off(DECK_SIZE);
        Self {
            cards,
            removed,
            cursor: 0,
        }
    }

    /// Uses a caller-provided draw order. Intended for deterministic tests and replays of
    /// known deals; the cards must be distinct and no more than a regular deck holds.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, GameError> {
        if cards.is_empty() {
            return Err(GameError::InvalidDeck("deck must contain at least one card"));
        }
        if cards.len() > DECK_SIZE {
            return Err(GameError::InvalidDeck("deck holds more cards than a regular game"));
        }
        let mut seen = HashSet::with_capacity(cards.len());
        if !cards.iter().all(|card| seen.insert(*card)) {
            return Err(GameError::InvalidDeck("deck contains duplicate cards"));
        }
        let removed = all_cards().filter(|card| !seen.contains(card)).collect();
        Ok(Self {
            cards,
            removed,
            cursor: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Card currently face up, if any remain.
    pub fn current(&self) -> Option<Card> {
        self.cards.get(self.cursor).copied()
    }

    /// Number of cards already taken.
    pub fn dealt(&self) -> usize {
        self.cursor
    }

    /// Cards still to be taken, the exposed one included.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.cards.len()
    }

    /// Cards out of play for this game.
    pub fn removed(&self) -> &[Card] {
        &self.removed
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Takes the exposed card and moves the cursor past it.
    pub(crate) fn advance(&mut self) -> Option<Card> {
        let card = self.current()?;
        self.cursor += 1;
        Some(card)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn cards(values: &[u8]) -> Vec<Card> {
        values.iter().map(|v| Card::new(*v).unwrap()).collect()
    }

    #[test]
    fn shuffled_deck_partitions_universe() {
        let deck = Deck::shuffled(&mut StdRng::seed_from_u64(7));
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck.removed().len(), CARD_RANGE - DECK_SIZE);
        let mut all: Vec<Card> = deck.cards().iter().chain(deck.removed()).copied().collect();
        all.sort();
        assert_eq!(all, all_cards().collect::<Vec<_>>());
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let a = Deck::shuffled(&mut StdRng::seed_from_u64(42));
        let b = Deck::shuffled(&mut StdRng::seed_from_u64(42));
        assert_eq!(a.cards(), b.cards());
    }

    #[test]
    fn advance_walks_the_draw_order() {
        let mut deck = Deck::from_cards(cards(&[5, 10])).unwrap();
        assert_eq!(deck.current().map(|c| c.value()), Some(5));
        assert_eq!(deck.advance().map(|c| c.value()), Some(5));
        assert_eq!(deck.remaining(), 1);
        assert_eq!(deck.advance().map(|c| c.value()), Some(10));
        assert!(deck.is_exhausted());
        assert_eq!(deck.current(), None);
        assert_eq!(deck.advance(), None);
        assert_eq!(deck.dealt(), 2);
    }

    #[test]
    fn forced_deck_validation() {
        assert!(matches!(Deck::from_cards(Vec::new()), Err(GameError::InvalidDeck(_))));
        assert!(matches!(
            Deck::from_cards(cards(&[5, 5])),
            Err(GameError::InvalidDeck(_))
        ));
        let too_many: Vec<Card> = all_cards().take(DECK_SIZE + 1).collect();
        assert!(matches!(Deck::from_cards(too_many), Err(GameError::InvalidDeck(_))));
        let deck = Deck::from_cards(cards(&[5, 10])).unwrap();
        assert_eq!(deck.removed().len(), CARD_RANGE - 2);
    }
}
