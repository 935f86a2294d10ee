use crate::action::PlayerId;
use crate::card::{Card, STARTING_CHIPS};
use crate::encoding::{PLAYER_FEATURES, PlayerFeatures};
use crate::state::PlayerView;

/// Chips and collected cards of one seat. Only the engine mutates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    chips: u32,
    cards: Vec<Card>,
}

impl Player {
    pub(crate) fn new(id: PlayerId) -> Self {
        Self {
            id,
            chips: STARTING_CHIPS,
            cards: Vec::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn chips(&self) -> u32 {
        self.chips
    }

    /// Collected cards in the order they were taken.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_total(&self) -> i32 {
        self.cards.iter().map(|c| i32::from(c.value())).sum()
    }

    /// A player without chips is forced to take the card.
    pub fn can_pass(&self) -> bool {
        self.chips > 0
    }

    /// Card total minus remaining chips. Lower is better and may be negative.
    pub fn score(&self) -> i32 {
        self.card_total() - self.chips as i32
    }

    pub fn features(&self) -> PlayerFeatures {
        PlayerFeatures::from_player(self)
    }

    /// `[score, chips, held(3), .., held(35)]`.
    pub fn as_vector(&self) -> [i32; PLAYER_FEATURES] {
        self.features().to_array()
    }

    pub fn view(&self) -> PlayerView {
        let mut cards = self.cards.clone();
        cards.sort();
        PlayerView {
            id: self.id,
            chips: self.chips,
            cards,
            score: self.score(),
        }
    }

    pub(crate) fn take(&mut self, card: Card, pot: u32) {
        self.chips += pot;
        self.cards.push(card);
    }

    pub(crate) fn pay_chip(&mut self) {
        debug_assert!(self.can_pass());
        self.chips -= 1;
    }
}
