use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::action::{Action, PlayerId};
use crate::card::{Card, DEFAULT_PLAYERS};
use crate::deck::Deck;
use crate::encoding::GameFeatures;
use crate::error::{GameError, InvalidAction};
use crate::player::Player;
use crate::score;
use crate::state::{GameSettings, GameStateView, GameStatus};

const DEFAULT_SEED: u64 = 0x5EED_5EED_5EED_5EED;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub num_players: usize,
    pub seed: u64,
}

impl GameConfig {
    pub fn new(num_players: usize, seed: u64) -> Result<Self, GameError> {
        GameSettings::new(num_players)?;
        Ok(Self { num_players, seed })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_players: DEFAULT_PLAYERS,
            seed: DEFAULT_SEED,
        }
    }
}

/// Builder that enables deterministic deck injection for testing and RL experiments.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new(num_players: usize) -> Result<Self, GameError> {
        Ok(Self {
            config: GameConfig::new(num_players, DEFAULT_SEED)?,
            deck: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Force the draw order instead of shuffling. The seed is ignored in that case.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

/// Core No Thanks game engine.
///
/// Not internally synchronized: hosts sharing a game across threads must serialize calls
/// to [`Game::draw`] and [`Game::pass`].
#[derive(Clone, Debug)]
pub struct Game {
    settings: GameSettings,
    deck: Deck,
    players: Vec<Player>,
    current_turn: PlayerId,
    pot: u32,
}

impl Game {
    pub fn builder(num_players: usize) -> Result<GameBuilder, GameError> {
        GameBuilder::new(num_players)
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder { config, deck: None }.build()
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder { config, deck } = builder;
        let settings = GameSettings::new(config.num_players)?;
        let deck = match deck {
            Some(cards) => Deck::from_cards(cards)?,
            None => Deck::shuffled(&mut StdRng::seed_from_u64(config.seed)),
        };
        let players = (0..settings.num_players).map(Player::new).collect();
        log::debug!(
            "new game: {} players, {} cards, seed {:#x}",
            settings.num_players,
            deck.len(),
            config.seed
        );
        Ok(Self {
            settings: GameSettings {
                deck_size: deck.len(),
                ..settings
            },
            deck,
            players,
            current_turn: 0,
            pot: 0,
        })
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn is_over(&self) -> bool {
        self.deck.is_exhausted()
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(winner) => GameStatus::Finished { winner },
            None => GameStatus::Ongoing,
        }
    }

    /// Lowest score wins once the deck is exhausted; ties go to the lowest id.
    pub fn winner(&self) -> Option<PlayerId> {
        if self.is_over() {
            score::winner(&self.players)
        } else {
            None
        }
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_turn]
    }

    pub fn current_turn(&self) -> PlayerId {
        self.current_turn
    }

    /// Card on offer, `None` once the game is over.
    pub fn current_card(&self) -> Option<Card> {
        self.deck.current()
    }

    /// Chips lying on the exposed card.
    pub fn current_pot(&self) -> u32 {
        self.pot
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.players.get(id).ok_or(GameError::InvalidPlayer(id))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Number of cards taken so far.
    pub fn draws(&self) -> usize {
        self.deck.dealt()
    }

    pub fn scores(&self) -> Vec<i32> {
        self.players.iter().map(Player::score).collect()
    }

    /// Chips held by players plus the pot.
    pub fn total_chips(&self) -> u32 {
        self.players.iter().map(Player::chips).sum::<u32>() + self.pot
    }

    /// Take the exposed card along with the pot and hand the turn on.
    pub fn draw(&mut self) -> Result<(), GameError> {
        let card = self.deck.advance().ok_or(GameError::GameOver)?;
        let pot = std::mem::take(&mut self.pot);
        self.players[self.current_turn].take(card, pot);
        log::debug!(
            "player {} takes {} with {} chips",
            self.current_turn,
            card,
            pot
        );
        self.end_turn();
        if self.is_over() {
            log::info!("game over, scores {:?}", self.scores());
        }
        Ok(())
    }

    /// Pay one chip onto the exposed card and hand the turn on.
    pub fn pass(&mut self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let player = &mut self.players[self.current_turn];
        if !player.can_pass() {
            return Err(InvalidAction::NoChips {
                player: self.current_turn,
            }
            .into());
        }
        player.pay_chip();
        self.pot += 1;
        log::debug!(
            "player {} passes, pot now {}",
            self.current_turn,
            self.pot
        );
        self.end_turn();
        Ok(())
    }

    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_over() {
            return Vec::new();
        }
        if self.current_player().can_pass() {
            vec![Action::Pass, Action::Take]
        } else {
            vec![Action::Take]
        }
    }

    pub fn apply_action(&mut self, player: PlayerId, action: Action) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if player >= self.players.len() {
            return Err(GameError::InvalidPlayer(player));
        }
        if player != self.current_turn {
            return Err(GameError::NotPlayersTurn);
        }
        match action {
            Action::Pass => self.pass(),
            Action::Take => self.draw(),
        }
    }

    pub fn features(&self) -> GameFeatures {
        GameFeatures {
            card: self.current_card(),
            pot: self.pot,
            players: self.players.iter().map(Player::features).collect(),
        }
    }

    /// `[card, pot]` followed by every player's vector in id order.
    pub fn as_vector(&self) -> Vec<i32> {
        self.features().to_vec()
    }

    pub fn state_view(&self) -> GameStateView {
        GameStateView {
            settings: self.settings,
            status: self.status(),
            current_player: self.current_turn,
            current_card: self.current_card(),
            pot: self.pot,
            cards_remaining: self.deck.remaining(),
            players: self.players.iter().map(Player::view).collect(),
        }
    }

    fn end_turn(&mut self) {
        self.current_turn = (self.current_turn + 1) % self.players.len();
    }
}
