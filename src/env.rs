//! Turn-based multi-agent environment over [`Game`].
//!
//! Agents act one at a time in seat order. Rewards are zero until the deck runs out; then
//! every agent receives its negated score and the winner an extra [`WINNER_BONUS`]. After
//! that each terminated agent is stepped once with `None` to leave the iteration.

use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::encoding::{ActionSpace, game_features};
use crate::error::{GameError, InvalidAction};
use crate::game::{Game, GameConfig};
use crate::score::{self, WINNER_BONUS};

/// What an agent sees before acting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub observation: Vec<i32>,
    /// `[pass, take]` legality for the selected agent, empty for everyone else.
    pub action_mask: Vec<u8>,
}

/// Snapshot returned by [`CardGameEnv::last`] for the selected agent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub agent: PlayerId,
    pub observation: Observation,
    pub reward: i32,
    pub terminated: bool,
}

pub struct CardGameEnv {
    game: Game,
    bonus: i32,
    agent_selection: PlayerId,
    active: Vec<bool>,
    rewards: Vec<i32>,
    cumulative_rewards: Vec<i32>,
    terminations: Vec<bool>,
}

impl CardGameEnv {
    pub fn new(num_players: usize, seed: u64) -> Result<Self, GameError> {
        let game = Game::new(GameConfig::new(num_players, seed)?)?;
        Ok(Self::from_game(game))
    }

    /// Wraps an existing game, e.g. one built with a forced deck.
    /// A game that is already over starts with every agent terminated and rewarded.
    pub fn from_game(game: Game) -> Self {
        let num_players = game.players().len();
        let mut env = Self {
            agent_selection: game.current_turn(),
            game,
            bonus: WINNER_BONUS,
            active: vec![true; num_players],
            rewards: vec![0; num_players],
            cumulative_rewards: vec![0; num_players],
            terminations: vec![false; num_players],
        };
        if env.game.is_over() {
            env.finish();
        }
        env
    }

    pub fn with_bonus(mut self, bonus: i32) -> Self {
        self.bonus = bonus;
        if self.game.is_over() {
            self.cumulative_rewards.iter_mut().for_each(|r| *r = 0);
            self.finish();
        }
        self
    }

    /// Starts a fresh game with the same number of agents.
    pub fn reset(&mut self, seed: u64) -> Result<(), GameError> {
        let game = Game::new(GameConfig::new(self.num_agents(), seed)?)?;
        *self = Self::from_game(game).with_bonus(self.bonus);
        Ok(())
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn num_agents(&self) -> usize {
        self.active.len()
    }

    pub fn agent_selection(&self) -> PlayerId {
        self.agent_selection
    }

    pub fn observation_size(&self) -> usize {
        game_features(self.num_agents())
    }

    pub fn action_size(&self) -> usize {
        ActionSpace::MAX
    }

    pub fn rewards(&self) -> &[i32] {
        &self.rewards
    }

    pub fn cumulative_rewards(&self) -> &[i32] {
        &self.cumulative_rewards
    }

    pub fn terminations(&self) -> &[bool] {
        &self.terminations
    }

    /// True once every terminated agent has taken its final `None` step.
    pub fn is_done(&self) -> bool {
        self.active.iter().all(|a| !a)
    }

    pub fn observe(&self, agent: PlayerId) -> Result<Observation, GameError> {
        if agent >= self.num_agents() {
            return Err(GameError::InvalidPlayer(agent));
        }
        let action_mask = if agent == self.agent_selection && !self.game.is_over() {
            ActionSpace::mask(&self.game.legal_actions()).to_vec()
        } else {
            Vec::new()
        };
        Ok(Observation {
            observation: self.game.as_vector(),
            action_mask,
        })
    }

    pub fn last(&self) -> Result<Step, GameError> {
        let agent = self.agent_selection;
        Ok(Step {
            agent,
            observation: self.observe(agent)?,
            reward: self.cumulative_rewards[agent],
            terminated: self.terminations[agent],
        })
    }

    /// Applies the action index for the selected agent: 0 passes, 1 takes. Terminated
    /// agents must step with `None`.
    pub fn step(&mut self, action: Option<usize>) -> Result<(), GameError> {
        if self.is_done() {
            return Err(GameError::GameOver);
        }
        let agent = self.agent_selection;
        if self.terminations[agent] {
            if action.is_some() {
                return Err(GameError::GameOver);
            }
            self.active[agent] = false;
            self.select_next_active(agent);
            return Ok(());
        }

        let index = action.ok_or(InvalidAction::MissingAction)?;
        let action = ActionSpace::index_to_action(index)?;
        self.game.apply_action(agent, action)?;
        log::debug!("agent {agent} played {action:?}");

        if self.game.is_over() {
            self.finish();
        }
        self.agent_selection = self.game.current_turn();
        Ok(())
    }

    fn finish(&mut self) {
        self.rewards = score::rewards(self.game.players(), self.bonus);
        for (total, reward) in self.cumulative_rewards.iter_mut().zip(&self.rewards) {
            *total += reward;
        }
        self.terminations.iter_mut().for_each(|t| *t = true);
        log::info!("episode finished, rewards {:?}", self.rewards);
    }

    fn select_next_active(&mut self, from: PlayerId) {
        let n = self.num_agents();
        if let Some(next) = (1..=n)
            .map(|offset| (from + offset) % n)
            .find(|idx| self.active[*idx])
        {
            self.agent_selection = next;
        }
    }
}

/// Plays one episode to completion, letting `choose` pick an action index for each
/// non-terminated step. Returns every agent's reward as reported on its final step.
pub fn run_episode<F>(env: &mut CardGameEnv, mut choose: F) -> Result<Vec<i32>, GameError>
where
    F: FnMut(&Observation) -> usize,
{
    let mut final_rewards = vec![0; env.num_agents()];
    while !env.is_done() {
        let step = env.last()?;
        if step.terminated {
            final_rewards[step.agent] = step.reward;
            env.step(None)?;
        } else {
            let index = choose(&step.observation);
            env.step(Some(index))?;
        }
    }
    Ok(final_rewards)
}
