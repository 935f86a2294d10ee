use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::Action;
use crate::bot::Bot;
use crate::state::GameStateView;

/// Baseline bot that samples uniformly from the legal action set.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_action(&mut self, _state: &GameStateView, legal_actions: &[Action]) -> Action {
        // Take is legal whenever the game is running.
        legal_actions
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Action::Take)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::game::GameBuilder;

    #[test]
    fn only_picks_legal_actions() {
        let game = GameBuilder::new(3).unwrap().with_seed(9).build().unwrap();
        let view = game.state_view();
        let mut bot = RandomBot::new(StdRng::seed_from_u64(1));
        for _ in 0..50 {
            assert_eq!(bot.select_action(&view, &[Action::Take]), Action::Take);
            let chosen = bot.select_action(&view, &[Action::Pass, Action::Take]);
            assert!(matches!(chosen, Action::Pass | Action::Take));
        }
    }
}
