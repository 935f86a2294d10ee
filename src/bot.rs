use crate::action::Action;
use crate::state::GameStateView;

/// Interface for anything that picks moves for a seat: humans at a terminal, scripted
/// players, or adapters around external agents.
pub trait Bot {
    fn select_action(&mut self, state: &GameStateView, legal_actions: &[Action]) -> Action;
}
