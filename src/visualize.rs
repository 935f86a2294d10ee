use std::fmt::Write;

use crate::action::Action;
use crate::card::Card;
use crate::state::{GameStateView, GameStatus};

/// Customize state rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_cards: bool,
    pub show_scores: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_cards: true,
            show_scores: true,
        }
    }
}

pub fn render_state(state: &GameStateView) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options(state: &GameStateView, options: VisualOptions) -> String {
    let mut out = String::new();
    let status = match state.status {
        GameStatus::Ongoing => String::from("Ongoing"),
        GameStatus::Finished { winner } => format!("Finished (winner: Player {winner})"),
    };
    let _ = writeln!(out, "Game status: {status}");
    let current = state.current();
    let _ = writeln!(
        out,
        "Current turn: {},  chips: {}",
        current.id, current.chips
    );
    match state.current_card {
        Some(card) => {
            let _ = writeln!(
                out,
                "Card: {card}, chips: {}  |  {} cards left",
                state.pot, state.cards_remaining
            );
        }
        None => {
            let _ = writeln!(out, "Deck exhausted");
        }
    }
    let _ = writeln!(out, "Players:");
    for player in &state.players {
        let marker = if player.id == state.current_player {
            " <- current"
        } else {
            ""
        };
        let _ = write!(out, "  Player {} - chips {}", player.id, player.chips);
        if options.show_scores {
            let _ = write!(out, ", score {}", player.score);
        }
        let _ = writeln!(out, "{marker}");
        if options.show_cards {
            let _ = writeln!(out, "    Cards: {}", format_cards(&player.cards));
        }
    }
    out
}

/// Space separated card values, or `(none)`.
pub fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return String::from("(none)");
    }
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn describe_action(state: &GameStateView, action: &Action) -> String {
    let card = state
        .current_card
        .map(|c| c.to_string())
        .unwrap_or_else(|| String::from("--"));
    match action {
        Action::Pass => format!(
            "Player {} passes on {card} (pot -> {})",
            state.current_player,
            state.pot + 1
        ),
        Action::Take => format!(
            "Player {} takes {card} with {} chips",
            state.current_player, state.pot
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameBuilder;

    #[test]
    fn renders_current_card_and_players() {
        let deck = vec![Card::new(5).unwrap(), Card::new(10).unwrap()];
        let mut game = GameBuilder::new(2).unwrap().with_deck(deck).build().unwrap();
        game.pass().unwrap();
        let view = game.state_view();
        let text = render_state(&view);
        assert!(text.contains("Card: 5, chips: 1"));
        assert!(text.contains("Player 1 - chips 11"));
        assert_eq!(
            describe_action(&view, &Action::Take),
            "Player 1 takes 5 with 1 chips"
        );
    }

    #[test]
    fn format_cards_handles_empty() {
        assert_eq!(format_cards(&[]), "(none)");
    }
}
