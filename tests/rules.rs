use nothanks::card::{self, DECK_SIZE, STARTING_CHIPS};
use nothanks::{Action, Card, Game, GameBuilder, GameConfig, GameError, GameStatus, InvalidAction};

fn cards(values: &[u8]) -> Result<Vec<Card>, GameError> {
    values.iter().map(|v| Card::new(*v)).collect()
}

#[test]
fn two_player_scenario() -> Result<(), GameError> {
    let mut game = GameBuilder::new(2)?.with_deck(cards(&[5, 10])?).build()?;

    game.pass()?;
    assert_eq!(game.player(0)?.chips(), 10);
    assert_eq!(game.current_pot(), 1);
    assert_eq!(game.current_turn(), 1);
    assert_eq!(game.current_card(), Some(Card::new(5)?));

    game.draw()?;
    assert_eq!(game.player(1)?.cards(), cards(&[5])?.as_slice());
    assert_eq!(game.player(1)?.chips(), 12);
    assert_eq!(game.current_pot(), 0);
    assert_eq!(game.current_turn(), 0);

    game.draw()?;
    assert_eq!(game.player(0)?.cards(), cards(&[10])?.as_slice());
    assert_eq!(game.player(0)?.chips(), 10);
    assert_eq!(game.current_turn(), 1);

    assert!(game.is_over());
    assert_eq!(game.current_card(), None);
    assert_eq!(game.scores(), vec![0, -7]);
    assert_eq!(game.winner(), Some(1));
    assert_eq!(game.status(), GameStatus::Finished { winner: 1 });
    Ok(())
}

#[test]
fn no_actions_after_game_over() -> Result<(), GameError> {
    let mut game = GameBuilder::new(2)?.with_deck(cards(&[7])?).build()?;
    game.draw()?;
    assert!(game.is_over());
    assert_eq!(game.draw(), Err(GameError::GameOver));
    assert_eq!(game.pass(), Err(GameError::GameOver));
    assert_eq!(game.apply_action(1, Action::Take), Err(GameError::GameOver));
    assert!(game.legal_actions().is_empty());
    Ok(())
}

#[test]
fn draw_moves_pot_to_taker() -> Result<(), GameError> {
    let mut game = GameBuilder::new(3)?.with_seed(11).build()?;
    for _ in 0..5 {
        game.pass()?;
    }
    let taker = game.current_turn();
    let pot = game.current_pot();
    let chips = game.current_player().chips();
    let card = game.current_card().ok_or(GameError::GameOver)?;
    game.draw()?;
    let player = game.player(taker)?;
    assert_eq!(pot, 5);
    assert_eq!(player.chips(), chips + pot);
    assert_eq!(player.cards(), &[card]);
    assert_eq!(game.current_pot(), 0);
    assert_eq!(game.draws(), 1);
    Ok(())
}

#[test]
fn broke_player_must_take() -> Result<(), GameError> {
    let mut game = GameBuilder::new(2)?.with_deck(cards(&[20, 30])?).build()?;
    for _ in 0..(2 * STARTING_CHIPS) {
        game.pass()?;
    }
    assert!(!game.current_player().can_pass());
    assert_eq!(
        game.apply_action(0, Action::Pass),
        Err(GameError::InvalidAction(InvalidAction::NoChips { player: 0 }))
    );
    game.apply_action(0, Action::Take)?;
    assert_eq!(game.player(0)?.chips(), 2 * STARTING_CHIPS);
    assert_eq!(game.total_chips(), game.settings().total_chips());
    Ok(())
}

#[test]
fn takes_only_game_ends_after_full_deck() -> Result<(), GameError> {
    let mut game = Game::new(GameConfig::new(4, 3)?)?;
    for taken in 0..DECK_SIZE {
        assert!(!game.is_over(), "ended early after {taken} draws");
        game.draw()?;
    }
    assert!(game.is_over());
    // Seat i takes cards i, i+4, i+8, ...
    for (id, player) in game.players().iter().enumerate() {
        assert_eq!(player.cards().len(), DECK_SIZE / 4);
        let expected: Vec<Card> = game
            .deck()
            .cards()
            .iter()
            .skip(id)
            .step_by(4)
            .copied()
            .collect();
        assert_eq!(player.cards(), expected.as_slice());
    }
    Ok(())
}

#[test]
fn same_seed_same_deck() -> Result<(), GameError> {
    let a = GameBuilder::new(4)?.with_seed(99).build()?;
    let b = GameBuilder::new(4)?.with_seed(99).build()?;
    assert_eq!(a.deck().cards(), b.deck().cards());
    assert_eq!(a.as_vector(), b.as_vector());
    Ok(())
}

#[test]
fn rejects_bad_configuration() {
    assert!(matches!(GameBuilder::new(1), Err(GameError::InvalidConfiguration(_))));
    assert!(matches!(GameConfig::new(0, 1), Err(GameError::InvalidConfiguration(_))));
    assert!(matches!(GameBuilder::new(8), Err(GameError::InvalidConfiguration(_))));
    assert!(matches!(
        GameBuilder::new(usize::MAX).and_then(|b| b.build()),
        Err(GameError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        nothanks::CardGameEnv::new(usize::MAX, 1),
        Err(GameError::InvalidConfiguration(_))
    ));
    assert!(GameBuilder::new(card::MAX_PLAYERS).is_ok());
    let dup = vec![Card::new(4).unwrap(), Card::new(4).unwrap()];
    assert!(matches!(
        GameBuilder::new(2).unwrap().with_deck(dup).build(),
        Err(GameError::InvalidDeck(_))
    ));
    let oversized: Vec<Card> = card::all_cards().collect();
    assert!(matches!(
        GameBuilder::new(2).unwrap().with_deck(oversized).build(),
        Err(GameError::InvalidDeck(_))
    ));
}
