use std::error::Error;
use std::process;

use clap::Parser;

use nothanks::{Bot, Game, GameConfig, create_bot_from_spec, describe_action, render_state};

const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Play a game of No Thanks at the terminal.")]
struct Args {
    /// Seed for shuffling the deck
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Show the game state and chosen actions each turn
    #[arg(long = "visualize")]
    visualize: bool,

    /// Player specs: human[:name] or random[:seed] (defaults to three humans)
    bots: Vec<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let bot_specs = if args.bots.is_empty() {
        vec![String::from("human"); 3]
    } else {
        args.bots
    };

    let num_players = bot_specs.len();
    let mut game = Game::new(GameConfig::new(num_players, args.seed)?)?;
    let mut bots: Vec<Box<dyn Bot>> = Vec::with_capacity(num_players);
    for (index, spec) in bot_specs.iter().enumerate() {
        bots.push(create_bot_from_spec(spec, index, args.seed)?);
    }

    println!("Starting No Thanks with {num_players} players.\n");
    while !game.is_over() {
        let current = game.current_turn();
        let state = game.state_view();
        if args.visualize {
            println!("{}", render_state(&state));
        }
        let legal_actions = game.legal_actions();
        let action = bots[current].select_action(&state, &legal_actions);
        if args.visualize {
            println!("Chosen action: {}\n", describe_action(&state, &action));
        }
        game.apply_action(current, action)?;
    }

    println!("Game over");
    for player in game.players() {
        println!("Player {} has {} points", player.id(), player.score());
    }
    if let Some(winner) = game.winner() {
        println!("Winner: Player {winner}.");
    }
    Ok(())
}
