use std::io::{self, BufRead, Write};

use crate::action::Action;
use crate::bot::Bot;
use crate::state::GameStateView;
use crate::visualize::{format_cards, render_state};

/// A line typed at the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Take,
    Skip,
    Hand,
    Help,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "take" | "t" => Some(Self::Take),
            "skip" | "pass" | "s" => Some(Self::Skip),
            "hand" | "h" => Some(Self::Hand),
            "help" | "?" => Some(Self::Help),
            "q" | "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Interactive bot that queries a human via standard input.
pub struct HumanBot {
    name: String,
    input: Box<dyn BufRead>,
}

impl HumanBot {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_input(name, Box::new(io::BufReader::new(io::stdin())))
    }

    pub fn with_input(name: impl Into<String>, input: Box<dyn BufRead>) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }

    fn read_command(&mut self) -> Option<Command> {
        print!("Select action <Take/Skip> or <Hand> to see cards: ");
        if io::stdout().flush().is_err() {
            eprintln!("failed to flush stdout");
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Some(Command::Quit),
            Ok(_) => {
                let command = Command::parse(&line);
                if command.is_none() {
                    println!("Invalid option: '{}'", line.trim());
                }
                command
            }
            Err(_) => {
                eprintln!("failed to read input");
                None
            }
        }
    }
}

impl Default for HumanBot {
    fn default() -> Self {
        Self::new("Human")
    }
}

impl Bot for HumanBot {
    fn select_action(&mut self, state: &GameStateView, legal_actions: &[Action]) -> Action {
        let me = state.current();
        println!("\n=== {}'s turn (player {}) ===", self.name, me.id);
        println!("{}", render_state(state));
        loop {
            match self.read_command() {
                Some(Command::Take) => return Action::Take,
                Some(Command::Skip) if legal_actions.contains(&Action::Pass) => {
                    return Action::Pass;
                }
                Some(Command::Skip) => println!("Player has no chips!"),
                Some(Command::Hand) => println!("Hand: {}", format_cards(&me.cards)),
                Some(Command::Help) => {
                    println!("take  - take the card and every chip on it");
                    println!("skip  - pay one chip onto the card and pass the turn");
                    println!("hand  - list the cards you have collected");
                    println!("quit  - leave the game");
                }
                Some(Command::Quit) => {
                    println!("Exiting game at user's request.");
                    std::process::exit(0);
                }
                None => {}
            }
        }
    }
}
