use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::bot::Bot;
use crate::bots::{HumanBot, RandomBot};

/// Returns a normalized label for a bot spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Create a bot instance from a CLI-style spec.
/// Supported specs:
/// - human[:name]
/// - random[:seed]
pub fn create_bot_from_spec(spec: &str, index: usize, seed: u64) -> Result<Box<dyn Bot>, String> {
    match label_for_spec(spec).as_str() {
        "human" => {
            let name = spec
                .split_once(':')
                .map(|(_, name)| name.trim().to_string())
                .unwrap_or_else(|| format!("Human {index}"));
            Ok(Box::new(HumanBot::new(name)))
        }
        "random" => {
            let custom_seed = match spec.split_once(':') {
                Some((_, value)) => value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| format!("invalid random seed in spec: {spec}"))?,
                None => seed ^ ((index as u64 + 1) * 0x9E37_79B9),
            };
            Ok(Box::new(RandomBot::new(StdRng::seed_from_u64(custom_seed))))
        }
        _ => Err(format!("unrecognized bot spec: {spec}")),
    }
}
