//! AI player module - automated auction and play decisions.
//!
//! - `Heuristic`: the deterministic point-count bidder and card player
//! - `RandomPlayer`: uniform over legal moves (seedable for tests)

mod heuristic;
mod random;
mod trait_def;

pub use heuristic::{
    best_suit, competitive_call, lead_card, opening_call, responding_call, Heuristic,
};
pub use random::RandomPlayer;
pub use trait_def::{AiError, AiPlayer};

/// Names accepted by [`create_ai`].
pub const AI_NAMES: [&str; 2] = ["heuristic", "random"];

/// Create an AI player by name. `seed` only matters to strategies that use randomness.
///
/// Returns None if the name is unrecognized.
pub fn create_ai(name: &str, seed: Option<u64>) -> Option<Box<dyn AiPlayer>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "heuristic" => Some(Box::new(Heuristic::new())),
        "random" => Some(Box::new(RandomPlayer::new(seed))),
        _ => None,
    }
}
