//! Random AI player - makes random legal moves.
//!
//! Serves as the baseline opponent in the simulator and as a fuzzing driver
//! for the engines in property tests.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::{AuctionView, TrickView};
use crate::domain::{Call, Card};

/// AI that chooses uniformly among legal calls and legal cards.
///
/// `rng` sits behind a `Mutex` because trait methods take `&self`.
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";

    /// `Some(seed)` gives reproducible choices; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn pick<T: Copy>(&self, options: &[T], what: &str) -> Result<T, AiError> {
        if options.is_empty() {
            return Err(AiError::InvalidMove(format!("No legal {what} available")));
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        options
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal(format!("Failed to choose random {what}")))
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_call(&self, view: &AuctionView<'_>) -> Result<Call, AiError> {
        let legal = view.legal_calls();
        self.pick(&legal, "calls")
    }

    fn choose_play(&self, view: &TrickView<'_>) -> Result<Card, AiError> {
        self.pick(&view.legal, "plays")
    }
}
