//! Contract scoring. Doubling, vulnerability, and bonuses are not scored.

use serde::Serialize;

use super::calls::Contract;
use super::cards_types::Strain;
use super::seats::PLAYERS;

pub const OVERTRICK_POINTS: u32 = 30;
pub const UNDERTRICK_PENALTY: u32 = 50;

/// Verdict for the declaring side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractOutcome {
    Made { overtricks: u8, score: u32 },
    Failed { undertricks: u8, penalty: u32 },
}

impl ContractOutcome {
    pub fn is_made(&self) -> bool {
        matches!(self, ContractOutcome::Made { .. })
    }

    /// Declaring side's score; a penalty counts negative.
    pub fn signed_score(&self) -> i32 {
        match *self {
            ContractOutcome::Made { score, .. } => score as i32,
            ContractOutcome::Failed { penalty, .. } => -(penalty as i32),
        }
    }
}

/// Majors and NoTrump score 30 per level, minors 20.
pub fn points_per_level(strain: Strain) -> u32 {
    if strain.is_major_or_notrump() {
        30
    } else {
        20
    }
}

/// Tricks taken by declarer and dummy together.
pub fn declarer_side_tricks(contract: &Contract, tricks_won: &[u8; PLAYERS]) -> u8 {
    tricks_won[contract.declarer.index()] + tricks_won[contract.dummy().index()]
}

pub fn evaluate_contract(contract: &Contract, tricks_won: &[u8; PLAYERS]) -> ContractOutcome {
    let required = contract.required_tricks();
    let taken = declarer_side_tricks(contract, tricks_won);
    if taken >= required {
        let overtricks = taken - required;
        let base = u32::from(contract.level) * points_per_level(contract.strain);
        ContractOutcome::Made {
            overtricks,
            score: base + u32::from(overtricks) * OVERTRICK_POINTS,
        }
    } else {
        let undertricks = required - taken;
        ContractOutcome::Failed {
            undertricks,
            penalty: u32::from(undertricks) * UNDERTRICK_PENALTY,
        }
    }
}
