//! AI player trait definition.

use thiserror::Error;

use crate::domain::player_view::{AuctionView, TrickView};
use crate::domain::{Call, Card};
use crate::errors::domain::DomainError;

/// Errors that can occur during AI decision-making.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    /// AI encountered an internal error
    #[error("AI internal error: {0}")]
    Internal(String),
    /// AI had nothing legal to choose from
    #[error("AI invalid move: {0}")]
    InvalidMove(String),
}

impl From<AiError> for DomainError {
    fn from(err: AiError) -> Self {
        DomainError::Strategy(err.to_string())
    }
}

/// A seat's decision maker for both phases of a deal.
///
/// Implementations only read the view they are given. Whatever they return is
/// still validated by the engine that asked.
pub trait AiPlayer: Send + Sync {
    /// Choose the next auction call for `view.seat`.
    fn choose_call(&self, view: &AuctionView<'_>) -> Result<Call, AiError>;

    /// Choose a card to play. `view.legal` lists the cards the rules allow.
    fn choose_play(&self, view: &TrickView<'_>) -> Result<Card, AiError>;
}
