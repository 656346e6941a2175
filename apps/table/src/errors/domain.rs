//! Domain-level error type shared by the engines and the deal flow.
//!
//! This error type is I/O-agnostic. Binaries return `AppError` and convert
//! from `DomainError` through the provided `From` implementation.

use thiserror::Error;

/// Validation kinds: the caller supplied something the rules reject.
/// These are locally recoverable (retry with a different input).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    InvalidBid,
    IllegalPlay,
    ParseCard,
    ParseCall,
    InvalidStrainConversion,
}

/// Precondition kinds: the engine was driven in a state it cannot work from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PreconditionKind {
    /// Play requested without four 13-card hands of distinct cards.
    NotDealt,
    /// More than 52 cards requested from the deck.
    EmptyDeck,
    /// Auction exceeded the configured call limit without ending.
    AuctionStalled,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input validation or rule violation
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Caller misuse of an engine
    #[error("precondition failed {0:?}: {1}")]
    Precondition(PreconditionKind, String),
    /// A strategy failed to produce a decision
    #[error("strategy error: {0}")]
    Strategy(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn precondition(kind: PreconditionKind, detail: impl Into<String>) -> Self {
        Self::Precondition(kind, detail.into())
    }

    pub fn invalid_bid(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::InvalidBid, detail)
    }

    pub fn is_invalid_bid(&self) -> bool {
        matches!(self, Self::Validation(ValidationKind::InvalidBid, _))
    }

    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self {
            Self::Validation(kind, _) => Some(*kind),
            _ => None,
        }
    }

    pub fn precondition_kind(&self) -> Option<PreconditionKind> {
        match self {
            Self::Precondition(kind, _) => Some(*kind),
            _ => None,
        }
    }
}
