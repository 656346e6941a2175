//! Auction calls, accepted bids, and the resulting contract.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::cards_types::Strain;
use super::seats::Seat;
use crate::errors::domain::{DomainError, ValidationKind};

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 7;

/// Loose call kind, as a caller or renderer names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidKind {
    Pass,
    Contract,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Call {
    Pass,
    Contract { level: u8, strain: Strain },
}

/// Auction rank of a contract call: `level * 5 + strain ordinal`.
pub fn contract_rank(level: u8, strain: Strain) -> u8 {
    level * 5 + strain.ordinal()
}

impl Call {
    /// Build a call from optional parts; a contract call needs both a level in 1..=7 and a strain.
    pub fn from_parts(
        kind: BidKind,
        level: Option<u8>,
        strain: Option<Strain>,
    ) -> Result<Call, DomainError> {
        match kind {
            BidKind::Pass => Ok(Call::Pass),
            BidKind::Contract => {
                let (Some(level), Some(strain)) = (level, strain) else {
                    return Err(DomainError::invalid_bid(
                        "Contract bid requires both level and strain",
                    ));
                };
                Call::contract(level, strain)
            }
        }
    }

    pub fn contract(level: u8, strain: Strain) -> Result<Call, DomainError> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return Err(DomainError::invalid_bid(format!(
                "Contract level {level} outside {MIN_LEVEL}..={MAX_LEVEL}"
            )));
        }
        Ok(Call::Contract { level, strain })
    }

    pub fn kind(&self) -> BidKind {
        match self {
            Call::Pass => BidKind::Pass,
            Call::Contract { .. } => BidKind::Contract,
        }
    }

    pub fn is_contract(&self) -> bool {
        matches!(self, Call::Contract { .. })
    }

    pub fn level(&self) -> Option<u8> {
        match self {
            Call::Contract { level, .. } => Some(*level),
            Call::Pass => None,
        }
    }

    pub fn strain(&self) -> Option<Strain> {
        match self {
            Call::Contract { strain, .. } => Some(*strain),
            Call::Pass => None,
        }
    }

    /// Ranking value, `None` for Pass.
    pub fn rank(&self) -> Option<u8> {
        match self {
            Call::Contract { level, strain } => Some(contract_rank(*level, *strain)),
            Call::Pass => None,
        }
    }

    /// Every contract call from 1C up to 7NT, in ranking order.
    pub fn all_contracts() -> impl Iterator<Item = Call> {
        (MIN_LEVEL..=MAX_LEVEL).flat_map(|level| {
            super::cards_types::STRAIN_ORDER
                .into_iter()
                .map(move |strain| Call::Contract { level, strain })
        })
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Call::Pass => f.write_str("Pass"),
            Call::Contract { level, strain } => write!(f, "{level}{}", strain.to_str()),
        }
    }
}

impl FromStr for Call {
    type Err = DomainError;

    /// Accepts "P", "PASS", and `<level><strain>` such as "1C", "3N", "7NT".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_uppercase();
        if s == "P" || s == "PASS" {
            return Ok(Call::Pass);
        }
        let parse_err =
            || DomainError::validation(ValidationKind::ParseCall, format!("Parse call: {s}"));
        let mut chars = s.chars();
        let level = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(parse_err)? as u8;
        let strain: Strain = chars.as_str().parse().map_err(|_| parse_err())?;
        Call::contract(level, strain)
    }
}

/// One accepted auction action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bid {
    pub seat: Seat,
    pub call: Call,
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.seat, self.call)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DoubleStatus {
    #[default]
    Undoubled,
    Doubled,
    Redoubled,
}

/// Final auction outcome. Doubling is recorded but does not affect scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Contract {
    pub level: u8,
    pub strain: Strain,
    pub declarer: Seat,
    pub double_status: DoubleStatus,
}

impl Contract {
    pub fn dummy(&self) -> Seat {
        self.declarer.partner()
    }

    /// Seat to the declarer's left.
    pub fn opening_leader(&self) -> Seat {
        self.declarer.next()
    }

    /// Tricks the declaring side needs: book of six plus the level.
    pub fn required_tricks(&self) -> u8 {
        self.level + 6
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} by {}", self.level, self.strain.symbol(), self.declarer)?;
        match self.double_status {
            DoubleStatus::Undoubled => Ok(()),
            DoubleStatus::Doubled => f.write_str(" (Doubled)"),
            DoubleStatus::Redoubled => f.write_str(" (Redoubled)"),
        }
    }
}
