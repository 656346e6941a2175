//! Card parsing from string representations (e.g., "AS", "2C")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Strain, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_err(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

pub(crate) fn rank_from_char(ch: char) -> Option<Rank> {
    Rank::ALL.iter().copied().find(|r| r.to_char() == ch)
}

pub(crate) fn suit_from_char(ch: char) -> Option<Suit> {
    Suit::ALL.iter().copied().find(|s| s.to_char() == ch)
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(parse_err(s));
        };
        let rank = rank_from_char(rank_ch).ok_or_else(|| parse_err(s))?;
        let suit = suit_from_char(suit_ch).ok_or_else(|| parse_err(s))?;
        Ok(Card { suit, rank })
    }
}

impl FromStr for Strain {
    type Err = DomainError;

    /// Accepts "C", "D", "H", "S", "N" and "NT" (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "C" => Ok(Strain::Clubs),
            "D" => Ok(Strain::Diamonds),
            "H" => Ok(Strain::Hearts),
            "S" => Ok(Strain::Spades),
            "N" | "NT" => Ok(Strain::NoTrump),
            _ => Err(DomainError::validation(
                ValidationKind::ParseCall,
                format!("Parse strain: {s}"),
            )),
        }
    }
}

/// Non-panicking helper to parse card tokens (e.g., "AS", "2C") into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

/// Parse a hand written suit by suit, e.g. `"AKQ2.T93.J8.7654"` (spades first, PBN style).
/// Voids are written as empty groups.
pub fn parse_hand_pbn(s: &str) -> Result<Vec<Card>, DomainError> {
    let groups: Vec<&str> = s.trim().split('.').collect();
    if groups.len() != 4 {
        return Err(parse_err(s));
    }
    let suits = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];
    let mut cards = Vec::with_capacity(13);
    for (group, suit) in groups.iter().zip(suits) {
        for ch in group.chars() {
            let rank = rank_from_char(ch.to_ascii_uppercase()).ok_or_else(|| parse_err(s))?;
            cards.push(Card { suit, rank });
        }
    }
    Ok(cards)
}
