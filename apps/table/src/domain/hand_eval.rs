//! Hand evaluation: high-card points, distribution points, shape.
//!
//! Everything here is a pure function of the cards passed in; nothing is cached.

use serde::Serialize;

use super::cards_types::{Card, Rank, Suit};

/// Snapshot of a hand's strength. Suit-indexed arrays use `Suit::ordinal()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandEvaluation {
    pub high_card_points: u8,
    pub distribution_points: u8,
    pub total_points: u8,
    pub suit_lengths: [u8; 4],
    pub longest_suit: Suit,
    pub longest_suit_length: u8,
    pub balanced: bool,
}

impl HandEvaluation {
    pub fn length(&self, suit: Suit) -> u8 {
        self.suit_lengths[suit.ordinal()]
    }
}

pub fn suit_lengths(hand: &[Card]) -> [u8; 4] {
    let mut lengths = [0u8; 4];
    for card in hand {
        lengths[card.suit.ordinal()] += 1;
    }
    lengths
}

/// Longest suit; ties go to the first suit in `Suit::ALL` order.
pub fn longest_suit(lengths: &[u8; 4]) -> (Suit, u8) {
    let mut best = (Suit::Clubs, lengths[0]);
    for suit in Suit::ALL.into_iter().skip(1) {
        let len = lengths[suit.ordinal()];
        if len > best.1 {
            best = (suit, len);
        }
    }
    best
}

fn distribution_points_for(len: u8) -> u8 {
    match len {
        0 => 3,
        1 => 2,
        2 => 1,
        3 | 4 => 0,
        long => long - 4,
    }
}

pub fn evaluate(hand: &[Card]) -> HandEvaluation {
    let high_card_points: u8 = hand.iter().map(|c| c.rank.high_card_points()).sum();
    let lengths = suit_lengths(hand);
    let distribution_points: u8 = lengths.iter().map(|&l| distribution_points_for(l)).sum();
    let (longest_suit, longest_suit_length) = longest_suit(&lengths);

    let mut sorted = lengths;
    sorted.sort_unstable();
    let balanced = sorted[0] >= 2 && sorted[3] <= 4;

    HandEvaluation {
        high_card_points,
        distribution_points,
        total_points: high_card_points + distribution_points,
        suit_lengths: lengths,
        longest_suit,
        longest_suit_length,
        balanced,
    }
}

/// Whether the hand can stop the suit: A, Kx, Qxx or Jxxx.
pub fn has_stopper(hand: &[Card], suit: Suit) -> bool {
    let in_suit: Vec<Rank> = hand
        .iter()
        .filter(|c| c.suit == suit)
        .map(|c| c.rank)
        .collect();
    let len = in_suit.len();
    in_suit.iter().any(|&rank| match rank {
        Rank::Ace => true,
        Rank::King => len >= 2,
        Rank::Queen => len >= 3,
        Rank::Jack => len >= 4,
        _ => false,
    })
}
