//! Deck provider: deterministic 52-card deck, injectable shuffle, sequential deal.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::domain::seats::{Seat, PLAYERS};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, PreconditionKind};

pub const DECK_SIZE: usize = 52;
pub const HAND_SIZE: usize = 13;

/// Generate a full 52-card deck in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// A deck dealt from the top, one card at a time.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    next: usize,
}

impl Deck {
    pub fn new() -> Self {
        Self {
            cards: full_deck(),
            next: 0,
        }
    }

    /// Fresh deck shuffled with a ChaCha20 stream, reproducible on every platform.
    pub fn seeded(seed: u64) -> Self {
        let mut deck = Self::new();
        deck.shuffle(&mut ChaCha20Rng::seed_from_u64(seed));
        deck
    }

    /// Fisher-Yates shuffle of the undealt cards using the injected random source.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards[self.next..].shuffle(rng);
    }

    pub fn deal_next(&mut self) -> Result<Card, DomainError> {
        let card = self.cards.get(self.next).copied().ok_or_else(|| {
            DomainError::precondition(PreconditionKind::EmptyDeck, "Deck exhausted")
        })?;
        self.next += 1;
        Ok(card)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }

    /// Undealt cards in dealing order.
    pub fn cards(&self) -> &[Card] {
        &self.cards[self.next..]
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Deal the whole deck one card at a time, clockwise from `first`.
///
/// Returns hands indexed by `Seat::index()`, each sorted for display.
pub fn deal_round_robin(deck: &mut Deck, first: Seat) -> Result<[Vec<Card>; PLAYERS], DomainError> {
    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for i in 0..DECK_SIZE {
        let seat = first.offset(i);
        hands[seat.index()].push(deck.deal_next()?);
    }
    for hand in hands.iter_mut() {
        hand.sort();
    }
    Ok(hands)
}

/// Convenience: shuffle a fresh deck with `seed` and deal it from `first`.
pub fn deal_hands(seed: u64, first: Seat) -> Result<[Vec<Card>; PLAYERS], DomainError> {
    let mut deck = Deck::seeded(seed);
    deal_round_robin(&mut deck, first)
}
