//! Card game logic: suit following, comparing card strength, trick winners

use super::cards_types::{Card, Strain, Suit};
use super::seats::Seat;

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Legal cards for a seat, sorted ascending.
///
/// With a lead suit the seat must follow if it can; leading or void, the whole hand is legal.
pub fn legal_cards(hand: &[Card], lead: Option<Suit>) -> Vec<Card> {
    let mut legal: Vec<Card> = match lead {
        Some(lead) if hand_has_suit(hand, lead) => {
            hand.iter().copied().filter(|c| c.suit == lead).collect()
        }
        _ => hand.to_vec(),
    };
    legal.sort();
    legal
}

/// Whether `challenger` takes over from the running winner `current`.
///
/// A different non-trump suit never wins; under a trump strain a trump beats any
/// non-trump winner and a non-trump never beats a trump winner.
pub fn card_beats(challenger: Card, current: Card, strain: Strain) -> bool {
    if challenger.suit == current.suit {
        return challenger.rank > current.rank;
    }
    match strain.trump_suit() {
        Some(trump) => challenger.suit == trump,
        None => false,
    }
}

/// The running-winner scan over a trick's plays, in play order.
pub fn winning_play(plays: &[(Seat, Card)], strain: Strain) -> Option<(Seat, Card)> {
    let (first, rest) = plays.split_first()?;
    let winner = rest.iter().fold(*first, |best, &(seat, card)| {
        if card_beats(card, best.1, strain) {
            (seat, card)
        } else {
            best
        }
    });
    Some(winner)
}

/// Winning seat of a (possibly partial) trick; `None` before any card is played.
pub fn trick_winner(plays: &[(Seat, Card)], strain: Strain) -> Option<Seat> {
    winning_play(plays, strain).map(|(seat, _)| seat)
}

/// Whether `card` would currently win the trick if played now.
pub fn can_win(card: Card, plays: &[(Seat, Card)], strain: Strain) -> bool {
    match winning_play(plays, strain) {
        Some((_, best)) => card_beats(card, best, strain),
        None => true,
    }
}
