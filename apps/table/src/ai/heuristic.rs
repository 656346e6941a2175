//! Heuristic: the deterministic point-count bidder and card player.
//!
//! Bidding is an ordered decision table, first match wins:
//! - nobody has made a contract call yet: [`opening_call`]
//! - partner has made a contract call: [`responding_call`]
//! - only opponents have bid: [`competitive_call`]
//!
//! Each table is a pure function of the hand evaluation and the standing
//! contract, so it can be tested without driving an auction.
//!
//! Play: the leader plays the highest card of its longest suit; a follower plays
//! the highest card that would currently win the trick, else its lowest legal card.
//!
//! Calls are not checked against the auction here. A raise can fail to outrank
//! an intervening overcall; the engine rejects it with `InvalidBid`.

use super::trait_def::{AiError, AiPlayer};
use crate::domain::calls::{contract_rank, Call, MAX_LEVEL};
use crate::domain::cards_logic::can_win;
use crate::domain::hand_eval::{has_stopper, longest_suit, suit_lengths, HandEvaluation};
use crate::domain::player_view::{AuctionView, TrickView};
use crate::domain::{Card, Strain, Suit};

const OPENING_POINTS: u8 = 12;
const NOTRUMP_OPENING: std::ops::RangeInclusive<u8> = 15..=17;
const RESPONDING_POINTS: u8 = 6;
const INVITATIONAL_POINTS: u8 = 10;
const GAME_FORCING_POINTS: u8 = 13;
const COMPETITIVE_POINTS: u8 = 10;
const NOTRUMP_OVERCALL_POINTS: u8 = 15;

#[derive(Debug, Clone, Copy, Default)]
pub struct Heuristic;

impl Heuristic {
    pub const NAME: &'static str = "Heuristic";

    pub fn new() -> Self {
        Self
    }

    /// Full decision table for the seat in `view`.
    pub fn decide_call(view: &AuctionView<'_>) -> Call {
        let eval = view.evaluation();
        let Some(current) = view.current_contract() else {
            return opening_call(&eval);
        };
        if let Some(partner_strain) = view.partner_contract().and_then(|b| b.call.strain()) {
            return responding_call(&eval, partner_strain, current);
        }
        competitive_call(&eval, view.hand, current)
    }

    /// Card choice for the seat in `view`; `None` only when nothing is legal.
    pub fn decide_play(view: &TrickView<'_>) -> Option<Card> {
        if view.legal.len() <= 1 {
            return view.legal.first().copied();
        }
        if view.is_leading() {
            return lead_card(view.hand);
        }
        let winners: Vec<Card> = view
            .legal
            .iter()
            .copied()
            .filter(|&c| can_win(c, view.plays, view.strain()))
            .collect();
        if winners.is_empty() {
            view.legal.iter().copied().min_by_key(|c| (c.rank, c.suit))
        } else {
            winners.into_iter().max_by_key(|c| (c.rank, c.suit))
        }
    }
}

impl AiPlayer for Heuristic {
    fn choose_call(&self, view: &AuctionView<'_>) -> Result<Call, AiError> {
        Ok(Self::decide_call(view))
    }

    fn choose_play(&self, view: &TrickView<'_>) -> Result<Card, AiError> {
        Self::decide_play(view).ok_or_else(|| AiError::InvalidMove("No legal plays available".into()))
    }
}

/// Highest-length major with at least four cards (Spades on a tie), else the longest suit.
pub fn best_suit(eval: &HandEvaluation) -> Suit {
    let spades = eval.length(Suit::Spades);
    let hearts = eval.length(Suit::Hearts);
    if spades >= 4 && spades >= hearts {
        Suit::Spades
    } else if hearts >= 4 {
        Suit::Hearts
    } else {
        eval.longest_suit
    }
}

fn one_level(strain: impl Into<Strain>) -> Call {
    Call::Contract {
        level: 1,
        strain: strain.into(),
    }
}

pub fn opening_call(eval: &HandEvaluation) -> Call {
    if eval.total_points < OPENING_POINTS {
        return Call::Pass;
    }
    if NOTRUMP_OPENING.contains(&eval.total_points) && eval.balanced {
        return one_level(Strain::NoTrump);
    }
    if eval.longest_suit_length >= 5 {
        return one_level(eval.longest_suit);
    }
    one_level(best_suit(eval))
}

/// Lowest level at which `strain` outranks `current`, stepping up at most one level.
fn lowest_outranking(strain: Strain, current: (u8, Strain)) -> Option<u8> {
    let (level, cur_strain) = current;
    let standing = contract_rank(level, cur_strain);
    if contract_rank(level, strain) > standing {
        Some(level)
    } else if level < MAX_LEVEL {
        Some(level + 1)
    } else {
        None
    }
}

/// Raise partner with three-card support, else show a new four-card suit.
pub fn responding_call(eval: &HandEvaluation, partner: Strain, current: (u8, Strain)) -> Call {
    if eval.total_points < RESPONDING_POINTS {
        return Call::Pass;
    }

    let support = partner
        .trump_suit()
        .is_some_and(|suit| eval.length(suit) >= 3);
    if support {
        let level = if eval.total_points >= GAME_FORCING_POINTS {
            4
        } else if eval.total_points >= INVITATIONAL_POINTS {
            3
        } else {
            2
        };
        return Call::Contract {
            level,
            strain: partner,
        };
    }

    let new_suit = Suit::ALL
        .into_iter()
        .filter(|&s| Strain::from(s) != partner && eval.length(s) >= 4)
        .fold(None::<Suit>, |best, s| match best {
            Some(b) if eval.length(b) >= eval.length(s) => Some(b),
            _ => Some(s),
        });
    let Some(suit) = new_suit else {
        return Call::Pass;
    };
    match lowest_outranking(suit.into(), current) {
        Some(level) => Call::Contract {
            level,
            strain: suit.into(),
        },
        None => Call::Pass,
    }
}

/// Overcall an opponents' contract.
///
/// With 15+ points and every suit stopped, NoTrump at the lowest outranking level.
/// With 10+ points, the best suit at the same level, or one higher with a five-card suit.
pub fn competitive_call(eval: &HandEvaluation, hand: &[Card], current: (u8, Strain)) -> Call {
    let (level, cur_strain) = current;

    if eval.total_points >= NOTRUMP_OVERCALL_POINTS
        && Suit::ALL.into_iter().all(|s| has_stopper(hand, s))
    {
        let nt_level = if cur_strain == Strain::NoTrump {
            level + 1
        } else {
            level
        };
        if nt_level <= MAX_LEVEL {
            return Call::Contract {
                level: nt_level,
                strain: Strain::NoTrump,
            };
        }
    }

    if eval.total_points < COMPETITIVE_POINTS {
        return Call::Pass;
    }

    let suit = best_suit(eval);
    let strain = Strain::from(suit);
    if contract_rank(level, strain) > contract_rank(level, cur_strain) {
        Call::Contract { level, strain }
    } else if eval.length(suit) >= 5 && level < MAX_LEVEL {
        Call::Contract {
            level: level + 1,
            strain,
        }
    } else {
        Call::Pass
    }
}

/// Highest card of the longest suit (enumeration order breaks length ties).
pub fn lead_card(hand: &[Card]) -> Option<Card> {
    let (suit, len) = longest_suit(&suit_lengths(hand));
    if len == 0 {
        return None;
    }
    hand.iter()
        .copied()
        .filter(|c| c.suit == suit)
        .max_by_key(|c| c.rank)
}
