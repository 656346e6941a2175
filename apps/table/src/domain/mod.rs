//! Domain layer: pure card, auction, and play logic.

pub mod auction;
pub mod calls;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod hand_eval;
pub mod player_view;
pub mod scoring;
pub mod seats;
pub mod tricks;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_auction;
#[cfg(test)]
mod tests_heuristic;
#[cfg(test)]
mod tests_props_tricks;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use auction::{Auction, AuctionEndRule};
pub use calls::{contract_rank, Bid, BidKind, Call, Contract, DoubleStatus, MAX_LEVEL, MIN_LEVEL};
pub use cards_logic::{can_win, card_beats, hand_has_suit, legal_cards, trick_winner};
pub use cards_parsing::{parse_hand_pbn, try_parse_cards};
pub use cards_types::{Card, Rank, Strain, Suit, STRAIN_ORDER};
pub use dealing::{deal_hands, deal_round_robin, full_deck, Deck, DECK_SIZE, HAND_SIZE};
pub use hand_eval::{evaluate, has_stopper, HandEvaluation};
pub use scoring::{evaluate_contract, ContractOutcome};
pub use seats::{Seat, PLAYERS};
pub use tricks::{seat_players, GameResult, Player, TrickEngine, TrickRecord, TRICKS_PER_DEAL};
