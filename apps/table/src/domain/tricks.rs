//! Trick engine: contract setup, thirteen tricks, tally, and score.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

use super::auction::Auction;
use super::calls::Contract;
use super::cards_logic::{legal_cards, trick_winner};
use super::cards_types::{Card, Suit};
use super::dealing::{DECK_SIZE, HAND_SIZE};
use super::player_view::TrickView;
use super::scoring::{evaluate_contract, ContractOutcome};
use super::seats::{Seat, PLAYERS};
use crate::ai::{AiPlayer, Heuristic};
use crate::errors::domain::{DomainError, PreconditionKind, ValidationKind};

pub const TRICKS_PER_DEAL: usize = 13;

/// A seat at the table with its current hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub seat: Seat,
    pub name: String,
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(seat: Seat, name: impl Into<String>, hand: Vec<Card>) -> Self {
        Self {
            seat,
            name: name.into(),
            hand,
        }
    }
}

/// Seat four players from hands indexed by `Seat::index()`.
pub fn seat_players(hands: [Vec<Card>; PLAYERS], names: &[String; PLAYERS]) -> [Player; PLAYERS] {
    let mut hands = hands.into_iter();
    Seat::ALL.map(|seat| {
        Player::new(
            seat,
            names[seat.index()].clone(),
            hands.next().unwrap_or_default(),
        )
    })
}

/// One resolved trick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrickRecord {
    /// 1-based.
    pub trick_no: u8,
    pub lead: Suit,
    pub plays: Vec<(Seat, Card)>,
    pub winner: Seat,
}

impl TrickRecord {
    pub fn winning_card(&self) -> Option<Card> {
        self.plays
            .iter()
            .find(|(seat, _)| *seat == self.winner)
            .map(|(_, card)| *card)
    }
}

/// End-of-deal outcome. A passed-out deal has no contract, no tricks and no outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// Indexed by `Seat::index()`.
    pub tricks_won: [u8; PLAYERS],
    pub contract: Option<Contract>,
    pub tricks: Vec<TrickRecord>,
    pub outcome: Option<ContractOutcome>,
}

impl GameResult {
    pub fn passed_out() -> Self {
        Self {
            tricks_won: [0; PLAYERS],
            contract: None,
            tricks: Vec::new(),
            outcome: None,
        }
    }

    pub fn tricks_for(&self, seat: Seat) -> u8 {
        self.tricks_won[seat.index()]
    }

    pub fn declarer(&self) -> Option<Seat> {
        self.contract.map(|c| c.declarer)
    }

    pub fn dummy(&self) -> Option<Seat> {
        self.contract.map(|c| c.dummy())
    }

    pub fn is_passed_out(&self) -> bool {
        self.contract.is_none()
    }
}

/// Owns the hands for the play phase and reads the finished auction.
#[derive(Debug, Clone)]
pub struct TrickEngine {
    /// Indexed by `Seat::index()`.
    players: [Player; PLAYERS],
    tricks_won: [u8; PLAYERS],
    contract: Option<Contract>,
    tricks: Vec<TrickRecord>,
}

impl TrickEngine {
    /// Players may come in any order; they are stored by seat.
    pub fn new(players: [Player; PLAYERS]) -> Self {
        let mut players = players;
        players.sort_by_key(|p| p.seat.index());
        Self {
            players,
            tricks_won: [0; PLAYERS],
            contract: None,
            tricks: Vec::new(),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn tricks_won(&self) -> [u8; PLAYERS] {
        self.tricks_won
    }

    pub fn tricks_for(&self, seat: Seat) -> u8 {
        self.tricks_won[seat.index()]
    }

    pub fn current_contract(&self) -> Option<&Contract> {
        self.contract.as_ref()
    }

    pub fn declarer(&self) -> Option<Seat> {
        self.contract.map(|c| c.declarer)
    }

    pub fn dummy(&self) -> Option<Seat> {
        self.contract.map(|c| c.dummy())
    }

    pub fn tricks(&self) -> &[TrickRecord] {
        &self.tricks
    }

    /// Every seat holds 13 cards and the four hands hold 52 distinct cards.
    fn require_dealt(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for (i, player) in self.players.iter().enumerate() {
            if player.seat != Seat::from_index(i) {
                return Err(DomainError::precondition(
                    PreconditionKind::NotDealt,
                    format!("Seat {} is occupied twice", player.seat),
                ));
            }
            if player.hand.len() != HAND_SIZE {
                return Err(DomainError::precondition(
                    PreconditionKind::NotDealt,
                    format!(
                        "{} holds {} cards, expected {HAND_SIZE}",
                        player.seat,
                        player.hand.len()
                    ),
                ));
            }
            if let Some(card) = player.hand.iter().find(|c| !seen.insert(**c)) {
                return Err(DomainError::precondition(
                    PreconditionKind::NotDealt,
                    format!("{card} is dealt more than once"),
                ));
            }
        }
        Ok(())
    }

    /// Play the deal with the heuristic choosing for every seat.
    pub fn play_deal(&mut self, auction: &Auction) -> Result<GameResult, DomainError> {
        let heuristic = Heuristic::new();
        let strategy: &dyn AiPlayer = &heuristic;
        self.play_deal_with(auction, [strategy; PLAYERS])
    }

    /// Play the deal with a strategy per seat (indexed by `Seat::index()`).
    ///
    /// A passed-out auction skips the play phase and yields `GameResult::passed_out()`.
    pub fn play_deal_with(
        &mut self,
        auction: &Auction,
        strategies: [&dyn AiPlayer; PLAYERS],
    ) -> Result<GameResult, DomainError> {
        self.require_dealt()?;

        let Some(contract) = auction.final_contract() else {
            info!("No contract bid; play phase skipped");
            return Ok(GameResult::passed_out());
        };
        self.contract = Some(contract);
        debug!(contract = %contract, dummy = %contract.dummy(), "Play phase starting");

        let mut leader = contract.opening_leader();
        for trick_no in 1..=TRICKS_PER_DEAL as u8 {
            let record = self.play_trick(&contract, leader, trick_no, &strategies)?;
            self.tricks_won[record.winner.index()] += 1;
            debug!(
                trick_no,
                winner = %record.winner,
                plays = ?record.plays,
                "Trick complete"
            );
            leader = record.winner;
            self.tricks.push(record);
        }

        let outcome = evaluate_contract(&contract, &self.tricks_won);
        info!(
            contract = %contract,
            tricks_won = ?self.tricks_won,
            score = outcome.signed_score(),
            "Deal complete"
        );
        Ok(GameResult {
            tricks_won: self.tricks_won,
            contract: Some(contract),
            tricks: self.tricks.clone(),
            outcome: Some(outcome),
        })
    }

    fn play_trick(
        &mut self,
        contract: &Contract,
        leader: Seat,
        trick_no: u8,
        strategies: &[&dyn AiPlayer; PLAYERS],
    ) -> Result<TrickRecord, DomainError> {
        let mut plays: Vec<(Seat, Card)> = Vec::with_capacity(PLAYERS);
        let mut lead: Option<Suit> = None;

        for seat in leader.rotation() {
            let hand = &mut self.players[seat.index()].hand;
            let legal = legal_cards(hand.as_slice(), lead);
            let (card, pos) = {
                let view = TrickView {
                    seat,
                    hand: hand.as_slice(),
                    legal,
                    plays: &plays,
                    lead,
                    contract,
                    trick_no,
                };
                let card = strategies[seat.index()].choose_play(&view)?;
                let pos = view
                    .hand
                    .iter()
                    .position(|c| *c == card)
                    .filter(|_| view.legal.contains(&card))
                    .ok_or_else(|| {
                        DomainError::validation(
                            ValidationKind::IllegalPlay,
                            format!("{seat} cannot play {card}"),
                        )
                    })?;
                (card, pos)
            };

            hand.remove(pos);
            plays.push((seat, card));
            lead.get_or_insert(card.suit);
        }

        let (Some(lead), Some(winner)) = (lead, trick_winner(&plays, contract.strain)) else {
            return Err(DomainError::Strategy(format!(
                "Trick {trick_no} closed with no plays"
            )));
        };
        Ok(TrickRecord {
            trick_no,
            lead,
            plays,
            winner,
        })
    }
}
