//! Auction engine: bid validation, turn order, termination, final contract.

use tracing::debug;

use super::calls::{contract_rank, Bid, BidKind, Call, Contract, DoubleStatus};
use super::cards_types::{Card, Strain};
use super::player_view::AuctionView;
use super::seats::{Seat, PLAYERS};
use crate::ai::{AiPlayer, Heuristic};
use crate::errors::domain::DomainError;

/// When an auction that never saw a contract call is considered finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuctionEndRule {
    /// Four opening passes end the auction (passed-out deal).
    #[default]
    PassOut,
    /// Only three trailing passes after at least one contract call end the auction.
    Strict,
}

/// Single-writer auction state: append-only bid list plus turn pointer.
#[derive(Debug, Clone)]
pub struct Auction {
    rotation: [Seat; PLAYERS],
    bids: Vec<Bid>,
    turn: usize,
    end_rule: AuctionEndRule,
}

impl Auction {
    pub fn new(first: Seat) -> Self {
        Self {
            rotation: first.rotation(),
            bids: Vec::new(),
            turn: 0,
            end_rule: AuctionEndRule::default(),
        }
    }

    pub fn with_end_rule(mut self, end_rule: AuctionEndRule) -> Self {
        self.end_rule = end_rule;
        self
    }

    pub fn rotation(&self) -> [Seat; PLAYERS] {
        self.rotation
    }

    pub fn end_rule(&self) -> AuctionEndRule {
        self.end_rule
    }

    pub fn current_player(&self) -> Seat {
        self.rotation[self.turn]
    }

    /// Accepted bids in order.
    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    pub fn last_contract_bid(&self) -> Option<&Bid> {
        self.bids.iter().rev().find(|b| b.call.is_contract())
    }

    /// Level and strain of the contract currently standing, if any.
    pub fn current_contract(&self) -> Option<(u8, Strain)> {
        self.last_contract_bid()
            .and_then(|b| Some((b.call.level()?, b.call.strain()?)))
    }

    /// Most recent contract call made by `seat`'s partner.
    pub fn partner_contract_bid(&self, seat: Seat) -> Option<&Bid> {
        let partner = seat.partner();
        self.bids
            .iter()
            .rev()
            .find(|b| b.seat == partner && b.call.is_contract())
    }

    /// Pass is always valid; a contract call must outrank the standing contract.
    pub fn is_valid_bid(&self, call: &Call) -> bool {
        match call {
            Call::Pass => true,
            Call::Contract { level, strain } => match self.current_contract() {
                None => true,
                Some((cur_level, cur_strain)) => {
                    contract_rank(*level, *strain) > contract_rank(cur_level, cur_strain)
                }
            },
        }
    }

    /// `is_valid_bid` over loose parts; a contract call missing its level or strain is invalid.
    pub fn is_valid_bid_parts(
        &self,
        kind: BidKind,
        level: Option<u8>,
        strain: Option<Strain>,
    ) -> bool {
        Call::from_parts(kind, level, strain)
            .map(|call| self.is_valid_bid(&call))
            .unwrap_or(false)
    }

    pub fn make_bid(&mut self, call: Call) -> Result<Bid, DomainError> {
        if self.is_auction_over() {
            return Err(DomainError::invalid_bid("Auction is over"));
        }
        if !self.is_valid_bid(&call) {
            let standing = self
                .last_contract_bid()
                .map(|b| b.call.to_string())
                .unwrap_or_default();
            return Err(DomainError::invalid_bid(format!(
                "{call} does not outrank {standing}"
            )));
        }

        let bid = Bid {
            seat: self.current_player(),
            call,
        };
        self.bids.push(bid);
        self.turn = (self.turn + 1) % PLAYERS;
        debug!(seat = %bid.seat, call = %bid.call, bids = self.bids.len(), "Bid accepted");
        Ok(bid)
    }

    pub fn make_bid_parts(
        &mut self,
        kind: BidKind,
        level: Option<u8>,
        strain: Option<Strain>,
    ) -> Result<Bid, DomainError> {
        let call = Call::from_parts(kind, level, strain)?;
        self.make_bid(call)
    }

    fn trailing_passes(&self) -> usize {
        self.bids
            .iter()
            .rev()
            .take_while(|b| b.call == Call::Pass)
            .count()
    }

    pub fn is_auction_over(&self) -> bool {
        if self.bids.len() < PLAYERS {
            return false;
        }
        let has_contract = self.bids.iter().any(|b| b.call.is_contract());
        let trailing = self.trailing_passes();
        if has_contract {
            return trailing >= 3;
        }
        match self.end_rule {
            AuctionEndRule::PassOut => trailing >= PLAYERS,
            AuctionEndRule::Strict => false,
        }
    }

    /// Every call the current player may make right now.
    pub fn legal_calls(&self) -> Vec<Call> {
        if self.is_auction_over() {
            return Vec::new();
        }
        std::iter::once(Call::Pass)
            .chain(Call::all_contracts().filter(|c| self.is_valid_bid(c)))
            .collect()
    }

    /// Final contract; the declarer is the first seat that named the final level and strain.
    pub fn final_contract(&self) -> Option<Contract> {
        let (level, strain) = self.current_contract()?;
        let first = self
            .bids
            .iter()
            .find(|b| b.call.level() == Some(level) && b.call.strain() == Some(strain))?;
        Some(Contract {
            level,
            strain,
            declarer: first.seat,
            double_status: DoubleStatus::Undoubled,
        })
    }

    /// Decision context for the seat whose turn it is.
    pub fn view_for<'a>(&'a self, hand: &'a [Card]) -> AuctionView<'a> {
        AuctionView {
            seat: self.current_player(),
            hand,
            auction: self,
        }
    }

    /// Let the heuristic bidder choose for the current player; still subject to `is_valid_bid`.
    pub fn make_automatic_bid(&mut self, hand: &[Card]) -> Result<Bid, DomainError> {
        self.make_automatic_bid_with(&Heuristic::new(), hand)
    }

    pub fn make_automatic_bid_with(
        &mut self,
        strategy: &dyn AiPlayer,
        hand: &[Card],
    ) -> Result<Bid, DomainError> {
        let call = strategy.choose_call(&self.view_for(hand))?;
        self.make_bid(call)
    }
}

impl Default for Auction {
    fn default() -> Self {
        Self::new(Seat::North)
    }
}
