//! Read-only decision context handed to strategies.
//!
//! A view borrows engine state; strategies never see anything mutable.

use super::auction::Auction;
use super::calls::{Bid, Call, Contract};
use super::cards_types::{Card, Strain, Suit};
use super::hand_eval::{evaluate, HandEvaluation};
use super::seats::Seat;

/// What a seat sees when it is its turn to call.
#[derive(Debug, Clone, Copy)]
pub struct AuctionView<'a> {
    pub seat: Seat,
    pub hand: &'a [Card],
    pub auction: &'a Auction,
}

impl<'a> AuctionView<'a> {
    pub fn evaluation(&self) -> HandEvaluation {
        evaluate(self.hand)
    }

    pub fn current_contract(&self) -> Option<(u8, Strain)> {
        self.auction.current_contract()
    }

    /// Partner's most recent contract call, if partner has bid.
    pub fn partner_contract(&self) -> Option<&'a Bid> {
        self.auction.partner_contract_bid(self.seat)
    }

    pub fn is_valid(&self, call: &Call) -> bool {
        self.auction.is_valid_bid(call)
    }

    pub fn legal_calls(&self) -> Vec<Call> {
        self.auction.legal_calls()
    }
}

/// What a seat sees when it must contribute a card to the current trick.
#[derive(Debug, Clone)]
pub struct TrickView<'a> {
    pub seat: Seat,
    pub hand: &'a [Card],
    /// Cards the seat may legally play, sorted ascending.
    pub legal: Vec<Card>,
    /// Plays already made to this trick, in order.
    pub plays: &'a [(Seat, Card)],
    pub lead: Option<Suit>,
    pub contract: &'a Contract,
    /// 1-based trick number.
    pub trick_no: u8,
}

impl TrickView<'_> {
    pub fn is_leading(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn strain(&self) -> Strain {
        self.contract.strain
    }
}
