//! Phase driver: deal, auction, play, for one complete deal.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::ai::{AiPlayer, Heuristic};
use crate::config::TableConfig;
use crate::domain::{
    deal_round_robin, seat_players, Auction, AuctionEndRule, Bid, Call, Card, Deck, GameResult,
    Seat, TrickEngine, PLAYERS,
};
use crate::errors::domain::{DomainError, PreconditionKind};

/// Everything a renderer or the simulator needs about one finished deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealReport {
    /// Seed the deck was shuffled with, when the deal is reproducible.
    pub seed: Option<u64>,
    pub first_seat: Seat,
    /// Hands as dealt, indexed by `Seat::index()`.
    pub dealt_hands: [Vec<Card>; PLAYERS],
    pub bids: Vec<Bid>,
    /// Automatic bids the auction rejected and replaced with a pass.
    pub recovered_bids: u32,
    pub result: GameResult,
}

pub struct DealFlow {
    config: TableConfig,
}

impl DealFlow {
    pub fn new(config: TableConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Play one deal with the heuristic at every seat.
    ///
    /// Uses the configured seed, or draws one so the report can always be replayed.
    pub fn run(&self) -> Result<DealReport, DomainError> {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        self.run_seeded(seed)
    }

    pub fn run_seeded(&self, seed: u64) -> Result<DealReport, DomainError> {
        let heuristic = Heuristic::new();
        let strategy: &dyn AiPlayer = &heuristic;
        self.run_seeded_with(seed, [strategy; PLAYERS])
    }

    /// Seeded deal with a strategy per seat; the same seed reproduces the same cards.
    pub fn run_seeded_with(
        &self,
        seed: u64,
        strategies: [&dyn AiPlayer; PLAYERS],
    ) -> Result<DealReport, DomainError> {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut report = self.run_with_rng(&mut rng, strategies)?;
        report.seed = Some(seed);
        Ok(report)
    }

    /// One deal with an injected shuffle source.
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        strategies: [&dyn AiPlayer; PLAYERS],
    ) -> Result<DealReport, DomainError> {
        let first_seat = self.config.first_seat;
        let mut deck = Deck::new();
        deck.shuffle(rng);
        let dealt_hands = deal_round_robin(&mut deck, first_seat)?;
        debug!(first_seat = %first_seat, "Hands dealt");

        let (auction, recovered_bids) = self.run_auction(&dealt_hands, &strategies)?;

        let players = seat_players(dealt_hands.clone(), &self.config.seat_names);
        let mut engine = TrickEngine::new(players);
        let result = engine.play_deal_with(&auction, strategies)?;

        Ok(DealReport {
            seed: None,
            first_seat,
            dealt_hands,
            bids: auction.bids().to_vec(),
            recovered_bids,
            result,
        })
    }

    fn run_auction(
        &self,
        hands: &[Vec<Card>; PLAYERS],
        strategies: &[&dyn AiPlayer; PLAYERS],
    ) -> Result<(Auction, u32), DomainError> {
        let mut auction =
            Auction::new(self.config.first_seat).with_end_rule(self.config.auction_end);
        let mut recovered = 0u32;

        while !auction.is_auction_over() {
            if self.config.auction_end == AuctionEndRule::Strict
                && auction.bids().len() >= self.config.max_auction_calls
            {
                return Err(DomainError::precondition(
                    PreconditionKind::AuctionStalled,
                    format!(
                        "Auction still open after {} calls",
                        self.config.max_auction_calls
                    ),
                ));
            }
            let seat = auction.current_player();
            let hand = &hands[seat.index()];
            match auction.make_automatic_bid_with(strategies[seat.index()], hand) {
                Ok(_) => {}
                Err(err) if err.is_invalid_bid() => {
                    warn!(seat = %seat, error = %err, "Automatic bid rejected; passing instead");
                    auction.make_bid(Call::Pass)?;
                    recovered += 1;
                }
                Err(err) => return Err(err),
            }
        }

        match auction.final_contract() {
            Some(contract) => {
                info!(contract = %contract, calls = auction.bids().len(), "Auction complete")
            }
            None => info!(calls = auction.bids().len(), "Auction passed out"),
        }
        Ok((auction, recovered))
    }
}
