//! Plain-text rendering of hands, auctions, tricks and results.

use std::fmt::Write;

use crate::domain::{Bid, Card, ContractOutcome, GameResult, Seat, Suit, TrickRecord, PLAYERS};
use crate::services::DealReport;

const DISPLAY_SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

/// One line per suit, spades first, ranks high to low; voids show as `-`.
pub fn render_hand(hand: &[Card]) -> String {
    let mut out = String::new();
    for suit in DISPLAY_SUITS {
        let mut ranks: Vec<_> = hand.iter().filter(|c| c.suit == suit).map(|c| c.rank).collect();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        let ranks: Vec<String> = ranks.iter().map(|r| r.to_char().to_string()).collect();
        let shown = if ranks.is_empty() {
            "-".to_string()
        } else {
            ranks.join(" ")
        };
        let _ = writeln!(out, "  {} {shown}", suit.symbol());
    }
    out
}

pub fn render_hands(hands: &[Vec<Card>; PLAYERS], names: &[String; PLAYERS]) -> String {
    let mut out = String::new();
    for seat in Seat::ALL {
        let _ = writeln!(out, "{} ({}):", names[seat.index()], seat);
        out.push_str(&render_hand(&hands[seat.index()]));
    }
    out
}

pub fn render_bids(bids: &[Bid]) -> String {
    let mut out = String::new();
    for bid in bids {
        let _ = writeln!(out, "{bid}");
    }
    out
}

pub fn render_trick(trick: &TrickRecord) -> String {
    let plays: Vec<String> = trick
        .plays
        .iter()
        .map(|(seat, card)| format!("{}: {card}", seat.initial()))
        .collect();
    format!(
        "Trick {}: {}  Winner: {}",
        trick.trick_no,
        plays.join(" "),
        trick.winner.initial()
    )
}

pub fn render_result(result: &GameResult) -> String {
    let mut out = String::new();
    let Some(contract) = result.contract else {
        out.push_str("No contract bid. No play phase.\n");
        return out;
    };
    let _ = writeln!(out, "Contract: {contract}");
    let _ = writeln!(out, "Declarer: {}, Dummy: {}", contract.declarer, contract.dummy());
    for trick in &result.tricks {
        let _ = writeln!(out, "{}", render_trick(trick));
    }
    let tally: Vec<String> = Seat::ALL
        .iter()
        .map(|&seat| format!("{}: {}", seat, result.tricks_for(seat)))
        .collect();
    let _ = writeln!(out, "Tricks won: {}", tally.join(", "));
    match result.outcome {
        Some(ContractOutcome::Made { overtricks, score }) => {
            let _ = writeln!(out, "Contract made with {overtricks} overtrick(s). Score: {score}");
        }
        Some(ContractOutcome::Failed {
            undertricks,
            penalty,
        }) => {
            let _ = writeln!(
                out,
                "Contract failed by {undertricks} trick(s). Penalty: {penalty}"
            );
        }
        None => {}
    }
    out
}

/// Full text report of a deal.
pub fn render_report(report: &DealReport, names: &[String; PLAYERS]) -> String {
    let mut out = String::new();
    if let Some(seed) = report.seed {
        let _ = writeln!(out, "Deal seed: {seed}");
    }
    out.push_str(&render_hands(&report.dealt_hands, names));
    out.push_str("\nAuction:\n");
    out.push_str(&render_bids(&report.bids));
    out.push('\n');
    out.push_str(&render_result(&report.result));
    out
}
