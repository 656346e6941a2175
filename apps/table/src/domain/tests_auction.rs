use crate::domain::{Auction, AuctionEndRule, BidKind, Call, Seat, Strain};
use crate::errors::domain::{DomainError, ValidationKind};

fn call(s: &str) -> Call {
    s.parse().unwrap()
}

fn bid_all(auction: &mut Auction, calls: &[&str]) {
    for c in calls {
        auction.make_bid(call(c)).unwrap();
    }
}

#[test]
fn two_hearts_by_south_after_three_passes() {
    let mut auction = Auction::new(Seat::North);
    assert!(auction.is_valid_bid(&call("1S")));
    bid_all(&mut auction, &["1S", "P"]);
    assert!(auction.is_valid_bid(&call("2H")));
    bid_all(&mut auction, &["2H", "P", "P"]);
    assert!(!auction.is_auction_over());
    bid_all(&mut auction, &["P"]);
    assert!(auction.is_auction_over());

    let contract = auction.final_contract().unwrap();
    assert_eq!((contract.level, contract.strain), (2, Strain::Hearts));
    assert_eq!(contract.declarer, Seat::South);
    assert_eq!(auction.last_contract_bid().unwrap().seat, Seat::South);
}

#[test]
fn lower_strain_at_same_level_is_rejected() {
    let mut auction = Auction::new(Seat::North);
    auction.make_bid(call("1S")).unwrap();
    let err = auction.make_bid(call("1C")).unwrap_err();
    assert!(err.is_invalid_bid());
    // Rejection leaves state untouched.
    assert_eq!(auction.bids().len(), 1);
    assert_eq!(auction.current_player(), Seat::East);
    // Same call again is not an outranking bid either.
    assert!(auction.make_bid(call("1S")).unwrap_err().is_invalid_bid());
}

#[test]
fn contract_parts_must_be_complete() {
    let mut auction = Auction::default();
    assert!(!auction.is_valid_bid_parts(BidKind::Contract, Some(2), None));
    assert!(auction.is_valid_bid_parts(BidKind::Pass, None, None));
    let err = auction
        .make_bid_parts(BidKind::Contract, None, Some(Strain::Spades))
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidBid, _)
    ));
    assert!(auction.bids().is_empty());
    auction
        .make_bid_parts(BidKind::Contract, Some(1), Some(Strain::NoTrump))
        .unwrap();
    assert_eq!(auction.current_contract(), Some((1, Strain::NoTrump)));
}

#[test]
fn rotation_follows_first_seat() {
    let mut auction = Auction::new(Seat::West);
    let expected = [Seat::West, Seat::North, Seat::East, Seat::South];
    for (seat, c) in expected.into_iter().zip(["1C", "P", "P", "1D"]) {
        assert_eq!(auction.current_player(), seat);
        let bid = auction.make_bid(call(c)).unwrap();
        assert_eq!(bid.seat, seat);
    }
    assert_eq!(auction.current_player(), Seat::West);
}

#[test]
fn four_passes_end_under_pass_out_rule() {
    let mut auction = Auction::new(Seat::North);
    bid_all(&mut auction, &["P", "P", "P"]);
    assert!(!auction.is_auction_over());
    bid_all(&mut auction, &["P"]);
    assert!(auction.is_auction_over());
    assert_eq!(auction.final_contract(), None);
    assert!(auction.legal_calls().is_empty());

    let err = auction.make_bid(Call::Pass).unwrap_err();
    assert!(err.is_invalid_bid());
}

#[test]
fn strict_rule_keeps_a_passed_out_auction_open() {
    let mut auction = Auction::new(Seat::North).with_end_rule(AuctionEndRule::Strict);
    bid_all(&mut auction, &["P", "P", "P", "P", "P"]);
    assert!(!auction.is_auction_over());
    bid_all(&mut auction, &["1C", "P", "P"]);
    assert!(!auction.is_auction_over());
    bid_all(&mut auction, &["P"]);
    assert!(auction.is_auction_over());
}

#[test]
fn declarer_is_first_to_name_the_final_strain_and_level() {
    // East overcalls, South raises North's hearts.
    let mut auction = Auction::new(Seat::North);
    bid_all(&mut auction, &["1H", "1S", "2H", "P", "P", "P"]);
    let contract = auction.final_contract().unwrap();
    assert_eq!(contract.declarer, Seat::South);
    assert_eq!(contract.dummy(), Seat::North);
    assert_eq!(contract.opening_leader(), Seat::West);
}

#[test]
fn legal_calls_start_above_current_contract() {
    let mut auction = Auction::new(Seat::North);
    assert_eq!(auction.legal_calls().len(), 36);
    auction.make_bid(call("6NT")).unwrap();
    let legal = auction.legal_calls();
    assert_eq!(legal.first(), Some(&Call::Pass));
    assert_eq!(legal.len(), 1 + 5);
    assert!(legal.iter().all(|c| auction.is_valid_bid(c)));
}

#[test]
fn partner_contract_lookup() {
    let mut auction = Auction::new(Seat::North);
    bid_all(&mut auction, &["1D", "1S"]);
    assert_eq!(
        auction.partner_contract_bid(Seat::South).map(|b| b.call),
        Some(call("1D"))
    );
    assert_eq!(
        auction.partner_contract_bid(Seat::West).map(|b| b.call),
        Some(call("1S"))
    );
    assert!(auction.partner_contract_bid(Seat::North).is_none());
}

#[test]
fn automatic_bid_advances_turn() {
    let hand = crate::domain::parse_hand_pbn("AKQ32.K32.A2.432").unwrap();
    let mut auction = Auction::new(Seat::East);
    let bid = auction.make_automatic_bid(&hand).unwrap();
    assert_eq!(bid.seat, Seat::East);
    // 16 HCP, five spades: opens at the one level in spades
    assert_eq!(bid.call, call("1S"));
    assert_eq!(auction.current_player(), Seat::South);
}
