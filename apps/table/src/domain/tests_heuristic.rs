use crate::ai::{competitive_call, opening_call, responding_call, AiPlayer, Heuristic};
use crate::domain::player_view::TrickView;
use crate::domain::{
    evaluate, legal_cards, parse_hand_pbn, Auction, Call, Card, Contract, DoubleStatus,
    HandEvaluation, Seat, Strain,
};

fn eval_of(pbn: &str) -> HandEvaluation {
    evaluate(&parse_hand_pbn(pbn).unwrap())
}

fn call(s: &str) -> Call {
    s.parse().unwrap()
}

fn cards(tokens: &[&str]) -> Vec<Card> {
    tokens.iter().map(|t| t.parse().unwrap()).collect()
}

// ---------- opening ----------

#[test]
fn opening_passes_below_twelve() {
    assert_eq!(opening_call(&eval_of("T932.T93.J82.765")), Call::Pass);
}

#[test]
fn opening_balanced_fifteen_to_seventeen_is_one_notrump() {
    assert_eq!(opening_call(&eval_of("AQ32.KJ3.Q32.K32")), call("1NT"));
}

#[test]
fn opening_five_card_suit() {
    assert_eq!(opening_call(&eval_of("AKQ32.K32.A2.432")), call("1S"));
}

#[test]
fn opening_four_card_major_before_minor() {
    // 4-4-4-1: spades beat hearts on a tie, and both beat diamonds
    assert_eq!(opening_call(&eval_of("AK32.KQ32.A432.2")), call("1S"));
}

#[test]
fn opening_without_major_uses_longest_suit() {
    assert_eq!(opening_call(&eval_of("A32.K32.KQ32.J32")), call("1D"));
}

// ---------- responding ----------

#[test]
fn responding_raises_by_strength() {
    let cur = (1, Strain::Hearts);
    assert_eq!(
        responding_call(&eval_of("Q32.K32.J432.432"), Strain::Hearts, cur),
        call("2H")
    );
    assert_eq!(
        responding_call(&eval_of("Q32.K32.KJ32.Q32"), Strain::Hearts, cur),
        call("3H")
    );
    assert_eq!(
        responding_call(&eval_of("A32.K32.KJ32.Q32"), Strain::Hearts, cur),
        call("4H")
    );
}

#[test]
fn responding_new_suit_at_lowest_outranking_level() {
    let cur = (1, Strain::Hearts);
    assert_eq!(
        responding_call(&eval_of("KJ432.32.Q43.432"), Strain::Hearts, cur),
        call("1S")
    );
    // diamonds and spades both four long: diamonds first, needs the two level
    assert_eq!(
        responding_call(&eval_of("KJ32.32.Q432.432"), Strain::Hearts, cur),
        call("2D")
    );
}

#[test]
fn responding_new_suit_has_no_room_above_seven() {
    assert_eq!(
        responding_call(&eval_of("KJ32.32.Q432.432"), Strain::Hearts, (7, Strain::Hearts)),
        Call::Pass
    );
}

#[test]
fn responding_weak_hand_passes() {
    assert_eq!(
        responding_call(&eval_of("J432.32.5432.432"), Strain::Hearts, (1, Strain::Hearts)),
        Call::Pass
    );
}

#[test]
fn responding_to_notrump_never_raises() {
    // Three hearts do not support NoTrump; spades are the new suit.
    assert_eq!(
        responding_call(&eval_of("KJ432.Q32.Q4.432"), Strain::NoTrump, (1, Strain::NoTrump)),
        call("2S")
    );
}

// ---------- competitive ----------

#[test]
fn competitive_overcall_at_same_level() {
    let hand = parse_hand_pbn("KQ32.32.A432.432").unwrap();
    assert_eq!(
        competitive_call(&evaluate(&hand), &hand, (1, Strain::Hearts)),
        call("1S")
    );
}

#[test]
fn competitive_long_suit_jumps_a_level() {
    let hand = parse_hand_pbn("32.432.AKJ32.Q32").unwrap();
    assert_eq!(
        competitive_call(&evaluate(&hand), &hand, (1, Strain::Hearts)),
        call("2D")
    );
}

#[test]
fn competitive_four_card_minor_below_passes() {
    let hand = parse_hand_pbn("32.432.AKJ2.Q432").unwrap();
    assert_eq!(
        competitive_call(&evaluate(&hand), &hand, (1, Strain::Hearts)),
        Call::Pass
    );
}

#[test]
fn competitive_notrump_with_every_suit_stopped() {
    let hand = parse_hand_pbn("A32.KQ2.K32.A432").unwrap();
    let eval = evaluate(&hand);
    assert_eq!(competitive_call(&eval, &hand, (1, Strain::Hearts)), call("1NT"));
    assert_eq!(competitive_call(&eval, &hand, (2, Strain::NoTrump)), call("3NT"));
    assert_eq!(competitive_call(&eval, &hand, (7, Strain::NoTrump)), Call::Pass);
}

#[test]
fn competitive_weak_hand_passes() {
    let hand = parse_hand_pbn("T932.T93.J82.765").unwrap();
    assert_eq!(
        competitive_call(&evaluate(&hand), &hand, (1, Strain::Clubs)),
        Call::Pass
    );
}

// ---------- role selection ----------

#[test]
fn decision_table_picks_role_from_auction() {
    let opener = parse_hand_pbn("AKQ32.K32.A2.432").unwrap();
    let overcaller = parse_hand_pbn("32.432.AKJ32.Q32").unwrap();
    let responder = parse_hand_pbn("Q32.K32.J432.432").unwrap();

    let mut auction = Auction::new(Seat::North);
    auction.make_bid(call("1H")).unwrap();
    assert_eq!(Heuristic::decide_call(&auction.view_for(&overcaller)), call("2D"));
    auction.make_bid(call("2D")).unwrap();
    // South supports North's hearts with 6 points: simple raise
    assert_eq!(Heuristic::decide_call(&auction.view_for(&responder)), call("2H"));

    let fresh = Auction::new(Seat::West);
    assert_eq!(Heuristic::decide_call(&fresh.view_for(&opener)), call("1S"));
}

// ---------- card play ----------

fn contract(strain: Strain) -> Contract {
    Contract {
        level: 1,
        strain,
        declarer: Seat::North,
        double_status: DoubleStatus::Undoubled,
    }
}

fn choose(hand: &[Card], plays: &[(Seat, Card)], strain: Strain) -> Card {
    let contract = contract(strain);
    let lead = plays.first().map(|(_, c)| c.suit);
    let view = TrickView {
        seat: Seat::South,
        hand,
        legal: legal_cards(hand, lead),
        plays,
        lead,
        contract: &contract,
        trick_no: 1,
    };
    Heuristic::new().choose_play(&view).unwrap()
}

#[test]
fn follower_wins_with_highest_winning_card() {
    let hand = cards(&["AC", "QC", "2C", "5D"]);
    let plays = [
        (Seat::West, "9C".parse().unwrap()),
        (Seat::North, "JC".parse().unwrap()),
    ];
    assert_eq!(choose(&hand, &plays, Strain::NoTrump), "AC".parse().unwrap());
}

#[test]
fn follower_that_cannot_win_plays_low() {
    let hand = cards(&["KC", "2C", "5D"]);
    let plays = [(Seat::West, "AC".parse().unwrap())];
    assert_eq!(choose(&hand, &plays, Strain::NoTrump), "2C".parse().unwrap());
}

#[test]
fn void_follower_ruffs_high() {
    let hand = cards(&["3S", "9S", "2D"]);
    let plays = [(Seat::West, "AC".parse().unwrap())];
    assert_eq!(choose(&hand, &plays, Strain::Spades), "9S".parse().unwrap());
}

#[test]
fn void_follower_without_trumps_discards_lowest() {
    let hand = cards(&["5D", "2H", "KD"]);
    let plays = [(Seat::West, "AC".parse().unwrap())];
    assert_eq!(choose(&hand, &plays, Strain::Spades), "2H".parse().unwrap());
}

#[test]
fn leader_plays_top_of_longest_suit() {
    let hand = cards(&["AS", "3H", "9H", "QH", "KD"]);
    assert_eq!(choose(&hand, &[], Strain::Clubs), "QH".parse().unwrap());
}
