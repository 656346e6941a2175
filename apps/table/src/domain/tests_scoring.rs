use crate::domain::scoring::{declarer_side_tricks, points_per_level};
use crate::domain::{evaluate_contract, Contract, ContractOutcome, DoubleStatus, Seat, Strain};

fn contract(level: u8, strain: Strain, declarer: Seat) -> Contract {
    Contract {
        level,
        strain,
        declarer,
        double_status: DoubleStatus::Undoubled,
    }
}

#[test]
fn declarer_and_dummy_tricks_count_together() {
    let c = contract(2, Strain::Hearts, Seat::South);
    // N, E, S, W
    let tricks = [4, 2, 5, 2];
    assert_eq!(declarer_side_tricks(&c, &tricks), 9);
    assert_eq!(
        evaluate_contract(&c, &tricks),
        ContractOutcome::Made {
            overtricks: 1,
            score: 2 * 30 + 30
        }
    );
}

#[test]
fn minor_suits_score_twenty_per_level() {
    let c = contract(3, Strain::Clubs, Seat::East);
    let outcome = evaluate_contract(&c, &[1, 5, 3, 4]);
    assert_eq!(
        outcome,
        ContractOutcome::Made {
            overtricks: 0,
            score: 60
        }
    );
    assert_eq!(outcome.signed_score(), 60);
}

#[test]
fn notrump_scores_like_a_major() {
    assert_eq!(points_per_level(Strain::NoTrump), 30);
    assert_eq!(points_per_level(Strain::Spades), 30);
    assert_eq!(points_per_level(Strain::Diamonds), 20);
    let c = contract(3, Strain::NoTrump, Seat::North);
    assert_eq!(evaluate_contract(&c, &[5, 2, 5, 1]).signed_score(), 3 * 30 + 30);
}

#[test]
fn undertricks_cost_fifty_each() {
    let c = contract(4, Strain::Spades, Seat::West);
    // E/W take 7 of the 10 required
    let outcome = evaluate_contract(&c, &[3, 4, 3, 3]);
    assert_eq!(
        outcome,
        ContractOutcome::Failed {
            undertricks: 3,
            penalty: 150
        }
    );
    assert!(!outcome.is_made());
    assert_eq!(outcome.signed_score(), -150);
}

#[test]
fn doubling_is_recorded_but_not_scored() {
    let mut c = contract(1, Strain::Diamonds, Seat::North);
    let plain = evaluate_contract(&c, &[4, 3, 4, 2]);
    c.double_status = DoubleStatus::Redoubled;
    assert_eq!(evaluate_contract(&c, &[4, 3, 4, 2]), plain);
}

#[test]
fn outcome_serializes_with_verdict_tag() {
    let json = serde_json::to_value(ContractOutcome::Failed {
        undertricks: 2,
        penalty: 100,
    })
    .unwrap();
    assert_eq!(json["verdict"], "FAILED");
    assert_eq!(json["penalty"], 100);
}
