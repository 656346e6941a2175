use proptest::prelude::*;

use crate::ai::{AiPlayer, RandomPlayer};
use crate::domain::{test_gens, test_prelude};
use crate::domain::{
    deal_hands, seat_players, Auction, Call, Seat, TrickEngine, PLAYERS, TRICKS_PER_DEAL,
};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: any contract played out by random legal strategies takes exactly
    /// 13 tricks and empties every hand.
    #[test]
    fn prop_trick_conservation(
        seed in any::<u64>(),
        level in 1u8..=7,
        strain in test_gens::strain(),
        declarer in test_gens::seat(),
    ) {
        let hands = deal_hands(seed, Seat::North).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let mut auction = Auction::new(declarer);
        auction
            .make_bid(Call::Contract { level, strain })
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        for _ in 0..3 {
            auction.make_bid(Call::Pass).map_err(|e| TestCaseError::fail(e.to_string()))?;
        }

        let bots = Seat::ALL.map(|s| RandomPlayer::new(Some(seed ^ s.index() as u64)));
        let strategies: [&dyn AiPlayer; PLAYERS] = [&bots[0], &bots[1], &bots[2], &bots[3]];
        let names = Seat::ALL.map(|s| s.name().to_string());
        let mut engine = TrickEngine::new(seat_players(hands, &names));
        let result = engine
            .play_deal_with(&auction, strategies)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert_eq!(result.tricks.len(), TRICKS_PER_DEAL);
        prop_assert_eq!(result.tricks_won.iter().map(|&t| t as usize).sum::<usize>(), 13);
        prop_assert!(engine.players().iter().all(|p| p.hand.is_empty()));
        prop_assert_eq!(result.declarer(), Some(declarer));
    }
}
