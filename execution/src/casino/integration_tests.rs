//! Integration tests for round execution.
//!
//! These tests verify the full flow from wagers through dealing and the
//! player's decision to settlement.

#[cfg(test)]
mod tests {
    use crate::casino::round::{play_round, resolve, CardSource, Round};
    use crate::casino::{GameError, GameRng};
    use crate::mocks::{dealt, royal_hearts};
    use threeshot_types::casino::{
        Decision, FiveCardHandPayoutRank, Paytable, PaytableEntry, Paytables, RoundResult,
        ThreeCardHandRank, GRAND_SIERRA_FIVE_SHOT_PAYTABLE,
    };

    fn assert_totals_consistent(result: &RoundResult) {
        let shots = result.shots();
        let bet: u64 = shots.iter().map(|s| s.wager).sum::<u64>() + result.five_shot.wager;
        let won: u64 = shots.iter().map(|s| s.winnings).sum::<u64>() + result.five_shot.winnings;
        assert_eq!(result.total_bet, bet);
        assert_eq!(result.total_winnings, won);
        assert_eq!(result.total_net, won as i64 - bet as i64);
        for shot in shots {
            assert_eq!(shot.winnings, shot.wager * shot.payout_multiplier);
        }
    }

    /// Raise with winning shots and a 5 Shot.
    #[test]
    fn test_raise_settlement() {
        let result = play_round(
            10,
            5,
            Decision::Raise,
            CardSource::PreDealt(royal_hearts()),
            &Paytables::grand_sierra(),
        )
        .unwrap();

        assert_eq!(result.first_shot.rank, ThreeCardHandRank::MiniRoyal);
        assert_eq!(result.first_shot.wager, 10);
        assert_eq!(result.first_shot.payout_multiplier, 50);
        assert_eq!(result.first_shot.winnings, 500);

        for shot in [&result.second_shot, &result.third_shot] {
            assert_eq!(shot.rank, ThreeCardHandRank::Flush);
            assert_eq!(shot.wager, 10);
            assert_eq!(shot.payout_multiplier, 2);
            assert_eq!(shot.winnings, 20);
        }

        assert_eq!(result.five_shot.rank, FiveCardHandPayoutRank::RoyalFlush);
        assert_eq!(result.five_shot.wager, 5);
        assert_eq!(result.five_shot.payout_multiplier, 500);
        assert_eq!(result.five_shot.winnings, 2_500);

        assert_eq!(result.total_bet, 35);
        assert_eq!(result.total_winnings, 3_040);
        assert_eq!(result.total_net, 3_005);
        assert_totals_consistent(&result);
    }

    /// Fold: 1st Shot lost, 5 Shot still resolves.
    #[test]
    fn test_fold_settlement() {
        let result = play_round(
            10,
            5,
            Decision::Fold,
            CardSource::PreDealt(royal_hearts()),
            &Paytables::grand_sierra(),
        )
        .unwrap();

        // Classification is still reported even though it never pays.
        assert_eq!(result.first_shot.rank, ThreeCardHandRank::MiniRoyal);
        assert_eq!(result.first_shot.wager, 10);
        assert_eq!(result.first_shot.payout_multiplier, 0);
        assert_eq!(result.first_shot.winnings, 0);
        assert_eq!(result.second_shot.wager, 0);
        assert_eq!(result.third_shot.wager, 0);
        assert_eq!(result.second_shot.winnings, 0);
        assert_eq!(result.third_shot.winnings, 0);

        assert_eq!(result.five_shot.payout_multiplier, 500);
        assert_eq!(result.five_shot.winnings, 2_500);

        assert_eq!(result.total_bet, 15);
        assert_eq!(result.total_winnings, 2_500);
        assert_eq!(result.total_net, 2_485);
        assert_totals_consistent(&result);
    }

    /// A round with no 5 Shot wager.
    #[test]
    fn test_no_five_shot_wager() {
        let cards = dealt("5c 5d", "5h 2s 3c");
        let result = resolve(&cards, 5, 0, Decision::Raise, &Paytables::default()).unwrap();

        assert_eq!(result.first_shot.rank, ThreeCardHandRank::ThreeOfAKind);
        assert_eq!(result.first_shot.winnings, 100);
        assert_eq!(result.five_shot.rank, FiveCardHandPayoutRank::ThreeOfAKind);
        assert_eq!(result.five_shot.wager, 0);
        assert_eq!(result.five_shot.winnings, 0);
        assert_eq!(result.total_bet, 15);
        assert_totals_consistent(&result);
    }

    /// A folded losing hand loses exactly the 1st Shot and any 5 Shot wager.
    #[test]
    fn test_fold_losing_hand() {
        let cards = dealt("2c 7d", "9h Js 4c");
        let result = resolve(&cards, 25, 10, Decision::Fold, &Paytables::default()).unwrap();
        assert_eq!(result.five_shot.rank, FiveCardHandPayoutRank::AllOther);
        assert_eq!(result.total_bet, 35);
        assert_eq!(result.total_winnings, 0);
        assert_eq!(result.total_net, -35);
    }

    #[test]
    fn test_rejects_invalid_wagers() {
        let cards = dealt("As Ks", "Qs Js Ts");
        assert!(matches!(
            resolve(&cards, 0, 0, Decision::Raise, &Paytables::default()),
            Err(GameError::InvalidWager {
                field: "first_shot_bet",
                ..
            })
        ));
        assert!(matches!(
            resolve(&cards, 10, -1, Decision::Raise, &Paytables::default()),
            Err(GameError::InvalidWager {
                field: "five_shot_bet",
                ..
            })
        ));
    }

    /// A seeded round replays identically, both dealt and pre-dealt.
    #[test]
    fn test_seeded_round_replays() {
        let tables = Paytables::default();
        let mut rng = GameRng::new(2024, 7);
        let first = play_round(3, 1, Decision::Raise, CardSource::Shuffle(&mut rng), &tables).unwrap();
        let mut rng = GameRng::new(2024, 7);
        let second = play_round(3, 1, Decision::Raise, CardSource::Shuffle(&mut rng), &tables).unwrap();
        assert_eq!(first, second);

        let cards = threeshot_types::casino::DealtRoundCards::new(first.hole_cards, first.community_cards);
        let replay = play_round(3, 1, Decision::Raise, CardSource::PreDealt(cards), &tables).unwrap();
        assert_eq!(first, replay);
    }

    /// Custom pay tables change settlement but not classification.
    #[test]
    fn test_custom_paytables() {
        let tables = Paytables {
            shot: Paytable::new(vec![PaytableEntry {
                hand: ThreeCardHandRank::Flush,
                payout: 7,
            }]),
            five_shot: GRAND_SIERRA_FIVE_SHOT_PAYTABLE,
        };
        let result = resolve(&royal_hearts(), 10, 0, Decision::Raise, &tables).unwrap();
        assert_eq!(result.first_shot.rank, ThreeCardHandRank::MiniRoyal);
        assert_eq!(result.first_shot.payout_multiplier, 0);
        assert_eq!(result.second_shot.winnings, 70);
        assert_eq!(result.third_shot.winnings, 70);
        assert_eq!(result.total_net, 140 - 30);
    }

    /// Many seeded rounds settle consistently for both decisions.
    #[test]
    fn test_many_rounds_consistent() {
        let tables = Paytables::default();
        for round_id in 0..500 {
            for decision in [Decision::Raise, Decision::Fold] {
                let mut rng = GameRng::new(11, round_id);
                let result =
                    play_round(4, 2, decision, CardSource::Shuffle(&mut rng), &tables).unwrap();
                assert_totals_consistent(&result);
                if decision == Decision::Fold {
                    assert_eq!(result.first_shot.winnings, 0);
                    assert_eq!(result.total_bet, 6);
                } else {
                    assert_eq!(result.total_bet, 14);
                }
            }
        }
    }

    /// The staged round matches the one-shot settlement.
    #[test]
    fn test_staged_round_matches_play_round() {
        let tables = Paytables::default();
        let mut round = Round::new(tables.clone());
        round.set_wagers(10, 5).unwrap();
        round.deal(&mut GameRng::new(5, 5)).unwrap();
        let staged = round.decide(Decision::Raise).unwrap().clone();

        let mut rng = GameRng::new(5, 5);
        let direct = play_round(10, 5, Decision::Raise, CardSource::Shuffle(&mut rng), &tables).unwrap();
        assert_eq!(staged, direct);
    }

    #[test]
    fn test_result_serializes_to_json() {
        let result = resolve(&royal_hearts(), 10, 5, Decision::Raise, &Paytables::default()).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["decision"], "raise");
        assert_eq!(json["first_shot"]["rank"], "MINI_ROYAL");
        assert_eq!(json["five_shot"]["rank"], "ROYAL_FLUSH");
        assert_eq!(json["total_net"], 3005);
    }
}
