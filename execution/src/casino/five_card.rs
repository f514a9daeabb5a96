//! Five card hand evaluation for the 5 Shot.

use super::GameError;
use threeshot_types::casino::{Card, FiveCardHandPayoutRank, Rank, FIVE_CARD_HAND_SIZE};

const ROYAL: [u8; 5] = [10, 11, 12, 13, 14];
const WHEEL: [u8; 5] = [2, 3, 4, 5, 14];

/// Rank occurrence summary, computed once per evaluation.
struct RankCounts {
    pairs: u8,
    highest_pair: u8,
    three_kind: bool,
    four_kind: bool,
}

impl RankCounts {
    fn from_ranks(ranks: &[u8; 5]) -> Self {
        // Indexed by rank value (2..=14).
        let mut counts = [0u8; 15];
        for &r in ranks {
            counts[r as usize] += 1;
        }

        let mut summary = Self {
            pairs: 0,
            highest_pair: 0,
            three_kind: false,
            four_kind: false,
        };
        for (rank, &count) in counts.iter().enumerate() {
            match count {
                2 => {
                    summary.pairs += 1;
                    summary.highest_pair = summary.highest_pair.max(rank as u8);
                }
                3 => summary.three_kind = true,
                4 => summary.four_kind = true,
                _ => {}
            }
        }
        summary
    }
}

/// Evaluate a 5-card hand into its 5 Shot payout category.
pub fn evaluate_hand(cards: &[Card]) -> Result<FiveCardHandPayoutRank, GameError> {
    let cards: &[Card; FIVE_CARD_HAND_SIZE] =
        cards.try_into().map_err(|_| GameError::WrongHandSize {
            hand: "five card",
            expected: FIVE_CARD_HAND_SIZE,
            actual: cards.len(),
        })?;

    let mut ranks = (*cards).map(|c| c.rank.value());
    ranks.sort_unstable();

    let suit = cards[0].suit;
    let is_flush = cards.iter().all(|c| c.suit == suit);

    let has_duplicates = ranks.windows(2).any(|w| w[0] == w[1]);
    let is_straight = !has_duplicates && (ranks[4] - ranks[0] == 4 || ranks == WHEEL);
    let is_royal = ranks == ROYAL;

    let counts = RankCounts::from_ranks(&ranks);

    let hand = if is_royal && is_flush {
        FiveCardHandPayoutRank::RoyalFlush
    } else if is_straight && is_flush {
        FiveCardHandPayoutRank::StraightFlush
    } else if counts.four_kind {
        FiveCardHandPayoutRank::FourOfAKind
    } else if counts.three_kind && counts.pairs == 1 {
        FiveCardHandPayoutRank::FullHouse
    } else if is_flush {
        FiveCardHandPayoutRank::Flush
    } else if is_straight {
        FiveCardHandPayoutRank::Straight
    } else if counts.three_kind {
        FiveCardHandPayoutRank::ThreeOfAKind
    } else if counts.pairs == 2 {
        FiveCardHandPayoutRank::TwoPair
    } else if counts.pairs == 1 && counts.highest_pair >= Rank::Ten as u8 {
        FiveCardHandPayoutRank::PairTensOrBetter
    } else {
        FiveCardHandPayoutRank::AllOther
    };

    Ok(hand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casino::deck::create_deck;
    use crate::mocks::hand;

    fn rank_of(text: &str) -> FiveCardHandPayoutRank {
        evaluate_hand(&hand(text)).unwrap()
    }

    #[test]
    fn test_royal_flush_only_when_suited() {
        assert_eq!(rank_of("Th Jh Qh Kh Ah"), FiveCardHandPayoutRank::RoyalFlush);
        assert_eq!(rank_of("Ah Kh Qh Jh Th"), FiveCardHandPayoutRank::RoyalFlush);
        assert_eq!(rank_of("Th Jh Qh Kh As"), FiveCardHandPayoutRank::Straight);
    }

    #[test]
    fn test_straight_flush() {
        assert_eq!(rank_of("9c Tc Jc Qc Kc"), FiveCardHandPayoutRank::StraightFlush);
        assert_eq!(rank_of("Ad 2d 3d 4d 5d"), FiveCardHandPayoutRank::StraightFlush);
    }

    #[test]
    fn test_wheel_is_straight() {
        assert_eq!(rank_of("2c 3d 4h 5s Ac"), FiveCardHandPayoutRank::Straight);
        assert_eq!(rank_of("Ac 5d 3h 4s 2c"), FiveCardHandPayoutRank::Straight);
        // No wrap-around through the Ace.
        assert_eq!(rank_of("Qc Kd Ah 2s 3c"), FiveCardHandPayoutRank::AllOther);
    }

    #[test]
    fn test_made_hands() {
        assert_eq!(rank_of("9c 9d 9h 9s 2c"), FiveCardHandPayoutRank::FourOfAKind);
        assert_eq!(rank_of("9c 9d 9h 2s 2c"), FiveCardHandPayoutRank::FullHouse);
        assert_eq!(rank_of("2s 5s 9s Js Ks"), FiveCardHandPayoutRank::Flush);
        assert_eq!(rank_of("6c 7d 8h 9s Tc"), FiveCardHandPayoutRank::Straight);
        assert_eq!(rank_of("9c 9d 9h 2s 4c"), FiveCardHandPayoutRank::ThreeOfAKind);
        assert_eq!(rank_of("9c 9d 4h 4s Ac"), FiveCardHandPayoutRank::TwoPair);
    }

    #[test]
    fn test_pair_threshold_is_tens() {
        assert_eq!(rank_of("9c 9d 2h 5s Ac"), FiveCardHandPayoutRank::AllOther);
        assert_eq!(rank_of("Tc Td 2h 5s Ac"), FiveCardHandPayoutRank::PairTensOrBetter);
        assert_eq!(rank_of("Ac Ad 2h 5s 7c"), FiveCardHandPayoutRank::PairTensOrBetter);
        // Two low pairs still pay as two pair.
        assert_eq!(rank_of("2c 2d 3h 3s 7c"), FiveCardHandPayoutRank::TwoPair);
    }

    #[test]
    fn test_high_card_is_all_other() {
        assert_eq!(rank_of("2c 5d 9h Js Kc"), FiveCardHandPayoutRank::AllOther);
    }

    #[test]
    fn test_wrong_hand_size() {
        assert_eq!(
            evaluate_hand(&hand("Ah Kh Qh")),
            Err(GameError::WrongHandSize {
                hand: "five card",
                expected: 5,
                actual: 3,
            })
        );
        assert!(matches!(
            evaluate_hand(&hand("Ah Kh Qh Jh Th 9h")),
            Err(GameError::WrongHandSize { actual: 6, .. })
        ));
    }

    #[test]
    fn test_all_hands_category_counts() {
        let deck = create_deck();
        let mut counts = [0u32; 10];
        let n = deck.len();
        for a in 0..n {
            for b in (a + 1)..n {
                for c in (b + 1)..n {
                    for d in (c + 1)..n {
                        for e in (d + 1)..n {
                            let hand = [deck[a], deck[b], deck[c], deck[d], deck[e]];
                            let rank = evaluate_hand(&hand).unwrap();
                            counts[rank as usize] += 1;
                        }
                    }
                }
            }
        }

        assert_eq!(counts[FiveCardHandPayoutRank::RoyalFlush as usize], 4);
        assert_eq!(counts[FiveCardHandPayoutRank::StraightFlush as usize], 36);
        assert_eq!(counts[FiveCardHandPayoutRank::FourOfAKind as usize], 624);
        assert_eq!(counts[FiveCardHandPayoutRank::FullHouse as usize], 3_744);
        assert_eq!(counts[FiveCardHandPayoutRank::Flush as usize], 5_108);
        assert_eq!(counts[FiveCardHandPayoutRank::Straight as usize], 10_200);
        assert_eq!(counts[FiveCardHandPayoutRank::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[FiveCardHandPayoutRank::TwoPair as usize], 123_552);
        assert_eq!(counts[FiveCardHandPayoutRank::PairTensOrBetter as usize], 422_400);
        assert_eq!(counts[FiveCardHandPayoutRank::AllOther as usize], 1_978_380);
    }
}
