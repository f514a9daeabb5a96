//! Three card hand evaluation for the 1st, 2nd and 3rd Shot.
//!
//! Precedence (first match wins): Mini Royal (suited A-K-Q), Straight Flush,
//! Three of a Kind, Straight, Flush, Pair, High Card. Both A-2-3 and Q-K-A
//! count as straights.

use super::GameError;
use threeshot_types::casino::{Card, Rank, ThreeCardHandRank, THREE_CARD_HAND_SIZE};

const MINI_ROYAL: [u8; 3] = [Rank::Queen as u8, Rank::King as u8, Rank::Ace as u8];
const WHEEL: [u8; 3] = [Rank::Two as u8, Rank::Three as u8, Rank::Ace as u8];

fn is_straight(sorted: &[u8; 3]) -> bool {
    let [r0, r1, r2] = *sorted;
    if r0 == r1 || r1 == r2 {
        return false;
    }
    (r0 + 1 == r1 && r1 + 1 == r2) || *sorted == WHEEL || *sorted == MINI_ROYAL
}

/// Evaluate a 3-card hand.
pub fn evaluate_hand(cards: &[Card]) -> Result<ThreeCardHandRank, GameError> {
    let cards: &[Card; THREE_CARD_HAND_SIZE] =
        cards.try_into().map_err(|_| GameError::WrongHandSize {
            hand: "three card",
            expected: THREE_CARD_HAND_SIZE,
            actual: cards.len(),
        })?;

    let mut ranks = (*cards).map(|c| c.rank.value());
    ranks.sort_unstable();

    let is_flush = cards[0].suit == cards[1].suit && cards[1].suit == cards[2].suit;
    let is_straight = is_straight(&ranks);
    let is_trips = ranks[0] == ranks[2];
    let is_pair = ranks[0] == ranks[1] || ranks[1] == ranks[2];

    let hand_rank = if is_flush && ranks == MINI_ROYAL {
        ThreeCardHandRank::MiniRoyal
    } else if is_flush && is_straight {
        ThreeCardHandRank::StraightFlush
    } else if is_trips {
        ThreeCardHandRank::ThreeOfAKind
    } else if is_straight {
        ThreeCardHandRank::Straight
    } else if is_flush {
        ThreeCardHandRank::Flush
    } else if is_pair {
        ThreeCardHandRank::Pair
    } else {
        ThreeCardHandRank::HighCard
    };

    Ok(hand_rank)
}
